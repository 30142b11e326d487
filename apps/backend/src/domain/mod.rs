//! Domain layer: size catalogs and physical-dimension geometry.
//!
//! Everything here is pure and synchronous; persistence and transport live
//! elsewhere. Catalog accessors are implemented as inherent methods on the
//! entity-side preset enums, keeping lookup totality a compile-time fact.

pub mod card_size;
pub mod dice;
pub mod dimensions;
pub mod game_board_size;
pub mod player_mat_size;
pub mod size_config;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_dimensions;
#[cfg(test)]
mod tests_folding;
#[cfg(test)]
mod tests_props_geometry;
#[cfg(test)]
mod tests_size_config;

// Re-exports for ergonomics
pub use dimensions::{
    Dimensions, FoldedDimensions, BASE_BOARD_THICKNESS_MM, BLEED_MM, BOARD_SHAPE_BLEED_MM,
    DEFAULT_DPI,
};
pub use size_config::{card_dimensions, BoardSize, MatSize};
