//! Computed physical dimensions for printable components.
//!
//! Dimensions are derived on every read and never persisted.

use serde::{Deserialize, Serialize};

pub const MM_PER_INCH: f64 = 25.4;

/// Raster resolution used for derived pixel sizes.
pub const DEFAULT_DPI: u32 = 300;

/// Print trimming margin added around the nominal design area of cards,
/// player mats and game boards.
pub const BLEED_MM: f64 = 3.0;

/// Bleed of a game board's base cut shape. Distinct from [`BLEED_MM`]:
/// the rectangle shape itself carries no bleed, the computed dimensions do.
pub const BOARD_SHAPE_BLEED_MM: f64 = 0.0;

/// Thickness of a single unfolded board panel.
pub const BASE_BOARD_THICKNESS_MM: f64 = 2.5;

/// Unfolded size of a component, plus the raster parameters clients need
/// to size editor canvases and exports.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width_mm: f64,
    pub height_mm: f64,
    pub bleed_mm: f64,
    pub dpi: u32,
}

impl Dimensions {
    pub fn new(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_mm,
            height_mm,
            bleed_mm: BLEED_MM,
            dpi: DEFAULT_DPI,
        }
    }

    pub fn width_px(&self) -> u32 {
        mm_to_px(self.width_mm, self.dpi)
    }

    pub fn height_px(&self) -> u32 {
        mm_to_px(self.height_mm, self.dpi)
    }
}

/// Folded size of a game board. Each crease halves one axis and doubles the
/// layer count; thickness scales with the total layer count, so the exponent
/// is the sum of both fold counts.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoldedDimensions {
    pub width_mm: f64,
    pub height_mm: f64,
    pub thickness_mm: f64,
}

// Ties round to even, not away from zero; exports depend on stable pixel
// sizes at exact .5 boundaries.
pub fn mm_to_px(mm: f64, dpi: u32) -> u32 {
    (mm / MM_PER_INCH * f64::from(dpi)).round_ties_even() as u32
}
