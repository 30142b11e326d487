//! Domain-level view of a component's size configuration.
//!
//! Entities store size dual-mode across nullable columns: a preset column,
//! or custom width/height columns. These sum types make the active mode
//! explicit so the resolver never sees a half-populated row; conversion from
//! the flat representation happens here, at the persistence boundary.
//! A preset row may still carry stale custom values; the preset wins and the
//! custom columns are ignored.

use crate::domain::dimensions::{Dimensions, FoldedDimensions, BASE_BOARD_THICKNESS_MM};
use crate::entities::cards::CardSize;
use crate::entities::game_boards::{self, GameBoardSize};
use crate::entities::player_mats::{self, PlayerMatSize};
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Resolve a card's dimensions. Cards are preset-only, so there is no sum
/// type to go through.
pub fn card_dimensions(size: CardSize, horizontal: bool) -> Dimensions {
    if horizontal {
        Dimensions::new(size.height_mm(), size.width_mm())
    } else {
        Dimensions::new(size.width_mm(), size.height_mm())
    }
}

/// Size configuration of a player mat.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MatSize {
    Preset { size: PlayerMatSize, horizontal: bool },
    Custom { width_mm: f64, height_mm: f64 },
}

impl MatSize {
    pub fn dimensions(&self) -> Dimensions {
        match *self {
            Self::Preset { size, horizontal } => {
                if horizontal {
                    Dimensions::new(size.height_mm(), size.width_mm())
                } else {
                    Dimensions::new(size.width_mm(), size.height_mm())
                }
            }
            Self::Custom {
                width_mm,
                height_mm,
            } => Dimensions::new(width_mm, height_mm),
        }
    }
}

impl TryFrom<&player_mats::Model> for MatSize {
    type Error = DomainError;

    fn try_from(mat: &player_mats::Model) -> Result<Self, Self::Error> {
        if let Some(size) = mat.size {
            return Ok(Self::Preset {
                size,
                horizontal: mat.horizontal,
            });
        }
        match (mat.custom_width_mm, mat.custom_height_mm) {
            (Some(width_mm), Some(height_mm)) => Ok(Self::Custom {
                width_mm,
                height_mm,
            }),
            _ => Err(corrupt_size_row("player mat", mat.id)),
        }
    }
}

/// Size configuration of a game board.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BoardSize {
    Preset {
        size: GameBoardSize,
        horizontal: bool,
    },
    Custom {
        width_mm: f64,
        height_mm: f64,
        horizontal_folds: u8,
        vertical_folds: u8,
    },
}

impl BoardSize {
    pub fn dimensions(&self) -> Dimensions {
        match *self {
            Self::Preset { size, horizontal } => {
                Dimensions::new(size.width_mm(horizontal), size.height_mm(horizontal))
            }
            Self::Custom {
                width_mm,
                height_mm,
                ..
            } => Dimensions::new(width_mm, height_mm),
        }
    }

    /// Effective (horizontal, vertical) crease counts.
    pub fn fold_counts(&self) -> (u8, u8) {
        match *self {
            Self::Preset { size, horizontal } => (
                size.horizontal_folds(horizontal),
                size.vertical_folds(horizontal),
            ),
            Self::Custom {
                horizontal_folds,
                vertical_folds,
                ..
            } => (horizontal_folds, vertical_folds),
        }
    }

    pub fn folded_dimensions(&self) -> FoldedDimensions {
        let unfolded = self.dimensions();
        let (horizontal_folds, vertical_folds) = self.fold_counts();
        let (h, v) = (i32::from(horizontal_folds), i32::from(vertical_folds));
        FoldedDimensions {
            width_mm: unfolded.width_mm / 2f64.powi(v),
            height_mm: unfolded.height_mm / 2f64.powi(h),
            // Exponent is the total crease count: every crease doubles the
            // layer count regardless of axis.
            thickness_mm: BASE_BOARD_THICKNESS_MM * 2f64.powi(h + v),
        }
    }
}

impl TryFrom<&game_boards::Model> for BoardSize {
    type Error = DomainError;

    fn try_from(board: &game_boards::Model) -> Result<Self, Self::Error> {
        if let Some(size) = board.size {
            return Ok(Self::Preset {
                size,
                horizontal: board.horizontal,
            });
        }
        let (width_mm, height_mm) = match (board.custom_width_mm, board.custom_height_mm) {
            (Some(w), Some(h)) => (w, h),
            _ => return Err(corrupt_size_row("game board", board.id)),
        };
        Ok(Self::Custom {
            width_mm,
            height_mm,
            horizontal_folds: fold_count(board.custom_horizontal_folds, board.id)?,
            vertical_folds: fold_count(board.custom_vertical_folds, board.id)?,
        })
    }
}

fn fold_count(stored: Option<i16>, id: uuid::Uuid) -> Result<u8, DomainError> {
    match stored {
        None => Ok(0),
        Some(n) => u8::try_from(n).map_err(|_| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("game board {id} has an out-of-range fold count"),
            )
        }),
    }
}

// A row with neither a preset nor both custom dimensions cannot be produced
// through the configurators; treat it as corruption, not user error.
fn corrupt_size_row(family: &str, id: uuid::Uuid) -> DomainError {
    DomainError::infra(
        InfraErrorKind::DataCorruption,
        format!("{family} {id} has neither a preset size nor custom dimensions"),
    )
}
