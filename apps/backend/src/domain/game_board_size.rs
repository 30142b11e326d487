//! Physical measurements and fold derivation for the game board catalog.
//!
//! Boards are stored landscape-first: the catalog holds the landscape width
//! and height, and orientation swaps the two without re-deriving size.
//! A quad-fold board always has exactly one crease per axis; a bi-fold board
//! has its single crease oriented by landscape/portrait.

use crate::entities::game_boards::GameBoardSize;

impl GameBoardSize {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::SmallBifoldSquare => "Small Bi-fold (Square)",
            Self::MediumBifoldSquare => "Medium Bi-fold (Square)",
            Self::LargeBifoldSquare => "Large Bi-fold (Square)",
            Self::SmallQuadFoldSquare => "Small Quad-fold (Square)",
            Self::MediumQuadFoldSquare => "Medium Quad-fold (Square)",
            Self::LargeQuadFoldSquare => "Large Quad-fold (Square)",
            Self::LargeQuadFoldRectangle => "Large Quad-fold (Rectangle)",
        }
    }

    pub fn landscape_width_mm(&self) -> f64 {
        match self {
            Self::SmallBifoldSquare => 304.8,
            Self::MediumBifoldSquare => 457.2,
            Self::LargeBifoldSquare => 609.6,
            Self::SmallQuadFoldSquare => 304.8,
            Self::MediumQuadFoldSquare => 457.2,
            Self::LargeQuadFoldSquare => 609.6,
            Self::LargeQuadFoldRectangle => 914.4,
        }
    }

    pub fn landscape_height_mm(&self) -> f64 {
        match self {
            Self::SmallBifoldSquare => 152.4,
            Self::MediumBifoldSquare => 228.6,
            Self::LargeBifoldSquare => 304.8,
            Self::SmallQuadFoldSquare => 304.8,
            Self::MediumQuadFoldSquare => 457.2,
            Self::LargeQuadFoldSquare => 609.6,
            Self::LargeQuadFoldRectangle => 609.6,
        }
    }

    pub fn is_quad_fold(&self) -> bool {
        matches!(
            self,
            Self::SmallQuadFoldSquare
                | Self::MediumQuadFoldSquare
                | Self::LargeQuadFoldSquare
                | Self::LargeQuadFoldRectangle
        )
    }

    /// Effective width for the given orientation.
    pub fn width_mm(&self, horizontal: bool) -> f64 {
        if horizontal {
            self.landscape_width_mm()
        } else {
            self.landscape_height_mm()
        }
    }

    /// Effective height for the given orientation.
    pub fn height_mm(&self, horizontal: bool) -> f64 {
        if horizontal {
            self.landscape_height_mm()
        } else {
            self.landscape_width_mm()
        }
    }

    /// Number of creases parallel to the height axis (each halves the width
    /// when folded).
    pub fn vertical_folds(&self, horizontal: bool) -> u8 {
        if self.is_quad_fold() {
            1
        } else if horizontal {
            1
        } else {
            0
        }
    }

    /// Number of creases parallel to the width axis (each halves the height
    /// when folded).
    pub fn horizontal_folds(&self, horizontal: bool) -> u8 {
        if self.is_quad_fold() {
            1
        } else if horizontal {
            0
        } else {
            1
        }
    }
}
