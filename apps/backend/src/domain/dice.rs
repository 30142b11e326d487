//! Physical measurements for the dice catalogs.
//!
//! Dice are cubes, so width, height and depth coincide per blank; the three
//! accessors stay separate because the client renders each axis.

use crate::entities::dice::{DiceColor, DiceType};

impl DiceType {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Small => "Small (12mm)",
            Self::Medium => "Medium (16mm)",
            Self::Large => "Large (19mm)",
        }
    }

    pub fn width_mm(&self) -> f64 {
        self.edge_mm()
    }

    pub fn height_mm(&self) -> f64 {
        self.edge_mm()
    }

    pub fn depth_mm(&self) -> f64 {
        self.edge_mm()
    }

    fn edge_mm(&self) -> f64 {
        match self {
            Self::Small => 12.0,
            Self::Medium => 16.0,
            Self::Large => 19.0,
        }
    }
}

impl DiceColor {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
            Self::Red => "Red",
            Self::Orange => "Orange",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Purple => "Purple",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            Self::White => "#FFFFFF",
            Self::Black => "#1C1C1C",
            Self::Red => "#C62828",
            Self::Orange => "#EF6C00",
            Self::Yellow => "#F9A825",
            Self::Green => "#2E7D32",
            Self::Blue => "#1565C0",
            Self::Purple => "#6A1B9A",
        }
    }

    /// Whether the color stays distinguishable under the common forms of
    /// color vision deficiency.
    pub fn colorblind_friendly(&self) -> bool {
        matches!(self, Self::White | Self::Black | Self::Yellow | Self::Blue)
    }
}
