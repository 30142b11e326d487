//! Physical measurements for the player mat size catalog.

use crate::entities::player_mats::PlayerMatSize;

impl PlayerMatSize {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::A5 => "A5",
            Self::A4 => "A4",
            Self::A3 => "A3",
            Self::Letter => "US Letter",
            Self::HalfLetter => "Half Letter",
        }
    }

    /// Portrait width. Orientation is applied by the dimension resolver.
    pub fn width_mm(&self) -> f64 {
        match self {
            Self::A5 => 148.0,
            Self::A4 => 210.0,
            Self::A3 => 297.0,
            Self::Letter => 215.9,
            Self::HalfLetter => 139.7,
        }
    }

    /// Portrait height.
    pub fn height_mm(&self) -> f64 {
        match self {
            Self::A5 => 210.0,
            Self::A4 => 297.0,
            Self::A3 => 420.0,
            Self::Letter => 279.4,
            Self::HalfLetter => 215.9,
        }
    }
}
