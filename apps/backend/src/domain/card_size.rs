//! Physical measurements for the card size catalog.
//!
//! Every accessor is total over the enum; a new variant without a catalog
//! entry fails to compile.

use crate::entities::cards::CardSize;

impl CardSize {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::StandardPoker => "Standard Poker",
            Self::StandardBridge => "Standard Bridge",
            Self::StandardEuropean => "Standard European",
            Self::MiniAmerican => "Mini American",
            Self::MiniEuropean => "Mini European",
            Self::Tarot => "Tarot",
            Self::Jumbo => "Jumbo",
            Self::Square => "Square",
        }
    }

    /// Portrait width. Orientation is applied by the dimension resolver,
    /// never here.
    pub fn width_mm(&self) -> f64 {
        match self {
            Self::StandardPoker => 63.5,
            Self::StandardBridge => 57.15,
            Self::StandardEuropean => 59.0,
            Self::MiniAmerican => 41.0,
            Self::MiniEuropean => 44.0,
            Self::Tarot => 70.0,
            Self::Jumbo => 88.9,
            Self::Square => 70.0,
        }
    }

    /// Portrait height.
    pub fn height_mm(&self) -> f64 {
        match self {
            Self::StandardPoker => 88.9,
            Self::StandardBridge => 88.9,
            Self::StandardEuropean => 92.0,
            Self::MiniAmerican => 63.0,
            Self::MiniEuropean => 68.0,
            Self::Tarot => 120.0,
            Self::Jumbo => 127.0,
            Self::Square => 70.0,
        }
    }
}
