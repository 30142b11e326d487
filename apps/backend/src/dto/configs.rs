//! Component configuration payloads, as deserialized from API requests.
//!
//! These are the values the configurators validate. Fields mirror the flat
//! entity columns; the domain-level sum types only exist past validation.

use serde::Deserialize;
use uuid::Uuid;

use crate::entities::cards::CardSize;
use crate::entities::dice::{DiceColor, DiceType};
use crate::entities::game_boards::GameBoardSize;
use crate::entities::player_mats::PlayerMatSize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardConfig {
    pub name: String,
    pub size: CardSize,
    #[serde(default)]
    pub horizontal: bool,
    pub sample_id: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceConfig {
    pub name: String,
    pub dice_type: DiceType,
    pub color: DiceColor,
    pub sample_id: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMatConfig {
    pub name: String,
    pub size: Option<PlayerMatSize>,
    #[serde(default)]
    pub horizontal: bool,
    pub custom_width_mm: Option<f64>,
    pub custom_height_mm: Option<f64>,
    pub sample_id: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameBoardConfig {
    pub name: String,
    pub size: Option<GameBoardSize>,
    #[serde(default)]
    pub horizontal: bool,
    pub custom_width_mm: Option<f64>,
    pub custom_height_mm: Option<f64>,
    pub custom_horizontal_folds: Option<u8>,
    pub custom_vertical_folds: Option<u8>,
    pub sample_id: Option<Uuid>,
}
