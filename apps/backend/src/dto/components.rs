//! Component response payloads.
//!
//! Dimensions are computed from the entity on every read, never persisted.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::dimensions::{Dimensions, FoldedDimensions, BOARD_SHAPE_BLEED_MM};
use crate::domain::size_config::{card_dimensions, BoardSize, MatSize};
use crate::entities::cards::{self, CardSize};
use crate::entities::dice::{self, DiceColor, DiceType};
use crate::entities::game_boards::{self, GameBoardSize};
use crate::entities::player_mats::{self, PlayerMatSize};
use crate::errors::domain::DomainError;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionsBody {
    pub width_mm: f64,
    pub height_mm: f64,
    pub bleed_mm: f64,
    pub dpi: u32,
    pub width_px: u32,
    pub height_px: u32,
}

impl From<Dimensions> for DimensionsBody {
    fn from(d: Dimensions) -> Self {
        Self {
            width_mm: d.width_mm,
            height_mm: d.height_mm,
            bleed_mm: d.bleed_mm,
            dpi: d.dpi,
            width_px: d.width_px(),
            height_px: d.height_px(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoldedDimensionsBody {
    pub width_mm: f64,
    pub height_mm: f64,
    pub thickness_mm: f64,
}

impl From<FoldedDimensions> for FoldedDimensionsBody {
    fn from(d: FoldedDimensions) -> Self {
        Self {
            width_mm: d.width_mm,
            height_mm: d.height_mm,
            thickness_mm: d.thickness_mm,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardResponse {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Uuid>,
    pub name: String,
    pub size: CardSize,
    pub size_name: String,
    pub horizontal: bool,
    pub dimensions: DimensionsBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_design: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_design: Option<serde_json::Value>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<&cards::Model> for CardResponse {
    fn from(card: &cards::Model) -> Self {
        Self {
            id: card.id,
            project_id: card.project_id,
            name: card.name.clone(),
            size: card.size,
            size_name: card.size.display_name().to_string(),
            horizontal: card.horizontal,
            dimensions: card_dimensions(card.size, card.horizontal).into(),
            front_design: card.front_design.clone(),
            back_design: card.back_design.clone(),
            created_at: card.created_at,
            updated_at: card.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceResponse {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Uuid>,
    pub name: String,
    pub dice_type: DiceType,
    pub type_name: String,
    pub width_mm: f64,
    pub height_mm: f64,
    pub depth_mm: f64,
    pub color: DiceColor,
    pub color_name: String,
    pub color_hex: String,
    pub colorblind_friendly: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_design: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_design: Option<serde_json::Value>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<&dice::Model> for DiceResponse {
    fn from(die: &dice::Model) -> Self {
        Self {
            id: die.id,
            project_id: die.project_id,
            name: die.name.clone(),
            dice_type: die.dice_type,
            type_name: die.dice_type.display_name().to_string(),
            width_mm: die.dice_type.width_mm(),
            height_mm: die.dice_type.height_mm(),
            depth_mm: die.dice_type.depth_mm(),
            color: die.color,
            color_name: die.color.display_name().to_string(),
            color_hex: die.color.hex().to_string(),
            colorblind_friendly: die.color.colorblind_friendly(),
            front_design: die.front_design.clone(),
            back_design: die.back_design.clone(),
            created_at: die.created_at,
            updated_at: die.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMatResponse {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Uuid>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<PlayerMatSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_name: Option<String>,
    pub horizontal: bool,
    pub dimensions: DimensionsBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_design: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_design: Option<serde_json::Value>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl TryFrom<&player_mats::Model> for PlayerMatResponse {
    type Error = DomainError;

    fn try_from(mat: &player_mats::Model) -> Result<Self, Self::Error> {
        let size_config = MatSize::try_from(mat)?;
        Ok(Self {
            id: mat.id,
            project_id: mat.project_id,
            name: mat.name.clone(),
            size: mat.size,
            size_name: mat.size.map(|s| s.display_name().to_string()),
            horizontal: mat.horizontal,
            dimensions: size_config.dimensions().into(),
            front_design: mat.front_design.clone(),
            back_design: mat.back_design.clone(),
            created_at: mat.created_at,
            updated_at: mat.updated_at,
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameBoardResponse {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Uuid>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<GameBoardSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_name: Option<String>,
    pub horizontal: bool,
    pub dimensions: DimensionsBody,
    pub folded: FoldedDimensionsBody,
    /// Bleed of the base cut shape; distinct from `dimensions.bleedMm`.
    pub shape_bleed_mm: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_design: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_design: Option<serde_json::Value>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl TryFrom<&game_boards::Model> for GameBoardResponse {
    type Error = DomainError;

    fn try_from(board: &game_boards::Model) -> Result<Self, Self::Error> {
        let size_config = BoardSize::try_from(board)?;
        Ok(Self {
            id: board.id,
            project_id: board.project_id,
            name: board.name.clone(),
            size: board.size,
            size_name: board.size.map(|s| s.display_name().to_string()),
            horizontal: board.horizontal,
            dimensions: size_config.dimensions().into(),
            folded: size_config.folded_dimensions().into(),
            shape_bleed_mm: BOARD_SHAPE_BLEED_MM,
            front_design: board.front_design.clone(),
            back_design: board.back_design.clone(),
            created_at: board.created_at,
            updated_at: board.updated_at,
        })
    }
}
