use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Catalog of player mat sizes. Physical measurements live in
/// `crate::domain::player_mat_size`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "player_mat_size")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerMatSize {
    #[sea_orm(string_value = "A5")]
    A5,
    #[sea_orm(string_value = "A4")]
    A4,
    #[sea_orm(string_value = "A3")]
    A3,
    #[sea_orm(string_value = "LETTER")]
    Letter,
    #[sea_orm(string_value = "HALF_LETTER")]
    HalfLetter,
}

/// Size is dual-mode: either `size` is set (preset) or both custom columns
/// are set. `crate::domain::size_config::MatSize` is the domain-level view.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "player_mats")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_name = "project_id")]
    pub project_id: Option<Uuid>,
    #[sea_orm(column_name = "created_by")]
    pub created_by: Uuid,
    pub name: String,
    pub size: Option<PlayerMatSize>,
    pub horizontal: bool,
    #[sea_orm(column_name = "custom_width_mm")]
    pub custom_width_mm: Option<f64>,
    #[sea_orm(column_name = "custom_height_mm")]
    pub custom_height_mm: Option<f64>,
    #[sea_orm(column_name = "front_design")]
    pub front_design: Option<Json>,
    #[sea_orm(column_name = "back_design")]
    pub back_design: Option<Json>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
