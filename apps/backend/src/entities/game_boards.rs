use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Catalog of folding game board sizes. Physical measurements and fold
/// derivation live in `crate::domain::game_board_size`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "game_board_size")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameBoardSize {
    #[sea_orm(string_value = "SMALL_BIFOLD_SQUARE")]
    SmallBifoldSquare,
    #[sea_orm(string_value = "MEDIUM_BIFOLD_SQUARE")]
    MediumBifoldSquare,
    #[sea_orm(string_value = "LARGE_BIFOLD_SQUARE")]
    LargeBifoldSquare,
    #[sea_orm(string_value = "SMALL_QUAD_FOLD_SQUARE")]
    SmallQuadFoldSquare,
    #[sea_orm(string_value = "MEDIUM_QUAD_FOLD_SQUARE")]
    MediumQuadFoldSquare,
    #[sea_orm(string_value = "LARGE_QUAD_FOLD_SQUARE")]
    LargeQuadFoldSquare,
    #[sea_orm(string_value = "LARGE_QUAD_FOLD_RECTANGLE")]
    LargeQuadFoldRectangle,
}

/// Size is dual-mode: either `size` is set (preset) or both custom width and
/// height columns are set, with optional custom fold counts.
/// `crate::domain::size_config::BoardSize` is the domain-level view.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game_boards")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_name = "project_id")]
    pub project_id: Option<Uuid>,
    #[sea_orm(column_name = "created_by")]
    pub created_by: Uuid,
    pub name: String,
    pub size: Option<GameBoardSize>,
    pub horizontal: bool,
    #[sea_orm(column_name = "custom_width_mm")]
    pub custom_width_mm: Option<f64>,
    #[sea_orm(column_name = "custom_height_mm")]
    pub custom_height_mm: Option<f64>,
    #[sea_orm(column_name = "custom_horizontal_folds", column_type = "SmallInteger")]
    pub custom_horizontal_folds: Option<i16>,
    #[sea_orm(column_name = "custom_vertical_folds", column_type = "SmallInteger")]
    pub custom_vertical_folds: Option<i16>,
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
