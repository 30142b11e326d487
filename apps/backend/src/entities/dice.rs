use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Catalog of manufacturable die blanks. Physical measurements live in
/// `crate::domain::dice`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "dice_type")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiceType {
    #[sea_orm(string_value = "SMALL")]
    Small,
    #[sea_orm(string_value = "MEDIUM")]
    Medium,
    #[sea_orm(string_value = "LARGE")]
    Large,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "dice_color")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiceColor {
    #[sea_orm(string_value = "WHITE")]
    White,
    #[sea_orm(string_value = "BLACK")]
    Black,
    #[sea_orm(string_value = "RED")]
    Red,
    #[sea_orm(string_value = "ORANGE")]
    Orange,
    #[sea_orm(string_value = "YELLOW")]
    Yellow,
    #[sea_orm(string_value = "GREEN")]
    Green,
    #[sea_orm(string_value = "BLUE")]
    Blue,
    #[sea_orm(string_value = "PURPLE")]
    Purple,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dice")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_name = "project_id")]
    pub project_id: Option<Uuid>,
    #[sea_orm(column_name = "created_by")]
    pub created_by: Uuid,
    pub name: String,
    #[sea_orm(column_name = "dice_type")]
    pub dice_type: DiceType,
    pub color: DiceColor,
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
