use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Catalog of printable card sizes. Physical measurements live in
/// `crate::domain::card_size`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "card_size")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardSize {
    #[sea_orm(string_value = "STANDARD_POKER")]
    StandardPoker,
    #[sea_orm(string_value = "STANDARD_BRIDGE")]
    StandardBridge,
    #[sea_orm(string_value = "STANDARD_EUROPEAN")]
    StandardEuropean,
    #[sea_orm(string_value = "MINI_AMERICAN")]
    MiniAmerican,
    #[sea_orm(string_value = "MINI_EUROPEAN")]
    MiniEuropean,
    #[sea_orm(string_value = "TAROT")]
    Tarot,
    #[sea_orm(string_value = "JUMBO")]
    Jumbo,
    #[sea_orm(string_value = "SQUARE")]
    Square,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cards")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_name = "project_id")]
    pub project_id: Option<Uuid>,
    #[sea_orm(column_name = "created_by")]
    pub created_by: Uuid,
    pub name: String,
    pub size: CardSize,
    pub horizontal: bool,
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
