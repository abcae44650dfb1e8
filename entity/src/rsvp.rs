use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rsvp")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub attendance: Attendance,
    pub guest_count: i32,
    pub dietary_restrictions: Option<String>, // NULL when the guest left it blank
    pub message: Option<String>,
    pub created_at: DateTimeUtc,
}

/// Guest response. Anything else fails validation before reaching storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum Attendance {
    #[sea_orm(string_value = "attending")]
    Attending,
    #[sea_orm(string_value = "declining")]
    Declining,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
