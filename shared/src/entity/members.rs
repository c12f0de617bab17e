//! `SeaORM` Entity for activated members.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "members")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub uid: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub activation_code: String,
    pub is_admin: bool,
    pub is_active: bool,
    pub membership_type: String,
    pub plan_type: String,
    pub join_date: DateTimeUtc,
    pub membership_expires_at: Option<DateTimeUtc>,
    pub last_login: Option<DateTimeUtc>,
    #[sea_orm(column_type = "Text", nullable)]
    pub picture_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::analyses::Entity")]
    Analyses,
}

impl Related<super::analyses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Analyses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
