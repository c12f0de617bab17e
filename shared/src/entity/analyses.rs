//! `SeaORM` Entity for stored chart analyses.
//!
//! `parsed_json` holds the serialized `Analysis` verbatim; read-back trusts
//! the blob and never re-runs the extractor.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "analyses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_uid: Uuid,
    pub pair: String,
    pub timeframe: String,
    pub risk: String,
    #[sea_orm(column_type = "Text")]
    pub ai_text: String,
    pub parsed_json: Json,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::members::Entity",
        from = "Column::UserUid",
        to = "super::members::Column::Uid",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Members,
}

impl Related<super::members::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Members.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
