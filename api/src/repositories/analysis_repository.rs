use chrono::Utc;
use sea_orm::prelude::*;
use sea_orm::{QueryOrder, Set};
use shared::entity::analyses;
use std::sync::Arc;

pub struct AnalysisRepository {
    db: Arc<DatabaseConnection>,
}

impl AnalysisRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn insert(
        &self,
        user_uid: Uuid,
        pair: String,
        timeframe: String,
        risk: String,
        ai_text: String,
        parsed_json: Json,
    ) -> Result<analyses::Model, DbErr> {
        let record = analyses::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_uid: Set(user_uid),
            pair: Set(pair),
            timeframe: Set(timeframe),
            risk: Set(risk),
            ai_text: Set(ai_text),
            parsed_json: Set(parsed_json),
            created_at: Set(Utc::now()),
        };
        record.insert(self.db.as_ref()).await
    }

    pub async fn list_by_user(&self, user_uid: Uuid) -> Result<Vec<analyses::Model>, DbErr> {
        analyses::Entity::find()
            .filter(analyses::Column::UserUid.eq(user_uid))
            .order_by_desc(analyses::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
    }

    pub async fn delete_by_id(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = analyses::Entity::delete_by_id(id).exec(self.db.as_ref()).await?;
        Ok(result.rows_affected)
    }
}
