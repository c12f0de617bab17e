use chrono::Utc;
use sea_orm::prelude::*;
use sea_orm::{ActiveValue::NotSet, QueryOrder, QuerySelect, Set};
use shared::entity::admin_logs;
use std::sync::Arc;

pub struct AdminLogRepository {
    db: Arc<DatabaseConnection>,
}

impl AdminLogRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn append(
        &self,
        action: &str,
        target_email: Option<String>,
        performed_by: &str,
        details: Option<Json>,
    ) -> Result<admin_logs::Model, DbErr> {
        let record = admin_logs::ActiveModel {
            id: NotSet,
            action: Set(action.to_string()),
            target_email: Set(target_email),
            performed_by: Set(performed_by.to_string()),
            performed_at: Set(Utc::now()),
            details: Set(details),
        };
        record.insert(self.db.as_ref()).await
    }

    pub async fn recent(&self, limit: u64) -> Result<Vec<admin_logs::Model>, DbErr> {
        admin_logs::Entity::find()
            .order_by_desc(admin_logs::Column::PerformedAt)
            .limit(limit)
            .all(self.db.as_ref())
            .await
    }
}
