use sea_orm::prelude::*;
use sea_orm::QueryOrder;
use shared::entity::members;
use std::sync::Arc;

pub struct MemberRepository {
    db: Arc<DatabaseConnection>,
}

impl MemberRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<members::Model>, DbErr> {
        members::Entity::find_by_id(id).one(self.db.as_ref()).await
    }

    pub async fn find_by_uid(&self, uid: Uuid) -> Result<Option<members::Model>, DbErr> {
        members::Entity::find()
            .filter(members::Column::Uid.eq(uid))
            .one(self.db.as_ref())
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<members::Model>, DbErr> {
        members::Entity::find()
            .filter(members::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
    }

    pub async fn create(&self, active_model: members::ActiveModel) -> Result<members::Model, DbErr> {
        members::Entity::insert(active_model)
            .exec_with_returning(self.db.as_ref())
            .await
    }

    pub async fn update(&self, active_model: members::ActiveModel) -> Result<members::Model, DbErr> {
        active_model.update(self.db.as_ref()).await
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<u64, DbErr> {
        let result = members::Entity::delete_by_id(id).exec(self.db.as_ref()).await?;
        Ok(result.rows_affected)
    }

    pub async fn list_all(&self) -> Result<Vec<members::Model>, DbErr> {
        members::Entity::find()
            .order_by_desc(members::Column::Id)
            .all(self.db.as_ref())
            .await
    }
}
