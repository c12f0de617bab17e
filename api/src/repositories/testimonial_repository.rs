use chrono::Utc;
use sea_orm::prelude::*;
use sea_orm::{ActiveValue::NotSet, QueryOrder, Set};
use shared::entity::testimonials;
use std::sync::Arc;

pub struct TestimonialRepository {
    db: Arc<DatabaseConnection>,
}

impl TestimonialRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn insert(
        &self,
        author: String,
        text: String,
        rating: i16,
    ) -> Result<testimonials::Model, DbErr> {
        let record = testimonials::ActiveModel {
            id: NotSet,
            author: Set(author),
            text: Set(text),
            rating: Set(rating),
            created_at: Set(Utc::now()),
        };
        record.insert(self.db.as_ref()).await
    }

    pub async fn list_all(&self) -> Result<Vec<testimonials::Model>, DbErr> {
        testimonials::Entity::find()
            .order_by_desc(testimonials::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
    }

    pub async fn exists_by_author(&self, author: &str) -> Result<bool, DbErr> {
        let count = testimonials::Entity::find()
            .filter(testimonials::Column::Author.eq(author))
            .count(self.db.as_ref())
            .await?;
        Ok(count > 0)
    }
}
