use shared::{get_db_connection, Config};
use std::sync::Arc;

use crate::repositories::{AnalysisRepository, TestimonialRepository};
use crate::services::{GeminiService, MemberService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Arc<sea_orm::DatabaseConnection>,
    pub gemini: Arc<GeminiService>,
    pub members: Arc<MemberService>,
    pub analyses: Arc<AnalysisRepository>,
    pub testimonials: Arc<TestimonialRepository>,
}

impl AppState {
    pub async fn new() -> Result<Self, anyhow::Error> {
        let config = Config::from_env()?;
        let db = Arc::new(get_db_connection(&config.database_url).await?);
        tracing::info!("Connected to database successfully");

        let gemini = Arc::new(GeminiService::from_config(&config));
        let members = Arc::new(MemberService::new(db.clone()));
        let analyses = Arc::new(AnalysisRepository::new(db.clone()));
        let testimonials = Arc::new(TestimonialRepository::new(db.clone()));

        Ok(AppState {
            config: Arc::new(config),
            db,
            gemini,
            members,
            analyses,
            testimonials,
        })
    }
}
