use anyhow::Result;
use axum::routing::{delete, get, patch, post};
use axum::Router;
use migration::{Migrator, MigratorTrait};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

mod error;
mod handlers;
mod repositories;
mod services;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("Starting Chart Analyst API server...");

    let state = AppState::new().await?;

    Migrator::up(state.db.as_ref(), None).await?;
    info!("Database migrations applied");

    // The SPA bundle is served straight from disk; everything under /api is
    // the JSON surface the frontend talks to.
    let static_dir = state.config.static_dir.clone();
    info!("Serving frontend assets from: {static_dir}");

    let app = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/auth", post(handlers::auth::auth))
        .route("/api/analyze", post(handlers::analyze::analyze))
        .route(
            "/api/analyses",
            post(handlers::analyses::save_analysis).get(handlers::analyses::list_analyses),
        )
        .route("/api/analyses/:id", delete(handlers::analyses::delete_analysis))
        .route(
            "/api/testimonials",
            get(handlers::testimonials::list_testimonials)
                .post(handlers::testimonials::submit_testimonial),
        )
        .route(
            "/api/admin/members",
            get(handlers::admin::list_members).post(handlers::admin::add_member),
        )
        .route(
            "/api/admin/members/:id",
            patch(handlers::admin::toggle_member).delete(handlers::admin::delete_member),
        )
        .route("/api/admin/logs", get(handlers::admin::list_logs))
        .fallback_service(ServeDir::new(&static_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind(&state.config.listen_addr).await?;
    info!("API server listening on http://{}", state.config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
