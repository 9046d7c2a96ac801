use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::Router;
use serde_json::json;
use sqlx::PgPool;
use tracing::info;

use mentor_api_rust::config;
use mentor_api_rust::database::manager::DatabaseManager;
use mentor_api_rust::database::repository::{PgMentorRepository, PgSkillRepository};
use mentor_api_rust::handlers::{self, AppState};
use mentor_api_rust::services::{MentorService, ServiceOptions, SkillService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    info!("Starting Mentor API in {:?} mode", config.environment);

    let pool = DatabaseManager::connect(&config.database).await?;
    DatabaseManager::ensure_schema(&pool).await?;

    let state = AppState {
        mentors: Arc::new(MentorService::new(
            Arc::new(PgMentorRepository::new(pool.clone())),
            ServiceOptions::from_config(config),
        )),
        skills: Arc::new(SkillService::new(Arc::new(PgSkillRepository::new(
            pool.clone(),
        )))),
    };

    let app = handlers::app(state).merge(health_routes(pool));

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Mentor API listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

fn health_routes(pool: PgPool) -> Router {
    Router::new().route("/health", get(health)).with_state(pool)
}

async fn health(State(pool): State<PgPool>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check(&pool).await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
