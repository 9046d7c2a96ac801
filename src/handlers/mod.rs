pub mod mentor;
pub mod skill;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::services::{MentorService, SkillService};

#[derive(Clone)]
pub struct AppState {
    pub mentors: Arc<MentorService>,
    pub skills: Arc<SkillService>,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(mentor_routes())
        .merge(skill_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn mentor_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/mentor/register", post(mentor::register))
        .route("/api/v1/mentor/login", post(mentor::login))
        .route("/api/v1/mentor/search", post(mentor::search_by_skills))
        .route("/api/v1/mentor/get-all-mentors", get(mentor::get_all))
        .route("/api/v1/mentor/:empid", get(mentor::get_by_id))
        .route("/api/v1/mentor/update/:empid", put(mentor::update))
        .route("/api/v1/mentor/delete/:empid", delete(mentor::remove))
}

fn skill_routes() -> Router<AppState> {
    Router::new().route("/api/v1/skill/get-all-skills", get(skill::get_all))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Mentor API",
        "version": version,
        "description": "Mentor directory backend - registration, login and skill-based search",
        "endpoints": {
            "register": "POST /api/v1/mentor/register",
            "login": "POST /api/v1/mentor/login",
            "search": "POST /api/v1/mentor/search",
            "mentors": "GET /api/v1/mentor/get-all-mentors, GET /api/v1/mentor/:empid",
            "update": "PUT /api/v1/mentor/update/:empid",
            "delete": "DELETE /api/v1/mentor/delete/:empid",
            "skills": "GET /api/v1/skill/get-all-skills",
            "health": "GET /health",
        }
    }))
}
