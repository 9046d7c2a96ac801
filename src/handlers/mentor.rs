use axum::extract::{OriginalUri, Path, State};
use axum::Json;
use serde::Deserialize;

use crate::api::format::ResponseDetails;
use crate::database::models::Mentor;
use crate::error::ApiError;

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SkillSearchRequest {
    pub skills: Vec<String>,
}

/// POST /api/v1/mentor/register
pub async fn register(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Json(mentor): Json<Mentor>,
) -> Result<ResponseDetails, ApiError> {
    let path = uri.path().to_string();
    let result = state.mentors.register_mentor(mentor, &path).await;
    result.map_err(|e| ApiError::new(e, path))
}

/// POST /api/v1/mentor/login
pub async fn login(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Json(request): Json<LoginRequest>,
) -> Result<ResponseDetails, ApiError> {
    let path = uri.path().to_string();
    let result = state
        .mentors
        .verify_log_in_details(&request.email, &request.password, &path)
        .await;
    result.map_err(|e| ApiError::new(e, path))
}

/// POST /api/v1/mentor/search
pub async fn search_by_skills(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Json(request): Json<SkillSearchRequest>,
) -> Result<ResponseDetails, ApiError> {
    let path = uri.path().to_string();
    let result = state.mentors.find_mentor_by_skills(request.skills, &path).await;
    result.map_err(|e| ApiError::new(e, path))
}

/// GET /api/v1/mentor/get-all-mentors
pub async fn get_all(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<ResponseDetails, ApiError> {
    let path = uri.path().to_string();
    let result = state.mentors.get_all_mentors(&path).await;
    result.map_err(|e| ApiError::new(e, path))
}

/// GET /api/v1/mentor/:empid
pub async fn get_by_id(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(empid): Path<i32>,
) -> Result<ResponseDetails, ApiError> {
    let path = uri.path().to_string();
    let result = state.mentors.get_mentor_by_id(empid, &path).await;
    result.map_err(|e| ApiError::new(e, path))
}

/// PUT /api/v1/mentor/update/:empid
pub async fn update(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(empid): Path<i32>,
    Json(mentor): Json<Mentor>,
) -> Result<ResponseDetails, ApiError> {
    let path = uri.path().to_string();
    let result = state.mentors.update_mentor(empid, mentor, &path).await;
    result.map_err(|e| ApiError::new(e, path))
}

/// DELETE /api/v1/mentor/delete/:empid
pub async fn remove(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(empid): Path<i32>,
) -> Result<ResponseDetails, ApiError> {
    let path = uri.path().to_string();
    let result = state.mentors.delete_mentor(empid, &path).await;
    result.map_err(|e| ApiError::new(e, path))
}
