use axum::extract::{OriginalUri, State};

use crate::api::format::ResponseDetails;
use crate::error::ApiError;

use super::AppState;

/// GET /api/v1/skill/get-all-skills
pub async fn get_all(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<ResponseDetails, ApiError> {
    let path = uri.path().to_string();
    let result = state.skills.get_all_skills(&path).await;
    result.map_err(|e| ApiError::new(e, path))
}
