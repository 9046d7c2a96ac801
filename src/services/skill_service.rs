use std::sync::Arc;

use tracing::info;

use crate::api::format::{prepare_response, ResponseDetails};
use crate::database::repository::SkillStore;

use super::MentorError;

/// Flat retrieval of the known skills; no business rules.
pub struct SkillService {
    store: Arc<dyn SkillStore>,
}

impl SkillService {
    pub fn new(store: Arc<dyn SkillStore>) -> Self {
        Self { store }
    }

    pub async fn get_all_skills(&self, path: &str) -> Result<ResponseDetails, MentorError> {
        let skills = self.store.find_all().await?;
        info!(count = skills.len(), "retrieved skills");
        Ok(prepare_response("Success", 200, path, Some(serde_json::to_value(&skills)?)))
    }
}
