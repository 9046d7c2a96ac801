use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::api::format::{prepare_response, ResponseDetails};
use crate::auth;
use crate::config::AppConfig;
use crate::database::manager::DatabaseError;
use crate::database::models::{Mentor, MentorsData};
use crate::database::repository::MentorStore;

use super::{lookup, MentorError};

/// What a skill search reports when nothing matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptySearchPolicy {
    /// Zero matches fail with `ResourceNotFound`.
    Error,
    /// Zero matches return a success envelope with an empty aggregate.
    EmptyOk,
}

#[derive(Debug, Clone)]
pub struct ServiceOptions {
    pub bcrypt_cost: u32,
    pub empty_search: EmptySearchPolicy,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
            empty_search: EmptySearchPolicy::Error,
        }
    }
}

impl ServiceOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            bcrypt_cost: config.security.bcrypt_cost,
            empty_search: if config.search.empty_result_is_error {
                EmptySearchPolicy::Error
            } else {
                EmptySearchPolicy::EmptyOk
            },
        }
    }
}

/// Orchestrates registration, authentication, profile reads and writes,
/// and skill search. Stateless between calls; all record state lives in
/// the injected store.
pub struct MentorService {
    store: Arc<dyn MentorStore>,
    options: ServiceOptions,
}

impl MentorService {
    pub fn new(store: Arc<dyn MentorStore>, options: ServiceOptions) -> Self {
        Self { store, options }
    }

    /// Register a new mentor. Employee-id uniqueness is checked before
    /// email uniqueness, and both before the password hash and the write.
    pub async fn register_mentor(
        &self,
        mut candidate: Mentor,
        path: &str,
    ) -> Result<ResponseDetails, MentorError> {
        if self.store.exists_by_employee_id(candidate.employee_id).await? {
            return Err(MentorError::EmployeeIdAlreadyRegistered(candidate.employee_id));
        }
        if self.store.exists_by_email(&candidate.email).await? {
            return Err(MentorError::EmailAlreadyRegistered(candidate.email));
        }

        candidate.password = auth::encrypt_password(&candidate.password, self.options.bcrypt_cost)?;

        let saved = match self.store.save(&candidate).await {
            Ok(saved) => saved,
            // The pre-checks race with concurrent registrations; the
            // violated index names which check lost.
            Err(DatabaseError::UniqueViolation(constraint)) => {
                return Err(if constraint.contains("email") {
                    MentorError::EmailAlreadyRegistered(candidate.email)
                } else {
                    MentorError::EmployeeIdAlreadyRegistered(candidate.employee_id)
                });
            }
            Err(other) => return Err(other.into()),
        };

        info!(employee_id = saved.employee_id, "registered mentor");
        let message = format!(
            "Mentor {} {} created successfully.",
            saved.first_name, saved.last_name
        );
        Ok(prepare_response(message, 201, path, Some(serde_json::to_value(&saved)?)))
    }

    /// Authenticate by email and password. Unknown email, inactive account
    /// and wrong password are indistinguishable to the caller.
    pub async fn verify_log_in_details(
        &self,
        email: &str,
        password: &str,
        path: &str,
    ) -> Result<ResponseDetails, MentorError> {
        let mentor = lookup::resolve_mentor_by_email(self.store.as_ref(), email).await?;
        let mentor = lookup::require_active_for_login(mentor)?;

        if !auth::match_password(password, &mentor.password) {
            return Err(MentorError::WrongCredentials);
        }

        info!(employee_id = mentor.employee_id, "mentor logged in");
        // Success carries an indicator only; the record (and its hash) stays out.
        Ok(prepare_response(
            "Success",
            200,
            path,
            Some(Value::String("Login successful".into())),
        ))
    }

    /// Find mentors holding any of the given skills.
    pub async fn find_mentor_by_skills(
        &self,
        skills: Vec<String>,
        path: &str,
    ) -> Result<ResponseDetails, MentorError> {
        let mentors = self.store.find_by_skills_in(&skills).await?;

        if mentors.is_empty() && self.options.empty_search == EmptySearchPolicy::Error {
            return Err(MentorError::ResourceNotFound(format!(
                "No mentors found with skills {:?}",
                skills
            )));
        }

        let data = MentorsData::new(mentors);
        Ok(prepare_response("Success", 200, path, Some(serde_json::to_value(&data)?)))
    }

    /// Fetch one profile. Missing and inactive both read as an invalid
    /// mentor on this endpoint.
    pub async fn get_mentor_by_id(
        &self,
        employee_id: i32,
        path: &str,
    ) -> Result<ResponseDetails, MentorError> {
        let mentor = lookup::resolve_registered_mentor(self.store.as_ref(), employee_id).await?;
        let mentor = lookup::require_active_profile(mentor)?;
        Ok(prepare_response(
            "Mentor found",
            200,
            path,
            Some(serde_json::to_value(&mentor)?),
        ))
    }

    /// Full-record replace keyed by employee id, with a post-replace
    /// existence verification before success is reported.
    pub async fn update_mentor(
        &self,
        employee_id: i32,
        new_data: Mentor,
        path: &str,
    ) -> Result<ResponseDetails, MentorError> {
        lookup::resolve_mentor_by_employee_id(self.store.as_ref(), employee_id).await?;

        self.store.replace_by_employee_id(employee_id, &new_data).await?;

        lookup::resolve_mentor_by_employee_id(self.store.as_ref(), employee_id).await?;

        info!(employee_id, "updated mentor");
        let message = format!(
            "Mentor {} {} updated successfully.",
            new_data.first_name, new_data.last_name
        );
        Ok(prepare_response(message, 200, path, None))
    }

    /// Physical delete; no soft-delete semantics.
    pub async fn delete_mentor(
        &self,
        employee_id: i32,
        path: &str,
    ) -> Result<ResponseDetails, MentorError> {
        lookup::resolve_registered_mentor(self.store.as_ref(), employee_id).await?;

        self.store.delete_by_id(employee_id).await?;

        info!(employee_id, "deleted mentor");
        Ok(prepare_response("Deleted Successfully", 200, path, None))
    }

    /// Bulk retrieval. An empty store is a normal empty aggregate, not a
    /// failure; only an operational store error raises.
    pub async fn get_all_mentors(&self, path: &str) -> Result<ResponseDetails, MentorError> {
        let mentors = self.store.find_all().await?;
        let data = MentorsData::new(mentors);
        Ok(prepare_response("Success", 200, path, Some(serde_json::to_value(&data)?)))
    }
}
