//! Mentor resolution helpers shared by the directory service.
//!
//! Store lookups never filter by `active`; whether an inactive record is
//! acceptable - and which error an unacceptable one raises - depends on
//! the endpoint. The login path reports every failure as a credentials
//! error so callers cannot probe which check failed; the profile-read
//! path reports an invalid mentor instead. That asymmetry is deliberate.

use crate::database::models::Mentor;
use crate::database::repository::MentorStore;

use super::MentorError;

/// Login-path lookup: an unknown email is a credentials failure.
pub async fn resolve_mentor_by_email(
    store: &dyn MentorStore,
    email: &str,
) -> Result<Mentor, MentorError> {
    store
        .find_by_email(email)
        .await?
        .ok_or(MentorError::WrongCredentials)
}

/// Update-path lookup: a missing record is a plain not-found failure.
pub async fn resolve_mentor_by_employee_id(
    store: &dyn MentorStore,
    employee_id: i32,
) -> Result<Mentor, MentorError> {
    store.find_by_employee_id(employee_id).await?.ok_or_else(|| {
        MentorError::ResourceNotFound(format!("Mentor not found with employee id {employee_id}"))
    })
}

/// Profile-read and delete paths: a missing record is an invalid mentor.
pub async fn resolve_registered_mentor(
    store: &dyn MentorStore,
    employee_id: i32,
) -> Result<Mentor, MentorError> {
    store
        .find_by_employee_id(employee_id)
        .await?
        .ok_or(MentorError::InvalidMentor(employee_id))
}

pub fn require_active_for_login(mentor: Mentor) -> Result<Mentor, MentorError> {
    if mentor.active {
        Ok(mentor)
    } else {
        Err(MentorError::WrongCredentials)
    }
}

pub fn require_active_profile(mentor: Mentor) -> Result<Mentor, MentorError> {
    if mentor.active {
        Ok(mentor)
    } else {
        Err(MentorError::InvalidMentor(mentor.employee_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_mentor, InMemoryMentorStore};

    #[tokio::test]
    async fn unknown_email_is_a_credentials_failure() {
        let store = InMemoryMentorStore::new();
        let err = resolve_mentor_by_email(&store, "nobody@example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, MentorError::WrongCredentials));
    }

    #[tokio::test]
    async fn missing_employee_id_is_not_found_on_update_path() {
        let store = InMemoryMentorStore::new();
        let err = resolve_mentor_by_employee_id(&store, 99).await.unwrap_err();
        assert!(matches!(err, MentorError::ResourceNotFound(_)));
    }

    #[tokio::test]
    async fn missing_employee_id_is_invalid_on_read_path() {
        let store = InMemoryMentorStore::new();
        let err = resolve_registered_mentor(&store, 99).await.unwrap_err();
        assert!(matches!(err, MentorError::InvalidMentor(99)));
    }

    #[tokio::test]
    async fn lookup_does_not_filter_inactive_records() {
        let mut mentor = sample_mentor(123);
        mentor.active = false;
        let store = InMemoryMentorStore::with_mentors(vec![mentor]);
        let found = resolve_registered_mentor(&store, 123).await.unwrap();
        assert!(!found.active);
    }

    #[test]
    fn inactive_error_kind_depends_on_call_site() {
        let mut mentor = sample_mentor(123);
        mentor.active = false;

        let login_err = require_active_for_login(mentor.clone()).unwrap_err();
        assert!(matches!(login_err, MentorError::WrongCredentials));

        let profile_err = require_active_profile(mentor).unwrap_err();
        assert!(matches!(profile_err, MentorError::InvalidMentor(123)));
    }
}
