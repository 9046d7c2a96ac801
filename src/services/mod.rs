pub mod lookup;
pub mod mentor_service;
pub mod skill_service;

pub use mentor_service::{EmptySearchPolicy, MentorService, ServiceOptions};
pub use skill_service::SkillService;

use thiserror::Error;

use crate::database::manager::DatabaseError;

/// Domain failures raised by the directory services. Raised synchronously
/// and surfaced verbatim to the boundary layer; no retries, no local
/// recovery. The boundary owns status-code translation.
#[derive(Debug, Error)]
pub enum MentorError {
    #[error("Employee id {0} is already registered")]
    EmployeeIdAlreadyRegistered(i32),

    #[error("Email {0} is already registered")]
    EmailAlreadyRegistered(String),

    /// Unknown email, inactive account at login, and wrong password all
    /// collapse into this kind so the caller cannot tell them apart.
    #[error("Wrong credentials, please verify email and password")]
    WrongCredentials,

    #[error("{0}")]
    ResourceNotFound(String),

    #[error("Mentor with employee id {0} is not valid")]
    InvalidMentor(i32),

    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("Failed to serialize response payload: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] DatabaseError),
}
