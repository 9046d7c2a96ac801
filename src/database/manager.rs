use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// SQLSTATE class for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// Errors surfaced by the storage layer. Absence of a record is not an
/// error here; it is an empty `Option`/`Vec` at the repository level.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error(transparent)]
    Sqlx(sqlx::Error),
}

impl DatabaseError {
    /// Classify a driver error, pulling out unique-index conflicts so the
    /// service layer can report them as duplicate registrations.
    pub fn from_sqlx(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                let constraint = db_err.constraint().unwrap_or("unknown").to_string();
                return DatabaseError::UniqueViolation(constraint);
            }
        }
        DatabaseError::Sqlx(err)
    }
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        DatabaseError::from_sqlx(err)
    }
}

/// Connection pool construction and schema bootstrap.
pub struct DatabaseManager;

impl DatabaseManager {
    /// Build the pool from `DATABASE_URL`.
    pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
        let url = std::env::var("DATABASE_URL")
            .map_err(|_| DatabaseError::ConfigMissing("DATABASE_URL"))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .connect(&url)
            .await?;

        info!("Created database pool");
        Ok(pool)
    }

    /// Create the mentors and skills tables if missing. The primary key on
    /// `employee_id` and the unique index on `email` back the service-level
    /// duplicate checks against concurrent registrations.
    pub async fn ensure_schema(pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS mentors (
                employee_id INTEGER PRIMARY KEY,
                first_name  TEXT NOT NULL,
                last_name   TEXT NOT NULL,
                email       TEXT NOT NULL,
                password    TEXT NOT NULL,
                job_title   TEXT NOT NULL,
                location    TEXT NOT NULL,
                company     TEXT NOT NULL,
                skills      TEXT[] NOT NULL DEFAULT '{}',
                bio         TEXT NOT NULL,
                active      BOOLEAN NOT NULL DEFAULT FALSE
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS mentors_email_key ON mentors (email)")
            .execute(pool)
            .await?;

        sqlx::query("CREATE TABLE IF NOT EXISTS skills (name TEXT PRIMARY KEY)")
            .execute(pool)
            .await?;

        info!("Database schema ready");
        Ok(())
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }
}
