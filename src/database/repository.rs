use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Mentor, Skill};

/// Mentor collection as seen by the services. Lookups report absence as
/// `None`/empty, never as an error; operational failures are
/// `DatabaseError`. None of the lookups filter by `active` - activity is
/// judged by the caller.
#[async_trait]
pub trait MentorStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Mentor>, DatabaseError>;
    async fn find_by_employee_id(&self, employee_id: i32)
        -> Result<Option<Mentor>, DatabaseError>;
    async fn find_by_skills_in(&self, skills: &[String]) -> Result<Vec<Mentor>, DatabaseError>;
    async fn find_all(&self) -> Result<Vec<Mentor>, DatabaseError>;
    async fn save(&self, mentor: &Mentor) -> Result<Mentor, DatabaseError>;
    async fn delete_by_id(&self, employee_id: i32) -> Result<(), DatabaseError>;
    async fn exists_by_employee_id(&self, employee_id: i32) -> Result<bool, DatabaseError>;
    async fn exists_by_email(&self, email: &str) -> Result<bool, DatabaseError>;
    async fn replace_by_employee_id(
        &self,
        employee_id: i32,
        mentor: &Mentor,
    ) -> Result<(), DatabaseError>;
}

#[async_trait]
pub trait SkillStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Skill>, DatabaseError>;
}

const MENTOR_COLUMNS: &str = "employee_id, first_name, last_name, email, password, \
     job_title, location, company, skills, bio, active";

pub struct PgMentorRepository {
    pool: PgPool,
}

impl PgMentorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MentorStore for PgMentorRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Mentor>, DatabaseError> {
        let query = format!("SELECT {MENTOR_COLUMNS} FROM mentors WHERE email = $1");
        let mentor = sqlx::query_as::<_, Mentor>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(mentor)
    }

    async fn find_by_employee_id(
        &self,
        employee_id: i32,
    ) -> Result<Option<Mentor>, DatabaseError> {
        let query = format!("SELECT {MENTOR_COLUMNS} FROM mentors WHERE employee_id = $1");
        let mentor = sqlx::query_as::<_, Mentor>(&query)
            .bind(employee_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(mentor)
    }

    async fn find_by_skills_in(&self, skills: &[String]) -> Result<Vec<Mentor>, DatabaseError> {
        // Array overlap: any listed skill present qualifies the record.
        let query = format!(
            "SELECT {MENTOR_COLUMNS} FROM mentors WHERE skills && $1 ORDER BY employee_id"
        );
        let mentors = sqlx::query_as::<_, Mentor>(&query)
            .bind(skills)
            .fetch_all(&self.pool)
            .await?;
        Ok(mentors)
    }

    async fn find_all(&self) -> Result<Vec<Mentor>, DatabaseError> {
        let query = format!("SELECT {MENTOR_COLUMNS} FROM mentors ORDER BY employee_id");
        let mentors = sqlx::query_as::<_, Mentor>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(mentors)
    }

    async fn save(&self, mentor: &Mentor) -> Result<Mentor, DatabaseError> {
        let query = format!(
            "INSERT INTO mentors ({MENTOR_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {MENTOR_COLUMNS}"
        );
        let saved = sqlx::query_as::<_, Mentor>(&query)
            .bind(mentor.employee_id)
            .bind(&mentor.first_name)
            .bind(&mentor.last_name)
            .bind(&mentor.email)
            .bind(&mentor.password)
            .bind(&mentor.job_title)
            .bind(&mentor.location)
            .bind(&mentor.company)
            .bind(&mentor.skills)
            .bind(&mentor.bio)
            .bind(mentor.active)
            .fetch_one(&self.pool)
            .await?;
        Ok(saved)
    }

    async fn delete_by_id(&self, employee_id: i32) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM mentors WHERE employee_id = $1")
            .bind(employee_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn exists_by_employee_id(&self, employee_id: i32) -> Result<bool, DatabaseError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM mentors WHERE employee_id = $1)",
        )
        .bind(employee_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DatabaseError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM mentors WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn replace_by_employee_id(
        &self,
        employee_id: i32,
        mentor: &Mentor,
    ) -> Result<(), DatabaseError> {
        // Full-record replace keyed by the immutable employee id.
        sqlx::query(
            "UPDATE mentors SET first_name = $2, last_name = $3, email = $4, password = $5, \
             job_title = $6, location = $7, company = $8, skills = $9, bio = $10, active = $11 \
             WHERE employee_id = $1",
        )
        .bind(employee_id)
        .bind(&mentor.first_name)
        .bind(&mentor.last_name)
        .bind(&mentor.email)
        .bind(&mentor.password)
        .bind(&mentor.job_title)
        .bind(&mentor.location)
        .bind(&mentor.company)
        .bind(&mentor.skills)
        .bind(&mentor.bio)
        .bind(mentor.active)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

pub struct PgSkillRepository {
    pool: PgPool,
}

impl PgSkillRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SkillStore for PgSkillRepository {
    async fn find_all(&self) -> Result<Vec<Skill>, DatabaseError> {
        let skills = sqlx::query_as::<_, Skill>("SELECT name FROM skills ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(skills)
    }
}
