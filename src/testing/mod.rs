//! In-memory store doubles for service and lookup tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::database::manager::DatabaseError;
use crate::database::models::{Mentor, Skill};
use crate::database::repository::{MentorStore, SkillStore};

/// Mentor fixture matching the shape the API receives at registration.
pub fn sample_mentor(employee_id: i32) -> Mentor {
    Mentor {
        employee_id,
        first_name: "Rachel".into(),
        last_name: "Green".into(),
        email: "Rachel.G@example.com".into(),
        password: "securePassword".into(),
        job_title: "Sr.Software Engineer".into(),
        location: "India".into(),
        company: "Sys Inc.".into(),
        skills: vec!["Java".into(), "Spring Boot".into()],
        bio: "Experienced software engineer.".into(),
        active: false,
    }
}

/// `MentorStore` double backed by a `Vec`, with write-call counters so
/// tests can assert which store operations a failed flow reached.
#[derive(Default)]
pub struct InMemoryMentorStore {
    mentors: Mutex<Vec<Mentor>>,
    save_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    replace_calls: AtomicUsize,
    find_by_employee_id_calls: AtomicUsize,
    fail_reads: AtomicBool,
    hide_from_prechecks: AtomicBool,
}

impl InMemoryMentorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mentors(mentors: Vec<Mentor>) -> Self {
        Self {
            mentors: Mutex::new(mentors),
            ..Self::default()
        }
    }

    /// Insert directly, bypassing `save` and its counter.
    pub fn insert(&self, mentor: Mentor) {
        self.mentors.lock().unwrap().push(mentor);
    }

    pub fn mentors(&self) -> Vec<Mentor> {
        self.mentors.lock().unwrap().clone()
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn replace_calls(&self) -> usize {
        self.replace_calls.load(Ordering::SeqCst)
    }

    pub fn find_by_employee_id_calls(&self) -> usize {
        self.find_by_employee_id_calls.load(Ordering::SeqCst)
    }

    /// Make every operation fail the way a lost connection would.
    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    /// Make the existence checks blind, so a conflicting record is only
    /// caught by the unique constraints at write time.
    pub fn hide_from_prechecks(&self) {
        self.hide_from_prechecks.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), DatabaseError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            Err(DatabaseError::QueryError("simulated store failure".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl MentorStore for InMemoryMentorStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Mentor>, DatabaseError> {
        self.check()?;
        Ok(self
            .mentors
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.email == email)
            .cloned())
    }

    async fn find_by_employee_id(
        &self,
        employee_id: i32,
    ) -> Result<Option<Mentor>, DatabaseError> {
        self.check()?;
        self.find_by_employee_id_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .mentors
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.employee_id == employee_id)
            .cloned())
    }

    async fn find_by_skills_in(&self, skills: &[String]) -> Result<Vec<Mentor>, DatabaseError> {
        self.check()?;
        Ok(self
            .mentors
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.skills.iter().any(|s| skills.contains(s)))
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<Mentor>, DatabaseError> {
        self.check()?;
        Ok(self.mentors.lock().unwrap().clone())
    }

    async fn save(&self, mentor: &Mentor) -> Result<Mentor, DatabaseError> {
        self.check()?;
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        let mut mentors = self.mentors.lock().unwrap();
        if mentors.iter().any(|m| m.employee_id == mentor.employee_id) {
            return Err(DatabaseError::UniqueViolation("mentors_pkey".into()));
        }
        if mentors.iter().any(|m| m.email == mentor.email) {
            return Err(DatabaseError::UniqueViolation("mentors_email_key".into()));
        }
        mentors.push(mentor.clone());
        Ok(mentor.clone())
    }

    async fn delete_by_id(&self, employee_id: i32) -> Result<(), DatabaseError> {
        self.check()?;
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.mentors
            .lock()
            .unwrap()
            .retain(|m| m.employee_id != employee_id);
        Ok(())
    }

    async fn exists_by_employee_id(&self, employee_id: i32) -> Result<bool, DatabaseError> {
        self.check()?;
        if self.hide_from_prechecks.load(Ordering::SeqCst) {
            return Ok(false);
        }
        Ok(self
            .mentors
            .lock()
            .unwrap()
            .iter()
            .any(|m| m.employee_id == employee_id))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DatabaseError> {
        self.check()?;
        if self.hide_from_prechecks.load(Ordering::SeqCst) {
            return Ok(false);
        }
        Ok(self.mentors.lock().unwrap().iter().any(|m| m.email == email))
    }

    async fn replace_by_employee_id(
        &self,
        employee_id: i32,
        mentor: &Mentor,
    ) -> Result<(), DatabaseError> {
        self.check()?;
        self.replace_calls.fetch_add(1, Ordering::SeqCst);
        let mut mentors = self.mentors.lock().unwrap();
        if let Some(existing) = mentors.iter_mut().find(|m| m.employee_id == employee_id) {
            *existing = Mentor {
                employee_id,
                ..mentor.clone()
            };
        }
        Ok(())
    }
}

/// `SkillStore` double over a fixed list.
pub struct InMemorySkillStore {
    skills: Vec<Skill>,
}

impl InMemorySkillStore {
    pub fn with_names(names: &[&str]) -> Self {
        Self {
            skills: names
                .iter()
                .map(|name| Skill {
                    name: (*name).to_string(),
                })
                .collect(),
        }
    }
}

#[async_trait]
impl SkillStore for InMemorySkillStore {
    async fn find_all(&self) -> Result<Vec<Skill>, DatabaseError> {
        Ok(self.skills.clone())
    }
}
