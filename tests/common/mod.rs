#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};

use mentor_api_rust::database::manager::DatabaseError;
use mentor_api_rust::database::models::{Mentor, Skill};
use mentor_api_rust::database::repository::{MentorStore, SkillStore};
use mentor_api_rust::handlers::{app, AppState};
use mentor_api_rust::services::{EmptySearchPolicy, MentorService, ServiceOptions, SkillService};

/// Vec-backed store so the black-box tests run without a database.
#[derive(Default)]
struct SharedMentorStore {
    mentors: Mutex<Vec<Mentor>>,
}

#[async_trait]
impl MentorStore for SharedMentorStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Mentor>, DatabaseError> {
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
        Ok(self
            .mentors
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.employee_id == employee_id)
            .cloned())
    }

    async fn find_by_skills_in(&self, skills: &[String]) -> Result<Vec<Mentor>, DatabaseError> {
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
        Ok(self.mentors.lock().unwrap().clone())
    }

    async fn save(&self, mentor: &Mentor) -> Result<Mentor, DatabaseError> {
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
        self.mentors
            .lock()
            .unwrap()
            .retain(|m| m.employee_id != employee_id);
        Ok(())
    }

    async fn exists_by_employee_id(&self, employee_id: i32) -> Result<bool, DatabaseError> {
        Ok(self
            .mentors
            .lock()
            .unwrap()
            .iter()
            .any(|m| m.employee_id == employee_id))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DatabaseError> {
        Ok(self.mentors.lock().unwrap().iter().any(|m| m.email == email))
    }

    async fn replace_by_employee_id(
        &self,
        employee_id: i32,
        mentor: &Mentor,
    ) -> Result<(), DatabaseError> {
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

struct FixedSkillStore {
    skills: Vec<Skill>,
}

#[async_trait]
impl SkillStore for FixedSkillStore {
    async fn find_all(&self) -> Result<Vec<Skill>, DatabaseError> {
        Ok(self.skills.clone())
    }
}

/// Fresh application over empty in-memory stores. Minimum bcrypt cost
/// keeps the register/login round trips fast.
pub fn test_app() -> Router {
    test_app_with_policy(EmptySearchPolicy::Error)
}

pub fn test_app_with_policy(empty_search: EmptySearchPolicy) -> Router {
    let options = ServiceOptions {
        bcrypt_cost: 4,
        empty_search,
    };
    let state = AppState {
        mentors: Arc::new(MentorService::new(
            Arc::new(SharedMentorStore::default()),
            options,
        )),
        skills: Arc::new(SkillService::new(Arc::new(FixedSkillStore {
            skills: ["Java", "Python", "Spring Boot"]
                .iter()
                .map(|name| Skill {
                    name: (*name).to_string(),
                })
                .collect(),
        }))),
    };
    app(state)
}

pub fn mentor_body(employee_id: i32, email: &str, active: bool) -> Value {
    json!({
        "employeeId": employee_id,
        "firstName": "Rachel",
        "lastName": "Green",
        "email": email,
        "password": "securePassword",
        "jobTitle": "Sr.Software Engineer",
        "location": "India",
        "company": "Sys Inc.",
        "skills": ["Java", "Spring Boot"],
        "bio": "Experienced software engineer.",
        "active": active
    })
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: axum::response::Response) -> anyhow::Result<Value> {
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok(serde_json::from_slice(&bytes)?)
}
