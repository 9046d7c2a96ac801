use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Mentor profile record. `employee_id` is assigned by the registering
/// client and immutable after creation; `password` holds a bcrypt hash
/// once the record is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Mentor {
    pub employee_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub job_title: String,
    pub location: String,
    pub company: String,
    pub skills: Vec<String>,
    pub bio: String,
    // Accounts start inactive unless the registering client says otherwise.
    #[serde(default)]
    pub active: bool,
}

/// Read-model aggregate for list responses; built fresh per query.
#[derive(Debug, Clone, Serialize)]
pub struct MentorsData {
    pub count: i64,
    pub mentors: Vec<Mentor>,
}

impl MentorsData {
    pub fn new(mentors: Vec<Mentor>) -> Self {
        Self {
            count: mentors.len() as i64,
            mentors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_defaults_to_false_when_absent() {
        let mentor: Mentor = serde_json::from_value(serde_json::json!({
            "employeeId": 123,
            "firstName": "Rachel",
            "lastName": "Green",
            "email": "Rachel.G@example.com",
            "password": "securePassword",
            "jobTitle": "Sr.Software Engineer",
            "location": "India",
            "company": "Sys Inc.",
            "skills": ["Java", "Spring Boot"],
            "bio": "Experienced software engineer."
        }))
        .unwrap();
        assert!(!mentor.active);
        assert_eq!(mentor.employee_id, 123);
    }

    #[test]
    fn wire_format_is_camel_case() {
        let data = MentorsData::new(vec![]);
        assert_eq!(data.count, 0);

        let mentor = Mentor {
            employee_id: 7,
            first_name: "Rachel".into(),
            last_name: "Green".into(),
            email: "Rachel.G@example.com".into(),
            password: "hash".into(),
            job_title: "Engineer".into(),
            location: "India".into(),
            company: "Sys Inc.".into(),
            skills: vec!["Java".into()],
            bio: "bio".into(),
            active: true,
        };
        let value = serde_json::to_value(&mentor).unwrap();
        assert_eq!(value["employeeId"], 7);
        assert!(value.get("employee_id").is_none());
    }
}
