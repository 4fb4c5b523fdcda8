use smartpark::{Registration, User, UserType};
use time::OffsetDateTime;
use uuid::Uuid;

/// Builds a user the way the backend would, without going through it.
pub fn sample_user(email: &str) -> User {
    User {
        id: Uuid::new_v4(),
        email: email.to_string(),
        first_name: "Nora".to_string(),
        last_name: "Haddad".to_string(),
        user_type: UserType::Student,
        department: Some("Physics".to_string()),
        registered_at: OffsetDateTime::now_utc(),
    }
}

/// A registration form with every required field filled in.
pub fn sample_registration() -> Registration {
    Registration {
        email: "sami@campus.edu".to_string(),
        password: "hunter2".to_string(),
        first_name: "Sami".to_string(),
        last_name: "Berrada".to_string(),
        user_type: UserType::Faculty,
        department: Some("Mathematics".to_string()),
    }
}
