use std::time::Duration;

use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::models::{User, UserType};

/// How long a sign-in pretends the network round trip takes.
pub const LOGIN_LATENCY: Duration = Duration::from_millis(1000);
/// Registration pretends to do more work, so it waits longer.
pub const REGISTER_LATENCY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// What the registration form submits.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub user_type: UserType,
    pub department: Option<String>,
}

/// Stand-in for a parking-management API. There is no credential store and
/// no network behind this; every well-formed request succeeds after a
/// configurable delay that simulates the round trip. Injected into the GUI
/// state so the session logic stays testable without real timing.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    login_latency: Duration,
    register_latency: Duration,
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self {
            login_latency: LOGIN_LATENCY,
            register_latency: REGISTER_LATENCY,
        }
    }
}

impl SimulatedBackend {
    /// Uses `latency` for sign-in and half as much again for registration,
    /// matching the 1000/1500 ms ratio of the defaults.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            login_latency: latency,
            register_latency: latency + latency / 2,
        }
    }

    /// Zero-latency backend for tests.
    pub fn instant() -> Self {
        Self::with_latency(Duration::ZERO)
    }

    pub fn login_latency(&self) -> Duration {
        self.login_latency
    }

    pub fn register_latency(&self) -> Duration {
        self.register_latency
    }

    /// Signs in. The password is never checked; the account is a fixed
    /// placeholder profile built around the submitted email.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if email.trim().is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        if password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }

        tokio::time::sleep(self.login_latency).await;
        tracing::debug!(%email, "simulated sign-in completed");

        Ok(User {
            id: Uuid::new_v4(),
            email: email.trim().to_string(),
            first_name: "Alex".to_string(),
            last_name: "Martin".to_string(),
            user_type: UserType::Student,
            department: Some("Computer Engineering".to_string()),
            registered_at: OffsetDateTime::now_utc(),
        })
    }

    /// Creates an account from the submitted form. Always succeeds once the
    /// required fields are present; the id is generated here.
    pub async fn register(&self, form: Registration) -> Result<User, AuthError> {
        for (name, value) in [
            ("email", &form.email),
            ("password", &form.password),
            ("first name", &form.first_name),
            ("last name", &form.last_name),
        ] {
            if value.trim().is_empty() {
                return Err(AuthError::MissingField(name));
            }
        }

        tokio::time::sleep(self.register_latency).await;
        tracing::debug!(email = %form.email, "simulated registration completed");

        Ok(User {
            id: Uuid::new_v4(),
            email: form.email.trim().to_string(),
            first_name: form.first_name,
            last_name: form.last_name,
            user_type: form.user_type,
            department: form.department.filter(|d| !d.trim().is_empty()),
            registered_at: OffsetDateTime::now_utc(),
        })
    }
}
