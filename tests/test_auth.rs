mod common;

use std::time::Duration;

use smartpark::{AuthError, SimulatedBackend, UserType};

#[tokio::test]
async fn login_builds_user_around_submitted_email() -> anyhow::Result<()> {
    let backend = SimulatedBackend::instant();
    let user = backend.login("nora@campus.edu", "whatever").await?;

    assert_eq!(user.email, "nora@campus.edu");
    assert_eq!(user.user_type, UserType::Student);
    assert!(user.department.is_some());
    Ok(())
}

#[tokio::test]
async fn login_never_checks_credentials() -> anyhow::Result<()> {
    // Known stub: any non-empty password is accepted.
    let backend = SimulatedBackend::instant();
    assert!(backend.login("a@b.c", "wrong").await.is_ok());
    assert!(backend.login("a@b.c", "also wrong").await.is_ok());
    Ok(())
}

#[tokio::test]
async fn login_rejects_missing_fields() {
    let backend = SimulatedBackend::instant();

    let err = backend.login("", "secret").await.unwrap_err();
    assert_eq!(err, AuthError::MissingField("email"));

    let err = backend.login("nora@campus.edu", "").await.unwrap_err();
    assert_eq!(err, AuthError::MissingField("password"));
}

#[tokio::test]
async fn register_carries_form_fields_over() -> anyhow::Result<()> {
    let backend = SimulatedBackend::instant();
    let user = backend.register(common::sample_registration()).await?;

    assert_eq!(user.email, "sami@campus.edu");
    assert_eq!(user.first_name, "Sami");
    assert_eq!(user.last_name, "Berrada");
    assert_eq!(user.user_type, UserType::Faculty);
    assert_eq!(user.department.as_deref(), Some("Mathematics"));
    Ok(())
}

#[tokio::test]
async fn register_generates_a_fresh_id() -> anyhow::Result<()> {
    let backend = SimulatedBackend::instant();
    let first = backend.register(common::sample_registration()).await?;
    let second = backend.register(common::sample_registration()).await?;
    assert_ne!(first.id, second.id);
    Ok(())
}

#[tokio::test]
async fn register_rejects_missing_required_fields() {
    let backend = SimulatedBackend::instant();

    let mut form = common::sample_registration();
    form.first_name = "  ".to_string();
    let err = backend.register(form).await.unwrap_err();
    assert_eq!(err, AuthError::MissingField("first name"));

    let mut form = common::sample_registration();
    form.email = String::new();
    let err = backend.register(form).await.unwrap_err();
    assert_eq!(err, AuthError::MissingField("email"));
}

#[tokio::test]
async fn register_drops_blank_department() -> anyhow::Result<()> {
    let backend = SimulatedBackend::instant();
    let mut form = common::sample_registration();
    form.department = Some("   ".to_string());
    let user = backend.register(form).await?;
    assert_eq!(user.department, None);
    Ok(())
}

#[test]
fn default_latencies_are_fixed() {
    let backend = SimulatedBackend::default();
    assert_eq!(backend.login_latency(), Duration::from_millis(1000));
    assert_eq!(backend.register_latency(), Duration::from_millis(1500));
}

#[test]
fn with_latency_keeps_the_login_register_ratio() {
    let backend = SimulatedBackend::with_latency(Duration::from_millis(200));
    assert_eq!(backend.login_latency(), Duration::from_millis(200));
    assert_eq!(backend.register_latency(), Duration::from_millis(300));
}

#[tokio::test(start_paused = true)]
async fn simulated_latency_is_observed() -> anyhow::Result<()> {
    let backend = SimulatedBackend::with_latency(Duration::from_millis(500));
    let started = tokio::time::Instant::now();
    backend.login("nora@campus.edu", "secret").await?;
    // Paused time auto-advances through the sleep, so this is exact.
    assert_eq!(started.elapsed(), Duration::from_millis(500));
    Ok(())
}
