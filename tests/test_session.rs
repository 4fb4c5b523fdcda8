mod common;

use smartpark::{SessionController, ViewId};

#[test]
fn fresh_controller_is_signed_out() {
    let controller = SessionController::default();
    assert!(!controller.is_authenticated());
    assert!(controller.user().is_none());
    assert_eq!(controller.view(), ViewId::Home);
}

#[test]
fn login_lands_on_home() {
    let mut controller = SessionController::new(ViewId::Stats);
    controller.complete_login(common::sample_user("nora@campus.edu"));

    assert!(controller.is_authenticated());
    assert_eq!(controller.view(), ViewId::Home);
    let user = controller.user().expect("user should be present");
    assert_eq!(user.email, "nora@campus.edu");
}

#[test]
fn logout_clears_session_and_resets_navigation() {
    let mut controller = SessionController::default();
    controller.complete_login(common::sample_user("nora@campus.edu"));
    assert!(controller.change_view(ViewId::Map));

    let departed = controller.logout();

    assert_eq!(departed.map(|u| u.email), Some("nora@campus.edu".to_string()));
    assert!(!controller.is_authenticated());
    assert!(controller.user().is_none());
    assert_eq!(controller.view(), ViewId::Home);
}

#[test]
fn change_view_reaches_every_view() {
    let mut controller = SessionController::default();
    controller.complete_login(common::sample_user("nora@campus.edu"));

    for view in ViewId::ALL {
        assert!(controller.change_view(view));
        assert_eq!(controller.view(), view);
    }
}

#[test]
fn change_view_refused_while_signed_out() {
    let mut controller = SessionController::default();
    assert!(!controller.change_view(ViewId::Map));
    assert_eq!(controller.view(), ViewId::Home);
}

#[test]
fn page_ids_round_trip() {
    for view in ViewId::ALL {
        assert_eq!(ViewId::parse(view.id()), view);
    }
}

#[test]
fn unknown_page_ids_fall_back_to_home() {
    assert_eq!(ViewId::parse("reports"), ViewId::Home);
    assert_eq!(ViewId::parse(""), ViewId::Home);
    assert_eq!(ViewId::parse("   "), ViewId::Home);
    // case and surrounding whitespace are forgiven
    assert_eq!(ViewId::parse(" MAP "), ViewId::Map);
}
