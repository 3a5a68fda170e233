use super::*;

#[test]
fn guard_redirects_when_signed_out() {
    assert_eq!(guard(false), GuardDecision::RedirectTo("/auth"));
}

#[test]
fn guard_renders_when_signed_in() {
    assert_eq!(guard(true), GuardDecision::Render);
}

#[test]
fn guard_session_fails_closed_without_state() {
    assert_eq!(guard_session(None), GuardDecision::RedirectTo("/auth"));
}

#[test]
fn guard_session_follows_session_transitions() {
    let mut session = SessionState::default();
    assert_eq!(guard_session(Some(&session)), GuardDecision::RedirectTo("/auth"));

    session.login();
    assert_eq!(guard_session(Some(&session)), GuardDecision::Render);

    session.logout();
    assert_eq!(guard_session(Some(&session)), GuardDecision::RedirectTo("/auth"));
}
