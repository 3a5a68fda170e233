//! Session gate for the protected route.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` consults `guard_session` whenever the route mounts. The
//! guard only decides; the router performs the redirect.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use crate::state::session::SessionState;
use crate::util::routes::AppRoute;

/// Outcome of checking the session before rendering a protected view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    RedirectTo(&'static str),
}

/// Render iff the visitor is signed in, otherwise send them to the login page.
pub fn guard(authenticated: bool) -> GuardDecision {
    if authenticated {
        GuardDecision::Render
    } else {
        GuardDecision::RedirectTo(AppRoute::LOGIN.path())
    }
}

/// Like [`guard`], but a missing session counts as signed out.
pub fn guard_session(session: Option<&SessionState>) -> GuardDecision {
    guard(session.is_some_and(SessionState::is_authenticated))
}
