//! Route wrapper that only renders its children for signed-in visitors.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard runs each time the route mounts. Signing out from the page is
//! handled by the navigation bar, which redirects to the root path itself.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::SessionState;
use crate::util::route_guard::{GuardDecision, guard_session};

/// Render `children` when the session is authenticated; redirect otherwise.
///
/// A missing session context is treated as signed out.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = use_context::<RwSignal<SessionState>>().map(|s| s.get_untracked());

    match guard_session(session.as_ref()) {
        GuardDecision::Render => children().into_any(),
        GuardDecision::RedirectTo(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
