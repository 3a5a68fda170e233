//! Navigation link set and link activation.
//!
//! DESIGN
//! ======
//! The visible links are recomputed from the session flag and a constant
//! table on every render; no component keeps its own copy. Links are either
//! routes (followed by the anchor) or actions (run here, then redirected by
//! the caller).

#[cfg(test)]
#[path = "nav_links_test.rs"]
mod nav_links_test;

use crate::state::menu::MenuState;
use crate::state::session::SessionState;
use crate::util::routes::AppRoute;

/// Actions a navigation entry can trigger instead of following a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Logout,
}

/// What activating a link does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Route(AppRoute),
    Action(NavAction),
}

/// One entry in the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: NavTarget,
}

impl NavLink {
    const fn route(label: &'static str, route: AppRoute) -> Self {
        Self { label, target: NavTarget::Route(route) }
    }

    const fn action(label: &'static str, action: NavAction) -> Self {
        Self { label, target: NavTarget::Action(action) }
    }

    /// Whether activating this link writes the session. Route links only
    /// collapse the menu.
    pub fn changes_session(&self) -> bool {
        matches!(self.target, NavTarget::Action(NavAction::Logout))
    }
}

const BASE_LINKS: [NavLink; 3] = [
    NavLink::route("Home", AppRoute::Home),
    NavLink::route("Services", AppRoute::Services),
    NavLink::route("Contact", AppRoute::Contact),
];

const SIGNED_IN_LINKS: [NavLink; 2] = [
    NavLink::route("Dashboard", AppRoute::Dashboard),
    NavLink::action("Logout", NavAction::Logout),
];

const SIGNED_OUT_LINKS: [NavLink; 1] = [NavLink::route("Login", AppRoute::LOGIN)];

/// Where the browser goes after signing out.
pub const LOGOUT_REDIRECT: &str = "/";

/// Ordered links for the current session. Order is part of the rendering contract.
pub fn links(authenticated: bool) -> Vec<NavLink> {
    let extra: &[NavLink] = if authenticated { &SIGNED_IN_LINKS } else { &SIGNED_OUT_LINKS };
    BASE_LINKS.iter().chain(extra).copied().collect()
}

/// Whether `link` points at `current_path`. Display only.
pub fn is_active(link: &NavLink, current_path: &str) -> bool {
    match link.target {
        NavTarget::Route(route) => route.path() == current_path,
        NavTarget::Action(_) => false,
    }
}

/// Apply the side effects of activating `link`.
///
/// The menu always collapses. Actions run against the session before this
/// returns; the returned path is the redirect the caller must issue
/// afterwards. Route links return `None` because the anchor navigates.
pub fn activate(link: &NavLink, session: &mut SessionState, menu: &mut MenuState) -> Option<&'static str> {
    menu.close();
    match link.target {
        NavTarget::Route(_) => None,
        NavTarget::Action(NavAction::Logout) => {
            session.logout();
            Some(LOGOUT_REDIRECT)
        }
    }
}
