//! Route table for the site.
//!
//! Every path the router knows about is named here once. Components and the
//! navigation table refer to `AppRoute` values instead of string literals.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Routes served by the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Welcome,
    Auth,
    Home,
    Services,
    Contact,
    Dashboard,
}

impl AppRoute {
    pub const ALL: [AppRoute; 6] = [
        AppRoute::Welcome,
        AppRoute::Auth,
        AppRoute::Home,
        AppRoute::Services,
        AppRoute::Contact,
        AppRoute::Dashboard,
    ];

    /// Where unauthenticated visitors are sent.
    pub const LOGIN: AppRoute = AppRoute::Auth;

    /// Where unknown paths end up.
    pub const FALLBACK: AppRoute = AppRoute::Home;

    /// The one route behind the session gate.
    pub const PROTECTED: AppRoute = AppRoute::Dashboard;

    pub const fn path(self) -> &'static str {
        match self {
            AppRoute::Welcome => "/",
            AppRoute::Auth => "/auth",
            AppRoute::Home => "/home",
            AppRoute::Services => "/services",
            AppRoute::Contact => "/contact",
            AppRoute::Dashboard => "/dashboard",
        }
    }

    /// Path without the leading slash, as the router's `StaticSegment` wants it.
    pub const fn segment(self) -> &'static str {
        match self {
            AppRoute::Welcome => "",
            AppRoute::Auth => "auth",
            AppRoute::Home => "home",
            AppRoute::Services => "services",
            AppRoute::Contact => "contact",
            AppRoute::Dashboard => "dashboard",
        }
    }

    /// Exact lookup. A single trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<AppRoute> {
        let trimmed = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(rest) => rest,
        };
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }

    /// Lookup with the catch-all applied. The router's fallback redirects
    /// unmatched paths here, so `/services/` lands on `/services` and anything
    /// unknown on `/home`.
    pub fn resolve(path: &str) -> AppRoute {
        Self::from_path(path).unwrap_or(Self::FALLBACK)
    }
}
