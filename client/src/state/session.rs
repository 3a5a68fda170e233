//! Session state for the current visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard and the navigation bar to decide what the visitor
//! may see. Written only by the login form and the logout action. Lives in
//! memory for the lifetime of the page; nothing is persisted.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Whether the visitor is currently considered signed in.
///
/// The flag is private so the only writers are [`SessionState::login`] and
/// [`SessionState::logout`]. `App` owns the single instance and shares it as
/// `RwSignal<SessionState>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    authenticated: bool,
}

impl SessionState {
    /// Mark the visitor as signed in. Credentials are checked by the caller.
    pub fn login(&mut self) {
        self.authenticated = true;
        #[cfg(feature = "hydrate")]
        log::info!("session: signed in");
    }

    /// Mark the visitor as signed out. No-op when already signed out.
    pub fn logout(&mut self) {
        if self.authenticated {
            #[cfg(feature = "hydrate")]
            log::info!("session: signed out");
        }
        self.authenticated = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}
