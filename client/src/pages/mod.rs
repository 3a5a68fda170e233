//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route's content and delegates chrome (navigation,
//! session gate) to `components`.

pub mod auth;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod services;
pub mod welcome;
