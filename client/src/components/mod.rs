//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome (navigation, layout) and the session gate,
//! reading shared state from Leptos context providers.

pub mod layout;
pub mod navigation;
pub mod protected_route;
