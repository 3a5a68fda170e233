//! Routing and navigation helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules hold the pure decision logic (route table, guard, link set)
//! so pages and components stay thin and the rules are testable without a
//! browser.

pub mod nav_links;
pub mod route_guard;
pub mod routes;
