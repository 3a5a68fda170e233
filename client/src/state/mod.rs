//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `menu`, `service_detail`) so
//! components depend on small focused models. Session and menu are created
//! once in `App` and provided as `RwSignal` contexts; the service overlay
//! state is local to the services page.

pub mod menu;
pub mod service_detail;
pub mod session;
