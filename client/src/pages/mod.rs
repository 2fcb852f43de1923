//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, navigation, spawning
//! backend calls) and delegates rendering details to `components`. Decisions
//! live in `state` and `actions` so they can be tested without a DOM.

pub mod book_appointment;
pub mod login;
pub mod my_appointments;
pub mod register;
