//! Headless page models.
//!
//! Each page owns one of these inside an `RwSignal`; actions and event
//! handlers mutate it through plain methods so the rules are unit-testable.

pub mod appointments;
pub mod booking;
pub mod notices;
pub mod registration;
