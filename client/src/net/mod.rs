//! Networking modules for the clinic backend REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the backend contract and its HTTP implementation, `error`
//! the single failure type callers see, and `types` the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
