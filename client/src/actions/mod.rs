//! Backend call sequencing for the three pages.
//!
//! ARCHITECTURE
//! ============
//! Actions take a `&dyn ClinicApi`, issue exactly the calls a user action
//! needs, log failures, and return a typed outcome. Pages apply outcomes to
//! their signals, so nothing here touches the reactive runtime.

pub mod appointments;
pub mod booking;
pub mod registration;

#[cfg(test)]
pub(crate) mod mock_api;

/// Answer to an in-app confirmation prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}
