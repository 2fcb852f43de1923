//! Identity of the client using the portal.
//!
//! DESIGN
//! ======
//! Pages receive a [`Session`] as a prop at construction instead of reading a
//! global, so tests and future auth wiring can supply any identity.

use crate::config::ClientConfig;

/// The signed-in clinic client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Session {
    client_id: i64,
}

impl Session {
    #[must_use]
    pub fn new(client_id: i64) -> Self {
        Self { client_id }
    }

    /// Session for the client id configured at build time.
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.client_id)
    }

    #[must_use]
    pub fn client_id(self) -> i64 {
        self.client_id
    }
}
