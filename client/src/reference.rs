//! Reference lists for the booking form: pets, services, veterinarians.
//!
//! DESIGN
//! ======
//! The source is a swappable collaborator chosen by `ReferenceDataMode`.
//! `MockReferenceSource` serves a fixed placeholder dataset until the backend
//! exposes these endpoints; `RemoteReferenceSource` calls them through
//! [`ClinicApi`].

#[cfg(test)]
#[path = "reference_test.rs"]
mod reference_test;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::ReferenceDataMode;
use crate::net::api::SharedApi;
use crate::net::error::ApiError;
use crate::net::types::{Pet, Service, Veterinarian};

/// Everything the booking form's selects need.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReferenceData {
    pub pets: Vec<Pet>,
    pub services: Vec<Service>,
    pub veterinarians: Vec<Veterinarian>,
}

/// Provider of reference lists. Each list loads independently.
#[async_trait(?Send)]
pub trait ReferenceSource {
    async fn pets(&self, client_id: i64) -> Result<Vec<Pet>, ApiError>;
    async fn services(&self) -> Result<Vec<Service>, ApiError>;
    async fn veterinarians(&self) -> Result<Vec<Veterinarian>, ApiError>;
}

pub type SharedReferenceSource = Arc<dyn ReferenceSource + Send + Sync>;

/// Build the source selected by `mode`.
#[must_use]
pub fn source_for(mode: ReferenceDataMode, api: SharedApi) -> SharedReferenceSource {
    match mode {
        ReferenceDataMode::Mock => Arc::new(MockReferenceSource),
        ReferenceDataMode::Remote => Arc::new(RemoteReferenceSource::new(api)),
    }
}

/// Fixed placeholder dataset. Pets are the same for every client.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockReferenceSource;

impl MockReferenceSource {
    #[must_use]
    pub fn placeholder_pets() -> Vec<Pet> {
        [
            (5, "Max", "Perro", "Labrador"),
            (6, "Luna", "Gato", "Siamés"),
            (7, "Rocky", "Perro", "Golden Retriever"),
            (8, "Mishi", "Gato", "Persa"),
        ]
        .into_iter()
        .map(|(id, name, species, breed)| Pet {
            id,
            name: name.to_owned(),
            species: species.to_owned(),
            breed: breed.to_owned(),
        })
        .collect()
    }

    #[must_use]
    pub fn placeholder_services() -> Vec<Service> {
        [
            (1, "Consulta General", 30, 50.0),
            (2, "Vacunación", 15, 30.0),
            (3, "Cirugía", 120, 500.0),
            (4, "Control de Rutina", 20, 40.0),
            (5, "Baño y Peluquería", 60, 35.0),
            (6, "Desparasitación", 10, 25.0),
        ]
        .into_iter()
        .map(|(id, name, duration_minutes, price)| Service { id, name: name.to_owned(), duration_minutes, price })
        .collect()
    }

    #[must_use]
    pub fn placeholder_veterinarians() -> Vec<Veterinarian> {
        [(1, "Veterinario 1", "Medicina General"), (2, "Veterinario 2", "Cirugía")]
            .into_iter()
            .map(|(id, name, specialty)| Veterinarian { id, name: name.to_owned(), specialty: specialty.to_owned() })
            .collect()
    }
}

#[async_trait(?Send)]
impl ReferenceSource for MockReferenceSource {
    async fn pets(&self, _client_id: i64) -> Result<Vec<Pet>, ApiError> {
        Ok(Self::placeholder_pets())
    }

    async fn services(&self) -> Result<Vec<Service>, ApiError> {
        Ok(Self::placeholder_services())
    }

    async fn veterinarians(&self) -> Result<Vec<Veterinarian>, ApiError> {
        Ok(Self::placeholder_veterinarians())
    }
}

/// Reference lists fetched from the backend.
#[derive(Clone)]
pub struct RemoteReferenceSource {
    api: SharedApi,
}

impl RemoteReferenceSource {
    #[must_use]
    pub fn new(api: SharedApi) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl ReferenceSource for RemoteReferenceSource {
    async fn pets(&self, client_id: i64) -> Result<Vec<Pet>, ApiError> {
        self.api.list_pets(client_id).await
    }

    async fn services(&self) -> Result<Vec<Service>, ApiError> {
        self.api.list_services().await
    }

    async fn veterinarians(&self) -> Result<Vec<Veterinarian>, ApiError> {
        self.api.list_veterinarians().await
    }
}
