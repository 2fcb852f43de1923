//! REST API contract and HTTP implementation for the clinic backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! Pages and actions depend on the [`ClinicApi`] trait, never on
//! [`HttpClinicApi`] directly, so tests can swap in a recording double and
//! count exactly which calls were issued.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use async_trait::async_trait;
#[cfg(feature = "hydrate")]
use gloo_net::http::{Request, RequestBuilder, Response};

use super::error::ApiError;
use super::types::{
    ApiOutcome, Appointment, AppointmentDraft, AvailabilityResponse, CreateAppointmentResponse, NewAccount, Pet,
    RescheduleRequest, Service, StatusChangeRequest, Veterinarian,
};

/// Shared handle to the backend used across pages.
pub type SharedApi = Arc<dyn ClinicApi + Send + Sync>;

/// Every backend operation the client portal consumes.
#[async_trait(?Send)]
pub trait ClinicApi {
    /// All appointments for a client, in whatever order the backend returns.
    async fn list_appointments(&self, client_id: i64) -> Result<Vec<Appointment>, ApiError>;

    async fn create_appointment(&self, draft: &AppointmentDraft) -> Result<CreateAppointmentResponse, ApiError>;

    /// Whether `date`/`time` is free, optionally for one veterinarian.
    async fn check_availability(
        &self,
        date: &str,
        time: &str,
        staff_id: Option<i64>,
    ) -> Result<AvailabilityResponse, ApiError>;

    async fn reschedule_appointment(&self, id: i64, request: &RescheduleRequest) -> Result<ApiOutcome, ApiError>;

    async fn cancel_appointment(&self, id: i64) -> Result<ApiOutcome, ApiError>;

    async fn change_appointment_status(&self, id: i64, request: &StatusChangeRequest) -> Result<ApiOutcome, ApiError>;

    async fn list_pets(&self, client_id: i64) -> Result<Vec<Pet>, ApiError>;

    async fn list_services(&self) -> Result<Vec<Service>, ApiError>;

    async fn list_veterinarians(&self) -> Result<Vec<Veterinarian>, ApiError>;

    async fn register_account(&self, account: &NewAccount) -> Result<ApiOutcome, ApiError>;
}

#[cfg(any(test, feature = "hydrate"))]
const APPOINTMENTS_PATH: &str = "/api/citas";
#[cfg(any(test, feature = "hydrate"))]
const AVAILABILITY_PATH: &str = "/api/citas/disponibilidad";
#[cfg(any(test, feature = "hydrate"))]
const SERVICES_PATH: &str = "/api/servicios";
#[cfg(any(test, feature = "hydrate"))]
const VETERINARIANS_PATH: &str = "/api/veterinarios";
#[cfg(any(test, feature = "hydrate"))]
const REGISTER_PATH: &str = "/api/auth/register";

#[cfg(any(test, feature = "hydrate"))]
fn client_appointments_endpoint(client_id: i64) -> String {
    format!("{APPOINTMENTS_PATH}/cliente/{client_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn reschedule_endpoint(id: i64) -> String {
    format!("{APPOINTMENTS_PATH}/{id}/reprogramar")
}

#[cfg(any(test, feature = "hydrate"))]
fn cancel_endpoint(id: i64) -> String {
    format!("{APPOINTMENTS_PATH}/{id}/cancelar")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_endpoint(id: i64) -> String {
    format!("{APPOINTMENTS_PATH}/{id}/estado")
}

#[cfg(any(test, feature = "hydrate"))]
fn client_pets_endpoint(client_id: i64) -> String {
    format!("/api/mascotas/cliente/{client_id}")
}

/// Query pairs for the availability check; the staff filter is only sent when set.
#[cfg(any(test, feature = "hydrate"))]
fn availability_query(date: &str, time: &str, staff_id: Option<i64>) -> Vec<(&'static str, String)> {
    let mut pairs = vec![("fecha", date.to_owned()), ("hora", time.to_owned())];
    if let Some(staff_id) = staff_id {
        pairs.push(("userIdUser", staff_id.to_string()));
    }
    pairs
}

/// [`ClinicApi`] over HTTP. `base_url` may be empty for same-origin requests.
#[derive(Clone, Debug, Default)]
pub struct HttpClinicApi {
    base_url: String,
}

impl HttpClinicApi {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[cfg(feature = "hydrate")]
#[async_trait(?Send)]
impl ClinicApi for HttpClinicApi {
    async fn list_appointments(&self, client_id: i64) -> Result<Vec<Appointment>, ApiError> {
        let resp = send(Request::get(&self.url(&client_appointments_endpoint(client_id)))).await?;
        let body: serde_json::Value = read_json(resp).await?;
        Ok(super::types::normalize_appointment_list(body))
    }

    async fn create_appointment(&self, draft: &AppointmentDraft) -> Result<CreateAppointmentResponse, ApiError> {
        let resp = send_json(Request::post(&self.url(APPOINTMENTS_PATH)), draft).await?;
        let resp = ensure_ok(resp).await?;
        let body = resp.text().await.unwrap_or_default();
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }

    async fn check_availability(
        &self,
        date: &str,
        time: &str,
        staff_id: Option<i64>,
    ) -> Result<AvailabilityResponse, ApiError> {
        let pairs = availability_query(date, time, staff_id);
        let builder = Request::get(&self.url(AVAILABILITY_PATH)).query(pairs.iter().map(|(k, v)| (*k, v.as_str())));
        let resp = send(builder).await?;
        read_json(resp).await
    }

    async fn reschedule_appointment(&self, id: i64, request: &RescheduleRequest) -> Result<ApiOutcome, ApiError> {
        let resp = send_json(Request::put(&self.url(&reschedule_endpoint(id))), request).await?;
        read_outcome(resp).await
    }

    async fn cancel_appointment(&self, id: i64) -> Result<ApiOutcome, ApiError> {
        let resp = send(Request::put(&self.url(&cancel_endpoint(id)))).await?;
        read_outcome(resp).await
    }

    async fn change_appointment_status(&self, id: i64, request: &StatusChangeRequest) -> Result<ApiOutcome, ApiError> {
        let resp = send_json(Request::patch(&self.url(&status_endpoint(id))), request).await?;
        read_outcome(resp).await
    }

    async fn list_pets(&self, client_id: i64) -> Result<Vec<Pet>, ApiError> {
        let resp = send(Request::get(&self.url(&client_pets_endpoint(client_id)))).await?;
        read_json(resp).await
    }

    async fn list_services(&self) -> Result<Vec<Service>, ApiError> {
        let resp = send(Request::get(&self.url(SERVICES_PATH))).await?;
        read_json(resp).await
    }

    async fn list_veterinarians(&self) -> Result<Vec<Veterinarian>, ApiError> {
        let resp = send(Request::get(&self.url(VETERINARIANS_PATH))).await?;
        read_json(resp).await
    }

    async fn register_account(&self, account: &NewAccount) -> Result<ApiOutcome, ApiError> {
        let resp = send_json(Request::post(&self.url(REGISTER_PATH)), account).await?;
        read_outcome(resp).await
    }
}

#[cfg(not(feature = "hydrate"))]
#[async_trait(?Send)]
impl ClinicApi for HttpClinicApi {
    async fn list_appointments(&self, _client_id: i64) -> Result<Vec<Appointment>, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn create_appointment(&self, _draft: &AppointmentDraft) -> Result<CreateAppointmentResponse, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn check_availability(
        &self,
        _date: &str,
        _time: &str,
        _staff_id: Option<i64>,
    ) -> Result<AvailabilityResponse, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn reschedule_appointment(&self, _id: i64, _request: &RescheduleRequest) -> Result<ApiOutcome, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn cancel_appointment(&self, _id: i64) -> Result<ApiOutcome, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn change_appointment_status(
        &self,
        _id: i64,
        _request: &StatusChangeRequest,
    ) -> Result<ApiOutcome, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn list_pets(&self, _client_id: i64) -> Result<Vec<Pet>, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn list_services(&self) -> Result<Vec<Service>, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn list_veterinarians(&self) -> Result<Vec<Veterinarian>, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn register_account(&self, _account: &NewAccount) -> Result<ApiOutcome, ApiError> {
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    builder.send().await.map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn send_json<T: serde::Serialize>(builder: RequestBuilder, body: &T) -> Result<Response, ApiError> {
    builder
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Turn a non-2xx response into [`ApiError::Status`], keeping the body's `message`.
#[cfg(feature = "hydrate")]
async fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status { status, message: super::error::error_message_from_body(&body) })
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let resp = ensure_ok(resp).await?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Mutating endpoints may answer with an empty or non-JSON body; any 2xx counts.
#[cfg(feature = "hydrate")]
async fn read_outcome(resp: Response) -> Result<ApiOutcome, ApiError> {
    let resp = ensure_ok(resp).await?;
    let body = resp.text().await.unwrap_or_default();
    Ok(serde_json::from_str(&body).unwrap_or_default())
}
