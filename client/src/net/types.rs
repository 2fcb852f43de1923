//! Shared wire-protocol DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Field names on the wire follow the clinic backend (`idCita`, `estadoCita`,
//! ...); Rust names are English and mapped with `serde(rename)`. Everything
//! the backend may omit is optional or defaulted so a sparse record still
//! decodes instead of failing the whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use leptos::logging::warn;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle status of an appointment as stored by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[serde(rename = "programada")]
    Scheduled,
    #[serde(rename = "confirmada")]
    Confirmed,
    #[serde(rename = "completada")]
    Completed,
    #[serde(rename = "cancelada")]
    Cancelled,
    /// Any status string this client does not recognize.
    #[serde(rename = "desconocida", other)]
    Unknown,
}

impl AppointmentStatus {
    /// The four statuses the backend is known to emit, in lifecycle order.
    pub const KNOWN: [Self; 4] = [Self::Scheduled, Self::Confirmed, Self::Completed, Self::Cancelled];

    /// Wire value for this status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "programada",
            Self::Confirmed => "confirmada",
            Self::Completed => "completada",
            Self::Cancelled => "cancelada",
            Self::Unknown => "desconocida",
        }
    }

    /// Parse a known wire value. Unknown strings return `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::KNOWN.into_iter().find(|status| status.as_str() == raw)
    }

    /// Human-readable label for badges and filter options.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Confirmed => "Confirmed",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Unknown => "Unknown",
        }
    }
}

/// An appointment as returned by the backend (`CitaDetalle`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(rename = "idCita", default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<i64>,
    #[serde(rename = "idCliente", default, deserialize_with = "deserialize_optional_id")]
    pub client_id: Option<i64>,
    #[serde(rename = "idMascota", default, deserialize_with = "deserialize_optional_id")]
    pub pet_id: Option<i64>,
    #[serde(rename = "idServicio", default, deserialize_with = "deserialize_optional_id")]
    pub service_id: Option<i64>,
    /// Assigned veterinarian, if any.
    #[serde(rename = "userIdUser", default, deserialize_with = "deserialize_optional_id")]
    pub staff_id: Option<i64>,
    /// Appointment date, `YYYY-MM-DD`.
    #[serde(rename = "fecha", default, deserialize_with = "deserialize_null_default")]
    pub date: String,
    /// Appointment time, `HH:MM` (seconds optional).
    #[serde(rename = "hora", default, deserialize_with = "deserialize_null_default")]
    pub time: String,
    #[serde(rename = "estadoCita", default)]
    pub status: Option<AppointmentStatus>,
    #[serde(rename = "motivo", default)]
    pub reason: Option<String>,
    #[serde(rename = "sintomas", default)]
    pub symptoms: Option<String>,
    #[serde(rename = "diagnosticoPrevio", default)]
    pub prior_diagnosis: Option<String>,
    #[serde(rename = "tratamientosAnteriores", default, deserialize_with = "deserialize_null_default")]
    pub prior_treatments: Vec<String>,
    #[serde(rename = "notasAdicionales", default)]
    pub notes: Option<String>,
    /// Creation timestamp assigned by the backend. Epoch milliseconds are
    /// accepted and stored as RFC 3339.
    #[serde(rename = "createCita", default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<String>,
}

/// Payload for creating an appointment (`CrearCitaRequest`).
///
/// `pet_id` / `service_id` are `None` until the user picks one; the booking
/// form refuses to submit while either is unset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentDraft {
    #[serde(rename = "idCliente")]
    pub client_id: i64,
    #[serde(rename = "idMascota")]
    pub pet_id: Option<i64>,
    #[serde(rename = "idServicio")]
    pub service_id: Option<i64>,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "hora")]
    pub time: String,
    #[serde(rename = "userIdUser")]
    pub staff_id: Option<i64>,
    #[serde(rename = "motivo")]
    pub reason: String,
    #[serde(rename = "sintomas")]
    pub symptoms: String,
    #[serde(rename = "diagnosticoPrevio")]
    pub prior_diagnosis: String,
    #[serde(rename = "tratamientosAnteriores")]
    pub prior_treatments: Vec<String>,
    #[serde(rename = "notasAdicionales")]
    pub notes: String,
}

/// A client's pet (`Mascota`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    #[serde(rename = "idMascota")]
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "especie", default)]
    pub species: String,
    #[serde(rename = "raza", default)]
    pub breed: String,
}

/// A bookable clinic service (`Servicio`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "idServicio")]
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    /// Duration in minutes.
    #[serde(rename = "duracion", default)]
    pub duration_minutes: u32,
    #[serde(rename = "precio", default)]
    pub price: f64,
}

/// A veterinarian who can be assigned to an appointment (`Veterinario`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Veterinarian {
    #[serde(rename = "idUser")]
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "especialidad", default)]
    pub specialty: String,
}

/// New-account fields, forwarded to the backend exactly as entered.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    #[serde(rename = "nameUsers")]
    pub full_name: String,
    #[serde(rename = "userName")]
    pub username: String,
    #[serde(rename = "emailUser")]
    pub email: String,
    #[serde(rename = "phoneUser")]
    pub phone: String,
    #[serde(rename = "passwordUser")]
    pub password: String,
}

impl std::fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewAccount")
            .field("full_name", &self.full_name)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of a reschedule request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RescheduleRequest {
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "hora")]
    pub time: String,
    #[serde(rename = "motivoReprogramacion")]
    pub reason: String,
}

/// Body of a status-change request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChangeRequest {
    #[serde(rename = "estado")]
    pub status: AppointmentStatus,
    #[serde(rename = "notas")]
    pub notes: String,
}

/// Slot availability answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    #[serde(rename = "disponible")]
    pub available: bool,
    #[serde(rename = "mensaje", default)]
    pub message: Option<String>,
}

/// Appointment creation answer. `success` is echoed by the backend but a
/// 2xx response is what callers treat as success.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateAppointmentResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Appointment>,
}

/// Generic outcome body for mutating calls. Every field is optional because
/// the backend is inconsistent about what it echoes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiOutcome {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Every shape the backend uses for an appointment list. Records stay raw
/// so one malformed entry cannot hide the others.
#[derive(Clone, Debug, PartialEq)]
pub enum AppointmentListEnvelope {
    Bare(Vec<serde_json::Value>),
    Data(Vec<serde_json::Value>),
    Citas(Vec<serde_json::Value>),
    Unrecognized(serde_json::Value),
}

impl AppointmentListEnvelope {
    /// Classify a body: a bare array, then a `data` array, then a `citas` array.
    #[must_use]
    pub fn detect(body: serde_json::Value) -> Self {
        match body {
            serde_json::Value::Array(records) => Self::Bare(records),
            serde_json::Value::Object(mut map) => {
                if let Some(serde_json::Value::Array(records)) = map.remove("data") {
                    return Self::Data(records);
                }
                if let Some(serde_json::Value::Array(records)) = map.remove("citas") {
                    return Self::Citas(records);
                }
                Self::Unrecognized(serde_json::Value::Object(map))
            }
            other => Self::Unrecognized(other),
        }
    }

    /// Raw records; unrecognized shapes have none.
    #[must_use]
    pub fn into_records(self) -> Vec<serde_json::Value> {
        match self {
            Self::Bare(records) | Self::Data(records) | Self::Citas(records) => records,
            Self::Unrecognized(_) => Vec::new(),
        }
    }
}

/// Normalize a raw appointment-list body into a list.
///
/// Bare lists, `{ "data": [...] }` and `{ "citas": [...] }` yield the same
/// list; anything else yields an empty one. Records that fail to decode are
/// logged and skipped.
#[must_use]
pub fn normalize_appointment_list(body: serde_json::Value) -> Vec<Appointment> {
    let envelope = AppointmentListEnvelope::detect(body);
    if let AppointmentListEnvelope::Unrecognized(other) = &envelope {
        warn!("unrecognized appointment list shape: {other}");
    }
    envelope
        .into_records()
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            serde_json::from_value::<Appointment>(record)
                .map_err(|e| warn!("skipping appointment record {index}: {e}"))
                .ok()
        })
        .collect()
}

fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(raw) => Ok(Some(raw)),
        serde_json::Value::Number(number) => number
            .as_i64()
            .and_then(chrono::DateTime::from_timestamp_millis)
            .map(|ts| Some(ts.to_rfc3339()))
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {number}"))),
        _ => Err(D::Error::custom("expected timestamp string or epoch milliseconds")),
    }
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => number
            .as_i64()
            .map(Some)
            .ok_or_else(|| D::Error::custom("expected integer id")),
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected numeric id, got {raw:?}"))),
        _ => Err(D::Error::custom("expected id")),
    }
}
