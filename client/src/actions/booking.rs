//! Booking form orchestration: reference data, availability, submission.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use leptos::logging::{error, log, warn};

use crate::config::AvailabilityFailurePolicy;
use crate::net::api::ClinicApi;
use crate::net::error::ApiError;
use crate::net::types::{AppointmentDraft, AvailabilityResponse, CreateAppointmentResponse};
use crate::reference::{ReferenceData, ReferenceSource};
use crate::session::Session;
use crate::state::booking::{AvailabilityQuery, BookingForm};
use crate::state::notices::NoticeState;

pub const BOOKED_MESSAGE: &str = "Appointment booked!";
pub const DISCARD_PROMPT: &str = "Are you sure you want to cancel? The information you entered will be lost.";

/// Load pets, services, and veterinarians. A failed list is logged and left empty.
pub async fn load_reference_data(source: &dyn ReferenceSource, session: Session) -> ReferenceData {
    let pets = source.pets(session.client_id()).await.unwrap_or_else(|e| {
        error!("failed to load pets: {e}");
        Vec::new()
    });
    let services = source.services().await.unwrap_or_else(|e| {
        error!("failed to load services: {e}");
        Vec::new()
    });
    let veterinarians = source.veterinarians().await.unwrap_or_else(|e| {
        error!("failed to load veterinarians: {e}");
        Vec::new()
    });
    ReferenceData { pets, services, veterinarians }
}

/// Ask the backend whether the slot is free. `None` issues no call.
pub async fn check_availability(
    api: &dyn ClinicApi,
    query: Option<AvailabilityQuery>,
    policy: AvailabilityFailurePolicy,
) -> Option<Result<AvailabilityResponse, ApiError>> {
    let query = query?;
    let result = api.check_availability(&query.date, &query.time, query.staff_id).await;
    if let Err(e) = &result {
        warn!("availability check failed ({policy:?}): {e}");
    }
    Some(result)
}

/// Validate and, when valid, lock the form and return the payload to send.
pub fn prepare_booking(form: &mut BookingForm) -> Option<AppointmentDraft> {
    form.validate().ok()?;
    form.begin_submit();
    Some(form.draft())
}

/// Send the booking.
///
/// # Errors
///
/// Returns the backend failure for the form to display.
pub async fn submit_booking(
    api: &dyn ClinicApi,
    draft: &AppointmentDraft,
) -> Result<CreateAppointmentResponse, ApiError> {
    log!("submitting appointment for client {} on {} {}", draft.client_id, draft.date, draft.time);
    let result = api.create_appointment(draft).await;
    match &result {
        Ok(response) if response.success => {
            let id = response.data.as_ref().and_then(|a| a.id);
            log!("appointment booked (id {id:?})");
        }
        // Any 2xx is treated as booked, even with an explicit `success: false`.
        Ok(response) => warn!("backend accepted booking but reported success=false: {:?}", response.message),
        Err(e) => error!("failed to book appointment: {e}"),
    }
    result
}

/// Fold a submission result into the form and notice queue.
pub fn apply_submit(
    result: &Result<CreateAppointmentResponse, ApiError>,
    form: &mut BookingForm,
    notices: &mut NoticeState,
) {
    match result {
        Ok(_) => {
            form.submit_succeeded();
            notices.success(BOOKED_MESSAGE);
        }
        Err(e) => form.submit_failed(e),
    }
}
