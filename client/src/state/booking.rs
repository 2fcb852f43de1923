//! Booking form state.
//!
//! DESIGN
//! ======
//! Headless model behind `BookAppointmentPage`. Validation is synchronous and
//! ordered; the first failing rule wins and later rules are not evaluated.
//! Availability is tracked as a tri-state so the `block` failure policy can
//! hold submission until a check succeeds.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use crate::actions::Confirmation;
use crate::config::AvailabilityFailurePolicy;
use crate::net::error::ApiError;
use crate::net::types::{AppointmentDraft, AvailabilityResponse};
use crate::reference::ReferenceData;

pub const SUBMIT_FAILED_MESSAGE: &str = "Could not book the appointment. Please try again.";
pub const SLOT_AVAILABLE_MESSAGE: &str = "Time slot available";
pub const SLOT_UNAVAILABLE_MESSAGE: &str = "Time slot not available";
pub const AVAILABILITY_UNVERIFIED_MESSAGE: &str = "Availability could not be verified";

/// First failing booking rule, in evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("You must select a pet")]
    MissingPet,
    #[error("You must select a service")]
    MissingService,
    #[error("You must select a date")]
    MissingDate,
    #[error("You must select a time")]
    MissingTime,
    #[error("The selected time slot is not available")]
    SlotUnavailable,
    #[error("Availability could not be verified")]
    AvailabilityUnverified,
}

/// Result of the most recent availability check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Availability {
    /// Free, or not yet checked.
    #[default]
    Available,
    Unavailable,
    /// The check failed under the `block` policy.
    Unverified,
}

/// Arguments for one availability check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvailabilityQuery {
    pub date: String,
    pub time: String,
    pub staff_id: Option<i64>,
}

/// Parse a `<select>` value into an id; `0`, blank, and garbage mean unset.
#[must_use]
pub fn parse_selection(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

#[derive(Clone, Debug)]
pub struct BookingForm {
    pub client_id: i64,
    pub pet_id: Option<i64>,
    pub service_id: Option<i64>,
    pub date: String,
    pub time: String,
    pub staff_id: Option<i64>,
    pub reason: String,
    pub symptoms: String,
    pub prior_diagnosis: String,
    pub treatments: Vec<String>,
    /// Text box feeding `add_treatment`.
    pub treatment_input: String,
    pub notes: String,

    /// Earliest selectable date (`YYYY-MM-DD`).
    pub min_date: String,
    pub reference: ReferenceData,

    pub loading: bool,
    pub checking_availability: bool,
    /// Ticket of the most recent availability check.
    pub availability_ticket: u64,
    pub availability: Availability,
    pub availability_message: String,
    pub error: Option<String>,
    /// Set once the backend accepted the booking; the page navigates away.
    pub submitted: bool,
    /// Discard confirmation dialog is open.
    pub discard_requested: bool,
}

impl BookingForm {
    /// Empty form for `client_id` with the date preset to `today`.
    #[must_use]
    pub fn new(client_id: i64, today: &str) -> Self {
        Self {
            client_id,
            pet_id: None,
            service_id: None,
            date: today.to_owned(),
            time: String::new(),
            staff_id: None,
            reason: String::new(),
            symptoms: String::new(),
            prior_diagnosis: String::new(),
            treatments: Vec::new(),
            treatment_input: String::new(),
            notes: String::new(),
            min_date: today.to_owned(),
            reference: ReferenceData::default(),
            loading: false,
            checking_availability: false,
            availability_ticket: 0,
            availability: Availability::default(),
            availability_message: String::new(),
            error: None,
            submitted: false,
            discard_requested: false,
        }
    }

    /// Append the trimmed treatment input and clear it. Blank input is ignored.
    pub fn add_treatment(&mut self) {
        let entry = self.treatment_input.trim();
        if entry.is_empty() {
            return;
        }
        self.treatments.push(entry.to_owned());
        self.treatment_input.clear();
    }

    /// Remove the treatment at `index`; out-of-range indices are ignored.
    pub fn remove_treatment(&mut self, index: usize) {
        if index < self.treatments.len() {
            self.treatments.remove(index);
        }
    }

    /// Check rules in order and record the outcome in `error`.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule.
    pub fn validate(&mut self) -> Result<(), BookingError> {
        let result = self.first_violation().map_or(Ok(()), Err);
        self.error = result.err().map(|e| e.to_string());
        result
    }

    fn first_violation(&self) -> Option<BookingError> {
        if self.pet_id.filter(|id| *id > 0).is_none() {
            return Some(BookingError::MissingPet);
        }
        if self.service_id.filter(|id| *id > 0).is_none() {
            return Some(BookingError::MissingService);
        }
        if self.date.is_empty() {
            return Some(BookingError::MissingDate);
        }
        if self.time.is_empty() {
            return Some(BookingError::MissingTime);
        }
        match self.availability {
            Availability::Available => None,
            Availability::Unavailable => Some(BookingError::SlotUnavailable),
            Availability::Unverified => Some(BookingError::AvailabilityUnverified),
        }
    }

    /// Arguments for the availability query, or `None` while date or time is empty.
    #[must_use]
    pub fn availability_query(&self) -> Option<AvailabilityQuery> {
        if self.date.is_empty() || self.time.is_empty() {
            return None;
        }
        Some(AvailabilityQuery { date: self.date.clone(), time: self.time.clone(), staff_id: self.staff_id })
    }

    /// Start a check and return its ticket. Starting another check makes
    /// earlier tickets stale.
    pub fn begin_availability_check(&mut self) -> u64 {
        self.checking_availability = true;
        self.availability_ticket += 1;
        self.availability_ticket
    }

    /// Apply a result only if `ticket` belongs to the latest check. Returns
    /// whether it was applied.
    pub fn apply_availability_if_current(
        &mut self,
        ticket: u64,
        result: Result<AvailabilityResponse, ApiError>,
        policy: AvailabilityFailurePolicy,
    ) -> bool {
        if ticket != self.availability_ticket {
            return false;
        }
        self.apply_availability(result, policy);
        true
    }

    /// Record a check result. Failures follow `policy`.
    pub fn apply_availability(
        &mut self,
        result: Result<AvailabilityResponse, ApiError>,
        policy: AvailabilityFailurePolicy,
    ) {
        self.checking_availability = false;
        match result {
            Ok(response) => {
                let default_message =
                    if response.available { SLOT_AVAILABLE_MESSAGE } else { SLOT_UNAVAILABLE_MESSAGE };
                self.availability =
                    if response.available { Availability::Available } else { Availability::Unavailable };
                self.availability_message = response
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| default_message.to_owned());
                if self.error.as_deref() == Some(AVAILABILITY_UNVERIFIED_MESSAGE) {
                    self.error = None;
                }
            }
            Err(_) => match policy {
                AvailabilityFailurePolicy::AssumeAvailable => {
                    self.availability = Availability::Available;
                }
                AvailabilityFailurePolicy::AssumeUnavailable => {
                    self.availability = Availability::Unavailable;
                    self.availability_message = SLOT_UNAVAILABLE_MESSAGE.to_owned();
                }
                AvailabilityFailurePolicy::Block => {
                    self.availability = Availability::Unverified;
                    self.availability_message = AVAILABILITY_UNVERIFIED_MESSAGE.to_owned();
                    self.error = Some(AVAILABILITY_UNVERIFIED_MESSAGE.to_owned());
                }
            },
        }
    }

    pub fn begin_reference_load(&mut self) {
        self.loading = true;
    }

    pub fn apply_reference(&mut self, reference: ReferenceData) {
        self.reference = reference;
        self.loading = false;
    }

    /// Creation payload built from the current fields.
    #[must_use]
    pub fn draft(&self) -> AppointmentDraft {
        AppointmentDraft {
            client_id: self.client_id,
            pet_id: self.pet_id,
            service_id: self.service_id,
            date: self.date.clone(),
            time: self.time.clone(),
            staff_id: self.staff_id,
            reason: self.reason.clone(),
            symptoms: self.symptoms.clone(),
            prior_diagnosis: self.prior_diagnosis.clone(),
            prior_treatments: self.treatments.clone(),
            notes: self.notes.clone(),
        }
    }

    pub fn begin_submit(&mut self) {
        self.loading = true;
    }

    pub fn submit_succeeded(&mut self) {
        self.loading = false;
        self.submitted = true;
    }

    /// Show the backend message (or the fallback) and re-enable the form.
    pub fn submit_failed(&mut self, err: &ApiError) {
        self.error = Some(err.user_message(SUBMIT_FAILED_MESSAGE));
        self.loading = false;
    }

    pub fn request_discard(&mut self) {
        self.discard_requested = true;
    }

    /// Close the discard dialog; returns `true` when the form should be abandoned.
    pub fn resolve_discard(&mut self, choice: Confirmation) -> bool {
        self.discard_requested = false;
        choice == Confirmation::Confirmed
    }
}
