//! Load, reschedule, cancel, and confirm appointments.
//!
//! Every mutating action issues one backend call and, on success, refetches
//! the full list. The local list is never patched in place.

#[cfg(test)]
#[path = "appointments_test.rs"]
mod appointments_test;

use leptos::logging::{error, log};

use super::Confirmation;
use crate::net::api::ClinicApi;
use crate::net::error::ApiError;
use crate::net::types::{Appointment, AppointmentStatus, StatusChangeRequest};
use crate::session::Session;
use crate::state::appointments::{AppointmentsState, RescheduleDraft};
use crate::state::notices::NoticeState;

pub const RESCHEDULED_MESSAGE: &str = "Appointment rescheduled";
pub const RESCHEDULE_FAILED_MESSAGE: &str = "Could not reschedule the appointment. Please try again.";
pub const CANCELLED_MESSAGE: &str = "Appointment cancelled";
pub const CANCEL_FAILED_MESSAGE: &str = "Could not cancel the appointment. Please try again.";
pub const CONFIRMED_MESSAGE: &str = "Appointment confirmed";
pub const CONFIRM_NOTE: &str = "Confirmed by client";
pub const CANCEL_PROMPT: &str = "Are you sure you want to cancel this appointment?";

/// Result of a mutating appointment action.
#[derive(Clone, Debug, PartialEq)]
pub enum ActionOutcome {
    /// The call succeeded and the list was refetched.
    Refreshed { notice: String, reload: Result<Vec<Appointment>, ApiError> },
    /// The call failed; the list is untouched.
    Failed { message: String },
    /// No call was made; page state is left as it was.
    Skipped,
}

impl ActionOutcome {
    /// Fold the outcome into page state and the notice queue.
    pub fn apply(self, state: &mut AppointmentsState, notices: &mut NoticeState) {
        match self {
            Self::Refreshed { notice, reload } => {
                state.close_reschedule();
                notices.success(notice);
                state.apply_load(reload);
            }
            Self::Failed { message } => {
                notices.error(message);
                state.action_failed();
            }
            Self::Skipped => {}
        }
    }
}

/// Fetch every appointment for the session's client.
///
/// # Errors
///
/// Returns the backend failure; the caller shows the inline load error.
pub async fn load_appointments(api: &dyn ClinicApi, session: Session) -> Result<Vec<Appointment>, ApiError> {
    log!("loading appointments for client {}", session.client_id());
    let result = api.list_appointments(session.client_id()).await;
    match &result {
        Ok(list) => log!("loaded {} appointments", list.len()),
        Err(e) => error!("failed to load appointments: {e}"),
    }
    result
}

/// Submit the reschedule modal. A missing draft or appointment id is a no-op.
pub async fn reschedule_appointment(
    api: &dyn ClinicApi,
    session: Session,
    draft: Option<RescheduleDraft>,
) -> ActionOutcome {
    let Some((id, request)) = draft.as_ref().and_then(RescheduleDraft::request) else {
        return ActionOutcome::Skipped;
    };
    match api.reschedule_appointment(id, &request).await {
        Ok(_) => refreshed(api, session, RESCHEDULED_MESSAGE).await,
        Err(e) => {
            error!("failed to reschedule appointment {id}: {e}");
            ActionOutcome::Failed { message: e.user_message(RESCHEDULE_FAILED_MESSAGE) }
        }
    }
}

/// Cancel `id` once the user has answered the confirmation prompt.
pub async fn cancel_appointment(
    api: &dyn ClinicApi,
    session: Session,
    id: Option<i64>,
    choice: Confirmation,
) -> ActionOutcome {
    let Some(id) = id else {
        return ActionOutcome::Skipped;
    };
    if choice == Confirmation::Declined {
        return ActionOutcome::Skipped;
    }
    match api.cancel_appointment(id).await {
        Ok(_) => refreshed(api, session, CANCELLED_MESSAGE).await,
        Err(e) => {
            error!("failed to cancel appointment {id}: {e}");
            ActionOutcome::Failed { message: e.user_message(CANCEL_FAILED_MESSAGE) }
        }
    }
}

/// Mark `id` confirmed with the fixed client note.
pub async fn confirm_appointment(api: &dyn ClinicApi, session: Session, id: i64) -> ActionOutcome {
    let request = StatusChangeRequest { status: AppointmentStatus::Confirmed, notes: CONFIRM_NOTE.to_owned() };
    match api.change_appointment_status(id, &request).await {
        Ok(_) => refreshed(api, session, CONFIRMED_MESSAGE).await,
        Err(e) => {
            error!("failed to confirm appointment {id}: {e}");
            ActionOutcome::Failed { message: confirm_failed_message(&e) }
        }
    }
}

#[must_use]
pub fn confirm_failed_message(err: &ApiError) -> String {
    format!("Could not confirm the appointment. Error: {}", err.detail())
}

async fn refreshed(api: &dyn ClinicApi, session: Session, notice: &str) -> ActionOutcome {
    let reload = load_appointments(api, session).await;
    ActionOutcome::Refreshed { notice: notice.to_owned(), reload }
}
