//! Appointment-list state for the "my appointments" page.
//!
//! DESIGN
//! ======
//! The loaded list is the single source of truth: every mutating action
//! refetches instead of patching locally. Both `appointments` and the
//! filtered `visible` view are kept newest-first by creation time.

#[cfg(test)]
#[path = "appointments_test.rs"]
mod appointments_test;

use crate::net::error::ApiError;
use crate::net::types::{Appointment, AppointmentStatus, RescheduleRequest};
use crate::util::dates::sort_timestamp;

pub const LOAD_FAILED_MESSAGE: &str = "Could not load appointments";

/// Status filter for the list. `All` is the `todas` query value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(AppointmentStatus),
}

impl StatusFilter {
    /// Query parameter carrying the filter on the list route.
    pub const QUERY_KEY: &'static str = "estado";

    /// Every selectable filter, in dropdown order.
    pub const OPTIONS: [Self; 5] = [
        Self::All,
        Self::Only(AppointmentStatus::Scheduled),
        Self::Only(AppointmentStatus::Confirmed),
        Self::Only(AppointmentStatus::Completed),
        Self::Only(AppointmentStatus::Cancelled),
    ];

    /// Parse an `estado` value. Absent or unrecognized values mean `All`.
    #[must_use]
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(Self::parse).unwrap_or_default()
    }

    /// Parse one of the five recognized values.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw == "todas" {
            return Some(Self::All);
        }
        AppointmentStatus::parse(raw).map(Self::Only)
    }

    #[must_use]
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::All => "todas",
            Self::Only(status) => status.as_str(),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(status) => status.label(),
        }
    }

    #[must_use]
    pub fn matches(self, appointment: &Appointment) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => appointment.status == Some(status),
        }
    }
}

/// Which actions an appointment offers, derived from its status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AvailableActions {
    pub confirm: bool,
    pub cancel: bool,
    pub reschedule: bool,
}

impl AvailableActions {
    #[must_use]
    pub fn for_status(status: Option<AppointmentStatus>) -> Self {
        match status {
            Some(AppointmentStatus::Scheduled) => Self { confirm: true, cancel: true, reschedule: true },
            Some(AppointmentStatus::Confirmed) => Self { confirm: false, cancel: true, reschedule: true },
            _ => Self::default(),
        }
    }
}

/// CSS class for a status badge; empty for unknown or absent status.
#[must_use]
pub fn status_class(status: Option<AppointmentStatus>) -> &'static str {
    match status {
        Some(AppointmentStatus::Scheduled) => "estado-programada",
        Some(AppointmentStatus::Confirmed) => "estado-confirmada",
        Some(AppointmentStatus::Cancelled) => "estado-cancelada",
        Some(AppointmentStatus::Completed) => "estado-completada",
        Some(AppointmentStatus::Unknown) | None => "",
    }
}

/// Sort newest-first by creation time (falling back to appointment date, then
/// epoch). The sort is stable, so equal keys keep their relative order.
pub fn sort_by_created_desc(list: &mut [Appointment]) {
    list.sort_by_cached_key(|appt| {
        std::cmp::Reverse(sort_timestamp(appt.created_at.as_deref(), Some(appt.date.as_str())))
    });
}

/// The subset of `list` matching `filter`, newest-first.
#[must_use]
pub fn filter_appointments(list: &[Appointment], filter: StatusFilter) -> Vec<Appointment> {
    let mut visible: Vec<Appointment> = list.iter().filter(|a| filter.matches(a)).cloned().collect();
    sort_by_created_desc(&mut visible);
    visible
}

/// Editable fields of the reschedule modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RescheduleDraft {
    pub appointment_id: Option<i64>,
    pub date: String,
    pub time: String,
    pub reason: String,
}

impl RescheduleDraft {
    /// Pre-fill with the appointment's current slot and an empty reason.
    #[must_use]
    pub fn for_appointment(appointment: &Appointment) -> Self {
        Self {
            appointment_id: appointment.id,
            date: appointment.date.clone(),
            time: appointment.time.clone(),
            reason: String::new(),
        }
    }

    /// Target id and request body, or `None` when no appointment id is known.
    #[must_use]
    pub fn request(&self) -> Option<(i64, RescheduleRequest)> {
        let id = self.appointment_id?;
        Some((
            id,
            RescheduleRequest { date: self.date.clone(), time: self.time.clone(), reason: self.reason.clone() },
        ))
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppointmentsState {
    /// Everything loaded for the client, newest-first.
    pub appointments: Vec<Appointment>,
    /// `appointments` narrowed by `filter`, newest-first.
    pub visible: Vec<Appointment>,
    pub filter: StatusFilter,
    pub loading: bool,
    pub error: Option<String>,
    /// Open reschedule modal, if any.
    pub reschedule: Option<RescheduleDraft>,
    /// Appointment awaiting cancel confirmation.
    pub pending_cancel: Option<i64>,
}

impl AppointmentsState {
    /// Change the filter and re-derive the visible list.
    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
        self.apply_filter();
    }

    pub fn apply_filter(&mut self) {
        self.visible = filter_appointments(&self.appointments, self.filter);
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Install a fetched list, or clear everything and show the load error.
    pub fn apply_load(&mut self, result: Result<Vec<Appointment>, ApiError>) {
        match result {
            Ok(mut list) => {
                sort_by_created_desc(&mut list);
                self.appointments = list;
                self.apply_filter();
            }
            Err(_) => {
                self.error = Some(LOAD_FAILED_MESSAGE.to_owned());
                self.appointments.clear();
                self.visible.clear();
            }
        }
        self.loading = false;
    }

    pub fn begin_action(&mut self) {
        self.loading = true;
    }

    /// A mutating call failed: re-enable the UI so the user can retry.
    pub fn action_failed(&mut self) {
        self.loading = false;
    }

    pub fn open_reschedule(&mut self, appointment: &Appointment) {
        self.reschedule = Some(RescheduleDraft::for_appointment(appointment));
    }

    pub fn close_reschedule(&mut self) {
        self.reschedule = None;
    }

    /// Apply `edit` to the open reschedule draft; no-op when the modal is closed.
    pub fn edit_reschedule(&mut self, edit: impl FnOnce(&mut RescheduleDraft)) {
        if let Some(draft) = self.reschedule.as_mut() {
            edit(draft);
        }
    }

    pub fn request_cancel(&mut self, id: i64) {
        self.pending_cancel = Some(id);
    }

    /// Clear and return the appointment awaiting cancel confirmation.
    pub fn take_pending_cancel(&mut self) -> Option<i64> {
        self.pending_cancel.take()
    }

    #[must_use]
    pub fn count_with_status(&self, status: AppointmentStatus) -> usize {
        self.appointments.iter().filter(|a| a.status == Some(status)).count()
    }

    /// Dropdown text for `filter`, with how many loaded appointments it matches.
    #[must_use]
    pub fn filter_option_label(&self, filter: StatusFilter) -> String {
        let count = match filter {
            StatusFilter::All => self.appointments.len(),
            StatusFilter::Only(status) => self.count_with_status(status),
        };
        format!("{} ({count})", filter.label())
    }
}
