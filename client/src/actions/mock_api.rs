//! Recording `ClinicApi` double for action tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::net::api::ClinicApi;
use crate::net::error::ApiError;
use crate::net::types::{
    ApiOutcome, Appointment, AppointmentDraft, AvailabilityResponse, CreateAppointmentResponse, NewAccount, Pet,
    RescheduleRequest, Service, StatusChangeRequest, Veterinarian,
};

/// Canned responses plus a log of every call, in order.
#[derive(Default)]
pub struct MockClinicApi {
    pub appointments: Vec<Appointment>,
    pub list_error: Option<ApiError>,
    /// Returned by every mutating call when set.
    pub mutation_error: Option<ApiError>,
    /// `None` answers "available".
    pub availability: Option<Result<AvailabilityResponse, ApiError>>,
    pub create_response: CreateAppointmentResponse,
    pub(crate) calls: Mutex<Vec<String>>,
}

impl MockClinicApi {
    pub fn with_appointments(appointments: Vec<Appointment>) -> Self {
        Self { appointments, ..Self::default() }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn mutation(&self) -> Result<ApiOutcome, ApiError> {
        match &self.mutation_error {
            Some(err) => Err(err.clone()),
            None => Ok(ApiOutcome { success: Some(true), message: None }),
        }
    }
}

#[async_trait(?Send)]
impl ClinicApi for MockClinicApi {
    async fn list_appointments(&self, client_id: i64) -> Result<Vec<Appointment>, ApiError> {
        self.record(format!("list_appointments:{client_id}"));
        match &self.list_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.appointments.clone()),
        }
    }

    async fn create_appointment(&self, draft: &AppointmentDraft) -> Result<CreateAppointmentResponse, ApiError> {
        self.record(format!("create_appointment:{}", draft.client_id));
        match &self.mutation_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.create_response.clone()),
        }
    }

    async fn check_availability(
        &self,
        date: &str,
        time: &str,
        staff_id: Option<i64>,
    ) -> Result<AvailabilityResponse, ApiError> {
        self.record(format!("check_availability:{date}:{time}:{staff_id:?}"));
        self.availability
            .clone()
            .unwrap_or(Ok(AvailabilityResponse { available: true, message: None }))
    }

    async fn reschedule_appointment(&self, id: i64, request: &RescheduleRequest) -> Result<ApiOutcome, ApiError> {
        self.record(format!("reschedule_appointment:{id}:{}:{}:{}", request.date, request.time, request.reason));
        self.mutation()
    }

    async fn cancel_appointment(&self, id: i64) -> Result<ApiOutcome, ApiError> {
        self.record(format!("cancel_appointment:{id}"));
        self.mutation()
    }

    async fn change_appointment_status(&self, id: i64, request: &StatusChangeRequest) -> Result<ApiOutcome, ApiError> {
        self.record(format!("change_appointment_status:{id}:{}:{}", request.status.as_str(), request.notes));
        self.mutation()
    }

    async fn list_pets(&self, client_id: i64) -> Result<Vec<Pet>, ApiError> {
        self.record(format!("list_pets:{client_id}"));
        Ok(Vec::new())
    }

    async fn list_services(&self) -> Result<Vec<Service>, ApiError> {
        self.record("list_services".to_owned());
        Ok(Vec::new())
    }

    async fn list_veterinarians(&self) -> Result<Vec<Veterinarian>, ApiError> {
        self.record("list_veterinarians".to_owned());
        Ok(Vec::new())
    }

    async fn register_account(&self, account: &NewAccount) -> Result<ApiOutcome, ApiError> {
        self.record(format!("register_account:{}", account.username));
        self.mutation()
    }
}
