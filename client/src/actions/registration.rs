//! Account registration.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use leptos::logging::{error, log};

use crate::net::api::ClinicApi;
use crate::net::error::ApiError;
use crate::net::types::{ApiOutcome, NewAccount};
use crate::state::notices::NoticeState;
use crate::state::registration::{REGISTERED_MESSAGE, RegistrationForm};

/// Gate submission on the field rules. Invalid forms get every field touched
/// and produce no payload.
pub fn prepare_registration(form: &mut RegistrationForm) -> Option<NewAccount> {
    if !form.is_valid() {
        form.touch_all();
        return None;
    }
    form.begin_submit();
    Some(form.account())
}

/// Send the new account.
///
/// # Errors
///
/// Returns the backend failure for inline display.
pub async fn submit_registration(api: &dyn ClinicApi, account: &NewAccount) -> Result<ApiOutcome, ApiError> {
    let result = api.register_account(account).await;
    match &result {
        Ok(outcome) => log!("registered account {}: {:?}", account.username, outcome.message),
        Err(e) => error!("registration failed: {e}"),
    }
    result
}

pub fn apply_registration(result: &Result<ApiOutcome, ApiError>, form: &mut RegistrationForm, notices: &mut NoticeState) {
    match result {
        Ok(_) => {
            form.submit_succeeded();
            notices.success(REGISTERED_MESSAGE);
        }
        Err(e) => form.submit_failed(e),
    }
}
