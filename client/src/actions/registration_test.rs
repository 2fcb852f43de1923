use futures::executor::block_on;

use super::*;
use crate::actions::mock_api::MockClinicApi;
use crate::state::registration::{Field, REGISTER_FAILED_MESSAGE};

fn form_with_name(name: &str) -> RegistrationForm {
    RegistrationForm {
        full_name: name.to_owned(),
        username: "maria".to_owned(),
        email: "maria@example.com".to_owned(),
        phone: String::new(),
        password: "secret12".to_owned(),
        ..RegistrationForm::default()
    }
}

/// Prepare and, when valid, submit; mirrors the page's submit handler.
fn submit(api: &MockClinicApi, form: &mut RegistrationForm, notices: &mut NoticeState) {
    if let Some(account) = prepare_registration(form) {
        let result = block_on(submit_registration(api, &account));
        apply_registration(&result, form, notices);
    }
}

#[test]
fn short_name_fails_without_contacting_backend() {
    let api = MockClinicApi::default();
    let mut form = form_with_name("Ma");
    let mut notices = NoticeState::default();

    submit(&api, &mut form, &mut notices);

    assert!(api.calls().is_empty());
    assert!(!form.submitting);
    for field in Field::ALL {
        assert!(form.is_touched(field));
    }
    assert!(form.visible_error(Field::FullName).is_some());
}

#[test]
fn minimum_valid_name_issues_exactly_one_call() {
    let api = MockClinicApi::default();
    let mut form = form_with_name("Mar");
    let mut notices = NoticeState::default();

    submit(&api, &mut form, &mut notices);

    assert_eq!(api.calls(), vec!["register_account:maria"]);
    assert!(form.registered);
    assert_eq!(notices.latest().map(|n| n.text.as_str()), Some(REGISTERED_MESSAGE));
}

#[test]
fn backend_rejection_shows_message_inline() {
    let api = MockClinicApi {
        mutation_error: Some(ApiError::Status { status: 409, message: Some("Usuario ya existe".to_owned()) }),
        ..MockClinicApi::default()
    };
    let mut form = form_with_name("Maria");
    let mut notices = NoticeState::default();

    submit(&api, &mut form, &mut notices);

    assert_eq!(form.error.as_deref(), Some("Usuario ya existe"));
    assert!(!form.registered);
    assert!(notices.is_empty());
}

#[test]
fn transport_failure_uses_fallback() {
    let api = MockClinicApi {
        mutation_error: Some(ApiError::Network("offline".to_owned())),
        ..MockClinicApi::default()
    };
    let mut form = form_with_name("Maria");
    let mut notices = NoticeState::default();

    submit(&api, &mut form, &mut notices);

    assert_eq!(form.error.as_deref(), Some(REGISTER_FAILED_MESSAGE));
    assert!(!form.submitting);
}
