use super::*;

// =============================================================
// Helpers
// =============================================================

fn appt(id: i64, status: AppointmentStatus, created: Option<&str>, date: &str) -> Appointment {
    Appointment {
        id: Some(id),
        client_id: Some(1),
        date: date.to_owned(),
        time: "10:00".to_owned(),
        status: Some(status),
        created_at: created.map(str::to_owned),
        ..Appointment::default()
    }
}

fn ids(list: &[Appointment]) -> Vec<i64> {
    list.iter().filter_map(|a| a.id).collect()
}

fn sample() -> Vec<Appointment> {
    vec![
        appt(1, AppointmentStatus::Scheduled, Some("2025-03-01T08:00:00"), "2025-04-01"),
        appt(2, AppointmentStatus::Cancelled, Some("2025-03-05T08:00:00"), "2025-04-02"),
        appt(3, AppointmentStatus::Confirmed, None, "2025-03-03"),
        appt(4, AppointmentStatus::Scheduled, Some("2025-03-04T08:00:00"), "2025-04-03"),
        appt(5, AppointmentStatus::Completed, None, ""),
    ]
}

// =============================================================
// StatusFilter
// =============================================================

#[test]
fn from_query_accepts_the_five_recognized_values() {
    assert_eq!(StatusFilter::from_query(Some("todas")), StatusFilter::All);
    assert_eq!(
        StatusFilter::from_query(Some("programada")),
        StatusFilter::Only(AppointmentStatus::Scheduled)
    );
    assert_eq!(
        StatusFilter::from_query(Some("confirmada")),
        StatusFilter::Only(AppointmentStatus::Confirmed)
    );
    assert_eq!(
        StatusFilter::from_query(Some("completada")),
        StatusFilter::Only(AppointmentStatus::Completed)
    );
    assert_eq!(
        StatusFilter::from_query(Some("cancelada")),
        StatusFilter::Only(AppointmentStatus::Cancelled)
    );
}

#[test]
fn from_query_ignores_unrecognized_values() {
    assert_eq!(StatusFilter::from_query(None), StatusFilter::All);
    assert_eq!(StatusFilter::from_query(Some("")), StatusFilter::All);
    assert_eq!(StatusFilter::from_query(Some("pendiente")), StatusFilter::All);
    assert_eq!(StatusFilter::from_query(Some("desconocida")), StatusFilter::All);
    assert_eq!(StatusFilter::from_query(Some("PROGRAMADA")), StatusFilter::All);
}

#[test]
fn query_value_round_trips_for_every_option() {
    for option in StatusFilter::OPTIONS {
        assert_eq!(StatusFilter::parse(option.as_query_value()), Some(option));
    }
}

// =============================================================
// Sorting and filtering
// =============================================================

#[test]
fn sort_orders_by_creation_then_date_then_epoch() {
    let mut list = sample();
    sort_by_created_desc(&mut list);
    assert_eq!(ids(&list), vec![2, 4, 3, 1, 5]);
}

#[test]
fn sort_keeps_relative_order_on_equal_keys() {
    let mut list = vec![
        appt(10, AppointmentStatus::Scheduled, None, ""),
        appt(11, AppointmentStatus::Scheduled, None, ""),
        appt(12, AppointmentStatus::Scheduled, None, ""),
    ];
    sort_by_created_desc(&mut list);
    assert_eq!(ids(&list), vec![10, 11, 12]);
}

#[test]
fn filter_all_returns_every_appointment_sorted() {
    let visible = filter_appointments(&sample(), StatusFilter::All);
    assert_eq!(ids(&visible), vec![2, 4, 3, 1, 5]);
}

#[test]
fn filter_by_status_returns_exact_subset_in_sorted_order() {
    let visible = filter_appointments(&sample(), StatusFilter::Only(AppointmentStatus::Scheduled));
    assert_eq!(ids(&visible), vec![4, 1]);
    assert!(visible.iter().all(|a| a.status == Some(AppointmentStatus::Scheduled)));
}

#[test]
fn filter_excludes_unknown_status_from_every_specific_filter() {
    let mut list = sample();
    list.push(Appointment { id: Some(99), status: Some(AppointmentStatus::Unknown), ..Appointment::default() });
    for status in AppointmentStatus::KNOWN {
        let visible = filter_appointments(&list, StatusFilter::Only(status));
        assert!(!ids(&visible).contains(&99));
    }
    assert!(ids(&filter_appointments(&list, StatusFilter::All)).contains(&99));
}

// =============================================================
// Display helpers
// =============================================================

#[test]
fn status_class_maps_known_statuses() {
    assert_eq!(status_class(Some(AppointmentStatus::Scheduled)), "estado-programada");
    assert_eq!(status_class(Some(AppointmentStatus::Confirmed)), "estado-confirmada");
    assert_eq!(status_class(Some(AppointmentStatus::Completed)), "estado-completada");
    assert_eq!(status_class(Some(AppointmentStatus::Cancelled)), "estado-cancelada");
}

#[test]
fn status_class_is_empty_for_unknown_or_absent() {
    assert_eq!(status_class(Some(AppointmentStatus::Unknown)), "");
    assert_eq!(status_class(None), "");
}

#[test]
fn available_actions_follow_status() {
    let scheduled = AvailableActions::for_status(Some(AppointmentStatus::Scheduled));
    assert!(scheduled.confirm && scheduled.cancel && scheduled.reschedule);

    let confirmed = AvailableActions::for_status(Some(AppointmentStatus::Confirmed));
    assert!(!confirmed.confirm);
    assert!(confirmed.cancel && confirmed.reschedule);

    for status in [Some(AppointmentStatus::Completed), Some(AppointmentStatus::Cancelled), None] {
        assert_eq!(AvailableActions::for_status(status), AvailableActions::default());
    }
}

// =============================================================
// AppointmentsState
// =============================================================

#[test]
fn state_default_is_empty_and_unfiltered() {
    let state = AppointmentsState::default();
    assert!(state.appointments.is_empty());
    assert!(state.visible.is_empty());
    assert_eq!(state.filter, StatusFilter::All);
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert!(state.reschedule.is_none());
    assert!(state.pending_cancel.is_none());
}

#[test]
fn apply_load_sorts_and_applies_current_filter() {
    let mut state = AppointmentsState::default();
    state.set_filter(StatusFilter::Only(AppointmentStatus::Scheduled));
    state.begin_load();
    assert!(state.loading);
    state.apply_load(Ok(sample()));
    assert!(!state.loading);
    assert_eq!(ids(&state.appointments), vec![2, 4, 3, 1, 5]);
    assert_eq!(ids(&state.visible), vec![4, 1]);
}

#[test]
fn set_filter_after_load_rederives_visible() {
    let mut state = AppointmentsState::default();
    state.apply_load(Ok(sample()));
    state.set_filter(StatusFilter::Only(AppointmentStatus::Cancelled));
    assert_eq!(ids(&state.visible), vec![2]);
    state.set_filter(StatusFilter::All);
    assert_eq!(ids(&state.visible), vec![2, 4, 3, 1, 5]);
}

#[test]
fn apply_load_failure_clears_lists_and_sets_error() {
    let mut state = AppointmentsState::default();
    state.apply_load(Ok(sample()));
    state.begin_load();
    state.apply_load(Err(ApiError::Network("offline".to_owned())));
    assert!(state.appointments.is_empty());
    assert!(state.visible.is_empty());
    assert_eq!(state.error.as_deref(), Some(LOAD_FAILED_MESSAGE));
    assert!(!state.loading);
}

#[test]
fn begin_load_clears_previous_error() {
    let mut state = AppointmentsState { error: Some("old".to_owned()), ..AppointmentsState::default() };
    state.begin_load();
    assert!(state.error.is_none());
}

#[test]
fn open_reschedule_prefills_slot_and_clears_reason() {
    let mut state = AppointmentsState::default();
    let target = appt(4, AppointmentStatus::Scheduled, None, "2025-04-03");
    state.open_reschedule(&target);
    let draft = state.reschedule.clone().unwrap();
    assert_eq!(draft.appointment_id, Some(4));
    assert_eq!(draft.date, "2025-04-03");
    assert_eq!(draft.time, "10:00");
    assert_eq!(draft.reason, "");
}

#[test]
fn edit_reschedule_updates_open_draft_only() {
    let mut state = AppointmentsState::default();
    state.edit_reschedule(|d| d.reason = "ignored".to_owned());
    assert!(state.reschedule.is_none());

    state.open_reschedule(&appt(4, AppointmentStatus::Scheduled, None, "2025-04-03"));
    state.edit_reschedule(|d| d.time = "15:00".to_owned());
    assert_eq!(state.reschedule.as_ref().map(|d| d.time.as_str()), Some("15:00"));

    state.close_reschedule();
    assert!(state.reschedule.is_none());
}

#[test]
fn reschedule_request_requires_an_id() {
    let draft = RescheduleDraft::for_appointment(&Appointment::default());
    assert!(draft.request().is_none());

    let draft = RescheduleDraft {
        appointment_id: Some(8),
        date: "2025-05-01".to_owned(),
        time: "11:00".to_owned(),
        reason: "Travel".to_owned(),
    };
    let (id, request) = draft.request().unwrap();
    assert_eq!(id, 8);
    assert_eq!(request.reason, "Travel");
}

#[test]
fn pending_cancel_is_taken_once() {
    let mut state = AppointmentsState::default();
    state.request_cancel(3);
    assert_eq!(state.take_pending_cancel(), Some(3));
    assert_eq!(state.take_pending_cancel(), None);
}

#[test]
fn count_with_status_counts_loaded_appointments() {
    let mut state = AppointmentsState::default();
    state.apply_load(Ok(sample()));
    assert_eq!(state.count_with_status(AppointmentStatus::Scheduled), 2);
    assert_eq!(state.count_with_status(AppointmentStatus::Completed), 1);
}

#[test]
fn filter_option_label_shows_matching_count() {
    let mut state = AppointmentsState::default();
    state.apply_load(Ok(sample()));
    assert_eq!(state.filter_option_label(StatusFilter::All), "All (5)");
    assert_eq!(state.filter_option_label(StatusFilter::Only(AppointmentStatus::Scheduled)), "Scheduled (2)");
    assert_eq!(state.filter_option_label(StatusFilter::Only(AppointmentStatus::Cancelled)), "Cancelled (1)");
    assert_eq!(AppointmentsState::default().filter_option_label(StatusFilter::All), "All (0)");
}
