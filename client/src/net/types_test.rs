use super::*;
use serde_json::json;

// =============================================================
// Helpers
// =============================================================

fn appointment_json(id: i64, status: &str, created: &str) -> serde_json::Value {
    json!({
        "idCita": id,
        "idCliente": 1,
        "idMascota": 5,
        "idServicio": 2,
        "userIdUser": null,
        "fecha": "2025-03-10",
        "hora": "09:30",
        "estadoCita": status,
        "motivo": "Vaccination",
        "tratamientosAnteriores": ["Deworming"],
        "createCita": created
    })
}

// =============================================================
// AppointmentStatus
// =============================================================

#[test]
fn status_serializes_to_spanish_wire_values() {
    assert_eq!(serde_json::to_string(&AppointmentStatus::Scheduled).unwrap(), "\"programada\"");
    assert_eq!(serde_json::to_string(&AppointmentStatus::Confirmed).unwrap(), "\"confirmada\"");
    assert_eq!(serde_json::to_string(&AppointmentStatus::Completed).unwrap(), "\"completada\"");
    assert_eq!(serde_json::to_string(&AppointmentStatus::Cancelled).unwrap(), "\"cancelada\"");
}

#[test]
fn status_unknown_wire_value_maps_to_unknown() {
    let status: AppointmentStatus = serde_json::from_value(json!("en_espera")).unwrap();
    assert_eq!(status, AppointmentStatus::Unknown);
}

#[test]
fn status_parse_accepts_only_known_values() {
    assert_eq!(AppointmentStatus::parse("confirmada"), Some(AppointmentStatus::Confirmed));
    assert_eq!(AppointmentStatus::parse("todas"), None);
    assert_eq!(AppointmentStatus::parse("desconocida"), None);
    assert_eq!(AppointmentStatus::parse("Programada"), None);
}

// =============================================================
// Appointment decoding
// =============================================================

#[test]
fn appointment_decodes_full_record() {
    let appt: Appointment = serde_json::from_value(appointment_json(7, "programada", "2025-03-01T10:00:00")).unwrap();
    assert_eq!(appt.id, Some(7));
    assert_eq!(appt.pet_id, Some(5));
    assert_eq!(appt.staff_id, None);
    assert_eq!(appt.date, "2025-03-10");
    assert_eq!(appt.time, "09:30");
    assert_eq!(appt.status, Some(AppointmentStatus::Scheduled));
    assert_eq!(appt.prior_treatments, vec!["Deworming".to_owned()]);
    assert_eq!(appt.created_at.as_deref(), Some("2025-03-01T10:00:00"));
}

#[test]
fn appointment_tolerates_sparse_and_null_fields() {
    let appt: Appointment = serde_json::from_value(json!({
        "idCita": "12",
        "fecha": null,
        "tratamientosAnteriores": null
    }))
    .unwrap();
    assert_eq!(appt.id, Some(12));
    assert_eq!(appt.date, "");
    assert!(appt.prior_treatments.is_empty());
    assert_eq!(appt.status, None);
    assert_eq!(appt.created_at, None);
}

#[test]
fn appointment_rejects_non_numeric_id_string() {
    let result = serde_json::from_value::<Appointment>(json!({ "idCita": "abc" }));
    assert!(result.is_err());
}

// =============================================================
// Drafts and requests
// =============================================================

#[test]
fn draft_serializes_backend_field_names() {
    let draft = AppointmentDraft {
        client_id: 1,
        pet_id: Some(5),
        service_id: Some(2),
        date: "2025-03-10".to_owned(),
        time: "09:30".to_owned(),
        staff_id: None,
        reason: "Checkup".to_owned(),
        symptoms: String::new(),
        prior_diagnosis: String::new(),
        prior_treatments: vec!["Antibiotics".to_owned()],
        notes: String::new(),
    };
    let value = serde_json::to_value(&draft).unwrap();
    assert_eq!(value["idCliente"], json!(1));
    assert_eq!(value["idMascota"], json!(5));
    assert_eq!(value["idServicio"], json!(2));
    assert_eq!(value["userIdUser"], json!(null));
    assert_eq!(value["tratamientosAnteriores"], json!(["Antibiotics"]));
    assert_eq!(value["notasAdicionales"], json!(""));
}

#[test]
fn status_change_request_uses_estado_and_notas() {
    let request = StatusChangeRequest { status: AppointmentStatus::Confirmed, notes: "ok".to_owned() };
    assert_eq!(serde_json::to_value(&request).unwrap(), json!({ "estado": "confirmada", "notas": "ok" }));
}

#[test]
fn new_account_debug_redacts_password() {
    let account = NewAccount {
        full_name: "Ana".to_owned(),
        username: "ana".to_owned(),
        email: "ana@example.com".to_owned(),
        phone: String::new(),
        password: "hunter22".to_owned(),
    };
    let rendered = format!("{account:?}");
    assert!(!rendered.contains("hunter22"));
    assert!(rendered.contains("<redacted>"));
}

#[test]
fn availability_response_message_is_optional() {
    let resp: AvailabilityResponse = serde_json::from_value(json!({ "disponible": false })).unwrap();
    assert!(!resp.available);
    assert_eq!(resp.message, None);
}

// =============================================================
// normalize_appointment_list
// =============================================================

#[test]
fn normalize_bare_data_and_citas_shapes_agree() {
    let list = json!([
        appointment_json(1, "programada", "2025-03-01T10:00:00"),
        appointment_json(2, "cancelada", "2025-03-02T10:00:00"),
    ]);
    let bare = normalize_appointment_list(list.clone());
    let data = normalize_appointment_list(json!({ "success": true, "data": list.clone() }));
    let citas = normalize_appointment_list(json!({ "citas": list }));
    assert_eq!(bare.len(), 2);
    assert_eq!(bare, data);
    assert_eq!(bare, citas);
}

#[test]
fn normalize_prefers_data_when_it_is_a_list() {
    let out = normalize_appointment_list(json!({
        "data": [appointment_json(1, "programada", "2025-03-01")],
        "citas": [appointment_json(2, "programada", "2025-03-01")]
    }));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, Some(1));
}

#[test]
fn normalize_falls_through_to_citas_when_data_is_not_a_list() {
    let out = normalize_appointment_list(json!({
        "data": { "total": 1 },
        "citas": [appointment_json(2, "programada", "2025-03-01")]
    }));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, Some(2));
}

#[test]
fn normalize_unrecognized_shapes_yield_empty() {
    assert!(normalize_appointment_list(json!({})).is_empty());
    assert!(normalize_appointment_list(json!({ "items": [] })).is_empty());
    assert!(normalize_appointment_list(json!("nope")).is_empty());
    assert!(normalize_appointment_list(json!(null)).is_empty());
    assert!(normalize_appointment_list(json!(42)).is_empty());
}

#[test]
fn normalize_keeps_good_records_when_one_is_malformed() {
    let mut bad_id = appointment_json(3, "programada", "2025-03-03T10:00:00");
    bad_id["idCita"] = json!("abc");
    let out = normalize_appointment_list(json!([
        appointment_json(1, "programada", "2025-03-01T10:00:00"),
        bad_id,
        appointment_json(2, "confirmada", "2025-03-02T10:00:00"),
    ]));
    assert_eq!(out.iter().map(|a| a.id).collect::<Vec<_>>(), vec![Some(1), Some(2)]);
}

#[test]
fn normalize_skips_malformed_record_inside_data_envelope() {
    let mut bad_status = appointment_json(2, "programada", "2025-03-02");
    bad_status["estadoCita"] = json!(7);
    let out = normalize_appointment_list(json!({
        "data": [appointment_json(1, "programada", "2025-03-01"), bad_status]
    }));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, Some(1));
}

#[test]
fn epoch_millis_creation_timestamp_decodes() {
    let mut numeric = appointment_json(2, "programada", "");
    numeric["createCita"] = json!(1_709_280_000_000_i64);
    let out = normalize_appointment_list(json!([
        appointment_json(1, "programada", "2025-03-01T10:00:00"),
        numeric,
    ]));
    assert_eq!(out.len(), 2);
    assert_eq!(out[1].created_at.as_deref(), Some("2024-03-01T08:00:00+00:00"));
}

#[test]
fn detect_classifies_envelope_shapes() {
    assert!(matches!(AppointmentListEnvelope::detect(json!([])), AppointmentListEnvelope::Bare(_)));
    assert!(matches!(AppointmentListEnvelope::detect(json!({ "data": [] })), AppointmentListEnvelope::Data(_)));
    assert!(matches!(AppointmentListEnvelope::detect(json!({ "citas": [] })), AppointmentListEnvelope::Citas(_)));
    assert!(matches!(
        AppointmentListEnvelope::detect(json!({ "data": 1 })),
        AppointmentListEnvelope::Unrecognized(_)
    ));
}
