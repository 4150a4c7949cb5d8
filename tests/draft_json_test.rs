// Wire shape of drafts and appointments handed between views

mod fixtures;

use clinic_desk::models::appointment::{Appointment, AppointmentDraft, AppointmentStatus};
use fixtures::{appointment, date, time};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_draft_serialises_camel_case_clock_times() {
    let draft = AppointmentDraft {
        date: date(2026, 2, 12),
        start_time: time(9, 0),
        end_time: time(10, 15),
    };
    let value = serde_json::to_value(draft).unwrap();
    assert_eq!(
        value,
        json!({ "date": "2026-02-12", "startTime": "09:00", "endTime": "10:15" })
    );
}

#[test]
fn test_draft_rejects_seconds() {
    let raw = json!({ "date": "2026-02-12", "startTime": "09:00:30", "endTime": "10:00" });
    assert!(serde_json::from_value::<AppointmentDraft>(raw).is_err());
}

#[test]
fn test_appointment_shape() {
    let visit = appointment(
        "P001-apt-1",
        "P001",
        date(2026, 2, 12),
        time(8, 30),
        AppointmentStatus::Completed,
    );
    let value = serde_json::to_value(&visit).unwrap();

    assert_eq!(value["patientId"], "P001");
    assert_eq!(value["time"], "08:30");
    assert_eq!(value["status"], "completed");
    assert_eq!(value["provider"], "Dr. Smith");
    assert_eq!(value["services"][0]["code"], "FOLLOWUP");
    assert_eq!(value["durationMinutes"], 30);
}

#[test]
fn test_appointment_without_duration_defaults() {
    let raw = json!({
        "id": "P002-apt-1",
        "patientId": "P002",
        "date": "2026-01-05",
        "time": "14:00",
        "status": "scheduled",
        "services": [],
        "provider": "Dr. Johnson"
    });
    let parsed: Appointment = serde_json::from_value(raw).unwrap();
    assert_eq!(parsed.duration_minutes, 30);
    assert_eq!(parsed.notes, "");
}
