// Session store and roster working together on seeded data

mod fixtures;

use chrono::{Local, TimeZone};
use clinic_desk::models::appointment::{AppointmentError, AppointmentStatus, NewAppointment};
use clinic_desk::models::patient::PatientId;
use clinic_desk::services::appointment::{appointments_in_hour, AppointmentStore};
use clinic_desk::services::generator::{default_reference_date, load_roster, AppointmentGenerator};
use clinic_desk::services::patient::{PatientDirectory, RosterSort};
use fixtures::{appointment, date, reference_day, time};
use pretty_assertions::assert_eq;

fn seeded_session(seed: u64) -> (PatientDirectory, AppointmentStore) {
    let roster = load_roster().unwrap();
    let generated =
        AppointmentGenerator::new(Some(seed), default_reference_date()).generate_all(&roster);
    (PatientDirectory::new(roster), AppointmentStore::new(generated))
}

#[test]
fn test_hour_lookup_scenario() {
    let store = AppointmentStore::new(vec![
        appointment("a", "P001", reference_day(), time(8, 30), AppointmentStatus::Scheduled),
        appointment("b", "P002", reference_day(), time(14, 0), AppointmentStatus::Scheduled),
    ]);
    let day = store.on_date(reference_day());
    let eight = appointments_in_hour(&day, 8);
    assert_eq!(eight.len(), 1);
    assert_eq!(eight[0].id, "a");
    assert!(appointments_in_hour(&day, 9).is_empty());
}

#[test]
fn test_seeded_statuses_follow_reference_day() {
    let (_, store) = seeded_session(3);
    for record in store.all() {
        if record.date < reference_day() {
            assert_ne!(record.status, AppointmentStatus::Scheduled, "{}", record.id);
        } else {
            assert_ne!(record.status, AppointmentStatus::Completed, "{}", record.id);
        }
    }
}

#[test]
fn test_scheduled_appointment_is_visible_everywhere() {
    let (directory, mut store) = seeded_session(5);
    let patient = PatientId::new("P007");
    let before = store.for_patient(&patient).len();

    let mut form = NewAppointment::new(date(2026, 3, 2), time(10, 30));
    form.patient_id = Some(patient.clone());
    form.toggle_service("CONSULT");
    let created_at = Local.with_ymd_and_hms(2026, 2, 12, 9, 0, 0).unwrap();
    let created = store.schedule(form, &directory, created_at).unwrap();

    assert!(created.id.starts_with("P007-apt-new-"));
    assert_eq!(store.local().len(), 1);
    assert_eq!(store.for_patient(&patient).len(), before + 1);
    assert!(store.on_date(date(2026, 3, 2)).iter().any(|a| a.id == created.id));
    assert!(store.has_any_on(date(2026, 3, 2)));
}

#[test]
fn test_schedule_rejects_unknown_patient() {
    let (directory, mut store) = seeded_session(5);
    let mut form = NewAppointment::new(date(2026, 3, 2), time(10, 30));
    form.patient_id = Some(PatientId::new("P999"));

    let result = store.schedule(form, &directory, Local::now());
    assert_eq!(result, Err(AppointmentError::UnknownPatient(PatientId::new("P999"))));
    assert!(store.local().is_empty());
}

#[test]
fn test_roster_sorted_by_name_uses_last_name() {
    let (directory, store) = seeded_session(1);
    let sorted = directory.filtered_sorted("", RosterSort::Name, &store);
    let keys: Vec<String> = sorted
        .iter()
        .map(|p| format!("{} {}", p.last_name, p.first_name).to_lowercase())
        .collect();
    let mut expected = keys.clone();
    expected.sort();
    assert_eq!(keys, expected);
    assert_eq!(sorted.len(), 20);
}

#[test]
fn test_roster_recent_sort_is_newest_first() {
    let (directory, store) = seeded_session(9);
    let sorted = directory.filtered_sorted("", RosterSort::Recent, &store);
    let dates: Vec<_> = sorted
        .iter()
        .map(|p| store.latest_date_for_patient(&p.id))
        .collect();
    assert!(dates.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn test_search_then_display_name() {
    let (directory, store) = seeded_session(2);
    let hits = directory.filtered_sorted("  ANDERSON ", RosterSort::Name, &store);
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|p| p.matches("anderson")));
    assert_eq!(directory.display_name(&PatientId::new("nope")), "Unknown");
}

#[test]
fn test_upcoming_measured_from_given_day() {
    let (directory, store) = seeded_session(8);
    let reference = default_reference_date();
    let upcoming = store.count_with_upcoming(directory.all(), reference);
    assert!(upcoming > 0);
    for patient in directory.all() {
        if let Some(next) = store.upcoming_for_patient(&patient.id, reference) {
            assert_eq!(next.status, AppointmentStatus::Scheduled);
            assert!(next.date >= reference);
        }
    }

    // Long after the generated history every patient reads "No upcoming".
    assert_eq!(store.count_with_upcoming(directory.all(), date(2026, 10, 16)), 0);
}
