// Test fixtures - reusable test data
// Provides consistent dates and appointments across all test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use clinic_desk::models::appointment::{Appointment, AppointmentStatus, Provider};
use clinic_desk::models::patient::PatientId;
use clinic_desk::models::service::Service;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// The date the seeded data treats as "today".
pub fn reference_day() -> NaiveDate {
    date(2026, 2, 12)
}

/// A 30-minute visit with a single follow-up service.
pub fn appointment(
    id: &str,
    patient: &str,
    on: NaiveDate,
    at: NaiveTime,
    status: AppointmentStatus,
) -> Appointment {
    Appointment {
        id: id.to_string(),
        patient_id: PatientId::new(patient),
        date: on,
        time: at,
        duration_minutes: 30,
        status,
        services: vec![Service::find("FOLLOWUP").unwrap()],
        provider: Provider::Smith,
        notes: String::new(),
    }
}
