//! Synthetic start-up data: the embedded patient roster plus a randomised
//! appointment history for each patient.

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveTime};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::models::appointment::{
    Appointment, AppointmentStatus, Provider, DEFAULT_DURATION_MINUTES,
};
use crate::models::patient::{Patient, PatientId};
use crate::models::service::Service;

const ROSTER_TOML: &str = include_str!("../../../assets/patients.toml");

const VISIT_NOTES: &[&str] = &[
    "Patient reports improvement in range of motion.",
    "Adjusted T4-T7. Patient tolerated well.",
    "Continued maintenance care. No new complaints.",
    "Patient reports 50% reduction in pain.",
    "Applied ice therapy post-adjustment.",
    "Recommended home exercises for core strengthening.",
    "Patient to return in 2 weeks for follow-up.",
    "Muscle tension noted in trapezius region.",
    "Good progress. Reducing visit frequency.",
    "Discussed ergonomic workplace modifications.",
];

#[derive(Deserialize)]
struct RosterFile {
    patients: Vec<Patient>,
}

/// Parse the roster compiled into the binary.
pub fn load_roster() -> Result<Vec<Patient>> {
    parse_roster(ROSTER_TOML).context("failed to parse embedded patient roster")
}

pub fn parse_roster(raw: &str) -> Result<Vec<Patient>> {
    let file: RosterFile = toml::from_str(raw)?;
    Ok(file.patients)
}

/// The date the seeded data treats as "today" unless configured otherwise.
pub fn default_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 12).unwrap_or(NaiveDate::MIN)
}

pub struct AppointmentGenerator {
    rng: StdRng,
    reference_date: NaiveDate,
}

impl AppointmentGenerator {
    pub fn new(seed: Option<u64>, reference_date: NaiveDate) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            reference_date,
        }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Histories for every patient, in roster order.
    pub fn generate_all(&mut self, patients: &[Patient]) -> Vec<Appointment> {
        let appointments: Vec<Appointment> = patients
            .iter()
            .flat_map(|patient| {
                let count = self.rng.gen_range(4..=9);
                self.generate_for(&patient.id, patient.start_date, count)
            })
            .collect();

        log::debug!(
            "generated {} appointments for {} patients",
            appointments.len(),
            patients.len()
        );
        appointments
    }

    /// `count` visits starting on `start`, 5 to 14 days apart.
    pub fn generate_for(
        &mut self,
        patient_id: &PatientId,
        start: NaiveDate,
        count: usize,
    ) -> Vec<Appointment> {
        let catalog = Service::catalog();
        let mut date = start;
        let mut appointments = Vec::with_capacity(count);

        for n in 1..=count {
            let status = self.status_for(date);

            let hour = self.rng.gen_range(8..=16);
            let minute = if self.rng.gen_bool(0.5) { 0 } else { 30 };
            let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN);

            let service_count = self.rng.gen_range(1..=3);
            let services: Vec<Service> = catalog
                .choose_multiple(&mut self.rng, service_count)
                .cloned()
                .collect();

            let notes = if status == AppointmentStatus::Completed {
                VISIT_NOTES
                    .choose(&mut self.rng)
                    .map(|note| note.to_string())
                    .unwrap_or_default()
            } else {
                String::new()
            };

            let provider = Provider::ALL
                .choose(&mut self.rng)
                .copied()
                .unwrap_or_default();

            appointments.push(Appointment {
                id: format!("{}-apt-{}", patient_id, n),
                patient_id: patient_id.clone(),
                date,
                time,
                duration_minutes: DEFAULT_DURATION_MINUTES,
                status,
                services,
                provider,
                notes,
            });

            date += Duration::days(self.rng.gen_range(5..=14));
        }

        appointments
    }

    fn status_for(&mut self, date: NaiveDate) -> AppointmentStatus {
        if date < self.reference_date {
            if self.rng.gen_bool(0.9) {
                AppointmentStatus::Completed
            } else {
                AppointmentStatus::Cancelled
            }
        } else if self.rng.gen_bool(0.85) {
            AppointmentStatus::Scheduled
        } else {
            AppointmentStatus::Cancelled
        }
    }
}
