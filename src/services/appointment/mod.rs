//! Session-local appointment store.
//!
//! Holds the generated appointments plus the ones created during the
//! session. It only grows: there is no update or delete.

pub mod queries;

use chrono::{DateTime, Local, NaiveDate};

use crate::models::appointment::{Appointment, AppointmentError, AppointmentStatus, NewAppointment};
use crate::models::patient::{Patient, PatientId};
use crate::models::service::ServiceSummary;
use crate::services::patient::PatientDirectory;

pub use queries::{appointments_in_hour, appointments_on_date, has_appointments_on};

#[derive(Debug, Default)]
pub struct AppointmentStore {
    generated: Vec<Appointment>,
    local: Vec<Appointment>,
}

impl AppointmentStore {
    pub fn new(generated: Vec<Appointment>) -> Self {
        Self {
            generated,
            local: Vec::new(),
        }
    }

    /// Generated records followed by the ones created this session.
    pub fn all(&self) -> impl Iterator<Item = &Appointment> + '_ {
        self.generated.iter().chain(self.local.iter())
    }

    pub fn len(&self) -> usize {
        self.generated.len() + self.local.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appointments created during this session, in creation order.
    pub fn local(&self) -> &[Appointment] {
        &self.local
    }

    pub fn get(&self, id: &str) -> Option<&Appointment> {
        self.all().find(|a| a.id == id)
    }

    pub fn append(&mut self, appointment: Appointment) {
        self.local.push(appointment);
    }

    pub fn on_date(&self, date: NaiveDate) -> Vec<&Appointment> {
        appointments_on_date(self.all(), date)
    }

    pub fn has_any_on(&self, date: NaiveDate) -> bool {
        has_appointments_on(self.all(), date)
    }

    /// A patient's appointments, newest first.
    pub fn for_patient(&self, patient_id: &PatientId) -> Vec<&Appointment> {
        let mut appointments: Vec<&Appointment> =
            self.all().filter(|a| &a.patient_id == patient_id).collect();
        appointments.sort_by(|a, b| b.starts_at().cmp(&a.starts_at()));
        appointments
    }

    /// Soonest scheduled visit on or after `as_of`.
    pub fn upcoming_for_patient(
        &self,
        patient_id: &PatientId,
        as_of: NaiveDate,
    ) -> Option<&Appointment> {
        self.all()
            .filter(|a| &a.patient_id == patient_id)
            .filter(|a| a.status == AppointmentStatus::Scheduled && a.date >= as_of)
            .min_by_key(|a| a.starts_at())
    }

    /// How many of `patients` have a scheduled visit on or after `as_of`.
    pub fn count_with_upcoming(&self, patients: &[Patient], as_of: NaiveDate) -> usize {
        patients
            .iter()
            .filter(|p| self.upcoming_for_patient(&p.id, as_of).is_some())
            .count()
    }

    /// Date of the patient's most recent record of any status.
    pub fn latest_date_for_patient(&self, patient_id: &PatientId) -> Option<NaiveDate> {
        self.all()
            .filter(|a| &a.patient_id == patient_id)
            .map(|a| a.date)
            .max()
    }

    pub fn count_for_patient(&self, patient_id: &PatientId, status: AppointmentStatus) -> usize {
        self.all()
            .filter(|a| &a.patient_id == patient_id && a.status == status)
            .count()
    }

    /// Services billed on completed visits, grouped by code in the order they
    /// first appear in the newest-first history.
    pub fn services_for_patient(&self, patient_id: &PatientId) -> Vec<ServiceSummary> {
        let mut summaries: Vec<ServiceSummary> = Vec::new();

        for appointment in self.for_patient(patient_id) {
            if appointment.status != AppointmentStatus::Completed {
                continue;
            }
            for service in &appointment.services {
                match summaries.iter_mut().find(|s| s.service.code == service.code) {
                    Some(existing) => {
                        existing.count += 1;
                        existing.total_spent += service.price;
                    }
                    None => summaries.push(ServiceSummary {
                        service: service.clone(),
                        count: 1,
                        total_spent: service.price,
                    }),
                }
            }
        }

        summaries
    }

    /// Timestamp-derived id for a locally created appointment.
    pub fn new_local_id(&self, patient_id: &PatientId, created_at: DateTime<Local>) -> String {
        let base = format!("{}-apt-new-{}", patient_id, created_at.timestamp_millis());
        if self.get(&base).is_none() {
            return base;
        }
        (2..)
            .map(|n| format!("{}-{}", base, n))
            .find(|candidate| self.get(candidate).is_none())
            .unwrap_or(base)
    }

    /// Validate a submitted form and append the resulting appointment.
    pub fn schedule(
        &mut self,
        form: NewAppointment,
        directory: &PatientDirectory,
        created_at: DateTime<Local>,
    ) -> Result<Appointment, AppointmentError> {
        let patient_id = form
            .patient_id
            .clone()
            .ok_or(AppointmentError::MissingPatient)?;
        if directory.get(&patient_id).is_none() {
            return Err(AppointmentError::UnknownPatient(patient_id));
        }

        let id = self.new_local_id(&patient_id, created_at);
        let appointment = form.into_appointment(id)?;
        log::info!(
            "Scheduled {} for {} on {} at {} with {}",
            appointment.id,
            appointment.patient_id,
            appointment.date,
            appointment.time_string(),
            appointment.provider
        );
        self.append(appointment.clone());
        Ok(appointment)
    }
}
