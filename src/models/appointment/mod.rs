// Appointment module
// Scheduled clinic visits and the draft handed over by drag-to-create

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::models::patient::PatientId;
use crate::models::service::Service;

/// Length given to seeded appointments and to the patient form default.
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    Missed,
}

impl AppointmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Missed => "missed",
        }
    }

    /// Hex colour used for blocks, badges and the legend.
    pub fn color_hex(&self) -> &'static str {
        match self {
            Self::Completed => "#27ae60",
            Self::Scheduled => "#3498db",
            Self::Cancelled => "#e74c3c",
            Self::Missed => "#7f8c8d",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Provider {
    #[default]
    #[serde(rename = "Dr. Smith")]
    Smith,
    #[serde(rename = "Dr. Johnson")]
    Johnson,
    #[serde(rename = "Dr. Williams")]
    Williams,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Smith, Provider::Johnson, Provider::Williams];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Smith => "Dr. Smith",
            Self::Johnson => "Dr. Johnson",
            Self::Williams => "Dr. Williams",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One scheduled clinic visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_id: PatientId,
    /// Calendar day only, serialised as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Wall-clock start, serialised as `HH:MM`.
    #[serde(with = "clock_time")]
    pub time: NaiveTime,
    #[serde(default = "default_duration")]
    pub duration_minutes: u32,
    pub status: AppointmentStatus,
    pub services: Vec<Service>,
    pub provider: Provider,
    #[serde(default)]
    pub notes: String,
}

fn default_duration() -> u32 {
    DEFAULT_DURATION_MINUTES
}

impl Appointment {
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    pub fn ends_at(&self) -> NaiveDateTime {
        self.starts_at() + chrono::Duration::minutes(self.duration_minutes as i64)
    }

    pub fn total_price(&self) -> u32 {
        self.services.iter().map(|s| s.price).sum()
    }

    /// `HH:MM`, the same form the record is stored in.
    pub fn time_string(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

/// Interval produced by a finished drag, pending user confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDraft {
    pub date: NaiveDate,
    #[serde(with = "clock_time")]
    pub start_time: NaiveTime,
    #[serde(with = "clock_time")]
    pub end_time: NaiveTime,
}

impl AppointmentDraft {
    pub fn duration_minutes(&self) -> u32 {
        (self.end_time - self.start_time).num_minutes().max(0) as u32
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppointmentError {
    #[error("a patient must be selected")]
    MissingPatient,
    #[error("unknown patient {0}")]
    UnknownPatient(PatientId),
    #[error("unknown service code {0}")]
    UnknownService(String),
    #[error("appointment duration must be positive")]
    EmptyDuration,
}

/// Form payload collected by the creation dialog or the patient form.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAppointment {
    pub patient_id: Option<PatientId>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub provider: Provider,
    pub service_codes: Vec<String>,
    pub notes: String,
}

impl NewAppointment {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            patient_id: None,
            date,
            time,
            duration_minutes: DEFAULT_DURATION_MINUTES,
            provider: Provider::default(),
            service_codes: Vec::new(),
            notes: String::new(),
        }
    }

    /// Seed a form from a drag draft; the duration follows the dragged interval.
    pub fn from_draft(draft: &AppointmentDraft) -> Self {
        Self {
            duration_minutes: draft.duration_minutes(),
            ..Self::new(draft.date, draft.start_time)
        }
    }

    /// Add the code if absent, remove it if present. Order of selection is kept.
    pub fn toggle_service(&mut self, code: &str) {
        if let Some(pos) = self.service_codes.iter().position(|c| c == code) {
            self.service_codes.remove(pos);
        } else {
            self.service_codes.push(code.to_string());
        }
    }

    pub fn has_service(&self, code: &str) -> bool {
        self.service_codes.iter().any(|c| c == code)
    }

    /// Turn the form into a `Scheduled` appointment with the given id.
    pub fn into_appointment(self, id: String) -> Result<Appointment, AppointmentError> {
        let patient_id = self.patient_id.ok_or(AppointmentError::MissingPatient)?;
        if self.duration_minutes == 0 {
            return Err(AppointmentError::EmptyDuration);
        }

        let services = self
            .service_codes
            .iter()
            .map(|code| {
                Service::find(code).ok_or_else(|| AppointmentError::UnknownService(code.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Appointment {
            id,
            patient_id,
            date: self.date,
            time: self.time,
            duration_minutes: self.duration_minutes,
            status: AppointmentStatus::Scheduled,
            services,
            provider: self.provider,
            notes: self.notes.trim().to_string(),
        })
    }
}

/// Serde adapter storing `NaiveTime` as zero-padded `HH:MM`.
pub mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
