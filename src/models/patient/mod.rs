// Patient module
// Static per-session patient identity and contact details

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Roster identifier such as `P001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(String);

impl PatientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PatientId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub emergency_contact: String,
    pub emergency_phone: String,
    pub condition: String,
    pub insurance_provider: String,
    pub insurance_id: String,
    /// First day of care; seeded appointments start here.
    pub start_date: NaiveDate,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Two-letter avatar text.
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect()
    }

    /// Age in whole years on `date`, counting the birthday itself.
    pub fn age_on(&self, date: NaiveDate) -> i32 {
        let birth = self.date_of_birth;
        let mut age = date.year() - birth.year();
        if (date.month(), date.day()) < (birth.month(), birth.day()) {
            age -= 1;
        }
        age
    }

    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address, self.city, self.state, self.zip_code
        )
    }

    /// Case-insensitive match over the fields the roster search covers.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.condition,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Patient {
        Patient {
            id: PatientId::new("P001"),
            first_name: "James".to_string(),
            last_name: "Anderson".to_string(),
            email: "james.anderson@email.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 3, 15).unwrap(),
            address: "123 Oak Street".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62701".to_string(),
            emergency_contact: "Sarah Anderson".to_string(),
            emergency_phone: "(555) 123-4568".to_string(),
            condition: "Lower Back Pain".to_string(),
            insurance_provider: "Blue Cross".to_string(),
            insurance_id: "BC-789456123".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 11, 10).unwrap(),
        }
    }

    #[test]
    fn test_names_and_initials() {
        let patient = sample();
        assert_eq!(patient.full_name(), "James Anderson");
        assert_eq!(patient.initials(), "JA");
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let patient = sample();
        let before = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let on = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        assert_eq!(patient.age_on(before), 40);
        assert_eq!(patient.age_on(on), 41);
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let patient = sample();
        assert!(patient.matches("anders"));
        assert!(patient.matches("BACK"));
        assert!(patient.matches("@email.com"));
        assert!(!patient.matches("sciatica"));
    }

    #[test]
    fn test_full_address() {
        assert_eq!(
            sample().full_address(),
            "123 Oak Street, Springfield, IL 62701"
        );
    }
}
