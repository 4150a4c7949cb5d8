//! Read-only patient roster with the search and sort used by the roster screen.

use chrono::NaiveDate;

use crate::models::patient::{Patient, PatientId};
use crate::services::appointment::AppointmentStore;

/// Ordering options offered by the roster's sort selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RosterSort {
    #[default]
    Name,
    Recent,
    Condition,
}

impl RosterSort {
    pub const ALL: [RosterSort; 3] = [RosterSort::Name, RosterSort::Recent, RosterSort::Condition];

    pub fn label(&self) -> &'static str {
        match self {
            RosterSort::Name => "Name",
            RosterSort::Recent => "Recent Visit",
            RosterSort::Condition => "Condition",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PatientDirectory {
    patients: Vec<Patient>,
}

impl PatientDirectory {
    pub fn new(patients: Vec<Patient>) -> Self {
        Self { patients }
    }

    pub fn all(&self) -> &[Patient] {
        &self.patients
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    pub fn get(&self, id: &PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| &p.id == id)
    }

    pub fn display_name(&self, id: &PatientId) -> String {
        self.get(id)
            .map(Patient::full_name)
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// Patients whose name, email or condition contains `term`. A blank term
    /// returns everyone.
    pub fn search(&self, term: &str) -> Vec<&Patient> {
        let term = term.trim();
        if term.is_empty() {
            return self.patients.iter().collect();
        }
        self.patients.iter().filter(|p| p.matches(term)).collect()
    }

    /// Search then sort, the way the roster list is built each frame.
    pub fn filtered_sorted<'a>(
        &'a self,
        term: &str,
        sort: RosterSort,
        store: &AppointmentStore,
    ) -> Vec<&'a Patient> {
        let mut list = self.search(term);
        sort_patients(&mut list, sort, store);
        list
    }
}

/// Sort in place. `Recent` puts the most recently seen first and treats a
/// patient with no appointments as last seen on 1900-01-01.
pub fn sort_patients(list: &mut [&Patient], sort: RosterSort, store: &AppointmentStore) {
    match sort {
        RosterSort::Name => list.sort_by_cached_key(|p| {
            format!("{} {}", p.last_name, p.first_name).to_lowercase()
        }),
        RosterSort::Condition => list.sort_by_cached_key(|p| p.condition.to_lowercase()),
        RosterSort::Recent => {
            let never = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN);
            list.sort_by_cached_key(|p| {
                std::cmp::Reverse(store.latest_date_for_patient(&p.id).unwrap_or(never))
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::appointment::{Appointment, AppointmentStatus, Provider};
    use chrono::NaiveTime;

    fn patient(id: &str, first: &str, last: &str, condition: &str) -> Patient {
        Patient {
            id: PatientId::new(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}.{}@email.com", first.to_lowercase(), last.to_lowercase()),
            phone: "(555) 000-0000".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
            address: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62701".to_string(),
            emergency_contact: "Someone".to_string(),
            emergency_phone: "(555) 000-0001".to_string(),
            condition: condition.to_string(),
            insurance_provider: "Aetna".to_string(),
            insurance_id: "AET-1".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
        }
    }

    fn directory() -> PatientDirectory {
        PatientDirectory::new(vec![
            patient("P001", "James", "Anderson", "Lower Back Pain"),
            patient("P002", "Maria", "Garcia", "Neck Pain"),
            patient("P003", "Robert", "Chen", "Sciatica"),
        ])
    }

    fn visit(patient: &str, y: i32, m: u32, d: u32) -> Appointment {
        Appointment {
            id: format!("{}-apt-{}{}", patient, m, d),
            patient_id: PatientId::new(patient),
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            duration_minutes: 30,
            status: AppointmentStatus::Completed,
            services: vec![],
            provider: Provider::Smith,
            notes: String::new(),
        }
    }

    fn ids(list: &[&Patient]) -> Vec<String> {
        list.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_display_name_falls_back_to_unknown() {
        let dir = directory();
        assert_eq!(dir.display_name(&PatientId::new("P002")), "Maria Garcia");
        assert_eq!(dir.display_name(&PatientId::new("P999")), "Unknown");
    }

    #[test]
    fn test_search_blank_returns_all() {
        assert_eq!(directory().search("   ").len(), 3);
    }

    #[test]
    fn test_search_matches_condition() {
        let dir = directory();
        assert_eq!(ids(&dir.search("pain")), vec!["P001", "P002"]);
    }

    #[test]
    fn test_sort_by_name_uses_last_name() {
        let dir = directory();
        let store = AppointmentStore::default();
        let list = dir.filtered_sorted("", RosterSort::Name, &store);
        assert_eq!(ids(&list), vec!["P001", "P003", "P002"]);
    }

    #[test]
    fn test_sort_by_condition() {
        let dir = directory();
        let store = AppointmentStore::default();
        let list = dir.filtered_sorted("", RosterSort::Condition, &store);
        assert_eq!(ids(&list), vec!["P001", "P002", "P003"]);
    }

    #[test]
    fn test_sort_recent_puts_unseen_last() {
        let dir = directory();
        let store = AppointmentStore::new(vec![
            visit("P001", 2026, 1, 5),
            visit("P003", 2026, 2, 10),
        ]);
        let list = dir.filtered_sorted("", RosterSort::Recent, &store);
        assert_eq!(ids(&list), vec!["P003", "P001", "P002"]);
    }
}
