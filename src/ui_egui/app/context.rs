use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::services::appointment::AppointmentStore;
use crate::services::patient::PatientDirectory;

/// Session data shared by every screen.
pub struct AppContext {
    directory: PatientDirectory,
    store: AppointmentStore,
    /// Day the generated history was laid out around.
    reference_date: NaiveDate,
    config_path: PathBuf,
}

impl AppContext {
    pub fn new(
        directory: PatientDirectory,
        store: AppointmentStore,
        reference_date: NaiveDate,
        config_path: PathBuf,
    ) -> Self {
        Self {
            directory,
            store,
            reference_date,
            config_path,
        }
    }

    pub fn directory(&self) -> &PatientDirectory {
        &self.directory
    }

    pub fn store(&self) -> &AppointmentStore {
        &self.store
    }

    /// Roster "upcoming" figures are measured from here rather than the
    /// wall clock, so they line up with the generated statuses.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Mutable store alongside the read-only roster it validates against.
    pub fn scheduling(&mut self) -> (&mut AppointmentStore, &PatientDirectory) {
        (&mut self.store, &self.directory)
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}
