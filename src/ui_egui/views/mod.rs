//! Screen bodies: roster, patient detail and the calendar grids.
//!
//! Views never mutate the appointment store directly; they return an action
//! that the app applies after the frame's drawing is done.

use chrono::NaiveDate;

use crate::models::appointment::AppointmentDraft;
use crate::models::patient::PatientId;
use crate::services::appointment::AppointmentStore;
use crate::services::patient::PatientDirectory;

pub mod day_view;
pub mod month_view;
pub mod palette;
pub mod patient_view;
pub mod roster_view;
pub mod time_grid;
pub mod utils;
pub mod week_view;

/// Something the user did inside a calendar grid.
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarAction {
    /// Show the day view on this date.
    OpenDay(NaiveDate),
    /// An appointment was clicked.
    OpenPatient(PatientId),
    /// A drag (or click) on the time grid finished.
    CreateFromDraft(AppointmentDraft),
}

/// Read-only session data the calendar grids draw from.
#[derive(Clone, Copy)]
pub struct CalendarData<'a> {
    pub store: &'a AppointmentStore,
    pub directory: &'a PatientDirectory,
    pub today: NaiveDate,
    /// False while a modal is open, so the grid ignores presses under it.
    pub interactive: bool,
}
