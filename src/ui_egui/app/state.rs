use crate::models::patient::PatientId;
use crate::ui_egui::views::patient_view::PatientViewState;
use crate::ui_egui::views::roster_view::RosterState;

/// Top-level screen shown in the central panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Roster,
    Patient(PatientId),
    Calendar,
}

#[derive(Default)]
pub struct AppState {
    pub screen: Screen,
    /// Screens to return to, most recent last.
    pub back_stack: Vec<Screen>,
    pub show_help: bool,
    pub roster: RosterState,
    pub patient_view: PatientViewState,
}

impl AppState {
    /// Switch to `screen`, remembering the current one. Returns false when
    /// already there.
    pub fn open(&mut self, screen: Screen) -> bool {
        if self.screen == screen {
            return false;
        }
        if matches!(screen, Screen::Patient(_)) {
            self.patient_view = PatientViewState::default();
        }
        let previous = std::mem::replace(&mut self.screen, screen);
        self.back_stack.push(previous);
        true
    }

    /// Return to the previous screen, or the roster when there is none.
    pub fn back(&mut self) {
        self.screen = self.back_stack.pop().unwrap_or_default();
    }

    pub fn on_calendar(&self) -> bool {
        self.screen == Screen::Calendar
    }
}
