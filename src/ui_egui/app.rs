mod context;
mod lifecycle;
mod navigation;
mod shortcuts;
mod sidebar;
mod state;
mod views;

use self::context::AppContext;
use self::state::AppState;
use crate::models::ui::ViewType;
use crate::ui_egui::appointment_dialog::AppointmentDialogState;
use crate::ui_egui::drag::DragCreate;
use crate::ui_egui::theme::CalendarTheme;
use chrono::NaiveDate;

pub struct ClinicApp {
    /// Roster, appointment store and config location
    context: AppContext,
    current_view: ViewType,
    current_date: NaiveDate,
    active_theme: CalendarTheme,
    /// Pointer gesture on the day/week grid
    drag: DragCreate,
    show_appointment_dialog: bool,
    appointment_dialog_state: Option<AppointmentDialogState>,
    /// Screen stack and per-screen UI state
    state: AppState,
}

impl eframe::App for ClinicApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}
