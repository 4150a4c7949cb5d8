use super::context::AppContext;
use super::state::AppState;
use super::ClinicApp;
use crate::models::settings::Settings;
use crate::services::appointment::AppointmentStore;
use crate::services::generator::{default_reference_date, load_roster, AppointmentGenerator};
use crate::services::patient::PatientDirectory;
use crate::ui_egui::appointment_dialog::render_appointment_dialog;
use crate::ui_egui::drag::DragCreate;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::today;
use crate::utils::time_grid::TimeWindow;
use chrono::NaiveDate;
use std::path::PathBuf;

impl ClinicApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, config_path: PathBuf) -> Self {
        let reference_date = session_reference_date(&settings);
        let (directory, store) = load_session_data(&settings, reference_date);
        log::info!(
            "Loaded {} patients and {} appointments around {}",
            directory.len(),
            store.len(),
            reference_date
        );

        let active_theme = CalendarTheme::for_settings(&settings);
        active_theme.apply_to_context(&cc.egui_ctx);

        let window = TimeWindow::from_settings(&settings);
        let drag = DragCreate::new(window, settings.min_preview_height);

        Self {
            context: AppContext::new(directory, store, reference_date, config_path),
            current_view: settings.initial_view(),
            current_date: today(),
            active_theme,
            drag,
            show_appointment_dialog: false,
            appointment_dialog_state: None,
            state: AppState::default(),
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_shortcuts(ctx);

        if self.state.on_calendar() {
            self.render_sidebar(ctx);
            // Keeps the current-time line moving.
            ctx.request_repaint_after(std::time::Duration::from_secs(60));
        }
        self.render_main_panel(ctx);
        self.render_help_overlay(ctx);
        self.render_appointment_dialog(ctx);
    }

    fn render_appointment_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_appointment_dialog {
            self.appointment_dialog_state = None;
            return;
        }
        let Some(dialog_state) = self.appointment_dialog_state.as_mut() else {
            self.show_appointment_dialog = false;
            return;
        };

        let (store, directory) = self.context.scheduling();
        let created = render_appointment_dialog(
            ctx,
            dialog_state,
            store,
            directory,
            &mut self.show_appointment_dialog,
        );
        if let Some(appointment) = created {
            log::debug!("Dialog closed after creating {}", appointment.id);
        }
        if !self.show_appointment_dialog {
            self.appointment_dialog_state = None;
        }
    }
}

pub(super) fn session_reference_date(settings: &Settings) -> NaiveDate {
    settings.anchor_date.unwrap_or_else(default_reference_date)
}

/// Roster plus history generated around `reference_date`. A broken roster
/// asset leaves an empty session rather than aborting start-up.
pub(super) fn load_session_data(
    settings: &Settings,
    reference_date: NaiveDate,
) -> (PatientDirectory, AppointmentStore) {
    let patients = load_roster().unwrap_or_else(|e| {
        log::error!("Failed to load patient roster: {:#}", e);
        Vec::new()
    });

    let mut generator = AppointmentGenerator::new(settings.seed, reference_date);
    let appointments = generator.generate_all(&patients);

    (
        PatientDirectory::new(patients),
        AppointmentStore::new(appointments),
    )
}
