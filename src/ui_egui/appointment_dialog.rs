//! New-appointment dialog.
//!
//! Opened two ways: from a finished drag on the calendar grid (the interval
//! is fixed, the patient is picked here) or from a patient's detail screen
//! (the patient is fixed, date and time are picked here).

use chrono::{Local, NaiveDate, NaiveTime};
use egui::{Color32, RichText};

use crate::models::appointment::{Appointment, AppointmentDraft, NewAppointment, Provider};
use crate::models::patient::PatientId;
use crate::models::service::Service;
use crate::services::appointment::AppointmentStore;
use crate::services::patient::PatientDirectory;
use crate::utils::time_grid::format_time_12h;

const FORM_LABEL_WIDTH: f32 = 90.0;

/// Start times offered by the patient form: 08:00 to 16:30 every 30 minutes.
pub fn time_slots() -> Vec<NaiveTime> {
    (0..18)
        .filter_map(|i| NaiveTime::from_hms_opt(8 + i / 2, (i % 2) * 30, 0))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOrigin {
    /// Interval chosen by dragging on the grid.
    Calendar { end_time: NaiveTime },
    /// Opened from a patient's detail screen.
    Patient,
}

pub struct AppointmentDialogState {
    pub form: NewAppointment,
    pub origin: DialogOrigin,
    pub error_message: Option<String>,
}

impl AppointmentDialogState {
    pub fn from_draft(draft: &AppointmentDraft) -> Self {
        Self {
            form: NewAppointment::from_draft(draft),
            origin: DialogOrigin::Calendar {
                end_time: draft.end_time,
            },
            error_message: None,
        }
    }

    /// Blank form for `patient_id`, defaulting to 09:00 on `date`.
    pub fn for_patient(patient_id: PatientId, date: NaiveDate) -> Self {
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN);
        let mut form = NewAppointment::new(date, nine);
        form.patient_id = Some(patient_id);
        Self {
            form,
            origin: DialogOrigin::Patient,
            error_message: None,
        }
    }

    /// Validate and append to the store. Errors stay on the dialog.
    pub fn save(
        &mut self,
        store: &mut AppointmentStore,
        directory: &PatientDirectory,
    ) -> Result<Appointment, String> {
        store
            .schedule(self.form.clone(), directory, Local::now())
            .map_err(|e| e.to_string())
    }
}

/// Draw the dialog. Returns the appointment when one was created; clears
/// `show_dialog` on save, cancel, close or Escape.
pub fn render_appointment_dialog(
    ctx: &egui::Context,
    state: &mut AppointmentDialogState,
    store: &mut AppointmentStore,
    directory: &PatientDirectory,
    show_dialog: &mut bool,
) -> Option<Appointment> {
    let mut saved = None;
    let mut dialog_open = *show_dialog;

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        *show_dialog = false;
        return None;
    }

    egui::Window::new("New Appointment")
        .open(&mut dialog_open)
        .collapsible(false)
        .resizable(false)
        .default_width(460.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            render_when_fields(ui, state, directory);
            ui.add_space(6.0);
            render_details_fields(ui, &mut state.form);
            ui.add_space(8.0);

            if let Some(error) = &state.error_message {
                ui.label(RichText::new(error).color(Color32::from_rgb(231, 76, 60)));
                ui.add_space(4.0);
            }
            ui.separator();

            ui.horizontal(|ui| {
                let can_save = state.form.patient_id.is_some();
                let save_button = egui::Button::new("Schedule").fill(if can_save {
                    Color32::from_rgb(70, 120, 200)
                } else {
                    Color32::from_gray(60)
                });

                ui.add_enabled_ui(can_save, |ui| {
                    if ui.add(save_button).clicked() {
                        match state.save(store, directory) {
                            Ok(appointment) => {
                                saved = Some(appointment);
                                *show_dialog = false;
                            }
                            Err(e) => state.error_message = Some(e),
                        }
                    }
                });

                if !can_save {
                    ui.label(
                        RichText::new("(Patient required)")
                            .small()
                            .color(Color32::from_gray(150)),
                    );
                }

                if ui.button("Cancel").clicked() {
                    *show_dialog = false;
                }
            });
        });

    if !dialog_open {
        *show_dialog = false;
    }
    saved
}

fn labeled_row(ui: &mut egui::Ui, label: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.horizontal(|ui| {
        ui.add_sized([FORM_LABEL_WIDTH, 20.0], egui::Label::new(label));
        add_contents(ui);
    });
}

/// Patient, date and time rows; which are editable depends on the origin.
fn render_when_fields(
    ui: &mut egui::Ui,
    state: &mut AppointmentDialogState,
    directory: &PatientDirectory,
) {
    let form = &mut state.form;

    match state.origin {
        DialogOrigin::Calendar { end_time } => {
            labeled_row(ui, "Patient *", |ui| {
                let selected = form
                    .patient_id
                    .as_ref()
                    .map(|id| directory.display_name(id))
                    .unwrap_or_else(|| "Select a patient...".to_string());
                egui::ComboBox::from_id_source("dialog_patient")
                    .selected_text(selected)
                    .width(260.0)
                    .show_ui(ui, |ui| {
                        for patient in directory.all() {
                            ui.selectable_value(
                                &mut form.patient_id,
                                Some(patient.id.clone()),
                                format!("{} ({})", patient.full_name(), patient.id),
                            );
                        }
                    });
            });
            labeled_row(ui, "When", |ui| {
                ui.label(format!(
                    "{}, {} - {} ({} min)",
                    form.date.format("%a %b %-d, %Y"),
                    format_time_12h(form.time),
                    format_time_12h(end_time),
                    form.duration_minutes
                ));
            });
        }
        DialogOrigin::Patient => {
            if let Some(id) = &form.patient_id {
                labeled_row(ui, "Patient", |ui| {
                    ui.label(RichText::new(directory.display_name(id)).strong());
                });
            }
            labeled_row(ui, "Date *", |ui| {
                ui.add(egui_extras::DatePickerButton::new(&mut form.date).id_source("dialog_date"));
            });
            labeled_row(ui, "Time *", |ui| {
                egui::ComboBox::from_id_source("dialog_time")
                    .selected_text(format_time_12h(form.time))
                    .show_ui(ui, |ui| {
                        for slot in time_slots() {
                            ui.selectable_value(&mut form.time, slot, format_time_12h(slot));
                        }
                    });
            });
        }
    }
}

/// Provider, services and notes, common to both origins.
fn render_details_fields(ui: &mut egui::Ui, form: &mut NewAppointment) {
    labeled_row(ui, "Provider *", |ui| {
        egui::ComboBox::from_id_source("dialog_provider")
            .selected_text(form.provider.name())
            .show_ui(ui, |ui| {
                for provider in Provider::ALL {
                    ui.selectable_value(&mut form.provider, provider, provider.name());
                }
            });
    });

    ui.add_space(4.0);
    ui.label("Services");
    egui::Grid::new("dialog_services")
        .num_columns(2)
        .spacing([12.0, 2.0])
        .show(ui, |ui| {
            for (idx, service) in Service::catalog().iter().enumerate() {
                let mut checked = form.has_service(&service.code);
                if ui.checkbox(&mut checked, service.label_with_price()).changed() {
                    form.toggle_service(&service.code);
                }
                if idx % 2 == 1 {
                    ui.end_row();
                }
            }
        });

    ui.add_space(4.0);
    ui.label("Notes");
    ui.add(
        egui::TextEdit::multiline(&mut form.notes)
            .desired_rows(3)
            .desired_width(f32::INFINITY)
            .hint_text("Optional notes..."),
    );
}
