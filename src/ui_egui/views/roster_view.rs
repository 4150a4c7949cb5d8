//! Patient roster: header, stats, search/sort bar and the patient list.

use chrono::NaiveDate;
use egui::{Align2, Color32, FontId, Margin, Rounding, Sense, Stroke, Vec2};

use super::palette::{status_color, with_alpha};
use super::utils::contrast_text;
use crate::models::appointment::{AppointmentStatus, Provider};
use crate::models::patient::{Patient, PatientId};
use crate::services::appointment::AppointmentStore;
use crate::services::patient::{PatientDirectory, RosterSort};
use crate::ui_egui::theme::CalendarTheme;

#[derive(Debug, Default)]
pub struct RosterState {
    pub search: String,
    pub sort: RosterSort,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RosterAction {
    OpenPatient(PatientId),
    OpenCalendar,
}

pub struct RosterView;

impl RosterView {
    pub fn show(
        ui: &mut egui::Ui,
        state: &mut RosterState,
        directory: &PatientDirectory,
        store: &AppointmentStore,
        as_of: NaiveDate,
        theme: &CalendarTheme,
    ) -> Option<RosterAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading(egui::RichText::new("⚕ Spine & Wellness").strong());
                ui.label(
                    egui::RichText::new("Patient Management System").color(theme.text_secondary),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("📅 Calendar").clicked() {
                    action = Some(RosterAction::OpenCalendar);
                }
            });
        });
        ui.add_space(8.0);

        let with_upcoming = store.count_with_upcoming(directory.all(), as_of);
        ui.horizontal(|ui| {
            stat_card(ui, theme, directory.len(), "Total Patients");
            stat_card(ui, theme, with_upcoming, "Upcoming Appointments");
            stat_card(ui, theme, Provider::ALL.len(), "Providers");
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label("🔍");
            ui.add(
                egui::TextEdit::singleline(&mut state.search)
                    .hint_text("Search patients by name, email, or condition...")
                    .desired_width(ui.available_width() - 190.0),
            );
            egui::ComboBox::from_id_source("roster_sort")
                .selected_text(format!("Sort by {}", state.sort.label()))
                .show_ui(ui, |ui| {
                    for sort in RosterSort::ALL {
                        let label = format!("Sort by {}", sort.label());
                        ui.selectable_value(&mut state.sort, sort, label);
                    }
                });
        });
        ui.add_space(6.0);
        ui.separator();

        let patients = directory.filtered_sorted(&state.search, state.sort, store);

        egui::ScrollArea::vertical()
            .id_source("roster_list")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for patient in &patients {
                    if Self::render_row(ui, patient, store, as_of, theme) {
                        action = Some(RosterAction::OpenPatient(patient.id.clone()));
                    }
                }

                if patients.is_empty() {
                    ui.add_space(24.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "No patients found matching \"{}\"",
                                state.search
                            ))
                            .italics()
                            .color(theme.text_secondary),
                        );
                    });
                }

                ui.add_space(16.0);
                ui.separator();
                ui.label(egui::RichText::new("Quick Actions").strong());
                if ui.button("📅 View Calendar").clicked() {
                    action = Some(RosterAction::OpenCalendar);
                }
            });

        action
    }

    /// One clickable patient row. Returns true when clicked.
    fn render_row(
        ui: &mut egui::Ui,
        patient: &Patient,
        store: &AppointmentStore,
        as_of: NaiveDate,
        theme: &CalendarTheme,
    ) -> bool {
        let frame = egui::Frame::none()
            .fill(theme.card_background)
            .rounding(Rounding::same(8.0))
            .stroke(Stroke::new(1.0, theme.day_border))
            .inner_margin(Margin::symmetric(12.0, 8.0));

        let inner = frame.show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                avatar(ui, &patient.initials(), theme.accent, 36.0);

                ui.vertical(|ui| {
                    ui.set_width(180.0);
                    ui.label(egui::RichText::new(patient.full_name()).strong());
                    ui.label(
                        egui::RichText::new(patient.id.as_str())
                            .small()
                            .color(theme.text_secondary),
                    );
                });

                ui.vertical(|ui| {
                    ui.set_width(150.0);
                    tag(ui, &patient.condition, theme.accent);
                });

                ui.vertical(|ui| {
                    ui.set_width(220.0);
                    ui.label(&patient.phone);
                    ui.label(
                        egui::RichText::new(&patient.email)
                            .small()
                            .color(theme.text_secondary),
                    );
                });

                match store.upcoming_for_patient(&patient.id, as_of) {
                    Some(next) => tag(
                        ui,
                        &format!("{} at {}", next.date.format("%b %-d"), next.time_string()),
                        status_color(AppointmentStatus::Scheduled),
                    ),
                    None => {
                        ui.label(
                            egui::RichText::new("No upcoming")
                                .italics()
                                .color(theme.text_secondary),
                        );
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new("View ›").color(theme.accent));
                });
            });
        });

        ui.add_space(4.0);
        let response = ui.interact(
            inner.response.rect,
            ui.id().with(("roster_row", patient.id.as_str())),
            Sense::click(),
        );
        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        response.clicked()
    }
}

fn stat_card(ui: &mut egui::Ui, theme: &CalendarTheme, value: usize, label: &str) {
    egui::Frame::none()
        .fill(theme.card_background)
        .rounding(Rounding::same(8.0))
        .stroke(Stroke::new(1.0, theme.day_border))
        .inner_margin(Margin::symmetric(16.0, 10.0))
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(value.to_string())
                        .size(22.0)
                        .strong()
                        .color(theme.accent),
                );
                ui.label(egui::RichText::new(label).color(theme.text_secondary));
            });
        });
}

/// Circle with initials, shared with the patient card.
pub(crate) fn avatar(ui: &mut egui::Ui, initials: &str, color: Color32, size: f32) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.circle_filled(rect.center(), size / 2.0, color);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        initials,
        FontId::proportional(size * 0.4),
        contrast_text(color),
    );
}

/// Small rounded label tinted with `color`.
pub(crate) fn tag(ui: &mut egui::Ui, text: &str, color: Color32) {
    egui::Frame::none()
        .fill(with_alpha(color, 40))
        .rounding(Rounding::same(10.0))
        .inner_margin(Margin::symmetric(8.0, 3.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small().color(color));
        });
}
