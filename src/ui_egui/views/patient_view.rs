//! Patient detail screen: card, stats, details grid and the two history tabs.

use chrono::NaiveDate;
use egui::{Margin, RichText, Rounding, Stroke};

use super::palette::status_color;
use super::roster_view::{avatar, tag};
use crate::models::appointment::{Appointment, AppointmentStatus};
use crate::models::patient::Patient;
use crate::models::service::ServiceSummary;
use crate::services::appointment::AppointmentStore;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::time_grid::format_time_12h;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatientTab {
    #[default]
    History,
    Services,
}

#[derive(Debug, Default)]
pub struct PatientViewState {
    pub tab: PatientTab,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientAction {
    Back,
    OpenCalendar,
    NewAppointment,
}

/// Sum of what was billed across the summary rows.
pub fn billed_total(summaries: &[ServiceSummary]) -> u32 {
    summaries.iter().map(|s| s.total_spent).sum()
}

pub struct PatientView;

impl PatientView {
    pub fn show(
        ui: &mut egui::Ui,
        patient: Option<&Patient>,
        store: &AppointmentStore,
        state: &mut PatientViewState,
        today: NaiveDate,
        theme: &CalendarTheme,
    ) -> Option<PatientAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            if ui.button("‹ Back").clicked() {
                action = Some(PatientAction::Back);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("📅 Calendar").clicked() {
                    action = Some(PatientAction::OpenCalendar);
                }
                if patient.is_some() && ui.button("＋ New Appointment").clicked() {
                    action = Some(PatientAction::NewAppointment);
                }
            });
        });
        ui.add_space(8.0);

        let Some(patient) = patient else {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.heading("Patient not found");
                ui.label(
                    RichText::new("The record may have been removed.").color(theme.text_secondary),
                );
            });
            return action;
        };

        let summaries = store.services_for_patient(&patient.id);

        egui::ScrollArea::vertical()
            .id_source("patient_detail_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                Self::render_card(ui, patient, today, theme);
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    stat(
                        ui,
                        theme,
                        store
                            .count_for_patient(&patient.id, AppointmentStatus::Completed)
                            .to_string(),
                        "Total Visits",
                    );
                    stat(
                        ui,
                        theme,
                        store
                            .count_for_patient(&patient.id, AppointmentStatus::Scheduled)
                            .to_string(),
                        "Upcoming",
                    );
                    stat(ui, theme, format!("${}", billed_total(&summaries)), "Total Billed");
                });
                ui.add_space(8.0);

                Self::render_details(ui, patient, theme);
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    ui.selectable_value(&mut state.tab, PatientTab::History, "Appointment History");
                    ui.selectable_value(&mut state.tab, PatientTab::Services, "Services Rendered");
                });
                ui.separator();

                match state.tab {
                    PatientTab::History => {
                        let history = store.for_patient(&patient.id);
                        if history.is_empty() {
                            ui.label(
                                RichText::new("No appointments yet")
                                    .italics()
                                    .color(theme.text_secondary),
                            );
                        }
                        for appointment in history {
                            Self::render_history_entry(ui, appointment, theme);
                        }
                    }
                    PatientTab::Services => Self::render_services_table(ui, &summaries, theme),
                }
            });

        action
    }

    fn render_card(ui: &mut egui::Ui, patient: &Patient, today: NaiveDate, theme: &CalendarTheme) {
        card_frame(theme).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                avatar(ui, &patient.initials(), theme.accent, 56.0);
                ui.add_space(8.0);
                ui.vertical(|ui| {
                    ui.heading(RichText::new(patient.full_name()).strong());
                    tag(ui, &patient.condition, theme.accent);
                    ui.horizontal(|ui| {
                        ui.label(format!("✉ {}", patient.email));
                        ui.label(format!("☎ {}", patient.phone));
                        ui.label(format!("Age {}", patient.age_on(today)));
                    });
                });
            });
        });
    }

    fn render_details(ui: &mut egui::Ui, patient: &Patient, theme: &CalendarTheme) {
        card_frame(theme).show(ui, |ui| {
            ui.set_width(ui.available_width());
            egui::Grid::new("patient_details_grid")
                .num_columns(2)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    let rows = [
                        ("Address", patient.full_address()),
                        (
                            "Date of Birth",
                            patient.date_of_birth.format("%a, %b %-d, %Y").to_string(),
                        ),
                        (
                            "Emergency Contact",
                            format!("{} - {}", patient.emergency_contact, patient.emergency_phone),
                        ),
                        (
                            "Insurance",
                            format!("{} ({})", patient.insurance_provider, patient.insurance_id),
                        ),
                    ];
                    for (label, value) in rows {
                        ui.label(RichText::new(label).color(theme.text_secondary));
                        ui.label(value);
                        ui.end_row();
                    }
                });
        });
    }

    fn render_history_entry(ui: &mut egui::Ui, appointment: &Appointment, theme: &CalendarTheme) {
        card_frame(theme).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    let when = appointment.date.format("%a, %b %-d, %Y").to_string();
                    ui.label(RichText::new(when).strong());
                    ui.label(
                        RichText::new(format!(
                            "{} · {}",
                            format_time_12h(appointment.time),
                            appointment.provider
                        ))
                        .color(theme.text_secondary),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(format!("${}", appointment.total_price())).strong());
                    tag(ui, appointment.status.label(), status_color(appointment.status));
                });
            });

            ui.horizontal_wrapped(|ui| {
                for service in &appointment.services {
                    tag(ui, &service.name, theme.accent);
                }
            });
            if !appointment.notes.is_empty() {
                ui.label(RichText::new(&appointment.notes).italics().color(theme.text_secondary));
            }
        });
        ui.add_space(4.0);
    }

    fn render_services_table(
        ui: &mut egui::Ui,
        summaries: &[ServiceSummary],
        theme: &CalendarTheme,
    ) {
        if summaries.is_empty() {
            ui.label(
                RichText::new("No completed services yet")
                    .italics()
                    .color(theme.text_secondary),
            );
            return;
        }

        egui::Grid::new("patient_services_table")
            .num_columns(4)
            .striped(true)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                for header in ["Service", "Unit Price", "Count", "Total"] {
                    ui.label(RichText::new(header).strong());
                }
                ui.end_row();

                for summary in summaries {
                    ui.label(&summary.service.name);
                    ui.label(format!("${}", summary.service.price));
                    ui.label(summary.count.to_string());
                    ui.label(format!("${}", summary.total_spent));
                    ui.end_row();
                }

                ui.label(RichText::new("Total").strong());
                ui.label("");
                ui.label("");
                ui.label(RichText::new(format!("${}", billed_total(summaries))).strong());
                ui.end_row();
            });
    }
}

fn card_frame(theme: &CalendarTheme) -> egui::Frame {
    egui::Frame::none()
        .fill(theme.card_background)
        .rounding(Rounding::same(8.0))
        .stroke(Stroke::new(1.0, theme.day_border))
        .inner_margin(Margin::symmetric(14.0, 10.0))
}

fn stat(ui: &mut egui::Ui, theme: &CalendarTheme, value: String, label: &str) {
    card_frame(theme).show(ui, |ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(value).size(22.0).strong().color(theme.accent));
            ui.label(RichText::new(label).color(theme.text_secondary));
        });
    });
}
