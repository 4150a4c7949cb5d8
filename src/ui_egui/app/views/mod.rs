use super::state::Screen;
use super::ClinicApp;
use crate::models::appointment::AppointmentStatus;
use crate::models::ui::ViewType;
use crate::ui_egui::appointment_dialog::AppointmentDialogState;
use crate::ui_egui::shortcuts::SHORTCUT_HELP;
use crate::ui_egui::views::day_view::DayView;
use crate::ui_egui::views::month_view::MonthView;
use crate::ui_egui::views::palette::status_color;
use crate::ui_egui::views::patient_view::{PatientAction, PatientView};
use crate::ui_egui::views::roster_view::{RosterAction, RosterView};
use crate::ui_egui::views::week_view::WeekView;
use crate::ui_egui::views::{CalendarAction, CalendarData};
use crate::utils::date::{format_period_title, today};
use egui::RichText;

const LEGEND: [AppointmentStatus; 3] = [
    AppointmentStatus::Scheduled,
    AppointmentStatus::Completed,
    AppointmentStatus::Cancelled,
];

impl ClinicApp {
    pub(super) fn render_main_panel(&mut self, ctx: &egui::Context) {
        let panel_frame = egui::Frame::central_panel(&ctx.style())
            .outer_margin(egui::Margin::ZERO)
            .inner_margin(egui::Margin::same(12.0));

        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| match self.state.screen.clone() {
                Screen::Roster => self.render_roster(ui),
                Screen::Patient(id) => self.render_patient(ui, &id),
                Screen::Calendar => self.render_calendar(ui),
            });
    }

    fn render_roster(&mut self, ui: &mut egui::Ui) {
        let action = RosterView::show(
            ui,
            &mut self.state.roster,
            self.context.directory(),
            self.context.store(),
            self.context.reference_date(),
            &self.active_theme,
        );

        match action {
            Some(RosterAction::OpenPatient(id)) => self.open_screen(Screen::Patient(id)),
            Some(RosterAction::OpenCalendar) => self.open_screen(Screen::Calendar),
            None => {}
        }
    }

    fn render_patient(&mut self, ui: &mut egui::Ui, id: &crate::models::patient::PatientId) {
        let today = today();
        let action = PatientView::show(
            ui,
            self.context.directory().get(id),
            self.context.store(),
            &mut self.state.patient_view,
            today,
            &self.active_theme,
        );

        match action {
            Some(PatientAction::Back) => self.go_back(),
            Some(PatientAction::OpenCalendar) => self.open_screen(Screen::Calendar),
            Some(PatientAction::NewAppointment) => {
                self.appointment_dialog_state =
                    Some(AppointmentDialogState::for_patient(id.clone(), today));
                self.show_appointment_dialog = true;
            }
            None => {}
        }
    }

    fn render_calendar(&mut self, ui: &mut egui::Ui) {
        self.render_calendar_header(ui);
        ui.add_space(4.0);
        ui.separator();

        let data = CalendarData {
            store: self.context.store(),
            directory: self.context.directory(),
            today: today(),
            interactive: !self.show_appointment_dialog && !self.state.show_help,
        };

        let action = match self.current_view {
            ViewType::Day => {
                DayView::show(ui, self.current_date, &data, &mut self.drag, &self.active_theme)
            }
            ViewType::Week => {
                WeekView::show(ui, self.current_date, &data, &mut self.drag, &self.active_theme)
            }
            ViewType::Month => MonthView::show(ui, self.current_date, &data, &self.active_theme),
        };

        match action {
            Some(CalendarAction::OpenDay(date)) => self.open_day(date),
            Some(CalendarAction::OpenPatient(id)) => self.open_screen(Screen::Patient(id)),
            Some(CalendarAction::CreateFromDraft(draft)) => {
                log::debug!(
                    "Drag proposed {} {}-{}",
                    draft.date,
                    draft.start_time.format("%H:%M"),
                    draft.end_time.format("%H:%M")
                );
                self.appointment_dialog_state = Some(AppointmentDialogState::from_draft(&draft));
                self.show_appointment_dialog = true;
            }
            None => {}
        }
    }

    fn render_calendar_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("‹ Back").clicked() {
                self.go_back();
            }
            ui.separator();

            if ui.button("Today").on_hover_text("T").clicked() {
                self.jump_to_today();
            }
            if ui.button("◀").on_hover_text("Previous (K / ← Arrow)").clicked() {
                self.navigate_previous();
            }
            if ui.button("▶").on_hover_text("Next (J / → Arrow)").clicked() {
                self.navigate_next();
            }
            ui.heading(format_period_title(self.current_view, self.current_date));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⌨").on_hover_text("Keyboard shortcuts (?)").clicked() {
                    self.toggle_help();
                }
                ui.separator();
                for view in ViewType::ALL.iter().rev() {
                    if ui
                        .selectable_label(self.current_view == *view, view.label())
                        .on_hover_text(format!("Press {}", view.shortcut().to_ascii_uppercase()))
                        .clicked()
                    {
                        self.set_view(*view);
                    }
                }
            });
        });

        ui.horizontal(|ui| {
            for status in LEGEND {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, egui::Rounding::same(2.0), status_color(status));
                ui.label(RichText::new(capitalize(status.label())).small());
                ui.add_space(8.0);
            }
        });
    }

    pub(super) fn render_help_overlay(&mut self, ctx: &egui::Context) {
        if !self.state.show_help || !self.state.on_calendar() {
            return;
        }

        let mut open = true;
        egui::Window::new("Keyboard Shortcuts")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                for (group, rows) in SHORTCUT_HELP {
                    ui.label(RichText::new(*group).strong());
                    egui::Grid::new(("shortcut_help", *group))
                        .num_columns(2)
                        .spacing([16.0, 4.0])
                        .show(ui, |ui| {
                            for (keys, description) in rows.iter() {
                                ui.label(RichText::new(*keys).monospace());
                                ui.label(*description);
                                ui.end_row();
                            }
                        });
                    ui.add_space(6.0);
                }
                ui.separator();
                ui.label(
                    RichText::new(format!("Settings: {}", self.context.config_path().display()))
                        .small()
                        .weak(),
                );
            });

        if !open {
            self.state.show_help = false;
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
