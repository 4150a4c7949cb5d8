//! Year overview: twelve mini months beside the calendar.

use super::ClinicApp;
use crate::utils::date::{is_same_month, is_today, mini_month_dates};
use chrono::{Datelike, NaiveDate};
use egui::{Color32, RichText};

const SIDEBAR_DEFAULT_WIDTH: f32 = 200.0;
const DAY_INITIALS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// What a click in the sidebar asked for.
enum SidebarClick {
    Year(i32),
    Month(NaiveDate),
    Day(NaiveDate),
}

impl ClinicApp {
    pub(super) fn render_sidebar(&mut self, ctx: &egui::Context) {
        let mut click = None;

        egui::SidePanel::left("year_sidebar")
            .default_width(SIDEBAR_DEFAULT_WIDTH)
            .min_width(170.0)
            .resizable(true)
            .show(ctx, |ui| {
                click = self.render_sidebar_content(ui);
            });

        match click {
            Some(SidebarClick::Year(delta)) => {
                let year = self.current_date.year() + delta;
                if let Some(date) = NaiveDate::from_ymd_opt(year, self.current_date.month(), 1) {
                    self.current_date = date;
                }
            }
            Some(SidebarClick::Month(first)) => self.current_date = first,
            Some(SidebarClick::Day(date)) => self.open_day(date),
            None => {}
        }
    }

    fn render_sidebar_content(&self, ui: &mut egui::Ui) -> Option<SidebarClick> {
        let mut click = None;
        let year = self.current_date.year();

        ui.horizontal(|ui| {
            if ui.small_button("◀").on_hover_text("Previous year").clicked() {
                click = Some(SidebarClick::Year(-1));
            }
            ui.with_layout(
                egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                |ui| {
                    ui.label(RichText::new(year.to_string()).strong().size(16.0));
                },
            );
            if ui.small_button("▶").on_hover_text("Next year").clicked() {
                click = Some(SidebarClick::Year(1));
            }
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .id_source("year_sidebar_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for month in 1..=12 {
                    if let Some(month_click) = self.render_mini_month(ui, year, month) {
                        click = Some(month_click);
                    }
                    ui.add_space(6.0);
                }
            });

        click
    }

    fn render_mini_month(&self, ui: &mut egui::Ui, year: i32, month: u32) -> Option<SidebarClick> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let active = is_same_month(first, self.current_date);
        let mut click = None;

        let title = RichText::new(first.format("%B").to_string()).strong();
        let title = if active {
            title.color(self.active_theme.accent)
        } else {
            title
        };
        if ui
            .selectable_label(active, title)
            .on_hover_text("Go to month")
            .clicked()
        {
            click = Some(SidebarClick::Month(first));
        }

        egui::Grid::new(("mini_month", year, month))
            .num_columns(7)
            .spacing([2.0, 1.0])
            .min_col_width(20.0)
            .show(ui, |ui| {
                for initial in DAY_INITIALS {
                    ui.label(RichText::new(initial).small().weak());
                }
                ui.end_row();

                for week in mini_month_dates(year, month).chunks(7) {
                    for &date in week {
                        let in_month = date.month() == month;
                        if !in_month {
                            ui.label(RichText::new(date.day().to_string()).small().weak());
                            continue;
                        }

                        let mut text = RichText::new(date.day().to_string()).small();
                        if is_today(date) {
                            text = text
                                .strong()
                                .color(Color32::WHITE)
                                .background_color(self.active_theme.accent);
                        } else if self.context.store().has_any_on(date) {
                            text = text.strong().color(self.active_theme.accent);
                        }

                        if ui.selectable_label(date == self.current_date, text).clicked() {
                            click = Some(SidebarClick::Day(date));
                        }
                    }
                    ui.end_row();
                }
            });

        click
    }
}
