use chrono::NaiveDate;
use egui::{Margin, Stroke};

use super::palette::{DayStripPalette, TimeGridPalette};
use super::time_grid::render_time_grid;
use super::{CalendarAction, CalendarData};
use crate::ui_egui::drag::DragCreate;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::is_today_on;

pub struct DayView;

impl DayView {
    pub fn show(
        ui: &mut egui::Ui,
        current_date: NaiveDate,
        data: &CalendarData<'_>,
        drag: &mut DragCreate,
        theme: &CalendarTheme,
    ) -> Option<CalendarAction> {
        let is_today = is_today_on(current_date, data.today);
        let day_strip_palette = DayStripPalette::from_theme(theme);
        let count = data.store.on_date(current_date).len();

        let day_name = current_date.format("%A").to_string();
        let date_label = current_date.format("%B %-d, %Y").to_string();
        let header_frame = egui::Frame::none()
            .fill(day_strip_palette.strip_bg)
            .rounding(egui::Rounding::same(12.0))
            .stroke(Stroke::new(1.0, day_strip_palette.strip_border))
            .inner_margin(Margin::symmetric(16.0, 10.0));

        let header_response = header_frame.show(ui, |strip_ui| {
            strip_ui.horizontal(|row_ui| {
                row_ui.vertical(|text_ui| {
                    text_ui.label(
                        egui::RichText::new(&day_name)
                            .size(22.0)
                            .color(day_strip_palette.text)
                            .strong(),
                    );
                    text_ui.label(
                        egui::RichText::new(&date_label)
                            .size(14.0)
                            .color(day_strip_palette.date_text),
                    );
                });

                row_ui.with_layout(
                    egui::Layout::right_to_left(egui::Align::Center),
                    |right_ui| {
                        if is_today {
                            egui::Frame::none()
                                .fill(day_strip_palette.badge_bg)
                                .rounding(egui::Rounding::same(10.0))
                                .inner_margin(Margin::symmetric(12.0, 6.0))
                                .show(right_ui, |badge_ui| {
                                    badge_ui.label(
                                        egui::RichText::new("Today")
                                            .color(day_strip_palette.badge_text)
                                            .size(12.0)
                                            .strong(),
                                    );
                                });
                        }
                        right_ui.label(
                            egui::RichText::new(match count {
                                0 => "No appointments".to_string(),
                                1 => "1 appointment".to_string(),
                                n => format!("{} appointments", n),
                            })
                            .color(day_strip_palette.date_text),
                        );
                    },
                );
            });
        });

        let header_rect = header_response.response.rect;
        ui.painter().hline(
            header_rect.x_range(),
            header_rect.bottom(),
            Stroke::new(1.0, day_strip_palette.accent_line),
        );

        ui.add_space(8.0);

        let palette = TimeGridPalette::from_theme(theme);
        render_time_grid(ui, "day_time_grid", &[current_date], data, drag, &palette)
    }
}
