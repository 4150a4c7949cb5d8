use chrono::{Datelike, NaiveDate};
use egui::{Align2, FontId, Rounding, Sense, Stroke, Vec2};

use super::palette::{DayStripPalette, TimeGridPalette};
use super::time_grid::{day_columns, render_time_grid};
use super::{CalendarAction, CalendarData};
use crate::ui_egui::drag::DragCreate;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::{is_today_on, week_dates};

const HEADER_HEIGHT: f32 = 44.0;

pub struct WeekView;

impl WeekView {
    pub fn show(
        ui: &mut egui::Ui,
        current_date: NaiveDate,
        data: &CalendarData<'_>,
        drag: &mut DragCreate,
        theme: &CalendarTheme,
    ) -> Option<CalendarAction> {
        let dates = week_dates(current_date);
        let mut action = Self::render_day_headers(ui, &dates, data.today, theme);

        let palette = TimeGridPalette::from_theme(theme);
        let grid_action = render_time_grid(ui, "week_time_grid", &dates, data, drag, &palette);
        if let Some(grid_action) = grid_action {
            action = Some(grid_action);
        }
        action
    }

    /// Weekday names and day numbers aligned with the grid columns.
    /// Clicking a header opens that day.
    fn render_day_headers(
        ui: &mut egui::Ui,
        dates: &[NaiveDate],
        today: NaiveDate,
        theme: &CalendarTheme,
    ) -> Option<CalendarAction> {
        let palette = DayStripPalette::from_theme(theme);
        let (strip_rect, _) =
            ui.allocate_exact_size(Vec2::new(ui.available_width(), HEADER_HEIGHT), Sense::hover());
        let painter = ui.painter_at(strip_rect);
        painter.rect_filled(strip_rect, Rounding::same(6.0), palette.strip_bg);
        painter.hline(
            strip_rect.x_range(),
            strip_rect.bottom(),
            Stroke::new(1.0, palette.strip_border),
        );

        let mut action = None;
        for (date, rect) in day_columns(strip_rect, dates) {
            let is_today = is_today_on(date, today);
            let response = ui.interact(rect, ui.id().with(("week_header", date)), Sense::click());

            if is_today {
                painter.rect_filled(rect.shrink(2.0), Rounding::same(6.0), palette.today_cell_bg);
            } else if response.hovered() {
                painter.rect_stroke(
                    rect.shrink(2.0),
                    Rounding::same(6.0),
                    Stroke::new(1.0, palette.accent_line),
                );
            }

            painter.text(
                rect.center_top() + Vec2::new(0.0, 4.0),
                Align2::CENTER_TOP,
                date.format("%a").to_string(),
                FontId::proportional(11.0),
                palette.date_text,
            );

            let number_pos = rect.center_top() + Vec2::new(0.0, 26.0);
            if is_today {
                painter.circle_filled(number_pos, 11.0, palette.badge_bg);
            }
            painter.text(
                number_pos,
                Align2::CENTER_CENTER,
                date.day().to_string(),
                FontId::proportional(15.0),
                if is_today { palette.badge_text } else { palette.text },
            );

            if response.on_hover_text("Open day view").clicked() {
                action = Some(CalendarAction::OpenDay(date));
            }
        }
        action
    }
}
