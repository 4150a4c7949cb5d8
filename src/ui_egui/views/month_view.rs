use chrono::{Datelike, NaiveDate, Weekday};
use egui::{Align2, FontId, Margin, Pos2, Rect, Rounding, Sense, Stroke, Vec2};

use super::palette::{status_color, CalendarCellPalette, DayStripPalette};
use super::utils::{contrast_text, first_name};
use super::{CalendarAction, CalendarData};
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::{is_same_month, is_today_on, month_grid_dates};
use crate::utils::time_grid::format_time_12h;

/// Entries drawn per cell before the "+N more" line.
pub const MAX_VISIBLE_ENTRIES: usize = 3;
const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const ENTRY_HEIGHT: f32 = 16.0;

pub struct MonthView;

impl MonthView {
    pub fn show(
        ui: &mut egui::Ui,
        current_date: NaiveDate,
        data: &CalendarData<'_>,
        theme: &CalendarTheme,
    ) -> Option<CalendarAction> {
        let spacing = 2.0;
        let col_width = ((ui.available_width() - spacing * 6.0) / 7.0).max(40.0);
        let strip = DayStripPalette::from_theme(theme);

        egui::Grid::new("month_header_grid")
            .spacing([spacing, spacing])
            .show(ui, |ui| {
                for name in DAY_NAMES {
                    ui.allocate_ui_with_layout(
                        Vec2::new(col_width, 28.0),
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            egui::Frame::none()
                                .fill(strip.strip_bg)
                                .rounding(Rounding::same(6.0))
                                .stroke(Stroke::new(1.0, strip.strip_border))
                                .inner_margin(Margin::symmetric(4.0, 5.0))
                                .show(ui, |ui| {
                                    ui.label(
                                        egui::RichText::new(name)
                                            .size(12.0)
                                            .color(strip.text)
                                            .strong(),
                                    );
                                });
                        },
                    );
                }
                ui.end_row();
            });

        ui.add_space(spacing);

        let dates = month_grid_dates(current_date);
        let weeks = (dates.len() / 7).max(1);
        let gaps = spacing * (weeks - 1) as f32;
        let row_height = ((ui.available_height() - gaps) / weeks as f32).max(72.0);
        let palette = CalendarCellPalette::from_theme(theme);
        let mut action = None;

        egui::ScrollArea::vertical()
            .id_source("month_grid_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for week in dates.chunks(7) {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = spacing;
                        for date in week {
                            if let Some(cell_action) = Self::render_day_cell(
                                ui,
                                *date,
                                current_date,
                                Vec2::new(col_width, row_height),
                                data,
                                &palette,
                            ) {
                                action = Some(cell_action);
                            }
                        }
                    });
                    ui.add_space(spacing);
                }
            });

        action
    }

    fn render_day_cell(
        ui: &mut egui::Ui,
        date: NaiveDate,
        anchor: NaiveDate,
        size: Vec2,
        data: &CalendarData<'_>,
        palette: &CalendarCellPalette,
    ) -> Option<CalendarAction> {
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        let in_month = is_same_month(date, anchor);
        let is_today = is_today_on(date, data.today);

        let fill = if is_today {
            palette.today_bg
        } else if !in_month {
            palette.other_month_bg
        } else if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            palette.weekend_bg
        } else {
            palette.regular_bg
        };
        let border = if is_today {
            Stroke::new(2.0, palette.today_border)
        } else if response.hovered() {
            Stroke::new(1.5, palette.hover_border)
        } else {
            Stroke::new(1.0, palette.border)
        };

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, Rounding::same(4.0), fill);
        painter.rect_stroke(rect, Rounding::same(4.0), border);

        let number_pos = rect.left_top() + Vec2::new(14.0, 12.0);
        if is_today {
            painter.circle_filled(number_pos, 10.0, palette.today_border);
        }
        painter.text(
            number_pos,
            Align2::CENTER_CENTER,
            date.day().to_string(),
            FontId::proportional(13.0),
            if is_today {
                contrast_text(palette.today_border)
            } else if in_month {
                palette.text
            } else {
                palette.dim_text
            },
        );

        let appointments = data.store.on_date(date);
        let mut entry_action = None;
        let mut y = rect.top() + 26.0;
        for appointment in appointments.iter().take(MAX_VISIBLE_ENTRIES) {
            let entry_rect = Rect::from_min_size(
                Pos2::new(rect.left() + 4.0, y),
                Vec2::new(rect.width() - 8.0, ENTRY_HEIGHT - 2.0),
            );
            if entry_rect.bottom() > rect.bottom() {
                break;
            }

            let entry_response = ui.interact(
                entry_rect,
                ui.id().with(("month_entry", &appointment.id)),
                Sense::click(),
            );
            let color = status_color(appointment.status);
            painter.rect_filled(entry_rect, Rounding::same(3.0), color);
            let name = data.directory.display_name(&appointment.patient_id);
            painter.with_clip_rect(entry_rect).text(
                entry_rect.left_center() + Vec2::new(4.0, 0.0),
                Align2::LEFT_CENTER,
                format!("{} {}", format_time_12h(appointment.time), first_name(&name)),
                FontId::proportional(10.5),
                contrast_text(color),
            );

            if entry_response
                .on_hover_text(format!("{} - {}", format_time_12h(appointment.time), name))
                .clicked()
            {
                entry_action = Some(CalendarAction::OpenPatient(appointment.patient_id.clone()));
            }
            y += ENTRY_HEIGHT;
        }

        if appointments.len() > MAX_VISIBLE_ENTRIES {
            painter.text(
                Pos2::new(rect.left() + 6.0, y),
                Align2::LEFT_TOP,
                more_label(appointments.len()),
                FontId::proportional(10.5),
                palette.dim_text,
            );
        }

        if entry_action.is_some() {
            return entry_action;
        }
        response
            .clicked()
            .then_some(CalendarAction::OpenDay(date))
    }
}

/// "+N more" for a day holding `total` appointments, if any are hidden.
pub fn more_label(total: usize) -> String {
    format!("+{} more", total.saturating_sub(MAX_VISIBLE_ENTRIES))
}
