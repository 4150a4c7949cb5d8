//! Scrollable hour grid shared by the day and week views.
//!
//! Draws the visible hour window for a set of day columns, positions
//! appointment blocks by start time and duration, and feeds pointer input
//! to [`DragCreate`] so a press-drag-release proposes a new appointment.

use chrono::{Datelike, Local, NaiveDate, Weekday};
use egui::{Align2, CursorIcon, FontId, Pos2, Rect, Rounding, Sense, Stroke, Vec2};

use super::palette::{status_color, with_alpha, TimeGridPalette};
use super::utils::{contrast_text, first_name};
use super::{CalendarAction, CalendarData};
use crate::models::appointment::{Appointment, AppointmentDraft};
use crate::ui_egui::drag::{ColumnGeometry, DragCreate, PointerFrame};
use crate::utils::date::is_today_on;
use crate::utils::time_grid::{
    format_hour_label, format_time_12h, minutes_to_time, time_to_minutes, TimeWindow,
    SNAP_MINUTES,
};

pub const TIME_LABEL_WIDTH: f32 = 56.0;
pub const COLUMN_SPACING: f32 = 1.0;
const MIN_BLOCK_HEIGHT: f32 = 18.0;

/// Split `area` into one column per date, right of the hour-label gutter.
pub fn day_columns(area: Rect, dates: &[NaiveDate]) -> Vec<(NaiveDate, Rect)> {
    if dates.is_empty() {
        return Vec::new();
    }

    let left = area.left() + TIME_LABEL_WIDTH;
    let gaps = COLUMN_SPACING * (dates.len() - 1) as f32;
    let col_width = ((area.right() - left - gaps) / dates.len() as f32).max(1.0);

    dates
        .iter()
        .enumerate()
        .map(|(idx, date)| {
            let x = left + idx as f32 * (col_width + COLUMN_SPACING);
            let rect = Rect::from_min_size(
                Pos2::new(x, area.top()),
                Vec2::new(col_width, area.height()),
            );
            (*date, rect)
        })
        .collect()
}

struct PlacedBlock<'a> {
    appointment: &'a Appointment,
    rect: Rect,
}

/// Render the grid for `dates`. Returns at most one action per frame.
pub fn render_time_grid(
    ui: &mut egui::Ui,
    id_source: &str,
    dates: &[NaiveDate],
    data: &CalendarData<'_>,
    drag: &mut DragCreate,
    palette: &TimeGridPalette,
) -> Option<CalendarAction> {
    let window = drag.window();
    let mut action = None;

    egui::ScrollArea::vertical()
        .id_source(id_source)
        .auto_shrink([false, false])
        .drag_to_scroll(false)
        .show(ui, |ui| {
            let size = Vec2::new(ui.available_width(), window.height());
            let (grid_rect, _) = ui.allocate_exact_size(size, Sense::hover());
            let viewport = ui.clip_rect();
            let geometry = ColumnGeometry {
                top_offset: viewport.top(),
                scroll_top: viewport.top() - grid_rect.top(),
            };
            let columns = day_columns(grid_rect, dates);

            paint_background(ui, grid_rect, &columns, window, palette, data.today);

            let blocks: Vec<PlacedBlock<'_>> = columns
                .iter()
                .flat_map(|(date, rect)| layout_blocks(data.store.on_date(*date), *rect, window))
                .collect();

            let draft = handle_pointer(ui, drag, &columns, &blocks, geometry, viewport, data);

            for block in &blocks {
                if let Some(clicked) = draw_block(ui, block, data) {
                    action = Some(clicked);
                }
            }

            draw_drag_preview(ui, drag, &columns, grid_rect, palette);
            draw_current_time_indicator(ui, &columns, grid_rect, window, palette);

            if let Some(draft) = draft {
                action = Some(CalendarAction::CreateFromDraft(draft));
            }
        });

    action
}

fn paint_background(
    ui: &egui::Ui,
    grid_rect: Rect,
    columns: &[(NaiveDate, Rect)],
    window: TimeWindow,
    palette: &TimeGridPalette,
    today: NaiveDate,
) {
    let painter = ui.painter_at(grid_rect);

    let gutter = Rect::from_min_max(
        grid_rect.min,
        Pos2::new(grid_rect.left() + TIME_LABEL_WIDTH, grid_rect.bottom()),
    );
    painter.rect_filled(gutter, Rounding::ZERO, palette.hour_bg);

    for (date, rect) in columns {
        let fill = if is_today_on(*date, today) {
            palette.today_bg
        } else if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            palette.weekend_bg
        } else {
            palette.regular_bg
        };
        painter.rect_filled(*rect, Rounding::ZERO, fill);
        painter.line_segment(
            [rect.left_top(), rect.left_bottom()],
            Stroke::new(1.0, palette.divider),
        );
    }

    let quarter = window.pixels_per_hour * SNAP_MINUTES as f32 / 60.0;
    for hour in window.hours() {
        let y = grid_rect.top() + window.pixel_top((hour * 60) as i32);
        painter.line_segment(
            [Pos2::new(gutter.right(), y), Pos2::new(grid_rect.right(), y)],
            Stroke::new(1.0, palette.hour_line),
        );
        for step in 1..4 {
            let sub_y = y + quarter * step as f32;
            painter.line_segment(
                [Pos2::new(gutter.right(), sub_y), Pos2::new(grid_rect.right(), sub_y)],
                Stroke::new(0.5, palette.slot_line),
            );
        }
        painter.text(
            Pos2::new(gutter.right() - 6.0, y + 2.0),
            Align2::RIGHT_TOP,
            format_hour_label(hour),
            FontId::proportional(11.0),
            palette.label_text,
        );
    }
}

/// Place a day's appointments, giving overlapping ones side-by-side lanes.
fn layout_blocks<'a>(
    day: Vec<&'a Appointment>,
    column: Rect,
    window: TimeWindow,
) -> Vec<PlacedBlock<'a>> {
    let mut lane_ends: Vec<i32> = Vec::new();
    let mut placed: Vec<(usize, &'a Appointment, i32, i32)> = Vec::new();

    for appointment in day {
        let start = time_to_minutes(appointment.time);
        let end = start + (appointment.duration_minutes as i32).max(SNAP_MINUTES);
        if end <= window.start_minute() || start >= window.end_minute() {
            continue;
        }

        let lane = match lane_ends.iter().position(|lane_end| *lane_end <= start) {
            Some(lane) => lane,
            None => {
                lane_ends.push(start);
                lane_ends.len() - 1
            }
        };
        lane_ends[lane] = end;
        placed.push((lane, appointment, start, end));
    }

    let lanes = lane_ends.len().max(1) as f32;
    let lane_width = column.width() / lanes;

    placed
        .into_iter()
        .map(|(lane, appointment, start, end)| {
            let top = column.top() + window.pixel_top(start.max(window.start_minute()));
            let bottom = column.top() + window.pixel_top(end.min(window.end_minute()));
            let left = column.left() + lane as f32 * lane_width;
            let rect = Rect::from_min_size(
                Pos2::new(left + 1.0, top + 1.0),
                Vec2::new(lane_width - 2.0, (bottom - top - 2.0).max(MIN_BLOCK_HEIGHT)),
            );
            PlacedBlock { appointment, rect }
        })
        .collect()
}

/// Feed this frame's pointer events to the drag session.
fn handle_pointer(
    ui: &egui::Ui,
    drag: &mut DragCreate,
    columns: &[(NaiveDate, Rect)],
    blocks: &[PlacedBlock<'_>],
    geometry: ColumnGeometry,
    viewport: Rect,
    data: &CalendarData<'_>,
) -> Option<AppointmentDraft> {
    let (pressed, released, press_pos, latest_pos) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.interact_pos(),
            i.pointer.latest_pos(),
        )
    });

    for (date, _) in columns {
        drag.refresh_column(*date, geometry);
    }

    let press = press_pos.filter(|_| pressed).and_then(|pos| {
        let on_grid = viewport.contains(pos)
            && ui.ctx().layer_id_at(pos) == Some(ui.layer_id())
            && !blocks.iter().any(|b| b.rect.contains(pos));
        if !on_grid {
            return None;
        }
        columns
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(date, _)| (*date, pos.y, geometry))
    });

    let frame = PointerFrame {
        press,
        latest_y: latest_pos.map(|pos| pos.y),
        released,
    };
    let draft = drag.apply_frame(frame, data.interactive);

    if drag.is_dragging() {
        ui.ctx().set_cursor_icon(CursorIcon::ResizeVertical);
    }
    draft
}

fn draw_block(
    ui: &egui::Ui,
    block: &PlacedBlock<'_>,
    data: &CalendarData<'_>,
) -> Option<CalendarAction> {
    let appointment = block.appointment;
    let rect = block.rect;
    let id = ui.id().with(("appointment", &appointment.id));
    let response = ui.interact(rect, id, Sense::click());

    let color = status_color(appointment.status);
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, Rounding::same(4.0), color);
    if response.hovered() {
        painter.rect_stroke(rect, Rounding::same(4.0), Stroke::new(1.5, contrast_text(color)));
    }

    let name = data.directory.display_name(&appointment.patient_id);
    let text_color = contrast_text(color);
    let headline = format!("{} {}", format_time_12h(appointment.time), first_name(&name));
    painter.text(
        rect.left_top() + Vec2::new(4.0, 2.0),
        Align2::LEFT_TOP,
        headline,
        FontId::proportional(11.0),
        text_color,
    );
    if rect.height() >= 34.0 {
        painter.text(
            rect.left_top() + Vec2::new(4.0, 16.0),
            Align2::LEFT_TOP,
            appointment.provider.name(),
            FontId::proportional(10.0),
            with_alpha(text_color, 200),
        );
    }

    let services = appointment
        .services
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let response = response.on_hover_text(format!(
        "{} - {}\n{}\n{}\nStatus: {}",
        format_time_12h(appointment.time),
        name,
        appointment.provider,
        if services.is_empty() { "No services" } else { services.as_str() },
        appointment.status
    ));

    response
        .clicked()
        .then(|| CalendarAction::OpenPatient(appointment.patient_id.clone()))
}

fn draw_drag_preview(
    ui: &egui::Ui,
    drag: &DragCreate,
    columns: &[(NaiveDate, Rect)],
    grid_rect: Rect,
    palette: &TimeGridPalette,
) {
    let Some(preview) = drag.preview() else {
        return;
    };
    let Some((_, column)) = columns.iter().find(|(date, _)| *date == preview.day) else {
        return;
    };

    let rect = Rect::from_min_size(
        Pos2::new(column.left() + 2.0, grid_rect.top() + preview.top),
        Vec2::new(column.width() - 4.0, preview.height),
    );
    let painter = ui.painter_at(grid_rect);
    painter.rect_filled(rect, Rounding::same(4.0), palette.preview_fill);
    painter.rect_stroke(rect, Rounding::same(4.0), Stroke::new(1.5, palette.preview_stroke));
    painter.text(
        rect.left_top() + Vec2::new(4.0, 2.0),
        Align2::LEFT_TOP,
        format!(
            "{} - {}",
            format_time_12h(minutes_to_time(preview.start_minute)),
            format_time_12h(minutes_to_time(preview.end_minute))
        ),
        FontId::proportional(11.0),
        palette.preview_stroke,
    );
}

/// Red line at the current time across today's column.
fn draw_current_time_indicator(
    ui: &egui::Ui,
    columns: &[(NaiveDate, Rect)],
    grid_rect: Rect,
    window: TimeWindow,
    palette: &TimeGridPalette,
) {
    let now = Local::now();
    let Some((_, column)) = columns.iter().find(|(date, _)| *date == now.date_naive()) else {
        return;
    };

    let minutes = time_to_minutes(now.time());
    if !window.contains(minutes) {
        return;
    }

    let y = grid_rect.top() + window.pixel_top(minutes);
    let painter = ui.painter_at(grid_rect);
    painter.circle_filled(Pos2::new(column.left() + 3.0, y), 3.0, palette.now_line);
    painter.line_segment(
        [Pos2::new(column.left(), y), Pos2::new(column.right(), y)],
        Stroke::new(2.0, palette.now_line),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::appointment::{AppointmentStatus, Provider};
    use crate::models::patient::PatientId;
    use chrono::NaiveTime;

    fn appt(id: &str, h: u32, m: u32, minutes: u32) -> Appointment {
        Appointment {
            id: id.to_string(),
            patient_id: PatientId::new("P001"),
            date: NaiveDate::from_ymd_opt(2026, 2, 12).unwrap(),
            time: NaiveTime::from_hms_opt(h, m, 0).unwrap(),
            duration_minutes: minutes,
            status: AppointmentStatus::Scheduled,
            services: vec![],
            provider: Provider::Smith,
            notes: String::new(),
        }
    }

    fn column() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(100.0, 720.0))
    }

    #[test]
    fn test_day_columns_share_width_after_gutter() {
        let width = TIME_LABEL_WIDTH + 71.0 * 7.0 + 6.0;
        let area = Rect::from_min_size(Pos2::ZERO, Vec2::new(width, 100.0));
        let dates: Vec<_> = NaiveDate::from_ymd_opt(2026, 2, 8)
            .unwrap()
            .iter_days()
            .take(7)
            .collect();
        let columns = day_columns(area, &dates);
        assert_eq!(columns.len(), 7);
        assert_eq!(columns[0].1.left(), TIME_LABEL_WIDTH);
        assert!((columns[0].1.width() - 71.0).abs() < 0.01);
        assert!(day_columns(area, &[]).is_empty());
    }

    #[test]
    fn test_blocks_positioned_by_start_and_duration() {
        let first = appt("a", 9, 0, 60);
        let blocks = layout_blocks(vec![&first], column(), TimeWindow::default());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].rect.top(), 61.0);
        assert_eq!(blocks[0].rect.height(), 58.0);
    }

    #[test]
    fn test_overlapping_blocks_get_separate_lanes() {
        let first = appt("a", 9, 0, 60);
        let second = appt("b", 9, 30, 30);
        let third = appt("c", 11, 0, 30);
        let blocks = layout_blocks(vec![&first, &second, &third], column(), TimeWindow::default());
        assert_eq!(blocks.len(), 3);
        assert!(blocks[1].rect.left() > blocks[0].rect.left());
        assert_eq!(blocks[2].rect.left(), blocks[0].rect.left());
    }

    #[test]
    fn test_blocks_outside_window_are_skipped() {
        let early = appt("a", 6, 0, 30);
        let late = appt("b", 21, 0, 30);
        let blocks = layout_blocks(vec![&early, &late], column(), TimeWindow::default());
        assert!(blocks.is_empty());
    }
}
