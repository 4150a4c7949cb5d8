//! Pixel <-> time-of-day mapping for the scrollable hour grid.
//!
//! These are plain transforms with no clamping; callers decide what range
//! is acceptable (the drag-to-create session clamps to the visible window).

use chrono::{NaiveTime, Timelike};
use std::ops::Range;

use crate::models::settings::Settings;

/// Granularity every pointer-derived time snaps to.
pub const SNAP_MINUTES: i32 = 15;
const MINUTES_PER_DAY: i32 = 24 * 60;

/// Convert a pointer y coordinate to minutes since midnight, snapped to the
/// nearest quarter hour.
///
/// `container_top_offset` is the screen y of the visible top of the scroll
/// container and `container_scroll_top` how far its content is scrolled.
pub fn pixel_to_minutes(
    y: f32,
    container_scroll_top: f32,
    container_top_offset: f32,
    pixels_per_hour: f32,
    window_start_hour: u32,
) -> i32 {
    let relative_y = y - container_top_offset + container_scroll_top;
    let minutes = relative_y / pixels_per_hour * 60.0 + (window_start_hour * 60) as f32;
    snap_minutes(minutes)
}

/// Round to the nearest multiple of [`SNAP_MINUTES`].
pub fn snap_minutes(minutes: f32) -> i32 {
    (minutes / SNAP_MINUTES as f32).round() as i32 * SNAP_MINUTES
}

/// Offset from the top of the grid content where `minutes` is drawn.
pub fn minutes_to_pixel_top(minutes: i32, window_start_hour: u32, pixels_per_hour: f32) -> f32 {
    (minutes - (window_start_hour * 60) as i32) as f32 / 60.0 * pixels_per_hour
}

/// Zero-padded 24-hour `HH:MM`.
pub fn minutes_to_clock_string(minutes: i32) -> String {
    let minutes = minutes.max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Clock time for `minutes`, saturating at 00:00 and 23:59.
pub fn minutes_to_time(minutes: i32) -> NaiveTime {
    let minutes = minutes.clamp(0, MINUTES_PER_DAY - 1) as u32;
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).unwrap_or(NaiveTime::MIN)
}

pub fn time_to_minutes(time: NaiveTime) -> i32 {
    (time.hour() * 60 + time.minute()) as i32
}

/// "9:05 AM" style display of a clock time.
pub fn format_time_12h(time: NaiveTime) -> String {
    let (is_pm, hour12) = time.hour12();
    format!(
        "{}:{:02} {}",
        hour12,
        time.minute(),
        if is_pm { "PM" } else { "AM" }
    )
}

/// Row label for the start of `hour`: "8 AM", "12 PM", "7 PM".
pub fn format_hour_label(hour: u32) -> String {
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{} {}", display, suffix)
}

/// Visible hour range and vertical scale of the day/week grids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    pub start_hour: u32,
    /// Exclusive.
    pub end_hour: u32,
    pub pixels_per_hour: f32,
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self {
            start_hour: 8,
            end_hour: 20,
            pixels_per_hour: 60.0,
        }
    }
}

impl TimeWindow {
    pub fn new(start_hour: u32, end_hour: u32, pixels_per_hour: f32) -> Self {
        Self {
            start_hour,
            end_hour,
            pixels_per_hour,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.window_start_hour,
            settings.window_end_hour,
            settings.pixels_per_hour,
        )
    }

    /// Hours that get a grid row.
    pub fn hours(&self) -> Range<u32> {
        self.start_hour..self.end_hour
    }

    pub fn start_minute(&self) -> i32 {
        (self.start_hour * 60) as i32
    }

    pub fn end_minute(&self) -> i32 {
        (self.end_hour * 60) as i32
    }

    /// Full content height of the grid.
    pub fn height(&self) -> f32 {
        (self.end_hour - self.start_hour) as f32 * self.pixels_per_hour
    }

    pub fn pixel_top(&self, minutes: i32) -> f32 {
        minutes_to_pixel_top(minutes, self.start_hour, self.pixels_per_hour)
    }

    pub fn minutes_at(&self, y: f32, scroll_top: f32, top_offset: f32) -> i32 {
        pixel_to_minutes(y, scroll_top, top_offset, self.pixels_per_hour, self.start_hour)
    }

    pub fn contains(&self, minutes: i32) -> bool {
        minutes >= self.start_minute() && minutes < self.end_minute()
    }
}
