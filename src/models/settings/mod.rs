// Settings module
// User-tunable layout and data options loaded from config.toml

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ui::ViewType;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("visible window must start before it ends ({start}:00 >= {end}:00)")]
    EmptyWindow { start: u32, end: u32 },
    #[error("visible window cannot end after 24:00 (got {0}:00)")]
    WindowPastMidnight(u32),
    #[error("pixels_per_hour must be positive (got {0})")]
    InvalidScale(f32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// First visible hour in day/week grids.
    pub window_start_hour: u32,
    /// Hour the visible grid ends at (exclusive).
    pub window_end_hour: u32,
    pub pixels_per_hour: f32,
    pub default_view: String,
    /// Smallest drag preview drawn, in pixels.
    pub min_preview_height: f32,
    pub theme: String,
    /// Fixes the synthetic data; random when absent.
    pub seed: Option<u64>,
    /// Reference "today" for seeding statuses; 2026-02-12 when absent.
    pub anchor_date: Option<NaiveDate>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_start_hour: 8,
            window_end_hour: 20,
            pixels_per_hour: 60.0,
            default_view: "Week".to_string(),
            min_preview_height: 12.0,
            theme: "light".to_string(),
            seed: None,
            anchor_date: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.window_end_hour > 24 {
            return Err(SettingsError::WindowPastMidnight(self.window_end_hour));
        }
        if self.window_start_hour >= self.window_end_hour {
            return Err(SettingsError::EmptyWindow {
                start: self.window_start_hour,
                end: self.window_end_hour,
            });
        }
        if !(self.pixels_per_hour > 0.0) {
            return Err(SettingsError::InvalidScale(self.pixels_per_hour));
        }
        Ok(())
    }

    pub fn initial_view(&self) -> ViewType {
        ViewType::parse(&self.default_view)
    }

    pub fn is_dark(&self) -> bool {
        self.theme.to_lowercase().contains("dark")
    }
}
