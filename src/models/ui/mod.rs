// UI models module
// View selection shared by navigation and settings

use std::fmt;

/// Calendar layout currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewType {
    Day,
    #[default]
    Week,
    Month,
}

impl ViewType {
    pub const ALL: [ViewType; 3] = [ViewType::Day, ViewType::Week, ViewType::Month];

    /// Parse a settings value; anything unrecognised falls back to the week view.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "day" => ViewType::Day,
            "month" => ViewType::Month,
            _ => ViewType::Week,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewType::Day => "Day",
            ViewType::Week => "Week",
            ViewType::Month => "Month",
        }
    }

    /// Single-key shortcut shown in tooltips.
    pub fn shortcut(&self) -> char {
        match self {
            ViewType::Day => 'd',
            ViewType::Week => 'w',
            ViewType::Month => 'm',
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
