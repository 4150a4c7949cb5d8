//! Common utility functions for calendar views.
//!
//! This module contains pure helper functions used across different view types.

use egui::Color32;

/// Parse a hex color string to Color32.
///
/// # Arguments
/// * `hex` - A hex color string, optionally prefixed with '#' (e.g., "#FF5500" or "FF5500")
///
/// # Returns
/// * `Some(Color32)` if parsing succeeds
/// * `None` if the input is empty or invalid
pub fn parse_color(hex: &str) -> Option<Color32> {
    if hex.is_empty() {
        return None;
    }

    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color32::from_rgb(r, g, b))
}

/// First word of a display name, used where space is tight.
pub fn first_name(full_name: &str) -> &str {
    full_name.split_whitespace().next().unwrap_or(full_name)
}

/// Readable text colour on top of `background`.
pub fn contrast_text(background: Color32) -> Color32 {
    let luminance = 0.299 * background.r() as f32
        + 0.587 * background.g() as f32
        + 0.114 * background.b() as f32;
    if luminance > 160.0 {
        Color32::from_rgb(30, 30, 30)
    } else {
        Color32::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::appointment::AppointmentStatus;

    #[test]
    fn test_parse_color_accepts_status_colours() {
        assert_eq!(
            parse_color(AppointmentStatus::Completed.color_hex()),
            Some(Color32::from_rgb(0x27, 0xae, 0x60))
        );
        assert_eq!(parse_color("3498db"), Some(Color32::from_rgb(0x34, 0x98, 0xdb)));
    }

    #[test]
    fn test_parse_color_rejects_bad_input() {
        assert_eq!(parse_color(""), None);
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#GGGGGG"), None);
    }

    #[test]
    fn test_first_name() {
        assert_eq!(first_name("James Anderson"), "James");
        assert_eq!(first_name("Unknown"), "Unknown");
    }

    #[test]
    fn test_contrast_text() {
        assert_eq!(contrast_text(Color32::WHITE), Color32::from_rgb(30, 30, 30));
        assert_eq!(contrast_text(Color32::from_rgb(0x34, 0x98, 0xdb)), Color32::WHITE);
    }
}
