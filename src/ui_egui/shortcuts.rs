//! Calendar keyboard shortcuts.
//!
//! Mapping is kept separate from the app so it can be tested without a
//! running egui context.

use egui::{Key, Modifiers};

use crate::models::ui::ViewType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Today,
    Next,
    Previous,
    SwitchView(ViewType),
    ToggleHelp,
    /// Close the top-most overlay (creation dialog, then help).
    CloseOverlay,
}

impl ShortcutAction {
    /// Map a key press. Chords with Ctrl, Alt or Cmd are left to egui.
    pub fn from_key(key: Key, modifiers: Modifiers) -> Option<Self> {
        if modifiers.ctrl || modifiers.alt || modifiers.command || modifiers.mac_cmd {
            return None;
        }

        match key {
            Key::T => Some(Self::Today),
            Key::J | Key::ArrowRight => Some(Self::Next),
            Key::K | Key::ArrowLeft => Some(Self::Previous),
            Key::D => Some(Self::SwitchView(ViewType::Day)),
            Key::W => Some(Self::SwitchView(ViewType::Week)),
            Key::M => Some(Self::SwitchView(ViewType::Month)),
            Key::Escape => Some(Self::CloseOverlay),
            _ => None,
        }
    }

    /// `?` arrives as text since its key depends on the keyboard layout.
    pub fn from_text(text: &str) -> Option<Self> {
        match text {
            "?" => Some(Self::ToggleHelp),
            _ => None,
        }
    }

    /// Actions triggered by this frame's input events, in order.
    pub fn collect(input: &egui::InputState) -> Vec<Self> {
        input
            .events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    modifiers,
                    ..
                } => Self::from_key(*key, *modifiers),
                egui::Event::Text(text) => Self::from_text(text),
                _ => None,
            })
            .collect()
    }
}

/// Rows for the help overlay: keys and what they do.
pub const SHORTCUT_HELP: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("t", "Go to today"),
            ("j or →", "Next period"),
            ("k or ←", "Previous period"),
        ],
    ),
    (
        "Views",
        &[("d", "Day view"), ("w", "Week view"), ("m", "Month view")],
    ),
    (
        "Other",
        &[("?", "Show keyboard shortcuts"), ("Esc", "Close dialog")],
    ),
];
