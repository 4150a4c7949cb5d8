use super::ClinicApp;
use crate::ui_egui::shortcuts::ShortcutAction;

impl ClinicApp {
    /// Calendar-only keys. Nothing is polled on the other screens or while a
    /// text field has focus.
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        if !self.state.on_calendar() || ctx.wants_keyboard_input() {
            return;
        }

        let actions = ctx.input(ShortcutAction::collect);
        for action in actions {
            self.apply_shortcut(action);
        }
    }

    fn apply_shortcut(&mut self, action: ShortcutAction) {
        if action == ShortcutAction::CloseOverlay {
            if self.show_appointment_dialog {
                self.show_appointment_dialog = false;
                self.appointment_dialog_state = None;
            } else if self.state.show_help {
                self.state.show_help = false;
            }
            return;
        }

        // The dialog is modal for everything but Escape.
        if self.show_appointment_dialog {
            return;
        }

        match action {
            ShortcutAction::Today => self.jump_to_today(),
            ShortcutAction::Next => self.navigate_next(),
            ShortcutAction::Previous => self.navigate_previous(),
            ShortcutAction::SwitchView(view) => self.set_view(view),
            ShortcutAction::ToggleHelp => self.toggle_help(),
            ShortcutAction::CloseOverlay => {}
        }
    }
}
