use super::state::Screen;
use super::ClinicApp;
use crate::models::ui::ViewType;
use crate::utils::date::{add_period, today, Direction};
use chrono::NaiveDate;

impl ClinicApp {
    pub(super) fn navigate_previous(&mut self) {
        self.current_date = add_period(self.current_date, self.current_view, Direction::Previous);
    }

    pub(super) fn navigate_next(&mut self) {
        self.current_date = add_period(self.current_date, self.current_view, Direction::Next);
    }

    pub(super) fn jump_to_today(&mut self) {
        self.current_date = today();
    }

    pub(super) fn set_view(&mut self, view: ViewType) {
        if view == ViewType::Month {
            self.drag.reset();
        }
        self.current_view = view;
    }

    /// Show or hide the shortcut overlay. Showing it ends any drag in progress.
    pub(super) fn toggle_help(&mut self) {
        self.state.show_help = !self.state.show_help;
        if self.state.show_help {
            self.drag.reset();
        }
    }

    /// Day view on `date`, opening the calendar if needed.
    pub(super) fn open_day(&mut self, date: NaiveDate) {
        self.current_date = date;
        self.set_view(ViewType::Day);
        self.open_screen(Screen::Calendar);
    }

    pub(super) fn open_screen(&mut self, screen: Screen) {
        if self.state.on_calendar() && screen != Screen::Calendar {
            self.drag.reset();
        }
        log::debug!("Navigating from {:?} to {:?}", self.state.screen, screen);
        self.state.open(screen);
    }

    pub(super) fn go_back(&mut self) {
        if self.state.on_calendar() {
            self.drag.reset();
        }
        self.state.back();
        log::debug!("Navigated back to {:?}", self.state.screen);
    }
}
