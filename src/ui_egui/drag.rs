//! Drag-to-create gesture tracking for the day and week time grids.
//!
//! A press inside a day column starts a session, pointer motion anywhere
//! moves its end, and the release turns it into an [`AppointmentDraft`].

use chrono::NaiveDate;

use crate::models::appointment::AppointmentDraft;
use crate::utils::time_grid::{minutes_to_time, TimeWindow, SNAP_MINUTES};

/// Length of the slot a click (or a drag shorter than one snap step) proposes.
pub const CLICK_SLOT_MINUTES: i32 = 30;

/// Vertical placement of the grid column a drag started in.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ColumnGeometry {
    /// Screen y of the visible top of the scroll container.
    pub top_offset: f32,
    /// How far the container content is scrolled.
    pub scroll_top: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub day: NaiveDate,
    pub start_minute: i32,
    pub end_minute: i32,
    pub column: ColumnGeometry,
}

impl DragSession {
    /// Ordered `(low, high)` minutes.
    pub fn span(&self) -> (i32, i32) {
        (
            self.start_minute.min(self.end_minute),
            self.start_minute.max(self.end_minute),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Highlight drawn while a drag is in progress, relative to the grid top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragPreview {
    pub day: NaiveDate,
    pub top: f32,
    pub height: f32,
    pub start_minute: i32,
    pub end_minute: i32,
}

/// Pointer events seen by the grid during one frame.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PointerFrame {
    /// Primary press that landed on an empty part of a day column.
    pub press: Option<(NaiveDate, f32, ColumnGeometry)>,
    pub latest_y: Option<f32>,
    pub released: bool,
}

pub struct DragCreate {
    state: DragState,
    window: TimeWindow,
    min_preview_height: f32,
}

impl DragCreate {
    pub fn new(window: TimeWindow, min_preview_height: f32) -> Self {
        Self {
            state: DragState::Idle,
            window,
            min_preview_height,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// Primary press inside the column for `day`. Ignored while a session is active.
    pub fn pointer_down(&mut self, day: NaiveDate, y: f32, column: ColumnGeometry) {
        if self.is_dragging() {
            return;
        }

        let minutes = self.window.minutes_at(y, column.scroll_top, column.top_offset);
        let start_minute = minutes.clamp(
            self.window.start_minute(),
            self.window.end_minute() - 60,
        );

        self.state = DragState::Dragging(DragSession {
            day,
            start_minute,
            end_minute: start_minute,
            column,
        });
    }

    /// Pointer motion anywhere; measured against the column the drag began in.
    pub fn pointer_move(&mut self, y: f32) {
        let window = self.window;
        if let DragState::Dragging(session) = &mut self.state {
            let minutes =
                window.minutes_at(y, session.column.scroll_top, session.column.top_offset);
            session.end_minute = minutes.clamp(window.start_minute(), window.end_minute());
        }
    }

    /// Track a scroll of the originating column while the button is held.
    pub fn refresh_column(&mut self, day: NaiveDate, column: ColumnGeometry) {
        if let DragState::Dragging(session) = &mut self.state {
            if session.day == day {
                session.column = column;
            }
        }
    }

    /// Release anywhere. Returns the interval to seed the creation form with.
    ///
    /// A press that moved less than one snap step becomes a
    /// [`CLICK_SLOT_MINUTES`] slot starting where it was pressed.
    pub fn pointer_up(&mut self) -> Option<AppointmentDraft> {
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return None;
        };

        let (low, high) = session.span();
        let (start, end) = if high - low < SNAP_MINUTES {
            (session.start_minute, session.start_minute + CLICK_SLOT_MINUTES)
        } else {
            (low, high)
        };

        log::debug!(
            "drag on {} resolved to {}-{} minutes",
            session.day,
            start,
            end
        );

        Some(AppointmentDraft {
            date: session.day,
            start_time: minutes_to_time(start),
            end_time: minutes_to_time(end),
        })
    }

    /// Apply one frame of pointer input.
    ///
    /// Presses only start a session while `accepting_presses` is set, but a
    /// release always ends one. A release seen while presses are blocked
    /// (an overlay is up) yields no draft.
    pub fn apply_frame(
        &mut self,
        frame: PointerFrame,
        accepting_presses: bool,
    ) -> Option<AppointmentDraft> {
        if accepting_presses {
            if let Some((day, y, column)) = frame.press {
                self.pointer_down(day, y, column);
            }
        }

        if let Some(y) = frame.latest_y {
            self.pointer_move(y);
        }

        if !frame.released {
            return None;
        }
        let draft = self.pointer_up();
        if accepting_presses {
            draft
        } else {
            if draft.is_some() {
                log::debug!("drag released under an overlay; discarded");
            }
            None
        }
    }

    /// Drop any session without producing a draft (used when leaving the calendar).
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }

    pub fn preview(&self) -> Option<DragPreview> {
        let DragState::Dragging(session) = &self.state else {
            return None;
        };

        let (low, high) = session.span();
        let top = self.window.pixel_top(low);
        let bottom = self.window.pixel_top(high);
        Some(DragPreview {
            day: session.day,
            top,
            height: (bottom - top).max(self.min_preview_height),
            start_minute: low,
            end_minute: high,
        })
    }
}
