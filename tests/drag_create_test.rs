// Drag-to-create: pixel snapping and the draft produced on release

mod fixtures;

use chrono::NaiveTime;
use clinic_desk::services::settings::parse_settings;
use clinic_desk::ui_egui::drag::{
    ColumnGeometry, DragCreate, DragState, PointerFrame, CLICK_SLOT_MINUTES,
};
use clinic_desk::utils::time_grid::{
    minutes_to_pixel_top, minutes_to_time, pixel_to_minutes, time_to_minutes, TimeWindow,
    SNAP_MINUTES,
};
use fixtures::{reference_day, time};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// 08:00-20:00 at one pixel per minute, unscrolled, grid top at y = 0.
fn drag() -> DragCreate {
    DragCreate::new(TimeWindow::new(8, 20, 60.0), 12.0)
}

fn y_for(minutes: i32) -> f32 {
    (minutes - 8 * 60) as f32
}

proptest! {
    #[test]
    fn prop_pixel_to_minutes_is_quarter_hour(
        y in -500.0f32..2000.0,
        scroll in 0.0f32..600.0,
        offset in 0.0f32..300.0,
        pph in 20.0f32..200.0,
        start_hour in 0u32..12,
    ) {
        let minutes = pixel_to_minutes(y, scroll, offset, pph, start_hour);
        prop_assert_eq!(minutes.rem_euclid(SNAP_MINUTES), 0);
    }

    #[test]
    fn prop_round_trip_within_one_step(
        minutes in 480i32..1200,
        scroll in 0.0f32..400.0,
        offset in 0.0f32..200.0,
    ) {
        let top = minutes_to_pixel_top(minutes, 8, 60.0);
        let y = top + offset - scroll;
        let back = pixel_to_minutes(y, scroll, offset, 60.0, 8);
        prop_assert!((back - minutes).abs() <= SNAP_MINUTES / 2 + 1);
    }

    #[test]
    fn prop_short_drag_commits_default_slot(
        quarter in 32i32..=76,
        jitter in -7.0f32..7.0,
    ) {
        let start = quarter * SNAP_MINUTES;
        let mut session = drag();
        session.pointer_down(reference_day(), y_for(start), ColumnGeometry::default());
        session.pointer_move(y_for(start) + jitter);
        let draft = session.pointer_up().unwrap();

        prop_assert_eq!(time_to_minutes(draft.start_time), start);
        prop_assert_eq!(draft.duration_minutes(), 30);
    }

    #[test]
    fn prop_long_drag_commits_span(
        from in 32i32..=76,
        to in 32i32..=80,
    ) {
        prop_assume!(from != to);
        let (start, end) = (from * SNAP_MINUTES, to * SNAP_MINUTES);
        let mut session = drag();
        session.pointer_down(reference_day(), y_for(start), ColumnGeometry::default());
        session.pointer_move(y_for(end));
        let draft = session.pointer_up().unwrap();

        prop_assert_eq!(draft.start_time, minutes_to_time(start.min(end)));
        prop_assert_eq!(draft.end_time, minutes_to_time(start.max(end)));
        prop_assert!(!session.is_dragging());
    }
}

#[test]
fn test_pointer_at_nine_oh_seven_snaps_to_nine() {
    assert_eq!(pixel_to_minutes(y_for(547), 0.0, 0.0, 60.0, 8), 540);
}

#[test]
fn test_scrolled_column_uses_offsets() {
    // Container top at y=100 scrolled by 120px: y=160 is 180px into the grid.
    let column = ColumnGeometry {
        top_offset: 100.0,
        scroll_top: 120.0,
    };
    let mut session = drag();
    session.pointer_down(reference_day(), 160.0, column);
    session.pointer_move(250.0);
    let draft = session.pointer_up().unwrap();

    assert_eq!(draft.start_time, time(11, 0));
    assert_eq!(draft.end_time, time(12, 30));
}

#[test]
fn test_upward_drag_is_normalised() {
    let mut session = drag();
    session.pointer_down(reference_day(), y_for(14 * 60), ColumnGeometry::default());
    session.pointer_move(y_for(12 * 60 + 45));
    let preview = session.preview().unwrap();
    assert_eq!(preview.start_minute, 765);
    assert_eq!(preview.end_minute, 840);

    let draft = session.pointer_up().unwrap();
    assert_eq!(draft.start_time, time(12, 45));
    assert_eq!(draft.end_time, time(14, 0));
}

#[test]
fn test_release_without_press_is_ignored() {
    let mut session = drag();
    session.pointer_move(200.0);
    assert!(session.pointer_up().is_none());
}

#[test]
fn test_reset_drops_session() {
    let mut session = drag();
    session.pointer_down(reference_day(), 60.0, ColumnGeometry::default());
    session.reset();
    assert!(session.pointer_up().is_none());
}

#[test]
fn test_drag_past_window_end_clamps() {
    let mut session = drag();
    session.pointer_down(reference_day(), y_for(19 * 60), ColumnGeometry::default());
    session.pointer_move(5000.0);
    let draft = session.pointer_up().unwrap();
    assert_eq!(draft.start_time, time(19, 0));
    assert_eq!(draft.end_time, NaiveTime::from_hms_opt(20, 0, 0).unwrap());
}

#[test]
fn test_click_slot_is_half_hour_whatever_the_config() {
    let settings = parse_settings("default_slot_minutes = 45\npixels_per_hour = 120.0").unwrap();
    let mut session = DragCreate::new(
        TimeWindow::from_settings(&settings),
        settings.min_preview_height,
    );
    session.pointer_down(reference_day(), 240.0, ColumnGeometry::default());
    let draft = session.pointer_up().unwrap();

    assert_eq!(CLICK_SLOT_MINUTES, 30);
    assert_eq!(draft.start_time, time(10, 0));
    assert_eq!(draft.end_time, time(10, 30));
}

#[test]
fn test_gesture_ends_even_when_released_under_overlay() {
    let mut session = drag();
    let press = PointerFrame {
        press: Some((reference_day(), y_for(9 * 60), ColumnGeometry::default())),
        latest_y: Some(y_for(9 * 60)),
        released: false,
    };
    assert!(session.apply_frame(press, true).is_none());

    let release = PointerFrame {
        latest_y: Some(y_for(11 * 60)),
        released: true,
        ..PointerFrame::default()
    };
    assert!(session.apply_frame(release, false).is_none());
    assert_eq!(session.state(), &DragState::Idle);

    let next_day = reference_day().succ_opt().unwrap();
    let click = PointerFrame {
        press: Some((next_day, y_for(15 * 60), ColumnGeometry::default())),
        latest_y: Some(y_for(15 * 60)),
        released: true,
    };
    let draft = session.apply_frame(click, true).unwrap();
    assert_eq!(draft.date, next_day);
    assert_eq!(draft.start_time, time(15, 0));
    assert_eq!(draft.end_time, time(15, 30));
}
