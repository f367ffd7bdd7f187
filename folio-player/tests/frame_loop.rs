//! Frame loop behaviour on tokio's paused clock.

use std::time::Duration;

use folio_core::{CarouselConfig, DragOutcome, NavKey, WrapMode};
use folio_player::{CarouselHandle, DEFAULT_FRAME_INTERVAL};
use tokio::time::sleep;

fn theater() -> CarouselHandle {
    CarouselHandle::new(
        CarouselConfig::theater_defaults(6, 300.0),
        DEFAULT_FRAME_INTERVAL,
    )
    .expect("valid config")
}

#[tokio::test(start_paused = true)]
async fn idle_drift_runs_on_a_single_task() {
    let handle = theater();
    handle.start();
    // Rescheduling must replace the first task, not add a second one.
    handle.start();
    assert!(handle.scheduler().is_running());

    sleep(Duration::from_millis(160)).await;

    // About eleven frames of 0.5 px; two live loops would double this.
    let offset = handle.scroll_offset();
    assert!(offset > 4.0 && offset < 7.0, "offset {offset}");
    let frames = handle.scheduler().frames_ticked();
    assert!((9..=13).contains(&frames), "frames {frames}");
}

#[tokio::test(start_paused = true)]
async fn hover_stops_the_loop() {
    let handle = theater();
    handle.start();
    sleep(Duration::from_millis(50)).await;
    handle.set_hovered(true);
    assert!(!handle.scheduler().is_running());

    let parked = handle.scroll_offset();
    sleep(Duration::from_millis(500)).await;
    assert_eq!(handle.scroll_offset(), parked);
}

#[tokio::test(start_paused = true)]
async fn fling_coasts_and_then_releases_the_loop() {
    let handle = theater();
    handle.set_hovered(true);

    handle.pointer_down(0.0);
    handle.pointer_move(20.0);
    handle.pointer_move(40.0);
    assert!(handle.with_motion(|motion| motion.is_dragging()));
    assert_eq!(handle.pointer_up(), DragOutcome::Fling { velocity: 20.0 });

    handle.scheduler().settled().await;

    let offset = handle.scroll_offset();
    // Coasting adds at most velocity / (1 - friction) on top of the drag.
    assert!(offset > 40.0 && offset <= 40.0 + 400.0 + 1e-2, "offset {offset}");
    assert!(!handle.scheduler().is_running());
    assert!(handle.scheduler().frames_ticked() > 10);
}

#[tokio::test(start_paused = true)]
async fn snap_lands_on_the_requested_card() {
    let handle = theater();
    handle.set_hovered(true);
    handle.scroll_to_index(3);

    sleep(Duration::from_millis(300)).await;
    let midway = handle.scroll_offset();
    assert!(midway > 0.0 && midway < 900.0, "midway {midway}");

    handle.scheduler().settled().await;
    assert_eq!(handle.scroll_offset(), 900.0);
    assert_eq!(handle.center_index(), Some(3));
}

#[tokio::test(start_paused = true)]
async fn press_cancels_a_running_snap() {
    let handle = theater();
    handle.set_hovered(true);
    handle.scroll_to_index(2);
    sleep(Duration::from_millis(100)).await;

    handle.pointer_down(500.0);
    assert!(!handle.scheduler().is_running());
    let frozen = handle.scroll_offset();
    sleep(Duration::from_millis(400)).await;
    assert_eq!(handle.scroll_offset(), frozen);

    // A press that never moves is a click and starts nothing.
    assert_eq!(handle.pointer_up(), DragOutcome::Click);
    assert!(!handle.scheduler().is_running());
}

#[tokio::test(start_paused = true)]
async fn keys_go_to_the_preview_when_open() {
    let handle = theater();
    handle.set_hovered(true);

    assert!(!handle.handle_key(NavKey::Escape));
    assert!(handle.handle_key(NavKey::ArrowRight));
    handle.scheduler().settled().await;
    assert_eq!(handle.center_index(), Some(1));

    handle.open_preview(5);
    assert!(handle.handle_key(NavKey::ArrowRight));
    assert_eq!(handle.preview_selected(), Some(0));
    // The carousel did not move while the preview had focus.
    assert!(!handle.scheduler().is_running());
    assert_eq!(handle.center_index(), Some(1));

    assert!(handle.handle_key(NavKey::Escape));
    assert_eq!(handle.preview_selected(), None);
}

#[tokio::test(start_paused = true)]
async fn clamped_track_drifts_to_its_bound_and_stops() {
    let handle = CarouselHandle::new(
        CarouselConfig::arc_defaults(3, 200.0),
        DEFAULT_FRAME_INTERVAL,
    )
    .expect("valid config");
    assert_eq!(
        handle.with_motion(|motion| motion.config().wrap_mode),
        WrapMode::Clamped
    );
    handle.jump_to(195.0);
    handle.scheduler().settled().await;
    assert_eq!(handle.scroll_offset(), 200.0);
    assert!(!handle.scheduler().is_running());
}

#[tokio::test(start_paused = true)]
async fn shrinking_the_list_reclamps_and_closes_stale_previews() {
    let handle = CarouselHandle::new(
        CarouselConfig::arc_defaults(6, 300.0),
        DEFAULT_FRAME_INTERVAL,
    )
    .expect("valid config");
    handle.set_hovered(true);
    handle.jump_to(750.0);
    handle.open_preview(5);

    handle.set_item_count(2);
    assert_eq!(handle.scroll_offset(), 150.0);
    assert_eq!(handle.preview_selected(), None);
    assert_eq!(handle.card_transforms().len(), 2);
}
