//! Behavioural properties of the carousel motion engine
//!
//! These exercise the public surface end to end: transforms as a function
//! of the scroll offset, momentum termination, snapping, bounds, and the
//! click-vs-drag split.

use std::time::{Duration, Instant};

use folio_core::motion::{
    CarouselConfig, CarouselMotion, DragOutcome, Easing, Momentum,
    MotionState, WrapMode, card_transform_at, shortest_path_delta,
};

const EPS: f32 = 1e-3;

fn configs() -> Vec<CarouselConfig> {
    let mut out = Vec::new();
    for count in [1usize, 2, 5, 6, 11] {
        for width in [120.0_f32, 220.0, 300.0] {
            out.push(CarouselConfig::theater_defaults(count, width));
            out.push(CarouselConfig::arc_defaults(count, width));
        }
    }
    out
}

#[test]
fn translate_x_moves_one_pixel_per_pixel_of_scroll() {
    for config in configs() {
        for index in 0..config.item_count {
            for base in [-731.0_f32, -10.0, 0.0, 44.5, 390.0] {
                let a = card_transform_at(&config, index, base);
                let b = card_transform_at(&config, index, base + 1.0);
                // Skip the single step where a circular track wraps.
                if (a.translate_x - b.translate_x).abs()
                    > config.track_length() / 2.0
                {
                    continue;
                }
                assert!(
                    (a.translate_x - b.translate_x - 1.0).abs() < EPS,
                    "{config:?} index {index} at {base}"
                );
            }
        }
    }
}

#[test]
fn circular_transforms_repeat_every_lap() {
    for config in configs()
        .into_iter()
        .filter(|c| c.wrap_mode == WrapMode::Circular)
    {
        let lap = config.track_length();
        for index in 0..config.item_count {
            for offset in [-500.0_f32, 0.0, 137.25, 1000.0] {
                let here = card_transform_at(&config, index, offset);
                let there = card_transform_at(&config, index, offset + lap);
                assert!((here.translate_x - there.translate_x).abs() < EPS);
                assert!((here.rotate_y - there.rotate_y).abs() < EPS);
                assert!((here.opacity - there.opacity).abs() < EPS);
                assert_eq!(here.z_index, there.z_index);
                assert_eq!(here.visible, there.visible);
            }
        }
    }
}

#[test]
fn visual_properties_fall_off_with_distance() {
    let config = CarouselConfig::arc_defaults(9, 200.0);
    let center = card_transform_at(&config, 4, 0.0);
    let mut previous = center;
    for index in 5..9 {
        let t = card_transform_at(&config, index, 0.0);
        assert!(t.scale <= previous.scale);
        assert!(t.opacity <= previous.opacity);
        assert!(t.brightness <= previous.brightness);
        assert!(t.blur >= previous.blur);
        assert!(t.translate_z <= previous.translate_z);
        assert!(t.z_index <= previous.z_index);
        assert!(t.scale > 0.0);
        previous = t;
    }
}

#[test]
fn momentum_terminates_for_any_friction_below_one() {
    for friction in [0.1_f32, 0.5, 0.9, 0.92, 0.95, 0.99, 0.999] {
        for v0 in [-80.0_f32, -3.0, 0.6, 12.0, 250.0] {
            let mut momentum = Momentum::new(v0, friction, 0.5);
            let bound = momentum.projected_distance();
            let mut travelled = 0.0_f32;
            let mut frames = 0u32;
            while let Some(dx) = momentum.step() {
                travelled += dx;
                frames += 1;
                assert!(frames < 100_000, "friction {friction} never stopped");
            }
            assert!(travelled.abs() <= bound.abs() + EPS);
            assert!(travelled * v0 >= 0.0);
            assert_eq!(momentum.velocity(), 0.0);
        }
    }
}

#[test]
fn snap_finishes_with_target_centered() {
    for config in configs() {
        let mut motion = CarouselMotion::new(config).unwrap();
        motion.set_hovered(true);
        motion.jump_to(173.0);
        let t0 = Instant::now();
        for index in 0..config.item_count {
            motion.scroll_to_index(index, t0);
            motion.tick(t0 + config.snap_duration);
            assert_eq!(*motion.state(), MotionState::Idle);
            let t = motion.card_transform(index);
            assert!(
                t.translate_x.abs() < EPS,
                "{config:?} index {index} left at {}",
                t.translate_x
            );
        }
    }
}

#[test]
fn clamped_offset_never_leaves_bounds() {
    let config = CarouselConfig::arc_defaults(6, 300.0);
    let bound = 5.0 * 300.0 / 2.0;
    let mut motion = CarouselMotion::new(config).unwrap();
    motion.set_hovered(true);
    let now = Instant::now();

    for target in [10_000.0_f32, -10_000.0, 2_000.0, -900.0] {
        motion.begin_drag(0.0);
        for step in 1..=20 {
            motion.drag_move(target * step as f32 / 20.0);
            assert!(motion.scroll_offset().abs() <= bound + EPS);
        }
        motion.end_drag();
        while motion.needs_frames() {
            motion.tick(now);
            assert!(motion.scroll_offset().abs() <= bound + EPS);
        }
    }

    // Idle drift also respects the bound, and stops asking for frames there.
    motion.set_hovered(false);
    motion.jump_to(bound - 1.0);
    for _ in 0..10 {
        motion.tick(now);
    }
    assert_eq!(motion.scroll_offset(), bound);
    assert!(!motion.needs_frames());
}

#[test]
fn sub_threshold_release_starts_no_momentum() {
    let mut motion =
        CarouselMotion::new(CarouselConfig::theater_defaults(6, 300.0))
            .unwrap();
    motion.set_hovered(true);
    motion.begin_drag(400.0);
    motion.drag_move(410.0);
    motion.drag_move(414.0);
    assert!(!motion.is_dragging());
    assert_eq!(motion.end_drag(), DragOutcome::Click);
    assert_eq!(*motion.state(), MotionState::Idle);
    assert!(!motion.needs_frames());
    assert_eq!(motion.scroll_offset(), 0.0);
}

#[test]
fn slow_release_settles_without_coasting() {
    let mut motion =
        CarouselMotion::new(CarouselConfig::theater_defaults(6, 300.0))
            .unwrap();
    motion.set_hovered(true);
    motion.begin_drag(0.0);
    motion.drag_move(100.0);
    motion.drag_move(100.25);
    assert_eq!(motion.end_drag(), DragOutcome::Settled);
    assert!(!motion.needs_frames());
}

#[test]
fn six_card_quartic_snap_scenario() {
    let mut config = CarouselConfig::theater_defaults(6, 300.0);
    config.snap_duration = Duration::from_millis(600);
    config.snap_easing = Easing::EaseOutQuart;
    let mut motion = CarouselMotion::new(config).unwrap();
    motion.set_hovered(true);

    let target = shortest_path_delta(0.0, 3, 300.0, 6);
    assert_eq!(target, 900.0);

    let t0 = Instant::now();
    motion.scroll_to_index(3, t0);

    motion.tick(t0 + Duration::from_millis(300));
    assert!((motion.scroll_offset() - 0.9375 * target).abs() < EPS);
    assert!(matches!(motion.state(), MotionState::Snap { .. }));

    motion.tick(t0 + Duration::from_millis(600));
    assert_eq!(motion.scroll_offset(), target);
    assert_eq!(*motion.state(), MotionState::Idle);
    assert_eq!(motion.center_index(), Some(3));
}

#[test]
fn invalid_configuration_is_rejected() {
    let mut config = CarouselConfig::theater_defaults(6, 300.0);
    config.friction = 1.2;
    assert!(CarouselMotion::new(config).is_err());
    config.friction = 0.9;
    config.item_width = 0.0;
    assert!(CarouselMotion::new(config).is_err());
}
