// Pointer normalization, smoothing and the stage tilt it drives.

use floor_core::depth::{compose_stage, map_range, Layer, StageTransform};
use floor_core::pointer::{PointerSignal, PointerTracker};

#[test]
fn signal_stays_in_half_unit_range_inside_viewport() {
    let (w, h) = (1280.0, 720.0);
    for i in 0..=20 {
        for j in 0..=20 {
            let s = PointerSignal::from_client(w * i as f32 / 20.0, h * j as f32 / 20.0, w, h);
            assert!((-0.5..=0.5).contains(&s.x));
            assert!((-0.5..=0.5).contains(&s.y));
        }
    }
    let centre = PointerSignal::from_client(640.0, 360.0, w, h);
    assert_eq!(centre, PointerSignal::CENTER);
}

#[test]
fn zero_viewport_maps_to_centre() {
    let s = PointerSignal::from_client(10.0, 10.0, 0.0, 0.0);
    assert_eq!(s, PointerSignal::CENTER);
}

#[test]
fn tracker_is_idle_until_moved_then_converges() {
    let mut t = PointerTracker::default();
    assert!(t.is_at_rest());
    t.on_move(1280.0, 0.0, 1280.0, 720.0);
    assert_eq!(t.raw(), PointerSignal { x: 0.5, y: -0.5 });
    t.step(1.0 / 60.0);
    let early = t.smoothed();
    assert!(early.x > 0.0 && early.x < 0.5);
    for _ in 0..600 {
        t.step(1.0 / 60.0);
    }
    assert!(t.is_at_rest());
    let s = t.smoothed();
    assert!((s.x - 0.5).abs() < 1e-3);
    assert!((s.y + 0.5).abs() < 1e-3);
}

#[test]
fn stage_tilt_follows_pointer() {
    let centre = StageTransform::default();
    assert!((centre.rotate_x_deg - 40.0).abs() < 1e-4);
    assert!(centre.rotate_y_deg.abs() < 1e-4);
    assert!(centre.translate_x_pct.abs() < 1e-4);

    let top_left = compose_stage(PointerSignal { x: -0.5, y: -0.5 });
    assert_eq!(top_left.rotate_x_deg, 45.0);
    assert_eq!(top_left.rotate_y_deg, -5.0);
    assert_eq!(top_left.translate_x_pct, -2.0);

    let bottom_right = compose_stage(PointerSignal { x: 0.5, y: 0.5 });
    assert_eq!(bottom_right.rotate_x_deg, 35.0);
    assert_eq!(bottom_right.rotate_y_deg, 5.0);
    assert_eq!(bottom_right.translate_x_pct, 2.0);
}

#[test]
fn map_range_clamps_to_output() {
    assert_eq!(map_range(2.0, (-0.5, 0.5), (45.0, 35.0)), 35.0);
    assert_eq!(map_range(-2.0, (-0.5, 0.5), (45.0, 35.0)), 45.0);
    assert_eq!(map_range(0.3, (1.0, 1.0), (7.0, 9.0)), 7.0);
}

#[test]
fn layers_are_strictly_ordered_far_to_near() {
    let depths: Vec<f32> = Layer::ALL.iter().map(|l| l.depth_px()).collect();
    assert_eq!(depths, vec![-300.0, -90.0, -50.0, 100.0]);
    assert!(depths.windows(2).all(|w| w[0] < w[1]));
}
