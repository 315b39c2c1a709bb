// Section scroll progress, parallax mapping and the marquee band.

use floor_core::marquee::{Marquee, MarqueeDirection};
use floor_core::scroll::{intersects_viewport, map_scroll, scroll_progress, ScrollProgressMapper};

const VH: f32 = 800.0;
const HEIGHT: f32 = 5.5 * VH;

#[test]
fn progress_runs_from_zero_to_one_and_clamps() {
    assert_eq!(scroll_progress(0.0, HEIGHT, VH), 0.0);
    assert_eq!(scroll_progress(400.0, HEIGHT, VH), 0.0);
    assert_eq!(scroll_progress(-(HEIGHT - VH), HEIGHT, VH), 1.0);
    assert_eq!(scroll_progress(-10.0 * HEIGHT, HEIGHT, VH), 1.0);
    let half = scroll_progress(-(HEIGHT - VH) / 2.0, HEIGHT, VH);
    assert!((half - 0.5).abs() < 1e-6);
}

#[test]
fn progress_is_monotone_in_scroll_position() {
    let mut prev = 0.0;
    for i in 0..=100 {
        let top = -(HEIGHT - VH) * i as f32 / 100.0;
        let p = scroll_progress(top, HEIGHT, VH);
        assert!(p >= prev);
        prev = p;
    }
}

#[test]
fn degenerate_geometry_reports_zero() {
    assert_eq!(scroll_progress(-50.0, VH, VH), 0.0);
    assert_eq!(scroll_progress(-50.0, 100.0, VH), 0.0);
    assert_eq!(scroll_progress(f32::NAN, HEIGHT, VH), 0.0);
}

#[test]
fn floor_and_marquee_translate_with_progress() {
    let start = map_scroll(0.0);
    assert_eq!(start.floor_y_pct, -10.0);
    let end = map_scroll(1.0);
    assert_eq!(end.floor_y_pct, -280.0);
    assert!((end.marquee_y_pct - end.floor_y_pct * 0.35).abs() < 1e-4);
    assert!(end.marquee_y_pct > end.floor_y_pct);
}

#[test]
fn mapper_keeps_last_progress() {
    let mut m = ScrollProgressMapper::default();
    assert_eq!(m.progress(), 0.0);
    let p = m.on_scroll(-(HEIGHT - VH), HEIGHT, VH);
    assert_eq!(p, 1.0);
    assert_eq!(m.mapping().floor_y_pct, -280.0);
}

#[test]
fn viewport_intersection_excludes_touching_edges() {
    assert!(intersects_viewport(10.0, 200.0, VH));
    assert!(intersects_viewport(-100.0, 1.0, VH));
    assert!(!intersects_viewport(-100.0, 0.0, VH));
    assert!(!intersects_viewport(VH, VH + 100.0, VH));
}

#[test]
fn marquee_drifts_left_and_wraps() {
    let mut m = Marquee::new(MarqueeDirection::Left);
    assert_eq!(m.offset_pct(), 0.0);
    m.step(25.0);
    assert!((m.offset_pct() + 25.0).abs() < 1e-3);
    m.step(25.0);
    assert!(m.offset_pct().abs() < 1e-3);
    m.step(-3.0);
    assert!(m.offset_pct().abs() < 1e-3);
}

#[test]
fn marquee_right_starts_at_full_travel() {
    let m = Marquee::new(MarqueeDirection::Right);
    assert_eq!(m.offset_pct(), -50.0);
}

#[test]
fn marquee_track_repeats_phrase() {
    let items = Marquee::track_items("PROJECTS");
    assert_eq!(items.len(), 6);
    assert!(items.iter().all(|s| s == "PROJECTS"));
}
