// Springs and tweens shared by every animated element.

use floor_core::constants::{
    CARD_SPRING, MODAL_SPRING, POINTER_SPRING, PREVIEW_SPRING, TOOL_ICON_SPRING,
};
use floor_core::easing::{Easing, Tween};
use floor_core::spring::{Spring, SpringConfig};

fn run(spring: &mut Spring, seconds: f32) {
    let frames = (seconds * 60.0).ceil() as usize;
    for _ in 0..frames {
        spring.step(1.0 / 60.0);
    }
}

#[test]
fn spring_settles_on_target() {
    for config in [POINTER_SPRING, CARD_SPRING, PREVIEW_SPRING, MODAL_SPRING] {
        let mut s = Spring::from_to(config, 0.0, 100.0);
        run(&mut s, 20.0);
        assert!(s.is_settled(), "{config:?} did not settle");
        assert_eq!(s.value(), 100.0);
        assert_eq!(s.velocity(), 0.0);
    }
}

#[test]
fn modal_spring_is_critically_damped_and_never_overshoots() {
    assert!((MODAL_SPRING.damping_ratio() - 1.0).abs() < 1e-3);
    assert!(!MODAL_SPRING.is_underdamped());
    let mut s = Spring::from_to(MODAL_SPRING, 110.0, 0.0);
    for _ in 0..240 {
        s.step(1.0 / 60.0);
        assert!(s.value() >= -1e-3, "overshot to {}", s.value());
    }
}

#[test]
fn tool_icon_spring_is_bouncy() {
    assert!(TOOL_ICON_SPRING.is_underdamped());
    let mut s = Spring::from_to(TOOL_ICON_SPRING, 0.0, 1.0);
    let mut peak = 0.0_f32;
    for _ in 0..120 {
        s.step(1.0 / 60.0);
        peak = peak.max(s.value());
    }
    assert!(peak > 1.0);
}

#[test]
fn spring_survives_long_and_bad_frames() {
    let mut s = Spring::from_to(PREVIEW_SPRING, 0.0, 50.0);
    s.step(1.0);
    assert!(s.value().is_finite());
    let before = s.value();
    s.step(f32::NAN);
    s.step(-1.0);
    assert_eq!(s.value(), before);
}

#[test]
fn jump_to_rests_immediately() {
    let mut s = Spring::from_to(SpringConfig::new(100.0, 10.0, 1.0), 0.0, 1.0);
    s.jump_to(3.0);
    assert!(s.is_settled());
    s.step(0.016);
    assert_eq!(s.value(), 3.0);
}

#[test]
fn easing_curves_hit_their_endpoints() {
    for e in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
        assert!(e.apply(0.0).abs() < 1e-4);
        assert!((e.apply(1.0) - 1.0).abs() < 1e-4);
    }
    assert!(Easing::EaseIn.apply(0.5) < 0.5);
    assert!(Easing::EaseOut.apply(0.5) > 0.5);
    assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-3);
}

#[test]
fn ease_in_out_is_monotone() {
    let mut prev = 0.0;
    for i in 0..=100 {
        let v = Easing::EaseInOut.apply(i as f32 / 100.0);
        assert!(v + 1e-5 >= prev);
        prev = v;
    }
}

#[test]
fn tween_waits_for_its_delay() {
    let mut t = Tween::new(-100.0, 0.0, 0.6, Easing::EaseOut).with_delay(0.1);
    t.step(0.05);
    assert_eq!(t.value(), -100.0);
    t.step(0.05 + 0.3);
    assert!(t.value() > -100.0 && t.value() < 0.0);
    t.step(1.0);
    assert!(t.is_finished());
    assert_eq!(t.value(), 0.0);
}

#[test]
fn tween_retarget_continues_from_current_value() {
    let mut t = Tween::new(0.0, 1.0, 0.8, Easing::Linear);
    t.step(0.4);
    let mid = t.value();
    t.retarget(0.0);
    assert!((t.value() - mid).abs() < 1e-6);
    assert!(!t.is_finished());
    t.step(0.8);
    assert_eq!(t.value(), 0.0);
}
