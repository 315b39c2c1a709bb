// Host-side tests for the CSS builders.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/style.rs"]
mod style;

use floor_core::depth::{compose_stage, Layer, StageTransform};
use floor_core::layout::{CardVisual, DEFAULT_CARD_POSITIONS};
use floor_core::modal::ModalAnimator;
use floor_core::pointer::PointerSignal;
use floor_core::preview::PreviewVisual;
use style::*;

fn preview(blur_px: f32) -> PreviewVisual {
    PreviewVisual {
        x_px: 0.0,
        y_px: 0.0,
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        rotate_z_deg: 2.0,
        opacity: 1.0,
        scale: 1.0,
        blur_px,
    }
}

#[test]
fn rgba_clamps_channels() {
    assert_eq!(rgba([1.0, 0.0, 0.5, 0.95]), "rgba(255,0,128,0.950)");
    assert_eq!(rgba([2.0, -1.0, 0.0, 3.0]), "rgba(255,0,0,1.000)");
}

#[test]
fn stage_and_layers() {
    assert_eq!(
        stage_transform(&StageTransform::default()),
        "rotateX(40.000deg) rotateY(0.000deg) translateX(0.000%)"
    );
    let tilted = stage_transform(&compose_stage(PointerSignal { x: 0.5, y: -0.5 }));
    assert!(tilted.starts_with("rotateX(45.000deg) rotateY(5.000deg)"));
    assert_eq!(
        layer_transform(Layer::Floor, -10.0),
        "translateZ(-300px) translateY(-10.000%)"
    );
    assert!(layer_transform(Layer::Preview, 0.0).starts_with("translateZ(100px)"));
    assert_eq!(marquee_track_transform(-25.0), "rotate(-10deg) translateX(-25.000%)");
}

#[test]
fn card_styles() {
    assert_eq!(
        card_placement(&DEFAULT_CARD_POSITIONS[0]),
        "top:-2%;left:5%;z-index:1;"
    );
    let v = CardVisual {
        x_px: -300.0,
        y_px: 0.0,
        scale: 1.0,
        opacity: 0.0,
        rotate_deg: 5.0,
    };
    assert_eq!(
        card_transform(&v),
        "translate3d(-300.00px,0.00px,0) rotate(5.000deg) scale(1.0000)"
    );
}

#[test]
fn preview_blur_only_while_exiting() {
    assert_eq!(preview_filter(&preview(0.0)), "none");
    assert_eq!(preview_filter(&preview(4.5)), "blur(4.50px)");
    assert!(preview_transform(&preview(0.0)).starts_with("translateZ(100px)"));
    assert!(preview_transform(&preview(0.0)).contains("rotateZ(2.000deg)"));
}

#[test]
fn glow_uses_project_colour() {
    let g = glow_background("#FF7F27", 10.0, 20.0, 260.0);
    assert_eq!(
        g,
        "radial-gradient(circle 260px at 10.0px 20.0px, #FF7F2755, transparent 70%)"
    );
}

#[test]
fn glow_point_is_relative_to_panel_box() {
    // Pointer over a child near the panel's far corner still maps to panel space.
    let (x, y) = local_point(1630.0, 520.0, 900.0, 270.0);
    assert_eq!((x, y), (730.0, 250.0));
    assert_eq!(
        glow_background("#2E86DE", x, y, 260.0),
        "radial-gradient(circle 260px at 730.0px 250.0px, #2E86DE55, transparent 70%)"
    );
    assert_eq!(local_point(10.0, 10.0, 10.0, 10.0), (0.0, 0.0));
}

#[test]
fn modal_styles_follow_animator() {
    let v = ModalAnimator::opening().visual();
    assert_eq!(modal_transform(&v), "translateY(110.000%) scale(0.9500)");
    assert_eq!(backdrop_style(&v), "background:rgba(255,255,255,0.000);opacity:0.0000;");
}
