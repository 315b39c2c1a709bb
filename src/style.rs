//! CSS builders for the animated elements.
//!
//! Pure string formatting so it can be tested on the host.

use floor_core::constants::{DEPTH_PREVIEW_PX, MARQUEE_ROTATE_DEG};
use floor_core::depth::{Layer, StageTransform};
use floor_core::gallery::{GalleryOverlay, OverlayVisual};
use floor_core::layout::{CardPosition, CardVisual};
use floor_core::modal::ModalVisual;
use floor_core::preview::{PreviewVisual, ToolIconVisual};

pub fn rgba(c: [f32; 4]) -> String {
    let ch = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("rgba({},{},{},{:.3})", ch(c[0]), ch(c[1]), ch(c[2]), c[3].clamp(0.0, 1.0))
}

pub fn stage_transform(t: &StageTransform) -> String {
    format!(
        "rotateX({:.3}deg) rotateY({:.3}deg) translateX({:.3}%)",
        t.rotate_x_deg, t.rotate_y_deg, t.translate_x_pct
    )
}

pub fn layer_transform(layer: Layer, y_pct: f32) -> String {
    format!("translateZ({}px) translateY({:.3}%)", layer.depth_px(), y_pct)
}

pub fn marquee_track_transform(offset_pct: f32) -> String {
    format!("rotate({}deg) translateX({:.3}%)", MARQUEE_ROTATE_DEG, offset_pct)
}

/// Static placement of a card; the animated part goes in `card_transform`.
pub fn card_placement(position: &CardPosition) -> String {
    format!(
        "top:{}%;left:{}%;z-index:{};",
        position.top_pct, position.left_pct, position.z_index
    )
}

pub fn card_transform(v: &CardVisual) -> String {
    format!(
        "translate3d({:.2}px,{:.2}px,0) rotate({:.3}deg) scale({:.4})",
        v.x_px, v.y_px, v.rotate_deg, v.scale
    )
}

pub fn preview_transform(v: &PreviewVisual) -> String {
    format!(
        "translateZ({}px) translate3d({:.2}px,{:.2}px,0) rotateX({:.3}deg) rotateY({:.3}deg) rotateZ({:.3}deg) scale({:.4})",
        DEPTH_PREVIEW_PX, v.x_px, v.y_px, v.rotate_x_deg, v.rotate_y_deg, v.rotate_z_deg, v.scale
    )
}

pub fn preview_filter(v: &PreviewVisual) -> String {
    if v.blur_px <= 0.0 {
        "none".to_string()
    } else {
        format!("blur({:.2}px)", v.blur_px)
    }
}

/// Pointer position relative to a box whose top-left corner is at
/// `(left, top)` in client coordinates.
pub fn local_point(client_x: f32, client_y: f32, left: f32, top: f32) -> (f32, f32) {
    (client_x - left, client_y - top)
}

/// Radial glow following the pointer inside the preview panel.
pub fn glow_background(color: &str, x_px: f32, y_px: f32, radius_px: f32) -> String {
    format!(
        "radial-gradient(circle {radius_px}px at {x_px:.1}px {y_px:.1}px, {color}55, transparent 70%)"
    )
}

pub fn tool_icon_style(v: &ToolIconVisual, url: &str) -> String {
    format!(
        "top:{}%;right:{}%;transform:translateY({:.2}px) rotate({:.3}deg) scale({:.4});background-image:url('{}');",
        v.top_pct, v.right_pct, v.y_px, v.rotate_deg, v.scale, url
    )
}

pub fn modal_transform(v: &ModalVisual) -> String {
    format!("translateY({:.3}%) scale({:.4})", v.translate_y_pct, v.scale)
}

pub fn backdrop_style(v: &ModalVisual) -> String {
    format!(
        "background:{};opacity:{:.4};",
        rgba(v.backdrop_rgba),
        v.backdrop_opacity
    )
}

/// Fixed placement and font of a gallery overlay.
pub fn overlay_placement(overlay: &GalleryOverlay, v: &OverlayVisual) -> String {
    format!(
        "left:{:.4}%;top:{:.4}vw;font-size:{:.4}vw;font-family:{};font-weight:{};",
        v.left_pct,
        v.top_vw,
        v.font_size_vw,
        overlay.font.family(),
        overlay.font.weight()
    )
}

pub fn overlay_transform(v: &OverlayVisual) -> String {
    format!("translateX({:.2}px)", v.x_px)
}
