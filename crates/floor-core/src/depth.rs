//! Pointer-driven stage tilt and the fixed depth of each scene layer.

use crate::constants::*;
use crate::pointer::PointerSignal;

/// Linear map of `value` from one range onto another, clamped to the output.
pub fn map_range(value: f32, from: (f32, f32), to: (f32, f32)) -> f32 {
    let span = from.1 - from.0;
    if span.abs() < f32::EPSILON {
        return to.0;
    }
    let t = ((value - from.0) / span).clamp(0.0, 1.0);
    to.0 + (to.1 - to.0) * t
}

/// Transform applied to the shared preserve-3d stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageTransform {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub translate_x_pct: f32,
}

impl Default for StageTransform {
    fn default() -> Self {
        compose_stage(PointerSignal::CENTER)
    }
}

pub fn compose_stage(smoothed: PointerSignal) -> StageTransform {
    StageTransform {
        rotate_x_deg: map_range(smoothed.y, POINTER_DOMAIN, STAGE_ROTATE_X_DEG),
        rotate_y_deg: map_range(smoothed.x, POINTER_DOMAIN, STAGE_ROTATE_Y_DEG),
        translate_x_pct: map_range(smoothed.x, POINTER_DOMAIN, STAGE_TRANSLATE_X_PCT),
    }
}

/// Children of the stage, ordered far to near.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Floor,
    Marquee,
    Cards,
    Preview,
}

impl Layer {
    pub const ALL: [Layer; 4] = [Layer::Floor, Layer::Marquee, Layer::Cards, Layer::Preview];

    pub fn depth_px(self) -> f32 {
        match self {
            Layer::Floor => DEPTH_FLOOR_PX,
            Layer::Marquee => DEPTH_MARQUEE_PX,
            Layer::Cards => DEPTH_CARDS_PX,
            Layer::Preview => DEPTH_PREVIEW_PX,
        }
    }
}
