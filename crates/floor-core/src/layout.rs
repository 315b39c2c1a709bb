//! Card placement table and per-card hover/entrance animation.

use crate::catalog::ProjectId;
use crate::constants::*;
use crate::error::CatalogError;
use crate::hover::HoverState;
use crate::spring::Spring;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Where a card sits on the floor. Percentages are of the floor box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPosition {
    pub top_pct: f32,
    pub left_pct: f32,
    pub rotate_deg: f32,
    pub z_index: u32,
}

impl CardPosition {
    pub const fn new(top_pct: f32, left_pct: f32, rotate_deg: f32, z_index: u32) -> Self {
        Self {
            top_pct,
            left_pct,
            rotate_deg,
            z_index,
        }
    }

    pub fn same_placement(&self, other: &CardPosition) -> bool {
        self.top_pct == other.top_pct
            && self.left_pct == other.left_pct
            && self.rotate_deg == other.rotate_deg
    }
}

pub const DEFAULT_CARD_POSITIONS: [CardPosition; 8] = [
    CardPosition::new(-2.0, 5.0, -15.0, 1),
    CardPosition::new(28.0, 30.0, 12.0, 2),
    CardPosition::new(45.0, 8.0, 5.0, 3),
    CardPosition::new(70.0, 25.0, -8.0, 4),
    CardPosition::new(100.0, 2.0, 20.0, 5),
    CardPosition::new(125.0, 32.0, -12.0, 6),
    CardPosition::new(155.0, 10.0, 8.0, 7),
    CardPosition::new(185.0, 28.0, -5.0, 8),
];

/// Distance between the highest and lowest card, in floor percent.
pub fn vertical_spread(positions: &[CardPosition]) -> f32 {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for p in positions {
        min = min.min(p.top_pct);
        max = max.max(p.top_pct);
    }
    if positions.is_empty() {
        0.0
    } else {
        max - min
    }
}

pub fn validate_positions(positions: &[CardPosition]) -> Result<(), CatalogError> {
    for (i, a) in positions.iter().enumerate() {
        for (j, b) in positions.iter().enumerate().skip(i + 1) {
            if a.same_placement(b) {
                return Err(CatalogError::DuplicatePlacement {
                    first: i,
                    second: j,
                });
            }
        }
    }
    if positions.len() > 1 && vertical_spread(positions) <= 0.0 {
        return Err(CatalogError::FlatLayout);
    }
    Ok(())
}

/// Animated properties of one card, relative to its table placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardVisual {
    pub x_px: f32,
    pub y_px: f32,
    pub scale: f32,
    pub opacity: f32,
    pub rotate_deg: f32,
}

/// Resting visual for a card given the current hover state.
pub fn card_target(position: &CardPosition, hover: HoverState, id: ProjectId) -> CardVisual {
    if hover.is(id) {
        CardVisual {
            x_px: 0.0,
            y_px: CARD_HOVER_LIFT_PX,
            scale: CARD_HOVER_SCALE,
            opacity: 1.0,
            rotate_deg: 0.0,
        }
    } else if hover.is_any() {
        CardVisual {
            x_px: 0.0,
            y_px: 0.0,
            scale: CARD_DIMMED_SCALE,
            opacity: CARD_DIMMED_OPACITY,
            rotate_deg: position.rotate_deg,
        }
    } else {
        CardVisual {
            x_px: 0.0,
            y_px: 0.0,
            scale: 1.0,
            opacity: 1.0,
            rotate_deg: position.rotate_deg,
        }
    }
}

/// Springs for one card. Hidden off to the left until first revealed.
#[derive(Clone, Debug)]
pub struct CardAnimator {
    x: Spring,
    y: Spring,
    scale: Spring,
    opacity: Spring,
    rotate: Spring,
    rest_rotate: f32,
    revealed: bool,
}

impl CardAnimator {
    pub fn new(position: &CardPosition, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let jitter = CARD_ENTRANCE_ROTATE_JITTER_DEG;
        let fine = CARD_SPRING.with_rest(0.001, 0.001);
        Self {
            x: Spring::new(CARD_SPRING, CARD_ENTRANCE_OFFSET_X_PX),
            y: Spring::new(CARD_SPRING, 0.0),
            scale: Spring::new(fine, 1.0),
            opacity: Spring::new(fine, 0.0),
            rotate: Spring::new(CARD_SPRING, rng.gen_range(-jitter..jitter)),
            rest_rotate: position.rotate_deg,
            revealed: false,
        }
    }

    /// Start the one-time entrance. Returns false if already revealed.
    pub fn reveal(&mut self) -> bool {
        if self.revealed {
            return false;
        }
        self.revealed = true;
        self.x.set_target(0.0);
        self.opacity.set_target(1.0);
        self.rotate.set_target(self.rest_rotate);
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn retarget(&mut self, target: &CardVisual) {
        if !self.revealed {
            return;
        }
        self.x.set_target(target.x_px);
        self.y.set_target(target.y_px);
        self.scale.set_target(target.scale);
        self.opacity.set_target(target.opacity);
        self.rotate.set_target(target.rotate_deg);
    }

    pub fn step(&mut self, dt: f32) {
        self.x.step(dt);
        self.y.step(dt);
        self.scale.step(dt);
        self.opacity.step(dt);
        self.rotate.step(dt);
    }

    pub fn visual(&self) -> CardVisual {
        CardVisual {
            x_px: self.x.value(),
            y_px: self.y.value(),
            scale: self.scale.value(),
            opacity: self.opacity.value().clamp(0.0, 1.0),
            rotate_deg: self.rotate.value(),
        }
    }
}
