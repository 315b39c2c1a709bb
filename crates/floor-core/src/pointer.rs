//! Pointer tracking: raw client coordinates to a damped, centred signal.

use crate::constants::POINTER_SPRING;
use crate::spring::Spring;

/// Cursor offset from the viewport centre, each axis in [-0.5, 0.5].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSignal {
    pub x: f32,
    pub y: f32,
}

impl PointerSignal {
    pub const CENTER: PointerSignal = PointerSignal { x: 0.0, y: 0.0 };

    /// Normalize client coordinates against the viewport size.
    ///
    /// A degenerate viewport yields the centre rather than NaN/inf.
    pub fn from_client(client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> Self {
        let x = if viewport_w > 0.0 {
            client_x / viewport_w - 0.5
        } else {
            0.0
        };
        let y = if viewport_h > 0.0 {
            client_y / viewport_h - 0.5
        } else {
            0.0
        };
        Self { x, y }
    }
}

/// Raw signal plus an independent spring per axis.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    raw: PointerSignal,
    x: Spring,
    y: Spring,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self {
            raw: PointerSignal::CENTER,
            x: Spring::new(POINTER_SPRING, 0.0),
            y: Spring::new(POINTER_SPRING, 0.0),
        }
    }
}

impl PointerTracker {
    pub fn on_move(&mut self, client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) {
        self.raw = PointerSignal::from_client(client_x, client_y, viewport_w, viewport_h);
        self.x.set_target(self.raw.x);
        self.y.set_target(self.raw.y);
    }

    pub fn step(&mut self, dt: f32) {
        self.x.step(dt);
        self.y.step(dt);
    }

    pub fn raw(&self) -> PointerSignal {
        self.raw
    }

    pub fn smoothed(&self) -> PointerSignal {
        PointerSignal {
            x: self.x.value(),
            y: self.y.value(),
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }
}
