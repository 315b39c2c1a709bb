//! Scroll progress of the tall section and what it drives.

use crate::constants::{FLOOR_Y_PCT, MARQUEE_PARALLAX};
use crate::depth::map_range;

/// Progress through the container, `start start` → `end end`.
///
/// `rect_top` is the container's top relative to the viewport (negative once
/// scrolled past). Containers no taller than the viewport report 0.
pub fn scroll_progress(rect_top: f32, rect_height: f32, viewport_height: f32) -> f32 {
    let scrollable = rect_height - viewport_height;
    if scrollable <= 0.0 || !rect_top.is_finite() {
        return 0.0;
    }
    (-rect_top / scrollable).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMapping {
    pub progress: f32,
    pub floor_y_pct: f32,
    pub marquee_y_pct: f32,
}

pub fn map_scroll(progress: f32) -> ScrollMapping {
    let floor_y_pct = map_range(progress, (0.0, 1.0), FLOOR_Y_PCT);
    ScrollMapping {
        progress,
        floor_y_pct,
        marquee_y_pct: floor_y_pct * MARQUEE_PARALLAX,
    }
}

/// Whether the span `[top, bottom]` overlaps a viewport of height `viewport_height`.
pub fn intersects_viewport(top: f32, bottom: f32, viewport_height: f32) -> bool {
    bottom > 0.0 && top < viewport_height
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollProgressMapper {
    progress: f32,
}

impl ScrollProgressMapper {
    pub fn on_scroll(&mut self, rect_top: f32, rect_height: f32, viewport_height: f32) -> f32 {
        self.progress = scroll_progress(rect_top, rect_height, viewport_height);
        self.progress
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn mapping(&self) -> ScrollMapping {
        map_scroll(self.progress)
    }
}
