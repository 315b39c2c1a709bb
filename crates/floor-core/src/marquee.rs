use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarqueeDirection {
    Left,
    Right,
}

/// Endless linear drift of the background text band.
#[derive(Clone, Debug)]
pub struct Marquee {
    direction: MarqueeDirection,
    elapsed: f32,
}

impl Marquee {
    pub fn new(direction: MarqueeDirection) -> Self {
        Self {
            direction,
            elapsed: 0.0,
        }
    }

    pub fn step(&mut self, dt: f32) {
        if dt > 0.0 {
            self.elapsed = (self.elapsed + dt) % MARQUEE_LOOP_SECS;
        }
    }

    /// Horizontal offset of the track, in percent of its own width.
    pub fn offset_pct(&self) -> f32 {
        let t = self.elapsed / MARQUEE_LOOP_SECS;
        match self.direction {
            MarqueeDirection::Left => MARQUEE_TRAVEL_PCT * t,
            MarqueeDirection::Right => MARQUEE_TRAVEL_PCT * (1.0 - t),
        }
    }

    /// Items of the track; the phrase repeated enough to cover the loop.
    pub fn track_items(text: &str) -> Vec<String> {
        vec![text.to_string(); MARQUEE_REPEAT]
    }
}
