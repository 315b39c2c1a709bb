//! Hover preview panel: seeded entrance pose, spring settle, timed exit,
//! and the staggered tool icons inside it.

use crate::catalog::{Project, ProjectId};
use crate::constants::*;
use crate::easing::{Easing, Tween};
use crate::spring::Spring;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

/// Off-screen start pose, derived from the project id so it is stable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewEntrance {
    pub x_px: f32,
    pub y_px: f32,
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub rotate_z_start_deg: f32,
    pub rotate_z_rest_deg: f32,
}

impl PreviewEntrance {
    pub fn for_project(id: ProjectId) -> Self {
        let seed = id.0 as i64;
        Self {
            x_px: (600 + (seed * 17) % 300) as f32,
            y_px: (((seed * 37) % 240) - 120) as f32,
            rotate_x_deg: (((seed * 23) % 40) - 20) as f32,
            rotate_y_deg: (-30 + (seed * 7) % 15) as f32,
            rotate_z_start_deg: (((seed * 13) % 60) - 30) as f32,
            rotate_z_rest_deg: (((seed * 7) % 10) - 5) as f32,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewVisual {
    pub x_px: f32,
    pub y_px: f32,
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub rotate_z_deg: f32,
    pub opacity: f32,
    pub scale: f32,
    pub blur_px: f32,
}

impl PreviewVisual {
    fn lerp(&self, other: &PreviewVisual, t: f32) -> PreviewVisual {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        PreviewVisual {
            x_px: mix(self.x_px, other.x_px),
            y_px: mix(self.y_px, other.y_px),
            rotate_x_deg: mix(self.rotate_x_deg, other.rotate_x_deg),
            rotate_y_deg: mix(self.rotate_y_deg, other.rotate_y_deg),
            rotate_z_deg: mix(self.rotate_z_deg, other.rotate_z_deg),
            opacity: mix(self.opacity, other.opacity),
            scale: mix(self.scale, other.scale),
            blur_px: mix(self.blur_px, other.blur_px),
        }
    }
}

/// Slot of the `index`-th tool icon, as (top %, right %) of the panel.
pub fn tool_icon_slot(index: usize) -> (f32, f32) {
    (
        80.0 + (index % 2) as f32 * 20.0,
        10.0 + index as f32 * 15.0,
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToolIconVisual {
    pub top_pct: f32,
    pub right_pct: f32,
    pub scale: f32,
    pub y_px: f32,
    pub rotate_deg: f32,
}

#[derive(Clone, Debug)]
struct ToolIconAnimator {
    slot: (f32, f32),
    delay_left: f32,
    scale: Spring,
    y: Spring,
    rotate: Spring,
}

impl ToolIconAnimator {
    fn new(project: ProjectId, index: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(((project.0 as u64) << 8) | index as u64);
        let jitter = TOOL_ICON_ROTATE_JITTER_DEG;
        let fine = TOOL_ICON_SPRING.with_rest(0.001, 0.001);
        Self {
            slot: tool_icon_slot(index),
            delay_left: TOOL_ICON_BASE_DELAY_SECS + index as f32 * TOOL_ICON_STAGGER_SECS,
            scale: Spring::from_to(fine, 0.0, 1.0),
            y: Spring::from_to(TOOL_ICON_SPRING, TOOL_ICON_ENTRANCE_Y_PX, 0.0),
            rotate: Spring::from_to(
                TOOL_ICON_SPRING,
                TOOL_ICON_ENTRANCE_ROTATE_DEG,
                rng.gen_range(-jitter..jitter),
            ),
        }
    }

    fn step(&mut self, dt: f32) {
        let mut dt = dt;
        if self.delay_left > 0.0 {
            let used = dt.min(self.delay_left);
            self.delay_left -= used;
            dt -= used;
        }
        if dt > 0.0 {
            self.scale.step(dt);
            self.y.step(dt);
            self.rotate.step(dt);
        }
    }

    fn visual(&self) -> ToolIconVisual {
        ToolIconVisual {
            top_pct: self.slot.0,
            right_pct: self.slot.1,
            scale: self.scale.value().max(0.0),
            y_px: self.y.value(),
            rotate_deg: self.rotate.value(),
        }
    }
}

#[derive(Clone, Debug)]
struct ExitTween {
    from: PreviewVisual,
    progress: Tween,
}

/// Animation state of the mounted preview panel.
#[derive(Clone, Debug)]
pub struct PreviewAnimator {
    project: ProjectId,
    x: Spring,
    y: Spring,
    rotate_x: Spring,
    rotate_y: Spring,
    rotate_z: Spring,
    opacity: Spring,
    scale: Spring,
    exit: Option<ExitTween>,
    tools: Vec<ToolIconAnimator>,
}

impl PreviewAnimator {
    pub fn enter(project: &Project) -> Self {
        let start = PreviewEntrance::for_project(project.id);
        let fine = PREVIEW_SPRING.with_rest(0.001, 0.001);
        Self {
            project: project.id,
            x: Spring::from_to(PREVIEW_SPRING, start.x_px, 0.0),
            y: Spring::from_to(PREVIEW_SPRING, start.y_px, 0.0),
            rotate_x: Spring::from_to(PREVIEW_SPRING, start.rotate_x_deg, 0.0),
            rotate_y: Spring::from_to(PREVIEW_SPRING, start.rotate_y_deg, 0.0),
            rotate_z: Spring::from_to(
                PREVIEW_SPRING,
                start.rotate_z_start_deg,
                start.rotate_z_rest_deg,
            ),
            opacity: Spring::from_to(fine, 0.0, 1.0),
            scale: Spring::from_to(fine, PREVIEW_ENTRANCE_SCALE, 1.0),
            exit: None,
            tools: (0..project.tools.len())
                .map(|i| ToolIconAnimator::new(project.id, i))
                .collect(),
        }
    }

    pub fn project(&self) -> ProjectId {
        self.project
    }

    /// Freeze the current pose and fade/slide it out.
    pub fn exit(&mut self) {
        if self.exit.is_some() {
            return;
        }
        self.exit = Some(ExitTween {
            from: self.visual(),
            progress: Tween::new(0.0, 1.0, PREVIEW_EXIT_SECS, Easing::EaseIn),
        });
    }

    /// Cancel a running exit and spring back from wherever it got to.
    pub fn reenter(&mut self) {
        if self.exit.is_none() {
            return;
        }
        let current = self.visual();
        self.exit = None;
        let rest_z = self.rotate_z.target();
        for (spring, value, target) in [
            (&mut self.x, current.x_px, 0.0),
            (&mut self.y, current.y_px, 0.0),
            (&mut self.rotate_x, current.rotate_x_deg, 0.0),
            (&mut self.rotate_y, current.rotate_y_deg, 0.0),
            (&mut self.rotate_z, current.rotate_z_deg, rest_z),
            (&mut self.opacity, current.opacity, 1.0),
            (&mut self.scale, current.scale, 1.0),
        ] {
            spring.jump_to(value);
            spring.set_target(target);
        }
    }

    pub fn is_exiting(&self) -> bool {
        self.exit.is_some()
    }

    pub fn step(&mut self, dt: f32) {
        match &mut self.exit {
            Some(exit) => exit.progress.step(dt),
            None => {
                self.x.step(dt);
                self.y.step(dt);
                self.rotate_x.step(dt);
                self.rotate_y.step(dt);
                self.rotate_z.step(dt);
                self.opacity.step(dt);
                self.scale.step(dt);
            }
        }
        for tool in &mut self.tools {
            tool.step(dt);
        }
    }

    pub fn visual(&self) -> PreviewVisual {
        match &self.exit {
            Some(exit) => {
                let to = PreviewVisual {
                    x_px: PREVIEW_EXIT_X_PX,
                    rotate_y_deg: PREVIEW_EXIT_ROTATE_Y_DEG,
                    opacity: 0.0,
                    scale: PREVIEW_EXIT_SCALE,
                    blur_px: PREVIEW_EXIT_BLUR_PX,
                    ..exit.from
                };
                exit.from.lerp(&to, exit.progress.value())
            }
            None => PreviewVisual {
                x_px: self.x.value(),
                y_px: self.y.value(),
                rotate_x_deg: self.rotate_x.value(),
                rotate_y_deg: self.rotate_y.value(),
                rotate_z_deg: self.rotate_z.value(),
                opacity: self.opacity.value().clamp(0.0, 1.0),
                scale: self.scale.value(),
                blur_px: 0.0,
            },
        }
    }

    pub fn tool_icons(&self) -> SmallVec<[ToolIconVisual; 6]> {
        self.tools.iter().map(ToolIconAnimator::visual).collect()
    }
}
