//! 3D model carousel: wheel accumulation, camera travel and object spin.

use crate::camera::Camera;
use crate::catalog::{parse_hex_color, Geometry, ModelDescriptor};
use crate::constants::*;
use glam::{Quat, Vec3};
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// Running sum of wheel deltas, floored at zero and unbounded above.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelAccumulator {
    value: f32,
}

impl WheelAccumulator {
    pub fn add(&mut self, delta: f32) -> f32 {
        if delta.is_finite() {
            self.value = (self.value + delta).max(0.0);
        }
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectPose {
    pub geometry: Geometry,
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
    pub color: [f32; 4],
}

#[derive(Clone, Debug)]
pub struct CarouselFrame {
    pub camera: Camera,
    pub poses: SmallVec<[ObjectPose; 4]>,
    /// World anchors of the DOM labels, index-aligned with the models.
    pub label_anchors: SmallVec<[Vec3; 4]>,
}

#[derive(Clone, Debug)]
pub struct Carousel {
    models: Vec<ModelDescriptor>,
    wheel: WheelAccumulator,
    camera_x: f32,
    time: f32,
    aspect: f32,
}

impl Carousel {
    pub fn new(models: &[ModelDescriptor]) -> Self {
        Self {
            models: models.to_vec(),
            wheel: WheelAccumulator::default(),
            camera_x: 0.0,
            time: 0.0,
            aspect: 16.0 / 9.0,
        }
    }

    pub fn models(&self) -> &[ModelDescriptor] {
        &self.models
    }

    pub fn on_wheel(&mut self, delta_y: f32) -> f32 {
        self.wheel.add(delta_y)
    }

    pub fn wheel(&self) -> f32 {
        self.wheel.value()
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    pub fn model_x(&self, index: usize) -> f32 {
        index as f32 * CAROUSEL_SPACING
    }

    /// X of the last model; the camera never travels past it.
    pub fn extent(&self) -> f32 {
        self.model_x(self.models.len().saturating_sub(1))
    }

    pub fn camera_target_x(&self) -> f32 {
        (self.wheel.value() * CAROUSEL_WHEEL_TO_WORLD).min(self.extent())
    }

    pub fn camera_x(&self) -> f32 {
        self.camera_x
    }

    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        self.time += dt;
        let alpha = 1.0 - (-dt / CAROUSEL_CAMERA_TAU_SEC).exp();
        self.camera_x += (self.camera_target_x() - self.camera_x) * alpha;
    }

    fn phase(&self, index: usize) -> f32 {
        index as f32 * TAU / self.models.len().max(1) as f32
    }

    /// Yaw of one object: wheel-driven spin plus a slow idle turn.
    pub fn spin(&self, index: usize) -> f32 {
        self.wheel.value() * CAROUSEL_WHEEL_SPIN_RAD
            + self.time * CAROUSEL_IDLE_SPIN_RAD_PER_SEC
            + self.phase(index)
    }

    /// Time-only tilt, independent of the wheel.
    pub fn wobble(&self, index: usize) -> f32 {
        (TAU * CAROUSEL_WOBBLE_HZ * self.time + self.phase(index)).sin()
            * CAROUSEL_WOBBLE_AMPLITUDE_RAD
    }

    pub fn camera(&self) -> Camera {
        Camera {
            eye: Vec3::new(self.camera_x, CAROUSEL_CAMERA_Y, CAROUSEL_CAMERA_Z),
            target: Vec3::new(self.camera_x, 0.0, 0.0),
            up: Vec3::Y,
            aspect: self.aspect,
            fovy_radians: CAROUSEL_FOVY_DEG.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }

    pub fn poses(&self) -> SmallVec<[ObjectPose; 4]> {
        self.models
            .iter()
            .enumerate()
            .map(|(i, model)| {
                let [r, g, b] = parse_hex_color(&model.color).unwrap_or([1.0, 1.0, 1.0]);
                ObjectPose {
                    geometry: model.geometry,
                    position: Vec3::new(self.model_x(i), 0.0, 0.0),
                    rotation: Quat::from_rotation_y(self.spin(i))
                        * Quat::from_rotation_x(self.wobble(i)),
                    scale: model.scale_or_default(),
                    color: [r, g, b, CAROUSEL_MODEL_ALPHA],
                }
            })
            .collect()
    }

    /// Anchor point for each model's DOM label, below the object.
    pub fn label_anchors(&self) -> impl Iterator<Item = (&str, Vec3)> + '_ {
        self.models.iter().enumerate().map(|(i, model)| {
            (
                model.label.as_str(),
                Vec3::new(self.model_x(i), CAROUSEL_LABEL_OFFSET_Y, 0.0),
            )
        })
    }

    pub fn frame(&self) -> CarouselFrame {
        CarouselFrame {
            camera: self.camera(),
            poses: self.poses(),
            label_anchors: self.label_anchors().map(|(_, anchor)| anchor).collect(),
        }
    }
}
