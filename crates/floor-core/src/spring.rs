//! Spring physics animation
//!
//! RK4-integrated mass-spring-damper used for every spring-driven value in the
//! section (pointer smoothing, cards, preview panel, modal body). Long frames
//! are split into fixed substeps so a stalled tab cannot blow the simulation up.

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Distance from target under which the spring may come to rest.
    pub rest_delta: f32,
    /// Speed under which the spring may come to rest.
    pub rest_speed: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }

    /// Override the settle thresholds (values in the animated unit).
    pub const fn with_rest(self, rest_delta: f32, rest_speed: f32) -> Self {
        Self {
            rest_delta,
            rest_speed,
            ..self
        }
    }

    /// Damping coefficient at which the spring stops oscillating.
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// `damping / critical_damping`; 1.0 is critical, below 1.0 overshoots.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / self.critical_damping()
    }

    pub fn is_underdamped(&self) -> bool {
        self.damping_ratio() < 1.0 - 1e-3
    }
}

const MAX_SUBSTEP_SEC: f32 = 1.0 / 120.0;
const MAX_SUBSTEPS: u32 = 64;

/// A spring-based animator for a single scalar.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Spring resting at `initial`.
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    /// Spring starting at `from` and already heading for `to`.
    pub fn from_to(config: SpringConfig, from: f32, to: f32) -> Self {
        Self {
            config,
            value: from,
            velocity: 0.0,
            target: to,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Teleport to `value` and rest there.
    pub fn jump_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_speed
    }

    /// Advance the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }
        if dt.is_nan() || dt <= 0.0 {
            return;
        }

        let steps = ((dt / MAX_SUBSTEP_SEC).ceil() as u32).clamp(1, MAX_SUBSTEPS);
        let h = dt / steps as f32;
        for _ in 0..steps {
            self.integrate(h);
        }
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    fn integrate(&mut self, dt: f32) {
        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}
