//! Damped harmonic oscillator for scroll settling.
//!
//! `F = -stiffness * (position - target) - damping * velocity`, integrated
//! with semi-implicit Euler. Large ticks are subdivided so high stiffness
//! values stay numerically stable. With the default no-bounce damping ratio
//! (1.0, critically damped) the spring converges without overshoot.

/// Maximum integration step, seconds. Larger ticks are subdivided.
const MAX_STEP_SECS: f32 = 0.004;

/// Position delta below which the spring is considered at rest. Well below
/// a visible sub-pixel in index space.
const REST_THRESHOLD: f32 = 0.0005;

/// Velocity magnitude below which (combined with the position threshold)
/// the spring is considered at rest.
const VELOCITY_THRESHOLD: f32 = 0.01;

const MIN_STIFFNESS: f32 = 0.1;

/// Stiffness used for release flings (soft, long glide).
pub const STIFFNESS_FLING: f32 = 80.0;
/// Stiffness used when re-centering ahead of a dismiss.
pub const STIFFNESS_MEDIUM: f32 = 1500.0;
/// Stiffness used when a gesture is cancelled.
pub const STIFFNESS_LOW: f32 = 200.0;

#[derive(Clone, Copy, Debug)]
pub struct Spring {
    position: f32,
    velocity: f32,
    target: f32,
    stiffness: f32,
    damping: f32,
    at_rest: bool,
}

impl Spring {
    /// A critically damped spring from `position` toward `target`.
    pub fn new(position: f32, target: f32) -> Self {
        let stiffness = STIFFNESS_FLING;
        Self {
            position,
            velocity: 0.0,
            target,
            stiffness,
            damping: critical_damping(stiffness),
            at_rest: false,
        }
    }

    /// Sets stiffness, keeping the current damping ratio.
    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        let ratio = self.damping / critical_damping(self.stiffness);
        self.stiffness = stiffness.max(MIN_STIFFNESS);
        self.damping = ratio * critical_damping(self.stiffness);
        self
    }

    /// Damping ratio: 1.0 = critically damped (no bounce), <1 oscillates.
    pub fn with_damping_ratio(mut self, ratio: f32) -> Self {
        self.damping = ratio.max(0.0) * critical_damping(self.stiffness);
        self
    }

    /// Launch velocity in position units per second.
    pub fn with_initial_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Redirects the spring toward a new target, keeping the current
    /// position and velocity so the motion stays continuous.
    pub fn retarget(&mut self, target: f32) {
        self.target = target;
        self.at_rest = false;
    }

    fn step(&mut self, dt: f32) {
        let displacement = self.position - self.target;
        let acceleration = -self.stiffness * displacement - self.damping * self.velocity;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }

    /// Advances the spring by `dt` seconds. Once both position and velocity
    /// fall under their rest thresholds, the position snaps exactly onto the
    /// target and the spring stops for good.
    pub fn advance(&mut self, dt: f32) {
        if self.at_rest || dt <= 0.0 {
            return;
        }

        let mut remaining = dt;
        while remaining > 0.0 {
            let step_dt = remaining.min(MAX_STEP_SECS);
            self.step(step_dt);
            remaining -= step_dt;
        }

        if (self.position - self.target).abs() < REST_THRESHOLD
            && self.velocity.abs() < VELOCITY_THRESHOLD
        {
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }
}

fn critical_damping(stiffness: f32) -> f32 {
    2.0 * stiffness.sqrt()
}
