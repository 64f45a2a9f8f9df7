use crate::error::{Result, SplitError};

/// Displacement (in points) below which a spring may come to rest.
pub const REST_DISPLACEMENT: f32 = 0.05;
/// Velocity (in points per second) below which a spring may come to rest.
pub const REST_VELOCITY: f32 = 0.5;

/// Largest integration step, in seconds.
const MAX_SUBSTEP: f32 = 1.0 / 240.0;
/// Frames longer than this (e.g. after a stall) are shortened.
const MAX_FRAME_DT: f32 = 0.1;

/// Configuration for spring physics animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Mass of the object attached to the spring (default: 1.0)
    pub mass: f32,
    /// Stiffness of the spring (default: 100.0)
    pub stiffness: f32,
    /// Damping coefficient (default: 10.0)
    pub damping: f32,
    /// Initial velocity in points per second. Positive values move toward
    /// the target, negative values away from it.
    pub initial_velocity: f32,
}

impl SpringConfig {
    /// Underdamped spring with a visible overshoot
    pub const DEFAULT: Self = Self {
        mass: 1.0,
        stiffness: 100.0,
        damping: 10.0,
        initial_velocity: 0.0,
    };

    /// Near-critically damped spring used for snapping panes
    pub const SNAP: Self = Self {
        mass: 1.0,
        stiffness: 320.0,
        damping: 36.0,
        initial_velocity: 0.0,
    };

    /// Bouncy spring with more overshoot
    pub const BOUNCY: Self = Self {
        mass: 1.0,
        stiffness: 200.0,
        damping: 10.0,
        initial_velocity: 0.0,
    };

    /// Gentle spring with subtle motion
    pub const GENTLE: Self = Self {
        mass: 1.0,
        stiffness: 120.0,
        damping: 22.0,
        initial_velocity: 0.0,
    };

    pub fn with_initial_velocity(mut self, velocity: f32) -> Self {
        self.initial_velocity = velocity;
        self
    }

    /// Check the physical parameters: mass and stiffness must be positive,
    /// damping non-negative, everything finite.
    pub fn validate(&self) -> Result<()> {
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(SplitError::InvalidMass(self.mass));
        }
        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(SplitError::InvalidStiffness(self.stiffness));
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(SplitError::InvalidDamping(self.damping));
        }
        if !self.initial_velocity.is_finite() {
            return Err(SplitError::InvalidVelocity(self.initial_velocity));
        }
        Ok(())
    }

    /// Natural angular frequency of the spring.
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping coefficient that makes this spring critically damped.
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// State for spring physics simulation, in absolute offsets.
#[derive(Clone, Debug, PartialEq)]
pub struct SpringState {
    /// Current position
    pub position: f32,
    /// Current velocity, in points per second
    pub velocity: f32,
    /// Rest position of the spring
    pub target: f32,
}

impl SpringState {
    /// Create a spring at `from` heading to `to`. The configured initial
    /// velocity is applied in the direction of the target.
    pub fn new(from: f32, to: f32, config: &SpringConfig) -> Self {
        let direction = if to >= from { 1.0 } else { -1.0 };
        Self {
            position: from,
            velocity: config.initial_velocity * direction,
            target: to,
        }
    }

    /// A spring already resting at `position`.
    pub fn at_rest(position: f32) -> Self {
        Self {
            position,
            velocity: 0.0,
            target: position,
        }
    }

    /// Step the simulation forward by `dt` seconds and return the new position.
    ///
    /// The frame is split into small sub-steps. Damping is integrated
    /// implicitly so heavily over-damped springs stay stable.
    pub fn step(&mut self, dt: f32, config: &SpringConfig) -> f32 {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        if dt < 1e-6 {
            return self.position;
        }

        let omega = config.natural_frequency().max(1e-3);
        let max_substep = MAX_SUBSTEP.min(0.5 / omega);
        let substeps = (dt / max_substep).ceil().max(1.0) as u32;
        let h = dt / substeps as f32;
        let damping_ratio = config.damping / config.mass;

        for _ in 0..substeps {
            // Spring force: F = -k * x
            let displacement = self.position - self.target;
            let acceleration = -config.stiffness * displacement / config.mass;

            // Semi-implicit Euler with the damping term solved implicitly
            self.velocity = (self.velocity + acceleration * h) / (1.0 + damping_ratio * h);
            self.position += self.velocity * h;
        }

        self.position
    }

    /// Check if the spring has settled (position near target, velocity near zero)
    pub fn is_settled(&self) -> bool {
        (self.position - self.target).abs() < REST_DISPLACEMENT
            && self.velocity.abs() < REST_VELOCITY
    }

    /// Snap to the target and zero the velocity.
    pub fn settle(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
    }
}
