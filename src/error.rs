use thiserror::Error;

/// Errors reported when configuring the crate's physical parameters.
///
/// Runtime operations never fail; out-of-range inputs are clamped or ignored.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplitError {
    #[error("spring mass must be finite and greater than zero, got {0}")]
    InvalidMass(f32),

    #[error("spring stiffness must be finite and greater than zero, got {0}")]
    InvalidStiffness(f32),

    #[error("spring damping must be finite and non-negative, got {0}")]
    InvalidDamping(f32),

    #[error("spring initial velocity must be finite, got {0}")]
    InvalidVelocity(f32),
}

pub type Result<T> = std::result::Result<T, SplitError>;
