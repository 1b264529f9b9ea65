use thiserror::Error as ThisError;

/// An error produced while planning a path.
#[derive(ThisError, Clone, Copy, Debug, PartialEq)]
pub enum PlanError {
    /// The turning radius was not a positive, finite number.
    #[error("turning radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
    /// The sampling step size was not a positive, finite number.
    #[error("step size must be positive and finite, got {0}")]
    InvalidStepSize(f64),
    /// None of the six path families has a solution for the given poses.
    #[error("no feasible Dubins path between the given poses")]
    NoFeasiblePath,
}

/// The result of a planning operation.
pub type Result<T> = std::result::Result<T, PlanError>;

pub(crate) fn check_radius(radius: f64) -> Result<()> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(PlanError::InvalidRadius(radius))
    }
}

pub(crate) fn check_step_size(step_size: f64) -> Result<()> {
    if step_size.is_finite() && step_size > 0.0 {
        Ok(())
    } else {
        Err(PlanError::InvalidStepSize(step_size))
    }
}
