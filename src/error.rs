use thiserror::Error;

/// Result alias used throughout the solver core.
pub type SolverResult<T> = Result<T, SolverError>;

#[derive(Error, Debug)]
pub enum SolverError {
    /// Rejected before any computation starts: too-small grid, zero or
    /// negative spacing/time step, mismatched initial-field length.
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },
}

impl SolverError {
    pub fn invalid(message: impl Into<String>) -> Self {
        SolverError::InvalidParameter {
            message: message.into(),
        }
    }
}
