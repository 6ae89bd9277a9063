use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Trajectory history is unavailable")]
    HistoryUnavailable,
}

impl From<serde_json::Error> for SimulationError {
    fn from(err: serde_json::Error) -> Self {
        SimulationError::Config(err.to_string())
    }
}

impl From<std::io::Error> for SimulationError {
    fn from(err: std::io::Error) -> Self {
        SimulationError::Config(err.to_string())
    }
}

/// Rejects NaN, infinities and values `<= 0`.
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidInput(format!(
            "{} must be a positive finite number, got {}",
            name, value
        )))
    }
}

/// Rejects NaN, infinities and negative values.
pub(crate) fn ensure_non_negative(name: &str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidInput(format!(
            "{} must be a non-negative finite number, got {}",
            name, value
        )))
    }
}
