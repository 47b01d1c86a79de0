// src/error.rs
use std::fmt;

/// Error types for the mc-barrier library
#[derive(Debug, Clone, PartialEq)]
pub enum McError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration
    InvalidConfiguration { field: String, reason: String },

    /// Barrier level incompatible with the barrier kind
    InvalidBarrier { kind: String, level: f64 },

    /// Numerical instability (non-finite estimate)
    NumericalInstability { method: String, reason: String },
}

impl fmt::Display for McError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            McError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            McError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            McError::InvalidBarrier { kind, level } => {
                write!(
                    f,
                    "Invalid {} barrier level {}: must be finite and positive",
                    kind, level
                )
            }
            McError::NumericalInstability { method, reason } => {
                write!(f, "Numerical instability in {}: {}", method, reason)
            }
        }
    }
}

impl std::error::Error for McError {}

/// Result type alias for mc-barrier operations
pub type McResult<T> = Result<T, McError>;

/// Validation utilities
pub mod validation {
    use super::{McError, McResult};

    pub const MAX_SCENARIOS: usize = 1_000_000_000;
    pub const MAX_TIME_STEPS: usize = 100_000;

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> McResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(McError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> McResult<()> {
        validate_finite(name, value)?;
        if value < 0.0 {
            Err(McError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> McResult<()> {
        if !value.is_finite() {
            Err(McError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate scenario count
    pub fn validate_scenarios(num_scenarios: usize) -> McResult<()> {
        if num_scenarios == 0 {
            Err(McError::InvalidConfiguration {
                field: "num_scenarios".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if num_scenarios > MAX_SCENARIOS {
            Err(McError::InvalidConfiguration {
                field: "num_scenarios".to_string(),
                reason: "exceeds maximum allowed (1 billion)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate time step count
    pub fn validate_steps(steps: usize) -> McResult<()> {
        if steps == 0 {
            Err(McError::InvalidConfiguration {
                field: "num_time_steps".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if steps > MAX_TIME_STEPS {
            Err(McError::InvalidConfiguration {
                field: "num_time_steps".to_string(),
                reason: "exceeds maximum allowed (100,000)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("volatility", 0.2).is_ok());
        assert!(validate_positive("volatility", 0.0).is_err());
        assert!(validate_positive("volatility", -0.1).is_err());
        assert!(validate_positive("volatility", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("time_to_expiration", 0.0).is_ok());
        assert!(validate_non_negative("time_to_expiration", 1.5).is_ok());
        assert!(validate_non_negative("time_to_expiration", -1e-12).is_err());
        assert!(validate_non_negative("time_to_expiration", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("value", 1.0).is_ok());
        assert!(validate_finite("value", f64::NAN).is_err());
        assert!(validate_finite("value", f64::INFINITY).is_err());
        assert!(validate_finite("value", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_counts() {
        assert!(validate_scenarios(1).is_ok());
        assert!(validate_scenarios(0).is_err());
        assert!(validate_steps(12).is_ok());
        assert!(validate_steps(0).is_err());
        assert!(validate_steps(MAX_TIME_STEPS + 1).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = McError::InvalidParameters {
            parameter: "volatility".to_string(),
            value: -0.1,
            constraint: "must be positive".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("volatility"));
        assert!(display.contains("-0.1"));
        assert!(display.contains("positive"));
    }

    #[test]
    fn test_barrier_error_display() {
        let error = McError::InvalidBarrier {
            kind: "up-and-out".to_string(),
            level: -5.0,
        };

        let display = format!("{}", error);
        assert!(display.contains("up-and-out"));
        assert!(display.contains("-5"));
    }
}
