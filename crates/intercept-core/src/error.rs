//! Error types for the interception geometry pipeline.

/// Errors raised by the optics, geometry and registry layers.
///
/// Every operation in this crate is a deterministic function of its inputs,
/// so none of these errors are transient.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InterceptError {
    /// An input made a formula undefined (non-positive focal length,
    /// non-positive sensor dimension, zero slant distance, non-finite value).
    #[error("invalid input `{field}`: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },
    /// A camera preset lookup for a name the registry does not hold.
    #[error("camera preset not found: {0}")]
    NotFound(String),
}

impl InterceptError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, InterceptError>;

/// Reject zero, negative, NaN and infinite values.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(InterceptError::invalid(field, format!("must be finite, got {value}")));
    }
    if value <= 0.0 {
        return Err(InterceptError::invalid(field, format!("must be > 0, got {value}")));
    }
    Ok(value)
}

pub(crate) fn require_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InterceptError::invalid(field, format!("must be finite, got {value}")))
    }
}
