//! Error types for the `fireground-core` crate.
//!
//! All fallible operations return [`FireBehaviorError`] through the crate's
//! [`Result`] alias. Every error is deterministic: repeating a call with the
//! same input reproduces the same error, so none of them are retryable.
//!
//! Physical clamps (no irradiance below the horizon, zero spread above the
//! moisture of extinction) are normal outputs and never surface here.

/// Errors raised by the solar, conditioning and fire behavior calculations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FireBehaviorError {
    /// Malformed or out-of-range caller input.
    #[error("invalid {field}: {reason}")]
    Input {
        /// The offending input.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// A non-finite value was produced part way through a calculation.
    #[error("non-finite {quantity} ({value}) produced during {stage}")]
    Data {
        /// The calculation step that produced the value.
        stage: &'static str,
        /// The quantity that went non-finite.
        quantity: &'static str,
        /// The offending value.
        value: f64,
    },

    /// The fuel model cannot describe a physically valid fuel bed.
    #[error("fuel model {model_id} is not a valid fuel bed: {reason}")]
    Model {
        /// Identifier of the rejected fuel model.
        model_id: u32,
        /// Why the fuel bed was rejected.
        reason: String,
    },
}

impl FireBehaviorError {
    /// Build an [`FireBehaviorError::Input`] error.
    pub fn input(field: &'static str, reason: impl Into<String>) -> Self {
        FireBehaviorError::Input {
            field,
            reason: reason.into(),
        }
    }

    /// Build a [`FireBehaviorError::Model`] error.
    pub fn model(model_id: u32, reason: impl Into<String>) -> Self {
        FireBehaviorError::Model {
            model_id,
            reason: reason.into(),
        }
    }
}

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, FireBehaviorError>;

/// Pass `value` through, or report it as a [`FireBehaviorError::Data`] error
/// when it is NaN or infinite.
#[inline]
pub(crate) fn ensure_finite(
    stage: &'static str,
    quantity: &'static str,
    value: f64,
) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FireBehaviorError::Data {
            stage,
            quantity,
            value,
        })
    }
}

/// Reject non-finite caller input as [`FireBehaviorError::Input`].
#[inline]
pub(crate) fn require_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FireBehaviorError::input(field, format!("must be finite, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("stage", "q", 1.5), Ok(1.5));
        let err = ensure_finite("fuel temperature", "irradiance", f64::NAN).unwrap_err();
        assert!(matches!(
            err,
            FireBehaviorError::Data {
                stage: "fuel temperature",
                ..
            }
        ));
        assert!(ensure_finite("stage", "q", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = FireBehaviorError::input("latitude", "must be within [-90, 90], got 91");
        assert_eq!(
            err.to_string(),
            "invalid latitude: must be within [-90, 90], got 91"
        );
        let err = FireBehaviorError::model(91, "bed depth must be positive");
        assert!(err.to_string().contains("fuel model 91"));
        assert!(require_finite("slope", f64::NAN).is_err());
    }
}
