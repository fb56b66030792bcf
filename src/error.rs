//! Error types for option-curves.
//!
//! Pricing and sweeping validate their inputs eagerly and return
//! `Result<T, PricingError>` instead of letting NaN or infinity flow into a
//! chart.

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, PricingError>;

/// Errors raised while validating pricing inputs.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PricingError {
    /// A parameter is outside the region where the formula is defined
    /// (non-positive strike, maturity or volatility, non-finite input,
    /// unknown option type, out-of-range control value).
    #[error("invalid parameter `{name}`: {message}")]
    InvalidParameter { name: &'static str, message: String },

    /// The underlying price is not strictly positive, so `ln(S / K)` is undefined.
    #[error("underlying price S={value} is outside the pricing domain (S must be > 0)")]
    DomainError { value: f64 },
}

impl PricingError {
    pub(crate) fn invalid(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}

/// Fails with `InvalidParameter` unless `value` is finite and strictly positive.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(PricingError::invalid(
            name,
            format!("{value} is not a finite number"),
        ));
    }
    if value <= 0.0 {
        return Err(PricingError::invalid(name, format!("{value} must be > 0")));
    }
    Ok(())
}

/// Fails with `InvalidParameter` unless `value` is finite.
pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::invalid(
            name,
            format!("{value} is not a finite number"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_display_names_the_parameter() {
        let err = PricingError::invalid("strike", "0 must be > 0");
        let display = format!("{err}");
        assert!(display.contains("strike"));
        assert!(display.contains("must be > 0"));
    }

    #[test]
    fn domain_error_display_includes_value() {
        let err = PricingError::DomainError { value: -3.5 };
        assert!(format!("{err}").contains("-3.5"));
    }

    #[test]
    fn require_positive_rejects_zero_negative_and_nan() {
        assert!(require_positive("k", 1.0).is_ok());
        assert!(matches!(
            require_positive("k", 0.0),
            Err(PricingError::InvalidParameter { name: "k", .. })
        ));
        assert!(require_positive("k", -2.0).is_err());
        assert!(require_positive("k", f64::NAN).is_err());
        assert!(require_positive("k", f64::INFINITY).is_err());
    }

    #[test]
    fn require_finite_accepts_negative() {
        assert!(require_finite("r", -0.01).is_ok());
        assert!(require_finite("r", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PricingError>();
    }
}
