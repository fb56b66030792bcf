// Closed-form Black-Scholes pricing of European calls and puts on a
// non-dividend-paying underlying.

pub mod types;

pub use types::{OptionParameters, OptionType};

use crate::error::{PricingError, Result};

/// Standard normal cumulative distribution function, `0.5 * erfc(-x / sqrt(2))`.
///
/// Equal to `0.5 * [1 + erf(x / sqrt(2))]`, but `erfc` keeps full relative
/// precision in the lower tail where `1 + erf` cancels.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x / std::f64::consts::SQRT_2)
}

/// Black-Scholes price of a European option.
///
/// ```text
/// d1 = (ln(S/K) + (r + 0.5*sigma^2)*T) / (sigma*sqrt(T))
/// d2 = d1 - sigma*sqrt(T)
/// call = S*N(d1) - K*exp(-rT)*N(d2)
/// put  = K*exp(-rT)*N(-d2) - S*N(-d1)
/// ```
///
/// The result is not clamped at zero.
///
/// # Errors
///
/// * `InvalidParameter` if K, T or sigma is not strictly positive, or any input
///   is NaN or infinite.
/// * `DomainError` if S <= 0.
/// * `InvalidParameter` if finite inputs overflow the formula (for example a
///   huge sigma or `exp(-r*T)` out of range), so the price is not finite.
///
/// # Example
///
/// ```rust
/// use option_curves::{price, OptionParameters, OptionType};
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.20)?;
/// let call = price(&params, OptionType::Call)?;
/// assert!((call - 10.4506).abs() < 1e-4);
/// # Ok::<(), option_curves::PricingError>(())
/// ```
pub fn price(params: &OptionParameters, option_type: OptionType) -> Result<f64> {
    params.validate()?;
    price_unchecked(params, option_type)
}

/// Formula only; callers must have validated `params`. A non-finite result
/// is still an error.
#[allow(non_snake_case)]
pub(crate) fn price_unchecked(params: &OptionParameters, option_type: OptionType) -> Result<f64> {
    let S = params.underlying_price;
    let K = params.strike_price;
    let T = params.years_to_exp;
    let r = params.r;
    let sigma = params.sigma;

    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / (sigma * T.sqrt());
    let d2 = d1 - sigma * T.sqrt();

    let value = match option_type {
        OptionType::Call => S * norm_cdf(d1) - K * (-r * T).exp() * norm_cdf(d2),
        OptionType::Put => K * (-r * T).exp() * norm_cdf(-d2) - S * norm_cdf(-d1),
    };

    if !value.is_finite() {
        return Err(PricingError::invalid(
            "params",
            format!("{option_type} price overflowed to {value} for {params:?}"),
        ));
    }
    Ok(value)
}
