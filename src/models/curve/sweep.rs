#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::types::*;
use crate::error::Result;
use crate::models::bs::{price_unchecked, types::validate_underlying, OptionType};

/// Price one option type at every underlying price in `domain`.
///
/// The curve has exactly one point per domain value, in the domain's order.
/// The contract inputs are validated once up front, then each S as it is
/// reached; the first failure aborts the sweep and no partial curve is
/// returned. An empty domain yields an empty curve.
///
/// # Example
///
/// ```rust
/// use option_curves::{sweep, MarketInputs, OptionType, SampleDomain};
///
/// let inputs = MarketInputs::new(100.0, 1.0, 0.05, 0.20)?;
/// let domain = SampleDomain::default().values()?;
/// let curve = sweep(&domain, &inputs, OptionType::Call)?;
///
/// assert_eq!(curve.len(), 100);
/// assert_eq!(curve.points[0].underlying_price, 50.0);
/// # Ok::<(), option_curves::PricingError>(())
/// ```
pub fn sweep(domain: &[f64], inputs: &MarketInputs, option_type: OptionType) -> Result<PriceCurve> {
    inputs.validate()?;

    let points = domain
        .iter()
        .map(|&s| price_point(inputs, option_type, s))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        option_type = %option_type,
        points = points.len(),
        strike = inputs.strike_price,
        "sweep complete"
    );

    Ok(PriceCurve {
        option_type,
        inputs: *inputs,
        points,
    })
}

/// Parallel [`sweep`]. Samples are priced on the rayon pool and collected
/// back in domain order, so the result is identical to the sequential one.
#[cfg(feature = "parallel")]
pub fn sweep_par(
    domain: &[f64],
    inputs: &MarketInputs,
    option_type: OptionType,
) -> Result<PriceCurve> {
    inputs.validate()?;

    let points = domain
        .par_iter()
        .map(|&s| price_point(inputs, option_type, s))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        option_type = %option_type,
        points = points.len(),
        threads = rayon::current_num_threads(),
        "parallel sweep complete"
    );

    Ok(PriceCurve {
        option_type,
        inputs: *inputs,
        points,
    })
}

/// Call and put curves over the same domain, plus the strike marker.
pub fn price_curves(domain: &[f64], inputs: &MarketInputs) -> Result<CurveSet> {
    let call = sweep(domain, inputs, OptionType::Call)?;
    let put = sweep(domain, inputs, OptionType::Put)?;
    Ok(CurveSet {
        call,
        put,
        strike_price: inputs.strike_price,
    })
}

fn price_point(inputs: &MarketInputs, option_type: OptionType, s: f64) -> Result<PricePoint> {
    validate_underlying(s)?;
    Ok(PricePoint {
        underlying_price: s,
        price: price_unchecked(&inputs.at(s), option_type)?,
    })
}
