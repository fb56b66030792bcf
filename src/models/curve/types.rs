use serde::{Deserialize, Serialize};

use crate::error::{require_finite, require_positive, PricingError, Result};
use crate::models::bs::{OptionParameters, OptionType};

/// Contract and market inputs shared by every point of a curve, as fractions.
///
/// This is what the presentation layer hands to the pricer once its controls
/// have been resolved: strike, years to expiry, rate and volatility. Only the
/// underlying price varies along a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketInputs {
    /// Strike price (K)
    pub strike_price: f64,
    /// Time to expiration in years (T)
    pub years_to_exp: f64,
    /// Risk-free rate as a decimal, e.g. 0.05 for 5% (r)
    pub r: f64,
    /// Volatility as a decimal, e.g. 0.20 for 20% (sigma)
    pub sigma: f64,
}

impl MarketInputs {
    /// Creates validated inputs.
    pub fn new(strike_price: f64, years_to_exp: f64, r: f64, sigma: f64) -> Result<Self> {
        let inputs = Self {
            strike_price,
            years_to_exp,
            r,
            sigma,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// K, T and sigma must be finite and > 0; r only finite.
    pub fn validate(&self) -> Result<()> {
        require_positive("strike_price", self.strike_price)?;
        require_positive("years_to_exp", self.years_to_exp)?;
        require_finite("r", self.r)?;
        require_positive("sigma", self.sigma)
    }

    /// Full parameter set at underlying price `underlying_price`.
    pub fn at(&self, underlying_price: f64) -> OptionParameters {
        OptionParameters {
            underlying_price,
            strike_price: self.strike_price,
            years_to_exp: self.years_to_exp,
            r: self.r,
            sigma: self.sigma,
        }
    }
}

/// One sample of a price curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub underlying_price: f64,
    pub price: f64,
}

/// Ordered `(S, price)` samples for one option type and a fixed contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceCurve {
    pub option_type: OptionType,
    pub inputs: MarketInputs,
    pub points: Vec<PricePoint>,
}

impl PriceCurve {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PricePoint> {
        self.points.iter()
    }

    /// Sampled underlying prices, in sweep order.
    pub fn underlying_prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.underlying_price).collect()
    }

    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    /// Exercise value at each sample.
    pub fn intrinsic_values(&self) -> Vec<f64> {
        self.points
            .iter()
            .map(|p| {
                self.option_type
                    .intrinsic_value(p.underlying_price, self.inputs.strike_price)
            })
            .collect()
    }

    /// Price minus intrinsic value at each sample.
    ///
    /// Deep in-the-money puts can have negative time value when r > 0.
    pub fn time_values(&self) -> Vec<f64> {
        self.points
            .iter()
            .zip(self.intrinsic_values())
            .map(|(p, intrinsic)| p.price - intrinsic)
            .collect()
    }

    /// `(min, max)` of the prices, or `None` for an empty curve.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        range_of(self.points.iter().map(|p| p.price))
    }
}

impl<'a> IntoIterator for &'a PriceCurve {
    type Item = &'a PricePoint;
    type IntoIter = std::slice::Iter<'a, PricePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Everything a chart needs: both curves over the same domain plus the strike
/// for the reference marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSet {
    pub call: PriceCurve,
    pub put: PriceCurve,
    pub strike_price: f64,
}

impl CurveSet {
    pub fn curve(&self, option_type: OptionType) -> &PriceCurve {
        match option_type {
            OptionType::Call => &self.call,
            OptionType::Put => &self.put,
        }
    }

    /// `(min, max)` of the sampled underlying prices.
    pub fn underlying_range(&self) -> Option<(f64, f64)> {
        range_of(self.call.iter().map(|p| p.underlying_price))
    }

    /// `(min, max)` of prices across both curves.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        range_of(self.call.iter().chain(self.put.iter()).map(|p| p.price))
    }
}

fn range_of(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Evenly spaced sampling grid for the underlying price, inclusive of both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleDomain {
    pub start: f64,
    pub end: f64,
    pub points: usize,
}

impl Default for SampleDomain {
    fn default() -> Self {
        Self {
            start: 50.0,
            end: 150.0,
            points: 100,
        }
    }
}

impl SampleDomain {
    pub fn new(start: f64, end: f64, points: usize) -> Result<Self> {
        let domain = Self { start, end, points };
        domain.validate()?;
        Ok(domain)
    }

    pub fn validate(&self) -> Result<()> {
        require_finite("domain.start", self.start)?;
        require_finite("domain.end", self.end)?;
        if self.start <= 0.0 || self.end <= 0.0 {
            return Err(PricingError::invalid(
                "domain",
                format!(
                    "underlying prices must be > 0, got [{}, {}]",
                    self.start, self.end
                ),
            ));
        }
        if self.points == 0 {
            return Err(PricingError::invalid(
                "domain.points",
                "at least one sample point is required",
            ));
        }
        Ok(())
    }

    /// The sample values. Both endpoints are hit exactly; a single-point
    /// domain yields `[start]`.
    pub fn values(&self) -> Result<Vec<f64>> {
        self.validate()?;
        Ok(linspace(self.start, self.end, self.points))
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            values[n - 1] = end;
            values
        }
    }
}
