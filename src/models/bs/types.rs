use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{require_finite, PricingError, Result};
use crate::models::curve::MarketInputs;

/// European option flavour. Closed set, matched exhaustively by the pricer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Both flavours, call first. This is the order curves are built and drawn in.
    pub const ALL: [OptionType; 2] = [OptionType::Call, OptionType::Put];

    /// Payoff if exercised now: `max(S-K, 0)` for a call, `max(K-S, 0)` for a put.
    pub fn intrinsic_value(self, underlying_price: f64, strike_price: f64) -> f64 {
        match self {
            OptionType::Call => (underlying_price - strike_price).max(0.0),
            OptionType::Put => (strike_price - underlying_price).max(0.0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Accepts "call" or "put" in any case. Anything else is rejected rather
    /// than defaulted.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            other => Err(PricingError::invalid(
                "option_type",
                format!("unrecognised option type {other:?} (expected \"call\" or \"put\")"),
            )),
        }
    }
}

/// Market and contract inputs for a single Black-Scholes evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParameters {
    /// Underlying asset price (S)
    pub underlying_price: f64,
    /// Strike price (K)
    pub strike_price: f64,
    /// Time to expiration in years (T)
    pub years_to_exp: f64,
    /// Annualised continuously-compounded risk-free rate, as a decimal (r)
    pub r: f64,
    /// Annualised volatility, as a decimal (sigma)
    pub sigma: f64,
}

impl OptionParameters {
    /// Creates a validated parameter set.
    pub fn new(
        underlying_price: f64,
        strike_price: f64,
        years_to_exp: f64,
        r: f64,
        sigma: f64,
    ) -> Result<Self> {
        let params = Self {
            underlying_price,
            strike_price,
            years_to_exp,
            r,
            sigma,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks every precondition of the closed-form formula.
    ///
    /// Non-finite inputs and non-positive K, T or sigma are `InvalidParameter`;
    /// a finite S <= 0 is a `DomainError`.
    pub fn validate(&self) -> Result<()> {
        self.validate_contract()?;
        validate_underlying(self.underlying_price)
    }

    fn validate_contract(&self) -> Result<()> {
        self.market_inputs().validate()
    }

    /// Everything but the underlying price.
    pub fn market_inputs(&self) -> MarketInputs {
        MarketInputs {
            strike_price: self.strike_price,
            years_to_exp: self.years_to_exp,
            r: self.r,
            sigma: self.sigma,
        }
    }

    /// Same contract, different underlying price.
    pub fn with_underlying(&self, underlying_price: f64) -> Self {
        Self {
            underlying_price,
            ..*self
        }
    }

    /// Discount factor `exp(-r * T)`.
    pub fn discount_factor(&self) -> f64 {
        (-self.r * self.years_to_exp).exp()
    }
}

pub(crate) fn validate_underlying(underlying_price: f64) -> Result<()> {
    require_finite("underlying_price", underlying_price)?;
    if underlying_price <= 0.0 {
        return Err(PricingError::DomainError {
            value: underlying_price,
        });
    }
    Ok(())
}
