//! # Option-Curves: Black-Scholes Option Prices Across the Underlying
//!
//! `option-curves` prices European calls and puts with the Black-Scholes closed-form
//! formula and samples those prices over a grid of underlying stock prices. The two
//! resulting curves, together with the strike, are what an educational chart of
//! "option price vs. stock price" draws.
//!
//! ## Core Features
//!
//! - **Pricer**: exact closed-form call and put prices with eager input validation
//! - **Sweep**: order-preserving sampling over any domain, optionally on a rayon pool
//! - **Controls**: slider-style parameter ranges loaded from TOML
//! - **Output**: SVG charts via `plotters` and CSV export
//!
//! ## Quick Start
//!
//! ```rust
//! use option_curves::{build_chart_data, default_configs};
//!
//! let config = default_configs::reference();
//! let selection = config.default_selection(); // K=100, T=1y, r=5%, sigma=20%
//!
//! let curves = build_chart_data(&config, &selection)?;
//! assert_eq!(curves.call.len(), 100);
//! assert_eq!(curves.strike_price, 100.0);
//! # Ok::<(), option_curves::PricingError>(())
//! ```
//!
//! ## Error Model
//!
//! Degenerate inputs never turn into NaN. Non-positive strike, maturity or
//! volatility, non-finite values and unknown option types fail with
//! [`PricingError::InvalidParameter`]; a non-positive underlying price fails with
//! [`PricingError::DomainError`].

// ================================================================================================
// MODULES
// ================================================================================================

pub mod chart;
pub mod controls;
pub mod error;
pub mod explain;
pub mod export;
pub mod models;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Errors
pub use error::{PricingError, Result};

// Pricer
pub use models::bs::{norm_cdf, price, OptionParameters, OptionType};

// Curves
#[cfg(feature = "parallel")]
pub use models::curve::sweep_par;
pub use models::curve::{
    linspace, price_curves, sweep, CurveSet, MarketInputs, PriceCurve, PricePoint, SampleDomain,
};

// Controls and configuration
pub use controls::{
    config::ChartConfig,
    types::{ParameterRange, Selection},
};

// Presentation
pub use chart::{render_svg, render_svg_string, RenderOptions};
pub use explain::EXPLANATION;
pub use export::{write_csv, write_csv_file};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured chart settings.
///
/// All presets share the reference control ranges:
///
/// | Control | Min | Max | Default | Step |
/// |---|---|---|---|---|
/// | Strike (K) | 50 | 150 | 100 | 1 |
/// | Maturity (T, years) | 0.1 | 2.0 | 1.0 | 0.1 |
/// | Rate (r, %) | 0.0 | 10.0 | 5.0 | 0.1 |
/// | Volatility (sigma, %) | 10.0 | 50.0 | 20.0 | 0.1 |
///
/// and differ only in how densely the underlying price is sampled.
pub mod default_configs {
    use crate::controls::config::ChartConfig;

    /// The reference chart: 100 evenly spaced underlying prices from 50 to 150.
    ///
    /// # Example
    ///
    /// ```rust
    /// use option_curves::default_configs;
    ///
    /// let config = default_configs::reference();
    /// assert_eq!(config.domain.points, 100);
    /// ```
    pub fn reference() -> ChartConfig {
        ChartConfig::reference()
    }

    /// 1,000 samples over the same range, for large or zoomed renders.
    pub fn fine() -> ChartConfig {
        ChartConfig::fine()
    }

    /// 25 samples, enough for a terminal table.
    pub fn coarse() -> ChartConfig {
        ChartConfig::coarse()
    }
}

/// Resolve control values and sample both curves over the configured domain.
///
/// This is the whole pipeline behind the chart: the raw [`Selection`] is
/// range-checked and snapped against `config`'s controls, rate and volatility
/// are converted from percent to fractions, and call and put prices are swept
/// over `config.domain`.
///
/// # Errors
///
/// [`PricingError::InvalidParameter`] if a control value is outside its range or
/// the config's domain is invalid.
///
/// # Example
///
/// ```rust
/// use option_curves::{build_chart_data, default_configs, Selection};
///
/// let config = default_configs::reference();
/// let selection = Selection {
///     strike_price: 110.0,
///     years_to_exp: 0.5,
///     r_pct: 3.0,
///     sigma_pct: 35.0,
/// };
///
/// let curves = build_chart_data(&config, &selection)?;
/// for (call, put) in curves.call.iter().zip(curves.put.iter()).step_by(33) {
///     println!(
///         "S={:>7.2}  call={:>7.3}  put={:>7.3}",
///         call.underlying_price, call.price, put.price
///     );
/// }
/// # Ok::<(), option_curves::PricingError>(())
/// ```
pub fn build_chart_data(config: &ChartConfig, selection: &Selection) -> Result<CurveSet> {
    let inputs = config.resolve(selection)?;
    let domain = config.domain.values()?;

    tracing::debug!(
        strike = inputs.strike_price,
        years_to_exp = inputs.years_to_exp,
        r = inputs.r,
        sigma = inputs.sigma,
        points = domain.len(),
        "building chart data"
    );

    price_curves(&domain, &inputs)
}
