use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::chart::RenderOptions;
use crate::controls::types::{ParameterRange, Selection};
use crate::error::Result;
use crate::models::curve::{MarketInputs, SampleDomain};

/// Control ranges, sampling grid and rendering settings for a price chart.
///
/// Every field has a serde default, so a TOML file only needs the keys it
/// overrides:
///
/// ```rust
/// use option_curves::ChartConfig;
///
/// let config = ChartConfig::from_toml_str(
///     r#"
///     verbosity = 1
///
///     [domain]
///     start = 80.0
///     end = 120.0
///     points = 41
///     "#,
/// )?;
/// assert_eq!(config.domain.points, 41);
/// assert_eq!(config.strike_price.default, 100.0);
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Strike price control (K)
    #[serde(default = "default_strike_range")]
    pub strike_price: ParameterRange,

    /// Time to maturity control, in years (T)
    #[serde(default = "default_maturity_range")]
    pub years_to_exp: ParameterRange,

    /// Risk-free rate control, in percent (r * 100)
    #[serde(default = "default_rate_pct_range")]
    pub r_pct: ParameterRange,

    /// Volatility control, in percent (sigma * 100)
    #[serde(default = "default_sigma_pct_range")]
    pub sigma_pct: ParameterRange,

    /// Underlying price grid the curves are sampled on
    #[serde(default)]
    pub domain: SampleDomain,

    #[serde(default)]
    pub render: RenderOptions,

    /// Log verbosity (0=warn, 1=info, 2=debug)
    #[serde(default)]
    pub verbosity: u8,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            strike_price: default_strike_range(),
            years_to_exp: default_maturity_range(),
            r_pct: default_rate_pct_range(),
            sigma_pct: default_sigma_pct_range(),
            domain: SampleDomain::default(),
            render: RenderOptions::default(),
            verbosity: 0,
        }
    }
}

impl ChartConfig {
    /// The reference page: 100 samples from 50 to 150.
    pub fn reference() -> Self {
        Self::default()
    }

    /// Same ranges, 1,000 samples for smooth large renders.
    pub fn fine() -> Self {
        Self {
            domain: SampleDomain {
                points: 1000,
                ..SampleDomain::default()
            },
            ..Self::default()
        }
    }

    /// Same ranges, 25 samples for quick terminal tables.
    pub fn coarse() -> Self {
        Self {
            domain: SampleDomain {
                points: 25,
                ..SampleDomain::default()
            },
            ..Self::default()
        }
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(text).context("failed to parse chart config")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read chart config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        self.strike_price.validate("strike_price")?;
        self.years_to_exp.validate("years_to_exp")?;
        self.r_pct.validate("r_pct")?;
        self.sigma_pct.validate("sigma_pct")?;
        self.domain.validate()?;
        // Every value the controls can produce must be priceable.
        MarketInputs::new(
            self.strike_price.min,
            self.years_to_exp.min,
            self.r_pct.min / 100.0,
            self.sigma_pct.min / 100.0,
        )?;
        Ok(())
    }

    /// Control defaults, as the page shows them on first load.
    pub fn default_selection(&self) -> Selection {
        Selection {
            strike_price: self.strike_price.default,
            years_to_exp: self.years_to_exp.default,
            r_pct: self.r_pct.default,
            sigma_pct: self.sigma_pct.default,
        }
    }

    /// Range-checks and snaps raw control values, then converts percentages
    /// to fractions.
    pub fn resolve(&self, selection: &Selection) -> Result<MarketInputs> {
        let strike_price = self
            .strike_price
            .resolve("strike_price", selection.strike_price)?;
        let years_to_exp = self
            .years_to_exp
            .resolve("years_to_exp", selection.years_to_exp)?;
        let r_pct = self.r_pct.resolve("r_pct", selection.r_pct)?;
        let sigma_pct = self.sigma_pct.resolve("sigma_pct", selection.sigma_pct)?;

        MarketInputs::new(strike_price, years_to_exp, r_pct / 100.0, sigma_pct / 100.0)
    }

    /// `tracing` filter directive matching `verbosity`.
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

fn default_strike_range() -> ParameterRange {
    ParameterRange::new(50.0, 150.0, 100.0, 1.0)
}

fn default_maturity_range() -> ParameterRange {
    ParameterRange::new(0.1, 2.0, 1.0, 0.1)
}

fn default_rate_pct_range() -> ParameterRange {
    ParameterRange::new(0.0, 10.0, 5.0, 0.1)
}

fn default_sigma_pct_range() -> ParameterRange {
    ParameterRange::new(10.0, 50.0, 20.0, 0.1)
}
