//! Price curves
//!
//! Samples the Black-Scholes pricer across a grid of underlying prices for a
//! fixed contract, producing the call and put series drawn on the chart.

pub mod sweep;
pub mod types;

pub use sweep::*;
pub use types::*;
