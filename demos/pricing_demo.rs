// demos/pricing_demo.rs

//! Prints call and put prices across the underlying price for the default
//! contract (K=100, T=1y, r=5%, sigma=20%), split into intrinsic and time value.

use anyhow::Result;
use option_curves::{
    default_configs, price, price_curves, MarketInputs, OptionParameters, OptionType,
};

fn main() -> Result<()> {
    env_logger::init();

    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    let config = default_configs::coarse();
    let inputs: MarketInputs = config.resolve(&config.default_selection())?;
    let domain = config.domain.values()?;

    println!(
        "K = {}, T = {}y, r = {:.2}%, sigma = {:.2}%",
        inputs.strike_price,
        inputs.years_to_exp,
        inputs.r * 100.0,
        inputs.sigma * 100.0
    );

    // Single evaluations
    let atm = OptionParameters::new(
        100.0,
        inputs.strike_price,
        inputs.years_to_exp,
        inputs.r,
        inputs.sigma,
    )?;
    println!("\nAt the money (S = 100):");
    println!("  call: {:.4}", price(&atm, OptionType::Call)?);
    println!("  put:  {:.4}", price(&atm, OptionType::Put)?);

    // Curves across the domain
    let curves = price_curves(&domain, &inputs)?;
    let call_time = curves.call.time_values();
    let put_time = curves.put.time_values();

    println!(
        "\n{:>8} {:>10} {:>10} {:>10} {:>10}",
        "S", "Call", "Call TV", "Put", "Put TV"
    );
    println!("{}", "-".repeat(52));
    for (i, (call, put)) in curves.call.iter().zip(curves.put.iter()).enumerate() {
        println!(
            "{:>8.2} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
            call.underlying_price, call.price, call_time[i], put.price, put_time[i]
        );
    }

    // Invalid input is reported, not priced
    let bad = OptionParameters { sigma: 0.0, ..atm };
    if let Err(e) = price(&bad, OptionType::Call) {
        println!("\nZero volatility rejected: {}", e);
    }

    Ok(())
}
