// Demo: plot_price_curves.rs
// Sweeps Black-Scholes call and put prices across the underlying price and
// writes the chart and its data.
//
// Usage:
//     cargo run --example plot_price_curves -- <K> <T_years> <r_pct> <sigma_pct> [config.toml] [--explain]
//
// Example (the page defaults):
//     cargo run --example plot_price_curves -- 100 1.0 5.0 20.0
//
// Writes option_prices.svg and option_prices.csv in the working directory.
// RUST_LOG overrides the log level derived from the config's verbosity.

use std::env;

use anyhow::{Context, Result};
use option_curves::{
    build_chart_data, default_configs, render_svg, write_csv_file, ChartConfig, Selection,
    EXPLANATION,
};

fn parse_number(args: &[String], index: usize, name: &str) -> Result<f64> {
    args[index]
        .parse::<f64>()
        .with_context(|| format!("{} must be a number, got {:?}", name, args[index]))
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().collect();
    let explain = if let Some(pos) = args.iter().position(|a| a == "--explain") {
        args.remove(pos);
        true
    } else {
        false
    };

    if args.len() < 5 {
        eprintln!(
            "Usage: {} <K> <T_years> <r_pct> <sigma_pct> [config.toml] [--explain]\nExample: {} 100 1.0 5.0 20.0",
            args[0], args[0]
        );
        std::process::exit(1);
    }

    let config = match args.get(5) {
        Some(path) => ChartConfig::from_file(path)?,
        None => default_configs::reference(),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter()))
        .init();

    if explain {
        println!("{}", EXPLANATION);
    }

    let selection = Selection {
        strike_price: parse_number(&args, 1, "K")?,
        years_to_exp: parse_number(&args, 2, "T")?,
        r_pct: parse_number(&args, 3, "r")?,
        sigma_pct: parse_number(&args, 4, "sigma")?,
    };

    let curves =
        build_chart_data(&config, &selection).context("cannot price with these parameters")?;
    let inputs = curves.call.inputs;

    println!("Option Prices vs. Underlying Stock Price");
    println!("=======================================");
    println!(
        "K = {:.0}, T = {:.1}y, r = {:.1}%, sigma = {:.1}%",
        inputs.strike_price,
        inputs.years_to_exp,
        inputs.r * 100.0,
        inputs.sigma * 100.0
    );
    if let (Some((s_min, s_max)), Some((p_min, p_max))) =
        (curves.underlying_range(), curves.price_range())
    {
        println!(
            "{} samples, S in [{:.2}, {:.2}], prices in [{:.4}, {:.4}]",
            curves.call.len(),
            s_min,
            s_max,
            p_min,
            p_max
        );
    }

    render_svg(&curves, "option_prices.svg", &config.render)?;
    write_csv_file(&curves, "option_prices.csv")?;

    println!("Chart saved to option_prices.svg");
    println!("Data saved to option_prices.csv");
    Ok(())
}
