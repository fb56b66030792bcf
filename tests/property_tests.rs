//! Property-based tests using proptest.
//!
//! Parity, monotonicity and sweep ordering must hold for every valid input,
//! not just the reference scenarios.


use option_curves::{linspace, sweep, MarketInputs, OptionParameters, OptionType};
use proptest::prelude::*;
use test_utils::{approx_eq_rel, price_of};

fn valid_params() -> impl Strategy<Value = OptionParameters> {
    (
        1.0_f64..500.0,
        1.0_f64..500.0,
        0.01_f64..5.0,
        -0.05_f64..0.20,
        0.05_f64..1.0,
    )
        .prop_map(|(s, k, t, r, sigma)| OptionParameters {
            underlying_price: s,
            strike_price: k,
            years_to_exp: t,
            r,
            sigma,
        })
}

fn valid_inputs() -> impl Strategy<Value = MarketInputs> {
    (50.0_f64..150.0, 0.1_f64..2.0, 0.0_f64..0.10, 0.10_f64..0.50).prop_map(
        |(strike_price, years_to_exp, r, sigma)| MarketInputs {
            strike_price,
            years_to_exp,
            r,
            sigma,
        },
    )
}

proptest! {
    /// call - put == S - K*exp(-r*T)
    #[test]
    fn put_call_parity_holds(params in valid_params()) {
        let call = price_of(&params, OptionType::Call);
        let put = price_of(&params, OptionType::Put);
        let forward_gap = params.underlying_price
            - params.strike_price * (-params.r * params.years_to_exp).exp();

        prop_assert!(
            approx_eq_rel(call - put, forward_gap, 1e-9),
            "call={} put={} gap={}",
            call,
            put,
            forward_gap
        );
    }

    /// Prices are finite for every valid input.
    #[test]
    fn prices_are_finite(params in valid_params()) {
        prop_assert!(price_of(&params, OptionType::Call).is_finite());
        prop_assert!(price_of(&params, OptionType::Put).is_finite());
    }

    /// Call non-decreasing and put non-increasing in S.
    #[test]
    fn monotone_in_underlying(inputs in valid_inputs(), start in 20.0_f64..100.0, width in 1.0_f64..200.0) {
        let domain = linspace(start, start + width, 64);
        let calls = sweep(&domain, &inputs, OptionType::Call).unwrap().prices();
        let puts = sweep(&domain, &inputs, OptionType::Put).unwrap().prices();

        for w in calls.windows(2) {
            prop_assert!(w[1] >= w[0] - 1e-12, "call decreased: {} -> {}", w[0], w[1]);
        }
        for w in puts.windows(2) {
            prop_assert!(w[1] <= w[0] + 1e-12, "put increased: {} -> {}", w[0], w[1]);
        }
    }

    /// Output length and S-components equal the domain, in order.
    #[test]
    fn sweep_preserves_domain(
        inputs in valid_inputs(),
        domain in prop::collection::vec(0.5_f64..1000.0, 1..=10_000),
    ) {
        for ty in [OptionType::Call, OptionType::Put] {
            let curve = sweep(&domain, &inputs, ty).unwrap();
            prop_assert_eq!(curve.len(), domain.len());
            prop_assert_eq!(curve.underlying_prices(), domain.clone());
        }
    }
}
