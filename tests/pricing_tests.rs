
use option_curves::{
    norm_cdf, price, sweep, OptionParameters, OptionType, PricingError, SampleDomain,
};
use statrs::distribution::{ContinuousCDF, Normal};
use test_utils::{approx_eq_rel, price_of, reference_inputs, reference_params};

/// At-the-money one-year option at 5% rate and 20% volatility.
/// Standard textbook values: call 10.4506, put 5.5735.
#[test]
fn test_atm_reference_scenario() {
    let params = reference_params(100.0);
    let call = price_of(&params, OptionType::Call);
    let put = price_of(&params, OptionType::Put);

    assert!((call - 10.4506).abs() < 1e-4, "call = {}", call);
    assert!((put - 5.5735).abs() < 1e-4, "put = {}", put);
}

/// Deep in-the-money call: intrinsic value 20 plus time value.
#[test]
fn test_itm_call_scenario() {
    let call = price_of(&reference_params(120.0), OptionType::Call);
    assert!((call - 26.1690).abs() < 1e-4, "call = {}", call);
    assert!(call - 20.0 > 0.0, "time value should be positive");
}

/// Zero strike must be rejected rather than priced as NaN.
#[test]
fn test_zero_strike_fails_with_invalid_parameter() {
    let params = OptionParameters {
        strike_price: 0.0,
        ..reference_params(100.0)
    };
    for ty in [OptionType::Call, OptionType::Put] {
        match price(&params, ty) {
            Err(PricingError::InvalidParameter { name, .. }) => assert_eq!(name, "strike_price"),
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }
}

/// Non-positive underlying prices are domain errors; non-finite ones are invalid.
#[test]
fn test_underlying_domain() {
    assert!(matches!(
        price(&reference_params(0.0), OptionType::Call),
        Err(PricingError::DomainError { .. })
    ));
    assert!(matches!(
        price(&reference_params(-10.0), OptionType::Put),
        Err(PricingError::DomainError { .. })
    ));
    assert!(matches!(
        price(&reference_params(f64::NAN), OptionType::Put),
        Err(PricingError::InvalidParameter { .. })
    ));
}

/// libm's erfc-based CDF against statrs' normal distribution, both tails.
#[test]
fn test_norm_cdf_matches_statrs() {
    let normal = Normal::new(0.0, 1.0).unwrap();
    let mut x = -8.0;
    while x <= 8.0 {
        let ours = norm_cdf(x);
        let reference = normal.cdf(x);
        assert!(
            (ours - reference).abs() < 1e-14,
            "x={}: {} vs {}",
            x,
            ours,
            reference
        );
        x += 0.125;
    }
}

/// As T -> 0 prices collapse to intrinsic value.
#[test]
fn test_short_expiry_converges_to_intrinsic() {
    let inputs = reference_inputs();
    for s in [60.0, 80.0, 95.0, 105.0, 120.0, 140.0] {
        let params = OptionParameters {
            years_to_exp: 1e-6,
            ..inputs.at(s)
        };
        for ty in [OptionType::Call, OptionType::Put] {
            let p = price_of(&params, ty);
            let intrinsic = ty.intrinsic_value(s, params.strike_price);
            assert!(
                (p - intrinsic).abs() < 1e-3,
                "{} S={}: price {} vs intrinsic {}",
                ty,
                s,
                p,
                intrinsic
            );
        }
    }

    // At the money only time value remains, which vanishes like sqrt(T)
    let atm = OptionParameters {
        years_to_exp: 1e-6,
        ..inputs.at(100.0)
    };
    assert!(price_of(&atm, OptionType::Call) < 1e-2);
    assert!(price_of(&atm, OptionType::Put) < 1e-2);
}

/// The put branch agrees with parity applied to the call branch.
#[test]
fn test_put_branch_consistent_with_call_branch() {
    for (s, k, t, r, sigma) in [
        (100.0, 100.0, 1.0, 0.05, 0.20),
        (50.0, 150.0, 2.0, 0.10, 0.50),
        (150.0, 50.0, 0.1, 0.0, 0.10),
        (73.2, 91.0, 0.7, -0.01, 0.33),
    ] {
        let params = OptionParameters::new(s, k, t, r, sigma).unwrap();
        let call = price_of(&params, OptionType::Call);
        let put = price_of(&params, OptionType::Put);
        let via_parity = k * (-r * t).exp() - s + call;
        assert!(
            approx_eq_rel(put, via_parity, 1e-9),
            "S={} K={}: put {} vs parity {}",
            s,
            k,
            put,
            via_parity
        );
    }
}

/// Reference chart sweep: 100 points from 50 to 150, both curves monotone.
#[test]
fn test_reference_sweep_shape() {
    let domain = SampleDomain::default().values().unwrap();
    let inputs = reference_inputs();
    let calls = sweep(&domain, &inputs, OptionType::Call).unwrap();
    let puts = sweep(&domain, &inputs, OptionType::Put).unwrap();

    assert_eq!(calls.len(), 100);
    assert_eq!(calls.points[0].underlying_price, 50.0);
    assert_eq!(calls.points[99].underlying_price, 150.0);

    assert!(calls.prices().windows(2).all(|w| w[1] >= w[0]));
    assert!(puts.prices().windows(2).all(|w| w[1] <= w[0]));

    // Calls never trade below intrinsic value on a non-dividend stock
    for (p, intrinsic) in calls.prices().iter().zip(calls.intrinsic_values()) {
        assert!(*p >= intrinsic - 1e-12);
    }
}
