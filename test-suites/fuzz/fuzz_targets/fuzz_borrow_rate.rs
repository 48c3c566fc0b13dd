#![no_main]

use estimates::{compute_borrow_rate, ReserveConfig, ReserveRateConfig, UTIL_KINK};
use libfuzzer_sys::fuzz_target;
use soroban_sdk::testutils::arbitrary::arbitrary::{self, Arbitrary, Unstructured};
use test_suites::assertions::{assert_approx_eq_abs, assert_approx_eq_rel};

/// A reserve rate curve as the pool stores it, plus two utilization rates to compare
#[derive(Arbitrary, Debug)]
struct Input {
    #[arbitrary(with = |u: &mut Unstructured| u.int_in_range(1..=0_9499999))]
    util: u32,
    #[arbitrary(with = |u: &mut Unstructured| u.int_in_range(0..=1_0000000))]
    r_base: u32,
    #[arbitrary(with = |u: &mut Unstructured| u.int_in_range(0..=1_0000000))]
    r_one: u32,
    #[arbitrary(with = |u: &mut Unstructured| u.int_in_range(0..=5_0000000))]
    r_two: u32,
    #[arbitrary(with = |u: &mut Unstructured| u.int_in_range(0..=50_0000000))]
    r_three: u32,
    #[arbitrary(with = |u: &mut Unstructured| u.int_in_range(0_100_000_000..=10_000_000_000))]
    ir_mod: i128,
    #[arbitrary(with = |u: &mut Unstructured| u.int_in_range(0..=1_5000000))]
    util_a: u32,
    #[arbitrary(with = |u: &mut Unstructured| u.int_in_range(0..=1_5000000))]
    util_b: u32,
}

fuzz_target!(|input: Input| {
    let reserve_config = ReserveConfig {
        index: 0,
        decimals: 7,
        c_factor: 0_7500000,
        l_factor: 0_7500000,
        util: input.util,
        max_util: 0_9500000,
        r_base: input.r_base,
        r_one: input.r_one,
        r_two: input.r_two,
        r_three: input.r_three,
        reactivity: 0_000_002_000,
    };
    let config = match ReserveRateConfig::from_reserve(&reserve_config, input.ir_mod) {
        Ok(config) => config,
        Err(_) => panic!("valid reserve config rejected: {:?}", input),
    };

    let low = input.util_a.min(input.util_b) as f64 / 1e7;
    let high = input.util_a.max(input.util_b) as f64 / 1e7;
    let low_rate = compute_borrow_rate(low, &config);
    let high_rate = compute_borrow_rate(high, &config);

    // non-decreasing in utilization
    assert!(
        low_rate <= high_rate,
        "rate decreased from {} at {} to {} at {}",
        low_rate,
        low,
        high_rate,
        high
    );

    // the kink is only scaled by the modifier up to r_two
    let intersection = config.ir_mod * (config.base_rate + config.r_one + config.r_two);
    assert_approx_eq_abs(compute_borrow_rate(UTIL_KINK, &config), intersection, 1e-9);

    // doubling the modifier doubles the rate below the kink
    if low <= UTIL_KINK {
        let mut doubled = config;
        doubled.ir_mod = config.ir_mod * 2.0;
        assert_approx_eq_rel(compute_borrow_rate(low, &doubled), low_rate * 2.0, 1e-10);
    }
});
