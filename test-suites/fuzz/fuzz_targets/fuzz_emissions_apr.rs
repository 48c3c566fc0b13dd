#![no_main]

use estimates::{
    asset_price, emissions_per_asset_per_year, estimate_emissions_apr, BackstopToken,
    ReserveEmissionsConfig,
};
use libfuzzer_sys::fuzz_target;
use sep_40_oracle::PriceData;
use soroban_sdk::testutils::arbitrary::arbitrary::{self, Arbitrary, Unstructured};
use test_suites::assertions::assert_approx_eq_rel;

#[derive(Arbitrary, Debug)]
struct Input {
    #[arbitrary(with = |u: &mut Unstructured| u.int_in_range(1..=100_000_000_0000000))]
    blnd: i128,
    #[arbitrary(with = |u: &mut Unstructured| u.int_in_range(1..=100_000_000_0000000))]
    usdc: i128,
    #[arbitrary(with = |u: &mut Unstructured| u.int_in_range(0..=10_0000000))]
    eps: u64,
    #[arbitrary(with = |u: &mut Unstructured| u.int_in_range(1..=1_000_000_000_000_000_000))]
    total_underlying: i128,
    #[arbitrary(with = |u: &mut Unstructured| u.int_in_range(1..=100_000_0000000))]
    price: i128,
}

fuzz_target!(|input: Input| {
    let backstop_token = BackstopToken {
        blnd: input.blnd,
        usdc: input.usdc,
        shares: 1_0000000,
    };
    let ratio = backstop_token.price_ratio();
    let emis_config = ReserveEmissionsConfig {
        expiration: u64::MAX,
        eps: input.eps,
    };
    let price = asset_price(
        &PriceData {
            price: input.price,
            timestamp: 0,
        },
        7,
    );

    let emissions = emissions_per_asset_per_year(&emis_config, input.total_underlying, 7, 0);
    let emissions = match emissions {
        Some(emissions) => emissions,
        None => panic!("positive supply returned no emissions: {:?}", input),
    };
    let apr = estimate_emissions_apr(emissions, &ratio, price);
    assert!(apr.is_finite() && apr >= 0.0, "invalid apr {} for {:?}", apr, input);

    // linear in emissions, inverse in price
    assert_approx_eq_rel(
        estimate_emissions_apr(emissions * 2.0, &ratio, price),
        apr * 2.0,
        1e-10,
    );
    assert_approx_eq_rel(
        estimate_emissions_apr(emissions, &ratio, price * 2.0),
        apr / 2.0,
        1e-10,
    );
});
