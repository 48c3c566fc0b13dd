#![cfg(any(test, feature = "testutils"))]

use crate::{
    interest::ReserveRateConfig,
    reserve::{ReserveConfig, ReserveData},
};

pub fn default_reserve_meta() -> (ReserveConfig, ReserveData) {
    (
        ReserveConfig {
            decimals: 7,
            c_factor: 0_7500000,
            l_factor: 0_7500000,
            util: 0_7500000,
            max_util: 0_9500000,
            r_base: 0_0100000,
            r_one: 0_0500000,
            r_two: 0_5000000,
            r_three: 1_5000000,
            reactivity: 0_000_002_000, // 10e-5
            index: 0,
        },
        ReserveData {
            b_rate: 1_000_000_000,
            d_rate: 1_000_000_000,
            ir_mod: 1_000_000_000,
            b_supply: 100_0000000,
            d_supply: 75_0000000,
            last_time: 0,
            backstop_credit: 0,
        },
    )
}

/// A rate curve with an 80% target and a 95% kink rate of 35%
pub fn default_rate_config() -> ReserveRateConfig {
    ReserveRateConfig {
        base_rate: 0.01,
        target_util: 0.8,
        r_one: 0.04,
        r_two: 0.3,
        r_three: 1.0,
        ir_mod: 1.0,
    }
}
