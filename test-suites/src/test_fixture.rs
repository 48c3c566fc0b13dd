use estimates::{BackstopToken, Reserve, ReserveConfig, ReserveData, ReserveEmissionsConfig};
use sep_40_oracle::PriceData;

pub use estimates::{SCALAR_7, SCALAR_9};

/// Sept 1st, 2015
pub const FIXTURE_TIMESTAMP: u64 = 1441065600;

pub const ONE_WEEK: u64 = 7 * 24 * 60 * 60;

#[repr(usize)]
#[derive(Clone, Copy, Debug)]
pub enum TokenIndex {
    STABLE = 0,
    XLM = 1,
    WETH = 2,
}

pub struct ReserveFixture {
    pub reserve: Reserve,
    pub price: PriceData,
    pub d_emissions: ReserveEmissionsConfig,
    pub b_emissions: ReserveEmissionsConfig,
}

/// A snapshot of a pool, as the dashboard would load it from the ledger
pub struct TestFixture {
    pub timestamp: u64,
    pub bstop_rate: u32,
    pub oracle_decimals: u32,
    pub backstop_token: BackstopToken,
    pub reserves: Vec<ReserveFixture>,
}

impl TestFixture {
    /// Create a new TestFixture for a pool
    ///
    /// Contains a STABLE (0, 6 decimals, under target), XLM (1, 7 decimals, over target) and
    /// wETH (2, 9 decimals, over 95%) reserve, priced by a 7 decimal oracle, and a backstop LP
    /// pricing BLND at 0.25 USDC.
    pub fn create() -> TestFixture {
        let stable = ReserveFixture {
            reserve: Reserve::new(
                ReserveConfig {
                    index: 0,
                    decimals: 6,
                    c_factor: 0_9500000,
                    l_factor: 0_9500000,
                    util: 0_8000000,
                    max_util: 0_9500000,
                    r_base: 0_0100000,
                    r_one: 0_0300000,
                    r_two: 0_2000000,
                    r_three: 1_0000000,
                    reactivity: 0_000_020_000,
                },
                ReserveData {
                    d_rate: 1_000_000_000,
                    b_rate: 1_000_000_000,
                    ir_mod: 1_000_000_000,
                    b_supply: 100_000_000000,
                    d_supply: 65_000_000000,
                    backstop_credit: 0,
                    last_time: FIXTURE_TIMESTAMP,
                },
            ),
            price: PriceData {
                price: 1_0000000,
                timestamp: FIXTURE_TIMESTAMP,
            },
            d_emissions: ReserveEmissionsConfig {
                expiration: FIXTURE_TIMESTAMP + ONE_WEEK,
                eps: 0_2000000,
            },
            b_emissions: ReserveEmissionsConfig {
                expiration: FIXTURE_TIMESTAMP + ONE_WEEK,
                eps: 0_1000000,
            },
        };
        let xlm = ReserveFixture {
            reserve: Reserve::new(
                ReserveConfig {
                    index: 1,
                    decimals: 7,
                    c_factor: 0_7500000,
                    l_factor: 0_7500000,
                    util: 0_7500000,
                    max_util: 0_9500000,
                    r_base: 0_0100000,
                    r_one: 0_0500000,
                    r_two: 0_5000000,
                    r_three: 1_5000000,
                    reactivity: 0_000_020_000,
                },
                ReserveData {
                    d_rate: 1_000_000_000,
                    b_rate: 1_000_000_000,
                    ir_mod: 1_100_000_000,
                    b_supply: 1_000_000_0000000,
                    d_supply: 800_000_0000000,
                    backstop_credit: 0,
                    last_time: FIXTURE_TIMESTAMP,
                },
            ),
            price: PriceData {
                price: 0_1000000,
                timestamp: FIXTURE_TIMESTAMP,
            },
            d_emissions: ReserveEmissionsConfig {
                expiration: FIXTURE_TIMESTAMP + ONE_WEEK,
                eps: 0_1500000,
            },
            b_emissions: ReserveEmissionsConfig {
                // already expired
                expiration: FIXTURE_TIMESTAMP,
                eps: 0_1000000,
            },
        };
        let weth = ReserveFixture {
            reserve: Reserve::new(
                ReserveConfig {
                    index: 2,
                    decimals: 9,
                    c_factor: 0_8000000,
                    l_factor: 0_8000000,
                    util: 0_6500000,
                    max_util: 0_9800000,
                    r_base: 0_0100000,
                    r_one: 0_0400000,
                    r_two: 0_3000000,
                    r_three: 1_0000000,
                    reactivity: 0_000_010_000,
                },
                ReserveData {
                    d_rate: 1_000_000_000,
                    b_rate: 1_000_000_000,
                    ir_mod: 1_000_000_000,
                    b_supply: 10_000_000_000_000,
                    d_supply: 9_700_000_000_000,
                    backstop_credit: 0,
                    last_time: FIXTURE_TIMESTAMP,
                },
            ),
            price: PriceData {
                price: 2000_0000000,
                timestamp: FIXTURE_TIMESTAMP,
            },
            d_emissions: ReserveEmissionsConfig {
                expiration: FIXTURE_TIMESTAMP + ONE_WEEK,
                eps: 0_0500000,
            },
            b_emissions: ReserveEmissionsConfig {
                expiration: FIXTURE_TIMESTAMP + ONE_WEEK,
                eps: 0_0500000,
            },
        };

        TestFixture {
            timestamp: FIXTURE_TIMESTAMP + 1000,
            bstop_rate: 0_1000000,
            oracle_decimals: 7,
            backstop_token: BackstopToken {
                blnd: 1_000_000_0000000,
                usdc: 62_500_0000000,
                shares: 100_000_0000000,
            },
            reserves: vec![stable, xlm, weth],
        }
    }

    pub fn reserve(&self, index: TokenIndex) -> &ReserveFixture {
        &self.reserves[index as usize]
    }
}
