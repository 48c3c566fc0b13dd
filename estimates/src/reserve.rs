use cast::i128;
use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::contracttype;

use crate::{
    constants::{
        BORROW_COMPOUNDING_PERIODS, RATE_DECIMALS, SCALAR_7, SCALAR_9, SUPPLY_COMPOUNDING_PERIODS,
    },
    emissions::{self, ReserveEmissionsConfig},
    errors::EstimateError,
    fixed_point::to_float,
    interest::{apr_to_apy, compute_borrow_rate, compute_supply_rate, ReserveRateConfig},
};

/// The configuration information about a reserve asset
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ReserveConfig {
    pub index: u32,      // the index of the reserve in the list
    pub decimals: u32,   // the decimals used in both the bToken and underlying contract
    pub c_factor: u32,   // the collateral factor for the reserve scaled expressed in 7 decimals
    pub l_factor: u32,   // the liability factor for the reserve scaled expressed in 7 decimals
    pub util: u32,       // the target utilization rate scaled expressed in 7 decimals
    pub max_util: u32,   // the maximum allowed utilization rate scaled expressed in 7 decimals
    pub r_base: u32,     // the R0 value in the interest rate formula scaled expressed in 7 decimals
    pub r_one: u32,      // the R1 value in the interest rate formula scaled expressed in 7 decimals
    pub r_two: u32,      // the R2 value in the interest rate formula scaled expressed in 7 decimals
    pub r_three: u32,    // the R3 value in the interest rate formula scaled expressed in 7 decimals
    pub reactivity: u32, // the reactivity constant for the reserve scaled expressed in 9 decimals
}

/// The data for a reserve asset
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ReserveData {
    pub d_rate: i128, // the conversion rate from dToken to underlying expressed in 9 decimals
    pub b_rate: i128, // the conversion rate from bToken to underlying expressed in 9 decimals
    pub ir_mod: i128, // the interest rate curve modifier expressed in 9 decimals
    pub b_supply: i128, // the total supply of b tokens
    pub d_supply: i128, // the total supply of d tokens
    pub backstop_credit: i128, // the amount of underlying tokens currently owed to the backstop
    pub last_time: u64, // the last block the data was updated
}

/// The reserve token an emission stream is paid to
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ReserveTokenType {
    DToken = 0,
    BToken = 1,
}

/// Human-facing economics of a reserve. Rates are raw fractions (1.0 = 100%).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReserveEstimate {
    pub utilization: f64,
    pub borrow_apr: f64,
    pub supply_apr: f64,
    pub borrow_apy: f64,
    pub supply_apy: f64,
    pub total_supply: f64,      // in underlying tokens
    pub total_liabilities: f64, // in underlying tokens
}

/// A snapshot of a reserve's config and data
#[derive(Clone, Debug)]
pub struct Reserve {
    pub config: ReserveConfig,
    pub data: ReserveData,
}

impl Reserve {
    pub fn new(config: ReserveConfig, data: ReserveData) -> Reserve {
        Reserve { config, data }
    }

    /// Fetch the total liabilities for the reserve in underlying tokens
    pub fn total_liabilities(&self) -> Result<i128, EstimateError> {
        self.data
            .d_supply
            .fixed_mul_ceil(self.data.d_rate, SCALAR_9)
            .ok_or(EstimateError::OverflowError)
    }

    /// Fetch the total supply for the reserve in underlying tokens
    pub fn total_supply(&self) -> Result<i128, EstimateError> {
        self.data
            .b_supply
            .fixed_mul_floor(self.data.b_rate, SCALAR_9)
            .ok_or(EstimateError::OverflowError)
    }

    /// Fetch the current utilization rate for the reserve normalized to 7 decimals
    pub fn utilization(&self) -> Result<i128, EstimateError> {
        let total_supply = self.total_supply()?;
        if total_supply == 0 {
            return Ok(0);
        }
        self.total_liabilities()?
            .fixed_div_floor(total_supply, SCALAR_7)
            .ok_or(EstimateError::OverflowError)
    }

    /// Estimate the utilization rate after a change to the reserve's supply and liabilities
    ///
    /// Returns 0 if the projected supply is not positive. A repayment larger than the
    /// outstanding liabilities clears them, so the result is never negative.
    ///
    /// ### Arguments
    /// * `supplied` - The amount of underlying added to the supply, negative for a withdrawal
    /// * `borrowed` - The amount of underlying added to the liabilities, negative for a repayment
    pub fn projected_utilization(
        &self,
        supplied: i128,
        borrowed: i128,
    ) -> Result<f64, EstimateError> {
        let total_supply = self
            .total_supply()?
            .checked_add(supplied)
            .ok_or(EstimateError::OverflowError)?;
        let total_liabilities = self
            .total_liabilities()?
            .checked_add(borrowed)
            .ok_or(EstimateError::OverflowError)?
            .max(0);
        if total_supply <= 0 {
            return Ok(0.0);
        }
        Ok(to_float(total_liabilities, self.config.decimals)
            / to_float(total_supply, self.config.decimals))
    }

    /// Estimate the current rates of the reserve
    ///
    /// ### Arguments
    /// * `bstop_rate` - The share of interest taken by the backstop (7 decimals)
    ///
    /// ### Errors
    /// If the reserve config has an invalid target utilization or the totals overflow
    pub fn estimate(&self, bstop_rate: u32) -> Result<ReserveEstimate, EstimateError> {
        let rate_config = ReserveRateConfig::from_reserve(&self.config, self.data.ir_mod)?;
        let utilization = to_float(self.utilization()?, RATE_DECIMALS);

        let borrow_apr = compute_borrow_rate(utilization, &rate_config);
        let supply_apr = compute_supply_rate(
            borrow_apr,
            utilization,
            to_float(i128(bstop_rate), RATE_DECIMALS),
        );
        Ok(ReserveEstimate {
            utilization,
            borrow_apr,
            supply_apr,
            borrow_apy: apr_to_apy(borrow_apr, BORROW_COMPOUNDING_PERIODS),
            supply_apy: apr_to_apy(supply_apr, SUPPLY_COMPOUNDING_PERIODS),
            total_supply: to_float(self.total_supply()?, self.config.decimals),
            total_liabilities: to_float(self.total_liabilities()?, self.config.decimals),
        })
    }

    /// Estimate the BLND emitted per year for each underlying token of one of the reserve's tokens
    ///
    /// Returns None if the reserve has no underlying backing `token`
    ///
    /// ### Arguments
    /// * `token` - The reserve token the emissions are paid to
    /// * `config` - The emission config for `token`
    /// * `now` - The current ledger timestamp
    pub fn emissions_per_asset_per_year(
        &self,
        token: ReserveTokenType,
        config: &ReserveEmissionsConfig,
        now: u64,
    ) -> Result<Option<f64>, EstimateError> {
        let total_underlying = match token {
            ReserveTokenType::DToken => self.total_liabilities()?,
            ReserveTokenType::BToken => self.total_supply()?,
        };
        Ok(emissions::emissions_per_asset_per_year(
            config,
            total_underlying,
            self.config.decimals,
            now,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils;

    fn assert_approx_eq(a: f64, b: f64) {
        assert!(
            (a - b).abs() < 1e-9,
            "assertion failed: `(left != right)` (left: `{:?}`, right: `{:?}`)",
            a,
            b
        );
    }

    #[test]
    fn test_totals() {
        let (reserve_config, mut reserve_data) = testutils::default_reserve_meta();
        reserve_data.d_rate = 1_345_678_123;
        reserve_data.b_rate = 1_123_456_789;
        reserve_data.d_supply = 65_0000000;
        reserve_data.b_supply = 99_0000000;
        let reserve = Reserve::new(reserve_config, reserve_data);

        assert_eq!(reserve.total_liabilities(), Ok(87_4690780));
        assert_eq!(reserve.total_supply(), Ok(111_2222221));
    }

    #[test]
    fn test_utilization() {
        let (reserve_config, reserve_data) = testutils::default_reserve_meta();
        let reserve = Reserve::new(reserve_config, reserve_data);

        assert_eq!(reserve.utilization(), Ok(0_7500000));
    }

    #[test]
    fn test_utilization_zero_supply() {
        let (reserve_config, mut reserve_data) = testutils::default_reserve_meta();
        reserve_data.b_supply = 0;
        reserve_data.d_supply = 0;
        let reserve = Reserve::new(reserve_config, reserve_data);

        assert_eq!(reserve.utilization(), Ok(0));
    }

    #[test]
    fn test_totals_overflow() {
        let (reserve_config, mut reserve_data) = testutils::default_reserve_meta();
        reserve_data.d_supply = i128::MAX;
        reserve_data.d_rate = 2_000_000_000;
        let reserve = Reserve::new(reserve_config, reserve_data);

        assert_eq!(reserve.total_liabilities(), Err(EstimateError::OverflowError));
        assert_eq!(reserve.utilization(), Err(EstimateError::OverflowError));
    }

    #[test]
    fn test_projected_utilization() {
        let (reserve_config, reserve_data) = testutils::default_reserve_meta();
        let reserve = Reserve::new(reserve_config, reserve_data);

        assert_approx_eq(reserve.projected_utilization(0, 0).unwrap(), 0.75);
        assert_approx_eq(reserve.projected_utilization(0, 15_0000000).unwrap(), 0.9);
        assert_approx_eq(reserve.projected_utilization(50_0000000, 0).unwrap(), 0.5);
        assert_approx_eq(reserve.projected_utilization(0, -75_0000000).unwrap(), 0.0);
    }

    #[test]
    fn test_projected_utilization_full_withdrawal() {
        let (reserve_config, reserve_data) = testutils::default_reserve_meta();
        let reserve = Reserve::new(reserve_config, reserve_data);

        assert_eq!(reserve.projected_utilization(-100_0000000, 0), Ok(0.0));
    }

    #[test]
    fn test_projected_utilization_over_repayment() {
        let (reserve_config, reserve_data) = testutils::default_reserve_meta();
        let reserve = Reserve::new(reserve_config, reserve_data);

        assert_eq!(reserve.projected_utilization(0, -100_0000000), Ok(0.0));
        assert_eq!(reserve.projected_utilization(20_0000000, -76_0000000), Ok(0.0));
    }

    #[test]
    fn test_estimate() {
        let (reserve_config, reserve_data) = testutils::default_reserve_meta();
        let reserve = Reserve::new(reserve_config, reserve_data);

        let estimate = reserve.estimate(0_2000000).unwrap();

        assert_approx_eq(estimate.utilization, 0.75);
        // at target: r_base + r_one
        assert_approx_eq(estimate.borrow_apr, 0.06);
        assert_approx_eq(estimate.supply_apr, 0.036);
        assert_approx_eq(estimate.borrow_apy, apr_to_apy(0.06, 365));
        assert_approx_eq(estimate.supply_apy, apr_to_apy(0.036, 52));
        assert_approx_eq(estimate.total_supply, 100.0);
        assert_approx_eq(estimate.total_liabilities, 75.0);
    }

    #[test]
    fn test_estimate_applies_ir_mod() {
        let (reserve_config, mut reserve_data) = testutils::default_reserve_meta();
        reserve_data.ir_mod = 1_500_000_000;
        let reserve = Reserve::new(reserve_config, reserve_data);

        let estimate = reserve.estimate(0).unwrap();

        assert_approx_eq(estimate.borrow_apr, 0.09);
        assert_approx_eq(estimate.supply_apr, 0.0675);
    }

    #[test]
    fn test_estimate_invalid_config() {
        let (mut reserve_config, reserve_data) = testutils::default_reserve_meta();
        reserve_config.util = 0;
        let reserve = Reserve::new(reserve_config, reserve_data);

        assert_eq!(
            reserve.estimate(0_2000000),
            Err(EstimateError::InvalidReserveConfig)
        );
    }

    #[test]
    fn test_emissions_per_asset_per_year() {
        let (reserve_config, reserve_data) = testutils::default_reserve_meta();
        let reserve = Reserve::new(reserve_config, reserve_data);
        let emis_config = ReserveEmissionsConfig {
            expiration: 1000,
            eps: 0_0100000,
        };

        // 0.01 BLND per second over 75 tokens borrowed
        let d_emissions = reserve
            .emissions_per_asset_per_year(ReserveTokenType::DToken, &emis_config, 500)
            .unwrap()
            .unwrap();
        assert_approx_eq(d_emissions, 0.01 * 31536000.0 / 75.0);

        // 0.01 BLND per second over 100 tokens supplied
        let b_emissions = reserve
            .emissions_per_asset_per_year(ReserveTokenType::BToken, &emis_config, 500)
            .unwrap()
            .unwrap();
        assert_approx_eq(b_emissions, 3153.6);
    }

    #[test]
    fn test_emissions_per_asset_per_year_no_liabilities() {
        let (reserve_config, mut reserve_data) = testutils::default_reserve_meta();
        reserve_data.d_supply = 0;
        let reserve = Reserve::new(reserve_config, reserve_data);
        let emis_config = ReserveEmissionsConfig {
            expiration: 1000,
            eps: 0_0100000,
        };

        let d_emissions = reserve
            .emissions_per_asset_per_year(ReserveTokenType::DToken, &emis_config, 500)
            .unwrap();
        assert_eq!(d_emissions, None);
    }
}
