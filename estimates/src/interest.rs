use cast::{f64, i128};

use crate::{
    constants::{IR_MOD_DECIMALS, RATE_DECIMALS, SCALAR_7, UTIL_KINK},
    errors::EstimateError,
    fixed_point::to_float,
    reserve::ReserveConfig,
};

/// The interest rate curve of a reserve at a point in time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReserveRateConfig {
    pub base_rate: f64,   // the rate at zero utilization
    pub target_util: f64, // the target utilization rate, exclusive of 0 and 1
    pub r_one: f64,       // the rate added between zero and target utilization
    pub r_two: f64,       // the rate added between target and 95% utilization
    pub r_three: f64,     // the rate added between 95% and 100% utilization
    pub ir_mod: f64,      // the current interest rate curve modifier
}

impl ReserveRateConfig {
    /// Build the rate curve from a reserve's on-chain config and its current rate modifier
    ///
    /// ### Arguments
    /// * `config` - The reserve config
    /// * `ir_mod` - The current interest rate modifier of the reserve (9 decimals)
    ///
    /// ### Errors
    /// If the target utilization is not between 0 and 1, exclusive
    pub fn from_reserve(config: &ReserveConfig, ir_mod: i128) -> Result<Self, EstimateError> {
        if config.util == 0 || i128(config.util) >= SCALAR_7 {
            return Err(EstimateError::InvalidReserveConfig);
        }
        Ok(ReserveRateConfig {
            base_rate: to_float(i128(config.r_base), RATE_DECIMALS),
            target_util: to_float(i128(config.util), RATE_DECIMALS),
            r_one: to_float(i128(config.r_one), RATE_DECIMALS),
            r_two: to_float(i128(config.r_two), RATE_DECIMALS),
            r_three: to_float(i128(config.r_three), RATE_DECIMALS),
            ir_mod: to_float(ir_mod, IR_MOD_DECIMALS),
        })
    }
}

/// Calculates the borrow interest rate of a reserve at the given utilization
///
/// The rate modifier scales the curve up to the 95% kink. Past the kink the third slope is
/// added unmodified. Utilization outside of [0, 1] extrapolates the active segment.
///
/// ### Arguments
/// * `util` - The utilization rate to estimate the rate at
/// * `config` - The reserve's rate curve. `target_util` must be non-zero.
pub fn compute_borrow_rate(util: f64, config: &ReserveRateConfig) -> f64 {
    if util <= config.target_util {
        let util_scalar = util / config.target_util;
        let base_rate = util_scalar * config.r_one + config.base_rate;

        base_rate * config.ir_mod
    } else if util <= UTIL_KINK {
        let util_scalar = (util - config.target_util) / (UTIL_KINK - config.target_util);
        let base_rate = util_scalar * config.r_two + config.r_one + config.base_rate;

        base_rate * config.ir_mod
    } else {
        let util_scalar = (util - UTIL_KINK) / (1.0 - UTIL_KINK);
        let extra_rate = util_scalar * config.r_three;

        let intersection = config.ir_mod * (config.r_two + config.r_one + config.base_rate);
        extra_rate + intersection
    }
}

/// Calculates the interest rate earned by suppliers
///
/// ### Arguments
/// * `borrow_rate` - The borrow interest rate of the reserve
/// * `util` - The utilization rate of the reserve
/// * `bstop_rate` - The share of interest taken by the backstop
pub fn compute_supply_rate(borrow_rate: f64, util: f64, bstop_rate: f64) -> f64 {
    borrow_rate * util * (1.0 - bstop_rate)
}

/// Convert an APR into an APY compounded `periods` times per year
pub fn apr_to_apy(apr: f64, periods: u32) -> f64 {
    (1.0 + apr / f64(periods)).powi(periods as i32) - 1.0
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
    fn test_compute_borrow_rate_under_target() {
        let config = testutils::default_rate_config();

        assert_approx_eq(compute_borrow_rate(0.4, &config), 0.03);
        assert_approx_eq(compute_borrow_rate(0.0, &config), 0.01);
    }

    #[test]
    fn test_compute_borrow_rate_at_target() {
        let config = testutils::default_rate_config();

        assert_approx_eq(compute_borrow_rate(0.8, &config), 0.05);
    }

    #[test]
    fn test_compute_borrow_rate_over_target() {
        let config = testutils::default_rate_config();

        // halfway between target and the kink
        assert_approx_eq(compute_borrow_rate(0.875, &config), 0.2);
        assert_approx_eq(compute_borrow_rate(0.95, &config), 0.35);
    }

    #[test]
    fn test_compute_borrow_rate_over_95() {
        let config = testutils::default_rate_config();

        assert_approx_eq(compute_borrow_rate(0.975, &config), 0.85);
        assert_approx_eq(compute_borrow_rate(1.0, &config), 1.35);
    }

    #[test]
    fn test_compute_borrow_rate_extrapolates() {
        let config = testutils::default_rate_config();

        assert_approx_eq(compute_borrow_rate(1.05, &config), 2.35);
        assert_approx_eq(compute_borrow_rate(-0.4, &config), -0.01);
    }

    #[test]
    fn test_compute_borrow_rate_ir_mod_excludes_r_three() {
        let mut config = testutils::default_rate_config();
        config.ir_mod = 2.0;

        assert_approx_eq(compute_borrow_rate(0.4, &config), 0.06);
        assert_approx_eq(compute_borrow_rate(0.95, &config), 0.7);
        // only the intersection at the kink is modified
        assert_approx_eq(compute_borrow_rate(1.0, &config), 1.7);
    }

    #[test]
    fn test_compute_borrow_rate_zero_target_util() {
        let mut config = testutils::default_rate_config();
        config.target_util = 0.0;

        assert!(compute_borrow_rate(0.0, &config).is_nan());
    }

    #[test]
    fn test_from_reserve() {
        let (reserve_config, reserve_data) = testutils::default_reserve_meta();

        let config = ReserveRateConfig::from_reserve(&reserve_config, reserve_data.ir_mod).unwrap();

        assert_approx_eq(config.base_rate, 0.01);
        assert_approx_eq(config.target_util, 0.75);
        assert_approx_eq(config.r_one, 0.05);
        assert_approx_eq(config.r_two, 0.5);
        assert_approx_eq(config.r_three, 1.5);
        assert_approx_eq(config.ir_mod, 1.0);
    }

    #[test]
    fn test_from_reserve_scales_ir_mod() {
        let (reserve_config, _) = testutils::default_reserve_meta();

        let config = ReserveRateConfig::from_reserve(&reserve_config, 1_044_981_440).unwrap();

        assert_approx_eq(config.ir_mod, 1.04498144);
    }

    #[test]
    fn test_from_reserve_zero_util() {
        let (mut reserve_config, reserve_data) = testutils::default_reserve_meta();
        reserve_config.util = 0;

        let result = ReserveRateConfig::from_reserve(&reserve_config, reserve_data.ir_mod);

        assert_eq!(result, Err(EstimateError::InvalidReserveConfig));
    }

    #[test]
    fn test_from_reserve_full_util() {
        let (mut reserve_config, reserve_data) = testutils::default_reserve_meta();
        reserve_config.util = 1_0000000;

        let result = ReserveRateConfig::from_reserve(&reserve_config, reserve_data.ir_mod);

        assert_eq!(result, Err(EstimateError::InvalidReserveConfig));
    }

    #[test]
    fn test_compute_supply_rate() {
        assert_approx_eq(compute_supply_rate(0.1, 0.5, 0.2), 0.04);
        assert_approx_eq(compute_supply_rate(0.1, 0.0, 0.2), 0.0);
        assert_approx_eq(compute_supply_rate(0.1, 1.0, 0.0), 0.1);
    }

    #[test]
    fn test_apr_to_apy() {
        assert_approx_eq(apr_to_apy(0.0, 365), 0.0);
        assert_approx_eq(apr_to_apy(0.05, 1), 0.05);
        // (1 + 0.1 / 2)^2 - 1
        assert_approx_eq(apr_to_apy(0.1, 2), 0.1025);
        assert!(apr_to_apy(0.1, 52) > 0.1);
    }
}
