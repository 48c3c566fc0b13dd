//! Estimates for BLND emissions paid to reserve tokens

use cast::{f64, i128};
use soroban_sdk::contracttype;

use crate::{
    constants::{BACKSTOP_TOKEN_DECIMALS, BLND_DECIMALS, BLND_WEIGHT, SECONDS_PER_YEAR, USDC_WEIGHT},
    fixed_point::to_float,
};

/// The configuration of emissions for the reserve b or d token
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ReserveEmissionsConfig {
    pub expiration: u64, // the timestamp the emissions stop at
    pub eps: u64,        // the BLND emitted per second expressed in 7 decimals
}

/// The underlying balances of the 80% BLND / 20% USDC backstop LP token
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct BackstopToken {
    pub blnd: i128,   // the BLND held by the LP expressed in 7 decimals
    pub usdc: i128,   // the USDC held by the LP expressed in 7 decimals
    pub shares: i128, // the total LP shares expressed in 7 decimals
}

/// The pooled amounts of the backstop LP, used to price BLND in USDC
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackstopTokenPriceRatio {
    pub usdc: f64,
    pub blnd: f64,
}

impl BackstopTokenPriceRatio {
    /// The spot price of BLND in USDC implied by the LP's weighted balances
    ///
    /// Undefined if `blnd` is zero
    pub fn usdc_per_blnd(&self) -> f64 {
        (self.usdc / USDC_WEIGHT) / (self.blnd / BLND_WEIGHT)
    }
}

impl BackstopToken {
    pub fn price_ratio(&self) -> BackstopTokenPriceRatio {
        BackstopTokenPriceRatio {
            usdc: to_float(self.usdc, BACKSTOP_TOKEN_DECIMALS),
            blnd: to_float(self.blnd, BACKSTOP_TOKEN_DECIMALS),
        }
    }

    /// The USDC value of a single LP share, or None if no shares exist
    pub fn lp_token_price(&self) -> Option<f64> {
        let shares = self.float_shares()?;
        Some((to_float(self.usdc, BACKSTOP_TOKEN_DECIMALS) / USDC_WEIGHT) / shares)
    }

    /// The BLND backing a single LP share, or None if no shares exist
    pub fn blnd_per_share(&self) -> Option<f64> {
        let shares = self.float_shares()?;
        Some(to_float(self.blnd, BACKSTOP_TOKEN_DECIMALS) / shares)
    }

    /// The USDC backing a single LP share, or None if no shares exist
    pub fn usdc_per_share(&self) -> Option<f64> {
        let shares = self.float_shares()?;
        Some(to_float(self.usdc, BACKSTOP_TOKEN_DECIMALS) / shares)
    }

    fn float_shares(&self) -> Option<f64> {
        if self.shares <= 0 {
            return None;
        }
        Some(to_float(self.shares, BACKSTOP_TOKEN_DECIMALS))
    }
}

/// Estimate the APR of BLND emissions relative to the value of the underlying asset
///
/// The result is a raw fraction (1.0 = 100%). Callers must only invoke this with a non-zero
/// BLND balance and asset price.
///
/// ### Arguments
/// * `emissions_per_asset_per_year` - The BLND emitted per year for each underlying token
/// * `backstop_token_ratio` - The pooled balances of the backstop LP
/// * `asset_price` - The USDC price of the underlying asset
pub fn estimate_emissions_apr(
    emissions_per_asset_per_year: f64,
    backstop_token_ratio: &BackstopTokenPriceRatio,
    asset_price: f64,
) -> f64 {
    let usdc_per_blnd = backstop_token_ratio.usdc_per_blnd();
    emissions_per_asset_per_year * usdc_per_blnd / asset_price
}

/// Estimate the BLND emitted per year for each underlying token backing a reserve token
///
/// Returns None if there is no underlying to emit to. Expired emissions return zero.
///
/// ### Arguments
/// * `config` - The emission config of the reserve token
/// * `total_underlying` - The underlying tokens represented by the reserve token's supply
/// * `decimals` - The decimals of the underlying
/// * `now` - The current ledger timestamp
pub fn emissions_per_asset_per_year(
    config: &ReserveEmissionsConfig,
    total_underlying: i128,
    decimals: u32,
    now: u64,
) -> Option<f64> {
    if total_underlying <= 0 {
        return None;
    }
    if now >= config.expiration {
        return Some(0.0);
    }
    let eps = to_float(i128(config.eps), BLND_DECIMALS);
    Some(eps * f64(SECONDS_PER_YEAR) / to_float(total_underlying, decimals))
}
