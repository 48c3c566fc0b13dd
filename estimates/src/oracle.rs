use sep_40_oracle::PriceData;

use crate::fixed_point::to_float;

/// Fetch the USDC price of an asset from an oracle price
///
/// The price is not checked for staleness
///
/// ### Arguments
/// * `price` - The price data reported by the oracle
/// * `decimals` - The decimals the oracle reports prices in
pub fn asset_price(price: &PriceData, decimals: u32) -> f64 {
    to_float(price.price, decimals)
}
