mod constants;
mod emissions;
mod errors;
mod fixed_point;
mod interest;
mod oracle;
mod reserve;
pub mod testutils;

pub use constants::*;
pub use emissions::{
    emissions_per_asset_per_year, estimate_emissions_apr, BackstopToken, BackstopTokenPriceRatio,
    ReserveEmissionsConfig,
};
pub use errors::EstimateError;
pub use fixed_point::{to_fixed, to_float};
pub use interest::{apr_to_apy, compute_borrow_rate, compute_supply_rate, ReserveRateConfig};
pub use oracle::asset_price;
pub use reserve::{Reserve, ReserveConfig, ReserveData, ReserveEstimate, ReserveTokenType};
