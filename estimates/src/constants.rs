/********** Numbers **********/

/// Fixed-point scalar for 9 decimal numbers
pub const SCALAR_9: i128 = 1_000_000_000;

/// Fixed-point scalar for 7 decimal numbers
pub const SCALAR_7: i128 = 1_0000000;

// seconds per year
pub const SECONDS_PER_YEAR: i128 = 31536000;

/// The largest decimal count a fixed-point value can be scaled by
pub const MAX_DECIMALS: u32 = 18;

/********** Decimals **********/

/// Decimals of reserve rates, factors and utilization
pub const RATE_DECIMALS: u32 = 7;

/// Decimals of the interest rate modifier and the b and d rates
pub const IR_MOD_DECIMALS: u32 = 9;

/// Decimals of the BLND token and of emissions per second
pub const BLND_DECIMALS: u32 = 7;

/// Decimals of the backstop LP token and its underlying balances
pub const BACKSTOP_TOKEN_DECIMALS: u32 = 7;

/********** Interest **********/

/// The utilization where the third rate slope starts. Independent of the reserve's target.
pub const UTIL_KINK: f64 = 0.95;

/// Compounding periods per year used to report borrow APY (daily)
pub const BORROW_COMPOUNDING_PERIODS: u32 = 365;

/// Compounding periods per year used to report supply APY (weekly)
pub const SUPPLY_COMPOUNDING_PERIODS: u32 = 52;

/********** Backstop Token **********/

/// Weight of BLND in the backstop LP
pub const BLND_WEIGHT: f64 = 0.8;

/// Weight of USDC in the backstop LP
pub const USDC_WEIGHT: f64 = 0.2;
