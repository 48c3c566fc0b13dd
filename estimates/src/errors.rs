use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
/// Error codes for reserve estimates. Codes start at 1300 to stay clear of the pool
/// contract's error range.
pub enum EstimateError {
    InvalidReserveConfig = 1300,
    ConversionError = 1301,
    InvalidDecimals = 1302,
    OverflowError = 1303,
}
