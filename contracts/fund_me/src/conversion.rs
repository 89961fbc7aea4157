//! # Conversion
//!
//! Fixed-point arithmetic for valuing native-asset amounts in USD.
//!
//! The oracle quotes the price of one whole unit of the native asset at its
//! own decimal precision. Every valuation normalizes that quote to the
//! internal [`USD_DECIMALS`] precision using the decimals the oracle
//! reported on *that* call — the feed's precision is configuration, never a
//! contract constant.
//!
//! All arithmetic is checked; `None` means the computation does not fit in
//! an `i128` and the caller must abort.

/// Internal USD fixed-point precision.
pub const USD_DECIMALS: u32 = 18;

/// Decimal precision of the native asset (stroops: 1 XLM = 10^7).
pub const ASSET_DECIMALS: u32 = 7;

/// Minimum accepted contribution, in USD at [`USD_DECIMALS`] precision.
pub const MINIMUM_USD: i128 = 50 * 10i128.pow(USD_DECIMALS);

/// Scale an oracle quote from `decimals` precision to [`USD_DECIMALS`].
fn normalize_rate(rate: i128, decimals: u32) -> Option<i128> {
    if decimals <= USD_DECIMALS {
        rate.checked_mul(10i128.checked_pow(USD_DECIMALS - decimals)?)
    } else {
        rate.checked_div(10i128.checked_pow(decimals - USD_DECIMALS)?)
    }
}

/// Value `amount` (smallest asset units) in USD at [`USD_DECIMALS`]
/// precision, given an oracle quote of `rate` at `rate_decimals` precision.
pub fn usd_value(amount: i128, rate: i128, rate_decimals: u32) -> Option<i128> {
    let unit_rate = normalize_rate(rate, rate_decimals)?;
    amount
        .checked_mul(unit_rate)?
        .checked_div(10i128.pow(ASSET_DECIMALS))
}
