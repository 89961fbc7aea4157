//! # Price Oracle Adapter
//!
//! The contract never hardcodes a feed implementation; it holds only an
//! [`Address`] and speaks to it through the one-method [`PriceFeed`]
//! interface. Any contract exposing `latest_rate` can back it — a live
//! aggregator on a public network, or the mocks in [`crate::testutils`]
//! for local runs.
//!
//! The call is made through the generated `try_` client so that a feed
//! that traps, returns garbage, or quotes a non-positive rate surfaces as
//! [`Error::OracleUnavailable`] instead of an opaque host trap.

use soroban_sdk::{contractclient, contracttype, panic_with_error, Address, Env};

use crate::Error;

/// A single oracle quote: the price of one whole unit of the native asset
/// in USD, as a fixed-point integer at `decimals` precision.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    pub rate: i128,
    pub decimals: u32,
}

/// Interface the price feed contract must expose.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    /// Return the current quote together with its decimal precision.
    fn latest_rate(env: Env) -> PriceData;
}

/// Query `feed` for the current rate.
///
/// Panics with [`Error::OracleUnavailable`] when the feed traps, answers
/// with an unconvertible value, or quotes a rate that is not positive.
pub fn latest_rate(env: &Env, feed: &Address) -> PriceData {
    let client = PriceFeedClient::new(env, feed);
    match client.try_latest_rate() {
        Ok(Ok(price)) if price.rate > 0 => price,
        _ => panic_with_error!(env, Error::OracleUnavailable),
    }
}
