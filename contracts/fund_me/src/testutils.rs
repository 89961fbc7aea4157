//! Test doubles for the price feed.
//!
//! Compiled only for tests or with the `testutils` feature, so deployment
//! tooling can register a configurable feed on local networks while live
//! networks wire in a real aggregator.

use soroban_sdk::{contract, contractimpl, contracttype, Env};

use crate::oracle::PriceData;

#[contracttype]
#[derive(Clone)]
enum MockKey {
    Price,
}

/// A price feed answering with whatever quote was last configured.
#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    /// Set the quote subsequent `latest_rate` calls return.
    pub fn set_rate(env: Env, rate: i128, decimals: u32) {
        env.storage()
            .instance()
            .set(&MockKey::Price, &PriceData { rate, decimals });
    }

    pub fn latest_rate(env: Env) -> PriceData {
        env.storage()
            .instance()
            .get(&MockKey::Price)
            .expect("rate not set")
    }
}

// `contractimpl` generates module-level symbols named after each contract
// function, so two contracts exporting `latest_rate` cannot share a module.
mod broken {
    use super::*;

    /// A price feed that always traps, for exercising oracle-failure paths.
    #[contract]
    pub struct BrokenPriceFeed;

    #[contractimpl]
    impl BrokenPriceFeed {
        pub fn latest_rate(_env: Env) -> PriceData {
            panic!("feed offline")
        }
    }
}

pub use broken::BrokenPriceFeed;
