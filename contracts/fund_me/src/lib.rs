//! # FundMe Contract
//!
//! A minimal crowdfunding contract: anyone may contribute the native asset,
//! each contribution is valued in USD through an external price feed and
//! must clear a fixed minimum, and the owner alone may drain the balance.
//!
//! | Phase      | Entry Point(s)                                        |
//! |------------|-------------------------------------------------------|
//! | Bootstrap  | [`FundMe::init`]                                      |
//! | Funding    | [`FundMe::fund`]                                      |
//! | Withdrawal | [`FundMe::withdraw`]                                  |
//! | Queries    | `owner`, `asset`, `price_feed`, `amount_funded`, `funder`, `funder_count`, `balance` |
//!
//! ## Architecture
//!
//! Price valuation is delegated to [`oracle`] and [`conversion`]; storage
//! access is delegated to [`storage`]. This file contains only the public
//! entry points and event emissions — no business logic lives here
//! directly.
//!
//! ## Reentrancy
//!
//! `withdraw` empties the contribution ledger before the outbound token
//! transfer executes. A nested call arriving during the transfer sees an
//! already-zeroed ledger, and a failed transfer traps the whole invocation
//! so the host rolls the reset back with it.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, token, Address, Env};

mod conversion;
mod events;
mod oracle;
mod storage;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use conversion::{ASSET_DECIMALS, MINIMUM_USD, USD_DECIMALS};
pub use events::{Funded, Withdrawn};
pub use oracle::{PriceData, PriceFeed, PriceFeedClient};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized     = 2,
    /// Contribution's USD value is below [`MINIMUM_USD`].
    InsufficientValue  = 3,
    NotOwner           = 4,
    /// The price feed trapped or answered with an unusable quote.
    OracleUnavailable  = 5,
    Overflow           = 6,
}

#[contract]
pub struct FundMe;

#[contractimpl]
impl FundMe {
    // ─────────────────────────────────────────────────────────
    // Bootstrap
    // ─────────────────────────────────────────────────────────

    /// Initialise the contract.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls panic with `Error::AlreadyInitialized`.
    ///
    /// - `owner` becomes the sole withdrawal authority and must sign.
    /// - `asset` is the Stellar Asset Contract the funds are held in.
    /// - `price_feed` is the oracle contract queried on every `fund`.
    pub fn init(env: Env, owner: Address, asset: Address, price_feed: Address) {
        if storage::is_initialized(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        owner.require_auth();
        storage::set_config(&env, &owner, &asset, &price_feed);
    }

    // ─────────────────────────────────────────────────────────
    // Funding
    // ─────────────────────────────────────────────────────────

    /// Contribute `amount` of the native asset.
    ///
    /// The amount is valued through the price feed at the feed's own
    /// decimal precision; contributions worth less than [`MINIMUM_USD`]
    /// (zero and negative amounts included) panic with
    /// `Error::InsufficientValue`. Nothing is pulled from the funder until
    /// validation has passed, so a rejected call moves no value.
    pub fn fund(env: Env, funder: Address, amount: i128) {
        funder.require_auth();

        let feed = storage::get_price_feed(&env);
        let price = oracle::latest_rate(&env, &feed);
        let usd_value = conversion::usd_value(amount, price.rate, price.decimals)
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));

        if usd_value < MINIMUM_USD {
            panic_with_error!(&env, Error::InsufficientValue);
        }

        // Validation passed: take custody, then record.
        let asset = token::Client::new(&env, &storage::get_asset(&env));
        asset.transfer(&funder, &env.current_contract_address(), &amount);

        storage::add_contribution(&env, &funder, amount);
        storage::push_funder(&env, &funder);

        events::funded(&env, &funder, amount, usd_value);
    }

    // ─────────────────────────────────────────────────────────
    // Withdrawal
    // ─────────────────────────────────────────────────────────

    /// Drain the contract balance to the owner and reset the ledger.
    ///
    /// Only the owner may call; anyone else panics with `Error::NotOwner`
    /// and mutates nothing. The ledger is emptied *before* the outbound
    /// transfer (effects before interaction); with nothing retained the
    /// call is a no-op rather than an error, so repeating a withdrawal is
    /// harmless.
    pub fn withdraw(env: Env, caller: Address) {
        caller.require_auth();

        let owner = storage::get_owner(&env);
        if caller != owner {
            panic_with_error!(&env, Error::NotOwner);
        }

        let asset = token::Client::new(&env, &storage::get_asset(&env));
        let contract = env.current_contract_address();
        let balance = asset.balance(&contract);

        // Effects before interaction: reset the ledger, then move funds.
        storage::clear_ledger(&env);
        if balance > 0 {
            asset.transfer(&contract, &owner, &balance);
        }

        events::withdrawn(&env, &owner, balance);
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// The sole withdrawal authority.
    pub fn owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    /// The token contract the funds are held in.
    pub fn asset(env: Env) -> Address {
        storage::get_asset(&env)
    }

    /// The price feed contract used to value contributions.
    pub fn price_feed(env: Env) -> Address {
        storage::get_price_feed(&env)
    }

    /// Cumulative amount contributed by `funder`; zero when absent.
    pub fn amount_funded(env: Env, funder: Address) -> i128 {
        storage::amount_funded(&env, &funder)
    }

    /// The funder recorded at `index` of the funding order, or `None`.
    pub fn funder(env: Env, index: u32) -> Option<Address> {
        storage::funder_at(&env, index)
    }

    /// Number of entries in the funding order (repeat funders counted per call).
    pub fn funder_count(env: Env) -> u32 {
        storage::funders(&env).len()
    }

    /// The contract's retained asset balance.
    pub fn balance(env: Env) -> i128 {
        let asset = token::Client::new(&env, &storage::get_asset(&env));
        asset.balance(&env.current_contract_address())
    }
}
