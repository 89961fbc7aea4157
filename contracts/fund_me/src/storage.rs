//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by FundMe:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key         | Type      | Description                              |
//! |-------------|-----------|------------------------------------------|
//! | `Owner`     | `Address` | Sole identity allowed to withdraw        |
//! | `Asset`     | `Address` | Native-asset SAC the contract custodies  |
//! | `PriceFeed` | `Address` | Price oracle the funding check queries   |
//!
//! All three are written once in `init` and never mutated. Instance TTL is
//! bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key               | Type           | Description                        |
//! |-------------------|----------------|------------------------------------|
//! | `Funded(addr)`    | `i128`         | Cumulative amount funded by `addr` |
//! | `Funders`         | `Vec<Address>` | Funding order, one entry per call  |
//!
//! `Funders` deliberately keeps duplicates: each accepted `fund` call
//! appends its caller, repeat funders included. Persistent TTL is bumped by
//! **30 days** whenever it falls below 7 days remaining.

use soroban_sdk::{contracttype, panic_with_error, Address, Env, Vec};

use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Sole withdrawal authority, fixed at init (Instance).
    Owner,
    /// Native-asset token contract, fixed at init (Instance).
    Asset,
    /// Price feed contract, fixed at init (Instance).
    PriceFeed,
    /// Cumulative contribution per funder (Persistent).
    Funded(Address),
    /// Every accepted funding call's caller, in order (Persistent).
    Funders,
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// `true` once `init` has run.
pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

/// Write the immutable configuration. Only called from `init`.
pub fn set_config(env: &Env, owner: &Address, asset: &Address, price_feed: &Address) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Owner, owner);
    instance.set(&DataKey::Asset, asset);
    instance.set(&DataKey::PriceFeed, price_feed);
    bump_instance(env);
}

fn get_config_address(env: &Env, key: &DataKey) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(key)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

/// The sole withdrawal authority.
pub fn get_owner(env: &Env) -> Address {
    get_config_address(env, &DataKey::Owner)
}

/// The native-asset token contract the funds are held in.
pub fn get_asset(env: &Env) -> Address {
    get_config_address(env, &DataKey::Asset)
}

/// The price feed the funding check queries.
pub fn get_price_feed(env: &Env) -> Address {
    get_config_address(env, &DataKey::PriceFeed)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Cumulative amount funded by `funder`; zero when absent.
pub fn amount_funded(env: &Env, funder: &Address) -> i128 {
    let key = DataKey::Funded(funder.clone());
    match env.storage().persistent().get(&key) {
        Some(total) => {
            bump_persistent(env, &key);
            total
        }
        None => 0,
    }
}

/// Add `amount` to `funder`'s cumulative total and return the new total.
/// Panics with [`Error::Overflow`] rather than wrapping.
pub fn add_contribution(env: &Env, funder: &Address, amount: i128) -> i128 {
    let key = DataKey::Funded(funder.clone());
    let current: i128 = env.storage().persistent().get(&key).unwrap_or(0);
    let total = current
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(env, Error::Overflow));
    env.storage().persistent().set(&key, &total);
    bump_persistent(env, &key);
    total
}

/// The full funding order, duplicates included.
pub fn funders(env: &Env) -> Vec<Address> {
    let key = DataKey::Funders;
    match env.storage().persistent().get(&key) {
        Some(list) => {
            bump_persistent(env, &key);
            list
        }
        None => Vec::new(env),
    }
}

/// Append `funder` to the funding order.
pub fn push_funder(env: &Env, funder: &Address) {
    let key = DataKey::Funders;
    let mut list = funders(env);
    list.push_back(funder.clone());
    env.storage().persistent().set(&key, &list);
    bump_persistent(env, &key);
}

/// The funder recorded at `index`, or `None` past the end.
pub fn funder_at(env: &Env, index: u32) -> Option<Address> {
    funders(env).get(index)
}

/// Remove every per-funder total and empty the funding order.
///
/// Withdrawal calls this *before* moving any funds so a reentrant call
/// during the outbound transfer observes an already-empty ledger.
pub fn clear_ledger(env: &Env) {
    let list = funders(env);
    for funder in list.iter() {
        // Repeat funders appear more than once; remove is idempotent.
        env.storage().persistent().remove(&DataKey::Funded(funder));
    }
    env.storage()
        .persistent()
        .set(&DataKey::Funders, &Vec::<Address>::new(env));
}
