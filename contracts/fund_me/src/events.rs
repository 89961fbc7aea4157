//! # Events
//!
//! One event per state transition, consumed off-chain by the indexer in
//! `backend/indexer`.
//!
//! | Topic                     | Data          |
//! |---------------------------|---------------|
//! | `("funded", funder)`      | [`Funded`]    |
//! | `("withdrawn", owner)`    | [`Withdrawn`] |

use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// A contribution was accepted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Funded {
    pub funder: Address,
    pub amount: i128,
    /// The contribution's value at acceptance time, USD at 18 decimals.
    pub usd_value: i128,
}

/// The owner drained the contract balance and the ledger was reset.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    pub owner: Address,
    pub amount: i128,
}

pub fn funded(env: &Env, funder: &Address, amount: i128, usd_value: i128) {
    env.events().publish(
        (symbol_short!("funded"), funder.clone()),
        Funded {
            funder: funder.clone(),
            amount,
            usd_value,
        },
    );
}

pub fn withdrawn(env: &Env, owner: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("withdrawn"), owner.clone()),
        Withdrawn {
            owner: owner.clone(),
            amount,
        },
    );
}
