//! Canonical event types emitted by the FundMe contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/fund_me/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the FundMe contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A contribution was accepted (`funded` topic).
    Funded,
    /// The owner drained the contract and the ledger was reset (`withdrawn` topic).
    Withdrawn,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "funded" => Self::Funded,
            "withdrawn" => Self::Withdrawn,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Funded => "funded",
            Self::Withdrawn => "withdrawn",
            Self::Unknown => "unknown",
        }
    }
}

/// A fully decoded FundMe event, ready to be stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundEvent {
    pub event_type: String,
    /// The funder on `funded` events, the owner on `withdrawn` events.
    pub actor: Option<String>,
    /// Native-asset amount moved by the event.
    pub amount: Option<String>,
    /// USD valuation recorded at acceptance time (funded events only).
    pub usd_value: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_type: String,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub usd_value: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
