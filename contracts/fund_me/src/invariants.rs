#![allow(dead_code)]

extern crate std;

use soroban_sdk::Address;

use crate::FundMeClient;

/// INV-1: The sum of per-funder ledger totals equals the contract's
/// retained balance. Holds before any withdrawal and trivially after one.
pub fn assert_ledger_matches_balance(client: &FundMeClient, funders: &[Address]) {
    let mut sum: i128 = 0;
    for funder in funders {
        sum = sum
            .checked_add(client.amount_funded(funder))
            .expect("ledger sum overflow");
    }
    assert_eq!(
        sum,
        client.balance(),
        "INV-1 violated: ledger sums to {} but contract holds {}",
        sum,
        client.balance()
    );
}

/// INV-2: Funding invariant — an accepted contribution of `amount` grows
/// the funder's total by exactly `amount`.
pub fn assert_fund_invariant(total_before: i128, total_after: i128, amount: i128) {
    assert_eq!(
        total_after,
        total_before + amount,
        "INV-2 violated: {} + {} != {}",
        total_before,
        amount,
        total_after
    );
}

/// INV-3: A completed withdrawal leaves no trace of any funder.
pub fn assert_ledger_reset(client: &FundMeClient, funders: &[Address]) {
    for funder in funders {
        assert_eq!(
            client.amount_funded(funder),
            0,
            "INV-3 violated: funder still has a ledger entry after withdrawal"
        );
    }
    assert_eq!(
        client.funder_count(),
        0,
        "INV-3 violated: funding order not emptied by withdrawal"
    );
    assert_eq!(client.funder(&0), None);
    assert_eq!(
        client.balance(),
        0,
        "INV-3 violated: contract retains a balance after withdrawal"
    );
}

/// INV-4: Withdrawal conserves value — whatever left the contract arrived
/// at the owner, nothing minted, nothing burned.
pub fn assert_withdraw_conservation(
    contract_before: i128,
    owner_before: i128,
    owner_after: i128,
) {
    assert_eq!(
        owner_after,
        owner_before + contract_before,
        "INV-4 violated: owner balance {} != {} + {}",
        owner_after,
        owner_before,
        contract_before
    );
}
