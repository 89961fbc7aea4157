extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token, vec, Address, Env, IntoVal, TryIntoVal,
};

use crate::events::{Funded, Withdrawn};
use crate::testutils::{MockPriceFeed, MockPriceFeedClient};
use crate::{FundMe, FundMeClient};

/// $2.00 per whole asset at 8 decimals.
const RATE: i128 = 200_000_000;
const RATE_DECIMALS: u32 = 8;

/// Worth $200 at [`RATE`].
const SEND_AMOUNT: i128 = 1_000_000_000;

/// USD value of [`SEND_AMOUNT`] at [`RATE`], 18-decimal fixed point.
const SEND_USD: i128 = 200 * 10i128.pow(18);

fn setup() -> (Env, FundMeClient<'static>, Address, token::Client<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let asset_admin = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(asset_admin);
    let asset = token::Client::new(&env, &sac.address());

    let feed = env.register(MockPriceFeed, ());
    MockPriceFeedClient::new(&env, &feed).set_rate(&RATE, &RATE_DECIMALS);

    let contract_id = env.register(FundMe, ());
    let client = FundMeClient::new(&env, &contract_id);
    client.init(&owner, &asset.address, &feed);

    (env, client, owner, asset)
}

fn funder_with_balance(env: &Env, asset: &token::Client, amount: i128) -> Address {
    let funder = Address::generate(env);
    token::StellarAssetClient::new(env, &asset.address).mint(&funder, &amount);
    funder
}

#[test]
fn test_funded_event() {
    let (env, client, _owner, asset) = setup();
    let funder = funder_with_balance(&env, &asset, SEND_AMOUNT);

    client.fund(&funder, &SEND_AMOUNT);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("funded"), funder)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("funded").into_val(&env),
        funder.clone().into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: Funded struct
    let event_data: Funded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Funded {
            funder: funder.clone(),
            amount: SEND_AMOUNT,
            usd_value: SEND_USD,
        }
    );
}

#[test]
fn test_withdrawn_event() {
    let (env, client, owner, asset) = setup();
    let funder = funder_with_balance(&env, &asset, SEND_AMOUNT);
    client.fund(&funder, &SEND_AMOUNT);

    client.withdraw(&owner);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("withdrawn"), owner)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("withdrawn").into_val(&env),
        owner.clone().into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: Withdrawn struct
    let event_data: Withdrawn = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Withdrawn {
            owner: owner.clone(),
            amount: SEND_AMOUNT,
        }
    );
}

#[test]
fn test_noop_withdraw_reports_zero_amount() {
    let (env, client, owner, _asset) = setup();

    client.withdraw(&owner);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    let event_data: Withdrawn = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data.amount, 0);
}
