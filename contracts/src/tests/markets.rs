//! Tests for market creation and registry lookups.

use crate::errors::ContractError;
use crate::market::{PredictionMarketContract, PredictionMarketContractClient};
use soroban_sdk::{testutils::Address as _, vec, Address, Env, String};

#[test]
fn test_create_market() {
    let env = Env::default();
    let contract_id = env.register(PredictionMarketContract, ());
    let client = PredictionMarketContractClient::new(&env, &contract_id);

    let user1 = Address::generate(&env);

    env.mock_all_auths();

    let description = String::from_str(&env, "Test Market");
    let options = vec![
        &env,
        String::from_str(&env, "Yes"),
        String::from_str(&env, "No"),
    ];

    let market_id = client.create_market(&user1, &description, &options, &100);

    // First market gets id 1
    assert_eq!(market_id, 1);

    let market = client.get_market(&market_id);
    assert_eq!(market.creator, user1);
    assert_eq!(market.description, description);
    assert_eq!(market.options, options);
    assert_eq!(market.resolution_time, 100);
    assert_eq!(market.resolved, false);
    assert_eq!(market.winning_option, None);
    assert_eq!(market.total_liquidity, 0);
}

#[test]
fn test_market_ids_are_sequential() {
    let env = Env::default();
    let contract_id = env.register(PredictionMarketContract, ());
    let client = PredictionMarketContractClient::new(&env, &contract_id);

    let user = Address::generate(&env);

    env.mock_all_auths();

    let description = String::from_str(&env, "Market");
    let options = vec![
        &env,
        String::from_str(&env, "Yes"),
        String::from_str(&env, "No"),
    ];

    assert_eq!(client.create_market(&user, &description, &options, &100), 1);
    assert_eq!(client.create_market(&user, &description, &options, &200), 2);
    assert_eq!(client.create_market(&user, &description, &options, &300), 3);
}

#[test]
fn test_create_market_rejects_too_many_options() {
    let env = Env::default();
    let contract_id = env.register(PredictionMarketContract, ());
    let client = PredictionMarketContractClient::new(&env, &contract_id);

    let user = Address::generate(&env);

    env.mock_all_auths();

    // Six labels exceed the five position slots
    let options = vec![
        &env,
        String::from_str(&env, "A"),
        String::from_str(&env, "B"),
        String::from_str(&env, "C"),
        String::from_str(&env, "D"),
        String::from_str(&env, "E"),
        String::from_str(&env, "F"),
    ];

    let result = client.try_create_market(
        &user,
        &String::from_str(&env, "Too wide"),
        &options,
        &100,
    );
    assert_eq!(result, Err(Ok(ContractError::InvalidOption)));

    // No id was consumed by the rejected creation
    let ok_options = vec![&env, String::from_str(&env, "Yes")];
    let market_id = client.create_market(
        &user,
        &String::from_str(&env, "Narrow"),
        &ok_options,
        &100,
    );
    assert_eq!(market_id, 1);
}

#[test]
fn test_get_market_not_found() {
    let env = Env::default();
    let contract_id = env.register(PredictionMarketContract, ());
    let client = PredictionMarketContractClient::new(&env, &contract_id);

    let result = client.try_get_market(&999);
    assert_eq!(result, Err(Ok(ContractError::NotFound)));
}

#[test]
fn test_get_user_positions_without_bet() {
    let env = Env::default();
    let contract_id = env.register(PredictionMarketContract, ());
    let client = PredictionMarketContractClient::new(&env, &contract_id);

    let user1 = Address::generate(&env);
    let user2 = Address::generate(&env);

    env.mock_all_auths();

    let options = vec![
        &env,
        String::from_str(&env, "Yes"),
        String::from_str(&env, "No"),
    ];
    client.create_market(&user1, &String::from_str(&env, "Test Market"), &options, &100);

    // user2 never bet, so there is no position record for the pair
    let result = client.try_get_user_positions(&1, &user2);
    assert_eq!(result, Err(Ok(ContractError::NotFound)));
}
