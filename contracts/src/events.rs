//! Events published by the settlement contracts, one per state transition.
//!
//! Events fire only after validation, alongside the commit, so a failed call
//! never emits.

use soroban_sdk::{contractevent, Address, String};

#[contractevent(topics = ["market_created"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketCreated {
    pub market_id: u64,
    pub creator: Address,
    pub resolution_time: u64,
}

#[contractevent(topics = ["bet_placed"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BetPlaced {
    pub market_id: u64,
    pub bettor: Address,
    pub option: u32,
    pub amount: i128,
}

#[contractevent(topics = ["market_resolved"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketResolved {
    pub market_id: u64,
    pub winning_option: u32,
}

#[contractevent(topics = ["winnings_claimed"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WinningsClaimed {
    pub market_id: u64,
    pub bettor: Address,
    pub amount: i128,
}

#[contractevent(topics = ["data_source_set"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DataSourceSet {
    pub market_id: u64,
    pub data_source: String,
}

#[contractevent(topics = ["result_submitted"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResultSubmitted {
    pub market_id: u64,
    pub result: i128,
}

#[contractevent(topics = ["liquidity_provided"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidityProvided {
    pub market_id: u64,
    pub provider: Address,
    pub amount: i128,
}

#[contractevent(topics = ["liquidity_withdrawn"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidityWithdrawn {
    pub market_id: u64,
    pub provider: Address,
    pub amount: i128,
}
