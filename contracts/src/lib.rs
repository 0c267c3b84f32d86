#![no_std]
//! # Prediction Market Settlement Contracts
//!
//! Soroban settlement engine for a decentralized prediction market, split
//! across three ledgers that share a market-id namespace without
//! foreign-key coupling:
//! - **Market registry**: market lifecycle, bet accounting, oracle-gated
//!   resolution, and claims
//! - **Oracle ledger**: per-market data-source bindings and submitted results
//! - **Liquidity ledger**: per-provider capital and per-market pool totals
//!
//! ## Key Features
//! - Every call is a single atomic state transition; validation precedes
//!   every write
//! - Checked arithmetic prevents overflow
//! - A market resolves at most once, and claims consume a position exactly
//!   once
//! - Wire-stable numeric error codes shared by all three contracts

mod errors;
pub mod events;
mod liquidity;
mod market;
mod oracle;
mod types;

#[cfg(test)]
mod tests;

pub use errors::ContractError;
pub use liquidity::LiquidityPoolContract;
pub use market::PredictionMarketContract;
pub use oracle::OracleContract;
pub use types::{
    LiquidityPosition, Market, MarketKey, MarketPool, OracleEntry, OracleKey, PoolKey,
    UserPosition, OPTION_SLOTS,
};
