//! Type definitions for the prediction-market settlement contracts.
//!
//! Each of the three contracts owns its own key enum. The ledgers share the
//! numeric market-id namespace by convention only; none of them checks that
//! an id is registered elsewhere, so oracle entries and liquidity pools may
//! exist for ids the market registry has never issued.

use soroban_sdk::{contracttype, Address, String, Vec};

/// Width of the per-bettor position vector: one slot per option index.
/// Markets therefore carry at most this many option labels.
pub const OPTION_SLOTS: u32 = 5;

/// Storage keys for the market registry
#[contracttype]
#[derive(Clone)]
pub enum MarketKey {
    /// Monotonic market-id counter (instance storage)
    Nonce,
    /// Market record by id
    Market(u64),
    /// Per-bettor position vector by (market id, bettor)
    Position(u64, Address),
}

/// Storage keys for the oracle ledger
#[contracttype]
#[derive(Clone)]
pub enum OracleKey {
    /// Data-source binding and eventual result by market id
    Entry(u64),
}

/// Storage keys for the liquidity ledger
#[contracttype]
#[derive(Clone)]
pub enum PoolKey {
    /// Provider's contributed capital by (market id, provider)
    Provider(u64, Address),
    /// Aggregate pool by market id
    Pool(u64),
}

/// A proposition open for betting until it is resolved
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Market {
    /// Who created the market
    pub creator: Address,
    /// Market question/description
    pub description: String,
    /// Ordered outcome labels; index i is bet through position slot i
    pub options: Vec<String>,
    /// Deadline (ledger sequence or timestamp surrogate) after which the
    /// authority is expected to resolve
    pub resolution_time: u64,
    /// Monotonic open -> resolved flag; never reverts
    pub resolved: bool,
    /// Winning option index, set exactly once at resolution
    pub winning_option: Option<u32>,
    /// Total bet volume accepted into this market. Distinct from the
    /// liquidity ledger's pool total, which tracks provisioned capital.
    pub total_liquidity: i128,
}

/// A bettor's accumulated stake in one market, one slot per option index
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct UserPosition {
    pub positions: Vec<i128>,
}

/// External data binding and eventual settlement result for a market
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct OracleEntry {
    /// Feed descriptor, e.g. a URL
    pub data_source: String,
    /// Submitted outcome; absent until the first submission, and
    /// overwritable afterwards
    pub result: Option<i128>,
}

/// A capital provider's contribution to one market's backing pool
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct LiquidityPosition {
    pub amount: i128,
}

/// Aggregate provisioned capital for a market. Materialized, but always
/// equal to the sum of the provider positions for that market.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct MarketPool {
    pub total_liquidity: i128,
}
