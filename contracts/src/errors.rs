//! Contract error types for the prediction-market settlement contracts.

use soroban_sdk::contracterror;

/// Contract error types
///
/// The discriminants are the wire-visible failure codes shared by all three
/// contracts. 101 doubles as "insufficient balance" on withdrawal, and
/// 104/105 cover the missing-market case as well as the closed/unresolved
/// one; callers distinguish only by which operation they invoked.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// Entity does not exist, or withdrawal exceeds the provider's balance
    NotFound = 101,
    /// Amount must be greater than zero
    InvalidAmount = 102,
    /// Option index or label count beyond the fixed position width
    InvalidOption = 103,
    /// Market does not exist or has already been resolved
    MarketClosed = 104,
    /// Market does not exist or has not been resolved yet
    MarketNotResolved = 105,
    /// Arithmetic overflow occurred
    Overflow = 106,
}
