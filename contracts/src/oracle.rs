//! Oracle ledger: binds markets to data sources and records their results.

use soroban_sdk::{contract, contractimpl, Address, Env, String};

use crate::errors::ContractError;
use crate::events::{DataSourceSet, ResultSubmitted};
use crate::types::{OracleEntry, OracleKey};

#[contract]
pub struct OracleContract;

#[contractimpl]
impl OracleContract {
    /// Binds a market id to a data source, discarding any previously
    /// submitted result.
    ///
    /// The ledger never consults the market registry, so entries may exist
    /// for ids no market was ever created under.
    pub fn set_data_source(env: Env, caller: Address, market_id: u64, data_source: String) {
        caller.require_auth();

        let entry = OracleEntry {
            data_source: data_source.clone(),
            result: None,
        };

        env.storage()
            .persistent()
            .set(&OracleKey::Entry(market_id), &entry);

        DataSourceSet {
            market_id,
            data_source,
        }
        .publish(&env);
    }

    /// Records the settlement result for an existing entry, preserving its
    /// data source.
    ///
    /// Resubmission overwrites. Consuming a result exactly once is the
    /// external resolver's concern, not the ledger's.
    pub fn submit_result(
        env: Env,
        caller: Address,
        market_id: u64,
        result: i128,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        let mut entry: OracleEntry = env
            .storage()
            .persistent()
            .get(&OracleKey::Entry(market_id))
            .ok_or(ContractError::NotFound)?;

        entry.result = Some(result);

        env.storage()
            .persistent()
            .set(&OracleKey::Entry(market_id), &entry);

        ResultSubmitted { market_id, result }.publish(&env);

        Ok(())
    }

    /// Returns the oracle entry for a market
    pub fn get_oracle_data(env: Env, market_id: u64) -> Result<OracleEntry, ContractError> {
        env.storage()
            .persistent()
            .get(&OracleKey::Entry(market_id))
            .ok_or(ContractError::NotFound)
    }
}
