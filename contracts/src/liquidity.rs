//! Liquidity ledger: per-provider capital and the per-market pool aggregate.
//!
//! The pool total is materialized but must equal the sum of provider
//! positions for that market after every operation, so position and pool
//! always move together within one invocation.

use soroban_sdk::{contract, contractimpl, Address, Env};

use crate::errors::ContractError;
use crate::events::{LiquidityProvided, LiquidityWithdrawn};
use crate::types::{LiquidityPosition, MarketPool, PoolKey};

#[contract]
pub struct LiquidityPoolContract;

#[contractimpl]
impl LiquidityPoolContract {
    /// Adds capital to the caller's position and the market's pool.
    ///
    /// Both records are created at zero on first use. Like the oracle
    /// ledger, this one never checks the market registry for the id.
    pub fn provide_liquidity(
        env: Env,
        caller: Address,
        market_id: u64,
        amount: i128,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let provider_key = PoolKey::Provider(market_id, caller.clone());
        let held = Self::_position_amount(&env, &provider_key);
        let new_held = held.checked_add(amount).ok_or(ContractError::Overflow)?;

        let pool_key = PoolKey::Pool(market_id);
        let pool_total = Self::_pool_total(&env, &pool_key);
        let new_total = pool_total
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;

        env.storage()
            .persistent()
            .set(&provider_key, &LiquidityPosition { amount: new_held });
        env.storage().persistent().set(
            &pool_key,
            &MarketPool {
                total_liquidity: new_total,
            },
        );

        LiquidityProvided {
            market_id,
            provider: caller,
            amount,
        }
        .publish(&env);

        Ok(())
    }

    /// Withdraws capital from the caller's position and the market's pool.
    ///
    /// A request exceeding the current position (absent counts as zero) is
    /// rejected in full with the overloaded `NotFound` code and changes
    /// nothing. A position drawn down to zero keeps its record.
    pub fn withdraw_liquidity(
        env: Env,
        caller: Address,
        market_id: u64,
        amount: i128,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let provider_key = PoolKey::Provider(market_id, caller.clone());
        let held = Self::_position_amount(&env, &provider_key);

        if amount > held {
            return Err(ContractError::NotFound);
        }

        let new_held = held.checked_sub(amount).ok_or(ContractError::Overflow)?;

        let pool_key = PoolKey::Pool(market_id);
        let pool_total = Self::_pool_total(&env, &pool_key);
        let new_total = pool_total
            .checked_sub(amount)
            .ok_or(ContractError::Overflow)?;

        env.storage()
            .persistent()
            .set(&provider_key, &LiquidityPosition { amount: new_held });
        env.storage().persistent().set(
            &pool_key,
            &MarketPool {
                total_liquidity: new_total,
            },
        );

        LiquidityWithdrawn {
            market_id,
            provider: caller,
            amount,
        }
        .publish(&env);

        Ok(())
    }

    /// Returns a provider's position for a market
    pub fn get_liquidity_position(
        env: Env,
        market_id: u64,
        provider: Address,
    ) -> Result<LiquidityPosition, ContractError> {
        env.storage()
            .persistent()
            .get(&PoolKey::Provider(market_id, provider))
            .ok_or(ContractError::NotFound)
    }

    /// Returns the aggregate pool for a market
    pub fn get_market_pool(env: Env, market_id: u64) -> Result<MarketPool, ContractError> {
        env.storage()
            .persistent()
            .get(&PoolKey::Pool(market_id))
            .ok_or(ContractError::NotFound)
    }

    fn _position_amount(env: &Env, key: &PoolKey) -> i128 {
        env.storage()
            .persistent()
            .get(key)
            .map(|position: LiquidityPosition| position.amount)
            .unwrap_or(0)
    }

    fn _pool_total(env: &Env, key: &PoolKey) -> i128 {
        env.storage()
            .persistent()
            .get(key)
            .map(|pool: MarketPool| pool.total_liquidity)
            .unwrap_or(0)
    }
}
