//! Market registry: market lifecycle, bet accounting, and claim settlement.

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

use crate::errors::ContractError;
use crate::events::{BetPlaced, MarketCreated, MarketResolved, WinningsClaimed};
use crate::types::{Market, MarketKey, UserPosition, OPTION_SLOTS};

#[contract]
pub struct PredictionMarketContract;

#[contractimpl]
impl PredictionMarketContract {
    /// Creates a new market and returns its id.
    ///
    /// Ids are allocated from a strictly increasing per-instance counter
    /// starting at 1 and are never reused or reordered. The market opens
    /// unresolved with no winning option and zero bet volume.
    pub fn create_market(
        env: Env,
        caller: Address,
        description: String,
        options: Vec<String>,
        resolution_time: u64,
    ) -> Result<u64, ContractError> {
        caller.require_auth();

        if options.len() > OPTION_SLOTS {
            return Err(ContractError::InvalidOption);
        }

        let nonce: u64 = env.storage().instance().get(&MarketKey::Nonce).unwrap_or(0);
        let market_id = nonce.checked_add(1).ok_or(ContractError::Overflow)?;

        let market = Market {
            creator: caller.clone(),
            description,
            options,
            resolution_time,
            resolved: false,
            winning_option: None,
            total_liquidity: 0,
        };

        env.storage()
            .persistent()
            .set(&MarketKey::Market(market_id), &market);
        env.storage().instance().set(&MarketKey::Nonce, &market_id);

        MarketCreated {
            market_id,
            creator: caller,
            resolution_time,
        }
        .publish(&env);

        Ok(market_id)
    }

    /// Places a bet on an open market.
    ///
    /// The amount accumulates into the caller's slot for that option,
    /// creating the position vector on first bet, and into the market's bet
    /// volume. A missing market and a resolved one are indistinguishable to
    /// the caller: both fail with `MarketClosed`.
    pub fn place_bet(
        env: Env,
        caller: Address,
        market_id: u64,
        option: u32,
        amount: i128,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        if option >= OPTION_SLOTS {
            return Err(ContractError::InvalidOption);
        }

        let mut market: Market = env
            .storage()
            .persistent()
            .get(&MarketKey::Market(market_id))
            .ok_or(ContractError::MarketClosed)?;

        if market.resolved {
            return Err(ContractError::MarketClosed);
        }

        let position_key = MarketKey::Position(market_id, caller.clone());
        let mut position: UserPosition = env
            .storage()
            .persistent()
            .get(&position_key)
            .unwrap_or_else(|| Self::_empty_position(&env));

        let staked = position.positions.get(option).unwrap_or(0);
        let new_stake = staked.checked_add(amount).ok_or(ContractError::Overflow)?;
        position.positions.set(option, new_stake);

        market.total_liquidity = market
            .total_liquidity
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;

        env.storage().persistent().set(&position_key, &position);
        env.storage()
            .persistent()
            .set(&MarketKey::Market(market_id), &market);

        BetPlaced {
            market_id,
            bettor: caller,
            option,
            amount,
        }
        .publish(&env);

        Ok(())
    }

    /// Resolves an open market with the winning option (one-shot).
    ///
    /// A second resolution attempt fails with `MarketClosed` whatever option
    /// it names, leaving the recorded winner untouched. The caller's auth is
    /// the authority hook; whether that caller is the designated resolver is
    /// the host permission layer's decision.
    pub fn resolve_market(
        env: Env,
        caller: Address,
        market_id: u64,
        winning_option: u32,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        if winning_option >= OPTION_SLOTS {
            return Err(ContractError::InvalidOption);
        }

        let mut market: Market = env
            .storage()
            .persistent()
            .get(&MarketKey::Market(market_id))
            .ok_or(ContractError::MarketClosed)?;

        if market.resolved {
            return Err(ContractError::MarketClosed);
        }

        market.resolved = true;
        market.winning_option = Some(winning_option);

        env.storage()
            .persistent()
            .set(&MarketKey::Market(market_id), &market);

        MarketResolved {
            market_id,
            winning_option,
        }
        .publish(&env);

        Ok(())
    }

    /// Claims winnings from a resolved market, consuming the caller's
    /// position record exactly once.
    ///
    /// Returns the caller's stake on the winning option; a caller with no
    /// recorded position (including a repeat claim) gets 0. Fails with
    /// `MarketNotResolved` while the market is missing or still open.
    pub fn claim_winnings(
        env: Env,
        caller: Address,
        market_id: u64,
    ) -> Result<i128, ContractError> {
        caller.require_auth();

        let market: Market = env
            .storage()
            .persistent()
            .get(&MarketKey::Market(market_id))
            .ok_or(ContractError::MarketNotResolved)?;

        if !market.resolved {
            return Err(ContractError::MarketNotResolved);
        }

        let position_key = MarketKey::Position(market_id, caller.clone());
        let position: UserPosition = match env.storage().persistent().get(&position_key) {
            Some(position) => position,
            None => return Ok(0),
        };

        // TODO: fold the losing-side slots into the payout once a
        // distribution policy is decided; until then winners settle at
        // their own winning-option stake.
        let payout = market
            .winning_option
            .and_then(|winner| position.positions.get(winner))
            .unwrap_or(0);

        env.storage().persistent().remove(&position_key);

        WinningsClaimed {
            market_id,
            bettor: caller,
            amount: payout,
        }
        .publish(&env);

        Ok(payout)
    }

    /// Returns the market record
    pub fn get_market(env: Env, market_id: u64) -> Result<Market, ContractError> {
        env.storage()
            .persistent()
            .get(&MarketKey::Market(market_id))
            .ok_or(ContractError::NotFound)
    }

    /// Returns a bettor's position vector for a market
    pub fn get_user_positions(
        env: Env,
        market_id: u64,
        user: Address,
    ) -> Result<UserPosition, ContractError> {
        env.storage()
            .persistent()
            .get(&MarketKey::Position(market_id, user))
            .ok_or(ContractError::NotFound)
    }

    fn _empty_position(env: &Env) -> UserPosition {
        let mut positions = Vec::new(env);
        for _ in 0..OPTION_SLOTS {
            positions.push_back(0i128);
        }
        UserPosition { positions }
    }
}
