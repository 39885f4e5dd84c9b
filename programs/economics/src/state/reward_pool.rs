use anchor_lang::prelude::*;

use crate::constants::MAX_REWARD_PERCENT_BPS;
use crate::errors::EconomicsError;

/// Longest accepted raffle identifier
pub const MAX_RAFFLE_ID_LEN: usize = 64;

#[account]
pub struct RewardPool {
    /// Launch curve this pool rewards
    pub launch: Pubkey,

    /// Issuer who funded the pool and controls its settings
    pub authority: Pubkey,

    /// Mint the rewards are paid in
    pub reward_mint: Pubkey,

    /// Vault token account holding the funded rewards
    pub reward_vault: Pubkey,

    /// bump seed
    pub bump: u8,

    /// External raffle identifier attached by the issuer
    pub raffle_id: String,

    // ===== Allocation Parameters =====
    /// Reward percent per SOL of volume, in basis points (0..=2000)
    pub reward_percent_bps: u16,

    /// Whether allocation is running; false freezes further rewards
    pub is_active: bool,

    /// Per-user cap for one batch distribution, in reward base units
    pub daily_reward_limit: u64,

    // ===== Pool Counters =====
    /// Funded size of the pool; grows only by explicit top-up
    pub total_reward_pool: u64,

    /// Rewards allocated so far; monotonically non-decreasing
    pub distributed_rewards: u64,

    /// What is left: always total - distributed
    pub remaining_rewards: u64,

    // ===== Bookkeeping =====
    /// Distinct traders seen by this pool
    pub trader_count: u32,

    pub created_at: i64,

    /// Time of the last batch distribution (0 if never)
    pub last_distribution_at: i64,

    /// Reserved space
    pub reserved: [u64; 4],
}

impl RewardPool {
    pub const SIZE: usize = 8 + // discriminator
        32 + // launch
        32 + // authority
        32 + // reward_mint
        32 + // reward_vault
        1 + // bump
        4 + MAX_RAFFLE_ID_LEN + // raffle_id
        2 + // reward_percent_bps
        1 + // is_active
        8 + // daily_reward_limit
        8 + // total_reward_pool
        8 + // distributed_rewards
        8 + // remaining_rewards
        4 + // trader_count
        8 + // created_at
        8 + // last_distribution_at
        8 * 4; // reserved

    /// Creation/update-time validation; allocation never re-validates
    pub fn validate_params(raffle_id: &str, reward_percent_bps: u16, amount: u64) -> Result<()> {
        require!(
            raffle_id.len() <= MAX_RAFFLE_ID_LEN,
            EconomicsError::InvalidRewardPoolSize
        );

        require!(
            reward_percent_bps <= MAX_REWARD_PERCENT_BPS,
            EconomicsError::InvalidRewardPercent
        );

        require!(amount > 0, EconomicsError::InvalidRewardPoolSize);

        Ok(())
    }

    /// Commit one allocation: the read-decrement-write happens inside a
    /// single instruction on this account, so racing trades cannot
    /// observe intermediate counters.
    pub fn record_allocation(&mut self, amount: u64) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }

        self.remaining_rewards = self
            .remaining_rewards
            .checked_sub(amount)
            .ok_or(EconomicsError::MathOverflow)?;

        self.distributed_rewards = self
            .distributed_rewards
            .checked_add(amount)
            .ok_or(EconomicsError::MathOverflow)?;

        Ok(())
    }

    /// Explicit top-up; the only way the funded size grows
    pub fn top_up(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, EconomicsError::InvalidRewardPoolSize);

        self.total_reward_pool = self
            .total_reward_pool
            .checked_add(amount)
            .ok_or(EconomicsError::MathOverflow)?;

        self.remaining_rewards = self
            .remaining_rewards
            .checked_add(amount)
            .ok_or(EconomicsError::MathOverflow)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn funded_pool(total: u64) -> RewardPool {
        RewardPool {
            launch: Pubkey::new_unique(),
            authority: Pubkey::new_unique(),
            reward_mint: Pubkey::new_unique(),
            reward_vault: Pubkey::new_unique(),
            bump: 255,
            raffle_id: "raffle-1".to_string(),
            reward_percent_bps: 500,
            is_active: true,
            daily_reward_limit: 1_000,
            total_reward_pool: total,
            distributed_rewards: 0,
            remaining_rewards: total,
            trader_count: 0,
            created_at: 0,
            last_distribution_at: 0,
            reserved: [0; 4],
        }
    }

    #[test]
    fn counters_stay_conserved() {
        let mut pool = funded_pool(100_000);

        for amount in [1_000u64, 50, 24_950, 74_000] {
            pool.record_allocation(amount).unwrap();
            assert_eq!(
                pool.remaining_rewards + pool.distributed_rewards,
                pool.total_reward_pool
            );
        }

        assert_eq!(pool.remaining_rewards, 0);
        assert!(pool.record_allocation(1).is_err());
    }

    #[test]
    fn top_up_grows_both_sides() {
        let mut pool = funded_pool(100_000);
        pool.record_allocation(40_000).unwrap();

        pool.top_up(10_000).unwrap();

        assert_eq!(pool.total_reward_pool, 110_000);
        assert_eq!(pool.remaining_rewards, 70_000);
        assert_eq!(
            pool.remaining_rewards + pool.distributed_rewards,
            pool.total_reward_pool
        );
    }

    #[test]
    fn params_validation() {
        assert!(RewardPool::validate_params("r", 2_000, 1).is_ok());
        assert!(RewardPool::validate_params("r", 2_001, 1).is_err());
        assert!(RewardPool::validate_params("r", 500, 0).is_err());

        let long_id = "x".repeat(MAX_RAFFLE_ID_LEN + 1);
        assert!(RewardPool::validate_params(&long_id, 500, 1).is_err());
    }
}
