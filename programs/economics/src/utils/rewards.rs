use anchor_lang::prelude::*;
use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

use crate::constants::BPS_DENOMINATOR;
use crate::errors::EconomicsError;

/// Step-function bonus schedule applied to a trader's reward based on
/// their cumulative volume tier. Thresholds are lamports; a trader at or
/// above `thresholds[i]` earns `multipliers_bps[i + 1]`.
#[derive(Debug, Clone, Copy, AnchorSerialize, AnchorDeserialize, PartialEq, Eq)]
pub struct RewardTierSchedule {
    pub thresholds: [u64; 4],
    pub multipliers_bps: [u16; 5],
}

impl RewardTierSchedule {
    /// Thresholds must be strictly increasing so each tier is reachable
    pub fn validate(&self) -> Result<()> {
        for pair in self.thresholds.windows(2) {
            require!(pair[0] < pair[1], EconomicsError::InvalidVolumeTiers);
        }

        Ok(())
    }
}

/// Multiplier in basis points for a trader's cumulative volume
pub fn volume_multiplier_bps(volume_lamports: u64, schedule: &RewardTierSchedule) -> u16 {
    for (i, threshold) in schedule.thresholds.iter().enumerate().rev() {
        if volume_lamports >= *threshold {
            return schedule.multipliers_bps[i + 1];
        }
    }

    schedule.multipliers_bps[0]
}

/// Inputs for a single-trade reward computation, snapshotted from the
/// pool counters and the trader's aggregated volume record.
#[derive(Debug, Clone, Copy)]
pub struct TradeRewardInput {
    pub pool_is_active: bool,
    pub total_reward_pool: u64,
    pub remaining_rewards: u64,
    pub reward_percent_bps: u16,
    pub trade_lamports: u64,
    pub trader_volume_lamports: u64,
}

/// Base reward fraction for one trade, in basis points.
///
/// One SOL of volume contributes `reward_percent_bps` to the base
/// fraction; the result is hard-capped at `max_trade_reward_bps`
/// regardless of trade size.
pub fn base_reward_bps(
    trade_lamports: u64,
    reward_percent_bps: u16,
    max_trade_reward_bps: u16,
) -> u64 {
    let raw = (trade_lamports as u128)
        .saturating_mul(reward_percent_bps as u128)
        / (LAMPORTS_PER_SOL as u128);

    raw.min(max_trade_reward_bps as u128) as u64
}

/// Reward for one accepted trade.
///
/// An inactive or exhausted pool yields 0; that is a normal outcome,
/// not an error. The result is always clamped to what the pool still
/// holds, so a sequence of trade rewards can never over-allocate.
pub fn calculate_trade_reward(
    input: &TradeRewardInput,
    schedule: &RewardTierSchedule,
    max_trade_reward_bps: u16,
) -> u64 {
    if !input.pool_is_active || input.remaining_rewards == 0 {
        return 0;
    }

    let base_bps = base_reward_bps(
        input.trade_lamports,
        input.reward_percent_bps,
        max_trade_reward_bps,
    );

    let multiplier_bps = volume_multiplier_bps(input.trader_volume_lamports, schedule);

    // pool * base_bps * multiplier_bps / (10^4 * 10^4 * 100)
    let denominator =
        (BPS_DENOMINATOR as u128) * (BPS_DENOMINATOR as u128) * 100u128;
    let reward = (input.total_reward_pool as u128)
        .saturating_mul(base_bps as u128)
        .saturating_mul(multiplier_bps as u128)
        / denominator;

    reward.min(input.remaining_rewards as u128) as u64
}

/// One trader's stake in a batch distribution. `join_index` is the
/// first-seen order assigned when the volume record was created and
/// breaks ties between equal volumes.
#[derive(Debug, Clone, Copy)]
pub struct VolumeShare {
    pub volume_lamports: u64,
    pub join_index: u32,
}

/// A grant planned for one trader; `position` indexes the input slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedGrant {
    pub position: usize,
    pub amount: u64,
}

/// Plan a proportional batch distribution over a snapshot of trader
/// volume records.
///
/// Traders are ranked by volume descending (ties: first-seen order) and
/// each receives `remaining_current * volume / total_volume`, capped at
/// `per_user_cap`. The remaining pool is decremented by the granted
/// amount before the next trader is processed, so caps taken by early
/// traders shrink what later traders split. Planning stops early once
/// the pool is exhausted.
pub fn plan_distribution(
    remaining_rewards: u64,
    per_user_cap: u64,
    shares: &[VolumeShare],
) -> Vec<PlannedGrant> {
    if remaining_rewards == 0 || shares.is_empty() {
        return Vec::new();
    }

    let total_volume: u128 = shares
        .iter()
        .map(|share| share.volume_lamports as u128)
        .sum();
    if total_volume == 0 {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..shares.len()).collect();
    order.sort_by(|&a, &b| {
        shares[b]
            .volume_lamports
            .cmp(&shares[a].volume_lamports)
            .then(shares[a].join_index.cmp(&shares[b].join_index))
    });

    let mut grants = Vec::with_capacity(shares.len());
    let mut remaining = remaining_rewards;

    for position in order {
        if remaining == 0 {
            break;
        }

        let raw = (remaining as u128)
            .saturating_mul(shares[position].volume_lamports as u128)
            / total_volume;

        let amount = (raw as u64).min(per_user_cap).min(remaining);
        if amount == 0 {
            continue;
        }

        remaining -= amount;
        grants.push(PlannedGrant { position, amount });
    }

    grants
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        DEFAULT_MAX_TRADE_REWARD_BPS, DEFAULT_VOLUME_TIER_MULTIPLIERS_BPS,
        DEFAULT_VOLUME_TIER_THRESHOLDS,
    };

    fn default_schedule() -> RewardTierSchedule {
        RewardTierSchedule {
            thresholds: DEFAULT_VOLUME_TIER_THRESHOLDS,
            multipliers_bps: DEFAULT_VOLUME_TIER_MULTIPLIERS_BPS,
        }
    }

    fn sol(amount: u64) -> u64 {
        amount * LAMPORTS_PER_SOL
    }

    #[test]
    fn multiplier_tier_boundaries() {
        let schedule = default_schedule();

        assert_eq!(volume_multiplier_bps(LAMPORTS_PER_SOL / 2, &schedule), 10_000);
        assert_eq!(volume_multiplier_bps(sol(5), &schedule), 12_000);
        assert_eq!(volume_multiplier_bps(sol(25), &schedule), 15_000);
        assert_eq!(volume_multiplier_bps(sol(75), &schedule), 20_000);
        assert_eq!(volume_multiplier_bps(sol(150), &schedule), 25_000);
    }

    #[test]
    fn multiplier_switches_exactly_at_thresholds() {
        let schedule = default_schedule();

        assert_eq!(volume_multiplier_bps(sol(1) - 1, &schedule), 10_000);
        assert_eq!(volume_multiplier_bps(sol(1), &schedule), 12_000);
        assert_eq!(volume_multiplier_bps(sol(100), &schedule), 25_000);
    }

    #[test]
    fn trade_reward_basic_formula() {
        // 1 SOL trade at 5% reward on a 100k pool, tier 1.0x:
        // base = 500 bps, reward = 100000 * 0.05 * 1.0 / 100 = 50
        let input = TradeRewardInput {
            pool_is_active: true,
            total_reward_pool: 100_000,
            remaining_rewards: 75_000,
            reward_percent_bps: 500,
            trade_lamports: sol(1),
            trader_volume_lamports: LAMPORTS_PER_SOL / 2,
        };

        let reward =
            calculate_trade_reward(&input, &default_schedule(), DEFAULT_MAX_TRADE_REWARD_BPS);
        assert_eq!(reward, 50);
    }

    #[test]
    fn trade_reward_respects_hard_ceiling() {
        // 100 SOL at 5% would be 50000 bps raw; capped to 1000 bps (10%)
        assert_eq!(base_reward_bps(sol(100), 500, DEFAULT_MAX_TRADE_REWARD_BPS), 1_000);

        let input = TradeRewardInput {
            pool_is_active: true,
            total_reward_pool: 100_000,
            remaining_rewards: 100_000,
            reward_percent_bps: 500,
            trade_lamports: sol(100),
            trader_volume_lamports: 0,
        };

        // 100000 * 0.10 * 1.0 / 100 = 100
        let reward =
            calculate_trade_reward(&input, &default_schedule(), DEFAULT_MAX_TRADE_REWARD_BPS);
        assert_eq!(reward, 100);
    }

    #[test]
    fn inactive_or_exhausted_pool_pays_nothing() {
        let mut input = TradeRewardInput {
            pool_is_active: false,
            total_reward_pool: 100_000,
            remaining_rewards: 100_000,
            reward_percent_bps: 500,
            trade_lamports: sol(1),
            trader_volume_lamports: 0,
        };

        let schedule = default_schedule();
        assert_eq!(
            calculate_trade_reward(&input, &schedule, DEFAULT_MAX_TRADE_REWARD_BPS),
            0
        );

        input.pool_is_active = true;
        input.remaining_rewards = 0;
        assert_eq!(
            calculate_trade_reward(&input, &schedule, DEFAULT_MAX_TRADE_REWARD_BPS),
            0
        );
    }

    #[test]
    fn trade_reward_clamps_to_remaining() {
        let input = TradeRewardInput {
            pool_is_active: true,
            total_reward_pool: 100_000,
            remaining_rewards: 30,
            reward_percent_bps: 500,
            trade_lamports: sol(1),
            trader_volume_lamports: 0,
        };

        let reward =
            calculate_trade_reward(&input, &default_schedule(), DEFAULT_MAX_TRADE_REWARD_BPS);
        assert_eq!(reward, 30);
    }

    #[test]
    fn volume_multiplier_scales_the_reward() {
        // Same trade, 150 SOL lifetime volume: 2.5x tier
        let input = TradeRewardInput {
            pool_is_active: true,
            total_reward_pool: 100_000,
            remaining_rewards: 75_000,
            reward_percent_bps: 500,
            trade_lamports: sol(1),
            trader_volume_lamports: sol(150),
        };

        let reward =
            calculate_trade_reward(&input, &default_schedule(), DEFAULT_MAX_TRADE_REWARD_BPS);
        assert_eq!(reward, 125);
    }

    #[test]
    fn distribution_caps_both_leaders() {
        // 75k remaining, volumes 80/20 SOL: both raw shares exceed the
        // 1000 cap, so each gets exactly 1000 and 73k remains
        let shares = [
            VolumeShare { volume_lamports: sol(80), join_index: 0 },
            VolumeShare { volume_lamports: sol(20), join_index: 1 },
        ];

        let grants = plan_distribution(75_000, 1_000, &shares);

        assert_eq!(
            grants,
            vec![
                PlannedGrant { position: 0, amount: 1_000 },
                PlannedGrant { position: 1, amount: 1_000 },
            ]
        );

        let granted: u64 = grants.iter().map(|g| g.amount).sum();
        assert_eq!(75_000 - granted, 73_000);
    }

    #[test]
    fn later_traders_split_what_caps_left_behind() {
        // Cap-then-decrement: the second trader's share is computed from
        // the post-cap remainder, not the original pool
        let shares = [
            VolumeShare { volume_lamports: sol(90), join_index: 0 },
            VolumeShare { volume_lamports: sol(10), join_index: 1 },
        ];

        let grants = plan_distribution(10_000, 1_000, &shares);

        assert_eq!(grants[0].amount, 1_000);
        // 9000 * 10 / 100 = 900
        assert_eq!(grants[1].amount, 900);
    }

    #[test]
    fn ties_resolve_in_first_seen_order() {
        let shares = [
            VolumeShare { volume_lamports: sol(10), join_index: 2 },
            VolumeShare { volume_lamports: sol(10), join_index: 0 },
            VolumeShare { volume_lamports: sol(10), join_index: 1 },
        ];

        let grants = plan_distribution(3_000, 10_000, &shares);

        let order: Vec<usize> = grants.iter().map(|g| g.position).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn zero_volume_snapshot_distributes_nothing() {
        let shares = [
            VolumeShare { volume_lamports: 0, join_index: 0 },
            VolumeShare { volume_lamports: 0, join_index: 1 },
        ];

        assert!(plan_distribution(75_000, 1_000, &shares).is_empty());
        assert!(plan_distribution(75_000, 1_000, &[]).is_empty());
        assert!(plan_distribution(0, 1_000, &shares).is_empty());
    }

    #[test]
    fn distribution_never_exceeds_remaining() {
        let shares: Vec<VolumeShare> = (0..20)
            .map(|i| VolumeShare {
                volume_lamports: sol(100 + i),
                join_index: i as u32,
            })
            .collect();

        for remaining in [1u64, 17, 999, 5_000, 100_000] {
            let grants = plan_distribution(remaining, 750, &shares);
            let granted: u64 = grants.iter().map(|g| g.amount).sum();
            assert!(granted <= remaining, "over-allocated at {}", remaining);
        }
    }

    #[test]
    fn exhaustion_stops_the_batch_early() {
        let shares = [
            VolumeShare { volume_lamports: sol(100), join_index: 0 },
            VolumeShare { volume_lamports: 0, join_index: 1 },
            VolumeShare { volume_lamports: 0, join_index: 2 },
        ];

        // The only trader with volume consumes the entire remainder
        let grants = plan_distribution(500, 10_000, &shares);

        assert_eq!(grants.len(), 1);
        assert_eq!(grants[0], PlannedGrant { position: 0, amount: 500 });
    }

    #[test]
    fn tier_schedule_rejects_unordered_thresholds() {
        let mut schedule = default_schedule();
        schedule.thresholds = [sol(10), sol(1), sol(50), sol(100)];

        assert!(schedule.validate().is_err());
        assert!(default_schedule().validate().is_ok());
    }
}
