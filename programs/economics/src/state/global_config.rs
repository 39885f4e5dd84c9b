use anchor_lang::prelude::*;

use crate::constants::*;
use crate::utils::{validate_weights, RewardTierSchedule, TrendingFloors};

#[account]
pub struct GlobalConfig {
    /// Admin address (can update configuration)
    pub admin: Pubkey,

    /// Only signer allowed to ingest ledger events (trades, telemetry)
    pub ledger_authority: Pubkey,

    /// Whether new launches and ingestion are paused
    pub paused: bool,

    // ===== Reward Allocation Tunables =====
    /// Volume tier schedule for the reward multiplier
    pub tier_schedule: RewardTierSchedule,

    /// Hard ceiling on the per-trade base reward fraction (bps)
    pub max_trade_reward_bps: u16,

    /// Per-user cap for one batch distribution, in whole tokens
    pub daily_reward_limit_tokens: u64,

    // ===== Trending Tunables =====
    /// Composite weights: volume / trades / participants / hype / social
    pub trending_weights_bps: [u16; 5],

    /// Hype weights: sales ratio / time pressure / social / participants / volume
    pub hype_weights_bps: [u16; 5],

    /// Activity floors for the trending flag
    pub trending_floors: TrendingFloors,

    // ===== Bookkeeping =====
    /// Number of launches created
    pub launch_count: u64,

    /// bump seed
    pub bump: u8,

    /// Reserved space
    pub reserved: [u64; 8],
}

impl GlobalConfig {
    pub const SIZE: usize = 8 + // discriminator
        32 + // admin
        32 + // ledger_authority
        1 + // paused
        (8 * 4 + 2 * 5) + // tier_schedule
        2 + // max_trade_reward_bps
        8 + // daily_reward_limit_tokens
        2 * 5 + // trending_weights_bps
        2 * 5 + // hype_weights_bps
        (8 + 4 + 4 + 1) + // trending_floors
        8 + // launch_count
        1 + // bump
        8 * 8; // reserved

    /// Initialize default configuration
    pub fn initialize_defaults(&mut self, admin: Pubkey, ledger_authority: Pubkey, bump: u8) {
        self.admin = admin;
        self.ledger_authority = ledger_authority;
        self.paused = false;
        self.tier_schedule = RewardTierSchedule {
            thresholds: DEFAULT_VOLUME_TIER_THRESHOLDS,
            multipliers_bps: DEFAULT_VOLUME_TIER_MULTIPLIERS_BPS,
        };
        self.max_trade_reward_bps = DEFAULT_MAX_TRADE_REWARD_BPS;
        self.daily_reward_limit_tokens = DEFAULT_DAILY_REWARD_LIMIT_TOKENS;
        self.trending_weights_bps = DEFAULT_TRENDING_WEIGHTS_BPS;
        self.hype_weights_bps = DEFAULT_HYPE_WEIGHTS_BPS;
        self.trending_floors = TrendingFloors {
            min_volume_lamports: DEFAULT_MIN_TRENDING_VOLUME_LAMPORTS,
            min_trades: DEFAULT_MIN_TRENDING_TRADES,
            min_participants: DEFAULT_MIN_TRENDING_PARTICIPANTS,
            min_hype_score: DEFAULT_MIN_TRENDING_HYPE_SCORE,
        };
        self.launch_count = 0;

        self.bump = bump;
    }

    /// Validate the tunables; rejects synchronously at create/update time
    pub fn validate(&self) -> Result<()> {
        self.tier_schedule.validate()?;

        require!(
            self.max_trade_reward_bps as u64 <= BPS_DENOMINATOR,
            crate::errors::EconomicsError::InvalidRewardPercent
        );

        require!(
            self.daily_reward_limit_tokens > 0,
            crate::errors::EconomicsError::InvalidRewardPoolSize
        );

        validate_weights(&self.trending_weights_bps)?;
        validate_weights(&self.hype_weights_bps)?;

        Ok(())
    }

    pub fn require_not_paused(&self) -> Result<()> {
        require!(!self.paused, crate::errors::EconomicsError::PlatformPaused);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> GlobalConfig {
        let mut config = GlobalConfig {
            admin: Pubkey::default(),
            ledger_authority: Pubkey::default(),
            paused: false,
            tier_schedule: RewardTierSchedule {
                thresholds: DEFAULT_VOLUME_TIER_THRESHOLDS,
                multipliers_bps: DEFAULT_VOLUME_TIER_MULTIPLIERS_BPS,
            },
            max_trade_reward_bps: 0,
            daily_reward_limit_tokens: 0,
            trending_weights_bps: [0; 5],
            hype_weights_bps: [0; 5],
            trending_floors: TrendingFloors {
                min_volume_lamports: 0,
                min_trades: 0,
                min_participants: 0,
                min_hype_score: 0,
            },
            launch_count: 0,
            bump: 0,
            reserved: [0; 8],
        };
        config.initialize_defaults(Pubkey::new_unique(), Pubkey::new_unique(), 255);
        config
    }

    #[test]
    fn defaults_pass_validation() {
        assert!(default_config().validate().is_ok());
    }

    #[test]
    fn bad_weight_vector_is_rejected() {
        let mut config = default_config();
        config.trending_weights_bps = [5_000, 5_000, 5_000, 0, 0];

        assert!(config.validate().is_err());
    }

    #[test]
    fn unordered_tiers_are_rejected() {
        let mut config = default_config();
        config.tier_schedule.thresholds[1] = config.tier_schedule.thresholds[0];

        assert!(config.validate().is_err());
    }
}
