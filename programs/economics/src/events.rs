use anchor_lang::prelude::*;

use crate::state::TradeSide;

/// Origin of a reward grant
#[derive(Debug, Clone, Copy, AnchorSerialize, AnchorDeserialize, PartialEq, Eq)]
pub enum TransactionType {
    Buy,
    Sell,
    Distribution,
}

impl From<TradeSide> for TransactionType {
    fn from(side: TradeSide) -> Self {
        match side {
            TradeSide::Buy => TransactionType::Buy,
            TradeSide::Sell => TransactionType::Sell,
        }
    }
}

// =============================================================================
// LAUNCH CURVE LIFECYCLE EVENTS
// =============================================================================

/// Event emitted when a new launch curve is initialized
#[event]
pub struct LaunchCurveInitialized {
    /// Launch curve address
    pub launch: Pubkey,
    /// Creator of the launch
    pub creator: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Total sellable supply
    pub total_supply: u64,
    /// Base price at zero sold (lamports per whole token)
    pub base_price_lamports: u64,
    /// Terminal price at full supply
    pub terminal_price_lamports: u64,
    /// Graduation goal
    pub goal_lamports: u64,
    /// Creation timestamp
    pub timestamp: i64,
}

/// Event emitted for every accepted trade ingested from the ledger
#[event]
pub struct TradeRecorded {
    /// Launch curve address
    pub launch: Pubkey,
    /// Trader whose event was ingested
    pub trader: Pubkey,
    /// Buy or sell
    pub side: TradeSide,
    /// Tokens moved (base units; 0 for sells on the one-way curve)
    pub token_amount: u64,
    /// SOL volume of the trade
    pub sol_amount: u64,
    /// Spot price after applying the trade
    pub spot_price_lamports: u64,
    /// Cumulative tokens sold after the trade
    pub tokens_sold: u64,
    /// Cumulative SOL collected after the trade
    pub sol_collected_lamports: u64,
    /// Ingestion timestamp
    pub timestamp: i64,
    /// Opaque transaction reference supplied by the ledger caller
    pub tx_reference: [u8; 64],
}

/// Event emitted the first time progress crosses a milestone checkpoint
#[event]
pub struct MilestoneCrossed {
    /// Launch curve address
    pub launch: Pubkey,
    /// Checkpoint crossed, in percent (25 / 50 / 75 / 100)
    pub checkpoint_percent: u8,
    /// Progress at the time of crossing (bps)
    pub progress_bps: u16,
    /// SOL collected at the time of crossing
    pub sol_collected_lamports: u64,
    /// Crossing timestamp
    pub timestamp: i64,
    /// Opaque transaction reference supplied by the caller
    pub tx_reference: [u8; 64],
}

/// Event emitted once when the graduation latch flips
#[event]
pub struct LaunchGraduated {
    /// Launch curve address
    pub launch: Pubkey,
    /// SOL collected when the goal was crossed
    pub sol_collected_lamports: u64,
    /// Graduation goal
    pub goal_lamports: u64,
    /// Graduation timestamp
    pub timestamp: i64,
    /// Opaque transaction reference supplied by the caller
    pub tx_reference: [u8; 64],
}

/// Event emitted when a degenerate telemetry input was coerced to zero
#[event]
pub struct TelemetryCoerced {
    /// Launch curve address
    pub launch: Pubkey,
    /// Number of fields coerced in this ingestion
    pub coerced_fields: u8,
    /// Coercion timestamp
    pub timestamp: i64,
}

// =============================================================================
// REWARD POOL EVENTS
// =============================================================================

/// Event emitted when an issuer funds a new reward pool
#[event]
pub struct RewardPoolCreated {
    /// Reward pool address
    pub pool: Pubkey,
    /// Launch curve the pool rewards
    pub launch: Pubkey,
    /// Issuer who funded the pool
    pub authority: Pubkey,
    /// External raffle identifier
    pub raffle_id: String,
    /// Reward percent per SOL of volume (bps)
    pub reward_percent_bps: u16,
    /// Funded size
    pub total_reward_pool: u64,
    /// Creation timestamp
    pub timestamp: i64,
}

/// Event emitted on an explicit pool top-up
#[event]
pub struct RewardPoolToppedUp {
    /// Reward pool address
    pub pool: Pubkey,
    /// Amount added
    pub amount: u64,
    /// Funded size after the top-up
    pub total_reward_pool: u64,
    /// Remaining rewards after the top-up
    pub remaining_rewards: u64,
    /// Top-up timestamp
    pub timestamp: i64,
}

/// Event emitted when pool settings change
#[event]
pub struct RewardPoolUpdated {
    /// Reward pool address
    pub pool: Pubkey,
    /// Reward percent after the update (bps)
    pub reward_percent_bps: u16,
    /// Active flag after the update
    pub is_active: bool,
    /// Update timestamp
    pub timestamp: i64,
}

/// Write-once record of one reward allocation; the external ledger
/// persists these as the distribution results
#[event]
pub struct RewardGranted {
    /// Reward pool address
    pub pool: Pubkey,
    /// Launch curve address
    pub launch: Pubkey,
    /// Rewarded trader
    pub user: Pubkey,
    /// SOL volume the grant was based on
    pub sol_amount: u64,
    /// Reward amount in reward base units
    pub reward_amount: u64,
    /// What produced the grant
    pub transaction_type: TransactionType,
    /// Pool remaining after the grant
    pub remaining_rewards: u64,
    /// Grant timestamp
    pub timestamp: i64,
    /// Opaque transaction reference supplied by the caller
    pub tx_reference: [u8; 64],
}

/// Summary emitted after a batch distribution completes
#[event]
pub struct RewardsDistributed {
    /// Reward pool address
    pub pool: Pubkey,
    /// Traders granted a non-zero reward
    pub users_rewarded: u32,
    /// Total granted in this batch
    pub total_granted: u64,
    /// Pool remaining after the batch
    pub remaining_rewards: u64,
    /// Distribution timestamp
    pub timestamp: i64,
}

/// Event emitted when a trader claims accrued rewards
#[event]
pub struct RewardClaimed {
    /// Reward pool address
    pub pool: Pubkey,
    /// Claiming trader
    pub user: Pubkey,
    /// Amount paid out
    pub amount: u64,
    /// Trader's lifetime claimed total
    pub total_claimed: u64,
    /// Claim timestamp
    pub timestamp: i64,
}

// =============================================================================
// TRENDING EVENTS
// =============================================================================

/// Event emitted when the trending snapshot for a launch is refreshed
#[event]
pub struct TrendingScoreUpdated {
    /// Launch curve address
    pub launch: Pubkey,
    /// Composite trending score (0..=100)
    pub score: u8,
    /// Hype sub-score (0..=100)
    pub hype_score: u8,
    /// Whether all trending floors were cleared
    pub is_trending: bool,
    /// 24h volume used for the score
    pub volume_24h_lamports: u64,
    /// 24h trades used for the score
    pub trades_24h: u32,
    /// 24h participants used for the score
    pub participants_24h: u32,
    /// Refresh timestamp
    pub timestamp: i64,
    /// Opaque transaction reference supplied by the caller
    pub tx_reference: [u8; 64],
}
