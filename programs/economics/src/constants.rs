// ===== Seeds =====
pub const GLOBAL_CONFIG_SEED: &[u8] = b"global_config";
pub const LAUNCH_CURVE_SEED: &[u8] = b"launch_curve";
pub const REWARD_POOL_SEED: &[u8] = b"reward_pool";
pub const TRADER_VOLUME_SEED: &[u8] = b"trader_volume";
pub const TRENDING_STATE_SEED: &[u8] = b"trending_state";
pub const VAULT_AUTHORITY: &[u8] = b"vault_authority";
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";

// ===== Fixed-point Scales =====
/// Basis-point denominator used for all percentage math
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Composite and hype scores are reported on 0..=100
pub const SCORE_MAX: u64 = 100;

// ===== Token Configuration =====
/// Maximum supported token decimals for a launch curve
pub const MAX_TOKEN_DECIMALS: u8 = 12;

// ===== Graduation =====
/// Milestone checkpoints in basis points of the graduation goal
pub const MILESTONE_CHECKPOINTS_BPS: [u16; 4] = [2_500, 5_000, 7_500, 10_000];

// ===== Reward Allocation Defaults =====
/// Issuer reward percent is capped at 20% (2000 bps)
pub const MAX_REWARD_PERCENT_BPS: u16 = 2_000;

/// Hard ceiling on the per-trade base reward fraction: 10% of the pool
pub const DEFAULT_MAX_TRADE_REWARD_BPS: u16 = 1_000;

/// Volume tier thresholds in lamports: 1 / 10 / 50 / 100 SOL
pub const DEFAULT_VOLUME_TIER_THRESHOLDS: [u64; 4] = [
    1_000_000_000,
    10_000_000_000,
    50_000_000_000,
    100_000_000_000,
];

/// Volume tier multipliers in basis points: 1.0x / 1.2x / 1.5x / 2.0x / 2.5x
pub const DEFAULT_VOLUME_TIER_MULTIPLIERS_BPS: [u16; 5] =
    [10_000, 12_000, 15_000, 20_000, 25_000];

/// Per-user cap for one batch distribution: 1000 whole tokens
/// (scaled by the reward mint's decimals at pool creation)
pub const DEFAULT_DAILY_REWARD_LIMIT_TOKENS: u64 = 1_000;

// ===== Trending Defaults =====
/// Composite weights in bps: volume / trades / participants / hype / social
pub const DEFAULT_TRENDING_WEIGHTS_BPS: [u16; 5] = [3_000, 2_500, 2_000, 1_500, 1_000];

/// Hype weights in bps: sales ratio / time pressure / social / participants / volume
pub const DEFAULT_HYPE_WEIGHTS_BPS: [u16; 5] = [3_000, 2_000, 2_000, 1_500, 1_500];

/// Raw-metric normalization scale factors (score points per unit, capped at 100)
pub const VOLUME_SCORE_PER_SOL: u64 = 10;
pub const TRADES_SCORE_PER_TRADE: u64 = 2;
pub const PARTICIPANTS_SCORE_PER_USER: u64 = 5;

/// Hype sub-score saturation points
pub const HYPE_SOCIAL_MENTIONS_CAP: u64 = 100;
pub const HYPE_UNIQUE_PARTICIPANTS_CAP: u64 = 50;
pub const HYPE_VOLUME_CAP_SOL: u64 = 100;
pub const HYPE_TIME_WINDOW_SECS: u64 = 24 * 60 * 60;

/// Trending floors: a launch is trending only when all four hold
pub const DEFAULT_MIN_TRENDING_VOLUME_LAMPORTS: u64 = 1_000_000_000; // 1 SOL
pub const DEFAULT_MIN_TRENDING_TRADES: u32 = 5;
pub const DEFAULT_MIN_TRENDING_PARTICIPANTS: u32 = 3;
pub const DEFAULT_MIN_TRENDING_HYPE_SCORE: u8 = 10;
