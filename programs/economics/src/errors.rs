use anchor_lang::prelude::*;

#[error_code]
pub enum EconomicsError {
    // ===== Permission Errors =====
    #[msg("Unauthorized: Only admin can perform this action")]
    Unauthorized,

    #[msg("Only the configured ledger authority can ingest events")]
    InvalidLedgerAuthority,

    #[msg("Not the authority of this reward pool")]
    NotPoolAuthority,

    // ===== Status Errors =====
    #[msg("Platform is currently paused")]
    PlatformPaused,

    #[msg("Launch curve is already graduated")]
    AlreadyGraduated,

    // ===== Curve Configuration Errors =====
    #[msg("Total supply must be greater than zero")]
    InvalidTotalSupply,

    #[msg("Unsupported token decimals")]
    InvalidDecimals,

    #[msg("Terminal price must not be below base price")]
    InvalidPriceRange,

    #[msg("Graduation goal must be greater than zero")]
    InvalidGraduationGoal,

    // ===== Reward Pool Configuration Errors =====
    #[msg("Reward percent out of range (0 - 2000 bps)")]
    InvalidRewardPercent,

    #[msg("Reward pool size must be greater than zero")]
    InvalidRewardPoolSize,

    #[msg("Volume tier thresholds must be strictly increasing")]
    InvalidVolumeTiers,

    #[msg("Weights must sum to exactly 10000 bps")]
    InvalidWeights,

    // ===== Trade Ingestion Errors =====
    #[msg("Trade amount must be greater than zero")]
    InvalidTradeAmount,

    // ===== Math Errors =====
    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Division by zero")]
    DivisionByZero,

    #[msg("Type conversion failed")]
    TypeCastFailed,

    // ===== Claim Errors =====
    #[msg("Nothing to claim")]
    NothingToClaim,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Invalid reward mint")]
    InvalidRewardMint,

    #[msg("Invalid reward vault")]
    InvalidRewardVault,

    // ===== Batch Distribution Errors =====
    #[msg("Remaining account is not a trader volume record for this pool")]
    InvalidVolumeRecord,

    #[msg("Duplicate trader volume record in distribution batch")]
    DuplicateVolumeRecord,
}
