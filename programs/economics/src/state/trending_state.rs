use anchor_lang::prelude::*;

/// Last computed trending snapshot for one launch. Derived data: always
/// reconstructable from ingested telemetry, never authoritative.
#[account]
pub struct TrendingState {
    /// Associated launch curve
    pub launch: Pubkey,

    /// bump seed
    pub bump: u8,

    // ===== Last Ingested Telemetry =====
    pub volume_24h_lamports: u64,

    pub trades_24h: u32,

    pub participants_24h: u32,

    /// Social engagement sub-score (0..=100, supplied by the indexer)
    pub social_engagement_score: u8,

    // ===== Derived Scores =====
    /// Hype sub-score (0..=100)
    pub hype_score: u8,

    /// Composite trending score (0..=100)
    pub score: u8,

    /// Whether all trending floors were cleared
    pub is_trending: bool,

    /// Time of the last refresh
    pub updated_at: i64,

    /// Reserved space
    pub reserved: [u64; 2],
}

impl TrendingState {
    pub const SIZE: usize = 8 + // discriminator
        32 + // launch
        1 + // bump
        8 + // volume_24h_lamports
        4 + // trades_24h
        4 + // participants_24h
        1 + // social_engagement_score
        1 + // hype_score
        1 + // score
        1 + // is_trending
        8 + // updated_at
        8 * 2; // reserved
}
