#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

mod const_pda;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::TradeSide;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod launch_economics {
    use super::*;

    /// Initialize global configuration
    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        params: InitializeConfigParams,
    ) -> Result<()> {
        instructions::initialize_config(ctx, params)
    }

    /// Update global configuration (admin only)
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        params: UpdateConfigParams,
    ) -> Result<()> {
        instructions::update_config(ctx, params)
    }

    /// Initialize a new launch curve
    pub fn initialize_launch(
        ctx: Context<InitializeLaunch>,
        params: InitializeLaunchParams,
    ) -> Result<()> {
        instructions::initialize_launch(ctx, params)
    }

    /// Ingest one accepted trade from the external ledger
    pub fn record_trade(
        ctx: Context<RecordTrade>,
        side: TradeSide,
        token_amount: u64,
        sol_amount: u64,
        tx_reference: [u8; 64],
    ) -> Result<()> {
        instructions::record_trade(ctx, side, token_amount, sol_amount, tx_reference)
    }

    /// Re-ingest an externally-read collected-SOL figure (defensive)
    pub fn sync_progress(
        ctx: Context<SyncProgress>,
        reported_lamports: i64,
        tx_reference: [u8; 64],
    ) -> Result<()> {
        instructions::sync_progress(ctx, reported_lamports, tx_reference)
    }

    /// Create and fund a reward pool for a launch
    pub fn create_reward_pool(
        ctx: Context<CreateRewardPool>,
        params: CreateRewardPoolParams,
    ) -> Result<()> {
        instructions::create_reward_pool(ctx, params)
    }

    /// Top up an existing reward pool
    pub fn top_up_reward_pool(ctx: Context<TopUpRewardPool>, amount: u64) -> Result<()> {
        instructions::top_up_reward_pool(ctx, amount)
    }

    /// Update reward pool settings (issuer only)
    pub fn update_reward_pool(
        ctx: Context<UpdateRewardPool>,
        params: UpdateRewardPoolParams,
    ) -> Result<()> {
        instructions::update_reward_pool(ctx, params)
    }

    /// Batch-distribute the remaining pool over trader volume records
    pub fn distribute_rewards<'info>(
        ctx: Context<'_, '_, 'info, 'info, DistributeRewards<'info>>,
        tx_reference: [u8; 64],
    ) -> Result<()> {
        instructions::distribute_rewards(ctx, tx_reference)
    }

    /// Claim accrued rewards (trader)
    pub fn claim_reward(ctx: Context<ClaimReward>) -> Result<()> {
        instructions::claim_reward(ctx)
    }

    /// Refresh the trending snapshot from indexer telemetry
    pub fn refresh_trending(
        ctx: Context<RefreshTrending>,
        params: TrendingTelemetryParams,
        tx_reference: [u8; 64],
    ) -> Result<()> {
        instructions::refresh_trending(ctx, params, tx_reference)
    }
}
