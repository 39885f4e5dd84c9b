use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::EconomicsError;
use crate::state::GlobalConfig;
use crate::utils::{RewardTierSchedule, TrendingFloors};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct UpdateConfigParams {
    pub ledger_authority: Option<Pubkey>,
    pub paused: Option<bool>,
    pub tier_schedule: Option<RewardTierSchedule>,
    pub max_trade_reward_bps: Option<u16>,
    pub daily_reward_limit_tokens: Option<u64>,
    pub trending_weights_bps: Option<[u16; 5]>,
    pub hype_weights_bps: Option<[u16; 5]>,
    pub trending_floors: Option<TrendingFloors>,
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_CONFIG_SEED],
        bump = global_config.bump,
        constraint = global_config.admin == admin.key() @ EconomicsError::Unauthorized,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,
}

pub fn update_config(
    ctx: Context<UpdateConfig>,
    params: UpdateConfigParams,
) -> Result<()> {
    let config = &mut ctx.accounts.global_config;

    // Update configuration parameters
    if let Some(ledger_authority) = params.ledger_authority {
        config.ledger_authority = ledger_authority;
    }

    if let Some(paused) = params.paused {
        config.paused = paused;
    }

    if let Some(tier_schedule) = params.tier_schedule {
        config.tier_schedule = tier_schedule;
    }

    if let Some(max_trade_reward_bps) = params.max_trade_reward_bps {
        config.max_trade_reward_bps = max_trade_reward_bps;
    }

    if let Some(daily_reward_limit_tokens) = params.daily_reward_limit_tokens {
        config.daily_reward_limit_tokens = daily_reward_limit_tokens;
    }

    if let Some(trending_weights_bps) = params.trending_weights_bps {
        config.trending_weights_bps = trending_weights_bps;
    }

    if let Some(hype_weights_bps) = params.hype_weights_bps {
        config.hype_weights_bps = hype_weights_bps;
    }

    if let Some(trending_floors) = params.trending_floors {
        config.trending_floors = trending_floors;
    }

    // Updated tunables go through the same synchronous validation
    config.validate()?;

    msg!("Global config updated successfully");

    Ok(())
}
