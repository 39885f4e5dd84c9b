use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::GlobalConfig;
use crate::utils::{RewardTierSchedule, TrendingFloors};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct InitializeConfigParams {
    pub ledger_authority: Pubkey,
    pub tier_schedule: Option<RewardTierSchedule>,
    pub max_trade_reward_bps: Option<u16>,
    pub daily_reward_limit_tokens: Option<u64>,
    pub trending_weights_bps: Option<[u16; 5]>,
    pub hype_weights_bps: Option<[u16; 5]>,
    pub trending_floors: Option<TrendingFloors>,
}

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = GlobalConfig::SIZE,
        seeds = [GLOBAL_CONFIG_SEED],
        bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_config(
    ctx: Context<InitializeConfig>,
    params: InitializeConfigParams,
) -> Result<()> {
    let config = &mut ctx.accounts.global_config;

    // First set default values
    config.initialize_defaults(
        ctx.accounts.admin.key(),
        params.ledger_authority,
        ctx.bumps.global_config,
    );

    // Then override default values with parameters
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

    // Reject invalid tunables before they are ever consulted
    config.validate()?;

    msg!("Global config initialized successfully");
    msg!("Admin: {}", config.admin);
    msg!("Ledger authority: {}", config.ledger_authority);

    Ok(())
}
