use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::EconomicsError;
use crate::events::RewardPoolCreated;
use crate::state::{GlobalConfig, LaunchCurve, RewardPool};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct CreateRewardPoolParams {
    pub raffle_id: String,
    pub reward_percent_bps: u16,
    pub amount: u64,
}

#[derive(Accounts)]
pub struct CreateRewardPool<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Global configuration account
    #[account(
        seeds = [GLOBAL_CONFIG_SEED],
        bump = global_config.bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    #[account(
        seeds = [LAUNCH_CURVE_SEED, launch_curve.token_mint.as_ref()],
        bump = launch_curve.bump,
    )]
    pub launch_curve: Box<Account<'info, LaunchCurve>>,

    /// Mint the rewards are paid in
    pub reward_mint: Box<Account<'info, Mint>>,

    /// vault authority
    #[account(
        seeds = [VAULT_AUTHORITY.as_ref()],
        bump,
    )]
    pub vault_authority: SystemAccount<'info>,

    #[account(
        init,
        payer = authority,
        space = RewardPool::SIZE,
        seeds = [REWARD_POOL_SEED, launch_curve.key().as_ref()],
        bump,
    )]
    pub reward_pool: Box<Account<'info, RewardPool>>,

    /// Vault holding the funded rewards
    #[account(
        init,
        payer = authority,
        seeds = [REWARD_VAULT_SEED, launch_curve.key().as_ref()],
        bump,
        token::mint = reward_mint,
        token::authority = vault_authority,
    )]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    /// Issuer's token account funding the pool
    #[account(
        mut,
        token::mint = reward_mint,
        token::authority = authority,
    )]
    pub authority_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn create_reward_pool(
    ctx: Context<CreateRewardPool>,
    params: CreateRewardPoolParams,
) -> Result<()> {
    let config = &ctx.accounts.global_config;
    let pool = &mut ctx.accounts.reward_pool;
    let clock = Clock::get()?;

    config.require_not_paused()?;

    // Configuration errors reject here, never at allocation time
    RewardPool::validate_params(&params.raffle_id, params.reward_percent_bps, params.amount)?;

    // Fund the vault up front; the pool only ever pays out of it
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.authority_token_account.to_account_info(),
                to: ctx.accounts.reward_vault.to_account_info(),
                authority: ctx.accounts.authority.to_account_info(),
            },
        ),
        params.amount,
    )?;

    // Per-user batch cap, scaled into the reward mint's base units
    let unit = 10u64
        .checked_pow(ctx.accounts.reward_mint.decimals as u32)
        .ok_or(EconomicsError::MathOverflow)?;
    let daily_reward_limit = config
        .daily_reward_limit_tokens
        .checked_mul(unit)
        .ok_or(EconomicsError::MathOverflow)?;

    pool.launch = ctx.accounts.launch_curve.key();
    pool.authority = ctx.accounts.authority.key();
    pool.reward_mint = ctx.accounts.reward_mint.key();
    pool.reward_vault = ctx.accounts.reward_vault.key();
    pool.bump = ctx.bumps.reward_pool;
    pool.raffle_id = params.raffle_id;

    pool.reward_percent_bps = params.reward_percent_bps;
    pool.is_active = true;
    pool.daily_reward_limit = daily_reward_limit;

    pool.total_reward_pool = params.amount;
    pool.distributed_rewards = 0;
    pool.remaining_rewards = params.amount;

    pool.trader_count = 0;
    pool.created_at = clock.unix_timestamp;
    pool.last_distribution_at = 0;

    emit!(RewardPoolCreated {
        pool: pool.key(),
        launch: pool.launch,
        authority: pool.authority,
        raffle_id: pool.raffle_id.clone(),
        reward_percent_bps: pool.reward_percent_bps,
        total_reward_pool: pool.total_reward_pool,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Reward pool created for launch {}: {} units at {} bps",
        pool.launch,
        pool.total_reward_pool,
        pool.reward_percent_bps
    );

    Ok(())
}
