use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::REWARD_POOL_SEED;
use crate::errors::EconomicsError;
use crate::events::RewardPoolToppedUp;
use crate::state::RewardPool;

#[derive(Accounts)]
pub struct TopUpRewardPool<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [REWARD_POOL_SEED, reward_pool.launch.as_ref()],
        bump = reward_pool.bump,
        constraint = reward_pool.authority == authority.key() @ EconomicsError::NotPoolAuthority,
    )]
    pub reward_pool: Box<Account<'info, RewardPool>>,

    #[account(
        mut,
        address = reward_pool.reward_vault @ EconomicsError::InvalidRewardVault,
    )]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    /// Issuer's token account funding the top-up
    #[account(
        mut,
        token::mint = reward_pool.reward_mint,
        token::authority = authority,
    )]
    pub authority_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

/// Explicit top-up: the only operation that grows a funded pool
pub fn top_up_reward_pool(ctx: Context<TopUpRewardPool>, amount: u64) -> Result<()> {
    let pool = &mut ctx.accounts.reward_pool;
    let clock = Clock::get()?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.authority_token_account.to_account_info(),
                to: ctx.accounts.reward_vault.to_account_info(),
                authority: ctx.accounts.authority.to_account_info(),
            },
        ),
        amount,
    )?;

    pool.top_up(amount)?;

    emit!(RewardPoolToppedUp {
        pool: pool.key(),
        amount,
        total_reward_pool: pool.total_reward_pool,
        remaining_rewards: pool.remaining_rewards,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Reward pool topped up by {}: total {}, remaining {}",
        amount,
        pool.total_reward_pool,
        pool.remaining_rewards
    );

    Ok(())
}
