use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::const_pda::const_authority::VAULT_BUMP;
use crate::constants::{REWARD_POOL_SEED, TRADER_VOLUME_SEED, VAULT_AUTHORITY};
use crate::errors::EconomicsError;
use crate::events::RewardClaimed;
use crate::state::{RewardPool, TraderVolume};

#[derive(Accounts)]
pub struct ClaimReward<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    /// vault authority
    #[account(
        seeds = [VAULT_AUTHORITY.as_ref()],
        bump,
    )]
    pub vault_authority: SystemAccount<'info>,

    #[account(
        seeds = [REWARD_POOL_SEED, reward_pool.launch.as_ref()],
        bump = reward_pool.bump,
    )]
    pub reward_pool: Box<Account<'info, RewardPool>>,

    #[account(
        mut,
        seeds = [TRADER_VOLUME_SEED, reward_pool.launch.as_ref(), user.key().as_ref()],
        bump = trader_volume.bump,
        constraint = trader_volume.pending_reward > 0 @ EconomicsError::NothingToClaim,
    )]
    pub trader_volume: Box<Account<'info, TraderVolume>>,

    /// Pool's reward vault
    #[account(
        mut,
        address = reward_pool.reward_vault @ EconomicsError::InvalidRewardVault,
        token::mint = reward_pool.reward_mint,
        token::authority = vault_authority,
    )]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    /// User's token account to receive the reward
    #[account(
        mut,
        token::mint = reward_pool.reward_mint,
        token::authority = user,
    )]
    pub user_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

/// Pay out a trader's accrued pending reward from the pool vault
pub fn claim_reward(ctx: Context<ClaimReward>) -> Result<()> {
    let trader_volume = &mut ctx.accounts.trader_volume;
    let clock = Clock::get()?;
    let current_time = clock.unix_timestamp;

    let amount = trader_volume.settle_claim()?;

    require!(
        ctx.accounts.reward_vault.amount >= amount,
        EconomicsError::InsufficientVaultBalance
    );

    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY, &[VAULT_BUMP]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.reward_vault.to_account_info(),
                to: ctx.accounts.user_token_account.to_account_info(),
                authority: ctx.accounts.vault_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(RewardClaimed {
        pool: ctx.accounts.reward_pool.key(),
        user: ctx.accounts.user.key(),
        amount,
        total_claimed: trader_volume.claimed_reward,
        timestamp: current_time,
    });

    msg!("Reward claimed: {} units", amount);

    Ok(())
}
