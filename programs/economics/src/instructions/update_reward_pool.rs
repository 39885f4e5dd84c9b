use anchor_lang::prelude::*;

use crate::constants::{MAX_REWARD_PERCENT_BPS, REWARD_POOL_SEED};
use crate::errors::EconomicsError;
use crate::events::RewardPoolUpdated;
use crate::state::RewardPool;

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct UpdateRewardPoolParams {
    pub reward_percent_bps: Option<u16>,
    pub is_active: Option<bool>,
}

#[derive(Accounts)]
pub struct UpdateRewardPool<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [REWARD_POOL_SEED, reward_pool.launch.as_ref()],
        bump = reward_pool.bump,
        constraint = reward_pool.authority == authority.key() @ EconomicsError::NotPoolAuthority,
    )]
    pub reward_pool: Box<Account<'info, RewardPool>>,
}

pub fn update_reward_pool(
    ctx: Context<UpdateRewardPool>,
    params: UpdateRewardPoolParams,
) -> Result<()> {
    let pool = &mut ctx.accounts.reward_pool;
    let clock = Clock::get()?;

    if let Some(reward_percent_bps) = params.reward_percent_bps {
        // Same synchronous validation as at creation
        require!(
            reward_percent_bps <= MAX_REWARD_PERCENT_BPS,
            EconomicsError::InvalidRewardPercent
        );
        pool.reward_percent_bps = reward_percent_bps;
    }

    if let Some(is_active) = params.is_active {
        pool.is_active = is_active;
    }

    emit!(RewardPoolUpdated {
        pool: pool.key(),
        reward_percent_bps: pool.reward_percent_bps,
        is_active: pool.is_active,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Reward pool updated: {} bps, active {}",
        pool.reward_percent_bps,
        pool.is_active
    );

    Ok(())
}
