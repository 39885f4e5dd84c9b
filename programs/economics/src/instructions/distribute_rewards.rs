use anchor_lang::prelude::*;

use crate::constants::REWARD_POOL_SEED;
use crate::errors::EconomicsError;
use crate::events::{RewardGranted, RewardsDistributed, TransactionType};
use crate::state::{RewardPool, TraderVolume};
use crate::utils::{plan_distribution, VolumeShare};

#[derive(Accounts)]
pub struct DistributeRewards<'info> {
    #[account(
        constraint = reward_pool.authority == authority.key() @ EconomicsError::NotPoolAuthority,
    )]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [REWARD_POOL_SEED, reward_pool.launch.as_ref()],
        bump = reward_pool.bump,
    )]
    pub reward_pool: Box<Account<'info, RewardPool>>,
    // Remaining accounts: the snapshot of TraderVolume records to
    // distribute over, all writable and all belonging to this pool
}

/// Proportional batch distribution over a snapshot of trader volume
/// records, passed as remaining accounts.
///
/// An inactive or exhausted pool distributes nothing; that is a normal
/// outcome, not an error.
pub fn distribute_rewards<'info>(
    ctx: Context<'_, '_, 'info, 'info, DistributeRewards<'info>>,
    tx_reference: [u8; 64],
) -> Result<()> {
    let pool = &mut ctx.accounts.reward_pool;
    let clock = Clock::get()?;
    let current_time = clock.unix_timestamp;

    if !pool.is_active || pool.remaining_rewards == 0 {
        msg!("Reward pool inactive or exhausted; nothing to distribute");
        return Ok(());
    }

    // Snapshot the volume records, rejecting foreign or duplicate entries
    let mut records: Vec<Account<'info, TraderVolume>> =
        Vec::with_capacity(ctx.remaining_accounts.len());
    for account_info in ctx.remaining_accounts.iter() {
        require!(
            account_info.is_writable,
            EconomicsError::InvalidVolumeRecord
        );

        let record = Account::<TraderVolume>::try_from(account_info)?;
        require!(
            record.launch == pool.launch,
            EconomicsError::InvalidVolumeRecord
        );

        for existing in records.iter() {
            require!(
                existing.user != record.user,
                EconomicsError::DuplicateVolumeRecord
            );
        }

        records.push(record);
    }

    if records.is_empty() {
        msg!("No volume records supplied; nothing to distribute");
        return Ok(());
    }

    let shares: Vec<VolumeShare> = records
        .iter()
        .map(|record| VolumeShare {
            volume_lamports: record.total_volume_lamports,
            join_index: record.join_index,
        })
        .collect();

    let grants = plan_distribution(pool.remaining_rewards, pool.daily_reward_limit, &shares);
    if grants.is_empty() {
        msg!("No volume basis for a proportional split");
        return Ok(());
    }

    let mut total_granted = 0u64;
    for grant in grants.iter() {
        let record = &mut records[grant.position];

        pool.record_allocation(grant.amount)?;
        record.credit_reward(grant.amount)?;

        total_granted = total_granted
            .checked_add(grant.amount)
            .ok_or(EconomicsError::MathOverflow)?;

        emit!(RewardGranted {
            pool: pool.key(),
            launch: pool.launch,
            user: record.user,
            sol_amount: record.total_volume_lamports,
            reward_amount: grant.amount,
            transaction_type: TransactionType::Distribution,
            remaining_rewards: pool.remaining_rewards,
            timestamp: current_time,
            tx_reference,
        });
    }

    // Persist the mutated records back to their accounts
    for record in records.iter() {
        record.exit(&crate::ID)?;
    }

    pool.last_distribution_at = current_time;

    emit!(RewardsDistributed {
        pool: pool.key(),
        users_rewarded: grants.len() as u32,
        total_granted,
        remaining_rewards: pool.remaining_rewards,
        timestamp: current_time,
    });

    msg!(
        "Distributed {} units to {} traders, {} remaining",
        total_granted,
        grants.len(),
        pool.remaining_rewards
    );

    Ok(())
}
