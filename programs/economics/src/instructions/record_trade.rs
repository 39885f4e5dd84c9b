use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::EconomicsError;
use crate::events::{LaunchGraduated, MilestoneCrossed, RewardGranted, TradeRecorded};
use crate::state::{GlobalConfig, LaunchCurve, RewardPool, TradeSide, TraderVolume};
use crate::utils::{calculate_trade_reward, checkpoint_percent, TradeRewardInput};

#[derive(Accounts)]
pub struct RecordTrade<'info> {
    /// Only the configured ledger authority may feed trade events
    #[account(
        mut,
        constraint = ledger_authority.key() == global_config.ledger_authority
            @ EconomicsError::InvalidLedgerAuthority,
    )]
    pub ledger_authority: Signer<'info>,

    /// Global configuration account
    #[account(
        seeds = [GLOBAL_CONFIG_SEED],
        bump = global_config.bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    #[account(
        mut,
        seeds = [LAUNCH_CURVE_SEED, launch_curve.token_mint.as_ref()],
        bump = launch_curve.bump,
    )]
    pub launch_curve: Box<Account<'info, LaunchCurve>>,

    /// Trader whose accepted trade is being ingested (not a signer;
    /// the trade already settled on the external ledger)
    pub trader: SystemAccount<'info>,

    /// Aggregated volume record for this trader and launch
    #[account(
        init_if_needed,
        payer = ledger_authority,
        space = TraderVolume::SIZE,
        seeds = [TRADER_VOLUME_SEED, launch_curve.key().as_ref(), trader.key().as_ref()],
        bump,
    )]
    pub trader_volume: Box<Account<'info, TraderVolume>>,

    /// Reward pool for this launch, if the issuer funded one
    #[account(
        mut,
        constraint = reward_pool.launch == launch_curve.key()
            @ EconomicsError::InvalidVolumeRecord,
    )]
    pub reward_pool: Option<Box<Account<'info, RewardPool>>>,

    pub system_program: Program<'info, System>,
}

pub fn record_trade(
    ctx: Context<RecordTrade>,
    side: TradeSide,
    token_amount: u64,
    sol_amount: u64,
    tx_reference: [u8; 64],
) -> Result<()> {
    let launch = &mut ctx.accounts.launch_curve;
    let trader_volume = &mut ctx.accounts.trader_volume;
    let clock = Clock::get()?;
    let current_time = clock.unix_timestamp;

    ctx.accounts.global_config.require_not_paused()?;
    require!(sol_amount > 0, EconomicsError::InvalidTradeAmount);

    // Apply the trade to the one-directional sale curve
    match side {
        TradeSide::Buy => launch.record_buy(token_amount, sol_amount)?,
        TradeSide::Sell => launch.record_sell(sol_amount)?,
    }

    launch.total_trades = launch
        .total_trades
        .checked_add(1)
        .ok_or(EconomicsError::MathOverflow)?;

    // First time we see this trader: assign the first-seen join index
    let is_first_trade = trader_volume.user == Pubkey::default();
    if is_first_trade {
        trader_volume.user = ctx.accounts.trader.key();
        trader_volume.launch = launch.key();
        trader_volume.bump = ctx.bumps.trader_volume;
        trader_volume.join_index = launch.traders_count;

        launch.traders_count = launch
            .traders_count
            .checked_add(1)
            .ok_or(EconomicsError::MathOverflow)?;
    }

    trader_volume.record_trade(side, sol_amount, current_time)?;

    // Advance graduation progress and fire edge-triggered milestones
    let (crossed, newly_graduated) = launch.advance_progress(current_time);
    for bit in 0..MILESTONE_CHECKPOINTS_BPS.len() as u8 {
        if crossed & (1 << bit) != 0 {
            emit!(MilestoneCrossed {
                launch: launch.key(),
                checkpoint_percent: checkpoint_percent(bit),
                progress_bps: launch.progress_bps(),
                sol_collected_lamports: launch.sol_collected_lamports,
                timestamp: current_time,
                tx_reference,
            });
        }
    }

    if newly_graduated {
        emit!(LaunchGraduated {
            launch: launch.key(),
            sol_collected_lamports: launch.sol_collected_lamports,
            goal_lamports: launch.goal_lamports,
            timestamp: current_time,
            tx_reference,
        });

        msg!("Launch {} graduated", launch.key());
    }

    // Allocate the per-trade reward against the pool, if one exists
    if let Some(pool) = ctx.accounts.reward_pool.as_mut() {
        if is_first_trade {
            pool.trader_count = pool
                .trader_count
                .checked_add(1)
                .ok_or(EconomicsError::MathOverflow)?;
        }

        let input = TradeRewardInput {
            pool_is_active: pool.is_active,
            total_reward_pool: pool.total_reward_pool,
            remaining_rewards: pool.remaining_rewards,
            reward_percent_bps: pool.reward_percent_bps,
            trade_lamports: sol_amount,
            trader_volume_lamports: trader_volume.total_volume_lamports,
        };

        let reward = calculate_trade_reward(
            &input,
            &ctx.accounts.global_config.tier_schedule,
            ctx.accounts.global_config.max_trade_reward_bps,
        );

        if reward > 0 {
            pool.record_allocation(reward)?;
            trader_volume.credit_reward(reward)?;

            emit!(RewardGranted {
                pool: pool.key(),
                launch: launch.key(),
                user: trader_volume.user,
                sol_amount,
                reward_amount: reward,
                transaction_type: side.into(),
                remaining_rewards: pool.remaining_rewards,
                timestamp: current_time,
                tx_reference,
            });
        }
    }

    emit!(TradeRecorded {
        launch: launch.key(),
        trader: trader_volume.user,
        side,
        token_amount,
        sol_amount,
        spot_price_lamports: launch.spot_price_lamports(),
        tokens_sold: launch.tokens_sold,
        sol_collected_lamports: launch.sol_collected_lamports,
        timestamp: current_time,
        tx_reference,
    });

    msg!(
        "Trade recorded: {} lamports, {} sold, spot price {}",
        sol_amount,
        launch.tokens_sold,
        launch.spot_price_lamports()
    );

    Ok(())
}
