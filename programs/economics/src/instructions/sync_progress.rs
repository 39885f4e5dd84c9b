use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::EconomicsError;
use crate::events::{LaunchGraduated, MilestoneCrossed, TelemetryCoerced};
use crate::state::{GlobalConfig, LaunchCurve};
use crate::utils::{checkpoint_percent, coerce_reported_lamports};

#[derive(Accounts)]
pub struct SyncProgress<'info> {
    /// Only the configured ledger authority may feed progress readings
    #[account(
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
}

/// Re-ingest an externally-read collected-SOL figure.
///
/// The reading comes over a signed wire type; malformed values degrade
/// to 0 rather than erroring, and a stale lower figure can never lower
/// the stored progress or revert the graduation latch.
pub fn sync_progress(
    ctx: Context<SyncProgress>,
    reported_lamports: i64,
    tx_reference: [u8; 64],
) -> Result<()> {
    let launch = &mut ctx.accounts.launch_curve;
    let clock = Clock::get()?;
    let current_time = clock.unix_timestamp;

    let (reported, coerced) = coerce_reported_lamports(reported_lamports);
    if coerced {
        msg!(
            "Degenerate progress reading {} coerced to 0 for launch {}",
            reported_lamports,
            launch.key()
        );

        emit!(TelemetryCoerced {
            launch: launch.key(),
            coerced_fields: 1,
            timestamp: current_time,
        });
    }

    launch.observe_collected(reported);

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

    msg!(
        "Progress synced: {} / {} lamports ({} bps)",
        launch.sol_collected_lamports,
        launch.goal_lamports,
        launch.progress_bps()
    );

    Ok(())
}
