use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::EconomicsError;
use crate::events::{TelemetryCoerced, TrendingScoreUpdated};
use crate::state::{GlobalConfig, LaunchCurve, TrendingState};
use crate::utils::{hype_score, is_trending, trending_score, HypeInputs, TrendingInputs};

/// 24h telemetry snapshot supplied by the indexer. The wire types are
/// signed; malformed (negative) readings degrade to zero.
#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct TrendingTelemetryParams {
    pub volume_24h_lamports: i64,
    pub trades_24h: i64,
    pub participants_24h: i64,
    pub social_engagement_score: i64,
    pub ticket_sales: i64,
    pub max_tickets: i64,
    pub time_remaining_secs: i64,
    pub social_mentions: i64,
    pub unique_participants: i64,
}

#[derive(Accounts)]
pub struct RefreshTrending<'info> {
    /// Only the configured ledger authority may feed telemetry
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
        seeds = [LAUNCH_CURVE_SEED, launch_curve.token_mint.as_ref()],
        bump = launch_curve.bump,
    )]
    pub launch_curve: Box<Account<'info, LaunchCurve>>,

    #[account(
        init_if_needed,
        payer = ledger_authority,
        space = TrendingState::SIZE,
        seeds = [TRENDING_STATE_SEED, launch_curve.key().as_ref()],
        bump,
    )]
    pub trending_state: Box<Account<'info, TrendingState>>,

    pub system_program: Program<'info, System>,
}

pub fn refresh_trending(
    ctx: Context<RefreshTrending>,
    params: TrendingTelemetryParams,
    tx_reference: [u8; 64],
) -> Result<()> {
    let config = &ctx.accounts.global_config;
    let launch = &ctx.accounts.launch_curve;
    let state = &mut ctx.accounts.trending_state;
    let clock = Clock::get()?;
    let current_time = clock.unix_timestamp;

    let mut coerced_fields = 0u8;
    let volume_24h_lamports = coerce(params.volume_24h_lamports, &mut coerced_fields);
    let trades_24h = coerce(params.trades_24h, &mut coerced_fields);
    let participants_24h = coerce(params.participants_24h, &mut coerced_fields);
    let social_engagement = coerce(params.social_engagement_score, &mut coerced_fields);
    let ticket_sales = coerce(params.ticket_sales, &mut coerced_fields);
    let max_tickets = coerce(params.max_tickets, &mut coerced_fields);
    let time_remaining_secs = coerce(params.time_remaining_secs, &mut coerced_fields);
    let social_mentions = coerce(params.social_mentions, &mut coerced_fields);
    let unique_participants = coerce(params.unique_participants, &mut coerced_fields);

    if coerced_fields > 0 {
        msg!(
            "{} degenerate telemetry fields coerced to 0 for launch {}",
            coerced_fields,
            launch.key()
        );

        emit!(TelemetryCoerced {
            launch: launch.key(),
            coerced_fields,
            timestamp: current_time,
        });
    }

    let hype = hype_score(
        &HypeInputs {
            ticket_sales,
            max_tickets,
            time_remaining_secs,
            social_mentions,
            unique_participants,
            volume_24h_lamports,
        },
        &config.hype_weights_bps,
    );

    let inputs = TrendingInputs {
        volume_24h_lamports,
        trades_24h: trades_24h.min(u32::MAX as u64) as u32,
        participants_24h: participants_24h.min(u32::MAX as u64) as u32,
        hype_score: hype,
        social_engagement_score: social_engagement.min(SCORE_MAX) as u8,
    };

    let score = trending_score(&inputs, &config.trending_weights_bps);
    let trending = is_trending(&inputs, &config.trending_floors);

    if state.launch == Pubkey::default() {
        state.launch = launch.key();
        state.bump = ctx.bumps.trending_state;
    }

    state.volume_24h_lamports = inputs.volume_24h_lamports;
    state.trades_24h = inputs.trades_24h;
    state.participants_24h = inputs.participants_24h;
    state.social_engagement_score = inputs.social_engagement_score;
    state.hype_score = hype;
    state.score = score;
    state.is_trending = trending;
    state.updated_at = current_time;

    emit!(TrendingScoreUpdated {
        launch: launch.key(),
        score,
        hype_score: hype,
        is_trending: trending,
        volume_24h_lamports: inputs.volume_24h_lamports,
        trades_24h: inputs.trades_24h,
        participants_24h: inputs.participants_24h,
        timestamp: current_time,
        tx_reference,
    });

    msg!(
        "Trending refreshed: score {}, hype {}, trending {}",
        score,
        hype,
        trending
    );

    Ok(())
}

fn coerce(value: i64, coerced_fields: &mut u8) -> u64 {
    if value < 0 {
        *coerced_fields = coerced_fields.saturating_add(1);
        0
    } else {
        value as u64
    }
}
