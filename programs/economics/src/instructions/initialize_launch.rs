use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::*;
use crate::errors::EconomicsError;
use crate::events::LaunchCurveInitialized;
use crate::state::{GlobalConfig, LaunchCurve};
use crate::utils::CurveKind;

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct InitializeLaunchParams {
    pub curve_kind: CurveKind,
    pub base_price_lamports: u64,
    pub terminal_price_lamports: u64,
    pub total_supply: u64,
    pub goal_lamports: u64,
}

#[derive(Accounts)]
pub struct InitializeLaunch<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    /// Global configuration account
    #[account(
        mut,
        seeds = [GLOBAL_CONFIG_SEED],
        bump = global_config.bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    /// Token being sold along the curve
    pub token_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = creator,
        space = LaunchCurve::SIZE,
        seeds = [LAUNCH_CURVE_SEED, token_mint.key().as_ref()],
        bump,
    )]
    pub launch_curve: Box<Account<'info, LaunchCurve>>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_launch(
    ctx: Context<InitializeLaunch>,
    params: InitializeLaunchParams,
) -> Result<()> {
    let config = &mut ctx.accounts.global_config;
    let launch = &mut ctx.accounts.launch_curve;
    let clock = Clock::get()?;

    config.require_not_paused()?;

    launch.creator = ctx.accounts.creator.key();
    launch.token_mint = ctx.accounts.token_mint.key();
    launch.bump = ctx.bumps.launch_curve;

    launch.curve_kind = params.curve_kind;
    launch.base_price_lamports = params.base_price_lamports;
    launch.terminal_price_lamports = params.terminal_price_lamports;
    launch.total_supply = params.total_supply;
    launch.decimals = ctx.accounts.token_mint.decimals;

    // Configuration errors reject here, never at price-query time
    launch.curve_params().validate()?;
    require!(
        params.goal_lamports > 0,
        EconomicsError::InvalidGraduationGoal
    );

    launch.tokens_sold = 0;
    launch.sol_collected_lamports = 0;
    launch.goal_lamports = params.goal_lamports;
    launch.is_graduated = false;
    launch.high_water_mark_bps = 0;

    launch.total_trades = 0;
    launch.buy_volume_lamports = 0;
    launch.sell_volume_lamports = 0;
    launch.traders_count = 0;

    launch.created_at = clock.unix_timestamp;
    launch.graduated_at = 0;
    launch.index = config.launch_count;

    config.launch_count = config
        .launch_count
        .checked_add(1)
        .ok_or(EconomicsError::MathOverflow)?;

    emit!(LaunchCurveInitialized {
        launch: launch.key(),
        creator: launch.creator,
        token_mint: launch.token_mint,
        total_supply: launch.total_supply,
        base_price_lamports: launch.base_price_lamports,
        terminal_price_lamports: launch.terminal_price_lamports,
        goal_lamports: launch.goal_lamports,
        timestamp: clock.unix_timestamp,
    });

    msg!("Launch curve initialized for mint {}", launch.token_mint);
    msg!(
        "Price ramp: {} -> {} lamports, goal {} lamports",
        launch.base_price_lamports,
        launch.terminal_price_lamports,
        launch.goal_lamports
    );

    Ok(())
}
