use anchor_lang::prelude::*;

use crate::errors::EconomicsError;
use crate::utils::{newly_crossed_checkpoints, price_at, progress_bps, CurveKind, CurveParams};

#[account]
pub struct LaunchCurve {
    /// Project creator
    pub creator: Pubkey,

    /// Token being sold along the curve
    pub token_mint: Pubkey,

    /// bump seed
    pub bump: u8,

    // ===== Curve Configuration (immutable after creation) =====
    pub curve_kind: CurveKind,

    /// Price per whole token at zero tokens sold (lamports)
    pub base_price_lamports: u64,

    /// Price per whole token at full supply (lamports)
    pub terminal_price_lamports: u64,

    /// Total sellable supply in base units
    pub total_supply: u64,

    /// Token decimals
    pub decimals: u8,

    // ===== Sale State =====
    /// Cumulative tokens sold; monotonically non-decreasing
    pub tokens_sold: u64,

    // ===== Graduation State =====
    /// SOL collected toward the graduation goal
    pub sol_collected_lamports: u64,

    /// Graduation goal
    pub goal_lamports: u64,

    /// One-way latch: once set it never reverts
    pub is_graduated: bool,

    /// Highest progress ever observed (bps); milestone edge detection
    pub high_water_mark_bps: u16,

    // ===== Trade Statistics =====
    /// Total accepted trades ingested
    pub total_trades: u64,

    /// Aggregate buy volume (lamports)
    pub buy_volume_lamports: u64,

    /// Aggregate sell volume (lamports)
    pub sell_volume_lamports: u64,

    /// Distinct traders seen; source of the per-trader join index
    pub traders_count: u32,

    // ===== Time Records =====
    pub created_at: i64,

    /// Graduation time (0 until graduated)
    pub graduated_at: i64,

    pub index: u64,

    /// Reserved space
    pub reserved: [u64; 4],
}

impl LaunchCurve {
    pub const SIZE: usize = 8 + // discriminator
        32 + // creator
        32 + // token_mint
        1 + // bump
        1 + // curve_kind
        8 + // base_price_lamports
        8 + // terminal_price_lamports
        8 + // total_supply
        1 + // decimals
        8 + // tokens_sold
        8 + // sol_collected_lamports
        8 + // goal_lamports
        1 + // is_graduated
        2 + // high_water_mark_bps
        8 + // total_trades
        8 + // buy_volume_lamports
        8 + // sell_volume_lamports
        4 + // traders_count
        8 + // created_at
        8 + // graduated_at
        8 + // index
        8 * 4; // reserved

    /// Curve parameters as seen by the pricer
    pub fn curve_params(&self) -> CurveParams {
        CurveParams {
            kind: self.curve_kind,
            base_price_lamports: self.base_price_lamports,
            terminal_price_lamports: self.terminal_price_lamports,
            total_supply: self.total_supply,
            decimals: self.decimals,
        }
    }

    /// Current spot price along the curve
    pub fn spot_price_lamports(&self) -> u64 {
        price_at(self.tokens_sold, &self.curve_params())
    }

    /// Graduation progress in basis points, clamped to 100%
    pub fn progress_bps(&self) -> u16 {
        progress_bps(self.sol_collected_lamports, self.goal_lamports)
    }

    /// Apply one accepted buy: advance tokens sold and collected SOL.
    /// Tokens sold never exceeds the total supply.
    pub fn record_buy(&mut self, token_amount: u64, sol_lamports: u64) -> Result<()> {
        self.tokens_sold = self
            .tokens_sold
            .checked_add(token_amount)
            .ok_or(EconomicsError::MathOverflow)?
            .min(self.total_supply);

        self.sol_collected_lamports = self
            .sol_collected_lamports
            .checked_add(sol_lamports)
            .ok_or(EconomicsError::MathOverflow)?;

        self.buy_volume_lamports = self
            .buy_volume_lamports
            .checked_add(sol_lamports)
            .ok_or(EconomicsError::MathOverflow)?;

        Ok(())
    }

    /// Apply one accepted sell. Sells do not move the one-directional
    /// curve; they only aggregate volume.
    pub fn record_sell(&mut self, sol_lamports: u64) -> Result<()> {
        self.sell_volume_lamports = self
            .sell_volume_lamports
            .checked_add(sol_lamports)
            .ok_or(EconomicsError::MathOverflow)?;

        Ok(())
    }

    /// Accept an externally-read collected figure. Stale lower readings
    /// never lower the stored value, so the latch cannot regress.
    pub fn observe_collected(&mut self, reported_lamports: u64) {
        if reported_lamports > self.sol_collected_lamports {
            self.sol_collected_lamports = reported_lamports;
        }
    }

    /// Advance graduation state after any change to collected SOL.
    ///
    /// Returns the bitmask of newly-crossed milestone checkpoints and
    /// whether this call flipped the graduation latch.
    pub fn advance_progress(&mut self, current_time: i64) -> (u8, bool) {
        let progress = self.progress_bps();
        let crossed = newly_crossed_checkpoints(self.high_water_mark_bps, progress);

        if progress > self.high_water_mark_bps {
            self.high_water_mark_bps = progress;
        }

        let mut newly_graduated = false;
        if !self.is_graduated
            && self.goal_lamports > 0
            && self.sol_collected_lamports >= self.goal_lamports
        {
            self.is_graduated = true;
            self.graduated_at = current_time;
            newly_graduated = true;
        }

        (crossed, newly_graduated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_curve() -> LaunchCurve {
        LaunchCurve {
            creator: Pubkey::new_unique(),
            token_mint: Pubkey::new_unique(),
            bump: 255,
            curve_kind: CurveKind::Linear,
            base_price_lamports: 1_000,
            terminal_price_lamports: 9_000,
            total_supply: 1_000_000,
            decimals: 6,
            tokens_sold: 0,
            sol_collected_lamports: 0,
            goal_lamports: 30_000_000_000,
            is_graduated: false,
            high_water_mark_bps: 0,
            total_trades: 0,
            buy_volume_lamports: 0,
            sell_volume_lamports: 0,
            traders_count: 0,
            created_at: 0,
            graduated_at: 0,
            index: 0,
            reserved: [0; 4],
        }
    }

    #[test]
    fn graduation_latch_survives_stale_reads() {
        let mut curve = active_curve();

        curve.observe_collected(30_000_000_000);
        let (_, newly) = curve.advance_progress(100);
        assert!(newly);
        assert!(curve.is_graduated);
        assert_eq!(curve.graduated_at, 100);

        // A stale, lower reading arrives afterwards
        curve.observe_collected(5_000_000_000);
        let (crossed, newly) = curve.advance_progress(200);
        assert!(curve.is_graduated);
        assert!(!newly);
        assert_eq!(crossed, 0);
        assert_eq!(curve.progress_bps(), 10_000);
    }

    #[test]
    fn milestones_fire_once_across_updates() {
        let mut curve = active_curve();

        curve.observe_collected(16_000_000_000); // ~53%
        let (crossed, _) = curve.advance_progress(0);
        assert_eq!(crossed, 0b0011);

        let (crossed, _) = curve.advance_progress(0);
        assert_eq!(crossed, 0);

        curve.observe_collected(30_000_000_000);
        let (crossed, newly) = curve.advance_progress(0);
        assert_eq!(crossed, 0b1100);
        assert!(newly);
    }

    #[test]
    fn near_goal_is_not_graduated() {
        let mut curve = active_curve();

        curve.observe_collected(29_000_000_000);
        let (_, newly) = curve.advance_progress(0);

        assert!(!newly);
        assert!(!curve.is_graduated);
        assert_eq!(curve.progress_bps(), 9_666);
    }

    #[test]
    fn tokens_sold_saturates_at_supply() {
        let mut curve = active_curve();

        curve.record_buy(900_000, 1_000).unwrap();
        curve.record_buy(900_000, 1_000).unwrap();

        assert_eq!(curve.tokens_sold, curve.total_supply);
        assert_eq!(curve.spot_price_lamports(), curve.terminal_price_lamports);
    }

    #[test]
    fn sells_do_not_move_the_curve() {
        let mut curve = active_curve();

        curve.record_buy(100_000, 1_000).unwrap();
        let price_before = curve.spot_price_lamports();

        curve.record_sell(500).unwrap();

        assert_eq!(curve.tokens_sold, 100_000);
        assert_eq!(curve.spot_price_lamports(), price_before);
        assert_eq!(curve.sell_volume_lamports, 500);
    }
}
