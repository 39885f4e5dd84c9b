use anchor_lang::prelude::*;

use crate::errors::EconomicsError;

/// Side of an ingested trade event
#[derive(Debug, Clone, Copy, AnchorSerialize, AnchorDeserialize, PartialEq, Eq)]
pub enum TradeSide {
    Buy,
    Sell,
}

#[account]
pub struct TraderVolume {
    /// Trader address
    pub user: Pubkey,

    /// Associated launch curve
    pub launch: Pubkey,

    /// bump seed
    pub bump: u8,

    // ===== Volume Aggregation =====
    /// Cumulative SOL volume across both sides
    pub total_volume_lamports: u64,

    /// Number of accepted trades
    pub total_trades: u32,

    pub buy_volume_lamports: u64,

    pub sell_volume_lamports: u64,

    /// First-seen order among this launch's traders; batch tie-break
    pub join_index: u32,

    // ===== Reward Accrual =====
    /// Rewards credited but not yet claimed
    pub pending_reward: u64,

    /// Rewards already paid out
    pub claimed_reward: u64,

    // ===== Time Records =====
    pub first_trade_at: i64,

    pub last_trade_at: i64,

    /// Reserved space
    pub reserved: [u64; 4],
}

impl TraderVolume {
    pub const SIZE: usize = 8 + // discriminator
        32 + // user
        32 + // launch
        1 + // bump
        8 + // total_volume_lamports
        4 + // total_trades
        8 + // buy_volume_lamports
        8 + // sell_volume_lamports
        4 + // join_index
        8 + // pending_reward
        8 + // claimed_reward
        8 + // first_trade_at
        8 + // last_trade_at
        8 * 4; // reserved

    /// Fold one accepted trade into the aggregation
    pub fn record_trade(
        &mut self,
        side: TradeSide,
        sol_lamports: u64,
        current_time: i64,
    ) -> Result<()> {
        self.total_volume_lamports = self
            .total_volume_lamports
            .checked_add(sol_lamports)
            .ok_or(EconomicsError::MathOverflow)?;

        match side {
            TradeSide::Buy => {
                self.buy_volume_lamports = self
                    .buy_volume_lamports
                    .checked_add(sol_lamports)
                    .ok_or(EconomicsError::MathOverflow)?;
            }
            TradeSide::Sell => {
                self.sell_volume_lamports = self
                    .sell_volume_lamports
                    .checked_add(sol_lamports)
                    .ok_or(EconomicsError::MathOverflow)?;
            }
        }

        self.total_trades = self
            .total_trades
            .checked_add(1)
            .ok_or(EconomicsError::MathOverflow)?;

        if self.first_trade_at == 0 {
            self.first_trade_at = current_time;
        }
        self.last_trade_at = current_time;

        Ok(())
    }

    /// Credit an allocated reward for later claiming
    pub fn credit_reward(&mut self, amount: u64) -> Result<()> {
        self.pending_reward = self
            .pending_reward
            .checked_add(amount)
            .ok_or(EconomicsError::MathOverflow)?;

        Ok(())
    }

    /// Settle a claim of the full pending amount
    pub fn settle_claim(&mut self) -> Result<u64> {
        let amount = self.pending_reward;
        require!(amount > 0, EconomicsError::NothingToClaim);

        self.pending_reward = 0;
        self.claimed_reward = self
            .claimed_reward
            .checked_add(amount)
            .ok_or(EconomicsError::MathOverflow)?;

        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_record() -> TraderVolume {
        TraderVolume {
            user: Pubkey::new_unique(),
            launch: Pubkey::new_unique(),
            bump: 255,
            total_volume_lamports: 0,
            total_trades: 0,
            buy_volume_lamports: 0,
            sell_volume_lamports: 0,
            join_index: 0,
            pending_reward: 0,
            claimed_reward: 0,
            first_trade_at: 0,
            last_trade_at: 0,
            reserved: [0; 4],
        }
    }

    #[test]
    fn sides_aggregate_separately() {
        let mut record = fresh_record();

        record.record_trade(TradeSide::Buy, 700, 10).unwrap();
        record.record_trade(TradeSide::Sell, 300, 20).unwrap();

        assert_eq!(record.total_volume_lamports, 1_000);
        assert_eq!(record.buy_volume_lamports, 700);
        assert_eq!(record.sell_volume_lamports, 300);
        assert_eq!(record.total_trades, 2);
        assert_eq!(record.first_trade_at, 10);
        assert_eq!(record.last_trade_at, 20);
    }

    #[test]
    fn claim_moves_pending_to_claimed() {
        let mut record = fresh_record();

        record.credit_reward(150).unwrap();
        record.credit_reward(50).unwrap();

        let amount = record.settle_claim().unwrap();
        assert_eq!(amount, 200);
        assert_eq!(record.pending_reward, 0);
        assert_eq!(record.claimed_reward, 200);

        assert!(record.settle_claim().is_err());
    }
}
