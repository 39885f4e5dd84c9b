use anchor_lang::prelude::*;
use ruint::aliases::U256;

use crate::constants::MAX_TOKEN_DECIMALS;
use crate::errors::EconomicsError;

/// Curve kinds supported by the pricing engine
#[derive(Debug, Clone, Copy, AnchorSerialize, AnchorDeserialize, PartialEq, Eq)]
pub enum CurveKind {
    /// Fixed price sale (price stays at the base price)
    Constant,
    /// Linear ramp from base price to terminal price over the full supply
    Linear,
}

impl Default for CurveKind {
    fn default() -> Self {
        CurveKind::Linear
    }
}

/// Pricing parameters for one launch. Immutable after launch creation.
#[derive(Debug, Clone, Copy, AnchorSerialize, AnchorDeserialize, PartialEq, Eq)]
pub struct CurveParams {
    pub kind: CurveKind,

    /// Price per whole token at zero tokens sold (lamports)
    pub base_price_lamports: u64,

    /// Price per whole token at full supply (lamports)
    pub terminal_price_lamports: u64,

    /// Total sellable supply in base units
    pub total_supply: u64,

    /// Token decimals
    pub decimals: u8,
}

impl CurveParams {
    /// Validate at launch-creation time. Price queries never re-validate.
    pub fn validate(&self) -> Result<()> {
        require!(self.total_supply > 0, EconomicsError::InvalidTotalSupply);

        require!(
            self.decimals <= MAX_TOKEN_DECIMALS,
            EconomicsError::InvalidDecimals
        );

        require!(
            self.terminal_price_lamports >= self.base_price_lamports,
            EconomicsError::InvalidPriceRange
        );

        Ok(())
    }
}

/// Spot price (lamports per whole token) at a given cumulative tokens-sold point.
///
/// Pure and total: out-of-range inputs are clamped to `[0, total_supply]`,
/// a degenerate supply falls back to the base price. Identical inputs give
/// identical outputs at any sampling density.
pub fn price_at(tokens_sold_at_point: u64, params: &CurveParams) -> u64 {
    match params.kind {
        CurveKind::Constant => params.base_price_lamports,
        CurveKind::Linear => {
            if params.total_supply == 0 {
                return params.base_price_lamports;
            }

            let sold = tokens_sold_at_point.min(params.total_supply);
            let delta = params
                .terminal_price_lamports
                .saturating_sub(params.base_price_lamports);

            // base + delta * sold / supply, widened so the product cannot overflow
            let ramp = U256::from(delta) * U256::from(sold) / U256::from(params.total_supply);

            // ramp <= delta, so the sum fits u64
            params.base_price_lamports + ramp.to::<u64>()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(base: u64, terminal: u64, supply: u64) -> CurveParams {
        CurveParams {
            kind: CurveKind::Linear,
            base_price_lamports: base,
            terminal_price_lamports: terminal,
            total_supply: supply,
            decimals: 6,
        }
    }

    #[test]
    fn price_hits_base_and_terminal_at_endpoints() {
        let params = linear(1_000, 9_000, 1_000_000);

        assert_eq!(price_at(0, &params), 1_000);
        assert_eq!(price_at(1_000_000, &params), 9_000);
    }

    #[test]
    fn price_is_monotone_non_decreasing() {
        let params = linear(500, 123_456_789, 777_777);

        let mut last = 0u64;
        for step in 0..=100 {
            let sold = params.total_supply * step / 100;
            let price = price_at(sold, &params);
            assert!(price >= last, "price regressed at step {}", step);
            last = price;
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        let params = linear(1_000, 9_000, 1_000_000);

        assert_eq!(price_at(u64::MAX, &params), 9_000);
    }

    #[test]
    fn identical_input_gives_identical_output() {
        let params = linear(42, 42_000, 5_000_000);

        let point = 1_234_567;
        let first = price_at(point, &params);
        for _ in 0..10 {
            assert_eq!(price_at(point, &params), first);
        }
    }

    #[test]
    fn constant_curve_ignores_progress() {
        let params = CurveParams {
            kind: CurveKind::Constant,
            base_price_lamports: 2_500,
            terminal_price_lamports: 2_500,
            total_supply: 1_000_000,
            decimals: 6,
        };

        assert_eq!(price_at(0, &params), 2_500);
        assert_eq!(price_at(999_999, &params), 2_500);
    }

    #[test]
    fn validation_rejects_bad_configs() {
        let mut params = linear(1_000, 9_000, 0);
        assert!(params.validate().is_err());

        params.total_supply = 1_000_000;
        assert!(params.validate().is_ok());

        params.terminal_price_lamports = 500;
        assert!(params.validate().is_err());

        params.terminal_price_lamports = 9_000;
        params.decimals = 13;
        assert!(params.validate().is_err());
    }
}
