use anchor_lang::prelude::*;
use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

use crate::constants::{
    BPS_DENOMINATOR, HYPE_SOCIAL_MENTIONS_CAP, HYPE_TIME_WINDOW_SECS,
    HYPE_UNIQUE_PARTICIPANTS_CAP, HYPE_VOLUME_CAP_SOL, PARTICIPANTS_SCORE_PER_USER, SCORE_MAX,
    TRADES_SCORE_PER_TRADE, VOLUME_SCORE_PER_SOL,
};
use crate::errors::EconomicsError;

/// A weight vector must cover the whole score, no more, no less
pub fn validate_weights(weights_bps: &[u16; 5]) -> Result<()> {
    let sum: u64 = weights_bps.iter().map(|w| *w as u64).sum();
    require!(sum == BPS_DENOMINATOR, EconomicsError::InvalidWeights);

    Ok(())
}

/// Raw inputs for the hype sub-score
#[derive(Debug, Clone, Copy, Default)]
pub struct HypeInputs {
    pub ticket_sales: u64,
    pub max_tickets: u64,
    pub time_remaining_secs: u64,
    pub social_mentions: u64,
    pub unique_participants: u64,
    pub volume_24h_lamports: u64,
}

/// Composite hype score on 0..=100.
///
/// Weighted blend (weights in bps, validated at config time) of sales
/// velocity, time pressure, social mentions, unique participants and
/// 24h volume, each saturating at its cap.
pub fn hype_score(inputs: &HypeInputs, weights_bps: &[u16; 5]) -> u8 {
    let sales_ratio_bps = if inputs.max_tickets == 0 {
        0
    } else {
        ratio_bps(inputs.ticket_sales, inputs.max_tickets)
    };

    // 1 - time_remaining / 24h, floored at 0
    let elapsed = HYPE_TIME_WINDOW_SECS.saturating_sub(
        inputs.time_remaining_secs.min(HYPE_TIME_WINDOW_SECS),
    );
    let time_pressure_bps = ratio_bps(elapsed, HYPE_TIME_WINDOW_SECS);

    let social_bps = ratio_bps(
        inputs.social_mentions.min(HYPE_SOCIAL_MENTIONS_CAP),
        HYPE_SOCIAL_MENTIONS_CAP,
    );

    let participant_bps = ratio_bps(
        inputs.unique_participants.min(HYPE_UNIQUE_PARTICIPANTS_CAP),
        HYPE_UNIQUE_PARTICIPANTS_CAP,
    );

    let volume_cap = HYPE_VOLUME_CAP_SOL * LAMPORTS_PER_SOL;
    let volume_bps = ratio_bps(inputs.volume_24h_lamports.min(volume_cap), volume_cap);

    let components = [
        sales_ratio_bps,
        time_pressure_bps,
        social_bps,
        participant_bps,
        volume_bps,
    ];

    let weighted_bps: u64 = components
        .iter()
        .zip(weights_bps.iter())
        .map(|(component, weight)| component * (*weight as u64) / BPS_DENOMINATOR)
        .sum();

    // bps -> 0..=100 with round-half-up
    (((weighted_bps + 50) / 100).min(SCORE_MAX)) as u8
}

/// Raw 24h telemetry plus the two sub-scores that are already on 0..=100
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendingInputs {
    pub volume_24h_lamports: u64,
    pub trades_24h: u32,
    pub participants_24h: u32,
    pub hype_score: u8,
    pub social_engagement_score: u8,
}

/// Activity floors a launch must clear to count as trending at all
#[derive(Debug, Clone, Copy, AnchorSerialize, AnchorDeserialize, PartialEq, Eq)]
pub struct TrendingFloors {
    pub min_volume_lamports: u64,
    pub min_trades: u32,
    pub min_participants: u32,
    pub min_hype_score: u8,
}

/// Composite trending score on 0..=100.
///
/// Each raw metric is normalized with a fixed scale factor and capped at
/// 100 before the weighted sum, so pushing a metric past its cap cannot
/// move the score.
pub fn trending_score(inputs: &TrendingInputs, weights_bps: &[u16; 5]) -> u8 {
    let components = [
        volume_score(inputs.volume_24h_lamports),
        (inputs.trades_24h as u64 * TRADES_SCORE_PER_TRADE).min(SCORE_MAX),
        (inputs.participants_24h as u64 * PARTICIPANTS_SCORE_PER_USER).min(SCORE_MAX),
        (inputs.hype_score as u64).min(SCORE_MAX),
        (inputs.social_engagement_score as u64).min(SCORE_MAX),
    ];

    let weighted: u64 = components
        .iter()
        .zip(weights_bps.iter())
        .map(|(component, weight)| component * (*weight as u64))
        .sum();

    // scale is bps; round-half-up back to 0..=100
    (((weighted + BPS_DENOMINATOR / 2) / BPS_DENOMINATOR).min(SCORE_MAX)) as u8
}

/// A launch is trending only when it clears every floor simultaneously
pub fn is_trending(inputs: &TrendingInputs, floors: &TrendingFloors) -> bool {
    inputs.volume_24h_lamports >= floors.min_volume_lamports
        && inputs.trades_24h >= floors.min_trades
        && inputs.participants_24h >= floors.min_participants
        && inputs.hype_score >= floors.min_hype_score
}

/// Stable descending sort; equal scores keep their existing order
pub fn rank_by_score(entries: &mut [(Pubkey, u8)]) {
    entries.sort_by(|a, b| b.1.cmp(&a.1));
}

fn volume_score(volume_24h_lamports: u64) -> u64 {
    let score = (volume_24h_lamports as u128)
        .saturating_mul(VOLUME_SCORE_PER_SOL as u128)
        / (LAMPORTS_PER_SOL as u128);

    (score as u64).min(SCORE_MAX)
}

fn ratio_bps(numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 {
        return 0;
    }

    let ratio = (numerator as u128).saturating_mul(BPS_DENOMINATOR as u128)
        / (denominator as u128);

    (ratio as u64).min(BPS_DENOMINATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_HYPE_WEIGHTS_BPS, DEFAULT_TRENDING_WEIGHTS_BPS};

    fn sol(amount: u64) -> u64 {
        amount * LAMPORTS_PER_SOL
    }

    #[test]
    fn trending_score_stays_in_range() {
        let maxed = TrendingInputs {
            volume_24h_lamports: u64::MAX,
            trades_24h: u32::MAX,
            participants_24h: u32::MAX,
            hype_score: 100,
            social_engagement_score: 100,
        };

        assert_eq!(trending_score(&maxed, &DEFAULT_TRENDING_WEIGHTS_BPS), 100);
        assert_eq!(
            trending_score(&TrendingInputs::default(), &DEFAULT_TRENDING_WEIGHTS_BPS),
            0
        );
    }

    #[test]
    fn capped_metrics_are_idempotent() {
        // Every metric is already past its cap; doubling them all must
        // not move the score
        let capped = TrendingInputs {
            volume_24h_lamports: sol(20),
            trades_24h: 60,
            participants_24h: 25,
            hype_score: 100,
            social_engagement_score: 100,
        };
        let doubled = TrendingInputs {
            volume_24h_lamports: sol(40),
            trades_24h: 120,
            participants_24h: 50,
            ..capped
        };

        assert_eq!(
            trending_score(&capped, &DEFAULT_TRENDING_WEIGHTS_BPS),
            trending_score(&doubled, &DEFAULT_TRENDING_WEIGHTS_BPS)
        );
    }

    #[test]
    fn normalization_scale_factors() {
        // 5 SOL volume -> 50 points at weight 0.30; everything else zero
        let inputs = TrendingInputs {
            volume_24h_lamports: sol(5),
            ..Default::default()
        };

        assert_eq!(trending_score(&inputs, &DEFAULT_TRENDING_WEIGHTS_BPS), 15);

        // 10 trades -> 20 points at weight 0.25
        let inputs = TrendingInputs {
            trades_24h: 10,
            ..Default::default()
        };

        assert_eq!(trending_score(&inputs, &DEFAULT_TRENDING_WEIGHTS_BPS), 5);
    }

    #[test]
    fn hype_blends_saturated_components() {
        // Half the tickets sold, no time left, every other signal capped
        let inputs = HypeInputs {
            ticket_sales: 50,
            max_tickets: 100,
            time_remaining_secs: 0,
            social_mentions: 200,
            unique_participants: 100,
            volume_24h_lamports: sol(200),
        };

        // 0.5*0.30 + 1.0*(0.20 + 0.20 + 0.15 + 0.15) = 0.85
        assert_eq!(hype_score(&inputs, &DEFAULT_HYPE_WEIGHTS_BPS), 85);
    }

    #[test]
    fn time_pressure_decays_over_the_window() {
        let mut inputs = HypeInputs {
            time_remaining_secs: HYPE_TIME_WINDOW_SECS,
            ..Default::default()
        };

        // A full day out: no pressure at all
        assert_eq!(hype_score(&inputs, &DEFAULT_HYPE_WEIGHTS_BPS), 0);

        // Half the window left: 0.5 * 0.20 = 0.10
        inputs.time_remaining_secs = HYPE_TIME_WINDOW_SECS / 2;
        assert_eq!(hype_score(&inputs, &DEFAULT_HYPE_WEIGHTS_BPS), 10);

        // Deadline reached: full pressure
        inputs.time_remaining_secs = 0;
        assert_eq!(hype_score(&inputs, &DEFAULT_HYPE_WEIGHTS_BPS), 20);
    }

    #[test]
    fn zero_max_tickets_contributes_nothing() {
        let inputs = HypeInputs {
            ticket_sales: 10,
            max_tickets: 0,
            time_remaining_secs: HYPE_TIME_WINDOW_SECS,
            ..Default::default()
        };

        assert_eq!(hype_score(&inputs, &DEFAULT_HYPE_WEIGHTS_BPS), 0);
    }

    #[test]
    fn floors_gate_trending() {
        let floors = TrendingFloors {
            min_volume_lamports: sol(1),
            min_trades: 5,
            min_participants: 3,
            min_hype_score: 10,
        };

        let at_floor = TrendingInputs {
            volume_24h_lamports: sol(1),
            trades_24h: 5,
            participants_24h: 3,
            hype_score: 10,
            social_engagement_score: 0,
        };
        assert!(is_trending(&at_floor, &floors));

        for missing in 0..4 {
            let mut inputs = at_floor;
            match missing {
                0 => inputs.volume_24h_lamports = sol(1) - 1,
                1 => inputs.trades_24h = 4,
                2 => inputs.participants_24h = 2,
                _ => inputs.hype_score = 9,
            }
            assert!(!is_trending(&inputs, &floors), "floor {} ignored", missing);
        }
    }

    #[test]
    fn ranking_is_stable_for_equal_scores() {
        let first = Pubkey::new_unique();
        let second = Pubkey::new_unique();
        let third = Pubkey::new_unique();

        let mut entries = vec![(first, 40), (second, 90), (third, 40)];
        rank_by_score(&mut entries);

        assert_eq!(entries[0].0, second);
        assert_eq!(entries[1].0, first);
        assert_eq!(entries[2].0, third);
    }

    #[test]
    fn weight_vectors_must_sum_to_one() {
        assert!(validate_weights(&DEFAULT_TRENDING_WEIGHTS_BPS).is_ok());
        assert!(validate_weights(&DEFAULT_HYPE_WEIGHTS_BPS).is_ok());
        assert!(validate_weights(&[3_000, 3_000, 2_000, 1_500, 1_000]).is_err());
    }
}
