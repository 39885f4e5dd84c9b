use crate::constants::{BPS_DENOMINATOR, MILESTONE_CHECKPOINTS_BPS};

/// Graduation progress in basis points, clamped to `[0, 10_000]`.
///
/// A zero goal has no meaningful progress and reports 0.
pub fn progress_bps(collected_lamports: u64, goal_lamports: u64) -> u16 {
    if goal_lamports == 0 {
        return 0;
    }

    let raw = (collected_lamports as u128)
        .saturating_mul(BPS_DENOMINATOR as u128)
        / (goal_lamports as u128);

    raw.min(BPS_DENOMINATOR as u128) as u16
}

/// Coerce an externally-reported lamport figure to a safe value.
///
/// The wire type is signed; negative or otherwise malformed readings
/// degrade to 0 instead of propagating an error. Returns the coerced
/// value and whether coercion happened, so callers can log it.
pub fn coerce_reported_lamports(reported: i64) -> (u64, bool) {
    if reported < 0 {
        (0, true)
    } else {
        (reported as u64, false)
    }
}

/// Bitmask of checkpoints newly crossed when progress moves from the
/// stored high-water mark to `progress`. Bit `i` maps to
/// `MILESTONE_CHECKPOINTS_BPS[i]`. A checkpoint fires at most once per
/// launch because the caller persists the advanced high-water mark.
pub fn newly_crossed_checkpoints(high_water_mark_bps: u16, progress: u16) -> u8 {
    let mut crossed = 0u8;

    for (i, checkpoint) in MILESTONE_CHECKPOINTS_BPS.iter().enumerate() {
        if high_water_mark_bps < *checkpoint && progress >= *checkpoint {
            crossed |= 1 << i;
        }
    }

    crossed
}

/// Checkpoint percentage for a bit index in the crossing mask
pub fn checkpoint_percent(bit: u8) -> u8 {
    (MILESTONE_CHECKPOINTS_BPS[bit as usize] / 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped_to_full() {
        assert_eq!(progress_bps(0, 100), 0);
        assert_eq!(progress_bps(50, 100), 5_000);
        assert_eq!(progress_bps(100, 100), 10_000);
        assert_eq!(progress_bps(250, 100), 10_000);
    }

    #[test]
    fn zero_goal_reports_zero_progress() {
        assert_eq!(progress_bps(1_000_000, 0), 0);
    }

    #[test]
    fn progress_matches_thirty_sol_goal() {
        // 29 / 30 SOL collected: ~96.67%, not yet complete
        assert_eq!(progress_bps(29_000_000_000, 30_000_000_000), 9_666);

        // 30 / 30 SOL collected: exactly 100%
        assert_eq!(progress_bps(30_000_000_000, 30_000_000_000), 10_000);
    }

    #[test]
    fn negative_reading_coerces_to_zero() {
        assert_eq!(coerce_reported_lamports(-1), (0, true));
        assert_eq!(coerce_reported_lamports(0), (0, false));
        assert_eq!(coerce_reported_lamports(42), (42, false));
    }

    #[test]
    fn checkpoints_fire_once() {
        // Jumping from 0% to 60% crosses 25% and 50%
        let crossed = newly_crossed_checkpoints(0, 6_000);
        assert_eq!(crossed, 0b0011);

        // Polling again at the same progress fires nothing
        assert_eq!(newly_crossed_checkpoints(6_000, 6_000), 0);

        // Finishing the run crosses 75% and 100%
        assert_eq!(newly_crossed_checkpoints(6_000, 10_000), 0b1100);
    }

    #[test]
    fn exact_checkpoint_counts_as_crossed() {
        assert_eq!(newly_crossed_checkpoints(2_499, 2_500), 0b0001);
        assert_eq!(newly_crossed_checkpoints(2_500, 2_500), 0);
    }

    #[test]
    fn checkpoint_percent_labels() {
        assert_eq!(checkpoint_percent(0), 25);
        assert_eq!(checkpoint_percent(1), 50);
        assert_eq!(checkpoint_percent(2), 75);
        assert_eq!(checkpoint_percent(3), 100);
    }
}
