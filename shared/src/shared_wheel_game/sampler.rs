use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{DEGREES_PER_TURN, SAMPLE_MAX_DEGREES, SAMPLE_MIN_DEGREES};
use crate::error::WheelError;

/// Result of one draw.
///
/// `angle_degrees` is the full rotation the wheel travels, measured from 0
/// and including the forced whole turns. `settled_angle_degrees` is where it
/// comes to rest and decides the winner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawOutcome {
    pub angle_degrees: f64,
    pub settled_angle_degrees: f64,
    pub winning_index: usize,
}

impl DrawOutcome {
    /// Whole turns travelled beyond the resting orientation.
    pub fn full_turns(&self) -> u32 {
        ((self.angle_degrees - self.settled_angle_degrees) / DEGREES_PER_TURN).round() as u32
    }
}

/// Draws a fresh outcome for a wheel of `segment_count` segments.
pub fn sample<R: Rng + ?Sized>(
    segment_count: usize,
    minimum_spin_turns: u32,
    rng: &mut R,
) -> Result<DrawOutcome, WheelError> {
    ensure_segments(segment_count)?;
    let raw = rng.gen_range(SAMPLE_MIN_DEGREES..=SAMPLE_MAX_DEGREES);
    outcome_from_raw(segment_count, minimum_spin_turns, raw)
}

/// Maps a raw sampled value in `1..=360` to an outcome. Deterministic.
pub fn outcome_from_raw(
    segment_count: usize,
    minimum_spin_turns: u32,
    raw_degrees: u32,
) -> Result<DrawOutcome, WheelError> {
    ensure_segments(segment_count)?;

    let angle_degrees = raw_degrees as f64 + minimum_spin_turns as f64 * DEGREES_PER_TURN;
    let settled_angle_degrees = settle(angle_degrees);

    Ok(DrawOutcome {
        angle_degrees,
        settled_angle_degrees,
        winning_index: winning_index(settled_angle_degrees, segment_count),
    })
}

/// Reduces any rotation to its resting orientation in `[0, 360)`.
pub fn settle(angle_degrees: f64) -> f64 {
    let settled = angle_degrees.rem_euclid(DEGREES_PER_TURN);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if settled >= DEGREES_PER_TURN {
        0.0
    } else {
        settled
    }
}

/// Index of the arc containing `settled_angle_degrees`.
///
/// Segment `i` owns `[i * 360 / n, (i + 1) * 360 / n)`. Clamped to the last
/// segment so overshoot on the final boundary can never produce an
/// out-of-range index.
pub fn winning_index(settled_angle_degrees: f64, segment_count: usize) -> usize {
    if segment_count == 0 {
        return 0;
    }
    // Multiply before dividing: exact for whole-degree angles
    let index = (settled_angle_degrees * segment_count as f64 / DEGREES_PER_TURN).floor();
    // negative and NaN saturate to 0
    (index as usize).min(segment_count - 1)
}

fn ensure_segments(segment_count: usize) -> Result<(), WheelError> {
    if segment_count == 0 {
        return Err(WheelError::InvalidConfiguration(
            "segment count must be at least 1".to_string(),
        ));
    }
    Ok(())
}
