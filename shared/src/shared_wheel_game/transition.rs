use serde::{Deserialize, Serialize};

use super::easing::EasingCurve;
use super::sampler::DrawOutcome;

/// Pairs a scheduled completion with the draw that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionTicket(pub u64);

/// A spin in flight: where the wheel starts, where the animation ends and
/// where it snaps once the completion signal arrives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub ticket: TransitionTicket,
    pub from_degrees: f64,
    pub to_degrees: f64,
    pub settle_degrees: f64,
    pub duration_ms: u32,
    pub easing: EasingCurve,
}

/// Starts the visual transition for `outcome`.
///
/// The animation always targets the outcome's absolute angle, which is
/// measured from 0, so rotation never accumulates across draws. The host
/// owns the timer and must deliver `ticket` back exactly once after
/// `duration_ms`.
pub fn begin_transition(
    ticket: TransitionTicket,
    resting_degrees: f64,
    outcome: &DrawOutcome,
    duration_ms: u32,
    easing: EasingCurve,
) -> Transition {
    Transition {
        ticket,
        from_degrees: resting_degrees,
        to_degrees: outcome.angle_degrees,
        settle_degrees: outcome.settled_angle_degrees,
        duration_ms,
        easing,
    }
}

impl Transition {
    /// Linear time progress in [0, 1].
    pub fn time_progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    pub fn rotation_at(&self, elapsed_ms: f64) -> f64 {
        let eased = self.easing.progress(self.time_progress(elapsed_ms));
        self.from_degrees + (self.to_degrees - self.from_degrees) * eased
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms as f64
    }

    pub fn travel_degrees(&self) -> f64 {
        self.to_degrees - self.from_degrees
    }
}
