use serde::{Deserialize, Serialize};
use validator::Validate;

use super::easing::{validate_easing, EasingCurve};
use crate::constants::{DEFAULT_MIN_SPIN_TURNS, DEFAULT_SPIN_DURATION_MS};
use crate::error::WheelError;

/// Tunables for one wheel. Missing fields fall back to the defaults, so a
/// partial JSON document is a valid override.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct WheelConfig {
    /// Length of the spin animation; the result is withheld until it ends.
    #[validate(range(min = 1, max = 60000))]
    pub nominal_duration_ms: u32,
    /// Whole turns added to every draw before the sampled remainder.
    #[validate(range(max = 64))]
    pub minimum_spin_turns: u32,
    #[validate(custom = "validate_easing")]
    pub easing: EasingCurve,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            nominal_duration_ms: DEFAULT_SPIN_DURATION_MS,
            minimum_spin_turns: DEFAULT_MIN_SPIN_TURNS,
            easing: EasingCurve::default(),
        }
    }
}

impl WheelConfig {
    pub fn checked(self) -> Result<Self, WheelError> {
        self.validate()?;
        Ok(self)
    }

    pub fn from_json(json: &str) -> Result<Self, WheelError> {
        let config: WheelConfig = serde_json::from_str(json)
            .map_err(|e| WheelError::InvalidConfiguration(e.to_string()))?;
        config.checked()
    }
}
