//! Tunable constants of the foraging update.

use crate::{BehaviorError, BehaviorResult};

/// Every constant the agent update uses.  Angles are in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ForageParams {
    /// Distance moved per tick.
    pub speed: f32,

    /// Base turn applied when steering picks the left or right sensor.
    pub rotation_angle: f32,

    /// Angle between the forward sensor and each side sensor.
    pub sensor_angle: f32,

    /// Distance from the agent to each sensor point.
    pub sensor_distance: f32,

    /// An agent whose target lies closer than this marks the trail.
    pub capture_radius: f32,

    /// Trail added when the target is captured.
    pub deposit_amount: f32,

    /// Trail every agent adds at its cell every tick.  0 disables it.
    pub imprint_amount: f32,

    /// Extra reading given to the sensor nearest the target, scaled by
    /// `1 + weight`.
    pub sensor_boost: f32,

    /// Lower bound of the distance-dependent extra turn.
    pub bonus_min: f32,

    /// Upper bound of the distance-dependent extra turn, reached at the
    /// target.
    pub bonus_max: f32,

    /// Distance over which the extra turn falls from `bonus_max` to
    /// `bonus_min`.
    pub bonus_falloff: f32,

    /// Half-width of the uniform jitter added to reflected headings.
    pub reflect_jitter: f32,
}

impl Default for ForageParams {
    fn default() -> Self {
        Self {
            speed:           1.0,
            rotation_angle:  22.5,
            sensor_angle:    45.0,
            sensor_distance: 9.0,
            capture_radius:  5.0,
            deposit_amount:  50.0,
            imprint_amount:  0.0,
            sensor_boost:    50.0,
            bonus_min:       0.0,
            bonus_max:       22.5,
            bonus_falloff:   200.0,
            reflect_jitter:  20.0,
        }
    }
}

impl ForageParams {
    pub fn validate(&self) -> BehaviorResult<()> {
        let non_negative = [
            ("speed", self.speed),
            ("rotation_angle", self.rotation_angle),
            ("sensor_angle", self.sensor_angle),
            ("sensor_distance", self.sensor_distance),
            ("capture_radius", self.capture_radius),
            ("deposit_amount", self.deposit_amount),
            ("imprint_amount", self.imprint_amount),
            ("sensor_boost", self.sensor_boost),
            ("bonus_min", self.bonus_min),
            ("bonus_max", self.bonus_max),
            ("reflect_jitter", self.reflect_jitter),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(BehaviorError::Config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if self.bonus_min > self.bonus_max {
            return Err(BehaviorError::Config(format!(
                "bonus_min ({}) exceeds bonus_max ({})",
                self.bonus_min, self.bonus_max
            )));
        }
        if !(self.bonus_falloff.is_finite() && self.bonus_falloff > 0.0) {
            return Err(BehaviorError::Config(format!(
                "bonus_falloff must be positive, got {}",
                self.bonus_falloff
            )));
        }
        Ok(())
    }
}
