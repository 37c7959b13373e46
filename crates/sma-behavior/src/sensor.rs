//! The three trail sensors every agent carries.

use sma_agent::Heading;
use sma_core::Vec2;

/// Sensor offsets in the agent's local frame (heading along +x).
///
/// Identical for every agent, so they are computed once and rotated by each
/// agent's cached heading.  The right sensor sits at `+angle`, the left at
/// `-angle`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SensorRig {
    pub forward: Vec2,
    pub left:    Vec2,
    pub right:   Vec2,
}

/// World-space sensor positions for one agent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SensorPoints {
    pub forward: Vec2,
    pub left:    Vec2,
    pub right:   Vec2,
}

impl SensorRig {
    pub fn new(angle_degrees: f32, distance: f32) -> Self {
        Self {
            forward: Vec2::new(distance, 0.0),
            left:    Vec2::from_degrees(-angle_degrees) * distance,
            right:   Vec2::from_degrees(angle_degrees) * distance,
        }
    }

    /// Sensor positions for an agent at `position` facing `heading`.
    #[inline]
    pub fn points(&self, position: Vec2, heading: Heading) -> SensorPoints {
        let (cos, sin) = (heading.cos(), heading.sin());
        SensorPoints {
            forward: position + self.forward.rotated(cos, sin),
            left:    position + self.left.rotated(cos, sin),
            right:   position + self.right.rotated(cos, sin),
        }
    }
}
