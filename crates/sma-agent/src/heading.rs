//! Agent heading in degrees with cached trigonometry.

use std::fmt;

use sma_core::Vec2;

/// Wrap any finite angle into `[0, 360)`.  Non-finite input maps to 0.
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// A heading in `[0, 360)` degrees, measured from +x toward +y.
///
/// `cos`/`sin` are recomputed on every construction so they always match
/// `degrees`; there is no way to change one without the others.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Heading {
    degrees: f32,
    cos:     f32,
    sin:     f32,
}

impl Default for Heading {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Heading {
    pub fn new(degrees: f32) -> Self {
        let degrees = normalize_degrees(degrees);
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self { degrees, cos, sin }
    }

    #[inline]
    pub fn degrees(self) -> f32 {
        self.degrees
    }

    #[inline]
    pub fn cos(self) -> f32 {
        self.cos
    }

    #[inline]
    pub fn sin(self) -> f32 {
        self.sin
    }

    /// Unit step vector along the heading.
    #[inline]
    pub fn direction(self) -> Vec2 {
        Vec2::new(self.cos, self.sin)
    }

    /// Heading turned by `delta` degrees (positive turns toward +y).
    #[inline]
    pub fn turned(self, delta: f32) -> Self {
        Self::new(self.degrees + delta)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°", self.degrees)
    }
}
