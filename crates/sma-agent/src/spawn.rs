//! Initial agent layouts.

use rand::Rng;
use sma_core::{Vec2, hash_u32};

use crate::Heading;

/// How agents are placed and oriented at construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpawnMode {
    /// Uniform integer cells anywhere in the domain, random integer heading.
    Noise,
    /// Uniform over a disc of radius `0.4·min(w, h)`, heading toward the
    /// centre.
    Ring,
    /// Everyone at the centre cell, random integer heading.
    #[default]
    Center,
    /// Two clusters at `(w/3, h/2)` and `(2w/3, h/2)`.
    TwoPoints,
    /// Three clusters: `(w/2, 2h/3)` 30%, `(w/3, h/3)` 30%, `(2w/3, h/3)` 40%.
    ThreePoints,
}

impl SpawnMode {
    /// Position and heading for one agent in a `width × height` domain.
    pub fn place<R: Rng + ?Sized>(self, width: u32, height: u32, rng: &mut R) -> (Vec2, Heading) {
        let (w, h) = (width.max(1), height.max(1));
        match self {
            SpawnMode::Noise => {
                let x = hash_u32(rng.next_u32()) % w;
                let y = hash_u32(rng.next_u32()) % h;
                let heading = hash_u32(rng.next_u32()) % 360;
                (Vec2::new(x as f32, y as f32), Heading::new(heading as f32))
            }
            SpawnMode::Ring => {
                let centre = Vec2::new(w as f32 / 2.0, h as f32 / 2.0);
                let max_radius = w.min(h) as f32 / 2.0 * 0.8;
                let radius = rng.r#gen::<f32>().sqrt() * max_radius;
                let theta = rng.r#gen::<f32>() * std::f32::consts::TAU;
                let position = centre + radius * Vec2::new(theta.cos(), theta.sin());
                let to_centre = centre - position;
                let heading = to_centre.y.atan2(to_centre.x).to_degrees();
                (position, Heading::new(heading))
            }
            SpawnMode::Center => {
                let position = Vec2::new((w / 2) as f32, (h / 2) as f32);
                (position, integer_heading(rng))
            }
            SpawnMode::TwoPoints => {
                let heading = integer_heading(rng);
                let position = if rng.r#gen::<f32>() >= 0.5 {
                    Vec2::new((w / 3) as f32, (h / 2) as f32)
                } else {
                    Vec2::new((2 * w / 3) as f32, (h / 2) as f32)
                };
                (position, heading)
            }
            SpawnMode::ThreePoints => {
                let heading = integer_heading(rng);
                let u = rng.r#gen::<f32>();
                let position = if u <= 0.3 {
                    Vec2::new((w / 2) as f32, (2 * h / 3) as f32)
                } else if u <= 0.6 {
                    Vec2::new((w / 3) as f32, (h / 3) as f32)
                } else {
                    Vec2::new((2 * w / 3) as f32, (h / 3) as f32)
                };
                (position, heading)
            }
        }
    }
}

#[inline]
fn integer_heading<R: Rng + ?Sized>(rng: &mut R) -> Heading {
    Heading::new(rng.gen_range(0..360u32) as f32)
}
