//! The controller-owned set of active food sources.
//!
//! The kernel never mutates a `FoodSet`; the controller adds and removes
//! food between ticks.

use sma_core::Vec2;

/// Default pick radius for [`FoodSet::remove_nearest`].
pub const DEFAULT_REMOVE_RADIUS: f32 = 25.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FoodSet {
    positions: Vec<Vec2>,
}

impl FoodSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a food source.  Non-finite positions are ignored.
    pub fn add(&mut self, position: Vec2) {
        if position.is_finite() {
            self.positions.push(position);
        }
    }

    /// Remove the food nearest to `near` if it lies within `radius`.
    ///
    /// Returns the removed position.
    pub fn remove_nearest(&mut self, near: Vec2, radius: f32) -> Option<Vec2> {
        let (index, distance) = self
            .positions
            .iter()
            .enumerate()
            .map(|(i, p)| (i, p.distance(near)))
            .min_by(|a, b| a.1.total_cmp(&b.1))?;
        (distance <= radius).then(|| self.positions.remove(index))
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    #[inline]
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl FromIterator<Vec2> for FoodSet {
    fn from_iter<I: IntoIterator<Item = Vec2>>(iter: I) -> Self {
        let mut set = FoodSet::new();
        for p in iter {
            set.add(p);
        }
        set
    }
}
