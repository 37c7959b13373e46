//! The pheromone trail field.
//!
//! A `width × height` grid of `f32` intensities in `[0, max_intensity]`,
//! stored row-major.  Agents read it through [`TrailField::sample`] during the
//! agent phase (shared borrow, so every agent sees the same pre-tick state);
//! the simulation applies buffered deposits and then calls
//! [`TrailField::tick`] once per step.

use rayon::prelude::*;
use sma_core::Vec2;

use crate::{WorldError, WorldResult, blur};

// ── TrailParams ───────────────────────────────────────────────────────────────

/// Decay and diffusion constants.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrailParams {
    /// Multiplicative per-tick decay applied to every cell.  Default 0.97.
    pub decay_rate: f32,

    /// Blend between unblurred (0) and fully blurred (1) values in each of
    /// the two blur passes.  Default 0.1.
    pub diffusion: f32,

    /// Saturation ceiling for deposits.  Default 255 (one 8-bit channel).
    pub max_intensity: f32,
}

impl Default for TrailParams {
    fn default() -> Self {
        Self {
            decay_rate:    0.97,
            diffusion:     0.1,
            max_intensity: 255.0,
        }
    }
}

impl TrailParams {
    pub fn validate(&self) -> WorldResult<()> {
        if !(0.0..=1.0).contains(&self.decay_rate) {
            return Err(WorldError::Config(format!(
                "decay_rate must be in [0, 1], got {}",
                self.decay_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.diffusion) {
            return Err(WorldError::Config(format!(
                "diffusion must be in [0, 1], got {}",
                self.diffusion
            )));
        }
        if !(self.max_intensity.is_finite() && self.max_intensity > 0.0) {
            return Err(WorldError::Config(format!(
                "max_intensity must be positive and finite, got {}",
                self.max_intensity
            )));
        }
        Ok(())
    }
}

// ── TrailField ────────────────────────────────────────────────────────────────

pub struct TrailField {
    width:   usize,
    height:  usize,
    cells:   Vec<f32>,
    /// Horizontal-pass output; the vertical pass reads only this.
    scratch: Vec<f32>,
    params:  TrailParams,
}

impl TrailField {
    /// Allocate a zeroed field.
    pub fn new(width: u32, height: u32, params: TrailParams) -> WorldResult<Self> {
        if width == 0 || height == 0 {
            return Err(WorldError::Config(format!(
                "trail field must be non-empty, got {width}x{height}"
            )));
        }
        params.validate()?;
        let len = width as usize * height as usize;
        Ok(Self {
            width:   width as usize,
            height:  height as usize,
            cells:   vec![0.0; len],
            scratch: vec![0.0; len],
            params,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn params(&self) -> &TrailParams {
        &self.params
    }

    #[inline]
    pub fn max_intensity(&self) -> f32 {
        self.params.max_intensity
    }

    /// Row-major read-only view of every cell, for rendering.
    #[inline]
    pub fn cells(&self) -> &[f32] {
        &self.cells
    }

    /// Clamp a position to integer cell coordinates.
    #[inline]
    pub fn cell_of(&self, pos: Vec2) -> (usize, usize) {
        // NaN casts to 0, which is also a valid cell.
        let x = pos.x.clamp(0.0, (self.width - 1) as f32) as usize;
        let y = pos.y.clamp(0.0, (self.height - 1) as f32) as usize;
        (x, y)
    }

    /// Row-major index of the clamped cell under `pos`.
    #[inline]
    pub fn index_of(&self, pos: Vec2) -> usize {
        let (x, y) = self.cell_of(pos);
        y * self.width + x
    }

    /// Intensity at integer coordinates.  Panics if out of range.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.cells[y * self.width + x]
    }

    /// Intensity of the clamped cell under `pos`.
    #[inline]
    pub fn sample(&self, pos: Vec2) -> f32 {
        self.cells[self.index_of(pos)]
    }

    /// Add `amount` to the clamped cell under `pos`, saturating at
    /// `max_intensity`.  Non-positive or NaN amounts are ignored.
    #[inline]
    pub fn deposit(&mut self, pos: Vec2, amount: f32) {
        let index = self.index_of(pos);
        self.deposit_cell(index, amount);
    }

    /// As [`deposit`](Self::deposit), addressed by row-major index.
    /// Out-of-range indices are ignored.
    #[inline]
    pub fn deposit_cell(&mut self, index: usize, amount: f32) {
        if amount.is_nan() || amount <= 0.0 {
            return;
        }
        let max = self.params.max_intensity;
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = (*cell + amount).min(max);
        }
    }

    /// One diffusion step: decay every cell, then blur horizontally into the
    /// scratch buffer and vertically back into the field.
    pub fn tick(&mut self) {
        let width = self.width;
        let decay = self.params.decay_rate;
        self.cells
            .par_chunks_mut(width)
            .for_each(|row| row.iter_mut().for_each(|c| *c *= decay));

        let mix = self.params.diffusion;
        if mix > 0.0 {
            blur::horizontal(&self.cells, &mut self.scratch, width, mix);
            blur::vertical(
                &self.scratch,
                &mut self.cells,
                width,
                self.height,
                mix,
                self.params.max_intensity,
            );
        }
    }

    /// Sum of all intensities.
    pub fn total(&self) -> f64 {
        self.cells.par_iter().map(|&c| c as f64).sum()
    }

    /// Largest cell intensity.
    pub fn peak(&self) -> f32 {
        self.cells.iter().copied().fold(0.0, f32::max)
    }
}
