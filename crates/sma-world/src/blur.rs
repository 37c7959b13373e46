//! Separable Gaussian blur used by [`TrailField::tick`](crate::TrailField::tick).
//!
//! Both passes read a frozen input buffer and write a distinct output buffer,
//! one row per Rayon task.  Samples outside the grid clamp to the edge cell.

use rayon::prelude::*;

/// 9-tap symmetric Gaussian kernel.  Weights sum to 1, so every output is a
/// convex combination of inputs and the field maximum cannot grow.
pub const BLUR_KERNEL: [f32; 9] = [
    0.016_216, 0.054_054, 0.121_621_6, 0.194_594_6, 0.227_027,
    0.194_594_6, 0.121_621_6, 0.054_054, 0.016_216,
];

const RADIUS: isize = (BLUR_KERNEL.len() / 2) as isize;

#[inline]
fn clamp_index(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}

/// Blend factor `mix`: `out = (1 - mix)·in + mix·blur(in)`.
#[inline]
fn blend(original: f32, blurred: f32, mix: f32) -> f32 {
    original + (blurred - original) * mix
}

/// Horizontal pass: `output[y][x]` from row `y` of `input`.
pub fn horizontal(input: &[f32], output: &mut [f32], width: usize, mix: f32) {
    output
        .par_chunks_mut(width)
        .zip(input.par_chunks(width))
        .for_each(|(out_row, in_row)| {
            for (x, out) in out_row.iter_mut().enumerate() {
                let mut acc = 0.0f32;
                for (k, weight) in BLUR_KERNEL.iter().enumerate() {
                    let sx = clamp_index(x as isize + k as isize - RADIUS, width);
                    acc += in_row[sx] * weight;
                }
                *out = blend(in_row[x], acc, mix);
            }
        });
}

/// Vertical pass: `output[y][x]` from column `x` of `input`, capped to
/// `[0, cap]` so float rounding in the kernel sum cannot leave the valid
/// intensity range.
pub fn vertical(
    input:  &[f32],
    output: &mut [f32],
    width:  usize,
    height: usize,
    mix:    f32,
    cap:    f32,
) {
    output
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, out_row)| {
            for (x, out) in out_row.iter_mut().enumerate() {
                let mut acc = 0.0f32;
                for (k, weight) in BLUR_KERNEL.iter().enumerate() {
                    let sy = clamp_index(y as isize + k as isize - RADIUS, height);
                    acc += input[sy * width + x] * weight;
                }
                *out = blend(input[y * width + x], acc, mix).clamp(0.0, cap);
            }
        });
}
