//! Optional static obstacle layer.
//!
//! Movement queries obstacles through the [`ObstacleMap`] trait so the layer
//! stays a pluggable capability: a simulation without obstacles simply holds
//! no map.  [`ObstacleGrid`] is the stock implementation, a uniform grid of
//! square cells with 0/1 occupancy.

use sma_core::Vec2;

use crate::{WorldError, WorldResult};

/// Read-only obstacle capability queried by agent movement.
///
/// Cells are squares of side [`cell_size`](Self::cell_size) anchored at the
/// origin; cell `(cx, cy)` spans `[cx·s, (cx+1)·s) × [cy·s, (cy+1)·s)`.
pub trait ObstacleMap: Send + Sync {
    /// Side length of one obstacle cell, in trail-field units.
    fn cell_size(&self) -> f32;

    /// `true` if cell `(cx, cy)` is solid.
    fn is_blocked_cell(&self, cx: i64, cy: i64) -> bool;

    /// Cell coordinates containing `pos`.
    #[inline]
    fn cell_of(&self, pos: Vec2) -> (i64, i64) {
        let size = self.cell_size();
        ((pos.x / size).floor() as i64, (pos.y / size).floor() as i64)
    }

    /// `true` if the cell containing `pos` is solid.
    #[inline]
    fn is_blocked(&self, pos: Vec2) -> bool {
        let (cx, cy) = self.cell_of(pos);
        self.is_blocked_cell(cx, cy)
    }
}

// ── ObstacleGrid ──────────────────────────────────────────────────────────────

/// Uniform occupancy grid.  Cells outside the grid count as solid, so a grid
/// smaller than the domain fences agents into the covered area.
#[derive(Clone, Debug, PartialEq)]
pub struct ObstacleGrid {
    cell_size: f32,
    cols:      usize,
    rows:      usize,
    blocked:   Vec<bool>,
}

impl ObstacleGrid {
    /// Build from row-major 0/1 occupancy (`occupancy.len() == cols * rows`).
    pub fn new(cell_size: f32, cols: usize, rows: usize, occupancy: &[u8]) -> WorldResult<Self> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(WorldError::Config(format!(
                "obstacle cell size must be positive, got {cell_size}"
            )));
        }
        if occupancy.len() != cols * rows {
            return Err(WorldError::Config(format!(
                "obstacle occupancy has {} cells, expected {cols}x{rows}",
                occupancy.len()
            )));
        }
        Ok(Self {
            cell_size,
            cols,
            rows,
            blocked: occupancy.iter().map(|&c| c != 0).collect(),
        })
    }

    /// Build from equal-length rows of 0/1 values.
    pub fn from_rows(cell_size: f32, rows: &[Vec<u8>]) -> WorldResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().position(|r| r.len() != cols) {
            return Err(WorldError::Parse {
                line:    bad + 1,
                message: format!("expected {cols} cells, found {}", rows[bad].len()),
            });
        }
        let flat: Vec<u8> = rows.iter().flatten().copied().collect();
        Self::new(cell_size, cols, rows.len(), &flat)
    }

    /// Parse a text map: one line per row, `0` open and `1` solid.
    /// Whitespace inside a line and blank lines are ignored.
    pub fn parse(cell_size: f32, text: &str) -> WorldResult<Self> {
        let mut rows = Vec::new();
        for (n, line) in text.lines().enumerate() {
            let mut row = Vec::new();
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                match ch {
                    '0' => row.push(0),
                    '1' => row.push(1),
                    other => {
                        return Err(WorldError::Parse {
                            line:    n + 1,
                            message: format!("unexpected character {other:?}"),
                        });
                    }
                }
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Self::from_rows(cell_size, &rows)
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of solid cells.
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }
}

impl ObstacleMap for ObstacleGrid {
    #[inline]
    fn cell_size(&self) -> f32 {
        self.cell_size
    }

    fn is_blocked_cell(&self, cx: i64, cy: i64) -> bool {
        if cx < 0 || cy < 0 || cx as usize >= self.cols || cy as usize >= self.rows {
            return true;
        }
        self.blocked[cy as usize * self.cols + cx as usize]
    }
}
