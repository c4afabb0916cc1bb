use std::fmt;
use std::ops::Index;

use rand::Rng;

use crate::config::{ALIVE_GLYPH, DEAD_GLYPH, MIN_DIMENSION};
use crate::error::{Error, Result};
use crate::simulation::cell::CellState;
use crate::simulation::topology::{Bounds, Position};

/// Row-major matrix of cells (`index = y * width + x`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellState>,
    width: usize,
    height: usize,
}

impl Grid {
    /// All-dead grid of exactly `width` x `height` cells
    pub(crate) fn dead(width: usize, height: usize) -> Self {
        Self {
            cells: vec![CellState::Dead; width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [CellState] {
        &mut self.cells
    }

    /// The cells as bytes, one per cell, `0` dead and `1` alive.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }

    /// Rows from `y = 0` to `y = max_y`
    pub fn rows(&self) -> std::slice::ChunksExact<'_, CellState> {
        self.cells.chunks_exact(self.width)
    }

    fn index(&self, pos: Position) -> usize {
        pos.y * self.width + pos.x
    }
}

/// A grid whose edges wrap around on both axes.
///
/// Dimensions are fixed for the lifetime of the value; stepping produces a
/// new torus of the same size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Torus {
    grid: Grid,
    bounds: Bounds,
}

/// Create an all-dead torus, clamping each dimension up to [`MIN_DIMENSION`].
pub fn create(width: usize, height: usize) -> Torus {
    Torus::new(width, height)
}

impl Torus {
    /// Create an all-dead torus, clamping each dimension up to [`MIN_DIMENSION`].
    pub fn new(width: usize, height: usize) -> Self {
        let (clamped_w, clamped_h) = (width.max(MIN_DIMENSION), height.max(MIN_DIMENSION));
        if (clamped_w, clamped_h) != (width, height) {
            log::debug!(
                "Clamping requested {}x{} torus to {}x{}",
                width,
                height,
                clamped_w,
                clamped_h
            );
        }
        Self::from_grid(Grid::dead(clamped_w, clamped_h))
    }

    /// Create a torus with roughly `density` of its cells alive
    pub fn random<R: Rng + ?Sized>(width: usize, height: usize, density: f64, rng: &mut R) -> Self {
        let mut torus = Self::new(width, height);
        torus.randomize(rng, density);
        torus
    }

    /// Build a torus from a text picture, one string per row.
    ///
    /// `#`, `O`, `o`, `*` and `1` are alive; anything else is dead. Every row
    /// must have the same length. Pictures smaller than the minimum size are
    /// padded with dead cells on the right and bottom.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let expected = rows.first().map_or(0, |r| r.as_ref().chars().count());
        for (row, line) in rows.iter().enumerate() {
            let found = line.as_ref().chars().count();
            if found != expected {
                return Err(Error::RaggedRows {
                    row,
                    expected,
                    found,
                });
            }
        }

        let mut torus = Self::new(expected, rows.len());
        for (y, line) in rows.iter().enumerate() {
            for (x, ch) in line.as_ref().chars().enumerate() {
                if matches!(ch, '#' | 'O' | 'o' | '*' | '1') {
                    torus.set(Position::new(x, y), CellState::Alive)?;
                }
            }
        }
        Ok(torus)
    }

    pub(crate) fn from_grid(grid: Grid) -> Self {
        let bounds = Bounds::new(grid.width - 1, grid.height - 1);
        Self { grid, bounds }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> usize {
        self.grid.width
    }

    pub fn height(&self) -> usize {
        self.grid.height
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Checked read of one cell
    pub fn get(&self, pos: Position) -> Result<CellState> {
        self.check(pos)?;
        Ok(self.at(pos))
    }

    /// Checked write of one cell
    pub fn set(&mut self, pos: Position, state: CellState) -> Result<()> {
        self.check(pos)?;
        let index = self.grid.index(pos);
        self.grid.cells[index] = state;
        Ok(())
    }

    /// Flip one cell, returning its new state
    pub fn toggle(&mut self, pos: Position) -> Result<CellState> {
        let next = self.get(pos)?.toggled();
        self.set(pos, next)?;
        Ok(next)
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.grid.cells.fill(CellState::Dead);
    }

    /// Overwrite every cell, each alive with probability `density`.
    ///
    /// `density` is clamped to `[0, 1]`; NaN counts as `0`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_nan() {
            0.0
        } else {
            density.clamp(0.0, 1.0)
        };
        for cell in self.grid.cells.iter_mut() {
            *cell = CellState::from(rng.gen_bool(density));
        }
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.grid.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, CellState> {
        self.grid.rows()
    }

    /// Unchecked read for positions produced by the torus itself
    pub(crate) fn at(&self, pos: Position) -> CellState {
        self.grid.cells[self.grid.index(pos)]
    }

    fn check(&self, pos: Position) -> Result<()> {
        if self.bounds.contains(pos) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                position: pos,
                bounds: self.bounds,
            })
        }
    }
}

impl Index<Position> for Torus {
    type Output = CellState;

    /// Panics when `pos` is outside the torus.
    fn index(&self, pos: Position) -> &CellState {
        assert!(
            self.bounds.contains(pos),
            "position {:?} is outside the torus bounds {:?}",
            pos,
            self.bounds
        );
        &self.grid.cells[self.grid.index(pos)]
    }
}

impl fmt::Display for Torus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row
                .iter()
                .map(|c| if c.is_alive() { ALIVE_GLYPH } else { DEAD_GLYPH })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
