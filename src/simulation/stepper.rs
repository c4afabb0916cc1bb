use rand::Rng;
use rayon::prelude::*;

use crate::error::Result;
use crate::simulation::cell::CellState;
use crate::simulation::grid::{Grid, Torus};
use crate::simulation::rules::Rule;
use crate::simulation::topology::Position;

/// Compute the next generation of `torus` under `rule`.
///
/// Every cell is evaluated against the unchanged input; the result is a new
/// torus with the same bounds.
pub fn step(torus: &Torus, rule: Rule) -> Torus {
    let mut next = Grid::dead(torus.width(), torus.height());
    step_into(torus, rule, next.cells_mut());
    Torus::from_grid(next)
}

/// Same as [`step`], with rows evaluated in parallel
pub fn step_parallel(torus: &Torus, rule: Rule) -> Torus {
    let mut next = Grid::dead(torus.width(), torus.height());
    step_into_parallel(torus, rule, next.cells_mut());
    Torus::from_grid(next)
}

/// Resolve `rule_name` and step. Nothing is computed when the name is unknown.
pub fn step_named(torus: &Torus, rule_name: &str) -> Result<Torus> {
    let rule = rule_name.parse::<Rule>()?;
    Ok(step(torus, rule))
}

/// Write the next generation of `src` into `dst`, row-major.
fn step_into(src: &Torus, rule: Rule, dst: &mut [CellState]) {
    debug_assert_eq!(dst.len(), src.width() * src.height());
    let width = src.width();
    for (y, row) in dst.chunks_exact_mut(width).enumerate() {
        evaluate_row(src, rule, y, row);
    }
}

fn step_into_parallel(src: &Torus, rule: Rule, dst: &mut [CellState]) {
    debug_assert_eq!(dst.len(), src.width() * src.height());
    let width = src.width();
    dst.par_chunks_exact_mut(width)
        .enumerate()
        .for_each(|(y, row)| evaluate_row(src, rule, y, row));
}

fn evaluate_row(src: &Torus, rule: Rule, y: usize, row: &mut [CellState]) {
    for (x, cell) in row.iter_mut().enumerate() {
        *cell = rule.transition(src, Position::new(x, y));
    }
}

/// Ping-pong pair of tori for stepping without a fresh allocation each
/// generation.
///
/// The front torus is read, the back torus is written, then the two swap.
/// Both always have the same dimensions: edits go through the pass-through
/// methods, and a torus of another size can only come in through [`load`].
///
/// [`load`]: TorusBuffers::load
pub struct TorusBuffers {
    /// Torus A - ping
    torus_a: Torus,
    /// Torus B - pong
    torus_b: Torus,
    /// Which torus is current (true = A is current, false = B is current)
    read_from_a: bool,
    /// Completed generations
    generation: u64,
    parallel: bool,
}

impl TorusBuffers {
    /// Take `initial` as generation 0
    pub fn new(initial: Torus) -> Self {
        let back = back_buffer_for(&initial);
        log::debug!(
            "Created torus buffers {}x{}",
            initial.width(),
            initial.height()
        );
        Self {
            torus_a: initial,
            torus_b: back,
            read_from_a: true,
            generation: 0,
            parallel: false,
        }
    }

    /// Replace the current torus, resizing the back buffer to match.
    /// The generation counter restarts at 0.
    pub fn load(&mut self, torus: Torus) {
        log::debug!(
            "Loading {}x{} torus at generation {}",
            torus.width(),
            torus.height(),
            self.generation
        );
        self.torus_b = back_buffer_for(&torus);
        self.torus_a = torus;
        self.read_from_a = true;
        self.generation = 0;
    }

    /// Evaluate rows in parallel on subsequent steps
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Get (input, output) tori for the next step
    fn io_buffers(&mut self) -> (&Torus, &mut Torus) {
        if self.read_from_a {
            (&self.torus_a, &mut self.torus_b)
        } else {
            (&self.torus_b, &mut self.torus_a)
        }
    }

    /// The latest generation
    pub fn current(&self) -> &Torus {
        if self.read_from_a {
            &self.torus_a
        } else {
            &self.torus_b
        }
    }

    fn current_mut(&mut self) -> &mut Torus {
        if self.read_from_a {
            &mut self.torus_a
        } else {
            &mut self.torus_b
        }
    }

    /// Checked write of one cell in the latest generation
    pub fn set(&mut self, pos: Position, state: CellState) -> Result<()> {
        self.current_mut().set(pos, state)
    }

    /// Flip one cell in the latest generation
    pub fn toggle(&mut self, pos: Position) -> Result<CellState> {
        self.current_mut().toggle(pos)
    }

    pub fn clear(&mut self) {
        self.current_mut().clear();
    }

    /// See [`Torus::randomize`]
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        self.current_mut().randomize(rng, density);
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance one generation and return it
    pub fn step(&mut self, rule: Rule) -> &Torus {
        let parallel = self.parallel;
        let (input, output) = self.io_buffers();
        let cells = output.grid_mut().cells_mut();
        if parallel {
            step_into_parallel(input, rule, cells);
        } else {
            step_into(input, rule, cells);
        }
        self.swap();
        self.generation += 1;
        log::trace!("Generation {} ({})", self.generation, rule);
        self.current()
    }

    /// Swap buffers after a step
    fn swap(&mut self) {
        self.read_from_a = !self.read_from_a;
    }

    /// Give up the buffers, keeping the latest generation
    pub fn into_current(self) -> Torus {
        if self.read_from_a {
            self.torus_a
        } else {
            self.torus_b
        }
    }
}

fn back_buffer_for(front: &Torus) -> Torus {
    Torus::from_grid(Grid::dead(front.width(), front.height()))
}
