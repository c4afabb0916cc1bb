//! Cellular automata on a wrapping 2-D grid.
//!
//! [`create`] builds an all-dead [`Torus`], [`step`] computes the next
//! generation under a [`Rule`]. Life-like rules (Game of Life, Seeds, Day and
//! Night, ...) and elementary 1-D rules (Rule 30, Rule 90) share the same
//! stepping machinery.

pub mod config;
pub mod error;
pub mod simulation;

pub use error::{Error, Result};
pub use simulation::{
    create, step, step_named, step_parallel, Bounds, CellState, Direction, Grid, Position, Rule,
    Torus, TorusBuffers,
};
