mod cell;
mod grid;
mod neighborhood;
mod rules;
mod stepper;
mod topology;

pub use cell::CellState;
pub use grid::{create, Grid, Torus};
pub use neighborhood::{count_live, moore_count, MOORE};
pub use rules::Rule;
pub use stepper::{step, step_named, step_parallel, TorusBuffers};
pub use topology::{Bounds, Direction, Position};
