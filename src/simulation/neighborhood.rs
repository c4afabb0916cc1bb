use crate::simulation::grid::Torus;
use crate::simulation::topology::{Direction, Position};

/// Moore neighborhood, clockwise from the north-west corner
pub const MOORE: [Direction; 8] = [
    Direction::NW,
    Direction::N,
    Direction::NE,
    Direction::E,
    Direction::SE,
    Direction::S,
    Direction::SW,
    Direction::W,
];

/// Number of alive cells among the neighbors of `pos` in `directions`.
/// Repeated directions are counted each time they appear.
pub fn count_live(torus: &Torus, pos: Position, directions: &[Direction]) -> usize {
    let bounds = torus.bounds();
    directions
        .iter()
        .filter(|&&dir| torus.at(bounds.neighbor(pos, dir)).is_alive())
        .count()
}

/// Alive Moore neighbors of `pos`, in `[0, 8]`
pub fn moore_count(torus: &Torus, pos: Position) -> usize {
    count_live(torus, pos, &MOORE)
}
