//! Coordinate wrapping on a toroidal lattice.
//!
//! North is `y - 1`, south is `y + 1`, east is `x + 1` and west is `x - 1`.
//! Stepping off one edge lands on the opposite edge, on both axes.

/// A cell coordinate. Only meaningful together with the [`Bounds`] of the
/// torus it addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// The eight compass directions of the Moore neighborhood.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];

    /// `(dx, dy)` step for this direction
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::N => (0, -1),
            Direction::S => (0, 1),
            Direction::E => (1, 0),
            Direction::W => (-1, 0),
            Direction::NE => (1, -1),
            Direction::NW => (-1, -1),
            Direction::SE => (1, 1),
            Direction::SW => (-1, 1),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::N => Direction::S,
            Direction::S => Direction::N,
            Direction::E => Direction::W,
            Direction::W => Direction::E,
            Direction::NE => Direction::SW,
            Direction::NW => Direction::SE,
            Direction::SE => Direction::NW,
            Direction::SW => Direction::NE,
        }
    }
}

/// Inclusive upper corner `(max_x, max_y)` of a torus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub max_x: usize,
    pub max_y: usize,
}

impl Bounds {
    pub const fn new(max_x: usize, max_y: usize) -> Self {
        Self { max_x, max_y }
    }

    pub const fn width(&self) -> usize {
        self.max_x + 1
    }

    pub const fn height(&self) -> usize {
        self.max_y + 1
    }

    pub const fn contains(&self, pos: Position) -> bool {
        pos.x <= self.max_x && pos.y <= self.max_y
    }

    /// Add `(dx, dy)` to `pos`, wrapping each axis around the torus.
    ///
    /// Diagonal offsets move both axes at once, which gives the same cell as
    /// taking the horizontal step and then the vertical one.
    pub fn wrap_add(&self, pos: Position, (dx, dy): (isize, isize)) -> Position {
        Position {
            x: wrap_axis(pos.x, dx, self.max_x),
            y: wrap_axis(pos.y, dy, self.max_y),
        }
    }

    /// Neighbor of `pos` one step in direction `dir`
    pub fn neighbor(&self, pos: Position, dir: Direction) -> Position {
        self.wrap_add(pos, dir.offset())
    }
}

fn wrap_axis(value: usize, delta: isize, max: usize) -> usize {
    let span = max as isize + 1;
    (value as isize + delta).rem_euclid(span) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_positions(bounds: Bounds) -> Vec<Position> {
        let (mx, my) = (bounds.max_x, bounds.max_y);
        vec![
            // corners
            Position::new(0, 0),
            Position::new(mx, 0),
            Position::new(0, my),
            Position::new(mx, my),
            // edges
            Position::new(mx / 2, 0),
            Position::new(mx / 2, my),
            Position::new(0, my / 2),
            Position::new(mx, my / 2),
            // interior
            Position::new(mx / 2, my / 2),
        ]
    }

    #[test]
    fn test_opposite_directions_round_trip() {
        let bounds = Bounds::new(6, 4);
        for pos in sample_positions(bounds) {
            for dir in Direction::ALL {
                let there = bounds.neighbor(pos, dir);
                let back = bounds.neighbor(there, dir.opposite());
                assert_eq!(back, pos, "{:?} then {:?} from {:?}", dir, dir.opposite(), pos);
            }
        }
    }

    #[test]
    fn test_wraps_to_max_and_zero() {
        let bounds = Bounds::new(4, 9);
        let origin = Position::new(0, 0);
        assert_eq!(bounds.neighbor(origin, Direction::N), Position::new(0, 9));
        assert_eq!(bounds.neighbor(origin, Direction::W), Position::new(4, 0));
        assert_eq!(bounds.neighbor(origin, Direction::NW), Position::new(4, 9));

        let corner = Position::new(4, 9);
        assert_eq!(bounds.neighbor(corner, Direction::S), Position::new(4, 0));
        assert_eq!(bounds.neighbor(corner, Direction::E), Position::new(0, 9));
        assert_eq!(bounds.neighbor(corner, Direction::SE), Position::new(0, 0));
    }

    #[test]
    fn test_diagonal_is_composition() {
        let bounds = Bounds::new(3, 3);
        let pairs = [
            (Direction::NE, Direction::E, Direction::N),
            (Direction::NW, Direction::W, Direction::N),
            (Direction::SE, Direction::E, Direction::S),
            (Direction::SW, Direction::W, Direction::S),
        ];
        for pos in sample_positions(bounds) {
            for (diagonal, horizontal, vertical) in pairs {
                let composed = bounds.neighbor(bounds.neighbor(pos, horizontal), vertical);
                assert_eq!(bounds.neighbor(pos, diagonal), composed);
            }
        }
    }

    #[test]
    fn test_interior_steps_do_not_wrap() {
        let bounds = Bounds::new(10, 10);
        let pos = Position::new(5, 5);
        assert_eq!(bounds.neighbor(pos, Direction::N), Position::new(5, 4));
        assert_eq!(bounds.neighbor(pos, Direction::SW), Position::new(4, 6));
    }

    #[test]
    fn test_contains() {
        let bounds = Bounds::new(2, 2);
        assert!(bounds.contains(Position::new(2, 2)));
        assert!(!bounds.contains(Position::new(3, 0)));
        assert!(!bounds.contains(Position::new(0, 3)));
        assert_eq!((bounds.width(), bounds.height()), (3, 3));
    }
}
