/// State of a single cell.
///
/// Layout: one byte, `0` for dead and `1` for alive, so a grid of cells can be
/// handed to a renderer as a plain byte buffer.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, bytemuck::NoUninit)]
pub enum CellState {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl CellState {
    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    /// `0` or `1`
    pub const fn bit(self) -> u8 {
        self as u8
    }

    /// Any non-zero bit is treated as alive
    pub const fn from_bit(bit: u8) -> Self {
        if bit == 0 {
            CellState::Dead
        } else {
            CellState::Alive
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            CellState::Dead => CellState::Alive,
            CellState::Alive => CellState::Dead,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

impl From<CellState> for bool {
    fn from(state: CellState) -> Self {
        state.is_alive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_size() {
        assert_eq!(std::mem::size_of::<CellState>(), 1);
    }

    #[test]
    fn test_bits() {
        assert_eq!(CellState::Dead.bit(), 0);
        assert_eq!(CellState::Alive.bit(), 1);
        assert_eq!(CellState::from_bit(0), CellState::Dead);
        assert_eq!(CellState::from_bit(7), CellState::Alive);
    }

    #[test]
    fn test_default_is_dead() {
        assert_eq!(CellState::default(), CellState::Dead);
        assert!(!CellState::default().is_alive());
    }

    #[test]
    fn test_toggle() {
        assert_eq!(CellState::Dead.toggled(), CellState::Alive);
        assert_eq!(CellState::Alive.toggled().toggled(), CellState::Alive);
    }
}
