//! The closed set of transition rules.
//!
//! Life-like rules are totalistic over the Moore neighborhood and are stored
//! as birth/survival bitmasks indexed by live-neighbor count. Elementary rules
//! read the three cells in the row above (NW, N, NE) and look the pattern up
//! in their Wolfram code, so each row holds the next 1-D generation of the row
//! above it.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::simulation::cell::CellState;
use crate::simulation::grid::Torus;
use crate::simulation::neighborhood::moore_count;
use crate::simulation::topology::{Direction, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// B3/S23
    GameOfLife,
    /// B3/S012345678
    LifeWithoutDeath,
    /// B3678/S34678
    DayAndNight,
    /// B35678/S5678
    Diamoeba,
    /// B2/S
    Seeds,
    /// `left ^ (center | right)`
    Rule30,
    /// `left ^ right`
    Rule90,
}

/// How a rule computes the next state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Family {
    /// Bit `n` of `birth` / `survive` is set when `n` live neighbors give birth / survival.
    LifeLike { birth: u16, survive: u16 },
    /// Wolfram code over the (NW, N, NE) triple.
    Elementary(u8),
}

const fn counts(list: &[u8]) -> u16 {
    let mut mask = 0u16;
    let mut i = 0;
    while i < list.len() {
        mask |= 1 << list[i];
        i += 1;
    }
    mask
}

const ROW_ABOVE: [Direction; 3] = [Direction::NW, Direction::N, Direction::NE];

impl Rule {
    pub const ALL: [Rule; 7] = [
        Rule::GameOfLife,
        Rule::LifeWithoutDeath,
        Rule::DayAndNight,
        Rule::Diamoeba,
        Rule::Seeds,
        Rule::Rule30,
        Rule::Rule90,
    ];

    fn family(self) -> Family {
        match self {
            Rule::GameOfLife => Family::LifeLike {
                birth: counts(&[3]),
                survive: counts(&[2, 3]),
            },
            Rule::LifeWithoutDeath => Family::LifeLike {
                birth: counts(&[3]),
                survive: counts(&[0, 1, 2, 3, 4, 5, 6, 7, 8]),
            },
            Rule::DayAndNight => Family::LifeLike {
                birth: counts(&[3, 6, 7, 8]),
                survive: counts(&[3, 4, 6, 7, 8]),
            },
            Rule::Diamoeba => Family::LifeLike {
                birth: counts(&[3, 5, 6, 7, 8]),
                survive: counts(&[5, 6, 7, 8]),
            },
            Rule::Seeds => Family::LifeLike {
                birth: counts(&[2]),
                survive: 0,
            },
            Rule::Rule30 => Family::Elementary(30),
            Rule::Rule90 => Family::Elementary(90),
        }
    }

    /// Human-readable name, as accepted by [`Rule::from_str`]
    pub fn name(self) -> &'static str {
        match self {
            Rule::GameOfLife => "Game of Life",
            Rule::LifeWithoutDeath => "Life without Death",
            Rule::DayAndNight => "Day and Night",
            Rule::Diamoeba => "Diamoeba",
            Rule::Seeds => "Seeds",
            Rule::Rule30 => "Rule 30",
            Rule::Rule90 => "Rule 90",
        }
    }

    /// `B../S..` notation for life-like rules, `W<code>` for elementary ones
    pub fn rulestring(self) -> String {
        match self.family() {
            Family::LifeLike { birth, survive } => {
                format!("B{}/S{}", digits(birth), digits(survive))
            }
            Family::Elementary(code) => format!("W{}", code),
        }
    }

    pub fn is_life_like(self) -> bool {
        matches!(self.family(), Family::LifeLike { .. })
    }

    /// Next state of the cell at `pos`, read from `torus` only.
    pub fn transition(self, torus: &Torus, pos: Position) -> CellState {
        match self.family() {
            Family::LifeLike { birth, survive } => {
                let live = moore_count(torus, pos);
                let mask = if torus.at(pos).is_alive() { survive } else { birth };
                CellState::from(mask & (1u16 << live) != 0)
            }
            Family::Elementary(code) => {
                let bounds = torus.bounds();
                let pattern = ROW_ABOVE.iter().fold(0u8, |acc, &dir| {
                    (acc << 1) | torus.at(bounds.neighbor(pos, dir)).bit()
                });
                CellState::from_bit((code >> pattern) & 1)
            }
        }
    }
}

fn digits(mask: u16) -> String {
    (0..=8u8)
        .filter(|n| mask & (1 << n) != 0)
        .map(|n| char::from(b'0' + n))
        .collect()
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = Error;

    /// Accepts the display name or the rulestring, ignoring case.
    /// `Hat` is an older name for Rule 90.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("hat") {
            return Ok(Rule::Rule90);
        }
        Rule::ALL
            .into_iter()
            .find(|rule| {
                wanted.eq_ignore_ascii_case(rule.name())
                    || wanted.eq_ignore_ascii_case(&rule.rulestring())
            })
            .ok_or_else(|| {
                log::debug!("No rule matches {:?}", s);
                Error::UnknownRule(s.to_string())
            })
    }
}
