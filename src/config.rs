use std::time::Duration;

/// Smallest allowed width and height; smaller requests are clamped up
pub const MIN_DIMENSION: usize = 3;

/// Default grid dimensions for the headless runner
pub const GRID_WIDTH: usize = 64;
pub const GRID_HEIGHT: usize = 32;

/// Fraction of cells set Alive by a random fill
pub const RANDOM_FILL_DENSITY: f64 = 0.15;

/// Generations run when none are requested
pub const DEFAULT_GENERATIONS: u64 = 100;

// ============================================
// Terminal output
// ============================================

/// Glyph printed for a live cell
pub const ALIVE_GLYPH: char = '#';

/// Glyph printed for a dead cell
pub const DEAD_GLYPH: char = '.';

/// Time between throughput reports in the log
pub const THROUGHPUT_REPORT_INTERVAL: Duration = Duration::from_secs(1);
