mod app;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use app::App;
use torus_automata::config::{DEFAULT_GENERATIONS, GRID_HEIGHT, GRID_WIDTH, RANDOM_FILL_DENSITY};
use torus_automata::{CellState, Position, Rule, Torus};

/// Step a cellular automaton on a wrapping grid and print each generation.
#[derive(Parser)]
#[command(name = "torus-automata")]
struct Args {
    /// Rule name or rulestring, e.g. "Game of Life", "Seeds", "B3678/S34678", "Rule 30".
    #[arg(short, long, default_value = "Game of Life")]
    rule: String,

    /// Grid width in cells (at least 3).
    #[arg(long, default_value_t = GRID_WIDTH)]
    width: usize,

    /// Grid height in cells (at least 3).
    #[arg(long, default_value_t = GRID_HEIGHT)]
    height: usize,

    /// Number of generations to run.
    #[arg(short, long, default_value_t = DEFAULT_GENERATIONS)]
    generations: u64,

    /// Fraction of cells alive at the start; 0 starts from a single centered cell.
    #[arg(short, long, default_value_t = RANDOM_FILL_DENSITY, value_parser = parse_density)]
    density: f64,

    /// Seed for the random fill.
    #[arg(long)]
    seed: Option<u64>,

    /// Evaluate rows in parallel.
    #[arg(long)]
    parallel: bool,

    /// Only log a summary, do not print generations.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let rule = match args.rule.parse::<Rule>() {
        Ok(rule) => rule,
        Err(e) => {
            log::error!("{}", e);
            let known: Vec<&str> = Rule::ALL.iter().map(|r| r.name()).collect();
            log::error!("Known rules: {}", known.join(", "));
            return ExitCode::FAILURE;
        }
    };

    let initial = initial_torus(&args);
    log::info!(
        "Initial population: {} on {}x{}",
        initial.population(),
        initial.width(),
        initial.height()
    );

    let mut app = App::new(initial, rule, args.parallel, args.quiet);
    let stdout = io::stdout();
    if let Err(e) = app.run(args.generations, &mut stdout.lock()) {
        log::error!("Output error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn initial_torus(args: &Args) -> Torus {
    if args.density <= 0.0 {
        // single seed cell, the usual start for elementary rules
        let mut torus = Torus::new(args.width, args.height);
        let center = Position::new(torus.width() / 2, 0);
        if let Err(e) = torus.set(center, CellState::Alive) {
            log::warn!("Could not place seed cell: {}", e);
        }
        return torus;
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Torus::random(args.width, args.height, args.density, &mut rng)
}

fn parse_density(s: &str) -> Result<f64, String> {
    let density: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if (0.0..=1.0).contains(&density) {
        Ok(density)
    } else {
        Err(format!("{} is not between 0 and 1", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_density() {
        assert_eq!(parse_density("0.25"), Ok(0.25));
        assert_eq!(parse_density("0"), Ok(0.0));
        assert_eq!(parse_density("1"), Ok(1.0));
        assert!(parse_density("NaN").is_err());
        assert!(parse_density("inf").is_err());
        assert!(parse_density("-0.1").is_err());
        assert!(parse_density("1.5").is_err());
        assert!(parse_density("half").is_err());
    }

    #[test]
    fn test_args_reject_bad_density() {
        assert!(Args::try_parse_from(["torus-automata", "--density", "NaN"]).is_err());
        let args = Args::try_parse_from(["torus-automata", "-d", "0.5"]).unwrap();
        assert_eq!(args.density, 0.5);
    }
}
