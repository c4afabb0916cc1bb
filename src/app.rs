use std::io::{self, Write};
use std::time::{Duration, Instant};

use torus_automata::config::THROUGHPUT_REPORT_INTERVAL;
use torus_automata::{Rule, Torus, TorusBuffers};

/// Headless runner: steps a torus and writes each generation as text.
pub struct App {
    buffers: TorusBuffers,
    rule: Rule,
    quiet: bool,
    throughput: ThroughputCounter,
}

impl App {
    pub fn new(initial: Torus, rule: Rule, parallel: bool, quiet: bool) -> Self {
        Self {
            buffers: TorusBuffers::new(initial).with_parallel(parallel),
            rule,
            quiet,
            throughput: ThroughputCounter::new(THROUGHPUT_REPORT_INTERVAL),
        }
    }

    /// Write the starting torus, then `generations` further ones
    pub fn run<W: Write>(&mut self, generations: u64, out: &mut W) -> io::Result<()> {
        log::info!(
            "Running {} for {} generations on a {}x{} torus",
            self.rule,
            generations,
            self.buffers.current().width(),
            self.buffers.current().height()
        );

        self.render(out)?;
        for _ in 0..generations {
            self.buffers.step(self.rule);
            self.render(out)?;

            if let Some(rate) = self.throughput.observe(self.buffers.generation()) {
                log::info!(
                    "{:.0} generations/s - generation {} - population {}",
                    rate,
                    self.buffers.generation(),
                    self.buffers.current().population()
                );
            }
        }
        out.flush()?;

        log::info!(
            "Finished at generation {} with population {}",
            self.buffers.generation(),
            self.buffers.current().population()
        );
        Ok(())
    }

    #[cfg(test)]
    pub fn current(&self) -> &Torus {
        self.buffers.current()
    }

    fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let torus = self.buffers.current();
        writeln!(
            out,
            "generation {} population {}",
            self.buffers.generation(),
            torus.population()
        )?;
        write!(out, "{}", torus)?;
        writeln!(out)
    }
}

/// Generations per second, reported at most once per `interval`
struct ThroughputCounter {
    interval: Duration,
    since: Instant,
    since_generation: u64,
}

impl ThroughputCounter {
    fn new(interval: Duration) -> Self {
        Self {
            interval,
            since: Instant::now(),
            since_generation: 0,
        }
    }

    /// Record that `generation` is done; returns the rate once the interval has passed
    fn observe(&mut self, generation: u64) -> Option<f64> {
        let elapsed = self.since.elapsed();
        if elapsed < self.interval {
            return None;
        }
        let steps = generation.saturating_sub(self.since_generation);
        self.since = Instant::now();
        self.since_generation = generation;
        Some(steps as f64 / elapsed.as_secs_f64())
    }
}
