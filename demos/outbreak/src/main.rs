//! outbreak — headless run of the rust_epi engine.
//!
//! Usage: `outbreak [CONFIG.json] [TICKS]`
//!
//! Without a config file the built-in defaults are used (100 agents, 5
//! initially infected, 20×20 domain).  Every tick is logged at debug level;
//! the run ends with the epidemic curve's peak and the final stage tally.
//! Set `RUST_LOG=debug` for the per-tick trace.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use epi_core::{EpidemicConfig, Stage, StagePalette, Tick};
use epi_sim::{EngineBuilder, Snapshot, StageHistory, TickObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_TICKS: u64  = 500;
const LOG_PATTERN:   &str = "{d(%Y-%m-%dT%H:%M:%SZ)} {h({l})} {t} - {m}{n}";
const REPORT_EVERY:  u64  = 50;

// ── Logging ───────────────────────────────────────────────────────────────────

fn init_logging() -> Result<()> {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&str>) -> Result<EpidemicConfig> {
    let Some(path) = path else {
        return Ok(EpidemicConfig::default());
    };
    let text = std::fs::read_to_string(Path::new(path))
        .with_context(|| format!("reading config {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs a stage tally every `interval` ticks and feeds a [`StageHistory`].
struct Reporter {
    interval: u64,
    history:  StageHistory,
}

impl TickObserver for Reporter {
    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        if snapshot.tick.0 % self.interval == 0 {
            log::info!("{}: {}", snapshot.tick, snapshot.counts());
        }
        self.history.on_snapshot(snapshot);
    }

    fn on_run_end(&mut self, next_tick: Tick) {
        log::info!("stopped before {next_tick}");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging()?;

    let args: Vec<String> = std::env::args().collect();
    let config = load_config(args.get(1).map(String::as_str))?;
    let ticks = match args.get(2) {
        Some(s) => s.parse::<u64>().with_context(|| format!("invalid tick count {s:?}"))?,
        None => DEFAULT_TICKS,
    };

    let mut engine = EngineBuilder::new(config).build()?;
    let mut reporter = Reporter { interval: REPORT_EVERY, history: StageHistory::new() };

    let t0 = Instant::now();
    engine.run_ticks(ticks, &mut reporter)?;
    let elapsed = t0.elapsed();

    println!();
    println!("{ticks} ticks in {:.3} s (seed {})", elapsed.as_secs_f64(), engine.seed());
    if let Some((tick, n)) = reporter.history.peak_infectious() {
        println!("peak infectious: {n} agents at {tick}");
    }

    let palette = StagePalette::default();
    let counts = engine.counts();
    println!();
    println!("{:<14} {:<12} {:>6}", "Stage", "Color", "Agents");
    println!("{}", "-".repeat(34));
    for (stage, entry) in palette.legend() {
        println!("{:<14} {:<12} {:>6}", entry.label, entry.color, counts.get(stage));
    }

    let still_sick = counts.total() - counts.get(Stage::NotInfected) - counts.get(Stage::Recovered);
    if still_sick > 0 {
        log::info!("{still_sick} agents still infectious at end of run");
    }

    Ok(())
}
