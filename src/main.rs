//! Crash Round entry point
//!
//! Loads settings, opens the state sink and runs rounds until stopped or
//! until a publish fails.
//!
//! ```bash
//! # Live rounds as JSON lines on stdout
//! crash-round
//!
//! # Ten fast-forwarded rounds with reproducible crash points
//! crash-round --seed 42 --rounds 10 --simulated
//!
//! # Keep the live record in a file
//! crash-round --sink file --output state/live_game.json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crash_round::round::{Clock, RoundEngine, SimulatedClock, SystemClock};
use crash_round::sink::{FileSink, JsonLinesSink, MemorySink, StateSink};
use crash_round::{ConfigError, Settings, SinkKind};

/// Crash Round - perpetual crash-game round engine
#[derive(Parser)]
#[command(name = "crash-round")]
#[command(version)]
struct Cli {
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sink to publish to: memory, stdout or file
    #[arg(long)]
    sink: Option<String>,

    /// Output path for the file sink
    #[arg(long)]
    output: Option<PathBuf>,

    /// Seed for reproducible crash points
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many rounds (default: run forever)
    #[arg(long)]
    rounds: Option<u64>,

    /// Skip real sleeping
    #[arg(long)]
    simulated: bool,
}

fn main() {
    env_logger::init();

    if let Err(err) = run(Cli::parse()) {
        log::error!("Engine stopped: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(&cli)?;
    settings.validate()?;

    let sink = open_sink(&settings)?;
    let clock: Box<dyn Clock> = if cli.simulated {
        Box::new(SimulatedClock::untracked())
    } else {
        Box::new(SystemClock)
    };
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Crash Round starting (sink: {}, seed: {})", settings.sink.as_str(), seed);

    let mut engine = RoundEngine::new(settings, sink, clock, Pcg32::seed_from_u64(seed));
    match cli.rounds {
        Some(rounds) => {
            let summaries = engine.run_rounds(rounds)?;
            log::info!("Finished {} rounds", summaries.len());
            Ok(())
        }
        None => match engine.run()? {},
    }
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    if let Some(name) = &cli.sink {
        settings.sink = SinkKind::from_str(name).ok_or_else(|| anyhow!("unknown sink {name:?}"))?;
    }
    if let Some(output) = &cli.output {
        settings.output = Some(output.clone());
    }
    if let Some(seed) = cli.seed {
        settings.seed = Some(seed);
    }
    Ok(settings)
}

fn open_sink(settings: &Settings) -> Result<Box<dyn StateSink>> {
    let sink: Box<dyn StateSink> = match settings.sink {
        SinkKind::Memory => Box::new(MemorySink::record_only()),
        SinkKind::Stdout => Box::new(JsonLinesSink::stdout()),
        SinkKind::File => {
            let path = settings.output.clone().ok_or(ConfigError::MissingOutputPath)?;
            Box::new(FileSink::open(&path).with_context(|| format!("opening {}", path.display()))?)
        }
    };
    Ok(sink)
}
