use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use seesort_trace::Algorithm;

use crate::config::PlayerConfig;
use crate::export::TraceFile;
use crate::values::{new_rng, parse_values, random_values};

mod config;
mod export;
mod logging;
mod palette;
mod tui;
mod values;

#[derive(Parser, Debug)]
#[command(name = "seesort", about = "Sorting algorithm visualizer", version)]
struct Args {
    /// Run the interactive player
    #[arg(long)]
    tui: bool,

    /// Algorithm to export: merge, quick, insertion or bubble
    #[arg(long, short, default_value = "merge", value_parser = parse_algorithm)]
    algorithm: Algorithm,

    /// Bar values, e.g. `5,3,8,1`; random when omitted
    #[arg(long)]
    values: Option<String>,

    /// Number of bars for random arrays on wide terminals
    #[arg(long)]
    bars: Option<usize>,

    /// Delay between animation steps in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Seed for random arrays
    #[arg(long)]
    seed: Option<u64>,

    /// Export the trace as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Write the exported trace to a file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Log file used while the TUI is running
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

impl Args {
    fn player_config(&self) -> PlayerConfig {
        let mut config = PlayerConfig::default();
        if let Some(bars) = self.bars {
            config.bar_count = bars;
            config.narrow_bar_count = config.narrow_bar_count.min(bars);
        }
        if let Some(delay) = self.delay_ms {
            config.step_delay = Duration::from_millis(delay);
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = log_file.clone();
        }
        config.seed = self.seed;
        config
    }
}

fn export(args: &Args, config: &PlayerConfig, values: Option<Vec<u64>>) -> Result<()> {
    let initial = values.unwrap_or_else(|| {
        random_values(&mut new_rng(config), config.bar_count, config)
    });
    let file = TraceFile::record(args.algorithm, initial);
    tracing::info!(
        algorithm = args.algorithm.key(),
        steps = file.steps.len(),
        "trace recorded"
    );

    match &args.output {
        Some(path) => {
            file.write(path, args.json)?;
            eprintln!("Trace written to: {}", path.display());
        }
        None if args.json => println!("{}", file.to_json()?),
        None => print!("{}", file.to_text()),
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    let config = args.player_config();

    let values = match args.values.as_deref().map(parse_values).transpose() {
        Ok(values) => values,
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(2);
        }
    };

    if args.tui {
        let _guard = match logging::init_file_logging(&config.log_file) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("Warning: file logging disabled: {e:#}");
                None
            }
        };
        if let Err(e) = tui::run_tui(config, values) {
            // try to gracefully restore terminal
            let _ = tui::term::restore_terminal();
            eprintln!("TUI error: {e:#}");
            std::process::exit(1);
        }
        let _ = tui::term::restore_terminal();
        return;
    }

    if let Err(e) = logging::init_stderr_logging() {
        eprintln!("Warning: {e:#}");
    }
    if let Err(e) = export(&args, &config, values).context("Export failed") {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
