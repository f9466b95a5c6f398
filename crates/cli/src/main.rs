//! MIPS-subset pipeline simulator CLI.
//!
//! This binary is the single entry point for a run. It performs:
//! 1. **Disassembly:** Decodes the input listing and writes `disassembly.txt`.
//! 2. **Simulation:** Runs the pipeline to completion and writes `simulation.txt`.
//! 3. **Reporting:** Optionally prints or saves the run statistics.
//!
//! Any decode, configuration, or simulation error is printed to stderr and
//! the process exits with status 1. Outputs are written only after the run
//! succeeds.

use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{ArgAction, Parser};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use mipsim_core::config::Config;
use mipsim_core::isa::disasm;
use mipsim_core::sim::{Simulator, load_image};

/// Name of the disassembly listing written to the output directory.
const DISASSEMBLY_FILE: &str = "disassembly.txt";

/// Name of the cycle trace written to the output directory.
const SIMULATION_FILE: &str = "simulation.txt";

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "MIPS-subset disassembler and two-issue pipeline simulator",
    long_about = "Decodes a text file of 32-bit binary words, writes its disassembly, and \
                  simulates it on a two-issue scoreboarded pipeline, writing one trace block \
                  per cycle.\n\nExamples:\n  mipsim sample.txt\n  mipsim sample.txt --out-dir \
                  out --stats\n  mipsim sample.txt --config absolute.json -vv"
)]
struct Cli {
    /// Input file: one 32-character binary word per line.
    input: PathBuf,

    /// JSON configuration document (see `mipsim_core::config::Config`).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory that receives disassembly.txt and simulation.txt.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Print the run statistics to stdout.
    #[arg(long)]
    stats: bool,

    /// Write the run statistics as JSON to this file.
    #[arg(long)]
    stats_json: Option<PathBuf>,

    /// Raise the log level (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(message) = run(&cli) {
        eprintln!("error: {message}");
        process::exit(1);
    }
}

/// Installs the `tracing` subscriber on stderr.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Loads, disassembles, simulates, and writes every output.
fn run(cli: &Cli) -> Result<(), String> {
    let config = match &cli.config {
        Some(path) => {
            let text = read(path)?;
            Config::from_json(&text).map_err(|e| format!("{}: {e}", path.display()))?
        }
        None => Config::default(),
    };
    debug!(?config, "configuration");

    let source = read(&cli.input)?;
    let image = load_image(&source, &config).map_err(|e| format!("{}: {e}", cli.input.display()))?;
    let listing = disasm::listing(&image);

    let mut sim = Simulator::new(image, &config);
    let trace = sim.run_to_trace().map_err(|e| e.to_string())?;

    fs::create_dir_all(&cli.out_dir)
        .map_err(|e| format!("cannot create {}: {e}", cli.out_dir.display()))?;
    write(&cli.out_dir.join(DISASSEMBLY_FILE), &listing)?;
    write(&cli.out_dir.join(SIMULATION_FILE), &trace)?;

    let stats = sim.stats();
    info!(
        cycles = stats.cycles,
        retired = stats.instructions_retired,
        ipc = stats.ipc(),
        "run complete"
    );
    if cli.stats {
        print!("{}", stats.report());
    }
    if let Some(path) = &cli.stats_json {
        let json = serde_json::to_string_pretty(stats).map_err(|e| e.to_string())?;
        write(path, &json)?;
    }
    Ok(())
}

fn read(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))
}

fn write(path: &Path, contents: &str) -> Result<(), String> {
    fs::write(path, contents).map_err(|e| format!("cannot write {}: {e}", path.display()))
}
