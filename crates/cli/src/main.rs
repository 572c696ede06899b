//! Five-stage MIPS pipeline simulator CLI.
//!
//! This binary provides a single entry point for all simulation modes. It performs:
//! 1. **Run:** Execute one program file and write the per-cycle trace to a file or stdout.
//! 2. **Batch:** Run the four reference scenarios (general, data hazard, load-use hazard,
//!    branch hazard) from an input directory into result files.
//! 3. **Disassembly:** Print each instruction of a program file in assembler syntax.
//!
//! Diagnostics go to stderr through `tracing`; `-v` raises the level and `RUST_LOG`
//! overrides it.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pipesim_core::config::Config;
use pipesim_core::isa::disasm::disassemble;
use pipesim_core::sim::Simulator;
use pipesim_core::sim::loader;
use pipesim_core::stats::SimStats;

/// Reference scenarios run by `batch`: (program, trace) file names.
const BATCH_CASES: [(&str, &str); 4] = [
    ("General.txt", "genResult.txt"),
    ("Datahazard.txt", "dataResult.txt"),
    ("Lwhazard.txt", "loadResult.txt"),
    ("Branchazard.txt", "branchResult.txt"),
];

#[derive(Parser, Debug)]
#[command(
    name = "pipesim",
    author,
    version,
    about = "Cycle-accurate five-stage MIPS pipeline simulator",
    long_about = "Run programs of 32-bit binary encodings (one per line) through a five-stage pipeline with branch flush, forwarding and load-use stalls, printing the machine state after every cycle.\n\nExamples:\n  pipesim run General.txt -o genResult.txt\n  pipesim batch --input-dir tests/ --output-dir out/\n  pipesim disasm Lwhazard.txt"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one program and write its cycle trace.
    Run {
        /// Program file: one 32-digit binary instruction per line.
        program: PathBuf,

        /// Trace output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON configuration with initial registers and memory.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Abort if the pipeline has not drained after this many cycles.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// Print run statistics to stderr when done.
        #[arg(long)]
        stats: bool,
    },

    /// Run the four reference scenarios into their result files.
    Batch {
        /// Directory holding General.txt, Datahazard.txt, Lwhazard.txt and Branchazard.txt.
        #[arg(long, default_value = ".")]
        input_dir: PathBuf,

        /// Directory the result traces are written to.
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,

        /// JSON configuration with initial registers and memory.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the disassembly of a program file.
    Disasm {
        /// Program file: one 32-digit binary instruction per line.
        program: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            program,
            output,
            config,
            max_cycles,
            stats,
        } => cmd_run(&program, output.as_deref(), config.as_deref(), max_cycles, stats),
        Commands::Batch {
            input_dir,
            output_dir,
            config,
        } => cmd_batch(&input_dir, &output_dir, config.as_deref()),
        Commands::Disasm { program } => cmd_disasm(&program),
    };

    if let Err(msg) = result {
        eprintln!("Error: {msg}");
        process::exit(1);
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows the `-v` count.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Reads the configuration file, or returns the reference machine.
fn read_config(path: Option<&Path>) -> Result<Config, String> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = fs::read_to_string(path)
        .map_err(|e| format!("could not read config '{}': {e}", path.display()))?;
    Config::from_json(&text).map_err(|e| format!("{}: {e}", path.display()))
}

/// Runs one program from `program` and writes its trace to `out`.
fn simulate<W: Write>(
    config: &Config,
    program: &Path,
    out: &mut W,
) -> Result<SimStats, String> {
    let encodings = loader::load_program(program).map_err(|e| e.to_string())?;
    let mut sim = Simulator::with_program(config, &encodings).map_err(|e| e.to_string())?;
    sim.run(out)
        .map_err(|e| format!("{}: {e}", program.display()))
}

/// Handles `pipesim run`.
fn cmd_run(
    program: &Path,
    output: Option<&Path>,
    config: Option<&Path>,
    max_cycles: Option<u64>,
    print_stats: bool,
) -> Result<(), String> {
    let mut config = read_config(config)?;
    if max_cycles.is_some() {
        config.max_cycles = max_cycles;
        config.validate().map_err(|e| e.to_string())?;
    }

    let stats = if let Some(path) = output {
        let file = File::create(path)
            .map_err(|e| format!("could not create '{}': {e}", path.display()))?;
        simulate(&config, program, &mut BufWriter::new(file))?
    } else {
        let stdout = io::stdout();
        simulate(&config, program, &mut stdout.lock())?
    };

    if print_stats {
        eprintln!("{stats}");
    }
    Ok(())
}

/// Handles `pipesim batch`.
///
/// Every scenario is attempted; the command fails if any of them failed.
fn cmd_batch(input_dir: &Path, output_dir: &Path, config: Option<&Path>) -> Result<(), String> {
    let config = read_config(config)?;
    let mut failed = 0;

    for (input, output) in BATCH_CASES {
        let program = input_dir.join(input);
        let trace = output_dir.join(output);
        let outcome = File::create(&trace)
            .map_err(|e| format!("could not create '{}': {e}", trace.display()))
            .and_then(|file| simulate(&config, &program, &mut BufWriter::new(file)));

        match outcome {
            Ok(stats) => {
                tracing::info!(program = input, cycles = stats.cycles, "scenario complete");
            }
            Err(msg) => {
                eprintln!("Error: {msg}");
                failed += 1;
            }
        }
    }

    if failed == 0 {
        Ok(())
    } else {
        Err(format!("{failed} of {} scenarios failed", BATCH_CASES.len()))
    }
}

/// Handles `pipesim disasm`.
fn cmd_disasm(program: &Path) -> Result<(), String> {
    let encodings = loader::load_program(program).map_err(|e| e.to_string())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (idx, raw) in encodings.iter().enumerate() {
        writeln!(out, "{:4}:  {raw:032b}  {}", idx * 4, disassemble(*raw))
            .map_err(|e| e.to_string())?;
    }
    Ok(())
}
