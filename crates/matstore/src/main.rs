//! Line-oriented shell over a matstore dispatcher.
//!
//! Reads one command per line from stdin, prints outcomes to stdout and
//! failures to stderr, and stops at `exit` or end of input. Logging goes
//! to stderr and is controlled with `RUST_LOG` (default `warn`).

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use matstore_command::{DispatchConfig, Dispatcher, Outcome};
use matstore_registry::RegistryConfig;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "matstore", version, about = "Interactive store of small integer matrices")]
struct Args {
    /// Number of registry slots.
    #[arg(long, default_value_t = matstore_core::DEFAULT_CAPACITY)]
    capacity: usize,

    /// Directory `write <name>` saves into.
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Seed for `random`; omit for a fresh seed each run.
    #[arg(long)]
    seed: Option<u64>,

    /// Skip creating and writing the startup `temp_mat` matrix.
    #[arg(long)]
    no_scratch: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    let config = DispatchConfig {
        registry: RegistryConfig::new(args.capacity),
        output_dir: args.dir,
        seed: args.seed,
    };
    let mut dispatcher = match Dispatcher::new(config) {
        Ok(d) => d,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if !args.no_scratch {
        if let Err(e) = dispatcher.seed_scratch() {
            eprintln!("error: failed to initialize scratch matrix: {e}");
            return ExitCode::FAILURE;
        }
    }

    let status = run(&mut dispatcher);
    let destroyed = dispatcher.shutdown();
    info!(destroyed, "session ended");
    status
}

/// Feed stdin to the dispatcher until `exit` or EOF.
fn run(dispatcher: &mut Dispatcher) -> ExitCode {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            print!("> ");
            let _ = stdout.flush();
        }
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("error: failed to read input: {e}");
                return ExitCode::FAILURE;
            }
            None => return ExitCode::SUCCESS,
        };
        if line.trim().is_empty() {
            continue;
        }

        match dispatcher.run_line(&line) {
            Ok(Outcome::Exit) => return ExitCode::SUCCESS,
            Ok(outcome) => println!("{outcome}"),
            Err(e) => eprintln!("error: {e}"),
        }
    }
}
