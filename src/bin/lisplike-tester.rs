//! lisplike-tester CLI
//!
//! Offer each test script to the user and run the interpreter on approved ones.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use lisplike_tester::{RunConfig, TestRunner, DEFAULT_EXECUTABLE, DEFAULT_OUTPUT_DIR, DEFAULT_SCRIPT_DIR};

#[derive(Parser, Debug)]
#[command(name = "lisplike-tester")]
#[command(version)]
#[command(about = "Interactively run test scripts through the lisp-like interpreter")]
struct Cli {
    /// Interpreter executable to invoke for each script
    #[arg(short = 'x', long = "exe", env = "LISPLIKE_EXE", default_value = DEFAULT_EXECUTABLE)]
    executable: PathBuf,

    /// Directory containing the test scripts
    #[arg(short = 'd', long = "scripts", env = "LISPLIKE_SCRIPTS", default_value = DEFAULT_SCRIPT_DIR)]
    scripts: PathBuf,

    /// Output directory (reserved)
    #[arg(short = 'o', long = "out", env = "LISPLIKE_OUT", default_value = DEFAULT_OUTPUT_DIR)]
    out: PathBuf,

    /// Only offer scripts whose name contains this string
    #[arg(short = 'f', long)]
    filter: Option<String>,

    /// Only offer scripts ending with this suffix (repeatable)
    #[arg(long = "ext")]
    extensions: Vec<String>,

    /// Answer yes to every prompt
    #[arg(short = 'y', long = "yes")]
    yes: bool,

    /// Show number of scripts without running
    #[arg(long = "count")]
    count: bool,

    /// Verbose output: log each invocation
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = RunConfig::new(cli.executable, cli.scripts)
        .output_dir(cli.out)
        .extensions(cli.extensions)
        .assume_yes(cli.yes);
    if let Some(filter) = cli.filter {
        config = config.filter(filter);
    }

    let mut runner = TestRunner::new(config);

    if cli.count {
        return match runner.count_entries() {
            Ok(count) => {
                println!("Found {} test scripts", count);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {}", e);
                ExitCode::from(e.exit_code())
            }
        };
    }

    match runner.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_user_abort() => {
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
