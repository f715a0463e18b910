mod accounts;
mod app;
mod paths;
mod store;

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::AppError;
use crate::store::Store;

/// Browse account balances in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Database file to open
    #[arg(required_unless_present = "init")]
    db: Option<PathBuf>,

    /// Create and seed a new database file, then exit
    #[arg(short, long, value_name = "DB", conflicts_with = "db")]
    init: Option<PathBuf>,

    /// Write the log here instead of the cache directory
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[arg(long, value_name = "LEVEL", default_value_t = LevelFilter::Debug)]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    if let Some(path) = args.init {
        Store::init(&path)?;
        println!("Initialized {}", path.display());
        return Ok(());
    }

    // clap guarantees a database when --init is absent.
    let Some(path) = args.db else {
        return Ok(());
    };
    let store = Store::open(&path)?;
    app::run(store)
}

/// Log to a file; the terminal itself is in raw mode while the app runs.
fn init_logging(args: &Args) {
    let path = match &args.log_file {
        Some(path) => path.clone(),
        None => {
            let Some(path) = paths::log_file() else {
                eprintln!("Warning: no cache directory, logging disabled");
                return;
            };
            if let Some(dir) = path.parent() {
                let _ = fs::create_dir_all(dir);
                paths::rotate_logs(dir);
            }
            path
        }
    };

    match File::create(&path) {
        Ok(file) => {
            let _ = WriteLogger::init(args.log_level, Config::default(), file);
            log::debug!("logging to {}", path.display());
        }
        Err(e) => eprintln!("Warning: can't create log file {}: {e}", path.display()),
    }
}
