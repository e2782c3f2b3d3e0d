mod app;
mod host;
mod keys;
mod paths;
mod terminal;
mod view;

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use frontier_lib::{Catalog, NavConfig};
use log::{error, info};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::host::TuiHost;
use crate::terminal::Terminal;

/// Browse a catalog of resources from the keyboard.
#[derive(Parser, Debug)]
#[command(name = "frontier", version, about)]
struct Args {
    /// Catalog JSON file (default: catalog.json in the data directory)
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Start in zen mode
    #[arg(long)]
    zen: bool,

    /// off, error, warn, info, debug or trace
    #[arg(long, value_name = "LEVEL", default_value = "debug", value_parser = parse_level)]
    log_level: LevelFilter,
}

fn parse_level(value: &str) -> Result<LevelFilter, String> {
    value
        .parse()
        .map_err(|_| format!("unknown log level: {}", value))
}

fn init_logging(level: LevelFilter) {
    let Some(path) = paths::start_log() else { return };
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(level, Config::default(), file);
    }
}

fn run(args: Args) -> Result<(), String> {
    let path = args
        .catalog
        .or_else(paths::default_catalog)
        .ok_or("No catalog given and no data directory found")?;
    let catalog = Catalog::load(&path).map_err(|e| e.to_string())?;
    info!("Loaded catalog {}", path.display());

    let config = NavConfig::default();
    let mut app = App::new(TuiHost::new(catalog), &config, args.zen);

    let mut terminal = Terminal::new().map_err(|e| format!("Failed to set up terminal: {}", e))?;
    let result = app.run(&mut terminal);
    drop(terminal);

    result.map_err(|e| format!("Terminal error: {}", e))
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(args.log_level);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
