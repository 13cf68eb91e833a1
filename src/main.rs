// Entry point for the air quality cross-table reporter.
//
// Parses the command line, sets up logging and hands stdin/stdout to an
// interactive session:
// - options 1-3 print the average/minimum/maximum concentration per zip code
//   and time of day,
// - option 4 toggles which zip codes are shown,
// - option 5 (re)loads the CSV export.
mod cli;
mod dataset;
mod error;
mod loader;
mod menu;
mod output;
mod reports;
mod types;
mod util;

use clap::Parser;
use cli::Args;
use log::debug;
use menu::Session;
use std::error::Error;
use std::io;

fn init_logging(args: &Args) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(&args);
    debug!("arguments: {:?}", args);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), args.file);
    if args.sample {
        session = session.with_sample_data();
    }
    session.run()?;
    Ok(())
}
