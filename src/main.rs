use cidr_compact_regex::cli::Args;
use cidr_compact_regex::config::{load_dotenv, Config};
use cidr_compact_regex::logging::{init_logging, LOG_CONFIG_FILE};
use clap::Parser;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    load_dotenv(None);
    let args = Args::parse();

    match try_main(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: Args) -> Result<(), Box<dyn Error>> {
    init_logging(LOG_CONFIG_FILE)?;
    let config = Config::from_args(args)?;
    cidr_compact_regex::run(&config)?;
    Ok(())
}
