//! Command line arguments.

use crate::config::{OutputFormat, DEFAULT_MAX_ADDRESSES, DEFAULT_OUTPUT, MAX_ADDRESSES_ENV};
use clap::Parser;
use std::path::PathBuf;

/// Convert CIDR blocks to optimized regex patterns
#[derive(Parser, Debug)]
#[command(name = "cidr-compact-regex", version, about)]
pub struct Args {
    /// CIDR block(s) (e.g. 192.168.0.0/24)
    #[arg(required_unless_present = "input")]
    pub cidr: Vec<String>,

    /// Read more CIDR blocks from FILE, one per line
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file, `-` for stdout
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub out: String,

    /// Output record format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Refuse networks with more addresses than this
    #[arg(long, value_name = "N", env = MAX_ADDRESSES_ENV, default_value_t = DEFAULT_MAX_ADDRESSES)]
    pub max_addresses: u64,

    /// Convert networks of any size
    #[arg(long)]
    pub no_limit: bool,
}
