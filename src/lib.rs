//! Convert IPv4 CIDR blocks into compact regular expressions.
//!
//! ```
//! use cidr_compact_regex::cidr_to_regex;
//! assert_eq!(cidr_to_regex("192.168.1.0/30").unwrap(), r"(192\.168\.1\.(?:[1-2]))");
//! ```

pub mod cli;
pub mod compact;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use config::Config;
use output::{status_line, write_output, Record};
use processing::CidrRegexBuilder;
use std::error::Error;

pub use error::CidrRegexError;
pub use processing::cidr_to_regex;

/// Convert every configured CIDR, in input order.
///
/// Bad inputs become error records; they never stop the run.
pub fn convert_all(config: &Config) -> Vec<Record> {
    let builder = CidrRegexBuilder::from_config(config);
    config
        .cidrs
        .iter()
        .map(|cidr| Record::convert(&builder, cidr))
        .collect()
}

/// Convert, write the records and report each one on the terminal.
pub fn run(config: &Config) -> Result<Vec<Record>, Box<dyn Error>> {
    log::info!(
        "#Start run() {} CIDR(s), limit {:?}",
        config.cidrs.len(),
        config.max_addresses
    );
    let records = convert_all(config);
    write_output(&records, &config.output, config.format)?;

    // status lines would interleave with records written to stdout
    if config.output != config::Output::Stdout {
        for record in &records {
            println!("{}", status_line(record));
        }
    }

    let failed = records.iter().filter(|r| r.result.is_err()).count();
    log::info!("#End run() {} converted, {failed} failed", records.len() - failed);
    Ok(records)
}
