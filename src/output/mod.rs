//! Output of conversion results.
//!
//! - [`record`] - one result per input CIDR
//! - [`writer`] - text/JSON record sink
//! - [`terminal`] - coloured status lines

mod record;
mod terminal;
mod writer;

pub use record::Record;
pub use terminal::status_line;
pub use writer::{write_output, write_records};
