//! Terminal status lines.

use super::record::Record;
use colored::Colorize;

/// One line reporting what happened to `record`.
pub fn status_line(record: &Record) -> String {
    match &record.result {
        Ok(_) => format!("Written regex for {}", record.cidr.green()),
        Err(e) => format!(
            "Written regex for {} {}",
            record.cidr.yellow(),
            format!("({e})").on_red()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CidrRegexError;

    #[test]
    fn test_status_line() {
        colored::control::set_override(false);
        let ok = Record {
            cidr: "10.0.0.0/30".to_string(),
            result: Ok("(x)".to_string()),
        };
        assert_eq!(status_line(&ok), "Written regex for 10.0.0.0/30");

        let err = Record {
            cidr: "bad".to_string(),
            result: Err(CidrRegexError::InvalidCidr("bad".to_string())),
        };
        assert_eq!(
            status_line(&err),
            "Written regex for bad (Invalid CIDR: bad)"
        );
    }
}
