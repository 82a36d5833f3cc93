//! Writing records to a file or stdout.

use super::record::Record;
use crate::config::{Output, OutputFormat};
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};

/// Write all `records` to `out` in `format`, input order preserved.
pub fn write_records<W: Write>(
    out: &mut W,
    records: &[Record],
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Text => {
            for record in records {
                out.write_all(record.to_text().as_bytes())?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)
                .map_err(|e| format!("Error serializing JSON: {e}"))?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Write `records` to the configured destination, truncating a file target.
pub fn write_output(
    records: &[Record],
    output: &Output,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match output {
        Output::Stdout => write_records(&mut std::io::stdout().lock(), records, format),
        Output::File(path) => {
            let file = File::create(path)
                .map_err(|e| format!("Error creating output file {}: {e}", path.display()))?;
            log::info!("Writing {} record(s) to {}", records.len(), path.display());
            write_records(&mut BufWriter::new(file), records, format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::CidrRegexBuilder;

    fn records(inputs: &[&str]) -> Vec<Record> {
        let builder = CidrRegexBuilder::default();
        inputs.iter().map(|c| Record::convert(&builder, c)).collect()
    }

    #[test]
    fn test_write_text_keeps_input_order() {
        let mut buf = Vec::new();
        write_records(
            &mut buf,
            &records(&["192.168.1.0/30", "garbage-text", "10.0.0.5/32"]),
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "192.168.1.0/30:\n(192\\.168\\.1\\.(?:[1-2]))\n\n\
             garbage-text:\nInvalid CIDR: garbage-text\n\n\
             10.0.0.5/32:\n(10\\.0\\.0\\.5)\n\n"
        );
    }

    #[test]
    fn test_write_json() {
        let mut buf = Vec::new();
        write_records(
            &mut buf,
            &records(&["10.0.0.5/32", "nope"]),
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["regex"], r"(10\.0\.0\.5)");
        assert_eq!(value[1]["error"], "Invalid CIDR: nope");
    }

    #[test]
    fn test_write_output_file() {
        let path = std::env::temp_dir().join(format!(
            "cidr_compact_regex_writer_{}.txt",
            std::process::id()
        ));
        write_output(
            &records(&["10.0.0.5/32"]),
            &Output::File(path.clone()),
            OutputFormat::Text,
        )
        .unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(text, "10.0.0.5/32:\n(10\\.0\\.0\\.5)\n\n");
    }
}
