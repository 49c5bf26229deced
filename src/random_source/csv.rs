//! One-column CSV of wheel outcomes with a `random_number` header.

use crate::constants::CSV_HEADER;
use crate::error::{Result, SimError};
use crate::wheel::{to_outcome, Outcome};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn write_numbers_csv(path: &Path, numbers: &[Outcome]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{}", CSV_HEADER)?;
    for n in numbers {
        writeln!(writer, "{}", n)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a file written by [`write_numbers_csv`]. Blank lines are skipped.
pub fn read_numbers_csv(path: &Path) -> Result<Vec<Outcome>> {
    let contents = fs::read_to_string(path)?;
    let mut lines = contents.lines();

    match lines.next().map(str::trim) {
        Some(CSV_HEADER) => {}
        other => {
            return Err(SimError::Malformed(format!(
                "expected header {:?}, found {:?}",
                CSV_HEADER, other
            )))
        }
    }

    let mut numbers = Vec::new();
    for (idx, line) in lines.enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let n: i64 = line.parse().map_err(|_| {
            SimError::Malformed(format!("line {}: not an integer: {:?}", idx + 2, line))
        })?;
        numbers.push(to_outcome(n)?);
    }
    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("random_numbers.csv");
        let numbers: Vec<Outcome> = vec![0, 36, 17, 1];

        write_numbers_csv(&path, &numbers).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("random_number\n0\n36\n"));

        assert_eq!(read_numbers_csv(&path).unwrap(), numbers);
    }

    #[test]
    fn test_missing_header_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "1\n2\n").unwrap();
        assert!(matches!(
            read_numbers_csv(&path),
            Err(SimError::Malformed(_))
        ));
    }

    #[test]
    fn test_out_of_range_value_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "random_number\n5\n40\n").unwrap();
        assert!(matches!(
            read_numbers_csv(&path),
            Err(SimError::InvalidOutcome(40))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_numbers_csv(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, SimError::Io(_)));
    }
}
