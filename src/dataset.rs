use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::PrepError;

// ---------------------------------------------------------------------------
// Line-oriented CSV model
// ---------------------------------------------------------------------------
//
// Datasets are handled as plain text lines: line 0 is the header, lines 1..N
// are data rows. Rows are never reshaped or re-quoted; output lines are the
// input lines verbatim. Field splitting is on the literal `,` only — no
// quoting, escaping, or embedded-comma support.

/// Read `<basename>.csv` fully into memory, one entry per line with the
/// line terminator stripped.
pub fn read_lines(basename: &str) -> Result<Vec<String>, PrepError> {
    let path = PathBuf::from(format!("{basename}.csv"));
    let text = fs::read_to_string(&path)
        .with_context(|| format!("reading '{}'", path.display()))?;

    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    if lines.is_empty() {
        return Err(PrepError::EmptyInput { path });
    }

    log::debug!("read {} lines from '{}'", lines.len(), path.display());
    Ok(lines)
}

/// Split a line on the literal `,`.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(',').collect()
}

/// Resolve a field name to its zero-based column index by exact string
/// match against the header fields. `None` means the field does not exist.
pub fn find_column(header: &str, field: &str) -> Option<usize> {
    header.split(',').position(|f| f == field)
}

/// Write lines to `path`, creating or overwriting the file. Each line gets
/// a trailing newline appended.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<(), PrepError> {
    let file = File::create(path)
        .with_context(|| format!("creating '{}'", path.display()))?;
    let mut writer = BufWriter::new(file);

    for line in lines {
        writeln!(writer, "{line}")
            .with_context(|| format!("writing to '{}'", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flushing '{}'", path.display()))?;

    log::debug!("wrote {} lines to '{}'", lines.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_column_resolves_by_exact_match() {
        let header = "kernel,device,cycles";
        assert_eq!(find_column(header, "kernel"), Some(0));
        assert_eq!(find_column(header, "device"), Some(1));
        assert_eq!(find_column(header, "cycles"), Some(2));
    }

    #[test]
    fn find_column_last_field_has_no_trailing_garbage() {
        // Lines are read with terminators stripped, so the final header
        // field matches its bare name.
        assert_eq!(find_column("a,b,c", "c"), Some(2));
    }

    #[test]
    fn find_column_missing_field_is_none() {
        assert_eq!(find_column("a,b,c", "d"), None);
        assert_eq!(find_column("a,b,c", "cy"), None);
    }

    #[test]
    fn split_fields_is_literal_comma_only() {
        assert_eq!(split_fields("a,\"b,c\",d"), vec!["a", "\"b", "c\"", "d"]);
        assert_eq!(split_fields(""), vec![""]);
    }

    #[test]
    fn read_write_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let basename = dir.path().join("fixture");
        let basename = basename.to_str().unwrap();

        let lines = vec!["a,b".to_string(), "1,2".to_string(), "3,4".to_string()];
        write_lines(&PathBuf::from(format!("{basename}.csv")), &lines).unwrap();

        assert_eq!(read_lines(basename).unwrap(), lines);
    }

    #[test]
    fn read_lines_empty_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let basename = dir.path().join("empty");
        let basename = basename.to_str().unwrap();
        fs::write(format!("{basename}.csv"), "").unwrap();

        assert!(matches!(
            read_lines(basename),
            Err(PrepError::EmptyInput { .. })
        ));
    }

    #[test]
    fn read_lines_missing_file_is_an_error() {
        assert!(matches!(
            read_lines("/nonexistent/fixture"),
            Err(PrepError::Io(_))
        ));
    }
}
