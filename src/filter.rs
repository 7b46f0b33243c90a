use std::path::PathBuf;

use crate::dataset::{find_column, read_lines, split_fields, write_lines};
use crate::PrepError;

// ---------------------------------------------------------------------------
// Row predicate scan
// ---------------------------------------------------------------------------

/// Keep the header plus every data row whose integer value in `field`
/// equals `target`.
///
/// Returns the surviving lines (header first) and the number of matching
/// data rows. A data row passes when the cell at the resolved column
/// parses as an integer equal to `target`; a cell that does not parse is
/// fatal for the whole run.
pub fn filter_rows(
    lines: &[String],
    field: &str,
    target: i64,
) -> Result<(Vec<String>, usize), PrepError> {
    let header = &lines[0];
    let pos = find_column(header, field)
        .ok_or_else(|| PrepError::FieldNotFound(field.to_string()))?;
    log::debug!("field '{field}' resolved to column {pos}");

    let mut kept = Vec::with_capacity(lines.len());
    kept.push(header.clone());
    let mut matches = 0;

    for (row, line) in lines.iter().enumerate().skip(1) {
        let fields = split_fields(line);
        // A short row yields an empty cell here, which fails the parse below.
        let cell = fields.get(pos).copied().unwrap_or("");
        let value: i64 = cell.parse().map_err(|_| PrepError::BadCell {
            row,
            field: field.to_string(),
            cell: cell.to_string(),
        })?;
        if value == target {
            kept.push(line.clone());
            matches += 1;
        }
    }

    Ok((kept, matches))
}

/// Full filter pipeline: read `<basename>.csv`, keep matching rows, write
/// `<basename>-<field>-<target>.csv`. Returns the match count.
///
/// The output is accumulated in memory and written in one pass after the
/// scan succeeds, so a failed run leaves no partial file behind and a
/// missing field writes nothing at all.
pub fn run(basename: &str, field: &str, target: i64) -> Result<usize, PrepError> {
    let lines = read_lines(basename)?;
    let (kept, matches) = filter_rows(&lines, field, target)?;

    let out = PathBuf::from(format!("{basename}-{field}-{target}.csv"));
    write_lines(&out, &kept)?;

    log::info!("wrote {matches} matching rows to '{}'", out.display());
    Ok(matches)
}
