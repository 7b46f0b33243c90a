pub mod dataset;
pub mod filter;
pub mod split;

use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Everything that can fail during a preprocessing run.
///
/// The binaries map variants to exit codes: field-not-found is `2`
/// (checked before any output file is created), all other failures are `3`.
/// Wrong argument counts never reach the library; the binaries report those
/// themselves with exit code `1`.
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("can't find field '{0}' in header")]
    FieldNotFound(String),

    #[error("row {row}, field '{field}': '{cell}' is not an integer")]
    BadCell {
        row: usize,
        field: String,
        cell: String,
    },

    #[error("ratio must be within [0, 1], got {0}")]
    RatioOutOfRange(f64),

    #[error("'{path}' is empty: expected at least a header row")]
    EmptyInput { path: PathBuf },

    #[error(transparent)]
    Io(#[from] anyhow::Error),
}
