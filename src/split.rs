use std::path::PathBuf;

use rand::Rng;

use crate::dataset::{read_lines, write_lines};
use crate::PrepError;

// ---------------------------------------------------------------------------
// Random partition without replacement
// ---------------------------------------------------------------------------

/// Result of partitioning a dataset: both halves carry the header as their
/// first line.
#[derive(Debug)]
pub struct Partition {
    /// Header plus the sampled rows, in draw order.
    pub test: Vec<String>,
    /// Header plus the surviving rows, in original relative order.
    pub training: Vec<String>,
    /// Number of data rows moved into the test set.
    pub nsample: usize,
}

/// Partition `lines` (header at index 0) into test and training sets by
/// uniform sampling without replacement.
///
/// The sample size is `floor(lines.len() * ratio)` — the total line count
/// includes the header — clamped to the number of data rows so `ratio = 1.0`
/// terminates cleanly. Each draw picks a random index in the remaining pool
/// (never index 0) and removes exactly that index, so duplicate rows keep
/// their multiplicity across the two halves.
pub fn partition<R: Rng>(
    lines: Vec<String>,
    ratio: f64,
    rng: &mut R,
) -> Result<Partition, PrepError> {
    if !(0.0..=1.0).contains(&ratio) || ratio.is_nan() {
        return Err(PrepError::RatioOutOfRange(ratio));
    }

    let mut pool = lines;
    let nsample = (pool.len() as f64 * ratio).floor() as usize;
    let nsample = nsample.min(pool.len() - 1);

    let mut test = Vec::with_capacity(nsample + 1);
    test.push(pool[0].clone());
    for _ in 0..nsample {
        let idx = rng.gen_range(1..pool.len());
        test.push(pool.remove(idx));
    }

    Ok(Partition {
        test,
        training: pool,
        nsample,
    })
}

/// Full split pipeline: read `<basename>.csv`, partition by `ratio`, write
/// `<basename>-test.csv` and `<basename>-training.csv`. Returns the number
/// of sampled rows.
pub fn run<R: Rng>(basename: &str, ratio: f64, rng: &mut R) -> Result<usize, PrepError> {
    let lines = read_lines(basename)?;
    let part = partition(lines, ratio, rng)?;

    write_lines(&PathBuf::from(format!("{basename}-test.csv")), &part.test)?;
    write_lines(
        &PathBuf::from(format!("{basename}-training.csv")),
        &part.training,
    )?;

    log::info!(
        "sampled {} of {} data rows into the test set",
        part.nsample,
        part.nsample + part.training.len() - 1
    );
    Ok(part.nsample)
}
