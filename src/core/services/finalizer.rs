//! Result finalization: shuffle and re-validate

use log::warn;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::models::{Record, ResultSet};

use super::checksum::is_valid;

/// Records split by the final checksum pass
#[derive(Debug, Clone, Default)]
pub struct Finalized {
    /// Records that passed validation, in shuffled order
    pub records: Vec<Record>,
    /// Records dropped for a bad check digit
    pub rejected: Vec<Record>,
}

/// Shuffle `set` and drop any record whose identifier fails the checksum
///
/// The shuffle is an unbiased Fisher-Yates driven by `rng`; pass a seeded
/// generator for reproducible output.
pub fn finalize<R: Rng + ?Sized>(set: ResultSet, rng: &mut R) -> Finalized {
    let mut records = set.into_vec();
    records.shuffle(rng);

    let (records, rejected): (Vec<Record>, Vec<Record>) =
        records.into_iter().partition(|record| is_valid(record.identifier()));

    if !rejected.is_empty() {
        warn!("dropped {} record(s) with an invalid check digit", rejected.len());
    }

    Finalized { records, rejected }
}
