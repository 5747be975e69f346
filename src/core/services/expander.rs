//! Combinatorial expansion of template lines into records
//!
//! Every assignment of digits to the wildcard runs is enumerated. Index `i`
//! is split across runs in discovery order: the leftmost run takes the
//! least-significant `10^len` slice of `i`, the next run the slice above it,
//! and so on.

use log::debug;

use crate::core::models::{ExpandError, Record, ResultSet, TemplateLine};

use super::checksum::check_digit_ascii;

/// Per-template cap applied when the caller doesn't configure one
pub const DEFAULT_MAX_COMBINATIONS: u64 = 10_000_000;

/// Counters from one call to [`expand`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpansionStats {
    /// Candidates enumerated
    pub combinations: u64,
    /// Records built (before deduplication)
    pub produced: u64,
    /// Records that were new to the result set
    pub inserted: u64,
    /// Candidates dropped because their length fit no rule
    pub skipped: u64,
}

/// Required identifier length for a digit string, decided by its prefix
///
/// `30`, `36` and `38` give 14; any other leading `3` gives 15; everything
/// else 16.
#[must_use]
pub fn target_length(digits: &str) -> usize {
    target_length_ascii(digits.as_bytes())
}

fn target_length_ascii(digits: &[u8]) -> usize {
    match digits {
        [b'3', b'0' | b'6' | b'8', ..] => 14,
        [b'3', ..] => 15,
        _ => 16,
    }
}

/// Build the identifier for a fully substituted candidate
///
/// One short of the target length gets a check digit appended. Exactly the
/// target length has its last digit replaced by the computed one. Any other
/// length yields nothing.
fn complete_identifier(candidate: &[u8]) -> Option<String> {
    let target = target_length_ascii(candidate);
    let body = if candidate.len() + 1 == target {
        candidate
    } else if candidate.len() == target {
        &candidate[..target - 1]
    } else {
        return None;
    };

    let mut identifier = String::with_capacity(target);
    identifier.extend(body.iter().map(|&b| char::from(b)));
    identifier.push(char::from(b'0' + check_digit_ascii(body)));
    Some(identifier)
}

/// Expand every combination of `template` into `set`
///
/// Refuses templates whose combination count exceeds `max_combinations`.
/// Under the cap, the loop runs to completion with no yield points.
pub fn expand(
    template: &TemplateLine,
    set: &mut ResultSet,
    max_combinations: u64,
) -> Result<ExpansionStats, ExpandError> {
    let total = template.combinations();
    if total > max_combinations {
        return Err(ExpandError::TooLarge {
            combinations: total,
            cap: max_combinations,
        });
    }

    // Each run fits in u64 because the product does.
    let moduli: Vec<u64> = template.runs().iter().filter_map(|run| run.combinations()).collect();

    let mut stats = ExpansionStats {
        combinations: total,
        ..ExpansionStats::default()
    };
    let mut candidate = template.pattern().as_bytes().to_vec();

    for index in 0..total {
        let mut remaining = index;
        for (run, modulus) in template.runs().iter().zip(&moduli) {
            let mut value = remaining % modulus;
            remaining /= modulus;
            for slot in candidate[run.position..run.end()].iter_mut().rev() {
                // value % 10 is a single digit
                #[allow(clippy::cast_possible_truncation)]
                let digit = (value % 10) as u8;
                *slot = b'0' + digit;
                value /= 10;
            }
        }

        match complete_identifier(&candidate) {
            Some(identifier) => {
                stats.produced += 1;
                let record = Record::new(identifier, template.month(), template.year());
                if set.insert(record) {
                    stats.inserted += 1;
                }
            },
            None => stats.skipped += 1,
        }
    }

    debug!(
        "expanded {}: {} combinations, {} new records, {} skipped by length",
        template.pattern(),
        stats.combinations,
        stats.inserted,
        stats.skipped
    );

    Ok(stats)
}
