//! Line list deduplication and splitting

use std::collections::HashSet;

/// Unique lines of `primary` in first-seen order, minus anything in `exclude`
#[must_use]
pub fn subtract_lines<P, E>(primary: P, exclude: E) -> Vec<String>
where
    P: IntoIterator,
    P::Item: AsRef<str>,
    E: IntoIterator,
    E::Item: AsRef<str>,
{
    let mut seen: HashSet<String> = exclude.into_iter().map(|l| l.as_ref().to_string()).collect();
    let mut kept = Vec::new();
    for line in primary {
        let line = line.as_ref();
        if seen.insert(line.to_string()) {
            kept.push(line.to_string());
        }
    }
    kept
}

/// Split `lines` into `parts` contiguous chunks whose sizes differ by at most one
///
/// Zero parts counts as one; there are never more chunks than lines, and
/// never fewer than one.
#[must_use]
pub fn split_into(lines: Vec<String>, parts: usize) -> Vec<Vec<String>> {
    let parts = parts.clamp(1, lines.len().max(1));
    let base = lines.len() / parts;
    let extra = lines.len() % parts;

    let mut chunks = Vec::with_capacity(parts);
    let mut iter = lines.into_iter();
    for k in 0..parts {
        let size = base + usize::from(k < extra);
        chunks.push(iter.by_ref().take(size).collect());
    }
    chunks
}
