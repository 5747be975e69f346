//! Wildcard run discovery

use crate::core::models::WildcardRun;

/// Whether `c` is a placeholder (`x` or `X`)
#[must_use]
pub const fn is_wildcard(c: char) -> bool {
    matches!(c, 'x' | 'X')
}

/// Find every maximal run of wildcards in `template`, left to right
///
/// Other characters are skipped. An empty result means the template has
/// nothing to expand; rejecting that is up to the caller.
#[must_use]
pub fn find_wildcard_runs(template: &str) -> Vec<WildcardRun> {
    let mut runs = Vec::new();
    let mut current: Option<WildcardRun> = None;

    for (pos, c) in template.char_indices() {
        if is_wildcard(c) {
            match current.as_mut() {
                Some(run) => run.length += 1,
                None => current = Some(WildcardRun::new(pos, 1)),
            }
        } else if let Some(run) = current.take() {
            runs.push(run);
        }
    }
    runs.extend(current);

    runs
}
