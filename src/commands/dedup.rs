//! Deduplicate a line list against an exclusion list and split the rest

use std::fs;
use std::path::Path;

use anyhow::Context;

use luhnkit::core::services::{split_into, split_lines, subtract_lines};
use luhnkit::output::{DedupResult, OutputMode, PartInfo};
use luhnkit::paths;

use super::io::{read_input, write_lines};

/// Remove duplicates and excluded lines from `input`
///
/// With `out_dir`, the remaining lines are written to `part_1.txt` ..
/// `part_N.txt` there; otherwise they go to stdout and `split` is ignored.
pub fn dedup(
    input: &Path,
    exclude: Option<&Path>,
    split: usize,
    out_dir: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let primary_text = read_input(Some(input))?;
    let primary = split_lines(&primary_text);
    let input_lines = primary.len();

    let exclude_text = match exclude {
        Some(path) => read_input(Some(path))?,
        None => String::new(),
    };

    let kept = subtract_lines(primary, split_lines(&exclude_text));
    let remaining = kept.len();

    let result = match out_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;

            let mut files = Vec::new();
            for (k, chunk) in split_into(kept, split).into_iter().enumerate() {
                let path = paths::part_file(dir, k + 1);
                write_lines(&path, &chunk)?;
                files.push(PartInfo {
                    path: path.display().to_string(),
                    lines: chunk.len(),
                });
            }

            DedupResult {
                input_lines,
                remaining,
                lines: Vec::new(),
                files,
            }
        },
        None => DedupResult {
            input_lines,
            remaining,
            lines: kept,
            files: Vec::new(),
        },
    };

    result.render(mode);
    Ok(())
}
