//! Normalize free-text lines into `identifier|MM|YYYY` records

use std::path::Path;

use luhnkit::core::services::{FormatOptions, format_batch, split_lines};
use luhnkit::output::{FailureInfo, FormatResult, OutputMode};

use super::io::{read_input, write_lines};

/// Format a free-text file (or stdin)
pub fn format(
    input: Option<&Path>,
    output: Option<&Path>,
    options: &FormatOptions,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let text = read_input(input)?;
    let report = format_batch(split_lines(&text), options);

    let records: Vec<String> = report.records().map(ToString::to_string).collect();
    if let Some(path) = output {
        write_lines(path, &records)?;
    }

    let failures = report
        .failures()
        .map(|(line_number, line, failure)| FailureInfo {
            line_number,
            line: line.to_string(),
            kind: failure.kind(),
            reason: failure.to_string(),
        })
        .collect();

    let result = FormatResult {
        formatted: records.len(),
        records: if output.is_some() { Vec::new() } else { records },
        output: output.map(|p| p.display().to_string()),
        failures,
    };
    result.render(mode);
    Ok(())
}
