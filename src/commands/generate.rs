//! Expand template lines into checksum-valid records

use std::ops::ControlFlow;
use std::path::Path;

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use luhnkit::core::services::{
    BatchProgress, GenerateOptions, GenerationReport, generate_batch_with, split_lines,
};
use luhnkit::output::{GenerateResult, LineErrorInfo, OutputMode};

use super::io::{read_input, write_lines};

/// Generate records from a template file (or stdin)
pub fn generate(
    input: Option<&Path>,
    output: Option<&Path>,
    seed: Option<u64>,
    options: &GenerateOptions,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let text = read_input(input)?;
    let lines = split_lines(&text);

    let progress = |p: BatchProgress| {
        debug!("template {}/{}", p.processed, p.total);
        ControlFlow::Continue(())
    };

    // A fixed seed makes the shuffled order reproducible
    let report = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_batch_with(lines, options, &mut rng, progress)
        },
        None => generate_batch_with(lines, options, &mut rand::rng(), progress),
    };

    let records: Vec<String> = report.records.iter().map(ToString::to_string).collect();
    if let Some(path) = output {
        write_lines(path, &records)?;
    }

    let result = build_result(&report, records, output);
    result.render(mode);
    Ok(())
}

fn build_result(report: &GenerationReport, records: Vec<String>, output: Option<&Path>) -> GenerateResult {
    let errors = report
        .errors
        .iter()
        .map(|e| LineErrorInfo {
            line_number: e.line_number,
            line: e.line.clone(),
            message: e.error.to_string(),
        })
        .collect();

    GenerateResult {
        records: if output.is_some() { Vec::new() } else { records },
        output: output.map(|p| p.display().to_string()),
        valid: report.valid_count(),
        rejected: report.rejected_count(),
        parse_errors: report.parse_error_count(),
        errors,
    }
}
