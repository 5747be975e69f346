//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. In human mode, records go
//! to stdout and summaries to stderr so the records can be piped.

use serde::Serialize;

use crate::core::models::FailureKind;

/// How many parse errors the human summary lists before truncating
pub const SAMPLE_ERRORS: usize = 5;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a generate operation
#[derive(Debug, Serialize)]
pub struct GenerateResult {
    /// Generated records; empty when written to a file
    pub records: Vec<String>,
    /// File the records were written to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Records emitted
    pub valid: usize,
    /// Records dropped by the checksum pass
    pub rejected: usize,
    /// Template lines that could not be used
    pub parse_errors: usize,
    /// Details for each unusable line
    pub errors: Vec<LineErrorInfo>,
}

/// A template line that was skipped
#[derive(Debug, Serialize)]
pub struct LineErrorInfo {
    /// 1-based line number
    pub line_number: usize,
    /// The line as given
    pub line: String,
    /// Human-readable reason
    pub message: String,
}

/// Result of a format operation
#[derive(Debug, Serialize)]
pub struct FormatResult {
    /// Normalized records; empty when written to a file
    pub records: Vec<String>,
    /// File the records were written to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Lines normalized
    pub formatted: usize,
    /// Lines that failed
    pub failures: Vec<FailureInfo>,
}

/// A free-text line that could not be normalized
#[derive(Debug, Serialize)]
pub struct FailureInfo {
    /// 1-based line number
    pub line_number: usize,
    /// The line as given
    pub line: String,
    /// Failure category
    pub kind: FailureKind,
    /// Human-readable reason
    pub reason: String,
}

/// Result of a dedup operation
#[derive(Debug, Serialize)]
pub struct DedupResult {
    /// Lines in the primary input
    pub input_lines: usize,
    /// Unique lines left after exclusion
    pub remaining: usize,
    /// Remaining lines; empty when written to files
    pub lines: Vec<String>,
    /// Chunk files written
    pub files: Vec<PartInfo>,
}

/// One chunk file written by dedup
#[derive(Debug, Serialize)]
pub struct PartInfo {
    /// File path
    pub path: String,
    /// Lines in the file
    pub lines: usize,
}

/// Result of a validate operation
#[derive(Debug, Serialize)]
pub struct ValidateResult {
    /// Whether every number passed
    pub all_valid: bool,
    /// Per-number verdicts
    pub numbers: Vec<Validation>,
}

/// Checksum verdict for one number
#[derive(Debug, Serialize)]
pub struct Validation {
    /// The number as given
    pub number: String,
    /// Whether its check digit matches
    pub valid: bool,
}

impl GenerateResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        for record in &self.records {
            println!("{record}");
        }

        if let Some(path) = &self.output {
            eprintln!("Wrote {} record(s) to {path}", self.valid);
        }
        eprintln!("Done.");
        eprintln!("  Valid:           {}", self.valid);
        eprintln!("  Checksum reject: {}", self.rejected);
        eprintln!("  Line errors:     {}", self.parse_errors);

        if !self.errors.is_empty() {
            eprintln!("\nLine errors (first {}):", SAMPLE_ERRORS.min(self.errors.len()));
            for e in self.errors.iter().take(SAMPLE_ERRORS) {
                eprintln!("  - line {}: '{}' - {}", e.line_number, e.line, e.message);
            }
        }
    }
}

impl FormatResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        for record in &self.records {
            println!("{record}");
        }

        if let Some(path) = &self.output {
            eprintln!("Wrote {} record(s) to {path}", self.formatted);
        }
        eprintln!("Formatted: {}", self.formatted);

        if !self.failures.is_empty() {
            eprintln!("Failed {} line(s):", self.failures.len());
            for f in &self.failures {
                eprintln!("  - line {}: '{}' - {}", f.line_number, f.line, f.reason);
            }
        }
    }
}

impl DedupResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        for line in &self.lines {
            println!("{line}");
        }

        for part in &self.files {
            eprintln!("Wrote {} line(s) to {}", part.lines, part.path);
        }
        eprintln!("Done: {} line(s) remaining of {}", self.remaining, self.input_lines);
    }
}

impl ValidateResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for v in &self.numbers {
                    println!("{} {}", v.number, if v.valid { "valid" } else { "invalid" });
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
