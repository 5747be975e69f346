//! Batch orchestration for generation and formatting
//!
//! Both pipelines take the raw lines a user pasted or loaded, and never fail
//! as a whole: bad lines are collected and reported next to the results.

use std::ops::ControlFlow;

use log::{info, warn};
use rand::Rng;

use crate::core::models::{
    ExtractionFailure, Record, ResultSet, TemplateDefaults, TemplateError, TemplateLine,
};

use super::expander::{DEFAULT_MAX_COMBINATIONS, expand};
use super::extractor::extract;
use super::finalizer::finalize;
use super::mask::{MASK_CHAR, MaskDigits, mask_with};

/// Split pasted text into lines, dropping empty ones
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split(['\r', '\n']).filter(|line| !line.is_empty()).collect()
}

/// Settings for [`generate_batch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Month and year used when a line omits them
    pub defaults: TemplateDefaults,
    /// Per-template combination cap
    pub max_combinations: u64,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            defaults: TemplateDefaults::default(),
            max_combinations: DEFAULT_MAX_COMBINATIONS,
        }
    }
}

/// Progress reported after each template line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProgress {
    /// Lines handled so far
    pub processed: usize,
    /// Lines in the batch
    pub total: usize,
}

/// A template line that could not be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    /// 1-based position among the non-empty input lines
    pub line_number: usize,
    /// The line as given
    pub line: String,
    /// What was wrong with it
    pub error: TemplateError,
}

/// Outcome of a generation batch
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Valid records in shuffled order
    pub records: Vec<Record>,
    /// Records dropped by the final checksum pass
    pub rejected: Vec<Record>,
    /// Lines that were skipped
    pub errors: Vec<LineError>,
    /// Template lines expanded successfully
    pub templates: usize,
    /// Combinations enumerated across all templates
    pub combinations: u64,
    /// Whether the observer stopped the batch early
    pub cancelled: bool,
}

impl GenerationReport {
    /// Number of records emitted
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.records.len()
    }

    /// Number of records dropped for a bad check digit
    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    /// Number of lines that failed to parse or expand
    #[must_use]
    pub fn parse_error_count(&self) -> usize {
        self.errors.len()
    }
}

/// Expand every template line into one shuffled, validated record list
pub fn generate_batch<I, S, R>(lines: I, options: &GenerateOptions, rng: &mut R) -> GenerationReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    generate_batch_with(lines, options, rng, |_| ControlFlow::Continue(()))
}

/// [`generate_batch`] with a progress observer
///
/// The observer runs after each template line. Returning
/// [`ControlFlow::Break`] stops before the next line; records generated so
/// far are still finalized and returned. A single template's expansion is
/// never interrupted.
pub fn generate_batch_with<I, S, R, F>(
    lines: I,
    options: &GenerateOptions,
    rng: &mut R,
    mut observer: F,
) -> GenerationReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Rng + ?Sized,
    F: FnMut(BatchProgress) -> ControlFlow<()>,
{
    let lines: Vec<S> = lines.into_iter().collect();
    let total = lines.len();

    let mut set = ResultSet::new();
    let mut report = GenerationReport::default();

    for (index, raw) in lines.iter().enumerate() {
        let raw = raw.as_ref();
        let outcome = TemplateLine::parse(raw, &options.defaults).and_then(|template| {
            expand(&template, &mut set, options.max_combinations).map_err(TemplateError::from)
        });

        match outcome {
            Ok(stats) => {
                report.templates += 1;
                report.combinations += stats.combinations;
            },
            Err(error) => {
                warn!("line {}: {error}", index + 1);
                report.errors.push(LineError {
                    line_number: index + 1,
                    line: raw.trim().to_string(),
                    error,
                });
            },
        }

        let progress = BatchProgress {
            processed: index + 1,
            total,
        };
        if observer(progress).is_break() {
            report.cancelled = index + 1 < total;
            break;
        }
    }

    let finalized = finalize(set, rng);
    report.records = finalized.records;
    report.rejected = finalized.rejected;

    info!(
        "generated {} record(s) from {} template(s), {} rejected, {} line error(s)",
        report.valid_count(),
        report.templates,
        report.rejected_count(),
        report.parse_error_count()
    );

    report
}

/// Settings for [`format_batch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Trailing identifier digits to hide
    pub mask: MaskDigits,
    /// Character written over hidden digits
    pub mask_char: char,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            mask: MaskDigits::None,
            mask_char: MASK_CHAR,
        }
    }
}

/// Result for one free-text line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    /// Line normalized (and masked, if requested)
    Formatted {
        /// 1-based position among the non-empty input lines
        line_number: usize,
        /// `identifier|MM|YYYY`
        record: String,
    },
    /// Line could not be normalized
    Failed {
        /// 1-based position among the non-empty input lines
        line_number: usize,
        /// The line as given
        line: String,
        /// Why it failed
        failure: ExtractionFailure,
    },
}

/// Outcome of a formatting batch, one entry per input line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatReport {
    /// Per-line outcomes in input order
    pub outcomes: Vec<FormatOutcome>,
}

impl FormatReport {
    /// Normalized records in input order
    pub fn records(&self) -> impl Iterator<Item = &str> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            FormatOutcome::Formatted { record, .. } => Some(record.as_str()),
            FormatOutcome::Failed { .. } => None,
        })
    }

    /// Failed lines in input order
    pub fn failures(&self) -> impl Iterator<Item = (usize, &str, &ExtractionFailure)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            FormatOutcome::Failed {
                line_number,
                line,
                failure,
            } => Some((*line_number, line.as_str(), failure)),
            FormatOutcome::Formatted { .. } => None,
        })
    }

    /// Number of normalized lines
    #[must_use]
    pub fn success_count(&self) -> usize {
        self.records().count()
    }

    /// Number of failed lines
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.outcomes.len() - self.success_count()
    }
}

/// Normalize every free-text line, masking successes uniformly
pub fn format_batch<I, S>(lines: I, options: &FormatOptions) -> FormatReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let outcomes: Vec<FormatOutcome> = lines
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let raw = raw.as_ref();
            match extract(raw) {
                Ok(normalized) => FormatOutcome::Formatted {
                    line_number: index + 1,
                    record: mask_with(
                        &normalized.to_string(),
                        options.mask.count(),
                        options.mask_char,
                    ),
                },
                Err(failure) => FormatOutcome::Failed {
                    line_number: index + 1,
                    line: raw.to_string(),
                    failure,
                },
            }
        })
        .collect();

    let report = FormatReport { outcomes };
    info!(
        "formatted {} line(s), {} failed",
        report.success_count(),
        report.failure_count()
    );
    report
}
