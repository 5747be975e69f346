//! Tests for the generation and formatting pipelines

use std::ops::ControlFlow;

use luhnkit::core::models::{ExpandError, FailureKind, TemplateError};
use luhnkit::core::services::{
    FormatOptions, GenerateOptions, MaskDigits, format_batch, generate_batch, generate_batch_with,
    is_valid, split_lines,
};

use crate::common::seeded_rng;

// =============================================================================
// split_lines
// =============================================================================

#[test]
fn test_split_lines_drops_empty() {
    assert_eq!(split_lines("a\r\nb\n\n\nc\r"), ["a", "b", "c"]);
    assert!(split_lines("").is_empty());
}

#[test]
fn test_split_lines_keeps_whitespace_lines() {
    assert_eq!(split_lines("a\n  \nb"), ["a", "  ", "b"]);
}

// =============================================================================
// generate_batch
// =============================================================================

#[test]
fn test_generate_collects_records_and_errors() {
    let lines = ["411111111111xxx|03|2027|", "  ", "bad", "4111xxx|13|2027|"];
    let report = generate_batch(lines, &GenerateOptions::default(), &mut seeded_rng());

    assert_eq!(report.valid_count(), 1000);
    assert_eq!(report.rejected_count(), 0);
    assert_eq!(report.parse_error_count(), 3);
    assert_eq!(report.templates, 1);
    assert_eq!(report.combinations, 1000);
    assert!(!report.cancelled);

    let numbers: Vec<usize> = report.errors.iter().map(|e| e.line_number).collect();
    assert_eq!(numbers, [2, 3, 4]);
    assert_eq!(report.errors[0].error, TemplateError::EmptyLine);
    assert_eq!(report.errors[1].error, TemplateError::InvalidCharacter { ch: 'b' });
    assert_eq!(report.errors[2].line, "4111xxx|13|2027|");
}

#[test]
fn test_generate_records_are_valid() {
    let report = generate_batch(
        ["411111111111xxx|03|2027|", "5555555555554xx|11|2030|"],
        &GenerateOptions::default(),
        &mut seeded_rng(),
    );
    assert_eq!(report.valid_count(), 1100);
    assert!(report.records.iter().all(|r| is_valid(r.identifier())));
}

#[test]
fn test_generate_deduplicates_across_lines() {
    let report = generate_batch(
        ["411111111111xxx|03|2027|", "4111111111111xx|03|2027|"],
        &GenerateOptions::default(),
        &mut seeded_rng(),
    );
    // The second template is a subset of the first
    assert_eq!(report.valid_count(), 1000);
    assert_eq!(report.combinations, 1100);
}

#[test]
fn test_generate_same_seed_same_order() {
    let lines = ["411111111111xxx|03|2027|"];
    let first = generate_batch(lines, &GenerateOptions::default(), &mut seeded_rng());
    let second = generate_batch(lines, &GenerateOptions::default(), &mut seeded_rng());
    assert_eq!(first.records, second.records);
}

#[test]
fn test_generate_respects_cap() {
    let options = GenerateOptions {
        max_combinations: 100,
        ..GenerateOptions::default()
    };
    let report = generate_batch(["411111111111xxx", "4111111111111xx"], &options, &mut seeded_rng());

    assert_eq!(report.valid_count(), 100);
    assert_eq!(report.parse_error_count(), 1);
    assert_eq!(
        report.errors[0].error,
        TemplateError::Expand(ExpandError::TooLarge {
            combinations: 1000,
            cap: 100,
        })
    );
}

#[test]
fn test_generate_observer_can_cancel() {
    let lines = ["411111111111xxx|03|2027|", "411111111112xxx|03|2027|", "bad"];
    let mut seen = Vec::new();
    let report = generate_batch_with(lines, &GenerateOptions::default(), &mut seeded_rng(), |p| {
        seen.push((p.processed, p.total));
        ControlFlow::Break(())
    });

    assert_eq!(seen, [(1, 3)]);
    assert!(report.cancelled);
    assert_eq!(report.templates, 1);
    assert_eq!(report.valid_count(), 1000);
}

#[test]
fn test_generate_break_on_last_line_is_not_cancelled() {
    let report = generate_batch_with(
        ["411111111111xxx"],
        &GenerateOptions::default(),
        &mut seeded_rng(),
        |_| ControlFlow::Break(()),
    );
    assert!(!report.cancelled);
}

#[test]
fn test_generate_empty_input() {
    let report = generate_batch(Vec::<String>::new(), &GenerateOptions::default(), &mut seeded_rng());
    assert_eq!(report.valid_count(), 0);
    assert_eq!(report.parse_error_count(), 0);
}

// =============================================================================
// format_batch
// =============================================================================

#[test]
fn test_format_masks_successes() {
    let options = FormatOptions {
        mask: MaskDigits::Four,
        ..FormatOptions::default()
    };
    let report = format_batch(["4111111111111111 12/26 123", "nope", "5555555555554444 1/29"], &options);

    let records: Vec<&str> = report.records().collect();
    assert_eq!(records, ["411111111111xxxx|12|2026", "555555555555xxxx|01|2029"]);
    assert_eq!(report.success_count(), 2);
    assert_eq!(report.failure_count(), 1);

    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    let (line_number, line, failure) = failures[0];
    assert_eq!(line_number, 2);
    assert_eq!(line, "nope");
    assert_eq!(failure.kind(), FailureKind::TooShort);
}

#[test]
fn test_format_unmasked_by_default() {
    let report = format_batch(["4111111111111111 12/26"], &FormatOptions::default());
    assert_eq!(report.records().collect::<Vec<_>>(), ["4111111111111111|12|2026"]);
}
