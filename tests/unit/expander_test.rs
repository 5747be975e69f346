//! Tests for combinatorial expansion and finalization

use std::collections::HashSet;

use luhnkit::core::models::{ExpandError, Record, ResultSet};
use luhnkit::core::services::{expand, finalize, is_valid, target_length};
use test_case::test_case;

use crate::common::{expand_one, seeded_rng, template};

#[test_case("4111", 16 ; "visa prefix")]
#[test_case("5555", 16 ; "mastercard prefix")]
#[test_case("34", 15 ; "amex thirty four")]
#[test_case("37", 15 ; "amex thirty seven")]
#[test_case("30", 14 ; "diners thirty")]
#[test_case("36", 14 ; "diners thirty six")]
#[test_case("38", 14 ; "diners thirty eight")]
#[test_case("3", 15 ; "lone three")]
#[test_case("", 16 ; "empty")]
fn test_target_length(prefix: &str, expected: usize) {
    assert_eq!(target_length(prefix), expected);
}

#[test]
fn test_one_short_gets_check_digit_appended() {
    let set = expand_one("411111111111xxx|03|2027|");
    assert_eq!(set.len(), 1000);
    for record in &set {
        assert_eq!(record.identifier().len(), 16);
        assert!(record.identifier().starts_with("411111111111"));
        assert!(is_valid(record.identifier()));
        assert_eq!(record.month(), "03");
        assert_eq!(record.year(), "2027");
    }
    assert!(set.contains(&Record::new("4111111111111111", "03", "2027")));
}

#[test]
fn test_exact_length_replaces_last_digit() {
    let mut set = ResultSet::new();
    let stats = expand(&template("41111111111111xx"), &mut set, 1_000).unwrap();

    // The last wildcard is overwritten, so only the first one varies the output.
    assert_eq!(stats.combinations, 100);
    assert_eq!(stats.produced, 100);
    assert_eq!(stats.inserted, 10);
    assert_eq!(set.len(), 10);
    assert!(set.iter().all(|r| is_valid(r.identifier())));
}

#[test]
fn test_fifteen_digit_family() {
    let set = expand_one("3782822463100x");
    assert_eq!(set.len(), 10);
    assert!(set.iter().all(|r| r.identifier().len() == 15));
    assert!(set.contains(&Record::new("378282246310005", "01", "2028")));
}

#[test]
fn test_fourteen_digit_family() {
    let set = expand_one("305693090259x");
    assert_eq!(set.len(), 10);
    assert!(set.iter().all(|r| r.identifier().len() == 14));
    assert!(set.contains(&Record::new("30569309025904", "01", "2028")));
}

#[test]
fn test_undefined_length_produces_nothing() {
    let mut set = ResultSet::new();
    let stats = expand(&template("1234xx"), &mut set, 1_000).unwrap();
    assert!(set.is_empty());
    assert_eq!(stats.combinations, 100);
    assert_eq!(stats.produced, 0);
    assert_eq!(stats.skipped, 100);
}

#[test]
fn test_every_assignment_is_enumerated() {
    let set = expand_one("4xx1111111xx111");
    assert_eq!(set.len(), 10_000);

    let middles: HashSet<(String, String)> = set
        .iter()
        .map(|r| (r.identifier()[1..3].to_string(), r.identifier()[10..12].to_string()))
        .collect();
    assert_eq!(middles.len(), 10_000);
}

#[test]
fn test_over_cap_is_refused_untouched() {
    let mut set = ResultSet::new();
    let err = expand(&template("4xxxxxxxxxxxxxx"), &mut set, 10_000_000).unwrap_err();
    assert_eq!(
        err,
        ExpandError::TooLarge {
            combinations: 100_000_000_000_000,
            cap: 10_000_000,
        }
    );
    assert!(set.is_empty());
}

#[test]
fn test_cap_is_inclusive() {
    let mut set = ResultSet::new();
    assert!(expand(&template("411111111111xxx"), &mut set, 1_000).is_ok());
    assert!(expand(&template("411111111112xxx"), &mut set, 999).is_err());
}

#[test]
fn test_repeated_template_adds_nothing() {
    let mut set = ResultSet::new();
    let line = template("411111111111xxx|03|2027|");
    expand(&line, &mut set, 1_000).unwrap();
    let stats = expand(&line, &mut set, 1_000).unwrap();
    assert_eq!(stats.produced, 1000);
    assert_eq!(stats.inserted, 0);
    assert_eq!(set.len(), 1000);
}

#[test]
fn test_same_identifier_different_date_is_distinct() {
    let mut set = ResultSet::new();
    expand(&template("411111111111xxx|03|2027|"), &mut set, 1_000).unwrap();
    expand(&template("411111111111xxx|04|2027|"), &mut set, 1_000).unwrap();
    assert_eq!(set.len(), 2000);
}

#[test]
fn test_finalize_is_a_permutation() {
    let set = expand_one("411111111111xxx|03|2027|");
    let before: Vec<Record> = set.iter().cloned().collect();

    let finalized = finalize(set, &mut seeded_rng());
    assert!(finalized.rejected.is_empty());

    let mut after = finalized.records;
    assert_eq!(after.len(), before.len());
    let mut sorted_before = before;
    sorted_before.sort();
    after.sort();
    assert_eq!(after, sorted_before);
}

#[test]
fn test_finalize_drops_bad_check_digits() {
    let set: ResultSet = [
        Record::new("4111111111111111", "01", "2028"),
        Record::new("4111111111111112", "01", "2028"),
    ]
    .into_iter()
    .collect();

    let finalized = finalize(set, &mut seeded_rng());
    assert_eq!(finalized.records, [Record::new("4111111111111111", "01", "2028")]);
    assert_eq!(finalized.rejected, [Record::new("4111111111111112", "01", "2028")]);
}

#[test]
fn test_record_display() {
    let record = Record::new("4111111111111111", "03", "2027");
    assert_eq!(record.to_string(), "4111111111111111|03|2027|000");
}
