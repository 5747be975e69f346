//! Heuristic extraction of `identifier|MM|YYYY` from free text
//!
//! The identifier is searched for with all whitespace removed, so numbers
//! written in groups (`4111 1111 1111 1111`) are still found. The expiry date
//! is then read from what is left of the original line, where whitespace
//! still separates fields.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::{ExtractionFailure, NormalizedLine, SEPARATOR};

/// Shortest accepted identifier
pub const MIN_IDENTIFIER_DIGITS: usize = 15;

/// Accepted expiry years, inclusive
pub const YEAR_RANGE: std::ops::RangeInclusive<u16> = 2020..=2040;

static IDENTIFIER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{15,16}").expect("identifier pattern is a valid regex"));

static SLASH_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2})/([0-9]{2,4})").expect("slash date pattern is a valid regex")
});

static DIGIT_RUN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit run pattern is a valid regex"));

/// Extract a normalized record from one line of free text
///
/// # Examples
///
/// ```
/// use luhnkit::core::services::extract;
///
/// let line = extract("4111111111111111 12/26 123").unwrap();
/// assert_eq!(line.to_string(), "4111111111111111|12|2026");
/// ```
pub fn extract(raw: &str) -> Result<NormalizedLine, ExtractionFailure> {
    let (stripped, offsets) = strip_whitespace(raw);

    let Some(found) = IDENTIFIER_PATTERN.find(&stripped) else {
        let digits = raw.chars().filter(char::is_ascii_digit).count();
        return Err(if digits < MIN_IDENTIFIER_DIGITS {
            ExtractionFailure::TooShort { digits }
        } else {
            ExtractionFailure::NoIdentifier
        });
    };
    let identifier = found.as_str().to_string();

    // The match is all ASCII digits, so its last byte is a whole char.
    let start = offsets[found.start()];
    let end = offsets[found.end() - 1] + 1;
    let remainder = format!("{}{SEPARATOR}{}", &raw[..start], &raw[end..])
        .replace(identifier.as_str(), &SEPARATOR.to_string());

    let (month, year) = find_date(&remainder).ok_or(ExtractionFailure::NoDate)?;

    let month_ok = matches!(month.parse::<u8>(), Ok(1..=12));
    let year_ok = year.parse::<u16>().is_ok_and(|y| YEAR_RANGE.contains(&y));
    if !month_ok || !year_ok {
        return Err(ExtractionFailure::DateOutOfRange { month, year });
    }

    Ok(NormalizedLine {
        identifier,
        month,
        year,
    })
}

/// Drop whitespace, remembering the source byte offset of every kept byte
fn strip_whitespace(raw: &str) -> (String, Vec<usize>) {
    let mut stripped = String::with_capacity(raw.len());
    let mut offsets = Vec::with_capacity(raw.len());
    for (pos, c) in raw.char_indices().filter(|(_, c)| !c.is_whitespace()) {
        stripped.push(c);
        offsets.extend(pos..pos + c.len_utf8());
    }
    (stripped, offsets)
}

/// Locate a month/year pair, slash form first, then the first two digit runs
fn find_date(remainder: &str) -> Option<(String, String)> {
    if let Some(caps) = SLASH_DATE_PATTERN.captures(remainder) {
        let month = format!("{:0>2}", &caps[1]);
        let year_part = &caps[2];
        let year = if year_part.len() == 2 {
            format!("20{year_part}")
        } else {
            year_part.to_string()
        };
        return Some((month, year));
    }

    let mut runs = DIGIT_RUN_PATTERN.find_iter(remainder).map(|m| m.as_str());
    let first = runs.next()?;
    let second = runs.next()?;

    if first.len() > 2 || !matches!(first.parse::<u8>(), Ok(1..=12)) {
        return None;
    }
    let year = match second.len() {
        1 => format!("202{second}"),
        2 => format!("20{second}"),
        4 => second.to_string(),
        _ => return None,
    };

    Some((format!("{first:0>2}"), year))
}
