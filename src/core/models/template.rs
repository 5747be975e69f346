//! Template lines and wildcard runs
//!
//! A template line has the shape `pattern|MM|YYYY|`, where the pattern is a
//! run of digits with one or more blocks of `x` wildcards:
//!
//! ```
//! use luhnkit::core::models::{TemplateDefaults, TemplateLine};
//!
//! let line = TemplateLine::parse("497465880504xxxx|03|2027|", &TemplateDefaults::default()).unwrap();
//! assert_eq!(line.month(), "03");
//! assert_eq!(line.runs().len(), 1);
//! assert_eq!(line.combinations(), 10_000);
//! ```

use serde::Serialize;
use thiserror::Error;

use crate::core::services::placeholder::{find_wildcard_runs, is_wildcard};

/// Fallback month for template lines that leave it out
pub const DEFAULT_MONTH: &str = "01";

/// Fallback year for template lines that leave it out
pub const DEFAULT_YEAR: &str = "2028";

/// One maximal block of wildcard characters within a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WildcardRun {
    /// Byte offset of the first wildcard
    pub position: usize,
    /// Number of consecutive wildcards
    pub length: usize,
}

impl WildcardRun {
    /// Create a run
    #[must_use]
    pub const fn new(position: usize, length: usize) -> Self {
        Self { position, length }
    }

    /// Byte offset one past the last wildcard
    #[must_use]
    pub const fn end(self) -> usize {
        self.position + self.length
    }

    /// Number of distinct values this run can take (`10^length`), `None` on overflow
    #[must_use]
    pub fn combinations(self) -> Option<u64> {
        let exp = u32::try_from(self.length).ok()?;
        10_u64.checked_pow(exp)
    }
}

/// Total combinations for a set of runs, saturating at `u64::MAX`
#[must_use]
pub fn combination_count(runs: &[WildcardRun]) -> u64 {
    runs.iter()
        .try_fold(1_u64, |acc, run| run.combinations().and_then(|c| acc.checked_mul(c)))
        .unwrap_or(u64::MAX)
}

/// Errors raised while parsing or expanding a single template line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Line was blank after trimming
    #[error("empty line, skipped")]
    EmptyLine,

    /// Wrong number of pipe-separated fields
    #[error("expected `pattern|MM|YYYY|`, found {found} fields")]
    FieldCount {
        /// Number of fields found
        found: usize,
    },

    /// Pattern contains something other than digits and `x`
    #[error("only digits and 'x' are allowed in the pattern, found {ch:?}")]
    InvalidCharacter {
        /// The offending character
        ch: char,
    },

    /// Month is not two digits
    #[error("invalid month: {value:?}")]
    InvalidMonth {
        /// The month field as written
        value: String,
    },

    /// Month is two digits but not 01-12
    #[error("month out of range (01-12): {value:?}")]
    MonthOutOfRange {
        /// The month field as written
        value: String,
    },

    /// Year is not four digits
    #[error("invalid year: {value:?}")]
    InvalidYear {
        /// The year field as written
        value: String,
    },

    /// Pattern has nothing to expand
    #[error("no 'x' placeholder in pattern, skipped")]
    NoWildcards,

    /// Expansion would exceed the configured cap
    #[error(transparent)]
    Expand(#[from] ExpandError),
}

/// Errors raised by the combinatorial expander
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExpandError {
    /// Combination count is over the caller's cap
    #[error("pattern expands to {combinations} combinations, over the limit of {cap}")]
    TooLarge {
        /// Combinations the pattern would produce (saturating)
        combinations: u64,
        /// Configured cap
        cap: u64,
    },
}

/// Month and year substituted when a template line leaves them blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDefaults {
    /// Two-digit month
    pub month: String,
    /// Four-digit year
    pub year: String,
}

impl Default for TemplateDefaults {
    fn default() -> Self {
        Self {
            month: DEFAULT_MONTH.to_string(),
            year: DEFAULT_YEAR.to_string(),
        }
    }
}

/// A validated template line ready for expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLine {
    pattern: String,
    month: String,
    year: String,
    runs: Vec<WildcardRun>,
}

impl TemplateLine {
    /// Parse a `pattern|MM|YYYY|` line
    ///
    /// Month and year are optional; blank values fall back to `defaults`.
    /// A trailing empty fourth field is accepted.
    pub fn parse(line: &str, defaults: &TemplateDefaults) -> Result<Self, TemplateError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(TemplateError::EmptyLine);
        }

        let fields: Vec<&str> = line.split('|').collect();
        let trailing_ok = fields.get(3).is_none_or(|f| f.trim().is_empty());
        if fields.len() > 4 || !trailing_ok {
            return Err(TemplateError::FieldCount { found: fields.len() });
        }

        // A one-digit month is zero-padded, configured defaults included
        let month = format!("{:0>2}", field_or(fields.get(1), &defaults.month));
        if month.len() != 2 || !month.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TemplateError::InvalidMonth { value: month });
        }
        if !matches!(month.parse::<u8>(), Ok(1..=12)) {
            return Err(TemplateError::MonthOutOfRange { value: month });
        }

        let year = field_or(fields.get(2), &defaults.year);
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TemplateError::InvalidYear { value: year });
        }

        let pattern = fields[0].trim();
        if let Some(ch) = pattern.chars().find(|&c| !c.is_ascii_digit() && !is_wildcard(c)) {
            return Err(TemplateError::InvalidCharacter { ch });
        }

        let runs = find_wildcard_runs(pattern);
        if runs.is_empty() {
            return Err(TemplateError::NoWildcards);
        }

        Ok(Self {
            pattern: pattern.to_string(),
            month,
            year,
            runs,
        })
    }

    /// The digit/wildcard pattern
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Two-digit month
    #[must_use]
    pub fn month(&self) -> &str {
        &self.month
    }

    /// Four-digit year
    #[must_use]
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Wildcard runs, left to right
    #[must_use]
    pub fn runs(&self) -> &[WildcardRun] {
        &self.runs
    }

    /// Number of candidates the pattern expands to, saturating at `u64::MAX`
    #[must_use]
    pub fn combinations(&self) -> u64 {
        combination_count(&self.runs)
    }
}

fn field_or(field: Option<&&str>, default: &str) -> String {
    match field.map(|f| f.trim()) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}
