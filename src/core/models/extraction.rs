//! Normalized lines and extraction failures

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::record::SEPARATOR;

/// Output of the line extractor: `identifier|MM|YYYY`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedLine {
    /// 15 or 16 digit identifier
    pub identifier: String,
    /// Two-digit month, 01-12
    pub month: String,
    /// Four-digit year, 2020-2040
    pub year: String,
}

impl fmt::Display for NormalizedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}{SEPARATOR}{}", self.identifier, self.month, self.year)
    }
}

/// Why a free-text line could not be normalized
///
/// Variants are listed in the order they are checked; a line only ever
/// reports the first one that applies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionFailure {
    /// Fewer than 15 digits in the whole line
    #[error("identifier too short ({digits} digits, need 15-16)")]
    TooShort {
        /// Digits counted in the raw line
        digits: usize,
    },

    /// Enough digits, but never 15 in a row
    #[error("no valid identifier found")]
    NoIdentifier,

    /// No month/year pair could be located
    #[error("no expiry date found (MM/YY)")]
    NoDate,

    /// Month or year outside the accepted window
    #[error("expiry date out of range: {month}/{year}")]
    DateOutOfRange {
        /// Month as extracted
        month: String,
        /// Year as extracted
        year: String,
    },
}

/// Stable machine-readable tag for an [`ExtractionFailure`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// See [`ExtractionFailure::TooShort`]
    TooShort,
    /// See [`ExtractionFailure::NoIdentifier`]
    NoIdentifier,
    /// See [`ExtractionFailure::NoDate`]
    NoDate,
    /// See [`ExtractionFailure::DateOutOfRange`]
    DateOutOfRange,
}

impl ExtractionFailure {
    /// Tag for this failure
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::TooShort { .. } => FailureKind::TooShort,
            Self::NoIdentifier => FailureKind::NoIdentifier,
            Self::NoDate => FailureKind::NoDate,
            Self::DateOutOfRange { .. } => FailureKind::DateOutOfRange,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "too_short"),
            Self::NoIdentifier => write!(f, "no_identifier"),
            Self::NoDate => write!(f, "no_date"),
            Self::DateOutOfRange => write!(f, "date_out_of_range"),
        }
    }
}
