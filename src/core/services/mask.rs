//! Masking the tail of a record's identifier

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::SEPARATOR;

/// Default character written over masked digits
pub const MASK_CHAR: char = 'x';

/// Rejected mask width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid mask width {0}: use 0, 4, 5 or 6")]
pub struct InvalidMaskDigits(pub u8);

/// How many trailing identifier digits to hide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MaskDigits {
    /// Leave records untouched
    #[default]
    None,
    /// Last four digits
    Four,
    /// Last five digits
    Five,
    /// Last six digits
    Six,
}

impl MaskDigits {
    /// Number of characters masked
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::None => 0,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
        }
    }
}

impl TryFrom<u8> for MaskDigits {
    type Error = InvalidMaskDigits;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            other => Err(InvalidMaskDigits(other)),
        }
    }
}

impl From<MaskDigits> for u8 {
    fn from(value: MaskDigits) -> Self {
        match value {
            MaskDigits::None => 0,
            MaskDigits::Four => 4,
            MaskDigits::Five => 5,
            MaskDigits::Six => 6,
        }
    }
}

impl std::str::FromStr for MaskDigits {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u8 =
            s.trim().parse().map_err(|_| format!("Invalid mask width: {s}. Use: 0, 4, 5, 6"))?;
        Self::try_from(n).map_err(|e| e.to_string())
    }
}

/// Replace the last `n` characters of the identifier field with `x`
///
/// Records whose identifier is shorter than `n` come back unchanged.
#[must_use]
pub fn mask(record: &str, n: usize) -> String {
    mask_with(record, n, MASK_CHAR)
}

/// [`mask`] with a caller-chosen mask character
#[must_use]
pub fn mask_with(record: &str, n: usize, mask_char: char) -> String {
    let (identifier, rest) =
        record.split_once(SEPARATOR).map_or((record, None), |(id, rest)| (id, Some(rest)));

    let len = identifier.chars().count();
    if len < n {
        return record.to_string();
    }

    let mut masked: String = identifier.chars().take(len - n).collect();
    masked.extend(std::iter::repeat_n(mask_char, n));
    if let Some(rest) = rest {
        masked.push(SEPARATOR);
        masked.push_str(rest);
    }
    masked
}
