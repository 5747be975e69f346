//! Domain models for luhnkit
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`TemplateLine`] - "expand this pattern for this month and year"
//! - [`WildcardRun`] - one block of `x` placeholders in a pattern
//! - [`Record`] - a generated `identifier|MM|YYYY|000` line
//! - [`ResultSet`] - deduplicating, insertion-ordered record collection
//! - [`NormalizedLine`] - a record recovered from free text
//! - [`ExtractionFailure`] - why free text could not be normalized

mod extraction;
mod record;
mod template;

pub use extraction::{ExtractionFailure, FailureKind, NormalizedLine};
pub use record::{Record, ResultSet, SEPARATOR, TRAILING_FIELD};
pub use template::{
    DEFAULT_MONTH, DEFAULT_YEAR, ExpandError, TemplateDefaults, TemplateError, TemplateLine,
    WildcardRun, combination_count,
};
