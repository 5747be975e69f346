//! Business logic services
//!
//! Pure transformations over strings and collections. These services have no
//! I/O dependencies - they operate on data passed in and return results.
//!
//! - [`checksum`] - Mod-10 check digits
//! - [`placeholder`] - Find wildcard runs in a pattern
//! - [`expander`] - Enumerate every candidate of a template
//! - [`finalizer`] - Shuffle and re-validate generated records
//! - [`extractor`] - Pull `identifier|MM|YYYY` out of free text
//! - [`mask`] - Hide the tail of an identifier
//! - [`batch`] - Line-oriented generation and formatting pipelines
//! - [`dedup`] - Subtract and split line lists

pub mod batch;
pub mod checksum;
pub mod dedup;
pub mod expander;
pub mod extractor;
pub mod finalizer;
pub mod mask;
pub mod placeholder;

pub use batch::{
    BatchProgress, FormatOptions, FormatOutcome, FormatReport, GenerateOptions, GenerationReport,
    LineError, format_batch, generate_batch, generate_batch_with, split_lines,
};
pub use checksum::{check_digit, is_valid};
pub use dedup::{split_into, subtract_lines};
pub use expander::{DEFAULT_MAX_COMBINATIONS, ExpansionStats, expand, target_length};
pub use extractor::extract;
pub use finalizer::{Finalized, finalize};
pub use mask::{InvalidMaskDigits, MASK_CHAR, MaskDigits, mask, mask_with};
pub use placeholder::find_wildcard_runs;
