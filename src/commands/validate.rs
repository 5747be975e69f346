//! Check mod-10 check digits

use luhnkit::core::services::is_valid;
use luhnkit::output::{OutputMode, ValidateResult, Validation};

/// Report whether each number carries a correct check digit
///
/// Exits with status 1 when any number is invalid.
pub fn validate(numbers: &[String], mode: OutputMode) -> anyhow::Result<()> {
    let numbers: Vec<Validation> = numbers
        .iter()
        .map(|n| Validation {
            number: n.clone(),
            valid: is_valid(n),
        })
        .collect();
    let all_valid = numbers.iter().all(|v| v.valid);

    let result = ValidateResult { all_valid, numbers };
    result.render(mode);

    if !all_valid {
        std::process::exit(1);
    }
    Ok(())
}
