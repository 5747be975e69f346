//! Mod-10 (Luhn) check digits

/// Compute the check digit to append to `digits`
///
/// Walking right to left, every second digit starting with the rightmost is
/// doubled (minus 9 when over 9). The check digit brings the total to a
/// multiple of ten.
///
/// # Panics
///
/// Panics if `digits` is empty. Callers must pass ASCII digits only.
#[must_use]
pub fn check_digit(digits: &str) -> u8 {
    check_digit_ascii(digits.as_bytes())
}

/// [`check_digit`] over raw ASCII bytes
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn check_digit_ascii(digits: &[u8]) -> u8 {
    assert!(!digits.is_empty(), "check digit needs at least one digit");
    debug_assert!(digits.iter().all(u8::is_ascii_digit), "check digit input must be ASCII digits");

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();

    ((10 - sum % 10) % 10) as u8
}

/// Whether the last digit of `full_number` is the check digit of the rest
///
/// Returns `false` for anything shorter than two characters or containing
/// a non-digit.
#[must_use]
pub fn is_valid(full_number: &str) -> bool {
    let bytes = full_number.as_bytes();
    if bytes.len() < 2 || !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }
    let (prefix, last) = bytes.split_at(bytes.len() - 1);
    check_digit_ascii(prefix) == last[0] - b'0'
}
