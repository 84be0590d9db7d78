//! Birth date input mask (`DD/MM/YYYY`)

/// Display cap of the birth date field (8 digits plus two separators)
pub const BIRTH_DATE_MAX_LEN: usize = 10;

/// Digits kept by the mask; anything past the year is dropped
const MAX_DIGITS: usize = 8;

/// Reformat the raw text of the birth date field.
///
/// Every non-digit is stripped first, so separators inserted by a previous
/// call are harmless. The result depends only on the digit content:
/// - up to 2 digits: returned as-is
/// - 3 or 4 digits: `DD/M` or `DD/MM`
/// - 5 or more: `DD/MM/Y...`, with at most 4 year digits
pub fn format_birth_date(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_DIGITS)
        .collect();

    match digits.len() {
        0..=2 => digits,
        3..=4 => format!("{}/{}", &digits[..2], &digits[2..]),
        _ => format!("{}/{}/{}", &digits[..2], &digits[2..4], &digits[4..]),
    }
}
