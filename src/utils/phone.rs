// ============================================================================
// PHONE - Canonical international phone numbers
// ============================================================================
// Local numbers ("0803 123 4567") become "+2348031234567". Only the national
// trunk prefix at position 0 is replaced; digits further in are never touched.
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneError {
    #[error("Phone number is required")]
    Empty,
    #[error("Phone number is too short")]
    TooShort,
    #[error("Phone number contains an invalid character '{0}'")]
    InvalidCharacter(char),
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '-' | '.' | '(' | ')')
}

fn digits_only(raw: &str) -> Result<String, PhoneError> {
    let mut digits = String::with_capacity(raw.len());
    for c in raw.chars().filter(|c| !is_separator(*c)) {
        if !c.is_ascii_digit() {
            return Err(PhoneError::InvalidCharacter(c));
        }
        digits.push(c);
    }
    Ok(digits)
}

/// Normalize a user-entered phone number to `+<calling code><subscriber>`.
///
/// - `+…` and `00…` are already international and only lose separators.
/// - a single leading `0` is the trunk prefix and is swapped for `calling_code`.
/// - anything else is returned as entered.
pub fn normalize_phone(raw: &str, calling_code: &str) -> Result<String, PhoneError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PhoneError::Empty);
    }

    if let Some(rest) = trimmed.strip_prefix('+') {
        let digits = digits_only(rest)?;
        if digits.is_empty() {
            return Err(PhoneError::TooShort);
        }
        return Ok(format!("+{}", digits));
    }

    if let Some(rest) = trimmed.strip_prefix("00") {
        let digits = digits_only(rest)?;
        if digits.is_empty() {
            return Err(PhoneError::TooShort);
        }
        return Ok(format!("+{}", digits));
    }

    if let Some(rest) = trimmed.strip_prefix('0') {
        let subscriber = digits_only(rest)?;
        if subscriber.is_empty() {
            return Err(PhoneError::TooShort);
        }
        return Ok(format!("+{}{}", calling_code.trim_start_matches('+'), subscriber));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_number_gets_calling_code() {
        assert_eq!(normalize_phone("08031234567", "234").unwrap(), "+2348031234567");
    }

    #[test]
    fn number_without_leading_zero_passes_through() {
        assert_eq!(normalize_phone("8031234560", "234").unwrap(), "8031234560");
        assert_eq!(normalize_phone("2348031234567", "234").unwrap(), "2348031234567");
    }

    #[test]
    fn later_zero_is_never_replaced() {
        // the old replace-first-"0" routine turned "8030..." into "83+234..."
        assert_eq!(normalize_phone("8030000000", "234").unwrap(), "8030000000");
        assert_eq!(normalize_phone("08030000000", "234").unwrap(), "+2348030000000");
    }

    #[test]
    fn separators_are_stripped_from_local_numbers() {
        assert_eq!(normalize_phone(" 0803 123-4560 ", "234").unwrap(), "+2348031234560");
        assert_eq!(normalize_phone("0803 (123) 4560", "+234").unwrap(), "+2348031234560");
    }

    #[test]
    fn international_forms() {
        assert_eq!(normalize_phone("+234 803 123 4567", "234").unwrap(), "+2348031234567");
        assert_eq!(normalize_phone("00447700900123", "234").unwrap(), "+447700900123");
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(normalize_phone("   ", "234"), Err(PhoneError::Empty));
        assert_eq!(normalize_phone("0", "234"), Err(PhoneError::TooShort));
        assert_eq!(normalize_phone("+", "234"), Err(PhoneError::TooShort));
        assert_eq!(normalize_phone("0803abc", "234"), Err(PhoneError::InvalidCharacter('a')));
    }
}
