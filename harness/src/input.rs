//! Input normalization: free text in, a validated element set and target out.
//!
//! Token parsing is lenient the way form fields usually are. Each
//! comma-separated token contributes the integer at its start (optional sign,
//! then digits); tokens with no leading integer are dropped. `"5abc"` reads
//! as 5, `"3.9"` as 3, `"x"` and `""` are skipped. The target uses the same
//! rule but must produce a number.

use subsum_kernel::carrier::element_set::ElementSetV1;
use thiserror::Error;

/// Rejection of collaborator input before any search runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The target text has no leading integer.
    #[error("target {text:?} is not an integer")]
    MalformedTarget { text: String },
    /// A token's leading integer does not fit in `i64`.
    #[error("value {token:?} is out of range")]
    OutOfRange { token: String },
}

/// A normalized run input: ascending elements and a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunInputV1 {
    pub elements: ElementSetV1,
    pub target: i64,
}

/// Parse a comma-separated list of integers, skipping non-numeric tokens.
///
/// # Errors
///
/// Returns [`InputError::OutOfRange`] if a token's leading integer overflows
/// `i64`.
pub fn parse_element_list(text: &str) -> Result<Vec<i64>, InputError> {
    let mut values = Vec::new();
    for token in text.split(',') {
        if let Some(value) = leading_integer(token)? {
            values.push(value);
        }
    }
    Ok(values)
}

/// Parse the target field.
///
/// # Errors
///
/// Returns [`InputError::MalformedTarget`] if the text has no leading
/// integer, or [`InputError::OutOfRange`] if it overflows `i64`.
pub fn parse_target(text: &str) -> Result<i64, InputError> {
    leading_integer(text)?.ok_or_else(|| InputError::MalformedTarget {
        text: text.to_string(),
    })
}

/// Parse both fields and sort the elements ascending.
///
/// # Errors
///
/// Propagates [`parse_element_list`] and [`parse_target`] failures.
pub fn normalize(set_text: &str, target_text: &str) -> Result<RunInputV1, InputError> {
    let values = parse_element_list(set_text)?;
    let target = parse_target(target_text)?;
    Ok(RunInputV1 {
        elements: ElementSetV1::from_unsorted(values),
        target,
    })
}

fn leading_integer(token: &str) -> Result<Option<i64>, InputError> {
    let trimmed = token.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Ok(None);
    }

    let out_of_range = || InputError::OutOfRange {
        token: trimmed.to_string(),
    };
    let mut value: i64 = 0;
    for digit in rest[..digits_len].bytes() {
        let d = i64::from(digit - b'0');
        value = value.checked_mul(10).ok_or_else(out_of_range)?;
        value = if negative {
            value.checked_sub(d)
        } else {
            value.checked_add(d)
        }
        .ok_or_else(out_of_range)?;
    }
    Ok(Some(value))
}
