//! Partita IVA check digit arithmetic.

use crate::core::{CodiciError, patterns};

use super::KIND;

/// Remove one leading "IT" country prefix, if present.
pub(crate) fn strip_country_prefix(partita_iva: &str) -> &str {
    partita_iva.strip_prefix("IT").unwrap_or(partita_iva)
}

/// Whether `digits` is exactly 11 ASCII digits.
pub(crate) fn has_valid_shape(digits: &str) -> bool {
    patterns::PARTITA_IVA.is_match(digits)
}

/// Validate a Partita IVA, with or without the "IT" prefix.
///
/// After stripping the prefix the number must be 11 digits whose weighted
/// sum is a multiple of 10. Digits at even 1-based positions are doubled,
/// subtracting 9 when the double exceeds 9; odd positions count as-is.
pub fn is_valid_partita_iva(partita_iva: &str) -> bool {
    let digits = strip_country_prefix(partita_iva);
    has_valid_shape(digits) && weighted_sum(digits) % 10 == 0
}

/// Compute the 11th digit completing a 10-digit Partita IVA prefix.
///
/// # Errors
///
/// Returns [`CodiciError::InvalidArgument`] unless `first_ten` is exactly
/// 10 ASCII digits.
pub fn partita_iva_check_digit(first_ten: &str) -> Result<u8, CodiciError> {
    if first_ten.len() != 10 || !first_ten.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodiciError::invalid_argument(
            KIND,
            first_ten,
            "expected the first 10 digits",
        ));
    }
    // The 11th position is odd, so the check digit enters the sum unweighted.
    let partial = weighted_sum(first_ten) % 10;
    Ok(((10 - partial) % 10) as u8)
}

/// Luhn-style sum over ASCII digits, positions counted from 1.
fn weighted_sum(digits: &str) -> u32 {
    digits
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            if (i + 1) % 2 == 0 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum()
}
