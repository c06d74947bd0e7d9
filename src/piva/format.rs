//! Partita IVA formatting and the typed [`PartitaIva`] wrapper.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::CodiciError;

use super::KIND;
use super::checksum::{has_valid_shape, is_valid_partita_iva, strip_country_prefix};

/// Prefix the number with "IT".
///
/// An existing "IT" prefix is stripped first, so formatting is idempotent.
/// Only the 11-digit shape is checked here, not the check digit; use
/// [`PartitaIva`] when the check digit must hold as well.
///
/// # Errors
///
/// Returns [`CodiciError::InvalidArgument`] if the number is not 11 digits
/// after removing the prefix.
pub fn format_partita_iva(partita_iva: &str) -> Result<String, CodiciError> {
    let digits = strip_country_prefix(partita_iva);
    if !has_valid_shape(digits) {
        return Err(CodiciError::invalid_argument(
            KIND,
            partita_iva,
            "expected 11 digits after the optional IT prefix",
        ));
    }
    Ok(format!("IT{digits}"))
}

/// A Partita IVA with a verified check digit.
///
/// Stored without the country prefix; `Display` writes the "IT" form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PartitaIva(String);

impl PartitaIva {
    /// The 11 digits without prefix.
    pub fn number(&self) -> &str {
        &self.0
    }

    /// Company registration number (digits 1-7).
    pub fn company_number(&self) -> &str {
        &self.0[..7]
    }

    /// Provincial office code (digits 8-10).
    pub fn office_code(&self) -> &str {
        &self.0[7..10]
    }

    /// The check digit (11th digit).
    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[10] - b'0'
    }
}

impl FromStr for PartitaIva {
    type Err = CodiciError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = strip_country_prefix(trimmed);
        if !has_valid_shape(digits) {
            return Err(CodiciError::invalid_argument(
                KIND,
                s,
                "expected 11 digits after the optional IT prefix",
            ));
        }
        if !is_valid_partita_iva(digits) {
            return Err(CodiciError::invalid_argument(
                KIND,
                s,
                "check digit mismatch",
            ));
        }
        Ok(Self(digits.to_string()))
    }
}

impl TryFrom<String> for PartitaIva {
    type Error = CodiciError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PartitaIva> for String {
    fn from(piva: PartitaIva) -> Self {
        piva.to_string()
    }
}

impl fmt::Display for PartitaIva {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IT{}", self.0)
    }
}
