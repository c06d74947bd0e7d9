//! IBAN mod-97 validation, grouping, and check digit generation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CodiciError, patterns};

const KIND: &str = "IBAN";

/// Validate an IBAN in electronic form (no spaces, upper case).
///
/// The input must be 2 letters, 2 digits, then 1 to 30 letters or digits.
/// The first four characters are moved to the end, every letter is replaced
/// by its value (A = 10 … Z = 35), and the resulting numeral must leave a
/// remainder of 1 when divided by 97.
pub fn is_valid_iban(iban: &str) -> bool {
    patterns::IBAN.is_match(iban) && mod97(rotated(iban)) == 1
}

/// Group a valid IBAN in blocks of four characters separated by one space.
///
/// No space follows the last block.
///
/// # Errors
///
/// Returns [`CodiciError::InvalidArgument`] if `iban` fails [`is_valid_iban`].
pub fn format_iban(iban: &str) -> Result<String, CodiciError> {
    verify(iban, iban)?;
    Ok(group_by_four(iban))
}

/// Compute the two check digits for `country_code` and `bban`.
///
/// # Errors
///
/// Returns [`CodiciError::InvalidArgument`] if the country code is not two
/// upper-case letters or the BBAN is not 1 to 30 upper-case letters or digits.
pub fn iban_check_digits(country_code: &str, bban: &str) -> Result<String, CodiciError> {
    if !patterns::IBAN_COUNTRY.is_match(country_code) {
        return Err(CodiciError::invalid_argument(
            KIND,
            country_code,
            "country code must be 2 upper-case letters",
        ));
    }
    if !patterns::IBAN_BBAN.is_match(bban) {
        return Err(CodiciError::invalid_argument(
            KIND,
            bban,
            "BBAN must be 1-30 upper-case letters or digits",
        ));
    }
    let candidate = format!("{country_code}00{bban}");
    let remainder = mod97(rotated(&candidate));
    Ok(format!("{:02}", 98 - remainder))
}

/// Shape and checksum of `iban`; errors report `original` as the rejected value.
fn verify(iban: &str, original: &str) -> Result<(), CodiciError> {
    if !patterns::IBAN.is_match(iban) {
        return Err(CodiciError::invalid_argument(
            KIND,
            original,
            "expected 2 letters, 2 digits and 1-30 alphanumeric characters",
        ));
    }
    if mod97(rotated(iban)) != 1 {
        return Err(CodiciError::invalid_argument(
            KIND,
            original,
            "mod-97 checksum mismatch",
        ));
    }
    Ok(())
}

/// The IBAN with its first four characters moved to the end.
fn rotated(iban: &str) -> impl Iterator<Item = u8> + '_ {
    let (head, tail) = iban.as_bytes().split_at(4);
    tail.iter().chain(head).copied()
}

/// Remainder mod 97 of the numeral formed by expanding letters to 10..=35.
///
/// Carried digit by digit so the (30+ digit) numeral is never built.
/// Expects upper-case ASCII letters and digits only.
fn mod97(chars: impl Iterator<Item = u8>) -> u32 {
    chars.fold(0, |rem, c| match c {
        b'0'..=b'9' => (rem * 10 + u32::from(c - b'0')) % 97,
        b'A'..=b'Z' => (rem * 100 + u32::from(c - b'A') + 10) % 97,
        _ => rem,
    })
}

fn group_by_four(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 4);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// A checksum-verified IBAN in electronic form.
///
/// Parsing accepts the grouped print form: ASCII whitespace is removed and
/// letters are upper-cased before validation. `Display` writes the grouped
/// print form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iban(String);

impl Iban {
    /// The electronic form, e.g. "IT60X0542811101000000123456".
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ISO 3166-1 alpha-2 country code.
    pub fn country_code(&self) -> &str {
        &self.0[..2]
    }

    /// The two check digits.
    pub fn check_digits(&self) -> &str {
        &self.0[2..4]
    }

    /// Basic Bank Account Number (everything after the check digits).
    pub fn bban(&self) -> &str {
        &self.0[4..]
    }
}

impl FromStr for Iban {
    type Err = CodiciError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        verify(&compact, s)?;
        Ok(Self(compact))
    }
}

impl TryFrom<String> for Iban {
    type Error = CodiciError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Iban> for String {
    fn from(iban: Iban) -> Self {
        iban.0
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&group_by_four(&self.0))
    }
}
