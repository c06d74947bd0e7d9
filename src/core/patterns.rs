//! Literal pattern table for every identifier shape.
//!
//! The shapes are fixed by Italian and SEPA conventions and are not
//! configurable. Digit classes are spelled `[0-9]` because `\d` in the
//! `regex` crate also matches non-ASCII digits.

use regex::Regex;
use std::sync::LazyLock;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("literal pattern table must compile")
}

/// Given names: letters and spaces (middle names allowed).
#[cfg(feature = "anagrafica")]
pub(crate) static NAME: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Za-z ]+$"));

/// Surnames: letters only.
#[cfg(feature = "anagrafica")]
pub(crate) static SURNAME: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Za-z]+$"));

/// Honorific titles: Sig., Sig.ra, Dott.
#[cfg(feature = "anagrafica")]
pub(crate) static TITLE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(?:Sig\.|Sig\.ra|Dott\.)$"));

/// IBAN electronic form: country, check digits, 1 to 30 BBAN characters.
#[cfg(feature = "banking")]
pub(crate) static IBAN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[A-Z]{2}[0-9]{2}[A-Z0-9]{1,30}$"));

/// IBAN country code on its own: 2 letters.
#[cfg(feature = "banking")]
pub(crate) static IBAN_COUNTRY: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Z]{2}$"));

/// IBAN BBAN on its own: 1 to 30 letters or digits.
#[cfg(feature = "banking")]
pub(crate) static IBAN_BBAN: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Z0-9]{1,30}$"));

/// SWIFT/BIC: institution, country, location, optional branch.
#[cfg(feature = "banking")]
pub(crate) static SWIFT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[A-Z]{4}[A-Z]{2}[A-Z0-9]{2}(?:[A-Z0-9]{3})?$"));

/// Tessera Sanitaria serial: 20 digits.
#[cfg(feature = "tessera")]
pub(crate) static HIC_SERIAL: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]{20}$"));

/// CIE serial: two letters, five digits, two letters.
#[cfg(feature = "cie")]
pub(crate) static CIE_SERIAL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[A-Z]{2}[0-9]{5}[A-Z]{2}$"));

/// Partita IVA body without the country prefix: 11 digits.
#[cfg(feature = "piva")]
pub(crate) static PARTITA_IVA: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]{11}$"));
