//! Tessera Sanitaria (Italian health insurance card) checks.
//!
//! The serial printed on the card is 20 decimal digits. A card is usable
//! until, but not on, its expiration date.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use codici::tessera::*;
//!
//! let expires = NaiveDate::from_ymd_opt(2030, 1, 1);
//! let on = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
//! assert!(is_valid_hic_serial("80380001230012345678"));
//! assert!(is_valid_health_insurance_card_on("80380001230012345678", expires, on));
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{patterns, today};

/// Validate a health insurance card serial: exactly 20 digits.
pub fn is_valid_hic_serial(serial: &str) -> bool {
    patterns::HIC_SERIAL.is_match(serial)
}

/// Whether a card expiring on `expiration_date` is still valid today.
///
/// `None` (no expiration date known) is never valid.
pub fn is_card_currently_valid(expiration_date: Option<NaiveDate>) -> bool {
    is_card_currently_valid_on(expiration_date, today())
}

/// Whether a card expiring on `expiration_date` is valid on `on`:
/// `on` must fall strictly before the expiration date.
pub fn is_card_currently_valid_on(expiration_date: Option<NaiveDate>, on: NaiveDate) -> bool {
    expiration_date.is_some_and(|expires| on < expires)
}

/// Serial format and expiration checked together against today.
pub fn is_valid_health_insurance_card(serial: &str, expiration_date: Option<NaiveDate>) -> bool {
    is_valid_health_insurance_card_on(serial, expiration_date, today())
}

/// Serial format and expiration checked together against `on`.
pub fn is_valid_health_insurance_card_on(
    serial: &str,
    expiration_date: Option<NaiveDate>,
    on: NaiveDate,
) -> bool {
    is_valid_hic_serial(serial) && is_card_currently_valid_on(expiration_date, on)
}

/// Health insurance card details as read from the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthInsuranceCard {
    /// 20-digit serial number.
    pub serial: String,
    /// First day on which the card is no longer valid.
    pub expiration_date: Option<NaiveDate>,
}

impl HealthInsuranceCard {
    /// Build a card from its serial and optional expiration date.
    pub fn new(serial: impl Into<String>, expiration_date: Option<NaiveDate>) -> Self {
        Self {
            serial: serial.into(),
            expiration_date,
        }
    }

    /// See [`is_valid_health_insurance_card`].
    pub fn is_valid(&self) -> bool {
        is_valid_health_insurance_card(&self.serial, self.expiration_date)
    }

    /// See [`is_valid_health_insurance_card_on`].
    pub fn is_valid_on(&self, on: NaiveDate) -> bool {
        is_valid_health_insurance_card_on(&self.serial, self.expiration_date, on)
    }
}
