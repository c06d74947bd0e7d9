//! Carta d'Identità Elettronica (CIE) checks.
//!
//! Serial numbers are two letters, five digits, two letters (e.g. "CA12345AB").
//! Lower-case input is accepted and compared upper-cased.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::patterns;

/// Validate a CIE serial number.
pub fn is_valid_cie_serial(serial: &str) -> bool {
    patterns::CIE_SERIAL.is_match(&serial.to_ascii_uppercase())
}

/// Validate a CIE: serial format, both dates present, and the issue date
/// strictly before the expiration date.
pub fn is_valid_cie(
    serial: &str,
    issue_date: Option<NaiveDate>,
    expiration_date: Option<NaiveDate>,
) -> bool {
    if !is_valid_cie_serial(serial) {
        return false;
    }
    match (issue_date, expiration_date) {
        (Some(issued), Some(expires)) => issued < expires,
        _ => false,
    }
}

/// Identity card details as printed on the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityCard {
    pub serial: String,
    pub issue_date: Option<NaiveDate>,
    pub expiration_date: Option<NaiveDate>,
}

impl IdentityCard {
    pub fn new(
        serial: impl Into<String>,
        issue_date: Option<NaiveDate>,
        expiration_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            serial: serial.into(),
            issue_date,
            expiration_date,
        }
    }

    /// See [`is_valid_cie`].
    pub fn is_valid(&self) -> bool {
        is_valid_cie(&self.serial, self.issue_date, self.expiration_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn serial_shape() {
        assert!(is_valid_cie_serial("AB12345CD"));
        assert!(is_valid_cie_serial("ab12345cd"));
        assert!(!is_valid_cie_serial("A123456CD"));
        assert!(!is_valid_cie_serial("AB1234CD"));
        assert!(!is_valid_cie_serial("AB12345C"));
        assert!(!is_valid_cie_serial(""));
    }

    #[test]
    fn valid_card() {
        assert!(is_valid_cie("AB12345CD", date(2022, 1, 1), date(2032, 1, 1)));
    }

    #[test]
    fn invalid_serial() {
        assert!(!is_valid_cie("A123456CD", date(2022, 1, 1), date(2032, 1, 1)));
    }

    #[test]
    fn issue_must_precede_expiration() {
        assert!(!is_valid_cie("AB12345CD", date(2032, 1, 1), date(2022, 1, 1)));
        assert!(!is_valid_cie("AB12345CD", date(2022, 1, 1), date(2022, 1, 1)));
    }

    #[test]
    fn missing_dates() {
        assert!(!is_valid_cie("AB12345CD", None, date(2032, 1, 1)));
        assert!(!is_valid_cie("AB12345CD", date(2022, 1, 1), None));
        assert!(!is_valid_cie("AB12345CD", None, None));
    }

    #[test]
    fn card_struct_serde() {
        let card = IdentityCard::new("CA00000AA", date(2021, 5, 3), date(2031, 5, 3));
        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains("\"issue_date\":\"2021-05-03\""));
        let back: IdentityCard = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
        assert!(back.is_valid());
    }
}
