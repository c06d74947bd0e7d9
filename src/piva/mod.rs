//! Partita IVA (Italian VAT number) validation and formatting.
//!
//! A Partita IVA is 11 digits, optionally written with the "IT" country
//! prefix: a 7-digit company number, a 3-digit provincial office code and
//! a Luhn-style check digit.
//!
//! # Example
//!
//! ```rust
//! use codici::piva::*;
//!
//! assert!(is_valid_partita_iva("12345678903"));
//! assert!(is_valid_partita_iva("IT12345678903"));
//! assert!(!is_valid_partita_iva("12345678900"));
//!
//! assert_eq!(format_partita_iva("12345678903").unwrap(), "IT12345678903");
//! assert_eq!(partita_iva_check_digit("1234567890").unwrap(), 3);
//! ```

mod checksum;
mod format;

const KIND: &str = "Partita IVA";

pub use checksum::{is_valid_partita_iva, partita_iva_check_digit};
pub use format::{PartitaIva, format_partita_iva};
