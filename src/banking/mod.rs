//! Banking identifiers: IBAN and SWIFT/BIC.
//!
//! # Example
//!
//! ```rust
//! use codici::banking::*;
//!
//! assert!(is_valid_iban("IT60X0542811101000000123456"));
//! assert!(!is_valid_iban("IT60X0542811101000000123450"));
//! assert_eq!(
//!     format_iban("IT60X0542811101000000123456").unwrap(),
//!     "IT60 X054 2811 1010 0000 0123 456"
//! );
//! assert!(is_valid_swift("BCITITMMXXX"));
//!
//! let iban: Iban = "IT60 X054 2811 1010 0000 0123 456".parse().unwrap();
//! assert_eq!(iban.country_code(), "IT");
//! assert_eq!(iban_length(iban.country_code()), Some(27));
//! ```

mod iban;
mod registry;
mod swift;

pub use iban::{Iban, format_iban, iban_check_digits, is_valid_iban};
pub use registry::{has_registered_length, iban_length};
pub use swift::is_valid_swift;
