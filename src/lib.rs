//! # codici
//!
//! Validation and formatting helpers for Italian administrative identifiers:
//! personal names and titles, IBAN and SWIFT/BIC, Tessera Sanitaria serials,
//! CIE serials, and Partita IVA numbers.
//!
//! Every helper is a pure function. Boolean validators never fail; formatters
//! and typed parsers return [`CodiciError::InvalidArgument`] when their input
//! does not pass the matching validator.
//!
//! ## Quick Start
//!
//! ```rust
//! use codici::banking::{format_iban, is_valid_iban};
//! use codici::piva::{format_partita_iva, is_valid_partita_iva};
//!
//! assert!(is_valid_iban("IT60X0542811101000000123456"));
//! assert_eq!(
//!     format_iban("IT60X0542811101000000123456").unwrap(),
//!     "IT60 X054 2811 1010 0000 0123 456"
//! );
//!
//! assert!(is_valid_partita_iva("IT12345678903"));
//! assert_eq!(format_partita_iva("12345678903").unwrap(), "IT12345678903");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Error type, pattern table, date helpers |
//! | `anagrafica` | Names, surnames, titles, gender, age |
//! | `banking` | IBAN mod-97 check and grouping, SWIFT/BIC, IBAN length registry |
//! | `tessera` | Tessera Sanitaria (health insurance card) |
//! | `cie` | Carta d'Identità Elettronica |
//! | `piva` | Partita IVA check digit and formatting |
//! | `all` (default) | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "anagrafica")]
pub mod anagrafica;

#[cfg(feature = "banking")]
pub mod banking;

#[cfg(feature = "tessera")]
pub mod tessera;

#[cfg(feature = "cie")]
pub mod cie;

#[cfg(feature = "piva")]
pub mod piva;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
