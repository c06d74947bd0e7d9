//! Personal data: names, surnames, honorific titles, gender, and age.
//!
//! # Example
//!
//! ```rust
//! use codici::anagrafica::*;
//!
//! assert!(is_valid_name("Anna Maria"));
//! assert!(!is_valid_surname("Ros$si"));
//! assert_eq!(format_full_name(Some("Sig."), "Mario", "Rossi"), "Sig. Mario Rossi");
//! assert_eq!(get_initials("mario", "rossi"), "MR");
//! assert_eq!("Dott.".parse::<Title>().unwrap(), Title::Dottore);
//! ```

mod age;
mod names;
mod title;

pub use age::{ADULT_AGE, calculate_age, calculate_age_on, is_over_18, is_over_18_on};
pub use names::{
    format_full_name, get_initials, is_name_length_valid, is_valid_name, is_valid_surname,
    normalize_name,
};
pub use title::{Gender, Title, is_valid_gender, is_valid_title};
