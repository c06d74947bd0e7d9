//! SWIFT/BIC structure validation.

use crate::core::patterns;

/// Validate a SWIFT/BIC code.
///
/// 4-letter institution code, 2-letter country code, 2-character location
/// code, and an optional 3-character branch code (8 or 11 characters total).
/// Only upper-case input is accepted.
pub fn is_valid_swift(swift: &str) -> bool {
    patterns::SWIFT.is_match(swift)
}
