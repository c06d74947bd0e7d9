#![cfg(feature = "piva")]

use codici::CodiciError;
use codici::piva::*;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn valid_without_prefix() {
    assert!(is_valid_partita_iva("12345678903"));
}

#[test]
fn valid_with_prefix() {
    assert!(is_valid_partita_iva("IT12345678903"));
}

#[test]
fn invalid_check_digit() {
    assert!(!is_valid_partita_iva("12345678900"));
}

#[test]
fn invalid_length() {
    assert!(!is_valid_partita_iva("1234567890"));
    assert!(!is_valid_partita_iva("IT123456789031"));
}

#[test]
fn lower_case_prefix_not_stripped() {
    assert!(!is_valid_partita_iva("it12345678903"));
}

#[test]
fn transposed_neighbours_detected() {
    // 12345678903 with digits 1 and 2 swapped
    assert!(!is_valid_partita_iva("21345678903"));
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[test]
fn format_adds_prefix() {
    assert_eq!(format_partita_iva("12345678903").unwrap(), "IT12345678903");
}

#[test]
fn format_is_idempotent() {
    let once = format_partita_iva("12345678903").unwrap();
    assert_eq!(format_partita_iva(&once).unwrap(), once);
}

#[test]
fn format_rejects_bad_shape() {
    match format_partita_iva("12345") {
        Err(CodiciError::InvalidArgument { kind, .. }) => assert_eq!(kind, "Partita IVA"),
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn format_accepts_bad_check_digit() {
    // Shape-only check: the formatter does not verify the check digit.
    assert_eq!(format_partita_iva("IT12345678900").unwrap(), "IT12345678900");
}

// ---------------------------------------------------------------------------
// Typed wrapper and check digit
// ---------------------------------------------------------------------------

#[test]
fn typed_accepts_surrounding_whitespace() {
    let piva: PartitaIva = "  IT12345678903 ".parse().unwrap();
    assert_eq!(piva.number(), "12345678903");
}

#[test]
fn typed_rejects_bad_check_digit() {
    assert!("IT12345678900".parse::<PartitaIva>().is_err());
}

#[test]
fn check_digit_completes_number() {
    let prefix = "0123456789";
    let check = partita_iva_check_digit(prefix).unwrap();
    let full = format!("{prefix}{check}");
    assert!(is_valid_partita_iva(&full));
    let piva: PartitaIva = full.parse().unwrap();
    assert_eq!(piva.check_digit(), check);
    assert_eq!(piva.office_code(), "789");
}
