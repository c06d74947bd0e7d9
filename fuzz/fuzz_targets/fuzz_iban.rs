#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        let valid = codici::banking::is_valid_iban(s);
        assert_eq!(codici::banking::format_iban(s).is_ok(), valid);
        if let Ok(iban) = s.parse::<codici::banking::Iban>() {
            assert!(codici::banking::is_valid_iban(iban.as_str()));
        }
        let _ = codici::banking::has_registered_length(s);
        let _ = codici::banking::is_valid_swift(s);
    }
});
