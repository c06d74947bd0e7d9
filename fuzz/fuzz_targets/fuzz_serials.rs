#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = codici::cie::is_valid_cie_serial(s);
        let _ = codici::tessera::is_valid_hic_serial(s);
        let _ = codici::anagrafica::is_valid_name(s);
        let _ = codici::anagrafica::normalize_name(s);
        let _ = codici::anagrafica::get_initials(s, s);
        let _ = s.parse::<codici::anagrafica::Title>();
    }
});
