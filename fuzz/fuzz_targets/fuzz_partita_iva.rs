#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = codici::piva::is_valid_partita_iva(s);
        // format → format must be stable.
        if let Ok(once) = codici::piva::format_partita_iva(s) {
            assert_eq!(codici::piva::format_partita_iva(&once).as_deref(), Ok(once.as_str()));
        }
        let _ = s.parse::<codici::piva::PartitaIva>();
        let _ = codici::piva::partita_iva_check_digit(s);
    }
});
