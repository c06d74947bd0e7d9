use chrono::NaiveDate;
use codici::anagrafica::*;
use codici::banking::*;
use codici::cie::is_valid_cie;
use codici::piva::*;
use codici::tessera::is_valid_health_insurance_card;

fn main() {
    println!("=== IBAN ===\n");

    let ibans = [
        "IT60X0542811101000000123456",
        "IT60X0542811101000000123450", // wrong check digit
        "DE89370400440532013000",
        "IT60",                        // too short
    ];

    for iban in &ibans {
        match format_iban(iban) {
            Ok(grouped) => println!(
                "  {iban} => valid ({grouped}, registered length: {})",
                has_registered_length(iban)
            ),
            Err(e) => println!("  {iban} => INVALID: {e}"),
        }
    }

    println!("\n=== SWIFT/BIC ===\n");

    for bic in ["BCITITMM", "BCITITMMXXX", "BC1TITMM"] {
        println!("  {bic} => {}", is_valid_swift(bic));
    }

    println!("\n=== Partita IVA ===\n");

    for piva in ["12345678903", "IT12345678903", "12345678900", "12345"] {
        let formatted = format_partita_iva(piva)
            .unwrap_or_else(|e| format!("cannot format: {e}"));
        println!(
            "  {piva} => checksum ok: {}, formatted: {formatted}",
            is_valid_partita_iva(piva)
        );
    }

    println!("\n=== Anagrafica ===\n");

    let birth = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    println!(
        "  {} ({}) age {} adult={}",
        format_full_name(Some("Dott."), "Mario", "Rossi"),
        get_initials("Mario", "Rossi"),
        calculate_age(birth),
        is_over_18(birth)
    );

    println!("\n=== Cards ===\n");

    let expires = NaiveDate::from_ymd_opt(2032, 1, 1);
    println!(
        "  Tessera Sanitaria 80380001230012345678 => {}",
        is_valid_health_insurance_card("80380001230012345678", expires)
    );
    println!(
        "  CIE CA12345AB => {}",
        is_valid_cie("CA12345AB", NaiveDate::from_ymd_opt(2022, 1, 1), expires)
    );
}
