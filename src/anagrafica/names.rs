//! Name and surname validation and formatting.

use crate::core::patterns;

/// Validate a given name: letters and spaces only, at least one character.
///
/// Spaces allow middle names and multi-part first names ("Anna Maria").
pub fn is_valid_name(name: &str) -> bool {
    patterns::NAME.is_match(name)
}

/// Validate a surname: letters only, at least one character.
pub fn is_valid_surname(surname: &str) -> bool {
    patterns::SURNAME.is_match(surname)
}

/// Join an optional title, a name and a surname with single spaces,
/// trimming the outer whitespace of the result.
pub fn format_full_name(title: Option<&str>, name: &str, surname: &str) -> String {
    let full = match title {
        Some(title) => format!("{title} {name} {surname}"),
        None => format!("{name} {surname}"),
    };
    full.trim().to_string()
}

/// Upper-cased first letters of name and surname.
///
/// An empty part contributes nothing, so the result has 0 to 2 letters
/// (more only if upper-casing expands a character, e.g. "ß").
pub fn get_initials(name: &str, surname: &str) -> String {
    [name, surname]
        .iter()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// First character upper-cased, the rest lower-cased.
///
/// An empty input is returned unchanged.
pub fn normalize_name(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Check that the name length, in characters, lies in `min..=max`.
pub fn is_name_length_valid(name: &str, min: usize, max: usize) -> bool {
    let len = name.chars().count();
    len >= min && len <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_allow_spaces() {
        assert!(is_valid_name("Mario"));
        assert!(is_valid_name("Anna Maria"));
        assert!(!is_valid_name("M@rio"));
        assert!(!is_valid_name(""));
    }

    #[test]
    fn surnames_reject_spaces() {
        assert!(is_valid_surname("Rossi"));
        assert!(!is_valid_surname("De Luca"));
        assert!(!is_valid_surname("Ros$si"));
        assert!(!is_valid_surname(""));
    }

    #[test]
    fn accented_letters_are_not_letters_here() {
        assert!(!is_valid_name("Niccolò"));
        assert!(!is_valid_surname("Pavé"));
    }

    #[test]
    fn full_name_with_and_without_title() {
        assert_eq!(
            format_full_name(Some("Sig."), "Mario", "Rossi"),
            "Sig. Mario Rossi"
        );
        assert_eq!(format_full_name(None, "Anna", "Verdi"), "Anna Verdi");
    }

    #[test]
    fn full_name_trims_outer_space_only() {
        assert_eq!(format_full_name(None, "", "Verdi"), "Verdi");
        assert_eq!(format_full_name(Some("Dott."), "Anna", ""), "Dott. Anna");
    }

    #[test]
    fn initials() {
        assert_eq!(get_initials("Mario", "Rossi"), "MR");
        assert_eq!(get_initials("anna", "verdi"), "AV");
        assert_eq!(get_initials("", "Verdi"), "V");
        assert_eq!(get_initials("", ""), "");
    }

    #[test]
    fn normalize() {
        assert_eq!(normalize_name("mario"), "Mario");
        assert_eq!(normalize_name("ANNA"), "Anna");
        assert_eq!(normalize_name("dE lUCA"), "De luca");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(is_name_length_valid("Mario", 2, 10));
        assert!(is_name_length_valid("Mo", 2, 10));
        assert!(!is_name_length_valid("M", 2, 10));
        assert!(!is_name_length_valid("Mariorossigiuseppe", 2, 10));
    }
}
