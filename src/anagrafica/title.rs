//! Honorific titles and gender codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CodiciError, patterns};

/// Validate an Italian honorific title: exactly "Sig.", "Sig.ra" or "Dott.".
pub fn is_valid_title(title: &str) -> bool {
    patterns::TITLE.is_match(title)
}

/// Validate a gender code: "M" or "F", case-insensitive.
pub fn is_valid_gender(gender: &str) -> bool {
    gender.eq_ignore_ascii_case("M") || gender.eq_ignore_ascii_case("F")
}

/// Recognised honorific title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Title {
    /// "Sig."
    #[serde(rename = "Sig.")]
    Signore,
    /// "Sig.ra"
    #[serde(rename = "Sig.ra")]
    Signora,
    /// "Dott."
    #[serde(rename = "Dott.")]
    Dottore,
}

impl Title {
    /// The abbreviation as written before a name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Signore => "Sig.",
            Self::Signora => "Sig.ra",
            Self::Dottore => "Dott.",
        }
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Title {
    type Err = CodiciError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sig." => Ok(Self::Signore),
            "Sig.ra" => Ok(Self::Signora),
            "Dott." => Ok(Self::Dottore),
            _ => Err(CodiciError::invalid_argument(
                "title",
                s,
                "expected one of Sig., Sig.ra, Dott.",
            )),
        }
    }
}

/// Gender code as printed on Italian documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// "M"
    #[serde(rename = "M", alias = "m")]
    Male,
    /// "F"
    #[serde(rename = "F", alias = "f")]
    Female,
}

impl Gender {
    /// The single-letter code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = CodiciError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("M") {
            Ok(Self::Male)
        } else if s.eq_ignore_ascii_case("F") {
            Ok(Self::Female)
        } else {
            Err(CodiciError::invalid_argument("gender", s, "expected M or F"))
        }
    }
}
