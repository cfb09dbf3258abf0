//! The binary category each input records.

use std::fmt;
use std::str::FromStr;

use crate::error::{FragmentError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sexo {
    Male,
    Female,
}

impl Sexo {
    /// Both categories in render order.
    pub const ALL: [Sexo; 2] = [Sexo::Male, Sexo::Female];

    /// Lenient parse used by the form builders: `"M"` is male, anything
    /// else is female.
    pub fn from_marker(marker: &str) -> Self {
        if marker == "M" {
            Sexo::Male
        } else {
            Sexo::Female
        }
    }

    /// Strict parse. Accepts `M`/`F` in either case, surrounding whitespace
    /// ignored.
    pub fn parse_strict(marker: &str) -> Result<Self> {
        match marker.trim() {
            "M" | "m" => Ok(Sexo::Male),
            "F" | "f" => Ok(Sexo::Female),
            _ => Err(FragmentError::invalid_category(marker)),
        }
    }

    /// Marker used in element ids and `data-sexo`.
    pub fn marker(self) -> &'static str {
        match self {
            Sexo::Male => "M",
            Sexo::Female => "F",
        }
    }
}

impl FromStr for Sexo {
    type Err = FragmentError;

    fn from_str(s: &str) -> Result<Self> {
        Sexo::parse_strict(s)
    }
}

impl fmt::Display for Sexo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_marker_defaults_to_female() {
        assert_eq!(Sexo::from_marker("M"), Sexo::Male);
        assert_eq!(Sexo::from_marker("F"), Sexo::Female);
        assert_eq!(Sexo::from_marker("X"), Sexo::Female);
        assert_eq!(Sexo::from_marker(""), Sexo::Female);
        // lowercase is not the male marker on the lenient path
        assert_eq!(Sexo::from_marker("m"), Sexo::Female);
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        assert_eq!(" m ".parse::<Sexo>().unwrap(), Sexo::Male);
        assert_eq!("F".parse::<Sexo>().unwrap(), Sexo::Female);
        let err = "X".parse::<Sexo>().unwrap_err();
        assert!(matches!(err, FragmentError::InvalidCategory(ref m) if m == "X"));
        assert!(Sexo::parse_strict("").is_err());
    }

    #[test]
    fn display_matches_marker() {
        assert_eq!(Sexo::Male.to_string(), "M");
        assert_eq!(Sexo::Female.to_string(), "F");
    }
}
