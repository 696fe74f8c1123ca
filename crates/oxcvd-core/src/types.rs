//! Public API types for oxcvd

use crate::error::Error;
use std::str::FromStr;

/// Color vision deficiency type
///
/// Identifies which cone class is defective: L (long wavelength) for
/// protan, M (medium) for deutan, S (short) for tritan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deficiency {
    /// Defective L cones (red-green confusion)
    Protan,
    /// Defective M cones (red-green confusion)
    Deutan,
    /// Defective S cones (blue-yellow confusion)
    Tritan,
}

impl Deficiency {
    /// All three deficiency types
    pub const ALL: [Self; 3] = [Self::Protan, Self::Deutan, Self::Tritan];

    /// Lowercase name as used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::Protan => "protan",
            Self::Deutan => "deutan",
            Self::Tritan => "tritan",
        }
    }
}

impl FromStr for Deficiency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "protan" => Ok(Self::Protan),
            "deutan" => Ok(Self::Deutan),
            "tritan" => Ok(Self::Tritan),
            other => Err(Error::UnknownDeficiency(other.to_string())),
        }
    }
}

impl std::fmt::Display for Deficiency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Validate a severity value, failing fast outside [0, 1]
pub(crate) fn check_severity(severity: f32) -> crate::error::Result<()> {
    if (0.0..=1.0).contains(&severity) {
        Ok(())
    } else {
        Err(Error::SeverityOutOfRange { severity })
    }
}
