//! Recommendation domain tag

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The recommendation category a flow runs against.
///
/// Selected once when the flow leaves the home step and fixed until restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Exhibition,
    Festival,
    Tour,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Exhibition, Domain::Festival, Domain::Tour];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Exhibition => "exhibition",
            Domain::Festival => "festival",
            Domain::Tour => "tour",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Domain {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Domain::ALL
            .into_iter()
            .find(|d| d.as_str() == needle)
            .ok_or_else(|| DomainError::UnknownDomain(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Festival".parse::<Domain>().unwrap(), Domain::Festival);
        assert_eq!(" tour ".parse::<Domain>().unwrap(), Domain::Tour);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "concert".parse::<Domain>().unwrap_err();
        assert_eq!(err, DomainError::UnknownDomain("concert".to_string()));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Domain::Exhibition).unwrap();
        assert_eq!(json, "\"exhibition\"");
    }
}
