//! Result card value object

use serde::{Deserialize, Serialize};

/// Normalized, domain-agnostic display unit (Value Object)
///
/// Every domain's raw result rows are mapped onto this shape by the
/// response normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultCard {
    pub title: String,
    pub description: String,
    pub location: String,
    /// Price (exhibition) or date (festival)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    /// Decorative icon, exhibition only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl ResultCard {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            location: location.into(),
            secondary: None,
            icon: None,
        }
    }

    /// Attach secondary text; blank text leaves it unset.
    pub fn with_secondary(mut self, secondary: impl Into<String>) -> Self {
        self.secondary = non_blank(secondary.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = non_blank(icon.into());
        self
    }
}

fn non_blank(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}
