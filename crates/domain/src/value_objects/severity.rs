//! Alert severity classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentation bucket derived from a free-text alert severity label
///
/// Classification is total: any label that is not recognised falls through
/// to [`SeverityCategory::Neutral`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeverityCategory {
    /// "high" / "severe"
    Critical,
    /// "medium" / "moderate"
    Warning,
    /// "low" / "minor"
    Info,
    /// Anything else, including empty labels
    #[default]
    Neutral,
}

impl SeverityCategory {
    /// Classify a raw severity label (ASCII case-insensitive exact match)
    #[must_use]
    pub fn classify(label: &str) -> Self {
        const TABLE: [(&str, SeverityCategory); 6] = [
            ("high", SeverityCategory::Critical),
            ("severe", SeverityCategory::Critical),
            ("medium", SeverityCategory::Warning),
            ("moderate", SeverityCategory::Warning),
            ("low", SeverityCategory::Info),
            ("minor", SeverityCategory::Info),
        ];

        TABLE
            .iter()
            .find(|(name, _)| label.eq_ignore_ascii_case(name))
            .map_or(Self::Neutral, |(_, category)| *category)
    }

    /// Stable lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Neutral => "neutral",
        }
    }

    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Warning => "Warning",
            Self::Info => "Info",
            Self::Neutral => "Neutral",
        }
    }

    /// Get an emoji marker used in place of colour coding
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Critical => "🔴",
            Self::Warning => "🟠",
            Self::Info => "🔵",
            Self::Neutral => "⚪",
        }
    }

    /// Get all categories, most severe first
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Critical, Self::Warning, Self::Info, Self::Neutral]
    }
}

impl fmt::Display for SeverityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for SeverityCategory {
    fn from(label: &str) -> Self {
        Self::classify(label)
    }
}
