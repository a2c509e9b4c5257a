//! Creature size categories and rank ordering

use serde::{Deserialize, Serialize};

/// Semantic creature size, ordered smallest to largest.
///
/// The ordinal rank drives the size-threshold evaluator's "big enough to
/// grant standard cover" rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    Tiny,
    Small,
    #[default]
    Medium,
    Large,
    Huge,
    Gargantuan,
}

impl SizeCategory {
    /// Ordinal rank 0 (tiny) through 5 (gargantuan).
    pub fn rank(&self) -> u8 {
        match self {
            SizeCategory::Tiny => 0,
            SizeCategory::Small => 1,
            SizeCategory::Medium => 2,
            SizeCategory::Large => 3,
            SizeCategory::Huge => 4,
            SizeCategory::Gargantuan => 5,
        }
    }

    /// Parse a host size label, accepting common abbreviations. Unrecognized
    /// labels default to medium.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "tiny" | "tny" | "t" => SizeCategory::Tiny,
            "small" | "sm" | "s" => SizeCategory::Small,
            "medium" | "med" | "m" => SizeCategory::Medium,
            "large" | "lg" | "l" => SizeCategory::Large,
            "huge" | "hg" | "h" => SizeCategory::Huge,
            "gargantuan" | "grg" | "g" | "colossal" => SizeCategory::Gargantuan,
            _ => SizeCategory::Medium,
        }
    }
}
