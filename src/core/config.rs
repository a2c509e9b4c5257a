//! Detection configuration with documented constants
//!
//! All tunable values are collected here with explanations of their purpose.
//! The numeric thresholds encode a specific ruleset's house rules; hosts that
//! run a different table variant override them in a TOML config file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::TokenId;

/// Geometric strategy used to decide whether/how much a blocker counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntersectionMode {
    /// Any graze of the center-to-center ray against a blocker footprint counts.
    #[default]
    Any,
    /// The exact center ray must intersect; only the perpendicular-nearest
    /// blocker is evaluated.
    Center,
    /// Percentage of the blocker's longer side covered by the clipped ray.
    Coverage,
    /// Corner-to-corner evaluation, best observer corner wins.
    Tactical,
}

/// Which candidate entities are allowed to contribute cover.
///
/// Every toggle defaults to off: the conservative baseline counts everything
/// the host has not hidden.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterToggles {
    /// Skip candidates the perspective token cannot currently detect.
    pub ignore_undetected: bool,
    /// Skip candidates whose vitality resource is exactly zero.
    pub ignore_dead: bool,
    /// Skip candidates sharing the observer's faction tag.
    pub ignore_allies: bool,
    /// Honor a candidate's explicit "do not count me as cover" flag.
    pub respect_exemption_flag: bool,
    /// Let prone candidates block. Off by default: a prone body is too low
    /// to hide behind.
    pub allow_prone_blockers: bool,
}

/// Numeric thresholds for the evaluators.
///
/// These values are taken directly from the observed table ruleset. They
/// interact: `coverage_greater_pct` must stay above `coverage_standard_pct`,
/// and `tactical_greater_lines` is the full corner count (4).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverThresholds {
    /// Coverage mode: percentage of the blocker's longer side at which the
    /// blocker grants standard cover.
    pub coverage_standard_pct: f64,
    /// Coverage mode: percentage at which the blocker grants greater cover.
    /// First blocker crossing this short-circuits evaluation.
    pub coverage_greater_pct: f64,
    /// Size-threshold mode: how many size ranks a blocker must exceed BOTH
    /// principals by to grant standard (rather than lesser) cover.
    pub size_rank_margin: u8,
    /// Tactical mode: blocked corner-lines (out of 4) for standard cover.
    pub tactical_standard_lines: u8,
    /// Tactical mode: blocked corner-lines (out of 4) for greater cover.
    pub tactical_greater_lines: u8,
    /// Fraction of a grid unit used for the corner box of the smallest size
    /// rank. A minimal-footprint creature should not project full-square
    /// corners.
    pub tiny_corner_scale: f64,
}

impl Default for CoverThresholds {
    fn default() -> Self {
        Self {
            coverage_standard_pct: 50.0,
            coverage_greater_pct: 70.0,
            size_rank_margin: 2,
            tactical_standard_lines: 2,
            tactical_greater_lines: 4,
            tiny_corner_scale: 0.7,
        }
    }
}

/// Immutable evaluation configuration passed to the detector.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Which geometric strategy evaluates token blockers.
    pub mode: IntersectionMode,
    /// Blocker filter toggles.
    pub filters: FilterToggles,
    /// Faction of the acting principal, used by the ally filter when the
    /// observer is a bare point (area-effect origins have no faction of
    /// their own).
    pub acting_faction: Option<String>,
    /// Token whose senses answer visibility queries. Defaults to the
    /// observer when unset.
    pub perspective: Option<TokenId>,
    /// Ruleset thresholds.
    pub thresholds: CoverThresholds,
}

impl DetectionConfig {
    /// Parse a TOML config string. Missing fields take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config file. A missing file is not an error: detection falls
    /// back to the conservative defaults (any-mode, no filters).
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
