//! Token snapshot read from the host scene
//!
//! The detector never mutates tokens; it reads a fresh snapshot at each
//! evaluation. All host-document quirks (legacy condition shapes, loose size
//! labels) are absorbed here so the evaluators see a clean model.

use serde::{Deserialize, Serialize};

use crate::core::types::TokenId;
use crate::scene::size::SizeCategory;

/// Broad actor category. Loot piles and hazards never block lines of effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    #[default]
    Creature,
    Vehicle,
    Loot,
    Hazard,
}

impl TokenKind {
    /// Can this kind of actor contribute cover at all?
    pub fn can_block(&self) -> bool {
        !matches!(self, TokenKind::Loot | TokenKind::Hazard)
    }
}

/// One entry of the structured condition list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    pub slug: String,
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

/// Snapshot of a token-like scene entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Token {
    pub id: TokenId,
    pub name: String,
    /// Top-left corner, world units.
    pub x: f64,
    pub y: f64,
    /// Footprint in grid units.
    pub width: f64,
    pub height: f64,
    pub size: SizeCategory,
    pub kind: TokenKind,
    /// Host-hidden (GM-invisible). Always excluded from cover.
    pub hidden: bool,
    /// Current vitality resource. `Some(0)` is the dead check.
    pub hit_points: Option<i32>,
    /// Faction tag for the ally filter.
    pub alliance: Option<String>,
    /// Explicit "do not count me as cover" opt-out.
    pub ignore_as_cover: bool,
    /// Structured condition list.
    pub conditions: Vec<Condition>,
    /// Legacy flat condition slugs; older host documents still carry these.
    pub condition_slugs: Vec<String>,
}

impl Default for Token {
    fn default() -> Self {
        Self {
            id: TokenId::new(),
            name: String::new(),
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
            size: SizeCategory::default(),
            kind: TokenKind::default(),
            hidden: false,
            hit_points: None,
            alliance: None,
            ignore_as_cover: false,
            conditions: Vec::new(),
            condition_slugs: Vec::new(),
        }
    }
}

impl Token {
    /// Convenience constructor for a creature at a position with a square
    /// footprint of `units` grid units.
    pub fn creature(name: &str, x: f64, y: f64, units: f64, size: SizeCategory) -> Self {
        Self {
            name: name.to_string(),
            x,
            y,
            width: units,
            height: units,
            size,
            ..Self::default()
        }
    }

    /// Vitality resource is exactly zero.
    pub fn is_dead(&self) -> bool {
        self.hit_points == Some(0)
    }

    /// Condition lookup over both the structured list and the legacy flat
    /// slug list.
    pub fn has_condition(&self, slug: &str) -> bool {
        self.conditions
            .iter()
            .any(|c| c.active && c.slug.eq_ignore_ascii_case(slug))
            || self
                .condition_slugs
                .iter()
                .any(|s| s.eq_ignore_ascii_case(slug))
    }

    /// Prone or an equivalent low-to-the-ground condition.
    pub fn is_prone(&self) -> bool {
        self.has_condition("prone")
    }
}
