//! Cover detection: level lattice, blocker filter, evaluators, orchestrator

pub mod coverage;
pub mod detector;
pub mod filter;
pub mod size_threshold;
pub mod tactical;
pub mod walls;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::scene::adapter;
use crate::scene::Token;

pub use detector::CoverDetector;
pub use filter::{eligible_blockers, AllVisible, VisibilityProvider};

/// How obstructed the line between two principals is.
///
/// Doubles as the precedence lattice when merging wall and token results:
/// the ordering is total and higher always wins.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CoverLevel {
    #[default]
    None,
    Lesser,
    Standard,
    Greater,
}

impl std::fmt::Display for CoverLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CoverLevel::None => "none",
            CoverLevel::Lesser => "lesser",
            CoverLevel::Standard => "standard",
            CoverLevel::Greater => "greater",
        };
        write!(f, "{}", label)
    }
}

/// A principal in a cover evaluation: either a full token or a bare point
/// (area-effect origins have a position but no footprint or faction).
#[derive(Debug, Clone, Copy)]
pub enum Anchor<'a> {
    Token(&'a Token),
    Point(Point),
}

impl<'a> Anchor<'a> {
    pub fn center(&self, grid_unit: f64) -> Point {
        match self {
            Anchor::Token(token) => adapter::token_center(token, grid_unit),
            Anchor::Point(p) => *p,
        }
    }

    /// Size rank, when the principal has a footprint.
    pub fn size_rank(&self) -> Option<u8> {
        match self {
            Anchor::Token(token) => Some(token.size.rank()),
            Anchor::Point(_) => None,
        }
    }

    pub fn token(&self) -> Option<&'a Token> {
        match *self {
            Anchor::Token(token) => Some(token),
            Anchor::Point(_) => None,
        }
    }

    /// Corner set for the tactical evaluator. A bare point contributes
    /// itself as the only corner.
    pub fn corners(&self, grid_unit: f64, tiny_scale: f64) -> Vec<Point> {
        match self {
            Anchor::Token(token) => match adapter::token_corners(token, grid_unit, tiny_scale) {
                Ok(corners) => corners.to_vec(),
                Err(_) => vec![self.center(grid_unit)],
            },
            Anchor::Point(p) => vec![*p],
        }
    }
}

/// Shared context threaded through the evaluators.
#[derive(Debug, Clone, Copy)]
pub struct EvalContext<'a> {
    pub grid_unit: f64,
    pub thresholds: &'a crate::core::config::CoverThresholds,
}
