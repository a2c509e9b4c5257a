//! Cover detector - orchestrates filter, evaluators, and the wall merge
//!
//! The public contract: detection always returns a valid `CoverLevel`.
//! Malformed geometry is skipped, missing principals short-circuit to no
//! cover, and a manually supplied cover level always wins over detection.

use crate::core::config::{DetectionConfig, IntersectionMode};
use crate::core::types::TokenId;
use crate::cover::filter::{eligible_blockers, AllVisible, VisibilityProvider};
use crate::cover::{coverage, size_threshold, tactical, walls};
use crate::cover::{Anchor, CoverLevel, EvalContext};
use crate::geometry::Point;
use crate::scene::adapter::{boundary_points, token_center};
use crate::scene::{Scene, Token};

pub struct CoverDetector<'a> {
    config: &'a DetectionConfig,
    visibility: &'a dyn VisibilityProvider,
}

impl<'a> CoverDetector<'a> {
    pub fn new(config: &'a DetectionConfig) -> Self {
        Self {
            config,
            visibility: &AllVisible,
        }
    }

    /// Replace the default everything-is-visible provider with the host's
    /// detection relation.
    pub fn with_visibility(config: &'a DetectionConfig, visibility: &'a dyn VisibilityProvider) -> Self {
        Self { config, visibility }
    }

    /// Cover between an observer anchor and a subject token.
    ///
    /// `manual` is a host-side override: when present it is returned
    /// unchanged and no detection runs.
    pub fn detect(
        &self,
        scene: &Scene,
        observer: Anchor<'_>,
        subject: &Token,
        manual: Option<CoverLevel>,
    ) -> CoverLevel {
        if let Some(level) = manual {
            return level;
        }

        // Self-cover: a token never has cover from itself.
        if observer.token().map(|t| t.id) == Some(subject.id) {
            return CoverLevel::None;
        }

        let ctx = EvalContext {
            grid_unit: scene.grid_unit,
            thresholds: &self.config.thresholds,
        };

        // Wall cover always runs on the straight center-to-center segment,
        // even for bare-point origins.
        let a = observer.center(scene.grid_unit);
        let b = token_center(subject, scene.grid_unit);
        let wall_cover = walls::evaluate(a, b, &scene.walls);

        let blockers = eligible_blockers(
            observer.token(),
            subject,
            &scene.tokens,
            self.config,
            self.visibility,
        );

        let token_cover = match self.config.mode {
            IntersectionMode::Any => {
                size_threshold::evaluate_any(&observer, subject, &blockers, &ctx)
            }
            IntersectionMode::Center => {
                size_threshold::evaluate_center(&observer, subject, &blockers, &ctx)
            }
            IntersectionMode::Coverage => coverage::evaluate(&observer, subject, &blockers, &ctx),
            IntersectionMode::Tactical => {
                tactical::evaluate(&observer, subject, &blockers, &scene.walls, &ctx)
            }
        };

        let merged = merge(wall_cover, token_cover);
        tracing::trace!(
            wall = %wall_cover,
            tokens = %token_cover,
            result = %merged,
            "cover evaluated"
        );
        merged
    }

    /// Resolve both principals by id. A missing principal is not an error:
    /// the result is simply no cover.
    pub fn detect_between(
        &self,
        scene: &Scene,
        observer_id: TokenId,
        subject_id: TokenId,
    ) -> CoverLevel {
        let (Some(observer), Some(subject)) = (scene.token(observer_id), scene.token(subject_id))
        else {
            return CoverLevel::None;
        };
        self.detect(scene, Anchor::Token(observer), subject, None)
    }

    /// The first boundary-point ray between observer and subject that no
    /// wall or eligible blocker obstructs. Scans all corner/midpoint/center
    /// pairs in adapter order.
    pub fn clearest_ray(
        &self,
        scene: &Scene,
        observer: &Token,
        subject: &Token,
    ) -> Option<(Point, Point)> {
        let blockers = eligible_blockers(
            Some(observer),
            subject,
            &scene.tokens,
            self.config,
            self.visibility,
        );
        let rects: Vec<_> = blockers
            .iter()
            .filter_map(|b| crate::scene::adapter::token_rect(b, scene.grid_unit).ok())
            .collect();

        for from in boundary_points(observer, scene.grid_unit) {
            for to in boundary_points(subject, scene.grid_unit) {
                let wall_blocked = walls::wall_blocks_segment(from, to, &scene.walls);
                let token_blocked = rects
                    .iter()
                    .any(|rect| crate::geometry::segment_intersects_rect(from, to, rect));
                if !wall_blocked && !token_blocked {
                    return Some((from, to));
                }
            }
        }
        None
    }
}

/// Merge wall and token cover.
///
/// A wall alone never escalates past standard; a wall combined with token
/// cover of at least standard (an out-ranking blocker, or heavy coverage)
/// escalates to greater.
fn merge(wall_cover: CoverLevel, token_cover: CoverLevel) -> CoverLevel {
    if wall_cover >= CoverLevel::Standard {
        if token_cover >= CoverLevel::Standard {
            CoverLevel::Greater
        } else {
            CoverLevel::Standard
        }
    } else {
        token_cover
    }
}
