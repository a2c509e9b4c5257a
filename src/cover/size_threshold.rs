//! Size-threshold evaluator (the `any` and `center` intersection modes)
//!
//! Any blocker footprint touching the center-to-center ray grants lesser
//! cover; a blocker that out-ranks BOTH principals by the configured size
//! margin grants standard. Greater is never produced here on its own: that
//! escalation is reserved for the wall merge in the orchestrator.

use ordered_float::OrderedFloat;

use crate::cover::{Anchor, CoverLevel, EvalContext};
use crate::geometry::{
    distance_point_to_segment, segment_intersects_rect, Point, Rect,
};
use crate::scene::adapter::token_rect;
use crate::scene::Token;

/// Does this blocker's rank exceed both principals' ranks by the margin?
fn out_ranks(blocker: &Token, observer: &Anchor, subject: &Token, margin: u8) -> bool {
    let rank = blocker.size.rank();
    let beats = |principal: Option<u8>| match principal {
        Some(p) => rank >= p.saturating_add(margin),
        // A bare-point principal imposes no rank constraint.
        None => true,
    };
    beats(observer.size_rank()) && beats(Some(subject.size.rank()))
}

fn blocker_rects<'a>(
    blockers: &[&'a Token],
    ctx: &EvalContext<'_>,
) -> Vec<(&'a Token, Rect)> {
    blockers
        .iter()
        .filter_map(|blocker| match token_rect(blocker, ctx.grid_unit) {
            Ok(rect) => Some((*blocker, rect)),
            Err(err) => {
                tracing::debug!("skipping malformed blocker: {}", err);
                None
            }
        })
        .collect()
}

/// `any` mode: every blocker whose footprint grazes the ray counts.
pub fn evaluate_any(
    observer: &Anchor<'_>,
    subject: &Token,
    blockers: &[&Token],
    ctx: &EvalContext<'_>,
) -> CoverLevel {
    let ray = center_ray(observer, subject, ctx);
    let mut level = CoverLevel::None;
    for (blocker, rect) in blocker_rects(blockers, ctx) {
        if !segment_intersects_rect(ray.0, ray.1, &rect) {
            continue;
        }
        if out_ranks(blocker, observer, subject, ctx.thresholds.size_rank_margin) {
            return CoverLevel::Standard;
        }
        level = CoverLevel::Lesser;
    }
    level
}

/// `center` mode: the exact center ray must intersect, and only the blocker
/// whose rect center is perpendicular-nearest to the ray is evaluated.
pub fn evaluate_center(
    observer: &Anchor<'_>,
    subject: &Token,
    blockers: &[&Token],
    ctx: &EvalContext<'_>,
) -> CoverLevel {
    let ray = center_ray(observer, subject, ctx);
    let nearest = blocker_rects(blockers, ctx)
        .into_iter()
        .filter(|(_, rect)| segment_intersects_rect(ray.0, ray.1, rect))
        .min_by_key(|(_, rect)| {
            OrderedFloat(distance_point_to_segment(rect.center(), ray.0, ray.1))
        });

    match nearest {
        Some((blocker, _))
            if out_ranks(blocker, observer, subject, ctx.thresholds.size_rank_margin) =>
        {
            CoverLevel::Standard
        }
        Some(_) => CoverLevel::Lesser,
        None => CoverLevel::None,
    }
}

fn center_ray(observer: &Anchor<'_>, subject: &Token, ctx: &EvalContext<'_>) -> (Point, Point) {
    (
        observer.center(ctx.grid_unit),
        crate::scene::adapter::token_center(subject, ctx.grid_unit),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CoverThresholds;
    use crate::scene::SizeCategory;

    fn ctx(thresholds: &CoverThresholds) -> EvalContext<'_> {
        EvalContext {
            grid_unit: 50.0,
            thresholds,
        }
    }

    fn medium(name: &str, x: f64, y: f64) -> Token {
        Token::creature(name, x, y, 1.0, SizeCategory::Medium)
    }

    // Observer centered at (25, 25), subject at (525, 25), blocker square
    // crossing the ray halfway.
    fn principals() -> (Token, Token) {
        (medium("observer", 0.0, 0.0), medium("subject", 500.0, 0.0))
    }

    #[test]
    fn test_any_mode_crossing_blocker_grants_lesser() {
        let thresholds = CoverThresholds::default();
        let (observer, subject) = principals();
        let blocker = medium("blocker", 250.0, 0.0);
        let level = evaluate_any(
            &Anchor::Token(&observer),
            &subject,
            &[&blocker],
            &ctx(&thresholds),
        );
        assert_eq!(level, CoverLevel::Lesser);
    }

    #[test]
    fn test_any_mode_oversized_blocker_grants_standard() {
        let thresholds = CoverThresholds::default();
        let (observer, subject) = principals();
        let blocker = Token::creature("dragon", 200.0, -50.0, 3.0, SizeCategory::Huge);
        let level = evaluate_any(
            &Anchor::Token(&observer),
            &subject,
            &[&blocker],
            &ctx(&thresholds),
        );
        assert_eq!(level, CoverLevel::Standard);
    }

    #[test]
    fn test_any_mode_off_ray_blocker_grants_none() {
        let thresholds = CoverThresholds::default();
        let (observer, subject) = principals();
        let blocker = medium("blocker", 250.0, 300.0);
        let level = evaluate_any(
            &Anchor::Token(&observer),
            &subject,
            &[&blocker],
            &ctx(&thresholds),
        );
        assert_eq!(level, CoverLevel::None);
    }

    #[test]
    fn test_one_rank_larger_is_still_lesser() {
        let thresholds = CoverThresholds::default();
        let (observer, subject) = principals();
        let blocker = Token::creature("ogre", 225.0, -25.0, 2.0, SizeCategory::Large);
        let level = evaluate_any(
            &Anchor::Token(&observer),
            &subject,
            &[&blocker],
            &ctx(&thresholds),
        );
        assert_eq!(level, CoverLevel::Lesser);
    }

    #[test]
    fn test_center_mode_evaluates_only_nearest_blocker() {
        let thresholds = CoverThresholds::default();
        let (observer, subject) = principals();
        // Huge blocker grazes the ray from above; a small one sits dead on it.
        let big = Token::creature("dragon", 150.0, -125.0, 3.0, SizeCategory::Huge);
        let near = medium("goblin", 300.0, 0.0);
        let level = evaluate_center(
            &Anchor::Token(&observer),
            &subject,
            &[&big, &near],
            &ctx(&thresholds),
        );
        // The on-ray medium blocker wins the tie-break, so only lesser.
        assert_eq!(level, CoverLevel::Lesser);
    }

    #[test]
    fn test_center_mode_no_intersection_is_none() {
        let thresholds = CoverThresholds::default();
        let (observer, subject) = principals();
        let blocker = medium("blocker", 250.0, 200.0);
        let level = evaluate_center(
            &Anchor::Token(&observer),
            &subject,
            &[&blocker],
            &ctx(&thresholds),
        );
        assert_eq!(level, CoverLevel::None);
    }

    #[test]
    fn test_point_observer_imposes_no_rank_constraint() {
        let thresholds = CoverThresholds::default();
        let subject = medium("subject", 500.0, 0.0);
        // Large out-ranks the medium subject by only 1: not enough.
        let large = Token::creature("ogre", 225.0, -25.0, 2.0, SizeCategory::Large);
        let level = evaluate_any(
            &Anchor::Point(Point::new(25.0, 25.0)),
            &subject,
            &[&large],
            &ctx(&thresholds),
        );
        assert_eq!(level, CoverLevel::Lesser);

        // Huge out-ranks the subject by 2; the point origin does not object.
        let huge = Token::creature("dragon", 200.0, -50.0, 3.0, SizeCategory::Huge);
        let level = evaluate_any(
            &Anchor::Point(Point::new(25.0, 25.0)),
            &subject,
            &[&huge],
            &ctx(&thresholds),
        );
        assert_eq!(level, CoverLevel::Standard);
    }

    #[test]
    fn test_malformed_blocker_skipped() {
        let thresholds = CoverThresholds::default();
        let (observer, subject) = principals();
        let mut broken = medium("broken", 250.0, 0.0);
        broken.x = f64::NAN;
        let level = evaluate_any(
            &Anchor::Token(&observer),
            &subject,
            &[&broken],
            &ctx(&thresholds),
        );
        assert_eq!(level, CoverLevel::None);
    }
}
