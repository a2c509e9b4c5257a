//! Coverage-percentage evaluator (the `coverage` intersection mode)
//!
//! How much of the center-to-center ray passes through each blocker,
//! measured against the blocker's longer side. The first blocker past the
//! greater threshold short-circuits.

use crate::cover::{Anchor, CoverLevel, EvalContext};
use crate::geometry::{segment_rect_intersection_length, EPSILON};
use crate::scene::adapter::{token_center, token_rect};
use crate::scene::Token;

pub fn evaluate(
    observer: &Anchor<'_>,
    subject: &Token,
    blockers: &[&Token],
    ctx: &EvalContext<'_>,
) -> CoverLevel {
    let a = observer.center(ctx.grid_unit);
    let b = token_center(subject, ctx.grid_unit);

    let mut level = CoverLevel::None;
    for blocker in blockers {
        let rect = match token_rect(blocker, ctx.grid_unit) {
            Ok(rect) => rect,
            Err(err) => {
                tracing::debug!("skipping malformed blocker: {}", err);
                continue;
            }
        };
        let side = rect.longer_side();
        if side <= EPSILON {
            continue;
        }
        let clipped = segment_rect_intersection_length(a, b, &rect);
        if clipped <= EPSILON {
            continue;
        }
        let pct = clipped / side * 100.0;
        if pct >= ctx.thresholds.coverage_greater_pct {
            return CoverLevel::Greater;
        }
        if pct >= ctx.thresholds.coverage_standard_pct {
            level = level.max(CoverLevel::Standard);
        } else {
            level = level.max(CoverLevel::Lesser);
        }
    }
    level
}
