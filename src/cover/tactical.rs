//! Tactical corner evaluator (the `tactical` intersection mode)
//!
//! For each observer corner, count how many of the subject's four corners
//! have their connecting line blocked by a wall or a blocker footprint. The
//! attacker repositions to their least-obstructed corner, so the best
//! (lowest) per-corner level is the result.

use crate::cover::walls::wall_blocks_segment;
use crate::cover::{Anchor, CoverLevel, EvalContext};
use crate::geometry::{segment_rect_intersection_length, Point, Rect, EPSILON};
use crate::scene::adapter::{token_corners, token_rect};
use crate::scene::{Token, Wall};

pub fn evaluate(
    observer: &Anchor<'_>,
    subject: &Token,
    blockers: &[&Token],
    walls: &[Wall],
    ctx: &EvalContext<'_>,
) -> CoverLevel {
    let tiny_scale = ctx.thresholds.tiny_corner_scale;
    let observer_corners = observer.corners(ctx.grid_unit, tiny_scale);
    let subject_corners = match token_corners(subject, ctx.grid_unit, tiny_scale) {
        Ok(corners) => corners,
        Err(err) => {
            tracing::debug!("tactical evaluation without subject corners: {}", err);
            return CoverLevel::None;
        }
    };

    let rects: Vec<Rect> = blockers
        .iter()
        .filter_map(|blocker| match token_rect(blocker, ctx.grid_unit) {
            Ok(rect) => Some(rect),
            Err(err) => {
                tracing::debug!("skipping malformed blocker: {}", err);
                None
            }
        })
        .collect();

    observer_corners
        .iter()
        .map(|&from| {
            let blocked = subject_corners
                .iter()
                .filter(|&&to| line_blocked(from, to, &rects, walls))
                .count() as u8;
            level_for_blocked_lines(blocked, ctx)
        })
        .min()
        .unwrap_or(CoverLevel::None)
}

fn line_blocked(from: Point, to: Point, rects: &[Rect], walls: &[Wall]) -> bool {
    if wall_blocks_segment(from, to, walls) {
        return true;
    }
    rects
        .iter()
        .any(|rect| segment_rect_intersection_length(from, to, rect) > EPSILON)
}

fn level_for_blocked_lines(blocked: u8, ctx: &EvalContext<'_>) -> CoverLevel {
    if blocked >= ctx.thresholds.tactical_greater_lines {
        CoverLevel::Greater
    } else if blocked >= ctx.thresholds.tactical_standard_lines {
        CoverLevel::Standard
    } else if blocked >= 1 {
        CoverLevel::Lesser
    } else {
        CoverLevel::None
    }
}
