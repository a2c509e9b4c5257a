//! Wall evaluator - independent of token blockers
//!
//! A blocking wall segment crossing the line of effect grants standard
//! cover; walls never grant more than standard on their own.

use crate::cover::CoverLevel;
use crate::geometry::{segments_intersect, Point};
use crate::scene::Wall;

/// Is the segment a-b blocked by any wall? Open doors and cover-exempt
/// walls are transparent; malformed walls are skipped.
pub fn wall_blocks_segment(a: Point, b: Point, walls: &[Wall]) -> bool {
    walls.iter().any(|wall| {
        if !wall.blocks() {
            return false;
        }
        match wall.segment() {
            Ok((w1, w2)) => segments_intersect(a, b, w1, w2),
            Err(err) => {
                tracing::debug!("skipping malformed wall: {}", err);
                false
            }
        }
    })
}

/// Wall cover over the center-to-center segment.
pub fn evaluate(a: Point, b: Point, walls: &[Wall]) -> CoverLevel {
    if wall_blocks_segment(a, b, walls) {
        CoverLevel::Standard
    } else {
        CoverLevel::None
    }
}
