//! Entity adapters - bridge host token documents to plain geometry
//!
//! Everything downstream (filters, evaluators, orchestrator) works on the
//! rects and point sets produced here; this is the only place that touches
//! raw token fields, so host-document duck-typing stays in one file.

use crate::core::error::{CoverError, Result};
use crate::geometry::{Point, Rect};
use crate::scene::size::SizeCategory;
use crate::scene::token::Token;

/// Footprint rect of a token: top-left position plus size in grid units.
pub fn token_rect(token: &Token, grid_unit: f64) -> Result<Rect> {
    let x2 = token.x + token.width * grid_unit;
    let y2 = token.y + token.height * grid_unit;
    if ![token.x, token.y, x2, y2, grid_unit].iter().all(|v| v.is_finite()) || grid_unit <= 0.0 {
        return Err(CoverError::MalformedGeometry(format!(
            "token '{}' at ({}, {}) with footprint {}x{} (grid unit {})",
            token.name, token.x, token.y, token.width, token.height, grid_unit
        )));
    }
    Ok(Rect::new(token.x, token.y, x2, y2))
}

/// Center of a token's footprint, falling back to its raw position when the
/// footprint cannot be resolved.
pub fn token_center(token: &Token, grid_unit: f64) -> Point {
    match token_rect(token, grid_unit) {
        Ok(rect) => rect.center(),
        Err(_) => Point::new(token.x, token.y),
    }
}

/// The nine boundary points used for any-corner-pair ray casting, in fixed
/// order: four corners (TL, TR, BR, BL), four edge midpoints (top, right,
/// bottom, left), then the center.
///
/// Falls back to a single-point list holding the token's center when the
/// footprint cannot be resolved.
pub fn boundary_points(token: &Token, grid_unit: f64) -> Vec<Point> {
    let rect = match token_rect(token, grid_unit) {
        Ok(rect) => rect,
        Err(_) => return vec![token_center(token, grid_unit)],
    };
    let [tl, tr, br, bl] = rect.corners();
    vec![
        tl,
        tr,
        br,
        bl,
        Point::new(rect.center().x, rect.y1),
        Point::new(rect.x2, rect.center().y),
        Point::new(rect.center().x, rect.y2),
        Point::new(rect.x1, rect.center().y),
        rect.center(),
    ]
}

/// The four corners used by the tactical evaluator.
///
/// Tokens of the smallest size rank get a reduced corner box
/// (`tiny_scale` of one grid unit, centered on the token) instead of their
/// full grid square.
pub fn token_corners(token: &Token, grid_unit: f64, tiny_scale: f64) -> Result<[Point; 4]> {
    let rect = token_rect(token, grid_unit)?;
    if token.size == SizeCategory::Tiny {
        let half = grid_unit * tiny_scale / 2.0;
        let c = rect.center();
        let reduced = Rect::new(c.x - half, c.y - half, c.x + half, c.y + half);
        return Ok(reduced.corners());
    }
    Ok(rect.corners())
}
