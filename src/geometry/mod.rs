//! 2D geometry primitives for cover detection
//!
//! Pure segment/rectangle tests with no entity dependencies. Everything here
//! works in world-space f64 coordinates and treats endpoint touches and
//! collinear overlaps as intersections.

use serde::{Deserialize, Serialize};

/// Tolerance for collinearity and slab-boundary comparisons.
pub const EPSILON: f64 = 1e-6;

/// World-space coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned bounding box, invariant x1 <= x2 and y1 <= y2
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rect {
    /// Build a rect from any two opposite corners, normalizing the invariant.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }

    pub fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Length of the longer side, used as the coverage denominator.
    pub fn longer_side(&self) -> f64 {
        self.width().max(self.height())
    }

    /// Boundary-inclusive containment.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x1 - EPSILON
            && p.x <= self.x2 + EPSILON
            && p.y >= self.y1 - EPSILON
            && p.y <= self.y2 + EPSILON
    }

    /// The four corners in TL, TR, BR, BL order.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x1, self.y1),
            Point::new(self.x2, self.y1),
            Point::new(self.x2, self.y2),
            Point::new(self.x1, self.y2),
        ]
    }

    pub fn edges(&self) -> [(Point, Point); 4] {
        let [tl, tr, br, bl] = self.corners();
        [(tl, tr), (tr, br), (br, bl), (bl, tl)]
    }
}

/// Signed area of the triangle (a, b, c); sign gives the turn direction.
fn cross(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Do segments p1-p2 and q1-q2 intersect?
///
/// Endpoint touches count. Collinear segments count when their projected
/// intervals overlap within `EPSILON` (the zero-denominator case of the
/// parametric form).
pub fn segments_intersect(p1: Point, p2: Point, q1: Point, q2: Point) -> bool {
    let d1 = cross(q1, q2, p1);
    let d2 = cross(q1, q2, p2);
    let d3 = cross(p1, p2, q1);
    let d4 = cross(p1, p2, q2);

    if ((d1 > EPSILON && d2 < -EPSILON) || (d1 < -EPSILON && d2 > EPSILON))
        && ((d3 > EPSILON && d4 < -EPSILON) || (d3 < -EPSILON && d4 > EPSILON))
    {
        return true;
    }

    // Collinear or endpoint-touching cases
    (d1.abs() <= EPSILON && on_segment(q1, q2, p1))
        || (d2.abs() <= EPSILON && on_segment(q1, q2, p2))
        || (d3.abs() <= EPSILON && on_segment(p1, p2, q1))
        || (d4.abs() <= EPSILON && on_segment(p1, p2, q2))
}

/// Is point `p` (already known collinear with a-b) within the segment's box?
fn on_segment(a: Point, b: Point, p: Point) -> bool {
    p.x >= a.x.min(b.x) - EPSILON
        && p.x <= a.x.max(b.x) + EPSILON
        && p.y >= a.y.min(b.y) - EPSILON
        && p.y <= a.y.max(b.y) + EPSILON
}

/// Does segment p1-p2 touch rect at all?
///
/// True when either endpoint lies inside the rect or the segment crosses any
/// of the four edges.
pub fn segment_intersects_rect(p1: Point, p2: Point, rect: &Rect) -> bool {
    if rect.contains(p1) || rect.contains(p2) {
        return true;
    }
    rect.edges()
        .iter()
        .any(|&(a, b)| segments_intersect(p1, p2, a, b))
}

/// Euclidean length of the part of segment p1-p2 inside `rect`.
///
/// Liang–Barsky clip of the parametric range [0, 1] against the four slabs.
/// A zero direction component rejects only when the fixed coordinate lies
/// outside the corresponding slab.
pub fn segment_rect_intersection_length(p1: Point, p2: Point, rect: &Rect) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    let slabs = [
        (-dx, p1.x - rect.x1),
        (dx, rect.x2 - p1.x),
        (-dy, p1.y - rect.y1),
        (dy, rect.y2 - p1.y),
    ];

    for (p, q) in slabs {
        if p.abs() <= EPSILON {
            // Parallel to this slab: outside means no intersection at all
            if q < -EPSILON {
                return 0.0;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return 0.0;
                }
                if r > t0 {
                    t0 = r;
                }
            } else {
                if r < t0 {
                    return 0.0;
                }
                if r < t1 {
                    t1 = r;
                }
            }
        }
    }

    if t1 < t0 {
        return 0.0;
    }
    ((t1 - t0) * dx).hypot((t1 - t0) * dy)
}

/// Projection-clamped distance from `pt` to segment a-b.
pub fn distance_point_to_segment(pt: Point, a: Point, b: Point) -> f64 {
    let len_sq = (b.x - a.x).powi(2) + (b.y - a.y).powi(2);
    if len_sq <= EPSILON * EPSILON {
        return pt.distance(&a);
    }
    let t = ((pt.x - a.x) * (b.x - a.x) + (pt.y - a.y) * (b.y - a.y)) / len_sq;
    let t = t.clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y));
    pt.distance(&proj)
}
