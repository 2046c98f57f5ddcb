// Copyright 2026 the Wireview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wireview Clip: Cohen–Sutherland clipping against an axis-aligned rectangle.
//!
//! The viewing pipeline maps world geometry into a normalized square
//! `[-1, 1] × [-1, 1]` before clipping, so [`ClipRect::NORMALIZED`] is the
//! default region. Arbitrary rectangles are supported for callers that clip
//! in other spaces.
//!
//! ```rust
//! use kurbo::{Line, Point};
//! use wireview_clip::ClipRect;
//!
//! let clip = ClipRect::NORMALIZED;
//! let line = Line::new((-2.0, 0.0), (2.0, 0.0));
//! let clipped = clip.clip_segment(line).unwrap();
//! assert_eq!(clipped.p0, Point::new(-1.0, 0.0));
//! assert_eq!(clipped.p1, Point::new(1.0, 0.0));
//!
//! assert!(clip.clip_segment(Line::new((5.0, -3.0), (5.0, 3.0))).is_none());
//! ```
//!
//! Only segments and points are clipped. Polygons are handled edge by edge
//! (see [`polyline_edges`]); a polygon cut by the boundary is not re-closed.
//!
//! This crate is `no_std`.

#![no_std]

use bitflags::bitflags;
use kurbo::{Line, Point, Rect};

bitflags! {
    /// Position of a point relative to a clip rectangle.
    ///
    /// Each bit marks one boundary the point lies beyond. The empty code
    /// means the point is inside (boundaries inclusive). Bits are ordered so
    /// that the lowest set bit gives the boundary test order used by
    /// [`ClipRect::clip_segment`]: top, bottom, right, left.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Outcode: u8 {
        /// `y` is above the maximum Y boundary.
        const TOP = 0b0001;
        /// `y` is below the minimum Y boundary.
        const BOTTOM = 0b0010;
        /// `x` is beyond the maximum X boundary.
        const RIGHT = 0b0100;
        /// `x` is beyond the minimum X boundary.
        const LEFT = 0b1000;
    }
}

impl Outcode {
    /// Code of a point inside the rectangle.
    pub const INSIDE: Self = Self::empty();

    /// Boundaries in the order they are tested during clipping.
    const TEST_ORDER: [Self; 4] = [Self::TOP, Self::BOTTOM, Self::RIGHT, Self::LEFT];

    /// Returns `true` if the code marks no boundary.
    #[must_use]
    pub fn is_inside(self) -> bool {
        self.is_empty()
    }
}

/// Upper bound on boundary intersections per segment.
///
/// Every iteration clears at least one bit of a finite segment, so valid
/// input finishes in at most four; the cap stops non-finite input.
const MAX_ITERATIONS: usize = 8;

/// An axis-aligned clip rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipRect {
    bounds: Rect,
}

impl ClipRect {
    /// The normalized square `[-1, 1] × [-1, 1]`.
    pub const NORMALIZED: Self = Self {
        bounds: Rect::new(-1.0, -1.0, 1.0, 1.0),
    };

    /// Creates a clip region from `bounds`.
    ///
    /// The rectangle is normalized so that `x0 <= x1` and `y0 <= y1`.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds: bounds.abs(),
        }
    }

    /// Returns the clip bounds.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Classifies `p` against the four boundaries.
    #[must_use]
    pub fn outcode(&self, p: Point) -> Outcode {
        let mut code = Outcode::INSIDE;
        if p.y > self.bounds.y1 {
            code |= Outcode::TOP;
        } else if p.y < self.bounds.y0 {
            code |= Outcode::BOTTOM;
        }
        if p.x > self.bounds.x1 {
            code |= Outcode::RIGHT;
        } else if p.x < self.bounds.x0 {
            code |= Outcode::LEFT;
        }
        code
    }

    /// Returns `true` iff `p` lies inside the rectangle (boundaries inclusive).
    #[must_use]
    pub fn clip_point(&self, p: Point) -> bool {
        self.outcode(p).is_inside()
    }

    /// Clips `line` to the rectangle.
    ///
    /// Returns `None` when no part of the segment is visible. Endpoints
    /// already inside are returned unchanged; the direction of the segment
    /// is preserved.
    #[must_use]
    pub fn clip_segment(&self, line: Line) -> Option<Line> {
        let (mut p0, mut p1) = (line.p0, line.p1);
        let mut code0 = self.outcode(p0);
        let mut code1 = self.outcode(p1);

        for _ in 0..MAX_ITERATIONS {
            if (code0 | code1).is_inside() {
                return Some(Line::new(p0, p1));
            }
            if code0.intersects(code1) {
                // Both endpoints lie beyond the same boundary.
                return None;
            }

            if !code0.is_inside() {
                p0 = self.boundary_hit(p0, p1, code0)?;
                code0 = self.outcode(p0);
            } else {
                p1 = self.boundary_hit(p1, p0, code1)?;
                code1 = self.outcode(p1);
            }
        }

        None
    }

    /// Intersects the segment `outside -> other` with the first boundary in
    /// `code`, skipping boundaries the segment runs parallel to.
    fn boundary_hit(&self, outside: Point, other: Point, code: Outcode) -> Option<Point> {
        let d = other - outside;
        let b = self.bounds;
        for edge in Outcode::TEST_ORDER {
            if !code.contains(edge) {
                continue;
            }
            let hit = if edge == Outcode::TOP || edge == Outcode::BOTTOM {
                if d.y == 0.0 {
                    continue;
                }
                let y = if edge == Outcode::TOP { b.y1 } else { b.y0 };
                Point::new(outside.x + d.x * (y - outside.y) / d.y, y)
            } else {
                if d.x == 0.0 {
                    continue;
                }
                let x = if edge == Outcode::RIGHT { b.x1 } else { b.x0 };
                Point::new(x, outside.y + d.y * (x - outside.x) / d.x)
            };
            return Some(hit);
        }
        None
    }
}

impl Default for ClipRect {
    fn default() -> Self {
        Self::NORMALIZED
    }
}

/// Returns the edges of a vertex chain: consecutive pairs, plus the closing
/// edge from the last vertex back to the first when `closed` is set and the
/// chain has at least three vertices.
pub fn polyline_edges(points: &[Point], closed: bool) -> impl Iterator<Item = Line> + '_ {
    let closing = match points {
        [first, .., last] if closed && points.len() > 2 => Some(Line::new(*last, *first)),
        _ => None,
    };
    points
        .windows(2)
        .map(|pair| Line::new(pair[0], pair[1]))
        .chain(closing)
}

#[cfg(test)]
mod tests {
    use kurbo::{Line, Point, Rect};

    use super::{ClipRect, Outcode, polyline_edges};

    const EPS: f64 = 1e-12;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn outcode_bits_are_independent() {
        let clip = ClipRect::NORMALIZED;
        assert_eq!(clip.outcode(Point::new(0.0, 0.0)), Outcode::INSIDE);
        assert_eq!(clip.outcode(Point::new(-2.0, 0.0)), Outcode::LEFT);
        assert_eq!(clip.outcode(Point::new(2.0, 0.0)), Outcode::RIGHT);
        assert_eq!(clip.outcode(Point::new(0.0, -2.0)), Outcode::BOTTOM);
        assert_eq!(clip.outcode(Point::new(0.0, 2.0)), Outcode::TOP);
        assert_eq!(
            clip.outcode(Point::new(3.0, 3.0)),
            Outcode::TOP | Outcode::RIGHT
        );
        // Boundaries are inclusive.
        assert!(clip.clip_point(Point::new(1.0, -1.0)));
    }

    #[test]
    fn segment_beyond_one_boundary_is_rejected() {
        let clip = ClipRect::NORMALIZED;
        assert!(
            clip.clip_segment(Line::new((5.0, -3.0), (5.0, 3.0)))
                .is_none()
        );
        assert!(
            clip.clip_segment(Line::new((5.0, 0.0), (5.0, 0.5)))
                .is_none()
        );
    }

    #[test]
    fn crossing_segment_is_trimmed_to_boundaries() {
        let clipped = ClipRect::NORMALIZED
            .clip_segment(Line::new((-2.0, 0.0), (2.0, 0.0)))
            .unwrap();
        assert_eq!(clipped.p0, Point::new(-1.0, 0.0));
        assert_eq!(clipped.p1, Point::new(1.0, 0.0));
    }

    #[test]
    fn inside_segment_is_unchanged() {
        let line = Line::new((-0.5, 0.25), (0.75, -0.9));
        assert_eq!(ClipRect::NORMALIZED.clip_segment(line), Some(line));
    }

    #[test]
    fn diagonal_through_corner_region() {
        // Enters through the left edge and leaves through the top edge.
        let clipped = ClipRect::NORMALIZED
            .clip_segment(Line::new((-2.0, 0.0), (0.0, 2.0)))
            .unwrap();
        assert!(close(clipped.p0, Point::new(-1.0, 1.0)));
        assert!(close(clipped.p1, Point::new(-1.0, 1.0)));

        let clipped = ClipRect::NORMALIZED
            .clip_segment(Line::new((-3.0, -1.0), (1.0, 3.0)))
            .unwrap();
        assert!(close(clipped.p0, Point::new(-1.0, 1.0)));
        assert!(close(clipped.p1, Point::new(-1.0, 1.0)));
    }

    #[test]
    fn segment_missing_the_corner_is_rejected() {
        // Passes outside the top-left corner without touching the square.
        let line = Line::new((-3.0, 0.0), (0.0, 3.0));
        assert!(ClipRect::NORMALIZED.clip_segment(line).is_none());
    }

    #[test]
    fn one_endpoint_inside_keeps_it() {
        let clipped = ClipRect::NORMALIZED
            .clip_segment(Line::new((0.0, 0.0), (0.0, 4.0)))
            .unwrap();
        assert_eq!(clipped.p0, Point::new(0.0, 0.0));
        assert_eq!(clipped.p1, Point::new(0.0, 1.0));
    }

    #[test]
    fn non_finite_input_does_not_loop() {
        let line = Line::new((f64::INFINITY, 0.0), (0.0, f64::NEG_INFINITY));
        // Either result is acceptable; it just has to finish.
        let _ = ClipRect::NORMALIZED.clip_segment(line);
    }

    #[test]
    fn custom_bounds_are_normalized() {
        let clip = ClipRect::new(Rect::new(10.0, 10.0, 0.0, 0.0));
        assert_eq!(clip.bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));
        let clipped = clip
            .clip_segment(Line::new((5.0, -5.0), (5.0, 15.0)))
            .unwrap();
        assert_eq!(clipped.p0, Point::new(5.0, 0.0));
        assert_eq!(clipped.p1, Point::new(5.0, 10.0));
    }

    #[test]
    fn polyline_edges_close_only_polygons() {
        let tri = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ];
        assert_eq!(polyline_edges(&tri, false).count(), 2);
        let closed: [Line; 3] = {
            let mut it = polyline_edges(&tri, true);
            [it.next().unwrap(), it.next().unwrap(), it.next().unwrap()]
        };
        assert_eq!(closed[2], Line::new((0.0, 1.0), (0.0, 0.0)));

        let seg = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        assert_eq!(polyline_edges(&seg, true).count(), 1);
        assert_eq!(polyline_edges(&seg[..1], true).count(), 0);
    }
}
