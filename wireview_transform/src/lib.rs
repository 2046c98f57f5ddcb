// Copyright 2026 the Wireview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wireview Transform: composable 2D homogeneous transforms.
//!
//! [`Transform`] is a builder over a 3×3 homogeneous affine matrix. Each
//! builder call composes its effect *after* everything accumulated so far,
//! so the call order is the application order:
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use wireview_transform::Transform;
//!
//! // Scale about (1, 1), then rotate a quarter turn about the origin,
//! // then shift right by 10.
//! let xf = Transform::identity()
//!     .scale(Vec2::new(2.0, 2.0), Point::new(1.0, 1.0))
//!     .rotate(90.0, Point::ORIGIN)
//!     .translate(Vec2::new(10.0, 0.0));
//!
//! let p = xf.apply(Point::new(2.0, 1.0));
//! assert!((p.x - 10.0).abs() < 1e-9);
//! assert!((p.y - 3.0).abs() < 1e-9);
//! ```
//!
//! Angles are in degrees and counter-clockwise positive (in a Y-up frame).
//! The matrix itself is stored as a [`kurbo::Affine`]; the implicit bottom
//! row of the homogeneous form is always `0 0 1`.
//!
//! Scale factors are expected to be non-zero. A zero or non-finite factor is
//! not reported as an error: the scale step is skipped and the transform is
//! returned unchanged, so the result stays invertible.
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Affine, Point, Vec2};

/// A 2D affine transform in homogeneous coordinates.
///
/// Composition is associative but not commutative: `a.then(b)` applies `a`
/// first and `b` second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform(Affine);

impl Transform {
    /// The transform that leaves every point where it is.
    pub const IDENTITY: Self = Self(Affine::IDENTITY);

    /// Returns the identity transform.
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Wraps an existing affine matrix.
    #[must_use]
    pub const fn from_affine(affine: Affine) -> Self {
        Self(affine)
    }

    /// Returns the underlying affine matrix.
    #[must_use]
    pub const fn as_affine(self) -> Affine {
        self.0
    }

    /// Follows this transform with a shift by `v`.
    #[must_use]
    pub fn translate(self, v: Vec2) -> Self {
        Self(Affine::translate(v) * self.0)
    }

    /// Follows this transform with a scale by `factors` about `pivot`.
    ///
    /// Realized as translate(−pivot), scale, translate(+pivot), so `pivot`
    /// is a fixed point of the added step. If either factor is zero or not
    /// finite the step is skipped.
    #[must_use]
    pub fn scale(self, factors: Vec2, pivot: Point) -> Self {
        if !is_usable_factor(factors.x) || !is_usable_factor(factors.y) {
            return self;
        }
        let pivot = pivot.to_vec2();
        let step = Affine::translate(pivot)
            * Affine::scale_non_uniform(factors.x, factors.y)
            * Affine::translate(-pivot);
        Self(step * self.0)
    }

    /// Follows this transform with a counter-clockwise rotation of `degrees`
    /// about `pivot`.
    #[must_use]
    pub fn rotate(self, degrees: f64, pivot: Point) -> Self {
        let pivot = pivot.to_vec2();
        let step = Affine::translate(pivot)
            * Affine::rotate(degrees.to_radians())
            * Affine::translate(-pivot);
        Self(step * self.0)
    }

    /// Follows this transform with `next`.
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self(next.0 * self.0)
    }

    /// Transforms a point through the homogeneous form `(x, y, 1)`.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        self.0 * point
    }

    /// Transforms every point of `points` in place.
    pub fn apply_all(&self, points: &mut [Point]) {
        for p in points {
            *p = self.0 * *p;
        }
    }

    /// Transforms a direction vector through the linear part only, i.e. the
    /// homogeneous form `(x, y, 0)`; translation does not affect it.
    #[must_use]
    pub fn apply_vector(&self, v: Vec2) -> Vec2 {
        let [a, b, c, d, _, _] = self.0.as_coeffs();
        Vec2::new(a * v.x + c * v.y, b * v.x + d * v.y)
    }

    /// Returns the determinant of the linear part.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.0.determinant()
    }

    /// Returns the inverse transform, or `None` when the matrix is singular.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        Some(Self(self.0.inverse()))
    }

    /// Returns the full 3×3 homogeneous matrix in row-major order, acting on
    /// column vectors `(x, y, 1)`.
    #[must_use]
    pub fn to_matrix(&self) -> [[f64; 3]; 3] {
        let [a, b, c, d, e, f] = self.0.as_coeffs();
        [[a, c, e], [b, d, f], [0.0, 0.0, 1.0]]
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Affine> for Transform {
    fn from(affine: Affine) -> Self {
        Self(affine)
    }
}

impl From<Transform> for Affine {
    fn from(transform: Transform) -> Self {
        transform.0
    }
}

fn is_usable_factor(f: f64) -> bool {
    f != 0.0 && f.is_finite()
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::Transform;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    fn sample_points() -> [Point; 5] {
        [
            Point::new(0.0, 0.0),
            Point::new(1.5, -2.0),
            Point::new(-300.0, 42.0),
            Point::new(1e3, 1e3),
            Point::new(-0.25, 0.75),
        ]
    }

    #[test]
    fn identity_leaves_points_alone() {
        for p in sample_points() {
            assert_eq!(Transform::identity().apply(p), p);
        }
    }

    #[test]
    fn translate_then_back_round_trips() {
        let vectors = [
            Vec2::new(3.0, 4.0),
            Vec2::new(-120.5, 0.0),
            Vec2::new(1e-3, -7.0),
        ];
        for v in vectors {
            let xf = Transform::identity().translate(v).translate(-v);
            for p in sample_points() {
                assert!(close(xf.apply(p), p), "{p:?} drifted under {v:?}");
            }
        }
    }

    #[test]
    fn rotation_pivot_is_fixed() {
        let pivot = Point::new(12.0, -3.0);
        for degrees in [0.0, 10.0, 90.0, 180.0, -45.0, 359.0] {
            let xf = Transform::identity().rotate(degrees, pivot);
            assert!(close(xf.apply(pivot), pivot), "pivot moved at {degrees}");
        }
    }

    #[test]
    fn scale_pivot_is_fixed() {
        let pivot = Point::new(5.0, 5.0);
        let xf = Transform::identity().scale(Vec2::new(3.0, 0.5), pivot);
        assert!(close(xf.apply(pivot), pivot));
        assert!(close(xf.apply(Point::new(6.0, 7.0)), Point::new(8.0, 6.0)));
    }

    #[test]
    fn rotation_is_counter_clockwise() {
        let xf = Transform::identity().rotate(90.0, Point::ORIGIN);
        assert!(close(xf.apply(Point::new(1.0, 0.0)), Point::new(0.0, 1.0)));
    }

    #[test]
    fn call_order_is_application_order() {
        let shift = Vec2::new(1.0, 0.0);
        let a = Transform::identity()
            .translate(shift)
            .rotate(90.0, Point::ORIGIN);
        let b = Transform::identity()
            .rotate(90.0, Point::ORIGIN)
            .translate(shift);

        // Shift first, then rotate: (1, 0) -> (2, 0) -> (0, 2).
        assert!(close(a.apply(Point::new(1.0, 0.0)), Point::new(0.0, 2.0)));
        // Rotate first, then shift: (1, 0) -> (0, 1) -> (1, 1).
        assert!(close(b.apply(Point::new(1.0, 0.0)), Point::new(1.0, 1.0)));
    }

    #[test]
    fn then_matches_chained_builder() {
        let first = Transform::identity().scale(Vec2::new(2.0, 2.0), Point::ORIGIN);
        let second = Transform::identity().translate(Vec2::new(0.0, 5.0));
        let chained = Transform::identity()
            .scale(Vec2::new(2.0, 2.0), Point::ORIGIN)
            .translate(Vec2::new(0.0, 5.0));
        let p = Point::new(1.0, 1.0);
        assert!(close(first.then(second).apply(p), chained.apply(p)));
    }

    #[test]
    fn zero_scale_factor_is_skipped() {
        let base = Transform::identity().translate(Vec2::new(1.0, 2.0));
        assert_eq!(base.scale(Vec2::new(0.0, 2.0), Point::ORIGIN), base);
        assert_eq!(base.scale(Vec2::new(2.0, f64::NAN), Point::ORIGIN), base);
        assert!(base.inverse().is_some());
    }

    #[test]
    fn inverse_undoes_transform() {
        let xf = Transform::identity()
            .scale(Vec2::new(2.0, 4.0), Point::new(1.0, 1.0))
            .rotate(33.0, Point::new(-2.0, 0.0))
            .translate(Vec2::new(7.0, -1.0));
        let inv = xf.inverse().unwrap();
        for p in sample_points() {
            assert!(close(inv.apply(xf.apply(p)), p));
        }
    }

    #[test]
    fn vectors_ignore_translation() {
        let xf = Transform::identity()
            .translate(Vec2::new(100.0, 100.0))
            .rotate(90.0, Point::new(3.0, 3.0));
        let v = xf.apply_vector(Vec2::new(1.0, 0.0));
        assert!((v.x - 0.0).abs() < EPS);
        assert!((v.y - 1.0).abs() < EPS);
    }

    #[test]
    fn matrix_layout_is_row_major_homogeneous() {
        let xf = Transform::identity().translate(Vec2::new(3.0, -4.0));
        assert_eq!(
            xf.to_matrix(),
            [[1.0, 0.0, 3.0], [0.0, 1.0, -4.0], [0.0, 0.0, 1.0]]
        );
    }
}
