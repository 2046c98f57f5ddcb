// Copyright 2026 the Wireview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wireview Curve: uniform cubic B-spline tessellation.
//!
//! A [`UniformBSpline`] owns a control polygon of at least four points. Each
//! run of four consecutive control points is one *segment*; segment `i` is
//! evaluated with the uniform cubic basis over `t ∈ [0, 1]`. Consecutive
//! segments meet with C² continuity, so the end of segment `i` and the start
//! of segment `i + 1` are the same point.
//!
//! [`Tessellator`] samples every segment at a fixed resolution and
//! concatenates the samples into one polyline:
//!
//! ```rust
//! use kurbo::Point;
//! use wireview_curve::{Tessellator, UniformBSpline};
//!
//! let spline = UniformBSpline::new(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 2.0),
//!     Point::new(2.0, 2.0),
//!     Point::new(3.0, 0.0),
//!     Point::new(4.0, 0.0),
//! ])
//! .unwrap();
//! assert_eq!(spline.segment_count(), 2);
//!
//! let polyline = Tessellator::new(10).tessellate(&spline);
//! // Ten samples per segment, plus the closing sample of the last one.
//! assert_eq!(polyline.len(), 21);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Affine, CubicBez, Point, Vec2};

/// Number of control points a cubic segment spans.
pub const MIN_CONTROL_POINTS: usize = 4;

/// Samples taken per segment by [`Tessellator::default`].
pub const DEFAULT_RESOLUTION: usize = 32;

/// Errors building a B-spline.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CurveError {
    /// The control polygon is too short for a single cubic segment.
    #[error("a cubic B-spline needs at least {min} control points, got {count}", min = MIN_CONTROL_POINTS)]
    TooFewControlPoints {
        /// Number of control points supplied.
        count: usize,
    },
}

/// Evaluates the four uniform cubic B-spline basis functions at `t`.
///
/// The weights are non-negative on `[0, 1]` and always sum to one.
#[must_use]
pub fn basis(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    let u = 1.0 - t;
    [
        u * u * u / 6.0,
        (3.0 * t3 - 6.0 * t2 + 4.0) / 6.0,
        (-3.0 * t3 + 3.0 * t2 + 3.0 * t + 1.0) / 6.0,
        t3 / 6.0,
    ]
}

/// A uniform cubic B-spline defined by its control polygon.
#[derive(Clone, Debug, PartialEq)]
pub struct UniformBSpline {
    control: Vec<Point>,
}

impl UniformBSpline {
    /// Creates a spline from `control` points.
    ///
    /// Fails when fewer than [`MIN_CONTROL_POINTS`] points are given.
    pub fn new(control: Vec<Point>) -> Result<Self, CurveError> {
        if control.len() < MIN_CONTROL_POINTS {
            return Err(CurveError::TooFewControlPoints {
                count: control.len(),
            });
        }
        Ok(Self { control })
    }

    /// Returns the control polygon.
    #[must_use]
    pub fn control_points(&self) -> &[Point] {
        &self.control
    }

    /// Number of cubic segments (sliding windows of four control points).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.control.len() + 1 - MIN_CONTROL_POINTS
    }

    /// Evaluates segment `index` at parameter `t`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.segment_count()`.
    #[must_use]
    pub fn eval_segment(&self, index: usize, t: f64) -> Point {
        let window = &self.control[index..index + MIN_CONTROL_POINTS];
        let weights = basis(t);
        window
            .iter()
            .zip(weights)
            .fold(Vec2::ZERO, |acc, (p, w)| acc + p.to_vec2() * w)
            .to_point()
    }

    /// Returns segment `index` converted to its equivalent cubic Bézier.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.segment_count()`.
    #[must_use]
    pub fn segment(&self, index: usize) -> CubicBez {
        let [a, b, c, d] = [0, 1, 2, 3].map(|k| self.control[index + k].to_vec2());
        CubicBez::new(
            ((a + b * 4.0 + c) / 6.0).to_point(),
            ((b * 4.0 + c * 2.0) / 6.0).to_point(),
            ((b * 2.0 + c * 4.0) / 6.0).to_point(),
            ((b + c * 4.0 + d) / 6.0).to_point(),
        )
    }

    /// Applies `affine` to every control point.
    ///
    /// B-splines are affine invariant, so this is the same as transforming
    /// the evaluated curve.
    pub fn apply_affine(&mut self, affine: Affine) {
        for p in &mut self.control {
            *p = affine * *p;
        }
    }
}

/// Samples B-splines into dense polylines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tessellator {
    resolution: usize,
}

impl Tessellator {
    /// Creates a tessellator taking `resolution` samples per segment.
    ///
    /// A resolution of zero is treated as one.
    #[must_use]
    pub fn new(resolution: usize) -> Self {
        Self {
            resolution: resolution.max(1),
        }
    }

    /// Samples taken per segment.
    #[must_use]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Returns the number of points [`Tessellator::tessellate`] produces for
    /// `spline`.
    #[must_use]
    pub fn sample_count(&self, spline: &UniformBSpline) -> usize {
        spline.segment_count() * self.resolution + 1
    }

    /// Samples `spline` into a polyline.
    ///
    /// Each segment contributes the samples `t = k / resolution` for
    /// `k in 0..resolution`; the last segment also contributes `t = 1`, so
    /// the polyline ends where the curve ends. Sample `i * resolution` is the
    /// start of segment `i`, which is also the end of segment `i - 1`.
    #[must_use]
    pub fn tessellate(&self, spline: &UniformBSpline) -> Vec<Point> {
        let segments = spline.segment_count();
        let step = 1.0 / self.resolution as f64;
        let mut out = Vec::with_capacity(self.sample_count(spline));
        for index in 0..segments {
            out.extend((0..self.resolution).map(|k| spline.eval_segment(index, k as f64 * step)));
        }
        out.push(spline.eval_segment(segments - 1, 1.0));
        out
    }

    /// Builds a spline from `control` and samples it.
    pub fn tessellate_points(&self, control: &[Point]) -> Result<Vec<Point>, CurveError> {
        let spline = UniformBSpline::new(control.to_vec())?;
        Ok(self.tessellate(&spline))
    }
}

impl Default for Tessellator {
    fn default() -> Self {
        Self::new(DEFAULT_RESOLUTION)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::{Affine, ParamCurve, Point, Vec2};

    use super::{CurveError, Tessellator, UniformBSpline, basis};

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    fn wave() -> UniformBSpline {
        UniformBSpline::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(2.0, 2.0),
            Point::new(3.0, 0.0),
            Point::new(4.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn basis_is_a_partition_of_unity() {
        for k in 0..=20 {
            let t = f64::from(k) / 20.0;
            let w = basis(t);
            assert!((w.iter().sum::<f64>() - 1.0).abs() < EPS);
            assert!(w.iter().all(|&x| x >= 0.0));
        }
    }

    #[test]
    fn too_few_control_points_is_an_error() {
        let err = UniformBSpline::new(vec![Point::ORIGIN; 3]).unwrap_err();
        assert_eq!(err, CurveError::TooFewControlPoints { count: 3 });
        assert!(Tessellator::default().tessellate_points(&[]).is_err());
    }

    #[test]
    fn adjacent_segments_share_their_boundary() {
        let spline = wave();
        let end_of_first = spline.eval_segment(0, 1.0);
        let start_of_second = spline.eval_segment(1, 0.0);
        assert!(close(end_of_first, start_of_second));

        let tess = Tessellator::new(16);
        let polyline = tess.tessellate(&spline);
        assert!(close(polyline[16], end_of_first));
    }

    #[test]
    fn sample_count_matches_output() {
        let spline = wave();
        for resolution in [1, 7, 32] {
            let tess = Tessellator::new(resolution);
            assert_eq!(tess.tessellate(&spline).len(), tess.sample_count(&spline));
        }
        assert_eq!(Tessellator::new(0).resolution(), 1);
    }

    #[test]
    fn bezier_form_matches_basis_evaluation() {
        let spline = wave();
        for index in 0..spline.segment_count() {
            let bez = spline.segment(index);
            for k in 0..=8 {
                let t = f64::from(k) / 8.0;
                assert!(close(bez.eval(t), spline.eval_segment(index, t)));
            }
        }
    }

    #[test]
    fn collinear_control_points_stay_on_the_line() {
        let spline = UniformBSpline::new(
            (0..6).map(|i| Point::new(f64::from(i), 2.0 * f64::from(i))).collect(),
        )
        .unwrap();
        for p in Tessellator::new(5).tessellate(&spline) {
            assert!((p.y - 2.0 * p.x).abs() < EPS);
        }
    }

    #[test]
    fn transforming_controls_transforms_the_curve() {
        let mut spline = wave();
        let tess = Tessellator::new(8);
        let before: Vec<Point> = tess.tessellate(&spline);
        let shift = Affine::translate(Vec2::new(10.0, -5.0));
        spline.apply_affine(shift);
        let after = tess.tessellate(&spline);
        for (a, b) in before.iter().zip(&after) {
            assert!(close(shift * *a, *b));
        }
    }
}
