// Copyright 2026 the Wireview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use wireview_transform::Transform;

/// Fixed point of a rotation step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pivot {
    /// The mean of the object's points.
    ObjectCenter,
    /// The world origin.
    WorldOrigin,
    /// An explicit world-space point.
    Point(Point),
}

impl Pivot {
    fn resolve(self, center: Point) -> Point {
        match self {
            Self::ObjectCenter => center,
            Self::WorldOrigin => Point::ORIGIN,
            Self::Point(p) => p,
        }
    }
}

/// One step of a [`TransformRequest`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformStep {
    /// Scale about the object center.
    Scale {
        /// Horizontal and vertical factors.
        factors: Vec2,
    },
    /// Rotate counter-clockwise about a pivot.
    Rotate {
        /// Angle in degrees.
        degrees: f64,
        /// Fixed point.
        pivot: Pivot,
    },
    /// Shift by a vector given in the window's rotated frame.
    Translate {
        /// Shift, with `+Y` meaning the window's up direction.
        vector: Vec2,
    },
}

/// An ordered list of object edits, resolved against an object and the
/// current window orientation.
///
/// The object center is measured once, before any step runs, so every
/// step that pivots on the center uses the same point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformRequest {
    steps: Vec<TransformStep>,
}

impl TransformRequest {
    /// Creates an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a scale about the object center.
    #[must_use]
    pub fn scale(mut self, factors: Vec2) -> Self {
        self.steps.push(TransformStep::Scale { factors });
        self
    }

    /// Appends a rotation.
    #[must_use]
    pub fn rotate(mut self, degrees: f64, pivot: Pivot) -> Self {
        self.steps.push(TransformStep::Rotate { degrees, pivot });
        self
    }

    /// Appends a window-relative translation.
    #[must_use]
    pub fn translate(mut self, vector: Vec2) -> Self {
        self.steps.push(TransformStep::Translate { vector });
        self
    }

    /// Appends every step of `other`.
    pub fn extend(&mut self, other: Self) {
        self.steps.extend(other.steps);
    }

    /// Steps in application order.
    #[must_use]
    pub fn steps(&self) -> &[TransformStep] {
        &self.steps
    }

    /// Whether the request has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Composes the steps into one transform.
    ///
    /// `center` replaces [`Pivot::ObjectCenter`] and is the fixed point of
    /// every scale. Translation vectors are rotated by
    /// `window_orientation` degrees so they follow the window's frame.
    #[must_use]
    pub fn resolve(&self, center: Point, window_orientation: f64) -> Transform {
        let to_world = Transform::identity().rotate(window_orientation, Point::ORIGIN);
        self.steps
            .iter()
            .fold(Transform::identity(), |acc, step| match *step {
                TransformStep::Scale { factors } => acc.scale(factors, center),
                TransformStep::Rotate { degrees, pivot } => {
                    acc.rotate(degrees, pivot.resolve(center))
                }
                TransformStep::Translate { vector } => {
                    acc.translate(to_world.apply_vector(vector))
                }
            })
    }
}
