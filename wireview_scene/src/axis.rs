// Copyright 2026 the Wireview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Line, Point, Vec2};
use peniko::Color;

/// A world reference axis through the origin.
///
/// The axis grows and shrinks with the window's cumulative zoom scale so it
/// always spans the same share of the view, but it ignores window moves and
/// rotations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis {
    direction: Vec2,
    half_length: f64,
    color: Color,
}

impl Axis {
    /// The world X axis, reaching `half_length` either side of the origin.
    #[must_use]
    pub fn x(half_length: f64, color: Color) -> Self {
        Self {
            direction: Vec2::new(1.0, 0.0),
            half_length,
            color,
        }
    }

    /// The world Y axis, reaching `half_length` either side of the origin.
    #[must_use]
    pub fn y(half_length: f64, color: Color) -> Self {
        Self {
            direction: Vec2::new(0.0, 1.0),
            half_length,
            color,
        }
    }

    /// Extent either side of the origin at scale one.
    #[must_use]
    pub fn half_length(&self) -> f64 {
        self.half_length
    }

    /// Draw color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// World-space segment for the given cumulative zoom scale.
    #[must_use]
    pub fn world_line(&self, scale: f64) -> Line {
        let reach = self.direction * (self.half_length * scale);
        Line::new(Point::ORIGIN - reach, Point::ORIGIN + reach)
    }
}
