// Copyright 2026 the Wireview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};
use wireview_transform::Transform;

use crate::config::ViewportConfig;

/// Fixed-size device surface with an inset border.
///
/// Maps the normalized square `[-1, 1] × [-1, 1]` onto the drawable area
/// inside the border. Device Y grows downward, so normalized `+Y` ends up at
/// the top of the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    config: ViewportConfig,
}

impl Viewport {
    /// Creates a viewport from its configuration.
    #[must_use]
    pub fn new(config: ViewportConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> ViewportConfig {
        self.config
    }

    /// Full surface size, border included.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.config.width, self.config.height)
    }

    /// Drawable area inside the border, in device pixels.
    #[must_use]
    pub fn device_rect(&self) -> Rect {
        let b = self.config.border;
        Rect::new(b, b, self.config.width - b, self.config.height - b)
    }

    /// Transform from normalized coordinates to device pixels.
    ///
    /// `device = border + (norm + 1) / 2 * (extent - 2 * border)`, with the
    /// Y axis flipped.
    #[must_use]
    pub fn to_device(&self) -> Transform {
        let area = self.device_rect();
        let half = Vec2::new(area.width() / 2.0, area.height() / 2.0);
        Transform::identity()
            .scale(Vec2::new(half.x, -half.y), Point::ORIGIN)
            .translate(area.center().to_vec2())
    }

    /// Transform from device pixels back to normalized coordinates, or
    /// `None` if the drawable area is empty.
    #[must_use]
    pub fn to_normalized(&self) -> Option<Transform> {
        let area = self.device_rect();
        if area.width() <= 0.0 || area.height() <= 0.0 {
            return None;
        }
        self.to_device().inverse()
    }

    /// Maps one normalized point to device pixels.
    #[must_use]
    pub fn map(&self, normalized: Point) -> Point {
        self.to_device().apply(normalized)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ViewportConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::Viewport;
    use crate::config::ViewportConfig;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn normalized_corners_land_on_the_inset_area() {
        let vp = Viewport::default();
        assert_eq!(vp.device_rect(), Rect::new(10.0, 10.0, 490.0, 490.0));
        // Normalized top-left is device top-left.
        assert!(close(vp.map(Point::new(-1.0, 1.0)), Point::new(10.0, 10.0)));
        assert!(close(vp.map(Point::new(1.0, -1.0)), Point::new(490.0, 490.0)));
        assert!(close(vp.map(Point::ORIGIN), Point::new(250.0, 250.0)));
    }

    #[test]
    fn y_axis_is_flipped() {
        let vp = Viewport::default();
        let up = vp.map(Point::new(0.0, 0.5));
        let down = vp.map(Point::new(0.0, -0.5));
        assert!(up.y < down.y);
    }

    #[test]
    fn matches_the_pixel_formula() {
        let vp = Viewport::new(ViewportConfig::default().with_size(800.0, 600.0).with_border(25.0));
        let n = Point::new(0.3, -0.6);
        let x = 25.0 + (n.x + 1.0) / 2.0 * (800.0 - 50.0);
        let y = 25.0 + (1.0 - (n.y + 1.0) / 2.0) * (600.0 - 50.0);
        assert!(close(vp.map(n), Point::new(x, y)));
    }

    #[test]
    fn to_normalized_inverts() {
        let vp = Viewport::default();
        let back = vp.to_normalized().unwrap();
        let n = Point::new(-0.25, 0.75);
        assert!(close(back.apply(vp.map(n)), n));

        let empty = Viewport::new(ViewportConfig::default().with_size(20.0, 20.0));
        assert!(empty.to_normalized().is_none());
    }
}
