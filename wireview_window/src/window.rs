// Copyright 2026 the Wireview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};
use wireview_transform::Transform;

use crate::steps::{Navigation, NavigationSteps};

/// World-space visible rectangle.
///
/// The window is stored as its four corners, in order: bottom-left,
/// bottom-right, top-right, top-left (in the window's own frame). Center,
/// size and orientation are derived from the corners on demand. Every edit
/// is a similarity transform of all four corners, so the corners always
/// form a rectangle.
///
/// A cumulative zoom scale is tracked alongside the corners for display
/// elements that follow the zoom level (such as reference axes).
#[derive(Clone, Debug)]
pub struct ViewWindow {
    corners: [Point; 4],
    scale: f64,
    steps: NavigationSteps,
}

impl ViewWindow {
    /// Creates an unrotated window of the given size centered on the origin.
    #[must_use]
    pub fn new(size: Size) -> Self {
        let (hw, hh) = (size.width / 2.0, size.height / 2.0);
        Self::from_corners([
            Point::new(-hw, -hh),
            Point::new(hw, -hh),
            Point::new(hw, hh),
            Point::new(-hw, hh),
        ])
    }

    /// Creates a window from explicit corners.
    ///
    /// Corners must form a rectangle, ordered bottom-left, bottom-right,
    /// top-right, top-left in the window's own frame.
    #[must_use]
    pub fn from_corners(corners: [Point; 4]) -> Self {
        Self {
            corners,
            scale: 1.0,
            steps: NavigationSteps::default(),
        }
    }

    /// Sets the navigation step sizes.
    #[must_use]
    pub fn with_steps(mut self, steps: NavigationSteps) -> Self {
        self.steps = steps;
        self
    }

    /// Returns the navigation step sizes.
    #[must_use]
    pub fn steps(&self) -> NavigationSteps {
        self.steps
    }

    /// Replaces the navigation step sizes.
    pub fn set_steps(&mut self, steps: NavigationSteps) {
        self.steps = steps;
    }

    /// Returns the four world-space corners.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        self.corners
    }

    /// Returns the cumulative zoom scale (product of all zoom factors).
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the window center: the mean of the corners.
    #[must_use]
    pub fn center(&self) -> Point {
        let sum = self
            .corners
            .iter()
            .fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
        (sum / 4.0).to_point()
    }

    /// Returns the window width and height, measured along its own axes.
    #[must_use]
    pub fn size(&self) -> Size {
        let [c0, c1, _, c3] = self.corners;
        Size::new((c1 - c0).hypot(), (c3 - c0).hypot())
    }

    /// Returns the view-up vector: from the first corner to the last.
    ///
    /// Its length is the window height.
    #[must_use]
    pub fn view_up(&self) -> Vec2 {
        self.corners[3] - self.corners[0]
    }

    /// Returns the angle between the view-up vector and world +Y, in
    /// degrees, counter-clockwise positive.
    #[must_use]
    pub fn orientation(&self) -> f64 {
        let up = self.view_up();
        (-up.x).atan2(up.y).to_degrees()
    }

    /// Returns the transform from world space into the normalized square
    /// `[-1, 1] × [-1, 1]`.
    ///
    /// Composed as translate(−center), rotate(−orientation), then scale by
    /// `2 / width` and `2 / height`. Points inside the window land inside the
    /// square with the window's rotation undone. If the window has collapsed
    /// to zero width or height the scale step is skipped.
    #[must_use]
    pub fn world_to_normalized(&self) -> Transform {
        let size = self.size();
        if size.width <= 0.0 || size.height <= 0.0 {
            tracing::warn!(?size, "window has collapsed; skipping normalization scale");
        }
        Transform::identity()
            .translate(-self.center().to_vec2())
            .rotate(-self.orientation(), Point::ORIGIN)
            .scale(
                Vec2::new(2.0 / size.width, 2.0 / size.height),
                Point::ORIGIN,
            )
    }

    /// Returns the transform from the normalized square back to world space,
    /// or `None` if the window has collapsed.
    #[must_use]
    pub fn normalized_to_world(&self) -> Option<Transform> {
        self.world_to_normalized().inverse()
    }

    /// Moves the window by `fraction` of its height along the view-up vector
    /// rotated by `direction_degrees`.
    ///
    /// Movement is window-relative: `0` moves along the window's own up
    /// axis, `90` along its left axis and `-90` along its right axis,
    /// whatever the window's current orientation.
    pub fn move_by(&mut self, direction_degrees: f64, fraction: f64) {
        if !direction_degrees.is_finite() || !fraction.is_finite() {
            tracing::warn!(direction_degrees, fraction, "ignoring non-finite window move");
            return;
        }
        let up = self.view_up();
        if up == Vec2::ZERO {
            tracing::warn!("window has no view-up vector; ignoring move");
            return;
        }
        let delta = Transform::identity()
            .rotate(direction_degrees, Point::ORIGIN)
            .apply_vector(up)
            * fraction;
        self.apply(Transform::identity().translate(delta));
    }

    /// Rotates the window about its own center by `degrees`,
    /// counter-clockwise positive.
    pub fn rotate(&mut self, degrees: f64) {
        if !degrees.is_finite() {
            tracing::warn!(degrees, "ignoring non-finite window rotation");
            return;
        }
        let center = self.center();
        self.apply(Transform::identity().rotate(degrees, center));
    }

    /// Scales the window about its center by `factor`.
    ///
    /// A factor above one grows the window (more of the world is visible);
    /// below one shrinks it. The cumulative scale is multiplied by `factor`.
    /// Non-positive or non-finite factors are ignored.
    pub fn zoom(&mut self, factor: f64) {
        if factor <= 0.0 || !factor.is_finite() {
            tracing::warn!(factor, "ignoring invalid zoom factor");
            return;
        }
        let center = self.center();
        self.apply(Transform::identity().scale(Vec2::new(factor, factor), center));
        self.scale *= factor;
    }

    /// Applies one discrete navigation step using the configured step sizes.
    pub fn navigate(&mut self, nav: Navigation) {
        let steps = self.steps;
        match nav {
            Navigation::Up => self.move_by(0.0, steps.move_fraction),
            Navigation::Down => self.move_by(0.0, -steps.move_fraction),
            Navigation::Left => self.move_by(90.0, steps.move_fraction),
            Navigation::Right => self.move_by(-90.0, steps.move_fraction),
            Navigation::RotateLeft => self.rotate(steps.rotate_degrees),
            Navigation::RotateRight => self.rotate(-steps.rotate_degrees),
            Navigation::ZoomIn => self.zoom(1.0 / steps.zoom_factor),
            Navigation::ZoomOut => self.zoom(steps.zoom_factor),
        }
    }

    /// Snapshot of the current window state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewWindowDebugInfo {
        ViewWindowDebugInfo {
            corners: self.corners,
            center: self.center(),
            size: self.size(),
            orientation: self.orientation(),
            scale: self.scale,
        }
    }

    fn apply(&mut self, transform: Transform) {
        transform.apply_all(&mut self.corners);
        tracing::debug!(
            center = ?self.center(),
            size = ?self.size(),
            orientation = self.orientation(),
            scale = self.scale,
            "window edited"
        );
    }
}

impl Default for ViewWindow {
    /// A 500 × 500 window centered on the origin.
    fn default() -> Self {
        Self::new(Size::new(500.0, 500.0))
    }
}

/// Debug snapshot of a [`ViewWindow`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewWindowDebugInfo {
    /// World-space corners.
    pub corners: [Point; 4],
    /// Window center.
    pub center: Point,
    /// Width and height along the window's own axes.
    pub size: Size,
    /// Orientation in degrees.
    pub orientation: f64,
    /// Cumulative zoom scale.
    pub scale: f64,
}
