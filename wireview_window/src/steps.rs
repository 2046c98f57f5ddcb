// Copyright 2026 the Wireview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Increments used by the discrete navigation commands.
///
/// See [`Navigation`] for how each command uses these values.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavigationSteps {
    /// Fraction of the window height moved per step.
    pub move_fraction: f64,
    /// Multiplicative zoom factor per step; greater than one.
    pub zoom_factor: f64,
    /// Rotation per step, in degrees.
    pub rotate_degrees: f64,
}

impl NavigationSteps {
    /// Sets the move fraction.
    #[must_use]
    pub fn with_move_fraction(mut self, move_fraction: f64) -> Self {
        self.move_fraction = move_fraction;
        self
    }

    /// Sets the zoom factor.
    #[must_use]
    pub fn with_zoom_factor(mut self, zoom_factor: f64) -> Self {
        self.zoom_factor = zoom_factor;
        self
    }

    /// Sets the rotation step.
    #[must_use]
    pub fn with_rotate_degrees(mut self, rotate_degrees: f64) -> Self {
        self.rotate_degrees = rotate_degrees;
        self
    }
}

impl Default for NavigationSteps {
    fn default() -> Self {
        Self {
            move_fraction: 0.1,
            zoom_factor: 1.1,
            rotate_degrees: 10.0,
        }
    }
}

/// A discrete, window-relative navigation command.
///
/// Directions are relative to the window's own frame, not the world's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Navigation {
    /// Move along the window's up axis.
    Up,
    /// Move against the window's up axis.
    Down,
    /// Move along the window's left axis.
    Left,
    /// Move along the window's right axis.
    Right,
    /// Rotate the window counter-clockwise.
    RotateLeft,
    /// Rotate the window clockwise.
    RotateRight,
    /// Shrink the window, showing less of the world.
    ZoomIn,
    /// Grow the window, showing more of the world.
    ZoomOut,
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::NavigationSteps;

    #[test]
    fn missing_fields_take_defaults() {
        let steps: NavigationSteps = serde_json::from_str(r#"{"zoom_factor": 2.0}"#).unwrap();
        assert_eq!(steps, NavigationSteps::default().with_zoom_factor(2.0));

        let empty: NavigationSteps = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, NavigationSteps::default());
    }

    #[test]
    fn steps_round_trip() {
        let steps = NavigationSteps::default()
            .with_move_fraction(0.25)
            .with_zoom_factor(1.5)
            .with_rotate_degrees(45.0);
        let text = serde_json::to_string(&steps).unwrap();
        assert_eq!(serde_json::from_str::<NavigationSteps>(&text).unwrap(), steps);
    }
}
