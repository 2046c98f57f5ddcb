// Copyright 2026 the Wireview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use wireview_curve::DEFAULT_RESOLUTION;
use wireview_window::NavigationSteps;

/// Size of the device surface and its inset clipping border, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewportConfig {
    /// Surface width.
    pub width: f64,
    /// Surface height.
    pub height: f64,
    /// Inset between the surface edge and the drawable area, on every side.
    pub border: f64,
}

impl ViewportConfig {
    /// Sets the surface size.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the inset border.
    #[must_use]
    pub fn with_border(mut self, border: f64) -> Self {
        self.border = border;
        self
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
            border: 10.0,
        }
    }
}

/// Configuration for a [`Scene`](crate::Scene).
///
/// Colors are not part of the serialized form; they always start from their
/// defaults and can be changed with the `with_*` setters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SceneConfig {
    /// Device surface.
    pub viewport: ViewportConfig,
    /// Window navigation increments.
    pub steps: NavigationSteps,
    /// Samples per B-spline segment.
    pub curve_resolution: usize,
    /// Whether each frame ends with an outline of the drawable area.
    pub draw_frame: bool,
    /// Color of the drawable-area outline.
    #[cfg_attr(feature = "serde", serde(skip, default = "default_frame_color"))]
    pub frame_color: Color,
    /// Color of the world X axis.
    #[cfg_attr(feature = "serde", serde(skip, default = "default_axis_x_color"))]
    pub axis_x_color: Color,
    /// Color of the world Y axis.
    #[cfg_attr(feature = "serde", serde(skip, default = "default_axis_y_color"))]
    pub axis_y_color: Color,
}

impl SceneConfig {
    /// Sets the viewport configuration.
    #[must_use]
    pub fn with_viewport(mut self, viewport: ViewportConfig) -> Self {
        self.viewport = viewport;
        self
    }

    /// Sets the navigation steps.
    #[must_use]
    pub fn with_steps(mut self, steps: NavigationSteps) -> Self {
        self.steps = steps;
        self
    }

    /// Sets the number of samples per B-spline segment.
    #[must_use]
    pub fn with_curve_resolution(mut self, curve_resolution: usize) -> Self {
        self.curve_resolution = curve_resolution;
        self
    }

    /// Enables or disables the drawable-area outline.
    #[must_use]
    pub fn with_frame(mut self, draw_frame: bool) -> Self {
        self.draw_frame = draw_frame;
        self
    }

    /// Sets the drawable-area outline color.
    #[must_use]
    pub fn with_frame_color(mut self, color: Color) -> Self {
        self.frame_color = color;
        self
    }

    /// Sets the axis colors.
    #[must_use]
    pub fn with_axis_colors(mut self, x: Color, y: Color) -> Self {
        self.axis_x_color = x;
        self.axis_y_color = y;
        self
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            steps: NavigationSteps::default(),
            curve_resolution: DEFAULT_RESOLUTION,
            draw_frame: true,
            frame_color: default_frame_color(),
            axis_x_color: default_axis_x_color(),
            axis_y_color: default_axis_y_color(),
        }
    }
}

fn default_frame_color() -> Color {
    Color::from_rgba8(0xcd, 0x95, 0x0c, 0xff)
}

fn default_axis_x_color() -> Color {
    Color::from_rgba8(0xff, 0x00, 0x00, 0xff)
}

fn default_axis_y_color() -> Color {
    Color::from_rgba8(0x00, 0xff, 0x00, 0xff)
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use peniko::Color;
    use wireview_window::NavigationSteps;

    use super::{SceneConfig, ViewportConfig};

    #[test]
    fn partial_documents_fill_in_defaults() {
        let config: SceneConfig = serde_json::from_str(
            r#"{
                "viewport": { "width": 800.0 },
                "steps": { "rotate_degrees": 45.0 },
                "draw_frame": false
            }"#,
        )
        .unwrap();
        assert_eq!(
            config.viewport,
            ViewportConfig::default().with_size(800.0, 500.0)
        );
        assert_eq!(
            config.steps,
            NavigationSteps::default().with_rotate_degrees(45.0)
        );
        assert_eq!(config.curve_resolution, 32);
        assert!(!config.draw_frame);
        assert_eq!(
            config.frame_color.to_rgba8(),
            Color::from_rgba8(0xcd, 0x95, 0x0c, 0xff).to_rgba8()
        );
        assert_eq!(
            config.axis_x_color.to_rgba8(),
            Color::from_rgba8(0xff, 0x00, 0x00, 0xff).to_rgba8()
        );
        assert_eq!(
            config.axis_y_color.to_rgba8(),
            Color::from_rgba8(0x00, 0xff, 0x00, 0xff).to_rgba8()
        );
    }

    #[test]
    fn colors_are_left_out_of_the_document() {
        let config = SceneConfig::default()
            .with_curve_resolution(8)
            .with_frame_color(Color::BLACK)
            .with_axis_colors(Color::BLACK, Color::BLACK);
        let value = serde_json::to_value(config).unwrap();
        for field in ["frame_color", "axis_x_color", "axis_y_color"] {
            assert!(value.get(field).is_none(), "{field} was serialized");
        }

        let back: SceneConfig = serde_json::from_value(value).unwrap();
        assert_eq!(back.curve_resolution, 8);
        assert_eq!(back.viewport, config.viewport);
        assert_eq!(back.steps, config.steps);
        assert_eq!(back.frame_color, SceneConfig::default().frame_color);
        assert_eq!(back.axis_x_color, SceneConfig::default().axis_x_color);
        assert_eq!(back.axis_y_color, SceneConfig::default().axis_y_color);
    }
}
