// Copyright 2026 the Wireview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wireview Window: the world-space viewing window.
//!
//! A [`ViewWindow`] is a rectangle in world coordinates that selects the
//! visible part of a 2D scene. Unlike an axis-aligned camera it can be
//! rotated, and every edit is expressed relative to the window itself:
//! - [`ViewWindow::move_by`] moves along the window's own up/left/right axes.
//! - [`ViewWindow::rotate`] turns the window about its own center.
//! - [`ViewWindow::zoom`] scales the window about its center.
//!
//! The window's center, size and orientation are always derived from its
//! corners, and [`ViewWindow::world_to_normalized`] produces the transform
//! that maps the window onto the normalized square `[-1, 1] × [-1, 1]`,
//! ready for clipping.
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use wireview_window::{Navigation, ViewWindow};
//!
//! let mut window = ViewWindow::new(Size::new(200.0, 100.0));
//! window.rotate(90.0);
//! window.navigate(Navigation::Up);
//!
//! // The window's up axis now points along world -X.
//! let center = window.center();
//! assert!((center.x + 10.0).abs() < 1e-9);
//!
//! let to_ndc = window.world_to_normalized();
//! let p = to_ndc.apply(window.corners()[2]);
//! assert!((p.x - 1.0).abs() < 1e-9 && (p.y - 1.0).abs() < 1e-9);
//! ```
//!
//! It does **not** own any scene or renderer. Callers keep their own scene,
//! ask the window for its normalization transform on each render, and map
//! normalized coordinates to device pixels themselves.

mod steps;
mod window;

pub use steps::{Navigation, NavigationSteps};
pub use window::{ViewWindow, ViewWindowDebugInfo};
