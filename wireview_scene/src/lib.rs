// Copyright 2026 the Wireview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wireview Scene: objects, a view window, and the render pass between them.
//!
//! A [`Scene`] owns an ordered list of [`GraphicObject`]s (dots,
//! wireframes and B-spline curves) in world coordinates, one
//! [`ViewWindow`](wireview_window::ViewWindow) selecting the visible region,
//! two reference [`Axis`] lines, and a [`SceneRenderer`] that receives the
//! output.
//!
//! Each render pass:
//! 1. asks the window for its world → normalized transform,
//! 2. clips every edge against `[-1, 1] × [-1, 1]` with Cohen–Sutherland,
//! 3. maps the survivors into device pixels through the [`Viewport`]
//!    (inset border, Y flipped),
//! 4. hands the resulting [`Primitive`]s to the renderer in draw order.
//!
//! ```rust
//! use kurbo::Point;
//! use peniko::Color;
//! use wireview_scene::{PrimitiveShape, RecordingRenderer, Scene, SceneConfig};
//!
//! let mut scene = Scene::new(SceneConfig::default(), RecordingRenderer::new());
//! scene
//!     .create_object(
//!         "sq",
//!         vec![
//!             Point::new(0.0, 0.0),
//!             Point::new(10.0, 0.0),
//!             Point::new(10.0, 10.0),
//!             Point::new(0.0, 10.0),
//!         ],
//!         true,
//!         Color::BLACK,
//!         false,
//!     )
//!     .unwrap();
//! assert_eq!(scene.renderer().frame_count(), 1);
//!
//! scene.remove_object(0);
//! assert!(scene.is_empty());
//! assert_eq!(scene.renderer().frame_count(), 2);
//!
//! // Only the axes and the viewport frame remain.
//! let frame = scene.renderer().last_frame().unwrap();
//! assert!(frame.iter().all(|p| matches!(p.shape, PrimitiveShape::Polyline(_))));
//! ```
//!
//! User input arrives as text through [`ObjectForm`], [`CurveForm`] and
//! [`TransformForm`]; validation happens before anything is mutated, and a
//! rejected request returns a [`ValidationError`] with the scene unchanged.
//! Out-of-range object indices are programming errors and panic.
//!
//! ## Threading
//!
//! A scene is a plain single-owner value. No type here synchronizes
//! internally; callers that share a scene between threads must wrap it in
//! their own lock.
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`SceneConfig`],
//!   [`ViewportConfig`] and the window's navigation steps.

mod axis;
mod config;
mod error;
pub mod form;
mod object;
mod primitive;
mod request;
mod scene;
mod viewport;

pub use axis::Axis;
pub use config::{SceneConfig, ViewportConfig};
pub use error::ValidationError;
pub use form::{CurveForm, ObjectForm, PivotChoice, RotateForm, TransformForm};
pub use object::{GraphicObject, ObjectKind, ObjectRecord};
pub use primitive::{
    Primitive, PrimitiveShape, PrimitiveSource, RecordingRenderer, SceneRenderer, chain_segments,
};
pub use request::{Pivot, TransformRequest, TransformStep};
pub use scene::Scene;
pub use viewport::Viewport;

pub use wireview_window::{Navigation, NavigationSteps, ViewWindow};
