// Copyright 2026 the Wireview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Line, Point, Size};
use peniko::Color;
use wireview_clip::ClipRect;
use wireview_curve::Tessellator;
use wireview_transform::Transform;
use wireview_window::{Navigation, ViewWindow};

use crate::axis::Axis;
use crate::config::SceneConfig;
use crate::error::ValidationError;
use crate::form::{CurveForm, ObjectForm, TransformForm};
use crate::object::{GraphicObject, ObjectRecord};
use crate::primitive::{
    Primitive, PrimitiveShape, PrimitiveSource, SceneRenderer, chain_segments,
};
use crate::request::TransformRequest;
use crate::viewport::Viewport;

/// An ordered set of objects, the window looking at them, and the renderer
/// they are drawn to.
///
/// Object order is draw order and selection index. Every successful
/// mutation runs exactly one render pass; a rejected one runs none and
/// leaves the scene untouched.
#[derive(Debug)]
pub struct Scene<R> {
    config: SceneConfig,
    window: ViewWindow,
    viewport: Viewport,
    axes: [Axis; 2],
    objects: Vec<GraphicObject>,
    renderer: R,
    frames_rendered: u64,
}

impl<R: SceneRenderer> Scene<R> {
    /// Creates an empty scene.
    ///
    /// The window starts centered on the origin with the viewport's size.
    /// Nothing is rendered until the first mutation or [`Scene::render`].
    pub fn new(config: SceneConfig, renderer: R) -> Self {
        let size = Size::new(config.viewport.width, config.viewport.height);
        let window = ViewWindow::new(size).with_steps(config.steps);
        let axes = [
            Axis::x(size.width, config.axis_x_color),
            Axis::y(size.height, config.axis_y_color),
        ];
        Self {
            config,
            window,
            viewport: Viewport::new(config.viewport),
            axes,
            objects: Vec::new(),
            renderer,
            frames_rendered: 0,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Returns the window.
    pub fn window(&self) -> &ViewWindow {
        &self.window
    }

    /// Returns the viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Returns the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns the renderer mutably.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Consumes the scene, returning the renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Objects in draw order.
    pub fn objects(&self) -> &[GraphicObject] {
        &self.objects
    }

    /// Object at `index`, if any.
    pub fn object(&self, index: usize) -> Option<&GraphicObject> {
        self.objects.get(index)
    }

    /// Number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Object names, index-aligned with [`Scene::objects`].
    pub fn object_names(&self) -> Vec<&str> {
        self.objects.iter().map(GraphicObject::name).collect()
    }

    /// Number of render passes run so far.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    fn tessellator(&self) -> Tessellator {
        Tessellator::new(self.config.curve_resolution)
    }

    /// Appends a dot (one point) or wireframe (two or more points).
    pub fn create_object(
        &mut self,
        name: &str,
        points: Vec<Point>,
        closed: bool,
        color: Color,
        filled: bool,
    ) -> Result<&GraphicObject, ValidationError> {
        let object = GraphicObject::new(name, points, closed, color, filled)?;
        Ok(self.push(object))
    }

    /// Appends a B-spline curve built from `control`.
    pub fn create_curve(
        &mut self,
        name: &str,
        control: Vec<Point>,
        color: Color,
    ) -> Result<&GraphicObject, ValidationError> {
        let object = GraphicObject::curve(name, control, color, self.tessellator())?;
        Ok(self.push(object))
    }

    /// Validates the form and appends the object it describes.
    pub fn create_from_form(
        &mut self,
        form: &ObjectForm,
    ) -> Result<&GraphicObject, ValidationError> {
        let record = form.validate()?;
        let object = GraphicObject::from_record(record, self.tessellator())?;
        Ok(self.push(object))
    }

    /// Validates the form and appends the curve it describes.
    pub fn create_curve_from_form(
        &mut self,
        form: &CurveForm,
    ) -> Result<&GraphicObject, ValidationError> {
        let record = form.validate()?;
        let object = GraphicObject::from_record(record, self.tessellator())?;
        Ok(self.push(object))
    }

    fn push(&mut self, object: GraphicObject) -> &GraphicObject {
        tracing::info!(
            name = object.name(),
            kind = ?object.kind(),
            index = self.objects.len(),
            points = object.points().len(),
            "object created"
        );
        self.objects.push(object);
        self.render();
        &self.objects[self.objects.len() - 1]
    }

    /// Removes the object at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn remove_object(&mut self, index: usize) -> GraphicObject {
        self.assert_index(index);
        let object = self.objects.remove(index);
        tracing::info!(name = object.name(), index, "object removed");
        self.render();
        object
    }

    /// Permanently applies `transform` to the object at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn transform_object(&mut self, index: usize, transform: &Transform) {
        self.assert_index(index);
        let object = &mut self.objects[index];
        object.transform(transform);
        tracing::info!(name = object.name(), index, "object transformed");
        self.render();
    }

    /// Resolves `request` against the object at `index` and the current
    /// window orientation.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn resolve_transform(&self, index: usize, request: &TransformRequest) -> Transform {
        self.assert_index(index);
        request.resolve(self.objects[index].center(), self.window.orientation())
    }

    /// Resolves and applies `request` to the object at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn apply_transform_request(&mut self, index: usize, request: &TransformRequest) {
        let transform = self.resolve_transform(index, request);
        self.transform_object(index, &transform);
    }

    /// Validates the form and applies it to the object at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn transform_from_form(
        &mut self,
        index: usize,
        form: &TransformForm,
    ) -> Result<(), ValidationError> {
        self.assert_index(index);
        let request = form.validate()?;
        self.apply_transform_request(index, &request);
        Ok(())
    }

    /// Moves the window; see [`ViewWindow::move_by`].
    pub fn move_window(&mut self, direction_degrees: f64, fraction: f64) {
        self.window.move_by(direction_degrees, fraction);
        self.render();
    }

    /// Rotates the window about its center.
    pub fn rotate_window(&mut self, degrees: f64) {
        self.window.rotate(degrees);
        self.render();
    }

    /// Zooms the window about its center.
    pub fn zoom_window(&mut self, factor: f64) {
        self.window.zoom(factor);
        self.render();
    }

    /// Applies one navigation step to the window.
    pub fn navigate(&mut self, nav: Navigation) {
        self.window.navigate(nav);
        self.render();
    }

    /// Exports every object as a record, in draw order.
    pub fn records(&self) -> Vec<ObjectRecord> {
        self.objects.iter().map(GraphicObject::record).collect()
    }

    /// Appends objects built from `records`.
    ///
    /// All records are validated first; if any is rejected nothing is
    /// added. A successful import renders once.
    pub fn import(
        &mut self,
        records: impl IntoIterator<Item = ObjectRecord>,
    ) -> Result<usize, ValidationError> {
        let tessellator = self.tessellator();
        let built = records
            .into_iter()
            .map(|record| GraphicObject::from_record(record, tessellator))
            .collect::<Result<Vec<_>, _>>()?;
        let count = built.len();
        self.objects.extend(built);
        tracing::info!(count, total = self.objects.len(), "objects imported");
        self.render();
        Ok(count)
    }

    /// Runs one render pass, handing the frame to the renderer.
    pub fn render(&mut self) {
        let frame = self.build_frame();
        self.renderer.begin_frame(&self.viewport);
        for primitive in &frame {
            self.renderer.draw(primitive);
        }
        self.renderer.end_frame();
        self.frames_rendered += 1;
        tracing::debug!(
            objects = self.objects.len(),
            primitives = frame.len(),
            frame = self.frames_rendered,
            "rendered"
        );
    }

    /// Computes the device-space primitives of the current state without
    /// rendering them.
    ///
    /// Axes come first, then objects in order, then the viewport frame.
    pub fn build_frame(&self) -> Vec<Primitive> {
        let pass = Pass {
            to_normalized: self.window.world_to_normalized(),
            to_device: self.viewport.to_device(),
            clip: ClipRect::NORMALIZED,
        };
        let mut out = Vec::new();

        for axis in &self.axes {
            if let Some(line) = pass.segment(axis.world_line(self.window.scale())) {
                out.push(Primitive {
                    shape: PrimitiveShape::Polyline(vec![line.p0, line.p1]),
                    color: axis.color(),
                    filled: false,
                    source: PrimitiveSource::Axis,
                });
            }
        }

        for (index, object) in self.objects.iter().enumerate() {
            pass.object(index, object, &mut out);
        }

        if self.config.draw_frame {
            let r = self.viewport.device_rect();
            out.push(Primitive {
                shape: PrimitiveShape::Polyline(vec![
                    Point::new(r.x0, r.y0),
                    Point::new(r.x1, r.y0),
                    Point::new(r.x1, r.y1),
                    Point::new(r.x0, r.y1),
                    Point::new(r.x0, r.y0),
                ]),
                color: self.config.frame_color,
                filled: false,
                source: PrimitiveSource::Frame,
            });
        }
        out
    }

    fn assert_index(&self, index: usize) {
        assert!(
            index < self.objects.len(),
            "object index {index} out of range for scene with {} objects",
            self.objects.len()
        );
    }
}

/// Per-frame mapping state.
struct Pass {
    to_normalized: Transform,
    to_device: Transform,
    clip: ClipRect,
}

impl Pass {
    /// Maps a world segment to a clipped device segment.
    fn segment(&self, world: Line) -> Option<Line> {
        let normalized = Line::new(
            self.to_normalized.apply(world.p0),
            self.to_normalized.apply(world.p1),
        );
        let clipped = self.clip.clip_segment(normalized)?;
        Some(Line::new(
            self.to_device.apply(clipped.p0),
            self.to_device.apply(clipped.p1),
        ))
    }

    fn object(&self, index: usize, object: &GraphicObject, out: &mut Vec<Primitive>) {
        let color = object.color();
        let source = PrimitiveSource::Object(index);
        let push = |out: &mut Vec<Primitive>, shape, filled| {
            out.push(Primitive {
                shape,
                color,
                filled,
                source,
            });
        };

        if let [p] = object.drawn_points() {
            let n = self.to_normalized.apply(*p);
            if self.clip.clip_point(n) {
                push(out, PrimitiveShape::Marker(self.to_device.apply(n)), false);
            }
            return;
        }

        let chains = chain_segments(
            object.edges().filter_map(|edge| self.segment(edge)),
            object.is_closed(),
        );
        if object.is_filled() {
            // Survivors of a cut polygon are joined as-is; the cut is not
            // re-closed along the window edge.
            let mut ring: Vec<Point> = chains.into_iter().flatten().collect();
            ring.dedup();
            if ring.len() > 1 && ring.first() == ring.last() {
                ring.pop();
            }
            match ring.len() {
                0 => {}
                1 | 2 => push(out, PrimitiveShape::Polyline(ring), false),
                _ => push(out, PrimitiveShape::Polygon(ring), true),
            }
        } else {
            for chain in chains {
                push(out, PrimitiveShape::Polyline(chain), false);
            }
        }
    }
}
