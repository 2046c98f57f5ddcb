// Copyright 2026 the Wireview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Line, Point};
use peniko::Color;

use crate::viewport::Viewport;

/// Device-space geometry of one drawing primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum PrimitiveShape {
    /// Connected line segments.
    Polyline(Vec<Point>),
    /// A polygon to be filled; the closing edge is implied.
    Polygon(Vec<Point>),
    /// A single point.
    Marker(Point),
}

/// What produced a primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveSource {
    /// A world reference axis.
    Axis,
    /// The scene object at this index.
    Object(usize),
    /// The outline of the drawable area.
    Frame,
}

/// One device-space drawing command.
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    /// Geometry in device pixels.
    pub shape: PrimitiveShape,
    /// Stroke or fill color.
    pub color: Color,
    /// Whether the interior is filled.
    pub filled: bool,
    /// Origin of the primitive.
    pub source: PrimitiveSource,
}

/// Receives the primitives of each render pass, in draw order.
pub trait SceneRenderer {
    /// Called once before the first primitive of a pass.
    fn begin_frame(&mut self, viewport: &Viewport) {
        let _ = viewport;
    }

    /// Draws one primitive.
    fn draw(&mut self, primitive: &Primitive);

    /// Called once after the last primitive of a pass.
    fn end_frame(&mut self) {}
}

/// Renderer that keeps every frame it is handed.
///
/// Useful for tests and for hosts that rasterize later.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    frames: Vec<Vec<Primitive>>,
    current: Vec<Primitive>,
}

impl RecordingRenderer {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All completed frames, oldest first.
    #[must_use]
    pub fn frames(&self) -> &[Vec<Primitive>] {
        &self.frames
    }

    /// The most recently completed frame.
    #[must_use]
    pub fn last_frame(&self) -> Option<&[Primitive]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// Number of completed frames.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Forgets all recorded frames.
    pub fn clear(&mut self) {
        self.frames.clear();
        self.current.clear();
    }
}

impl SceneRenderer for RecordingRenderer {
    fn begin_frame(&mut self, _viewport: &Viewport) {
        self.current.clear();
    }

    fn draw(&mut self, primitive: &Primitive) {
        self.current.push(primitive.clone());
    }

    fn end_frame(&mut self) {
        self.frames.push(core::mem::take(&mut self.current));
    }
}

/// Joins segments into maximal chains.
///
/// A segment whose start equals the previous segment's end extends the
/// current chain; any other segment starts a new one. When `closed` is set
/// the segments come from a closed outline, and a last chain ending where
/// the first one starts is joined onto its front.
#[must_use]
pub fn chain_segments(
    segments: impl IntoIterator<Item = Line>,
    closed: bool,
) -> Vec<Vec<Point>> {
    let mut chains: Vec<Vec<Point>> = Vec::new();
    for seg in segments {
        match chains.last_mut() {
            Some(chain) if chain.last() == Some(&seg.p0) => chain.push(seg.p1),
            _ => chains.push(vec![seg.p0, seg.p1]),
        }
    }
    let n = chains.len();
    if closed && n > 1 && chains[n - 1].last() == chains[0].first() {
        let first = core::mem::take(&mut chains[0]);
        chains[n - 1].extend_from_slice(&first[1..]);
        chains.swap_remove(0);
    }
    chains
}

#[cfg(test)]
mod tests {
    use kurbo::{Line, Point};
    use peniko::Color;

    use super::{
        Primitive, PrimitiveShape, PrimitiveSource, RecordingRenderer, SceneRenderer,
        chain_segments,
    };
    use crate::viewport::Viewport;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn connected_segments_form_one_chain() {
        let chains = chain_segments(
            [
                Line::new(p(0.0, 0.0), p(1.0, 0.0)),
                Line::new(p(1.0, 0.0), p(1.0, 1.0)),
                Line::new(p(1.0, 1.0), p(0.0, 0.0)),
            ],
            true,
        );
        assert_eq!(
            chains,
            vec![vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 0.0)]]
        );
    }

    #[test]
    fn gaps_split_chains() {
        let chains = chain_segments(
            [
                Line::new(p(0.0, 0.0), p(1.0, 0.0)),
                Line::new(p(2.0, 0.0), p(3.0, 0.0)),
                Line::new(p(3.0, 0.0), p(3.0, 1.0)),
            ],
            false,
        );
        assert_eq!(chains.len(), 2);
        assert_eq!(chains[1], vec![p(2.0, 0.0), p(3.0, 0.0), p(3.0, 1.0)]);
        assert!(chain_segments(Vec::new(), true).is_empty());
    }

    #[test]
    fn closed_outlines_join_across_the_first_vertex() {
        // A square whose right edge was clipped away; vertex 0 survives.
        let segments = [
            Line::new(p(0.0, 0.0), p(1.0, 0.0)),
            Line::new(p(1.0, 1.0), p(0.0, 1.0)),
            Line::new(p(0.0, 1.0), p(0.0, 0.0)),
        ];
        assert_eq!(
            chain_segments(segments, true),
            vec![vec![p(1.0, 1.0), p(0.0, 1.0), p(0.0, 0.0), p(1.0, 0.0)]]
        );
        // Open polylines keep their two pieces.
        assert_eq!(chain_segments(segments, false).len(), 2);
    }

    #[test]
    fn recorder_keeps_frames_in_order() {
        let mut rec = RecordingRenderer::new();
        let vp = Viewport::default();
        for i in 0..2 {
            rec.begin_frame(&vp);
            rec.draw(&Primitive {
                shape: PrimitiveShape::Marker(p(f64::from(i), 0.0)),
                color: Color::BLACK,
                filled: false,
                source: PrimitiveSource::Object(0),
            });
            rec.end_frame();
        }
        assert_eq!(rec.frame_count(), 2);
        let last = rec.last_frame().unwrap();
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].shape, PrimitiveShape::Marker(p(1.0, 0.0)));
        rec.clear();
        assert!(rec.last_frame().is_none());
    }
}
