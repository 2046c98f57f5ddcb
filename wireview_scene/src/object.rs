// Copyright 2026 the Wireview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Line, Point, Vec2};
use peniko::Color;
use wireview_clip::polyline_edges;
use wireview_curve::{Tessellator, UniformBSpline};
use wireview_transform::Transform;

use crate::error::ValidationError;

/// The three object variants a scene holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// A single point.
    Dot,
    /// An open or closed polyline, optionally filled.
    Wireframe,
    /// A uniform cubic B-spline, drawn as its tessellated polyline.
    Curve,
}

#[derive(Clone, Debug)]
enum Geometry {
    Dot(Point),
    Wireframe(Vec<Point>),
    Curve {
        spline: UniformBSpline,
        polyline: Vec<Point>,
        tessellator: Tessellator,
    },
}

/// A named, colored piece of world-space geometry.
///
/// Only canonical world coordinates are stored; normalized and device
/// coordinates are recomputed on every render pass.
#[derive(Clone, Debug)]
pub struct GraphicObject {
    name: String,
    color: Color,
    closed: bool,
    filled: bool,
    geometry: Geometry,
}

impl GraphicObject {
    /// Creates a dot (one point) or a wireframe (two or more points).
    pub fn new(
        name: impl Into<String>,
        points: Vec<Point>,
        closed: bool,
        color: Color,
        filled: bool,
    ) -> Result<Self, ValidationError> {
        let name = checked_name(name.into())?;
        let geometry = match points.len() {
            0 => return Err(ValidationError::NoCoordinates),
            1 => Geometry::Dot(points[0]),
            _ => Geometry::Wireframe(points),
        };
        let is_dot = matches!(geometry, Geometry::Dot(_));
        Ok(Self {
            name,
            color,
            closed: closed && !is_dot,
            filled: filled && !is_dot,
            geometry,
        })
    }

    /// Creates a B-spline curve and tessellates it.
    pub fn curve(
        name: impl Into<String>,
        control: Vec<Point>,
        color: Color,
        tessellator: Tessellator,
    ) -> Result<Self, ValidationError> {
        let name = checked_name(name.into())?;
        if control.is_empty() {
            return Err(ValidationError::NoCoordinates);
        }
        let spline = UniformBSpline::new(control)?;
        let polyline = tessellator.tessellate(&spline);
        Ok(Self {
            name,
            color,
            closed: false,
            filled: false,
            geometry: Geometry::Curve {
                spline,
                polyline,
                tessellator,
            },
        })
    }

    /// Rebuilds an object from an exported record.
    pub fn from_record(
        record: ObjectRecord,
        tessellator: Tessellator,
    ) -> Result<Self, ValidationError> {
        match record.kind {
            ObjectKind::Curve => {
                Self::curve(record.name, record.points, record.color, tessellator)
            }
            ObjectKind::Dot | ObjectKind::Wireframe => Self::new(
                record.name,
                record.points,
                record.closed,
                record.color,
                record.filled,
            ),
        }
    }

    /// Display name. Names need not be unique.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Which variant this object is.
    #[must_use]
    pub fn kind(&self) -> ObjectKind {
        match self.geometry {
            Geometry::Dot(_) => ObjectKind::Dot,
            Geometry::Wireframe(_) => ObjectKind::Wireframe,
            Geometry::Curve { .. } => ObjectKind::Curve,
        }
    }

    /// Draw color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether the last vertex connects back to the first.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether the interior is filled.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.filled
    }

    /// Stored world-space points: the vertices, or the control polygon for a
    /// curve.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        match &self.geometry {
            Geometry::Dot(p) => core::slice::from_ref(p),
            Geometry::Wireframe(points) => points,
            Geometry::Curve { spline, .. } => spline.control_points(),
        }
    }

    /// World-space vertices as drawn: the tessellated polyline for a curve,
    /// otherwise the stored points.
    #[must_use]
    pub fn drawn_points(&self) -> &[Point] {
        match &self.geometry {
            Geometry::Curve { polyline, .. } => polyline,
            _ => self.points(),
        }
    }

    /// Arithmetic mean of the stored points.
    #[must_use]
    pub fn center(&self) -> Point {
        let points = self.points();
        let sum = points.iter().fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
        (sum / points.len() as f64).to_point()
    }

    /// World-space edges to clip. A dot has none.
    #[must_use]
    pub fn edges(&self) -> Box<dyn Iterator<Item = Line> + '_> {
        match &self.geometry {
            Geometry::Dot(_) => Box::new(core::iter::empty()),
            Geometry::Wireframe(points) => Box::new(polyline_edges(points, self.closed)),
            Geometry::Curve { polyline, .. } => Box::new(polyline_edges(polyline, false)),
        }
    }

    /// Permanently applies `transform` to the stored points.
    ///
    /// Curves transform their control polygon and are re-tessellated.
    pub fn transform(&mut self, transform: &Transform) {
        match &mut self.geometry {
            Geometry::Dot(p) => *p = transform.apply(*p),
            Geometry::Wireframe(points) => transform.apply_all(points),
            Geometry::Curve {
                spline,
                polyline,
                tessellator,
            } => {
                spline.apply_affine(transform.as_affine());
                *polyline = tessellator.tessellate(spline);
            }
        }
    }

    /// Exports the object as a plain record.
    #[must_use]
    pub fn record(&self) -> ObjectRecord {
        ObjectRecord {
            name: self.name.clone(),
            kind: self.kind(),
            points: self.points().to_vec(),
            closed: self.closed,
            filled: self.filled,
            color: self.color,
        }
    }
}

fn checked_name(name: String) -> Result<String, ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::EmptyName)
    } else {
        Ok(name)
    }
}

/// Plain description of an object, used for import and export.
///
/// For curves, `points` holds the control polygon.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectRecord {
    /// Display name.
    pub name: String,
    /// Object variant.
    pub kind: ObjectKind,
    /// World-space points.
    pub points: Vec<Point>,
    /// Closing-edge flag.
    pub closed: bool,
    /// Fill flag.
    pub filled: bool,
    /// Draw color.
    pub color: Color,
}

impl ObjectRecord {
    /// Creates a dot or wireframe record, choosing the kind by point count.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        points: Vec<Point>,
        closed: bool,
        filled: bool,
        color: Color,
    ) -> Self {
        let kind = if points.len() == 1 {
            ObjectKind::Dot
        } else {
            ObjectKind::Wireframe
        };
        Self {
            name: name.into(),
            kind,
            points,
            closed,
            filled,
            color,
        }
    }

    /// Creates a curve record from a control polygon.
    #[must_use]
    pub fn curve(name: impl Into<String>, control: Vec<Point>, color: Color) -> Self {
        Self {
            name: name.into(),
            kind: ObjectKind::Curve,
            points: control,
            closed: false,
            filled: false,
            color,
        }
    }
}
