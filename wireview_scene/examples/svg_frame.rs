// Copyright 2026 the Wireview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a small scene to SVG on stdout.
//!
//! Run with `cargo run -p wireview_scene --example svg_frame > frame.svg`.

use std::fmt::Write as _;

use kurbo::Point;
use peniko::Color;
use wireview_scene::{
    CurveForm, Navigation, ObjectForm, Primitive, PrimitiveShape, Scene, SceneConfig,
    SceneRenderer, Viewport,
};

#[derive(Debug, Default)]
struct SvgRenderer {
    body: String,
    document: String,
}

impl SceneRenderer for SvgRenderer {
    fn begin_frame(&mut self, viewport: &Viewport) {
        let size = viewport.size();
        self.body.clear();
        let _ = writeln!(
            self.body,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            size.width, size.height
        );
    }

    fn draw(&mut self, primitive: &Primitive) {
        let color = hex(primitive.color);
        match &primitive.shape {
            PrimitiveShape::Marker(p) => {
                let _ = writeln!(
                    self.body,
                    r#"  <circle cx="{}" cy="{}" r="2" fill="{color}"/>"#,
                    p.x, p.y
                );
            }
            PrimitiveShape::Polyline(points) => {
                let _ = writeln!(
                    self.body,
                    r#"  <polyline points="{}" fill="none" stroke="{color}"/>"#,
                    points_attr(points)
                );
            }
            PrimitiveShape::Polygon(points) => {
                let _ = writeln!(
                    self.body,
                    r#"  <polygon points="{}" fill="{color}" stroke="{color}"/>"#,
                    points_attr(points)
                );
            }
        }
    }

    fn end_frame(&mut self) {
        self.body.push_str("</svg>\n");
        self.document = std::mem::take(&mut self.body);
    }
}

fn hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

fn points_attr(points: &[Point]) -> String {
    let mut out = String::new();
    for p in points {
        let _ = write!(out, "{},{} ", p.x, p.y);
    }
    out.trim_end().to_owned()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut scene = Scene::new(SceneConfig::default(), SvgRenderer::default());

    scene.create_from_form(&ObjectForm {
        name: "house".into(),
        coordinates: "(-100,-100) (100,-100) (100,50) (0,150) (-100,50)".into(),
        color: "#1f6feb".into(),
        closed: true,
        filled: false,
    })?;
    scene.create_curve_from_form(&CurveForm {
        name: "path".into(),
        coordinates: "(-300,-200) (-150,0) (0,-200) (150,0) (300,-200)".into(),
        color: "#d73a49".into(),
    })?;
    scene.navigate(Navigation::RotateLeft);
    scene.navigate(Navigation::ZoomIn);

    print!("{}", scene.into_renderer().document);
    Ok(())
}
