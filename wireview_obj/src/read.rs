// Copyright 2026 the Wireview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use peniko::Color;
use wireview_scene::ObjectRecord;

use crate::ObjError;

#[derive(Debug)]
struct Pending {
    name: String,
    color: Color,
    /// Closed and filled flags from a `# wireview` comment, for the next
    /// element only.
    flags: Option<(bool, bool)>,
    emitted: bool,
}

/// Parses OBJ text into object records.
///
/// Supported statements are `o`, `usemtl`, `v`, `p`, `l` and `f`; comments
/// and any other statements are skipped. Each element statement becomes
/// one record named after the enclosing `o`. An `l` whose last index
/// repeats its first is read as a closed wireframe, and every `f` is read
/// as a closed, filled one, unless a `# wireview closed=.. filled=..`
/// comment right before the element says otherwise. Vertex indices are
/// 1-based; negative indices count back from the most recent vertex.
///
/// `usemtl` names that are not six hex digits are read as black.
pub fn read_obj(text: &str) -> Result<Vec<ObjectRecord>, ObjError> {
    let mut vertices: Vec<Point> = Vec::new();
    let mut records = Vec::new();
    let mut current: Option<Pending> = None;

    for (number, raw) in text.lines().enumerate() {
        let line = number + 1;
        let (content, comment) = match raw.split_once('#') {
            Some((content, comment)) => (content.trim(), Some(comment)),
            None => (raw.trim(), None),
        };
        if content.is_empty() {
            if let (Some(object), Some(flags)) = (current.as_mut(), comment.and_then(parse_flags))
            {
                object.flags = Some(flags);
            }
            continue;
        }
        let mut fields = content.split_whitespace();
        let Some(keyword) = fields.next() else {
            continue;
        };
        match keyword {
            "o" => {
                let name = content[1..].trim();
                if name.is_empty() {
                    return Err(ObjError::MissingName { line });
                }
                finish(current.take());
                current = Some(Pending {
                    name: name.to_owned(),
                    color: Color::BLACK,
                    flags: None,
                    emitted: false,
                });
            }
            "usemtl" => {
                let text = fields.next().unwrap_or_default();
                let object = current.as_mut().ok_or(ObjError::MissingObject { line })?;
                object.color = parse_color(text).unwrap_or_else(|| {
                    tracing::warn!(
                        line,
                        material = text,
                        "material is not a hex color; using black"
                    );
                    Color::BLACK
                });
            }
            "v" => {
                let x = parse_coord(line, fields.next())?;
                let y = parse_coord(line, fields.next())?;
                vertices.push(Point::new(x, y));
            }
            "p" | "l" | "f" => {
                let object = current.as_mut().ok_or(ObjError::MissingObject { line })?;
                let mut indices = fields
                    .map(|field| resolve_index(line, field, vertices.len()))
                    .collect::<Result<Vec<_>, _>>()?;
                let min = if keyword == "p" { 1 } else { 2 };
                if indices.len() < min {
                    return Err(ObjError::TooFewIndices { line });
                }
                let (closed, filled) = match keyword {
                    "f" => (true, true),
                    "l" if indices.len() > 2 && indices.first() == indices.last() => {
                        indices.pop();
                        (true, false)
                    }
                    _ => (false, false),
                };
                let (closed, filled) = object.flags.take().unwrap_or((closed, filled));
                let points = indices.into_iter().map(|i| vertices[i]).collect();
                records.push(ObjectRecord::new(
                    object.name.clone(),
                    points,
                    closed,
                    filled,
                    object.color,
                ));
                object.emitted = true;
            }
            other => tracing::debug!(line, keyword = other, "skipping unsupported statement"),
        }
    }
    finish(current);
    Ok(records)
}

fn finish(object: Option<Pending>) {
    if let Some(object) = object.filter(|o| !o.emitted) {
        tracing::warn!(name = %object.name, "object has no elements; skipped");
    }
}

fn parse_coord(line: usize, field: Option<&str>) -> Result<f64, ObjError> {
    let text = field.unwrap_or_default();
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ObjError::InvalidNumber {
            line,
            text: text.to_owned(),
        })
}

fn parse_color(text: &str) -> Option<Color> {
    if text.len() != 6 || !text.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    peniko::color::parse_color(&format!("#{text}"))
        .ok()
        .map(|c| c.to_alpha_color::<peniko::color::Srgb>())
}

/// Parses the body of a `# wireview closed=<0|1> filled=<0|1>` comment.
fn parse_flags(comment: &str) -> Option<(bool, bool)> {
    let mut fields = comment.split_whitespace();
    if fields.next() != Some("wireview") {
        return None;
    }
    let flag = |value: &str| match value {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    };
    let (mut closed, mut filled) = (None, None);
    for field in fields {
        match field.split_once('=')? {
            ("closed", value) => closed = Some(flag(value)?),
            ("filled", value) => filled = Some(flag(value)?),
            _ => return None,
        }
    }
    Some((closed?, filled?))
}

/// Converts a 1-based (or negative, relative) OBJ index into a 0-based one.
fn resolve_index(line: usize, field: &str, count: usize) -> Result<usize, ObjError> {
    // Faces may carry `v/vt/vn` triples; only the vertex part matters.
    let vertex = field.split('/').next().unwrap_or_default();
    let index: i64 = vertex.parse().map_err(|_| ObjError::InvalidNumber {
        line,
        text: field.to_owned(),
    })?;
    let out_of_range = || ObjError::VertexOutOfRange { line, index, count };
    let resolved = match index {
        0 => return Err(out_of_range()),
        i if i > 0 => usize::try_from(i - 1).map_err(|_| out_of_range())?,
        i => count
            .checked_sub(usize::try_from(i.unsigned_abs()).map_err(|_| out_of_range())?)
            .ok_or_else(out_of_range)?,
    };
    if resolved < count {
        Ok(resolved)
    } else {
        Err(out_of_range())
    }
}
