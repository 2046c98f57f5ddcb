// Copyright 2026 the Wireview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Write as _;

use kurbo::Point;
use peniko::Color;
use wireview_curve::Tessellator;
use wireview_scene::{ObjectKind, ObjectRecord};

use crate::ObjError;

/// Writes `records` as OBJ text, tessellating curves at the default
/// resolution.
pub fn write_obj(records: &[ObjectRecord]) -> Result<String, ObjError> {
    write_obj_with(records, Tessellator::default())
}

/// Writes `records` as OBJ text, tessellating curves with `tessellator`.
///
/// Curves are written as their polyline, so reading the output back yields
/// a wireframe rather than a curve. When the element statement cannot carry
/// a record's closed and filled flags (an open filled outline, or a filled
/// two-point one) they are written in a `# wireview closed=.. filled=..`
/// comment just before it.
///
/// Names must be non-empty and free of `#`, control characters and
/// surrounding whitespace.
pub fn write_obj_with(
    records: &[ObjectRecord],
    tessellator: Tessellator,
) -> Result<String, ObjError> {
    let mut out = String::from("# wireview scene\n");
    // OBJ indices are 1-based and global across objects.
    let mut next_index = 1_usize;
    for record in records {
        check_name(&record.name)?;
        let curve_points;
        let points: &[Point] = match record.kind {
            ObjectKind::Curve => {
                curve_points = tessellator.tessellate_points(&record.points).map_err(|source| {
                    ObjError::Curve {
                        name: record.name.clone(),
                        source,
                    }
                })?;
                &curve_points
            }
            ObjectKind::Dot | ObjectKind::Wireframe => &record.points,
        };
        if points.is_empty() {
            return Err(ObjError::EmptyObject {
                name: record.name.clone(),
            });
        }

        let _ = writeln!(out, "o {}", record.name);
        let _ = writeln!(out, "usemtl {}", color_to_hex(record.color));
        for p in points {
            let _ = writeln!(out, "v {} {} 0", p.x, p.y);
        }

        let first = next_index;
        let indices = first..first + points.len();
        next_index += points.len();
        if points.len() == 1 {
            if record.closed || record.filled {
                write_flags(&mut out, record);
            }
            let _ = writeln!(out, "p {first}");
            continue;
        }
        let keyword = if record.filled && points.len() > 2 {
            'f'
        } else {
            'l'
        };
        let is_curve = record.kind == ObjectKind::Curve;
        let repeat_first = keyword == 'l' && record.closed && !is_curve;
        let implied = (keyword == 'f' || repeat_first, keyword == 'f');
        if !is_curve && implied != (record.closed, record.filled) {
            write_flags(&mut out, record);
        }
        out.push(keyword);
        for i in indices {
            let _ = write!(out, " {i}");
        }
        if repeat_first {
            let _ = write!(out, " {first}");
        }
        out.push('\n');
        tracing::debug!(name = %record.name, vertices = points.len(), "object written");
    }
    Ok(out)
}

fn check_name(name: &str) -> Result<(), ObjError> {
    let bad = name.is_empty()
        || name.trim() != name
        || name.chars().any(|c| c == '#' || c.is_control());
    if bad {
        return Err(ObjError::InvalidName {
            name: name.to_owned(),
        });
    }
    Ok(())
}

fn write_flags(out: &mut String, record: &ObjectRecord) {
    let _ = writeln!(
        out,
        "# wireview closed={} filled={}",
        u8::from(record.closed),
        u8::from(record.filled)
    );
}

fn color_to_hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}
