// Copyright 2026 the Wireview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw text input from the UI and its validation into typed requests.

use kurbo::{Point, Vec2};
use peniko::Color;
use wireview_curve::{CurveError, MIN_CONTROL_POINTS};

use crate::error::ValidationError;
use crate::object::ObjectRecord;
use crate::request::{Pivot, TransformRequest};

/// Parses a list of `(x, y)` pairs.
///
/// Pairs may be separated by commas, whitespace, or both. Blank text is an
/// empty list.
pub fn parse_points(text: &str) -> Result<Vec<Point>, ValidationError> {
    let mut cursor = Cursor { text, pos: 0 };
    let mut points = Vec::new();
    loop {
        cursor.skip(|c| c.is_whitespace() || c == ',');
        if cursor.at_end() {
            return Ok(points);
        }
        cursor.expect('(', "expected `(`")?;
        let x = cursor.number(',')?;
        cursor.expect(',', "expected `,` between coordinates")?;
        let y = cursor.number(')')?;
        cursor.expect(')', "expected `)`")?;
        points.push(Point::new(x, y));
    }
}

/// Parses a `#`-prefixed hex color: `#rgb`, `#rgba`, `#rrggbb` or
/// `#rrggbbaa`.
pub fn parse_color(text: &str) -> Result<Color, ValidationError> {
    let trimmed = text.trim();
    let invalid = || ValidationError::InvalidColor {
        text: text.to_owned(),
    };
    let digits = trimmed.strip_prefix('#').ok_or_else(invalid)?;
    if !matches!(digits.len(), 3 | 4 | 6 | 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    peniko::color::parse_color(trimmed)
        .map(|c| c.to_alpha_color::<peniko::color::Srgb>())
        .map_err(|_| invalid())
}

/// Parses a finite number.
pub fn parse_number(field: &'static str, text: &str) -> Result<f64, ValidationError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::InvalidNumber {
            field,
            text: text.to_owned(),
        })
}

fn parse_color_or_black(text: &str) -> Result<Color, ValidationError> {
    if text.trim().is_empty() {
        Ok(Color::BLACK)
    } else {
        parse_color(text)
    }
}

fn parse_single(field: &'static str, text: &str) -> Result<Point, ValidationError> {
    match parse_points(text)?.as_slice() {
        [p] => Ok(*p),
        other => Err(ValidationError::WrongArity {
            field,
            expected: 1,
            found: other.len(),
        }),
    }
}

fn checked_name(name: &str) -> Result<String, ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::EmptyName)
    } else {
        Ok(name.to_owned())
    }
}

/// Text fields of the "new object" form.
#[derive(Clone, Debug, Default)]
pub struct ObjectForm {
    /// Object name.
    pub name: String,
    /// Coordinate list, e.g. `(0, 0), (10, 0), (10, 10)`.
    pub coordinates: String,
    /// Hex color; blank means black.
    pub color: String,
    /// Closing-edge flag.
    pub closed: bool,
    /// Fill flag.
    pub filled: bool,
}

impl ObjectForm {
    /// Validates the fields into a dot or wireframe record.
    pub fn validate(&self) -> Result<ObjectRecord, ValidationError> {
        let name = checked_name(&self.name)?;
        let color = parse_color_or_black(&self.color)?;
        let points = parse_points(&self.coordinates)?;
        if points.is_empty() {
            return Err(ValidationError::NoCoordinates);
        }
        Ok(ObjectRecord::new(
            name,
            points,
            self.closed,
            self.filled,
            color,
        ))
    }
}

/// Text fields of the "new curve" form.
#[derive(Clone, Debug, Default)]
pub struct CurveForm {
    /// Curve name.
    pub name: String,
    /// Control point list.
    pub coordinates: String,
    /// Hex color; blank means black.
    pub color: String,
}

impl CurveForm {
    /// Validates the fields into a curve record.
    pub fn validate(&self) -> Result<ObjectRecord, ValidationError> {
        let name = checked_name(&self.name)?;
        let color = parse_color_or_black(&self.color)?;
        let control = parse_points(&self.coordinates)?;
        if control.is_empty() {
            return Err(ValidationError::NoCoordinates);
        }
        if control.len() < MIN_CONTROL_POINTS {
            return Err(CurveError::TooFewControlPoints {
                count: control.len(),
            }
            .into());
        }
        Ok(ObjectRecord::curve(name, control, color))
    }
}

/// Pivot selection of the rotate section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PivotChoice {
    /// Rotate about the object center.
    ObjectCenter,
    /// Rotate about the world origin.
    WorldOrigin,
    /// Rotate about a typed point, e.g. `(3, 4)`.
    Point(String),
}

/// Text fields of the rotate section.
#[derive(Clone, Debug)]
pub struct RotateForm {
    /// Angle in degrees.
    pub angle: String,
    /// Pivot selection.
    pub pivot: PivotChoice,
}

/// Text fields of the transform form. Unchecked sections are `None`.
#[derive(Clone, Debug, Default)]
pub struct TransformForm {
    /// Scale factors as one pair, e.g. `(2, 2)`.
    pub scale: Option<String>,
    /// Rotation angle and pivot.
    pub rotate: Option<RotateForm>,
    /// Translation as one pair in the window's frame.
    pub translate: Option<String>,
}

impl TransformForm {
    /// Validates the checked sections into a request applying scale, then
    /// rotation, then translation.
    pub fn validate(&self) -> Result<TransformRequest, ValidationError> {
        let mut request = TransformRequest::new();
        if let Some(text) = &self.scale {
            request = request.scale(parse_single("scale factor", text)?.to_vec2());
        }
        if let Some(rotate) = &self.rotate {
            let degrees = parse_number("rotation angle", &rotate.angle)?;
            let pivot = match &rotate.pivot {
                PivotChoice::ObjectCenter => Pivot::ObjectCenter,
                PivotChoice::WorldOrigin => Pivot::WorldOrigin,
                PivotChoice::Point(text) => Pivot::Point(parse_single("rotation point", text)?),
            };
            request = request.rotate(degrees, pivot);
        }
        if let Some(text) = &self.translate {
            let v = parse_single("translation vector", text)?;
            request = request.translate(Vec2::new(v.x, v.y));
        }
        Ok(request)
    }
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl Cursor<'_> {
    fn rest(&self) -> &str {
        &self.text[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn skip(&mut self, pred: impl Fn(char) -> bool) {
        let rest = self.rest();
        let len = rest.len() - rest.trim_start_matches(pred).len();
        self.pos += len;
    }

    fn error(&self, reason: &'static str) -> ValidationError {
        ValidationError::MalformedCoordinates {
            offset: self.pos,
            reason,
        }
    }

    fn expect(&mut self, c: char, reason: &'static str) -> Result<(), ValidationError> {
        self.skip(char::is_whitespace);
        if self.rest().starts_with(c) {
            self.pos += c.len_utf8();
            Ok(())
        } else {
            Err(self.error(reason))
        }
    }

    fn number(&mut self, terminator: char) -> Result<f64, ValidationError> {
        self.skip(char::is_whitespace);
        let rest = self.rest();
        let len = rest
            .find(|c: char| c == terminator || c.is_whitespace())
            .unwrap_or(rest.len());
        let value = rest[..len]
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| self.error("expected a number"))?;
        self.pos += len;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};
    use peniko::Color;

    use super::{
        CurveForm, ObjectForm, PivotChoice, RotateForm, TransformForm, parse_color,
        parse_number, parse_points,
    };
    use crate::error::ValidationError;
    use crate::object::ObjectKind;
    use crate::request::{Pivot, TransformStep};

    #[test]
    fn points_parse_with_mixed_separators() {
        let pts = parse_points(" (0, 0), (10,0) (10.5 , -2e1)\n(1,1)").unwrap();
        assert_eq!(
            pts,
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.5, -20.0),
                Point::new(1.0, 1.0),
            ]
        );
        assert!(parse_points("   ").unwrap().is_empty());
    }

    #[test]
    fn malformed_points_report_offset() {
        assert_eq!(
            parse_points("(1, 2) 3, 4"),
            Err(ValidationError::MalformedCoordinates {
                offset: 7,
                reason: "expected `(`",
            })
        );
        assert!(matches!(
            parse_points("(1, x)"),
            Err(ValidationError::MalformedCoordinates { offset: 4, .. })
        ));
        assert!(parse_points("(1, 2").is_err());
        assert!(parse_points("(1 2)").is_err());
        assert!(parse_points("(inf, 0)").is_err());
    }

    #[test]
    fn colors_need_a_hash_and_hex_digits() {
        assert_eq!(
            parse_color("#ff0000").unwrap().to_rgba8(),
            Color::from_rgba8(255, 0, 0, 255).to_rgba8()
        );
        assert_eq!(
            parse_color(" #0f0 ").unwrap().to_rgba8(),
            Color::from_rgba8(0, 255, 0, 255).to_rgba8()
        );
        for bad in ["ff0000", "#ff000", "#gg0000", "red", "#"] {
            assert!(
                matches!(parse_color(bad), Err(ValidationError::InvalidColor { .. })),
                "{bad} accepted"
            );
        }
    }

    #[test]
    fn numbers_must_be_finite() {
        assert_eq!(parse_number("angle", " 45.5 "), Ok(45.5));
        assert_eq!(
            parse_number("angle", "abc"),
            Err(ValidationError::InvalidNumber {
                field: "angle",
                text: "abc".into(),
            })
        );
        assert!(parse_number("angle", "NaN").is_err());
    }

    #[test]
    fn object_form_defaults_to_black() {
        let form = ObjectForm {
            name: "sq".into(),
            coordinates: "(0,0),(10,0),(10,10),(0,10)".into(),
            color: String::new(),
            closed: true,
            filled: false,
        };
        let record = form.validate().unwrap();
        assert_eq!(record.kind, ObjectKind::Wireframe);
        assert_eq!(record.points.len(), 4);
        assert_eq!(record.color.to_rgba8(), Color::BLACK.to_rgba8());
        assert!(record.closed);
    }

    #[test]
    fn object_form_checks_fields_in_order() {
        let mut form = ObjectForm::default();
        assert_eq!(form.validate(), Err(ValidationError::EmptyName));
        form.name = "p".into();
        form.color = "blue".into();
        assert!(matches!(
            form.validate(),
            Err(ValidationError::InvalidColor { .. })
        ));
        form.color = "#00f".into();
        assert_eq!(form.validate(), Err(ValidationError::NoCoordinates));
        form.coordinates = "(1, 1)".into();
        assert_eq!(form.validate().unwrap().kind, ObjectKind::Dot);
    }

    #[test]
    fn curve_form_needs_four_points() {
        let mut form = CurveForm {
            name: "c".into(),
            coordinates: "(0,0) (1,2) (2,2)".into(),
            color: "#123456".into(),
        };
        assert!(matches!(form.validate(), Err(ValidationError::Curve(_))));
        form.coordinates.push_str(" (3,0)");
        let record = form.validate().unwrap();
        assert_eq!(record.kind, ObjectKind::Curve);
        assert_eq!(record.points.len(), 4);
    }

    #[test]
    fn transform_form_builds_steps_in_order() {
        let form = TransformForm {
            scale: Some("(2, 3)".into()),
            rotate: Some(RotateForm {
                angle: "90".into(),
                pivot: PivotChoice::Point("(1, 1)".into()),
            }),
            translate: Some("(0, 5)".into()),
        };
        let request = form.validate().unwrap();
        assert_eq!(
            request.steps(),
            &[
                TransformStep::Scale {
                    factors: Vec2::new(2.0, 3.0)
                },
                TransformStep::Rotate {
                    degrees: 90.0,
                    pivot: Pivot::Point(Point::new(1.0, 1.0)),
                },
                TransformStep::Translate {
                    vector: Vec2::new(0.0, 5.0)
                },
            ]
        );
        assert!(TransformForm::default().validate().unwrap().is_empty());
    }

    #[test]
    fn transform_form_rejects_bad_parameters() {
        let form = TransformForm {
            scale: Some("(1, 1) (2, 2)".into()),
            ..TransformForm::default()
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::WrongArity {
                field: "scale factor",
                expected: 1,
                found: 2,
            })
        );
        let form = TransformForm {
            rotate: Some(RotateForm {
                angle: "ninety".into(),
                pivot: PivotChoice::ObjectCenter,
            }),
            ..TransformForm::default()
        };
        assert!(matches!(
            form.validate(),
            Err(ValidationError::InvalidNumber { .. })
        ));
    }
}
