// Copyright 2026 the Wireview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use wireview_curve::CurveError;

/// A rejected user request.
///
/// Validation runs before any mutation, so a rejected request leaves the
/// scene and its window untouched.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The object name is empty.
    #[error("no name specified")]
    EmptyName,
    /// No coordinates were given.
    #[error("no coordinates specified")]
    NoCoordinates,
    /// Coordinate text could not be parsed.
    #[error("malformed coordinates at byte {offset}: {reason}")]
    MalformedCoordinates {
        /// Byte offset into the text where parsing failed.
        offset: usize,
        /// What was expected.
        reason: &'static str,
    },
    /// A color is not a `#`-prefixed hex code.
    #[error("invalid color code `{text}`")]
    InvalidColor {
        /// The rejected text.
        text: String,
    },
    /// A numeric parameter is not a finite number.
    #[error("invalid {field}: `{text}` is not a number")]
    InvalidNumber {
        /// Which parameter was rejected.
        field: &'static str,
        /// The rejected text.
        text: String,
    },
    /// A parameter has the wrong number of coordinate pairs.
    #[error("invalid {field}: expected {expected} coordinate pair(s), got {found}")]
    WrongArity {
        /// Which parameter was rejected.
        field: &'static str,
        /// Number of pairs required.
        expected: usize,
        /// Number of pairs given.
        found: usize,
    },
    /// The curve's control polygon is unusable.
    #[error(transparent)]
    Curve(#[from] CurveError),
}
