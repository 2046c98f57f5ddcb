// Copyright 2026 the Wireview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wireview OBJ: whole-scene import and export as Wavefront OBJ text.
//!
//! Each [`ObjectRecord`](wireview_scene::ObjectRecord) becomes one named
//! object:
//!
//! ```text
//! o sq
//! usemtl 000000
//! v 0 0 0
//! v 10 0 0
//! v 10 10 0
//! v 0 10 0
//! l 1 2 3 4 1
//! ```
//!
//! - `usemtl` carries the color as six hex digits (alpha is dropped).
//!   Other material names read back as black.
//! - Dots are written as `p`, open and closed-unfilled wireframes as `l`
//!   (a closed one repeats its first index), and filled ones as `f`.
//!   Flag combinations those statements cannot express are kept in a
//!   `# wireview closed=0 filled=1` comment before the element.
//! - Curves are written as their tessellated polyline.
//! - Vertex indices are global and 1-based; `z` is always zero.
//!
//! ```rust
//! use kurbo::Point;
//! use peniko::Color;
//! use wireview_obj::{read_obj, write_obj};
//! use wireview_scene::ObjectRecord;
//!
//! let records = vec![ObjectRecord::new(
//!     "tri",
//!     vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(2.0, 3.0)],
//!     true,
//!     true,
//!     Color::BLACK,
//! )];
//! let text = write_obj(&records).unwrap();
//! assert!(text.contains("f 1 2 3"));
//! assert_eq!(read_obj(&text).unwrap()[0].points, records[0].points);
//! ```

mod read;
mod write;

pub use read::read_obj;
pub use write::{write_obj, write_obj_with};

use wireview_curve::CurveError;

/// Errors reading or writing OBJ text.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ObjError {
    /// An `o` statement has no name.
    #[error("line {line}: object statement without a name")]
    MissingName {
        /// 1-based line number.
        line: usize,
    },
    /// An element or material appears before any `o` statement.
    #[error("line {line}: statement outside of an object")]
    MissingObject {
        /// 1-based line number.
        line: usize,
    },
    /// A coordinate or index is not a number.
    #[error("line {line}: `{text}` is not a number")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// The rejected text.
        text: String,
    },
    /// A vertex index points outside the vertices read so far.
    #[error("line {line}: vertex index {index} out of range ({count} vertices defined)")]
    VertexOutOfRange {
        /// 1-based line number.
        line: usize,
        /// The index as written.
        index: i64,
        /// Vertices defined before this line.
        count: usize,
    },
    /// An element has too few vertex indices.
    #[error("line {line}: element has too few vertices")]
    TooFewIndices {
        /// 1-based line number.
        line: usize,
    },
    /// A record to export has a name that cannot be written as an `o`
    /// statement.
    #[error("object name {name:?} cannot be written to OBJ")]
    InvalidName {
        /// The rejected name.
        name: String,
    },
    /// A record to export has no points.
    #[error("object `{name}` has no points")]
    EmptyObject {
        /// Object name.
        name: String,
    },
    /// A curve record to export cannot be tessellated.
    #[error("curve `{name}` cannot be tessellated")]
    Curve {
        /// Object name.
        name: String,
        /// Underlying failure.
        source: CurveError,
    },
}
