//! Scrawl JSON - fluent streaming JSON output
//!
//! Documents are written straight to a sink, token by token, without an
//! in-memory tree. The writer returned at each step exposes only the
//! operations that are grammatically legal at the document's current
//! position, and every transition consumes the writer, so most structural
//! mistakes (a value without a key, an unclosed array, a second top-level
//! value) are compile errors rather than invalid output.
//!
//! # Usage
//!
//! ```
//! let mut out = Vec::new();
//! scrawl_json::object(&mut out)?
//!     .with("id", 17)?
//!     .with("name", "zariel")?
//!     .key("tags")?.array()?
//!         .push("a")?
//!         .push("b")?
//!         .close()?
//!     .close()?
//!     .finish();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     r#"{"id":17,"name":"zariel","tags":["a","b"]}"#
//! );
//! # Ok::<(), scrawl_json::ScribeError>(())
//! ```
//!
//! String keys and values can also be streamed in pieces:
//!
//! ```
//! let mut out = Vec::new();
//! scrawl_json::object(&mut out)?
//!     .key("message")?.value()?
//!         .append("line 1\n")?
//!         .append("line 2")?
//!         .close()?
//!     .close()?
//!     .finish();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     r#"{"message":"line 1\nline 2"}"#
//! );
//! # Ok::<(), scrawl_json::ScribeError>(())
//! ```
//!
//! The sink is any [`std::io::Write`], borrowed for the document's lifetime
//! and never flushed or closed by this crate. Output is a strict RFC 8259
//! subset with no inserted whitespace. Non-finite floats are written as
//! `null`; there is no token for them in JSON.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod array;
mod document;
mod level;
mod object;
mod value;

pub use array::JsonArray;
pub use document::{JsonDocument, JsonRoot};
pub use level::Level;
pub use object::{JsonKey, JsonObject};
pub use value::JsonValue;

// Re-export the scribe-layer types that appear in this crate's API
pub use scrawl_scribe::{Decimal, JsonScribe, Result, Scalar, ScribeError};

use std::io::Write;

/// A top-level object writer: closing it yields the finished document.
pub type JsonObjectDocument<'w, W> = JsonObject<'w, W, JsonDocument<'w, W>>;

/// A top-level array writer: closing it yields the finished document.
pub type JsonArrayDocument<'w, W> = JsonArray<'w, W, JsonDocument<'w, W>>;

/// Bind a new document to `sink` without writing anything.
///
/// The returned [`JsonRoot`] chooses the document's single top-level value:
/// an object, an array, or a bare scalar.
pub fn begin<W: Write>(sink: &mut W) -> JsonRoot<'_, W> {
    JsonRoot::new(JsonScribe::new(sink))
}

/// Begin a document whose top-level value is an object.
///
/// The opening `{` is written before this returns.
pub fn object<W: Write>(sink: &mut W) -> Result<JsonObjectDocument<'_, W>> {
    begin(sink).object()
}

/// Begin a document whose top-level value is an array.
///
/// The opening `[` is written before this returns.
pub fn array<W: Write>(sink: &mut W) -> Result<JsonArrayDocument<'_, W>> {
    begin(sink).array()
}
