//! Document-level writers: the unwritten root and the closed document

use std::io::Write;

use scrawl_scribe::{JsonScribe, Result, Scalar};

use crate::array::JsonArray;
use crate::level::{sealed, Level};
use crate::object::JsonObject;

/// A bound but still empty document.
///
/// Returned by [`begin`](crate::begin) before any byte has reached the sink.
/// The root offers exactly one top-level value: an object, an array, or a
/// single scalar. Each of these consumes the root, so a second top-level
/// value cannot be started.
pub struct JsonRoot<'w, W: Write> {
    scribe: JsonScribe<'w, W>,
}

impl<'w, W: Write> JsonRoot<'w, W> {
    pub(crate) fn new(scribe: JsonScribe<'w, W>) -> Self {
        Self { scribe }
    }

    /// Open the top-level object and return a writer for its members.
    pub fn object(mut self) -> Result<JsonObject<'w, W, JsonDocument<'w, W>>> {
        self.scribe.open_object()?;
        Ok(JsonObject::new(self.scribe))
    }

    /// Open the top-level array and return a writer for its elements.
    pub fn array(mut self) -> Result<JsonArray<'w, W, JsonDocument<'w, W>>> {
        self.scribe.open_array()?;
        Ok(JsonArray::new(self.scribe))
    }

    /// Write the document as a single scalar value.
    pub fn scalar<'v>(mut self, value: impl Into<Scalar<'v>>) -> Result<JsonDocument<'w, W>> {
        self.scribe.scalar(value.into())?;
        Ok(JsonDocument::new(self.scribe))
    }
}

/// A completed document.
///
/// No structural operations remain; [`finish`](Self::finish) hands the sink
/// borrow back to its owner. Dropping the document instead is equivalent,
/// the borrow simply ends.
pub struct JsonDocument<'w, W: Write> {
    scribe: JsonScribe<'w, W>,
}

impl<'w, W: Write> JsonDocument<'w, W> {
    pub(crate) fn new(scribe: JsonScribe<'w, W>) -> Self {
        Self { scribe }
    }

    /// Consume the document and return the sink borrow.
    pub fn finish(self) -> &'w mut W {
        self.scribe.into_sink()
    }
}

impl<'w, W: Write> sealed::Sealed for JsonDocument<'w, W> {}

impl<'w, W: Write> Level<'w, W> for JsonDocument<'w, W> {
    fn resume(scribe: JsonScribe<'w, W>) -> Self {
        Self::new(scribe)
    }
}
