//! Array writer

use std::io::Write;
use std::marker::PhantomData;

use scrawl_scribe::{JsonScribe, Result, Scalar};

use crate::level::{sealed, Level};
use crate::object::JsonObject;
use crate::value::JsonValue;

/// A JSON array currently being written.
///
/// Unlike a key, which is consumed by assigning one value, an array keeps
/// accepting elements: every `push` returns the array itself, and nested
/// containers opened from it close back into it.
pub struct JsonArray<'w, W: Write, P> {
    scribe: JsonScribe<'w, W>,
    parent: PhantomData<P>,
}

impl<'w, W: Write, P: Level<'w, W>> JsonArray<'w, W, P> {
    pub(crate) fn new(scribe: JsonScribe<'w, W>) -> Self {
        Self {
            scribe,
            parent: PhantomData,
        }
    }

    /// Append a scalar element.
    pub fn push<'v>(mut self, value: impl Into<Scalar<'v>>) -> Result<Self> {
        self.scribe.scalar(value.into())?;
        Ok(self)
    }

    /// Append an empty object element: `{}`.
    pub fn push_empty_object(mut self) -> Result<Self> {
        self.scribe.empty_object()?;
        Ok(self)
    }

    /// Append an empty array element: `[]`.
    pub fn push_empty_array(mut self) -> Result<Self> {
        self.scribe.empty_array()?;
        Ok(self)
    }

    /// Begin a string element, to be written incrementally.
    ///
    /// Closing the returned [`JsonValue`] resumes this array.
    pub fn value(mut self) -> Result<JsonValue<'w, W, Self>> {
        self.scribe.open_value()?;
        Ok(JsonValue::new(self.scribe))
    }

    /// Begin an object element.
    pub fn object(mut self) -> Result<JsonObject<'w, W, Self>> {
        self.scribe.open_object()?;
        Ok(JsonObject::new(self.scribe))
    }

    /// Begin a nested array element.
    pub fn array(mut self) -> Result<JsonArray<'w, W, Self>> {
        self.scribe.open_array()?;
        Ok(JsonArray::new(self.scribe))
    }

    /// Close this array with `]` and resume the writer it was opened from.
    pub fn close(mut self) -> Result<P> {
        self.scribe.close()?;
        Ok(P::resume(self.scribe))
    }
}

impl<'w, W: Write, P: Level<'w, W>> sealed::Sealed for JsonArray<'w, W, P> {}

impl<'w, W: Write, P: Level<'w, W>> Level<'w, W> for JsonArray<'w, W, P> {
    fn resume(scribe: JsonScribe<'w, W>) -> Self {
        Self::new(scribe)
    }
}
