//! Object and key writers

use std::io::Write;
use std::marker::PhantomData;

use scrawl_scribe::{JsonScribe, Result, Scalar};

use crate::array::JsonArray;
use crate::level::{sealed, Level};
use crate::value::JsonValue;

/// A JSON object currently being written.
///
/// `P` is the writer this object was opened from; [`close`](Self::close)
/// returns it. Members are added either in one call with
/// [`with`](Self::with) or by opening a key via [`key`](Self::key) and
/// choosing its value on the returned [`JsonKey`].
pub struct JsonObject<'w, W: Write, P> {
    scribe: JsonScribe<'w, W>,
    parent: PhantomData<P>,
}

impl<'w, W: Write, P: Level<'w, W>> JsonObject<'w, W, P> {
    pub(crate) fn new(scribe: JsonScribe<'w, W>) -> Self {
        Self {
            scribe,
            parent: PhantomData,
        }
    }

    /// Open a key with the given text and return a writer positioned on it.
    ///
    /// The key stays open: more characters can be appended before a value is
    /// chosen. Pass `""` to build the whole key incrementally.
    pub fn key(mut self, name: &str) -> Result<JsonKey<'w, W, P>> {
        self.scribe.open_key()?;
        self.scribe.append(name)?;
        Ok(JsonKey {
            scribe: self.scribe,
            parent: PhantomData,
        })
    }

    /// Add a complete member in one call: `"name":value`.
    pub fn with<'v>(mut self, name: &str, value: impl Into<Scalar<'v>>) -> Result<Self> {
        self.write_key(name)?;
        self.scribe.scalar(value.into())?;
        Ok(self)
    }

    /// Add a member whose value is an empty object: `"name":{}`.
    pub fn with_empty_object(mut self, name: &str) -> Result<Self> {
        self.write_key(name)?;
        self.scribe.empty_object()?;
        Ok(self)
    }

    /// Add a member whose value is an empty array: `"name":[]`.
    pub fn with_empty_array(mut self, name: &str) -> Result<Self> {
        self.write_key(name)?;
        self.scribe.empty_array()?;
        Ok(self)
    }

    /// Close this object with `}` and resume the writer it was opened from.
    pub fn close(mut self) -> Result<P> {
        self.scribe.close()?;
        Ok(P::resume(self.scribe))
    }

    fn write_key(&mut self, name: &str) -> Result<()> {
        self.scribe.open_key()?;
        self.scribe.append(name)?;
        self.scribe.close()
    }
}

impl<'w, W: Write, P: Level<'w, W>> sealed::Sealed for JsonObject<'w, W, P> {}

impl<'w, W: Write, P: Level<'w, W>> Level<'w, W> for JsonObject<'w, W, P> {
    fn resume(scribe: JsonScribe<'w, W>) -> Self {
        Self::new(scribe)
    }
}

/// An open key inside a [`JsonObject`].
///
/// The key's closing quote has not been written yet, so characters can still
/// be appended. Every other operation chooses the member's value and is
/// single-use: scalars return the containing object directly, containers and
/// [`value`](Self::value) return a nested writer whose `close` leads back to
/// the containing object.
pub struct JsonKey<'w, W: Write, P> {
    scribe: JsonScribe<'w, W>,
    parent: PhantomData<P>,
}

impl<'w, W: Write, P: Level<'w, W>> JsonKey<'w, W, P> {
    /// Append text to the key, escaping as needed.
    pub fn append(mut self, text: &str) -> Result<Self> {
        self.scribe.append(text)?;
        Ok(self)
    }

    /// Append one character to the key, escaping as needed.
    pub fn append_char(mut self, character: char) -> Result<Self> {
        self.scribe.append_char(character)?;
        Ok(self)
    }

    /// Assign a scalar value to this key and return the containing object.
    pub fn then<'v>(mut self, value: impl Into<Scalar<'v>>) -> Result<JsonObject<'w, W, P>> {
        self.scribe.close()?;
        self.scribe.scalar(value.into())?;
        Ok(JsonObject::new(self.scribe))
    }

    /// Assign an empty object to this key and return the containing object.
    pub fn then_empty_object(mut self) -> Result<JsonObject<'w, W, P>> {
        self.scribe.close()?;
        self.scribe.empty_object()?;
        Ok(JsonObject::new(self.scribe))
    }

    /// Assign an empty array to this key and return the containing object.
    pub fn then_empty_array(mut self) -> Result<JsonObject<'w, W, P>> {
        self.scribe.close()?;
        self.scribe.empty_array()?;
        Ok(JsonObject::new(self.scribe))
    }

    /// Begin a string value for this key, to be written incrementally.
    ///
    /// When this returns, the key's closing quote, the colon, and the
    /// value's opening quote have been written. Closing the returned
    /// [`JsonValue`] resumes the containing object.
    pub fn value(mut self) -> Result<JsonValue<'w, W, JsonObject<'w, W, P>>> {
        self.scribe.close()?;
        self.scribe.open_value()?;
        Ok(JsonValue::new(self.scribe))
    }

    /// Begin an object value for this key.
    pub fn object(mut self) -> Result<JsonObject<'w, W, JsonObject<'w, W, P>>> {
        self.scribe.close()?;
        self.scribe.open_object()?;
        Ok(JsonObject::new(self.scribe))
    }

    /// Begin an array value for this key.
    pub fn array(mut self) -> Result<JsonArray<'w, W, JsonObject<'w, W, P>>> {
        self.scribe.close()?;
        self.scribe.open_array()?;
        Ok(JsonArray::new(self.scribe))
    }
}
