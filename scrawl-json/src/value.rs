//! Incremental string value writer

use std::io::Write;
use std::marker::PhantomData;

use scrawl_scribe::{JsonScribe, Result};

use crate::level::Level;

/// An open string literal being written piece by piece.
///
/// Obtained from a key ([`JsonKey::value`](crate::JsonKey::value)) or an
/// array ([`JsonArray::value`](crate::JsonArray::value)). Appended text is
/// escaped; [`close`](Self::close) writes the closing quote and resumes the
/// containing writer.
pub struct JsonValue<'w, W: Write, P> {
    scribe: JsonScribe<'w, W>,
    parent: PhantomData<P>,
}

impl<'w, W: Write, P: Level<'w, W>> JsonValue<'w, W, P> {
    pub(crate) fn new(scribe: JsonScribe<'w, W>) -> Self {
        Self {
            scribe,
            parent: PhantomData,
        }
    }

    /// Append text to the value, escaping as needed.
    pub fn append(mut self, text: &str) -> Result<Self> {
        self.scribe.append(text)?;
        Ok(self)
    }

    /// Append one character to the value, escaping as needed.
    pub fn append_char(mut self, character: char) -> Result<Self> {
        self.scribe.append_char(character)?;
        Ok(self)
    }

    /// Write the closing quote and resume the containing writer.
    pub fn close(mut self) -> Result<P> {
        self.scribe.close()?;
        Ok(P::resume(self.scribe))
    }
}
