//! The JSON scribe - a stack machine that emits structural punctuation
//!
//! A [`JsonScribe`] tracks the document's open nesting contexts on a frame
//! stack and is the only component that writes to the sink. Callers drive it
//! with open/close/append/scalar operations; the scribe decides where commas,
//! colons, quotes, braces, and brackets go.
//!
//! The scribe trusts its caller to issue operations in a grammatically valid
//! order. Preconditions are `debug_assert!`ed; in release builds a misuse
//! produces structurally invalid output rather than an error. The
//! `scrawl-json` crate layers a typed API on top that makes misuse
//! unrepresentable.

use std::io::Write;

use smallvec::SmallVec;

use crate::error::Result;
use crate::escape;
use crate::literal::Scalar;

/// One open nesting context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    /// Document level; `done` records that the top-level value has begun.
    Root { done: bool },
    /// Inside `{...}`. `has_member` drives comma insertion before the next
    /// key; `key_pending` means a key has been written and the next value
    /// must be preceded by a colon.
    Object { has_member: bool, key_pending: bool },
    /// Inside `[...]`. `has_member` drives comma insertion before the next
    /// element.
    Array { has_member: bool },
    /// Inside an open key string literal.
    Key,
    /// Inside an open string value literal.
    Value,
}

/// The stack machine behind one JSON document.
///
/// Exactly one scribe exists per document being written. It borrows the sink
/// for its whole lifetime and never flushes or closes it; sink lifecycle
/// belongs to the caller.
#[derive(Debug)]
pub struct JsonScribe<'w, W: Write> {
    sink: &'w mut W,
    stack: SmallVec<[Frame; 16]>,
}

impl<'w, W: Write> JsonScribe<'w, W> {
    /// Bind a new scribe to `sink`. Nothing is written.
    pub fn new(sink: &'w mut W) -> Self {
        let mut stack = SmallVec::new();
        stack.push(Frame::Root { done: false });
        Self { sink, stack }
    }

    /// Emit the punctuation that must precede a new value in the current
    /// context: a comma between array elements, a colon after a pending key.
    fn begin_value(&mut self) -> Result<()> {
        match self.stack.last_mut() {
            Some(Frame::Root { done }) => {
                debug_assert!(!*done, "second top-level value");
                *done = true;
            }
            Some(Frame::Object { key_pending, .. }) => {
                debug_assert!(*key_pending, "object member value without an open key");
                self.sink.write_all(b":")?;
                *key_pending = false;
            }
            Some(Frame::Array { has_member }) => {
                if *has_member {
                    self.sink.write_all(b",")?;
                } else {
                    *has_member = true;
                }
            }
            Some(Frame::Key | Frame::Value) => {
                debug_assert!(false, "value inside an open string literal");
            }
            None => debug_assert!(false, "value after the document closed"),
        }
        Ok(())
    }

    /// Open a JSON object: leading punctuation, write `{`, push a frame.
    pub fn open_object(&mut self) -> Result<()> {
        self.begin_value()?;
        self.sink.write_all(b"{")?;
        self.stack.push(Frame::Object {
            has_member: false,
            key_pending: false,
        });
        Ok(())
    }

    /// Open a JSON array: leading punctuation, write `[`, push a frame.
    pub fn open_array(&mut self) -> Result<()> {
        self.begin_value()?;
        self.sink.write_all(b"[")?;
        self.stack.push(Frame::Array { has_member: false });
        Ok(())
    }

    /// Open a key string inside the enclosing object: leading comma if a
    /// member precedes it, then the opening quote.
    pub fn open_key(&mut self) -> Result<()> {
        match self.stack.last_mut() {
            Some(Frame::Object {
                has_member,
                key_pending,
            }) => {
                debug_assert!(!*key_pending, "key opened while another key is pending");
                let separator: &[u8] = if *has_member { b",\"" } else { b"\"" };
                self.sink.write_all(separator)?;
                *has_member = true;
                *key_pending = true;
            }
            _ => debug_assert!(false, "key outside an object"),
        }
        self.stack.push(Frame::Key);
        Ok(())
    }

    /// Open a string value: leading punctuation, then the opening quote.
    ///
    /// Composed with [`close`](Self::close) on a key frame this realizes the
    /// key-to-value transition (closing quote, colon, opening quote).
    pub fn open_value(&mut self) -> Result<()> {
        self.begin_value()?;
        self.sink.write_all(b"\"")?;
        self.stack.push(Frame::Value);
        Ok(())
    }

    /// Append text to the open key or string value, escaping as needed.
    pub fn append(&mut self, text: &str) -> Result<()> {
        debug_assert!(
            matches!(self.stack.last(), Some(Frame::Key | Frame::Value)),
            "append outside an open string literal"
        );
        escape::write_escaped(&mut *self.sink, text)
    }

    /// Append one character to the open key or string value, escaping as
    /// needed.
    pub fn append_char(&mut self, character: char) -> Result<()> {
        debug_assert!(
            matches!(self.stack.last(), Some(Frame::Key | Frame::Value)),
            "append outside an open string literal"
        );
        escape::write_escaped_char(&mut *self.sink, character)
    }

    /// Write a complete scalar member/element value, with leading
    /// punctuation.
    pub fn scalar(&mut self, value: Scalar<'_>) -> Result<()> {
        self.begin_value()?;
        value.write_literal(&mut *self.sink)
    }

    /// Write an empty object, `{}`, as a complete value.
    pub fn empty_object(&mut self) -> Result<()> {
        self.begin_value()?;
        self.sink.write_all(b"{}")?;
        Ok(())
    }

    /// Write an empty array, `[]`, as a complete value.
    pub fn empty_array(&mut self) -> Result<()> {
        self.begin_value()?;
        self.sink.write_all(b"[]")?;
        Ok(())
    }

    /// Write the closing token for the top frame (`}`, `]`, or `"` for a
    /// key or string value), then pop it.
    pub fn close(&mut self) -> Result<()> {
        let token: &[u8] = match self.stack.last() {
            Some(Frame::Object { .. }) => b"}",
            Some(Frame::Array { .. }) => b"]",
            Some(Frame::Key | Frame::Value) => b"\"",
            Some(Frame::Root { .. }) | None => {
                debug_assert!(false, "close with no open structure");
                return Ok(());
            }
        };
        self.sink.write_all(token)?;
        self.stack.pop();
        Ok(())
    }

    /// Consume the scribe and hand the sink borrow back to its owner.
    pub fn into_sink(self) -> &'w mut W {
        debug_assert!(
            matches!(self.stack.as_slice(), [Frame::Root { done: true }]),
            "document is not complete"
        );
        self.sink
    }
}
