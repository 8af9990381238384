//! Scalar value kinds and literal formatting

use std::io::Write;

use crate::decimal::Decimal;
use crate::error::Result;
use crate::escape;

/// A scalar JSON value, ready to be written as a complete literal.
///
/// Every Rust value a document can hold as a member or element converts into
/// one of these kinds through a `From` impl, with a single conversion rule
/// per kind: non-finite floats become [`Scalar::Null`], `None` of any
/// `Option` becomes [`Scalar::Null`], and integers pick the narrowest
/// variant that holds them losslessly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    /// The `null` literal
    Null,
    /// `true` or `false`
    Bool(bool),
    /// Integer in canonical base-10 form
    Int(i64),
    /// Integer outside the `i64` range
    BigInt(i128),
    /// Finite floating-point number.
    ///
    /// Construct through `From<f64>` / `From<f32>`, which substitute `Null`
    /// for non-finite input; the literal writer requires a finite value.
    Float(f64),
    /// Single-character string
    Char(char),
    /// String, quoted and escaped on output
    Str(&'a str),
    /// Exact decimal number
    Decimal(&'a Decimal),
}

impl Scalar<'_> {
    /// Write the complete literal for this scalar, including quotes for
    /// string kinds.
    pub(crate) fn write_literal<W: Write>(&self, sink: &mut W) -> Result<()> {
        match *self {
            Scalar::Null => sink.write_all(b"null")?,
            Scalar::Bool(true) => sink.write_all(b"true")?,
            Scalar::Bool(false) => sink.write_all(b"false")?,
            Scalar::Int(value) => write!(sink, "{}", value)?,
            Scalar::BigInt(value) => write!(sink, "{}", value)?,
            Scalar::Float(value) => {
                debug_assert!(value.is_finite(), "non-finite float reached the literal writer");
                write!(sink, "{}", value)?;
            }
            Scalar::Char(value) => {
                sink.write_all(b"\"")?;
                escape::write_escaped_char(sink, value)?;
                sink.write_all(b"\"")?;
            }
            Scalar::Str(value) => {
                sink.write_all(b"\"")?;
                escape::write_escaped(sink, value)?;
                sink.write_all(b"\"")?;
            }
            Scalar::Decimal(value) => write!(sink, "{}", value)?,
        }
        Ok(())
    }
}

impl From<f64> for Scalar<'_> {
    /// Non-finite values (infinities, NaN) become `Null`; JSON has no
    /// token for them.
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Scalar::Float(value)
        } else {
            Scalar::Null
        }
    }
}

impl From<f32> for Scalar<'_> {
    /// Non-finite values (infinities, NaN) become `Null`.
    fn from(value: f32) -> Self {
        if value.is_finite() {
            Scalar::Float(f64::from(value))
        } else {
            Scalar::Null
        }
    }
}

macro_rules! scalar_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Scalar<'_> {
            fn from(value: $t) -> Self {
                Scalar::Int(i64::from(value))
            }
        }
    )*};
}

scalar_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<isize> for Scalar<'_> {
    fn from(value: isize) -> Self {
        Scalar::Int(value as i64)
    }
}

impl From<u64> for Scalar<'_> {
    // u64 may exceed i64::MAX
    fn from(value: u64) -> Self {
        Scalar::BigInt(i128::from(value))
    }
}

impl From<usize> for Scalar<'_> {
    fn from(value: usize) -> Self {
        Scalar::BigInt(value as i128)
    }
}

impl From<i128> for Scalar<'_> {
    fn from(value: i128) -> Self {
        Scalar::BigInt(value)
    }
}

impl From<bool> for Scalar<'_> {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<char> for Scalar<'_> {
    fn from(value: char) -> Self {
        Scalar::Char(value)
    }
}

impl<'a> From<&'a str> for Scalar<'a> {
    fn from(value: &'a str) -> Self {
        Scalar::Str(value)
    }
}

impl<'a> From<&'a String> for Scalar<'a> {
    fn from(value: &'a String) -> Self {
        Scalar::Str(value)
    }
}

impl<'a> From<&'a Decimal> for Scalar<'a> {
    fn from(value: &'a Decimal) -> Self {
        Scalar::Decimal(value)
    }
}

impl From<()> for Scalar<'_> {
    fn from(_: ()) -> Self {
        Scalar::Null
    }
}

impl<'a, T> From<Option<T>> for Scalar<'a>
where
    T: Into<Scalar<'a>>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Scalar::Null,
        }
    }
}
