//! Arbitrary-precision decimal number literals

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ScribeError};

/// An exact decimal number kept in decimal form.
///
/// Values are stored as a sign, a digit string, and a base-10 exponent, so
/// numbers of any magnitude or precision render into JSON text without
/// passing through binary floating point. This is the value type to reach
/// for when `i64`/`f64` cannot represent a number exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal {
    /// false = non-negative, true = negative
    sign: bool,
    /// ASCII digits '0'..'9', MSB-first, no leading zeros
    digits: Vec<u8>,
    /// Base-10 exponent applied to the digit string
    exponent: i32,
}

impl Decimal {
    /// Parse a decimal number from its text form.
    ///
    /// Accepts plain (`-12.34`) and scientific (`1.5e-8`) notation. The
    /// parsed value is normalized: leading zeros are dropped and zero is
    /// always stored non-negative with exponent 0.
    pub fn from_str_exact(text: &str) -> Result<Self> {
        let text = text.trim();
        let (sign, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
            Some(e_pos) => {
                let exp: i32 = unsigned[e_pos + 1..]
                    .parse()
                    .map_err(|_| malformed(text))?;
                (&unsigned[..e_pos], exp)
            }
            None => (unsigned, 0),
        };

        let (digits, fraction_len) = parse_mantissa(mantissa).ok_or_else(|| malformed(text))?;
        let exponent = exponent
            .checked_sub(fraction_len as i32)
            .ok_or_else(|| malformed(text))?;

        Ok(Self::normalized(sign, digits, exponent))
    }

    fn normalized(sign: bool, mut digits: Vec<u8>, exponent: i32) -> Self {
        let leading = digits.iter().take_while(|&&d| d == b'0').count();
        let keep_from = leading.min(digits.len() - 1);
        digits.drain(..keep_from);

        if digits == [b'0'] {
            // Zero is unsigned and exponent-free no matter how it was spelled
            return Self {
                sign: false,
                digits,
                exponent: 0,
            };
        }
        Self {
            sign,
            digits,
            exponent,
        }
    }

    /// True if the value is negative.
    pub fn is_negative(&self) -> bool {
        self.sign
    }

    /// True if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.digits == [b'0']
    }
}

fn malformed(text: &str) -> ScribeError {
    ScribeError::MalformedNumber(text.to_string())
}

/// Split a mantissa into its digits and the number of fractional digits.
fn parse_mantissa(mantissa: &str) -> Option<(Vec<u8>, usize)> {
    let mut digits = Vec::with_capacity(mantissa.len());
    let mut fraction_len = 0;
    let mut seen_dot = false;

    for ch in mantissa.chars() {
        match ch {
            '0'..='9' => {
                digits.push(ch as u8);
                if seen_dot {
                    fraction_len += 1;
                }
            }
            '.' if !seen_dot => seen_dot = true,
            _ => return None,
        }
    }

    if digits.is_empty() {
        return None;
    }
    Some((digits, fraction_len))
}

impl FromStr for Decimal {
    type Err = ScribeError;

    fn from_str(text: &str) -> Result<Self> {
        Self::from_str_exact(text)
    }
}

impl fmt::Display for Decimal {
    /// Renders the canonical JSON number form: plain decimal notation for
    /// small exponents, scientific notation when the exponent's magnitude
    /// exceeds 6.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        if self.sign {
            f.write_str("-")?;
        }

        let digits = std::str::from_utf8(&self.digits).expect("digits are ASCII");
        if self.exponent.unsigned_abs() > 6 {
            let mut exponent = i64::from(self.exponent);
            let (head, tail) = digits.split_at(1);
            f.write_str(head)?;
            if !tail.is_empty() {
                write!(f, ".{}", tail)?;
                exponent += tail.len() as i64;
            }
            write!(f, "e{}", exponent)
        } else if self.exponent >= 0 {
            f.write_str(digits)?;
            for _ in 0..self.exponent {
                f.write_str("0")?;
            }
            Ok(())
        } else {
            let fraction_len = self.exponent.unsigned_abs() as usize;
            if fraction_len < digits.len() {
                let (int_part, fraction) = digits.split_at(digits.len() - fraction_len);
                write!(f, "{}.{}", int_part, fraction)
            } else {
                f.write_str("0.")?;
                for _ in 0..fraction_len - digits.len() {
                    f.write_str("0")?;
                }
                f.write_str(digits)
            }
        }
    }
}

impl From<u128> for Decimal {
    fn from(value: u128) -> Self {
        Self::normalized(false, value.to_string().into_bytes(), 0)
    }
}

impl From<i128> for Decimal {
    fn from(value: i128) -> Self {
        Self::normalized(
            value < 0,
            value.unsigned_abs().to_string().into_bytes(),
            0,
        )
    }
}

macro_rules! decimal_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Decimal {
            fn from(value: $t) -> Self {
                Self::from(i128::from(value))
            }
        }
    )*};
}

macro_rules! decimal_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Decimal {
            fn from(value: $t) -> Self {
                Self::from(u128::from(value))
            }
        }
    )*};
}

decimal_from_signed!(i8, i16, i32, i64);
decimal_from_unsigned!(u8, u16, u32, u64);

impl From<isize> for Decimal {
    fn from(value: isize) -> Self {
        Self::from(value as i128)
    }
}

impl From<usize> for Decimal {
    fn from(value: usize) -> Self {
        Self::from(value as u128)
    }
}
