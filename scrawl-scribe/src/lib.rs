//! Scrawl scribe - primitives for streaming JSON emission
//!
//! This crate provides the low-level machinery that turns a sequence of
//! open/close/append operations into JSON text on a sink:
//!
//! - The [`JsonScribe`] stack machine (punctuation, nesting state)
//! - String escaping
//! - Scalar literal formatting via [`Scalar`]
//! - Exact decimal literals via [`Decimal`]
//! - Error types
//!
//! The scribe enforces nothing at the type level; it trusts callers to issue
//! operations in grammatical order. The `scrawl-json` crate builds the typed
//! API most callers should use.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod decimal;
pub mod error;
pub mod escape;
pub mod literal;
pub mod scribe;

// Re-export commonly used types
pub use decimal::Decimal;
pub use error::{Result, ScribeError};
pub use literal::Scalar;
pub use scribe::JsonScribe;
