//! Parent-position threading for closing operations

use std::io::Write;

use scrawl_scribe::JsonScribe;

pub(crate) mod sealed {
    /// Restricts [`Level`](super::Level) to the types defined in this crate.
    pub trait Sealed {}
}

/// A grammar position that a closing operation can return to.
///
/// Implemented by [`JsonDocument`](crate::JsonDocument),
/// [`JsonObject`](crate::JsonObject) and [`JsonArray`](crate::JsonArray).
/// Each nested writer carries its parent's type as a generic parameter;
/// closing the nested structure resumes the parent at exactly that type, so
/// a whole document builds and closes as one fluent, fully typed chain.
pub trait Level<'w, W: Write>: sealed::Sealed {
    /// Rewrap the scribe at this position after a child structure closed.
    #[doc(hidden)]
    fn resume(scribe: JsonScribe<'w, W>) -> Self;
}
