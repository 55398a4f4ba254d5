pub mod comments;
pub mod identity;
pub mod post;

/// Feed-unique post identifier.
///
/// Strictly monotonic within one feed, never reused.
pub type PostId = u64;
