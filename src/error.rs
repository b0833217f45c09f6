use thiserror::Error;

/// The longest key a tree will accept. A key past this point is almost
/// certainly a caller bug rather than legitimate data; rejecting it here
/// keeps the walker's arithmetic (and any single compressed run, capped at
/// `VERTEX_MAX_SIZE`) comfortably clear of the arena's `u32` index space.
pub const MAX_KEY_LEN: usize = 1 << 20;

/// Failure modes a caller can actually observe.
///
/// Allocation failure is deliberately absent: the global allocator aborts
/// the process rather than returning an error, so there is nothing for a
/// caller to recover from here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RadixError {
    #[error("key of {len} bytes exceeds the maximum of {MAX_KEY_LEN} bytes")]
    KeyTooLong { len: usize },
}
