use thiserror::Error;

/// Returned when the bound allocator cannot produce a block large
/// enough for a new node's payload.
///
/// The deque that reported this is left exactly as it was before the
/// failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("failed to allocate {requested} bytes")]
pub struct OutOfMemory {
    /// The number of payload bytes the failed request asked for.
    pub requested: usize,
}

/// Returned by the peek operations when the deque holds no nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("deque is empty")]
pub struct EmptyDeque;
