//! A double-ended queue (deque) for opaque byte payloads, with every
//! node allocation routed through a caller-supplied allocator.
//!
//! A payload is a length and that many bytes, uninterpreted. Pushing
//! copies the bytes into a block obtained from the deque's
//! [`Allocator`]; discarding returns the block to the same allocator.
//!
//! Internally, the deque uses a `Vec`-backed arena of node slots, and
//! tracks next, previous, first, and last nodes by index. As payloads
//! are discarded, their slots are put on an internal free list. This
//! free list is used when payloads are pushed before the arena is
//! expanded.
//!
//! The deque performs no synchronization of its own; sharing one
//! across threads requires external mutual exclusion supplied by the
//! caller. Payload borrows returned by the peek operations end at the
//! next mutating call, which the borrow checker enforces.

mod alloc;
mod deque;
mod error;
mod slot;

pub use crate::alloc::{Allocator, Block, SystemAlloc};
pub use crate::deque::Deque;
pub use crate::error::{EmptyDeque, OutOfMemory};
