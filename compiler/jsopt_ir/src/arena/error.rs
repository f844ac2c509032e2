//! Arena failures.

use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

/// Errors raised by [`NodeArena`](super::NodeArena).
///
/// Construction errors are recoverable: no arena is produced. `Alloc` and
/// `Exhausted` raised during mutation are not, since the producer cannot
/// continue without truncating the tree; the non-`try_` mutators abort on them.
#[derive(Debug, Error)]
pub enum ArenaError {
    /// The OS refused every reservation attempt.
    #[error("failed to reserve {bytes} bytes of address space for {nodes} nodes: {source}")]
    Map {
        nodes: u32,
        bytes: usize,
        #[source]
        source: io::Error,
    },

    /// The heap allocator could not provide the buffer.
    #[error("failed to allocate storage for {nodes} nodes: {source}")]
    Alloc {
        nodes: u32,
        #[source]
        source: TryReserveError,
    },

    /// The arena's hard maximum was reached.
    #[error("node limit exceeded ({capacity}): {requested} slots requested")]
    Exhausted { capacity: u32, requested: u64 },

    /// The configured ceiling cannot hold the null slot plus one record.
    #[error("invalid arena configuration: max_nodes {max_nodes} is unusable")]
    InvalidConfig { max_nodes: u32 },
}

impl ArenaError {
    /// Whether this error can only be answered by stopping the producer.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Alloc { .. } | Self::Exhausted { .. })
    }
}
