//! Typed index into a `NodeArena`.

use std::fmt;

/// Position of a record in a [`NodeArena`](crate::NodeArena).
///
/// Indices are positions, not ownership: they stay meaningful across buffer
/// growth, and are valid only while the arena that produced them is live.
/// Slot 0 is the permanently reserved null record, so `NodeIdx(0)` doubles
/// as "no node" and every real record has an index >= 1.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct NodeIdx(u32);

impl NodeIdx {
    /// The reserved null index.
    pub const NULL: NodeIdx = NodeIdx(0);

    /// Create a `NodeIdx` from a raw index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        NodeIdx(raw)
    }

    /// Get the raw `u32` index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the index as `usize`, for slicing.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is a valid index (not [`NULL`](Self::NULL)).
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }

    /// The index `n` slots further on.
    ///
    /// Used to address children laid out contiguously after a reservation.
    #[inline]
    #[must_use]
    pub const fn offset(self, n: u32) -> Self {
        NodeIdx(self.0 + n)
    }
}

impl From<NodeIdx> for u32 {
    #[inline]
    fn from(idx: NodeIdx) -> u32 {
        idx.0
    }
}

impl fmt::Debug for NodeIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "NodeIdx({})", self.0)
        } else {
            write!(f, "NodeIdx::NULL")
        }
    }
}

// Compile-time assertion: NodeIdx is exactly 4 bytes.
const _: () = assert!(size_of::<NodeIdx>() == 4);
