//! Backing memory for the node arena.
//!
//! Two shapes, both zero-filled and aligned to at least a cache line:
//! - an anonymous mapping sized for the arena's ceiling, whose pages the OS
//!   commits on first touch (the base address never moves);
//! - a heap vector of 64-byte [`CacheLine`]s, reallocated on growth.

use std::io;
use std::slice;

use memmap2::{MmapMut, MmapOptions};
use tracing::trace;

use super::error::ArenaError;
use crate::Node;

/// Cache line size in bytes.
pub(super) const CACHE_LINE: usize = 64;

const NODE_SIZE: usize = size_of::<Node>();
const NODES_PER_LINE: usize = CACHE_LINE / NODE_SIZE;

/// Huge page size used for the first mapping attempt (2 MiB).
const HUGE_PAGE_BITS: u8 = 21;
const HUGE_PAGE: usize = 1 << HUGE_PAGE_BITS;

/// Four records on one cache line.
#[derive(Clone, Copy)]
#[repr(C, align(64))]
pub(super) struct CacheLine([Node; NODES_PER_LINE]);

impl CacheLine {
    const ZERO: CacheLine = CacheLine([Node::NULL; NODES_PER_LINE]);
}

const _: () = assert!(size_of::<CacheLine>() == CACHE_LINE);
const _: () = assert!(align_of::<CacheLine>() == CACHE_LINE);

pub(super) enum Backing {
    /// No memory: a default or freed arena.
    Released,
    /// Anonymous mapping; `huge` records whether 2 MiB pages were granted.
    Reserved { map: MmapMut, huge: bool },
    /// Heap cache lines, doubled by the arena on overflow.
    Growable(Vec<CacheLine>),
}

impl Backing {
    /// Map address space for `nodes` records, trying huge pages first.
    pub(super) fn map(nodes: u32, huge_pages: bool) -> Result<Self, ArenaError> {
        let bytes = nodes as usize * NODE_SIZE;
        if huge_pages && bytes % HUGE_PAGE == 0 {
            match map_anon(bytes, true) {
                Ok(map) => return Ok(Self::Reserved { map, huge: true }),
                Err(err) => trace!(%err, "huge pages unavailable, using regular pages"),
            }
        }
        let map = map_anon(bytes, false).map_err(|source| ArenaError::Map {
            nodes,
            bytes,
            source,
        })?;
        Ok(Self::Reserved { map, huge: false })
    }

    /// Allocate zeroed heap storage for at least `nodes` records.
    pub(super) fn heap(nodes: u32) -> Result<Self, ArenaError> {
        let mut backing = Self::Growable(Vec::new());
        backing.grow(nodes)?;
        Ok(backing)
    }

    /// Extend heap storage to hold at least `nodes` records.
    ///
    /// Existing records are moved with the buffer; everything past them is
    /// zero. A mapping cannot grow, so asking it for more than it holds is
    /// exhaustion.
    pub(super) fn grow(&mut self, nodes: u32) -> Result<(), ArenaError> {
        match self {
            Self::Growable(lines) => {
                let want = (nodes as usize).div_ceil(NODES_PER_LINE);
                if want > lines.len() {
                    lines
                        .try_reserve_exact(want - lines.len())
                        .map_err(|source| ArenaError::Alloc { nodes, source })?;
                    lines.resize(want, CacheLine::ZERO);
                }
                Ok(())
            }
            Self::Reserved { .. } | Self::Released => {
                if nodes as usize <= self.slots() {
                    Ok(())
                } else {
                    Err(ArenaError::Exhausted {
                        capacity: u32::try_from(self.slots()).unwrap_or(u32::MAX),
                        requested: u64::from(nodes),
                    })
                }
            }
        }
    }

    /// Whether the mapping landed on huge pages.
    pub(super) fn is_huge(&self) -> bool {
        matches!(self, Self::Reserved { huge: true, .. })
    }

    /// Number of physical record slots.
    pub(super) fn slots(&self) -> usize {
        match self {
            Self::Released => 0,
            Self::Reserved { map, .. } => map.len() / NODE_SIZE,
            Self::Growable(lines) => lines.len() * NODES_PER_LINE,
        }
    }

    /// Every physical slot as records.
    #[allow(
        unsafe_code,
        reason = "reinterprets zeroed, aligned plain-old-data memory as records"
    )]
    #[allow(clippy::cast_ptr_alignment, reason = "both buffers are 64-byte aligned")]
    pub(super) fn nodes(&self) -> &[Node] {
        let ptr = match self {
            Self::Released => return &[],
            Self::Reserved { map, .. } => map.as_ptr().cast::<Node>(),
            Self::Growable(lines) => lines.as_ptr().cast::<Node>(),
        };
        // SAFETY: the mapping is page-aligned and `CacheLine` is 64-byte
        // aligned, both above `Node`'s alignment of 4. Both buffers are fully
        // initialized (zero-filled by the OS or by `resize`) for `slots()`
        // records, and `Node` is integers only with no padding, so every bit
        // pattern is a valid record. The slice borrows `self`.
        unsafe { slice::from_raw_parts(ptr, self.slots()) }
    }

    /// Every physical slot as mutable records.
    #[allow(
        unsafe_code,
        reason = "reinterprets zeroed, aligned plain-old-data memory as records"
    )]
    #[allow(clippy::cast_ptr_alignment, reason = "both buffers are 64-byte aligned")]
    pub(super) fn nodes_mut(&mut self) -> &mut [Node] {
        let slots = self.slots();
        let ptr = match self {
            Self::Released => return &mut [],
            Self::Reserved { map, .. } => map.as_mut_ptr().cast::<Node>(),
            Self::Growable(lines) => lines.as_mut_ptr().cast::<Node>(),
        };
        // SAFETY: as in `nodes`; the slice holds the unique borrow of `self`.
        unsafe { slice::from_raw_parts_mut(ptr, slots) }
    }

    /// Base address of the buffer, null when released.
    pub(super) fn as_ptr(&self) -> *const Node {
        match self {
            Self::Released => std::ptr::null(),
            _ => self.nodes().as_ptr(),
        }
    }
}

/// Map `bytes` of zero-filled anonymous memory.
fn map_anon(bytes: usize, huge: bool) -> io::Result<MmapMut> {
    let mut options = MmapOptions::new();
    options.len(bytes);
    if huge {
        #[cfg(target_os = "linux")]
        options.huge(Some(HUGE_PAGE_BITS));
        #[cfg(not(target_os = "linux"))]
        return Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "huge pages are only requested on Linux",
        ));
    }
    options.map_anon()
}
