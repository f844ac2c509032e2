//! Append-only, index-addressed store of [`Node`] records.
//!
//! # Layout
//!
//! ```text
//! index:  0        1       2            token_end        len      capacity
//!         [ null ][ tok ][ tok ] ... [ compound ] ... [ zero ... zero ]
//! ```
//!
//! Slot 0 is the reserved null record and is never written. The producer
//! (lexer, then parser) appends records and keeps only [`NodeIdx`] values;
//! the arena never interprets what the indices mean.
//!
//! # Lifecycle
//!
//! An arena is live between a successful [`NodeArena::with_config`] and
//! [`NodeArena::free`] (or drop). A freed arena holds no memory, has every
//! scalar at zero, and rejects further mutation exactly like the hard
//! maximum does.
//!
//! # Exhaustion
//!
//! Running out of capacity mid-parse is fatal: the mutators without a
//! `try_` prefix log the error and abort the process instead of returning a
//! truncated tree. The `try_` twins hand the error back for callers that
//! need to observe it.

mod backing;
mod config;
mod error;

use std::fmt;
use std::ops::{Index, IndexMut};

use tracing::{debug, error};

use crate::{Node, NodeFlags, NodeIdx, NodeKind};
use backing::Backing;

pub use config::{ArenaConfig, Strategy, MAX_NODES, MIN_CAPACITY};
pub use error::ArenaError;

/// Single-owner, single-writer store of node records.
pub struct NodeArena {
    backing: Backing,
    strategy: Strategy,
    /// Logical length, including the null slot.
    count: u32,
    /// Slots usable without growing.
    capacity: u32,
    /// Hard ceiling on `count`.
    max_nodes: u32,
    /// Producer bookkeeping: where token-role records end.
    token_end: u32,
    /// Producer bookkeeping: entry point of the finished tree.
    root: NodeIdx,
}

impl Default for NodeArena {
    /// The memory-less state a freed arena returns to.
    fn default() -> Self {
        NodeArena {
            backing: Backing::Released,
            strategy: Strategy::default(),
            count: 0,
            capacity: 0,
            max_nodes: 0,
            token_end: 0,
            root: NodeIdx::NULL,
        }
    }
}

impl NodeArena {
    /// Create an arena with the default (reservation) strategy.
    ///
    /// The hint only matters to the doubling strategy; a reservation always
    /// covers [`MAX_NODES`].
    pub fn new(capacity_hint: u32) -> Result<Self, ArenaError> {
        Self::with_config(&ArenaConfig::default().with_capacity(capacity_hint))
    }

    /// Create an arena with the doubling strategy, starting at `capacity` records.
    pub fn growable(capacity: u32) -> Result<Self, ArenaError> {
        Self::with_config(&ArenaConfig::growable(capacity))
    }

    /// Create an arena from an explicit configuration.
    ///
    /// On success the length is 1 (the zeroed null slot) and both producer
    /// markers are 0. On failure nothing is left allocated.
    pub fn with_config(config: &ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        let capacity = config.initial_capacity();
        let backing = match config.strategy {
            Strategy::Reserve => Backing::map(capacity, config.huge_pages)?,
            Strategy::Double => Backing::heap(capacity)?,
        };
        debug!(
            strategy = ?config.strategy,
            capacity,
            max_nodes = config.max_nodes,
            huge_pages = backing.is_huge(),
            "node arena created"
        );
        Ok(NodeArena {
            backing,
            strategy: config.strategy,
            count: 1,
            capacity,
            max_nodes: config.max_nodes,
            token_end: 0,
            root: NodeIdx::NULL,
        })
    }

    /// Release all backing memory and zero every field.
    ///
    /// Calling this on an already freed (or default) arena is a no-op.
    pub fn free(&mut self) {
        if !self.is_live() {
            return;
        }
        debug!(len = self.count, capacity = self.capacity, "node arena freed");
        *self = NodeArena::default();
    }

    // === Mutation ===

    /// Append a token record and return its index.
    ///
    /// Lengths above [`MAX_INLINE_LEN`](crate::MAX_INLINE_LEN) are stored
    /// through the overflow sentinel. Aborts the process on exhaustion.
    #[inline]
    pub fn push_token(&mut self, kind: NodeKind, start: u32, len: u32, line: u32) -> NodeIdx {
        self.try_push_token(kind, start, len, line)
            .unwrap_or_else(|err| fatal(&err))
    }

    /// Append a token record spanning `start..end`. The lexer's hot path.
    ///
    /// `end` must not be before `start`; debug builds assert it.
    #[inline]
    pub fn emit_token(&mut self, kind: NodeKind, start: u32, end: u32, line: u32) -> NodeIdx {
        debug_assert!(end >= start, "token {kind:?} ends at {end} before its start {start}");
        self.push_token(kind, start, end.wrapping_sub(start), line)
    }

    /// Append a compound record with its fields verbatim.
    ///
    /// No check that `op`, `d0` and `d1` make sense for `kind`; that is the
    /// producer's contract. Aborts the process on exhaustion.
    #[inline]
    pub fn push_compound(
        &mut self,
        kind: NodeKind,
        flags: NodeFlags,
        op: u16,
        start: u32,
        d0: u32,
        d1: u32,
    ) -> NodeIdx {
        self.try_push_compound(kind, flags, op, start, d0, d1)
            .unwrap_or_else(|err| fatal(&err))
    }

    /// Claim `n` contiguous zeroed slots and return the first.
    ///
    /// Nothing is written. To place a parent directly after `n` children,
    /// reserve `n + 1` and write the parent into `first.offset(n)` yourself:
    /// a later push lands after the whole block, not in it. [`push_list`]
    /// does both steps in one call. Aborts the process on exhaustion.
    ///
    /// [`push_list`]: Self::push_list
    #[inline]
    pub fn reserve(&mut self, n: u32) -> NodeIdx {
        self.try_reserve(n).unwrap_or_else(|err| fatal(&err))
    }

    /// Lay out `len` children and their parent in one block.
    ///
    /// Reserves `len + 1` slots, hands `build` the index of the first child
    /// and the `len` zeroed child slots, and stores the record it returns in
    /// the final slot. Returns the parent's index, `first + len`. With
    /// `len == 0` the first index is the parent's own.
    /// Aborts the process on exhaustion.
    pub fn push_list<F>(&mut self, len: u32, build: F) -> NodeIdx
    where
        F: FnOnce(NodeIdx, &mut [Node]) -> Node,
    {
        self.try_push_list(len, build)
            .unwrap_or_else(|err| fatal(&err))
    }

    /// Fallible [`push_token`](Self::push_token).
    pub fn try_push_token(
        &mut self,
        kind: NodeKind,
        start: u32,
        len: u32,
        line: u32,
    ) -> Result<NodeIdx, ArenaError> {
        self.try_push_node(Node::token(kind, start, len, line))
    }

    /// Fallible [`push_compound`](Self::push_compound).
    pub fn try_push_compound(
        &mut self,
        kind: NodeKind,
        flags: NodeFlags,
        op: u16,
        start: u32,
        d0: u32,
        d1: u32,
    ) -> Result<NodeIdx, ArenaError> {
        self.try_push_node(Node::compound(kind, flags, op, start, d0, d1))
    }

    /// Fallible [`reserve`](Self::reserve).
    pub fn try_reserve(&mut self, n: u32) -> Result<NodeIdx, ArenaError> {
        self.claim(n).map(NodeIdx::from_raw)
    }

    /// Fallible [`push_list`](Self::push_list).
    pub fn try_push_list<F>(&mut self, len: u32, build: F) -> Result<NodeIdx, ArenaError>
    where
        F: FnOnce(NodeIdx, &mut [Node]) -> Node,
    {
        let total = len.checked_add(1).ok_or(ArenaError::Exhausted {
            capacity: self.max_nodes,
            requested: u64::from(self.count) + u64::from(len) + 1,
        })?;
        let first = self.claim(total)?;
        let parent_at = first + len;
        let nodes = self.backing.nodes_mut();
        let parent = build(
            NodeIdx::from_raw(first),
            &mut nodes[first as usize..parent_at as usize],
        );
        nodes[parent_at as usize] = parent;
        Ok(NodeIdx::from_raw(parent_at))
    }

    fn try_push_node(&mut self, node: Node) -> Result<NodeIdx, ArenaError> {
        let idx = self.claim(1)?;
        self.backing.nodes_mut()[idx as usize] = node;
        Ok(NodeIdx::from_raw(idx))
    }

    /// Advance the length by `n`, growing if needed. Returns the old length.
    #[inline]
    fn claim(&mut self, n: u32) -> Result<u32, ArenaError> {
        let first = self.count;
        let needed = match first.checked_add(n) {
            Some(needed) if needed <= self.max_nodes => needed,
            _ => {
                return Err(ArenaError::Exhausted {
                    capacity: self.max_nodes,
                    requested: u64::from(first) + u64::from(n),
                })
            }
        };
        if needed > self.capacity {
            self.grow(needed)?;
        }
        self.count = needed;
        Ok(first)
    }

    /// Double the capacity (at least to `needed`, at most to the ceiling).
    #[cold]
    fn grow(&mut self, needed: u32) -> Result<(), ArenaError> {
        let new_capacity = self
            .capacity
            .saturating_mul(2)
            .max(needed)
            .min(self.max_nodes);
        self.backing.grow(new_capacity)?;
        debug!(
            old = self.capacity,
            new = new_capacity,
            len = self.count,
            "node arena grew"
        );
        self.capacity = new_capacity;
        Ok(())
    }

    // === Producer markers ===

    /// Where token-role records end, as set by the producer.
    #[inline]
    pub fn token_end(&self) -> u32 {
        self.token_end
    }

    /// Record where token-role records end.
    #[inline]
    pub fn set_token_end(&mut self, token_end: u32) {
        self.token_end = token_end;
    }

    /// Entry point of the finished tree, as set by the producer.
    #[inline]
    pub fn root(&self) -> NodeIdx {
        self.root
    }

    /// Record the entry point of the finished tree.
    #[inline]
    pub fn set_root(&mut self, root: NodeIdx) {
        self.root = root;
    }

    // === Read access ===

    /// Logical length, including the null slot (1 for a fresh arena).
    #[inline]
    pub fn len(&self) -> u32 {
        self.count
    }

    /// Returns `true` if no record beyond the null slot exists.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count <= 1
    }

    /// Slots usable before the next growth (or, reserved, before exhaustion).
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Hard ceiling on the length.
    #[inline]
    pub fn max_nodes(&self) -> u32 {
        self.max_nodes
    }

    /// Allocation strategy in use.
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Whether the arena still owns backing memory.
    #[inline]
    pub fn is_live(&self) -> bool {
        !matches!(self.backing, Backing::Released)
    }

    /// Get a live record. `None` for [`NodeIdx::NULL`] and past the length.
    #[inline]
    pub fn get(&self, idx: NodeIdx) -> Option<&Node> {
        if idx.is_valid() && idx.raw() < self.count {
            Some(&self.backing.nodes()[idx.index()])
        } else {
            None
        }
    }

    /// Get a live record mutably. Same bounds as [`get`](Self::get).
    #[inline]
    pub fn get_mut(&mut self, idx: NodeIdx) -> Option<&mut Node> {
        if idx.is_valid() && idx.raw() < self.count {
            Some(&mut self.backing.nodes_mut()[idx.index()])
        } else {
            None
        }
    }

    /// Raw tag of the record at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not below the length.
    #[inline]
    pub fn kind(&self, idx: NodeIdx) -> u8 {
        self[idx].kind
    }

    /// Every record up to the length, null slot included.
    #[inline]
    pub fn as_slice(&self) -> &[Node] {
        &self.backing.nodes()[..self.count as usize]
    }

    /// Iterate over live records (index 1 onward) with their indices.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIdx, &Node)> {
        (1..self.count)
            .map(NodeIdx::from_raw)
            .zip(self.as_slice().iter().skip(1))
    }

    /// Base address of the backing buffer; null once freed.
    ///
    /// Stable for the arena's lifetime under [`Strategy::Reserve`]; may change
    /// on growth under [`Strategy::Double`].
    #[inline]
    pub fn as_ptr(&self) -> *const Node {
        self.backing.as_ptr()
    }
}

impl Index<NodeIdx> for NodeArena {
    type Output = Node;

    /// Slot 0 reads as the null record; anything at or past the length panics.
    #[inline]
    fn index(&self, idx: NodeIdx) -> &Self::Output {
        &self.as_slice()[idx.index()]
    }
}

impl IndexMut<NodeIdx> for NodeArena {
    /// Same bounds as reading, except that slot 0 is never writable.
    #[inline]
    fn index_mut(&mut self, idx: NodeIdx) -> &mut Self::Output {
        assert!(idx.is_valid(), "cannot write the reserved null slot");
        let count = self.count as usize;
        &mut self.backing.nodes_mut()[..count][idx.index()]
    }
}

impl fmt::Debug for NodeArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeArena")
            .field("strategy", &self.strategy)
            .field("len", &self.count)
            .field("capacity", &self.capacity)
            .field("token_end", &self.token_end)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

/// Stop the process on a mutation failure.
///
/// A parser cannot continue correctly on a truncated tree, so there is no
/// partial result to return.
#[cold]
#[inline(never)]
fn fatal(err: &ArenaError) -> ! {
    error!(%err, "node arena exhausted, aborting");
    eprintln!("jsopt: {err}");
    std::process::abort()
}
