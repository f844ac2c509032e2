//! The 16-byte node record shared by tokens and AST compounds.
//!
//! One physical layout serves two roles. The record's tag range decides how
//! `op` and `data` are read:
//!
//! | Field     | Token role (tag <= 127)          | Compound role (tag > 127)          |
//! |-----------|----------------------------------|------------------------------------|
//! | `op`      | byte length, or [`LEN_OVERFLOW`] | secondary kind (e.g. the operator) |
//! | `start`   | source byte offset               | caller-defined offset or child     |
//! | `data[0]` | line number                      | child index or auxiliary value     |
//! | `data[1]` | 0, or the end offset on overflow | child index or auxiliary value     |
//!
//! The layout is a plain `repr(C)` struct with accessors rather than an enum,
//! since a Rust enum over the two shapes could not stay at 16 bytes.

mod flags;
mod index;
mod kind;
mod tag;

use std::fmt;

pub use flags::NodeFlags;
pub use index::NodeIdx;
pub use kind::NodeKind;
pub use tag::{
    is_compound, is_eof, is_keyword, is_leaf, is_operator, is_punct, is_token, TagClass,
    TAG_RESERVED,
};

/// `op` value meaning "length did not fit, end offset is in `data[1]`".
pub const LEN_OVERFLOW: u16 = 0xFFFF;

/// Longest token length stored inline in `op`.
pub const MAX_INLINE_LEN: u32 = LEN_OVERFLOW as u32 - 1;

/// One token or one AST compound.
///
/// # Layout
///
/// ```text
/// offset  0      1       2    4       8         12        16
///         [kind][flags][ op ][ start ][ data[0] ][ data[1] ]
/// ```
///
/// Exactly 16 bytes, so four records fill one 64-byte cache line. Size,
/// alignment and offsets are checked at compile time below.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Node {
    /// Raw [`NodeKind`] tag.
    pub kind: u8,
    /// Raw [`NodeFlags`] bits.
    pub flags: u8,
    /// Token length, or a compound's secondary classification.
    pub op: u16,
    /// Source offset (tokens) or caller-defined value (compounds).
    pub start: u32,
    /// Generic payload.
    pub data: [u32; 2],
}

impl Node {
    /// The all-zero record stored in slot 0.
    pub const NULL: Node = Node {
        kind: 0,
        flags: 0,
        op: 0,
        start: 0,
        data: [0, 0],
    };

    /// Build a token-role record, encoding long lengths through [`LEN_OVERFLOW`].
    ///
    /// Offsets are 32-bit and wrap, so `token_len` still recovers `len` for a
    /// token ending past `u32::MAX`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "len is at most MAX_INLINE_LEN on the inline path"
    )]
    #[inline]
    pub const fn token(kind: NodeKind, start: u32, len: u32, line: u32) -> Self {
        let (op, end) = if len <= MAX_INLINE_LEN {
            (len as u16, 0)
        } else {
            (LEN_OVERFLOW, start.wrapping_add(len))
        };
        Node {
            kind: kind as u8,
            flags: 0,
            op,
            start,
            data: [line, end],
        }
    }

    /// Build a compound-role record from its fields, verbatim.
    #[inline]
    pub const fn compound(
        kind: NodeKind,
        flags: NodeFlags,
        op: u16,
        start: u32,
        d0: u32,
        d1: u32,
    ) -> Self {
        Node {
            kind: kind as u8,
            flags: flags.bits(),
            op,
            start,
            data: [d0, d1],
        }
    }

    /// Typed kind, `None` if the tag names no kind.
    #[inline]
    pub const fn node_kind(&self) -> Option<NodeKind> {
        NodeKind::from_raw(self.kind)
    }

    /// Typed flags.
    #[inline]
    pub const fn node_flags(&self) -> NodeFlags {
        NodeFlags::from_bits_retain(self.flags)
    }

    /// Token-role record (tag <= 127).
    #[inline]
    pub const fn is_token(&self) -> bool {
        is_token(self.kind)
    }

    /// Compound-role record (tag > 127).
    #[inline]
    pub const fn is_compound(&self) -> bool {
        is_compound(self.kind)
    }

    /// Whether this is the all-zero null record.
    #[inline]
    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }

    /// End offset of a token.
    ///
    /// Only meaningful for token-role records; check [`is_token`](Self::is_token)
    /// first. Reading a compound this way is a caller bug, caught only by a
    /// debug assertion.
    #[inline]
    pub fn token_end(&self) -> u32 {
        debug_assert!(self.is_token(), "token_end on compound record {self:?}");
        if self.op == LEN_OVERFLOW {
            self.data[1]
        } else {
            self.start.wrapping_add(u32::from(self.op))
        }
    }

    /// Byte length of a token. Same contract as [`token_end`](Self::token_end).
    #[inline]
    pub fn token_len(&self) -> u32 {
        self.token_end().wrapping_sub(self.start)
    }

    /// Line number of a token.
    #[inline]
    pub const fn line(&self) -> u32 {
        self.data[0]
    }

    /// A compound's `op` read as a tag (e.g. the operator of a `Binary`).
    #[inline]
    pub fn op_kind(&self) -> Option<NodeKind> {
        NodeKind::from_raw(u8::try_from(self.op).ok()?)
    }

    /// Payload word `slot` read as a child index.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not 0 or 1.
    #[inline]
    pub const fn child(&self, slot: usize) -> NodeIdx {
        NodeIdx::from_raw(self.data[slot])
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(kind) = self.node_kind() else {
            return write!(
                f,
                "Node(tag {}, op {}) [{}, {}] @{}",
                self.kind, self.op, self.data[0], self.data[1], self.start
            );
        };
        if kind.is_token() {
            return write!(
                f,
                "{kind:?} {}..{} @{}",
                self.start,
                self.token_end(),
                self.line()
            );
        }
        match self.op_kind() {
            Some(op) if op.is_operator() => write!(f, "{kind:?}({op:?})")?,
            _ => write!(f, "{kind:?}(op {})", self.op)?,
        }
        let flags = self.node_flags();
        if !flags.is_empty() {
            write!(f, " {flags:?}")?;
        }
        write!(f, " [{}, {}] @{}", self.data[0], self.data[1], self.start)
    }
}

// Layout assertions. The record must be 16 bytes with fixed field offsets on
// every target; these fail the build if that ever changes.
mod size_asserts {
    use super::Node;
    use std::mem::offset_of;

    crate::static_assert_size!(Node, 16);
    const _: () = assert!(align_of::<Node>() == 4);
    const _: () = assert!(offset_of!(Node, kind) == 0);
    const _: () = assert!(offset_of!(Node, flags) == 1);
    const _: () = assert!(offset_of!(Node, op) == 2);
    const _: () = assert!(offset_of!(Node, start) == 4);
    const _: () = assert!(offset_of!(Node, data) == 8);
    // Four records per cache line.
    const _: () = assert!(64 % size_of::<Node>() == 0 && 64 / size_of::<Node>() == 4);
}
