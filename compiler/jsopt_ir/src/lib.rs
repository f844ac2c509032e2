//! jsopt IR - flat node storage for the lexer/parser pipeline.
//!
//! This crate contains the representation every later stage builds on:
//! - [`Node`]: the fixed 16-byte record holding one token or one AST compound
//! - [`NodeKind`]: stable `u8` tags whose numeric ranges decide a record's role
//! - [`NodeArena`]: the append-only, index-addressed store of records
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: no `Box<Node>`, children are [`NodeIdx`] values
//! - **Ranges Are The Contract**: roles are decided by tag ranges, never by
//!   enum membership, so a single threshold (`tag > 127`) separates tokens
//!   from compounds
//! - **Four Records Per Cache Line**: the record layout is asserted at compile
//!   time and the arena's buffer is 64-byte aligned
//!
//! The arena knows nothing about tree shape or token order; that meaning is
//! owned by the producer (lexer or parser) that pushes the records.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
mod node;

pub use arena::{ArenaConfig, ArenaError, NodeArena, Strategy, MAX_NODES, MIN_CAPACITY};
pub use node::{
    is_compound, is_eof, is_keyword, is_leaf, is_operator, is_punct, is_token, Node, NodeFlags,
    NodeIdx, NodeKind, TagClass, LEN_OVERFLOW, MAX_INLINE_LEN, TAG_RESERVED,
};
