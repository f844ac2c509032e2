//! Per-record attribute bits.

use bitflags::bitflags;

bitflags! {
    /// Independent boolean attributes of a record, packed into its `flags` byte.
    ///
    /// Attributes are orthogonal and combine freely; all eight together
    /// fill the byte.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct NodeFlags: u8 {
        /// `async` function, method or arrow.
        const ASYNC = 1 << 0;
        /// Generator (`function*`, `*method()`).
        const GENERATOR = 1 << 1;
        /// `const` declaration.
        const CONST = 1 << 2;
        /// `let` declaration.
        const LET = 1 << 3;
        /// `static` class member.
        const STATIC = 1 << 4;
        /// Computed key or member access (`a[b]`, `{ [k]: v }`).
        const COMPUTED = 1 << 5;
        /// Shorthand property (`{ x }`).
        const SHORTHAND = 1 << 6;
        /// Method definition.
        const METHOD = 1 << 7;
    }
}

// Compile-time assertion: NodeFlags fits the record's flags byte.
const _: () = assert!(size_of::<NodeFlags>() == 1);
