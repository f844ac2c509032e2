//! Range classification of raw node tags.
//!
//! Every predicate here is total over `u8`: it answers for reserved gaps and
//! undefined values too, because the ranges (not the set of defined kinds)
//! are what producers and consumers agree on.

/// First keyword tag.
const KEYWORD_START: u8 = 16;
/// First punctuation tag.
const PUNCT_START: u8 = 56;
/// First operator tag.
const OPERATOR_START: u8 = 72;
/// End-of-input tag, and the last token-role tag.
const EOF: u8 = 127;

/// Terminator tag. Never a valid kind.
pub const TAG_RESERVED: u8 = 255;

/// Leaf token that survives into the tree (0-15).
#[inline]
pub const fn is_leaf(tag: u8) -> bool {
    tag < KEYWORD_START
}

/// Keyword token (16-55).
#[inline]
pub const fn is_keyword(tag: u8) -> bool {
    tag >= KEYWORD_START && tag < PUNCT_START
}

/// Punctuation token (56-71).
#[inline]
pub const fn is_punct(tag: u8) -> bool {
    tag >= PUNCT_START && tag < OPERATOR_START
}

/// Operator token (72-126).
#[inline]
pub const fn is_operator(tag: u8) -> bool {
    tag >= OPERATOR_START && tag < EOF
}

/// End-of-input sentinel (127).
#[inline]
pub const fn is_eof(tag: u8) -> bool {
    tag == EOF
}

/// Token-role tag (0-127): `op` holds a byte length.
#[inline]
pub const fn is_token(tag: u8) -> bool {
    tag <= EOF
}

/// Compound-role tag (128-255): `op` holds a secondary classification.
///
/// This is the raw threshold test, so it also holds for [`TAG_RESERVED`];
/// use [`TagClass::of`] when the terminator must be rejected.
#[inline]
pub const fn is_compound(tag: u8) -> bool {
    tag > EOF
}

/// The single range class a tag falls in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagClass {
    Leaf,
    Keyword,
    Punct,
    Operator,
    Eof,
    Compound,
}

impl TagClass {
    /// Classify a raw tag. `None` only for [`TAG_RESERVED`].
    pub const fn of(tag: u8) -> Option<Self> {
        match tag {
            0..=15 => Some(Self::Leaf),
            16..=55 => Some(Self::Keyword),
            56..=71 => Some(Self::Punct),
            72..=126 => Some(Self::Operator),
            127 => Some(Self::Eof),
            128..=254 => Some(Self::Compound),
            TAG_RESERVED => None,
        }
    }

    /// Whether records of this class are token-role.
    #[inline]
    pub const fn is_token(self) -> bool {
        !matches!(self, Self::Compound)
    }
}
