//! Stable `u8` tags for every token and AST compound.

use super::tag::{self, TagClass};

/// Tag of a [`Node`](super::Node), with semantic range layout.
///
/// Values are explicit and never renumbered: downstream consumers persist
/// and compare raw tags. Categories occupy contiguous ranges with gaps for
/// future expansion:
///
/// | Range   | Category                                  |
/// |---------|-------------------------------------------|
/// | 0-15    | Leaf tokens that survive into the tree    |
/// | 16-55   | Keywords                                  |
/// | 56-71   | Punctuation (consumed by the parser)      |
/// | 72-126  | Operators (reused as a compound's `op`)   |
/// | 127     | End of input                              |
/// | 128-254 | AST compounds                             |
/// | 255     | Reserved terminator                       |
///
/// # Invariant
///
/// Role is decided by range, not by variant. Everything that classifies a
/// record goes through the predicates in [`tag`](super::tag), which are
/// total over `u8` and agree with this table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum NodeKind {
    // === Leaves (0-15) ===
    Ident = 0,
    Number = 1,
    String = 2,
    Regex = 3,
    TemplateFull = 4,
    TemplateHead = 5,
    TemplateMid = 6,
    TemplateTail = 7,
    True = 8,
    False = 9,
    Null = 10,
    This = 11,
    Super = 12,
    // 13-15: reserved

    // === Keywords (16-55) ===
    KwAsync = 16,
    KwAwait = 17,
    KwBreak = 18,
    KwCase = 19,
    KwCatch = 20,
    KwClass = 21,
    KwConst = 22,
    KwContinue = 23,
    KwDebugger = 24,
    KwDefault = 25,
    KwDelete = 26,
    KwDo = 27,
    KwElse = 28,
    KwExport = 29,
    KwExtends = 30,
    KwFinally = 31,
    KwFor = 32,
    KwFunction = 33,
    KwIf = 34,
    KwImport = 35,
    KwIn = 36,
    KwInstanceof = 37,
    KwLet = 38,
    KwNew = 39,
    KwReturn = 40,
    KwStatic = 41,
    KwSwitch = 42,
    KwThrow = 43,
    KwTry = 44,
    KwTypeof = 45,
    KwVar = 46,
    KwVoid = 47,
    KwWhile = 48,
    KwWith = 49,
    KwYield = 50,
    // 51-55: reserved

    // === Punctuation (56-71) ===
    LBrace = 56,            // {
    RBrace = 57,            // }
    LParen = 58,            // (
    RParen = 59,            // )
    LBracket = 60,          // [
    RBracket = 61,          // ]
    Semi = 62,              // ;
    Comma = 63,             // ,
    Colon = 64,             // :
    Dot = 65,               // .
    DotDotDot = 66,         // ...
    Question = 67,          // ?
    QuestionDot = 68,       // ?.
    QuestionQuestion = 69,  // ??
    FatArrow = 70,          // =>
    // 71: reserved

    // === Operators (72-126) ===
    Plus = 72,                // +
    Minus = 73,               // -
    Star = 74,                // *
    Slash = 75,               // /
    Percent = 76,             // %
    StarStar = 77,            // **
    PlusPlus = 78,            // ++
    MinusMinus = 79,          // --
    Lt = 80,                  // <
    Gt = 81,                  // >
    LtEq = 82,                // <=
    GtEq = 83,                // >=
    EqEq = 84,                // ==
    EqEqEq = 85,              // ===
    BangEq = 86,              // !=
    BangEqEq = 87,            // !==
    Shl = 88,                 // <<
    Shr = 89,                 // >>
    UShr = 90,                // >>>
    Amp = 91,                 // &
    Pipe = 92,                // |
    Caret = 93,               // ^
    Tilde = 94,               // ~
    Bang = 95,                // !
    AmpAmp = 96,              // &&
    PipePipe = 97,            // ||
    Eq = 98,                  // =
    PlusEq = 99,              // +=
    MinusEq = 100,            // -=
    StarEq = 101,             // *=
    SlashEq = 102,            // /=
    PercentEq = 103,          // %=
    StarStarEq = 104,         // **=
    ShlEq = 105,              // <<=
    ShrEq = 106,              // >>=
    UShrEq = 107,             // >>>=
    AmpEq = 108,              // &=
    PipeEq = 109,             // |=
    CaretEq = 110,            // ^=
    AmpAmpEq = 111,           // &&=
    PipePipeEq = 112,         // ||=
    QuestionQuestionEq = 113, // ??=
    // 114-126: reserved

    // === End of input (127) ===
    Eof = 127,

    // === Compounds: expressions (128-145) ===
    Binary = 128,
    Unary = 129,
    Update = 130,
    Assign = 131,
    Ternary = 132,
    Call = 133,
    New = 134,
    Member = 135,
    Index = 136,
    Array = 137,
    Object = 138,
    FuncExpr = 139,
    Arrow = 140,
    Sequence = 141,
    Spread = 142,
    Yield = 143,
    Await = 144,
    Template = 145,

    // === Compounds: statements (146-165) ===
    Block = 146,
    Empty = 147,
    ExprStmt = 148,
    If = 149,
    While = 150,
    DoWhile = 151,
    For = 152,
    ForIn = 153,
    ForOf = 154,
    Switch = 155,
    Case = 156,
    Break = 157,
    Continue = 158,
    Return = 159,
    Throw = 160,
    Try = 161,
    Catch = 162,
    Debugger = 163,
    With = 164,
    Labeled = 165,

    // === Compounds: declarations (166-172) ===
    VarDecl = 166,
    Declarator = 167,
    FuncDecl = 168,
    Class = 169,
    ClassBody = 170,
    Method = 171,
    Property = 172,

    // === Compounds: patterns (173-176) ===
    ArrayPattern = 173,
    ObjectPattern = 174,
    Rest = 175,
    AssignPattern = 176,

    // === Compounds: modules (177-181) ===
    Import = 177,
    Export = 178,
    ImportSpec = 179,
    ExportSpec = 180,
    Program = 181,
}

/// Raw tag to kind, built once from [`NodeKind::ALL`].
const LOOKUP: [Option<NodeKind>; 256] = {
    let mut table = [None; 256];
    let mut i = 0;
    while i < NodeKind::ALL.len() {
        let kind = NodeKind::ALL[i];
        table[kind as usize] = Some(kind);
        i += 1;
    }
    table
};

impl NodeKind {
    /// One past the highest defined tag.
    pub const COUNT: u8 = Self::Program as u8 + 1;

    /// Every defined kind, in tag order.
    pub const ALL: [NodeKind; 160] = [
        Self::Ident,
        Self::Number,
        Self::String,
        Self::Regex,
        Self::TemplateFull,
        Self::TemplateHead,
        Self::TemplateMid,
        Self::TemplateTail,
        Self::True,
        Self::False,
        Self::Null,
        Self::This,
        Self::Super,
        Self::KwAsync,
        Self::KwAwait,
        Self::KwBreak,
        Self::KwCase,
        Self::KwCatch,
        Self::KwClass,
        Self::KwConst,
        Self::KwContinue,
        Self::KwDebugger,
        Self::KwDefault,
        Self::KwDelete,
        Self::KwDo,
        Self::KwElse,
        Self::KwExport,
        Self::KwExtends,
        Self::KwFinally,
        Self::KwFor,
        Self::KwFunction,
        Self::KwIf,
        Self::KwImport,
        Self::KwIn,
        Self::KwInstanceof,
        Self::KwLet,
        Self::KwNew,
        Self::KwReturn,
        Self::KwStatic,
        Self::KwSwitch,
        Self::KwThrow,
        Self::KwTry,
        Self::KwTypeof,
        Self::KwVar,
        Self::KwVoid,
        Self::KwWhile,
        Self::KwWith,
        Self::KwYield,
        Self::LBrace,
        Self::RBrace,
        Self::LParen,
        Self::RParen,
        Self::LBracket,
        Self::RBracket,
        Self::Semi,
        Self::Comma,
        Self::Colon,
        Self::Dot,
        Self::DotDotDot,
        Self::Question,
        Self::QuestionDot,
        Self::QuestionQuestion,
        Self::FatArrow,
        Self::Plus,
        Self::Minus,
        Self::Star,
        Self::Slash,
        Self::Percent,
        Self::StarStar,
        Self::PlusPlus,
        Self::MinusMinus,
        Self::Lt,
        Self::Gt,
        Self::LtEq,
        Self::GtEq,
        Self::EqEq,
        Self::EqEqEq,
        Self::BangEq,
        Self::BangEqEq,
        Self::Shl,
        Self::Shr,
        Self::UShr,
        Self::Amp,
        Self::Pipe,
        Self::Caret,
        Self::Tilde,
        Self::Bang,
        Self::AmpAmp,
        Self::PipePipe,
        Self::Eq,
        Self::PlusEq,
        Self::MinusEq,
        Self::StarEq,
        Self::SlashEq,
        Self::PercentEq,
        Self::StarStarEq,
        Self::ShlEq,
        Self::ShrEq,
        Self::UShrEq,
        Self::AmpEq,
        Self::PipeEq,
        Self::CaretEq,
        Self::AmpAmpEq,
        Self::PipePipeEq,
        Self::QuestionQuestionEq,
        Self::Eof,
        Self::Binary,
        Self::Unary,
        Self::Update,
        Self::Assign,
        Self::Ternary,
        Self::Call,
        Self::New,
        Self::Member,
        Self::Index,
        Self::Array,
        Self::Object,
        Self::FuncExpr,
        Self::Arrow,
        Self::Sequence,
        Self::Spread,
        Self::Yield,
        Self::Await,
        Self::Template,
        Self::Block,
        Self::Empty,
        Self::ExprStmt,
        Self::If,
        Self::While,
        Self::DoWhile,
        Self::For,
        Self::ForIn,
        Self::ForOf,
        Self::Switch,
        Self::Case,
        Self::Break,
        Self::Continue,
        Self::Return,
        Self::Throw,
        Self::Try,
        Self::Catch,
        Self::Debugger,
        Self::With,
        Self::Labeled,
        Self::VarDecl,
        Self::Declarator,
        Self::FuncDecl,
        Self::Class,
        Self::ClassBody,
        Self::Method,
        Self::Property,
        Self::ArrayPattern,
        Self::ObjectPattern,
        Self::Rest,
        Self::AssignPattern,
        Self::Import,
        Self::Export,
        Self::ImportSpec,
        Self::ExportSpec,
        Self::Program,
    ];

    /// Look up the kind for a raw tag.
    ///
    /// Returns `None` for reserved gaps and for tags at or above [`Self::COUNT`].
    #[inline]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        LOOKUP[raw as usize]
    }

    /// The raw tag value.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Range class of this kind. Always `Some` for a defined kind.
    #[inline]
    pub const fn class(self) -> Option<TagClass> {
        TagClass::of(self as u8)
    }

    /// Token-role kind (tag <= 127).
    #[inline]
    pub const fn is_token(self) -> bool {
        tag::is_token(self as u8)
    }

    /// Compound-role kind (tag > 127).
    #[inline]
    pub const fn is_compound(self) -> bool {
        tag::is_compound(self as u8)
    }

    /// Leaf token that survives into the tree.
    #[inline]
    pub const fn is_leaf(self) -> bool {
        tag::is_leaf(self as u8)
    }

    /// Keyword token.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        tag::is_keyword(self as u8)
    }

    /// Punctuation token.
    #[inline]
    pub const fn is_punct(self) -> bool {
        tag::is_punct(self as u8)
    }

    /// Operator token, valid as a compound's `op` value.
    #[inline]
    pub const fn is_operator(self) -> bool {
        tag::is_operator(self as u8)
    }

    /// Get a human-readable name for this kind.
    ///
    /// Tokens render as their source lexeme; compounds as a short label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ident => "identifier",
            Self::Number => "number",
            Self::String => "string",
            Self::Regex => "regular expression",
            Self::TemplateFull => "template literal",
            Self::TemplateHead => "template head",
            Self::TemplateMid => "template middle",
            Self::TemplateTail => "template tail",
            Self::True => "true",
            Self::False => "false",
            Self::Null => "null",
            Self::This => "this",
            Self::Super => "super",
            Self::KwAsync => "async",
            Self::KwAwait => "await",
            Self::KwBreak => "break",
            Self::KwCase => "case",
            Self::KwCatch => "catch",
            Self::KwClass => "class",
            Self::KwConst => "const",
            Self::KwContinue => "continue",
            Self::KwDebugger => "debugger",
            Self::KwDefault => "default",
            Self::KwDelete => "delete",
            Self::KwDo => "do",
            Self::KwElse => "else",
            Self::KwExport => "export",
            Self::KwExtends => "extends",
            Self::KwFinally => "finally",
            Self::KwFor => "for",
            Self::KwFunction => "function",
            Self::KwIf => "if",
            Self::KwImport => "import",
            Self::KwIn => "in",
            Self::KwInstanceof => "instanceof",
            Self::KwLet => "let",
            Self::KwNew => "new",
            Self::KwReturn => "return",
            Self::KwStatic => "static",
            Self::KwSwitch => "switch",
            Self::KwThrow => "throw",
            Self::KwTry => "try",
            Self::KwTypeof => "typeof",
            Self::KwVar => "var",
            Self::KwVoid => "void",
            Self::KwWhile => "while",
            Self::KwWith => "with",
            Self::KwYield => "yield",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Semi => ";",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::Dot => ".",
            Self::DotDotDot => "...",
            Self::Question => "?",
            Self::QuestionDot => "?.",
            Self::QuestionQuestion => "??",
            Self::FatArrow => "=>",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::StarStar => "**",
            Self::PlusPlus => "++",
            Self::MinusMinus => "--",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::EqEq => "==",
            Self::EqEqEq => "===",
            Self::BangEq => "!=",
            Self::BangEqEq => "!==",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::UShr => ">>>",
            Self::Amp => "&",
            Self::Pipe => "|",
            Self::Caret => "^",
            Self::Tilde => "~",
            Self::Bang => "!",
            Self::AmpAmp => "&&",
            Self::PipePipe => "||",
            Self::Eq => "=",
            Self::PlusEq => "+=",
            Self::MinusEq => "-=",
            Self::StarEq => "*=",
            Self::SlashEq => "/=",
            Self::PercentEq => "%=",
            Self::StarStarEq => "**=",
            Self::ShlEq => "<<=",
            Self::ShrEq => ">>=",
            Self::UShrEq => ">>>=",
            Self::AmpEq => "&=",
            Self::PipeEq => "|=",
            Self::CaretEq => "^=",
            Self::AmpAmpEq => "&&=",
            Self::PipePipeEq => "||=",
            Self::QuestionQuestionEq => "??=",
            Self::Eof => "end of input",
            Self::Binary => "binary expression",
            Self::Unary => "unary expression",
            Self::Update => "update expression",
            Self::Assign => "assignment",
            Self::Ternary => "conditional expression",
            Self::Call => "call",
            Self::New => "new expression",
            Self::Member => "member access",
            Self::Index => "index access",
            Self::Array => "array literal",
            Self::Object => "object literal",
            Self::FuncExpr => "function expression",
            Self::Arrow => "arrow function",
            Self::Sequence => "sequence expression",
            Self::Spread => "spread element",
            Self::Yield => "yield expression",
            Self::Await => "await expression",
            Self::Template => "template expression",
            Self::Block => "block",
            Self::Empty => "empty statement",
            Self::ExprStmt => "expression statement",
            Self::If => "if statement",
            Self::While => "while loop",
            Self::DoWhile => "do-while loop",
            Self::For => "for loop",
            Self::ForIn => "for-in loop",
            Self::ForOf => "for-of loop",
            Self::Switch => "switch statement",
            Self::Case => "switch case",
            Self::Break => "break statement",
            Self::Continue => "continue statement",
            Self::Return => "return statement",
            Self::Throw => "throw statement",
            Self::Try => "try statement",
            Self::Catch => "catch clause",
            Self::Debugger => "debugger statement",
            Self::With => "with statement",
            Self::Labeled => "labeled statement",
            Self::VarDecl => "variable declaration",
            Self::Declarator => "declarator",
            Self::FuncDecl => "function declaration",
            Self::Class => "class",
            Self::ClassBody => "class body",
            Self::Method => "method",
            Self::Property => "property",
            Self::ArrayPattern => "array pattern",
            Self::ObjectPattern => "object pattern",
            Self::Rest => "rest element",
            Self::AssignPattern => "assignment pattern",
            Self::Import => "import declaration",
            Self::Export => "export declaration",
            Self::ImportSpec => "import specifier",
            Self::ExportSpec => "export specifier",
            Self::Program => "program",
        }
    }
}

impl From<NodeKind> for u8 {
    #[inline]
    fn from(kind: NodeKind) -> u8 {
        kind as u8
    }
}

impl TryFrom<u8> for NodeKind {
    type Error = u8;

    /// Fails with the raw value when it names no kind.
    #[inline]
    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::from_raw(raw).ok_or(raw)
    }
}

#[cfg(test)]
mod tests;
