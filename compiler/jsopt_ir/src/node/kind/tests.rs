use super::*;
use pretty_assertions::assert_eq;

// === Discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    // Leaves: 0-12
    assert_eq!(NodeKind::Ident as u8, 0);
    assert_eq!(NodeKind::Number as u8, 1);
    assert_eq!(NodeKind::Super as u8, 12);

    // Keywords: 16-50
    assert_eq!(NodeKind::KwAsync as u8, 16);
    assert_eq!(NodeKind::KwFunction as u8, 33);
    assert_eq!(NodeKind::KwYield as u8, 50);

    // Punctuation: 56-70
    assert_eq!(NodeKind::LBrace as u8, 56);
    assert_eq!(NodeKind::Semi as u8, 62);
    assert_eq!(NodeKind::FatArrow as u8, 70);

    // Operators: 72-113
    assert_eq!(NodeKind::Plus as u8, 72);
    assert_eq!(NodeKind::Eq as u8, 98);
    assert_eq!(NodeKind::QuestionQuestionEq as u8, 113);

    // End of input
    assert_eq!(NodeKind::Eof as u8, 127);

    // Compounds: 128-181
    assert_eq!(NodeKind::Binary as u8, 128);
    assert_eq!(NodeKind::Block as u8, 146);
    assert_eq!(NodeKind::VarDecl as u8, 166);
    assert_eq!(NodeKind::ArrayPattern as u8, 173);
    assert_eq!(NodeKind::Program as u8, 181);
    assert_eq!(NodeKind::COUNT, 182);
}

#[test]
fn kind_is_one_byte() {
    assert_eq!(std::mem::size_of::<NodeKind>(), 1);
}

// === ALL table ===

#[test]
fn all_is_strictly_ascending() {
    for pair in NodeKind::ALL.windows(2) {
        assert!(pair[0] < pair[1], "{:?} before {:?}", pair[0], pair[1]);
    }
    assert_eq!(NodeKind::ALL.first(), Some(&NodeKind::Ident));
    assert_eq!(NodeKind::ALL.last(), Some(&NodeKind::Program));
}

#[test]
fn all_matches_category_sizes() {
    let count = |pred: fn(NodeKind) -> bool| NodeKind::ALL.iter().filter(|k| pred(**k)).count();
    assert_eq!(count(NodeKind::is_leaf), 13);
    assert_eq!(count(NodeKind::is_keyword), 35);
    assert_eq!(count(NodeKind::is_punct), 15);
    assert_eq!(count(NodeKind::is_operator), 42);
    assert_eq!(count(NodeKind::is_compound), 54);
    assert_eq!(count(NodeKind::is_token), 106);
}

// === Raw conversion ===

#[test]
fn from_raw_round_trips_every_kind() {
    for kind in NodeKind::ALL {
        assert_eq!(NodeKind::from_raw(kind.as_u8()), Some(kind));
        assert_eq!(NodeKind::try_from(u8::from(kind)), Ok(kind));
    }
}

#[test]
fn from_raw_rejects_gaps() {
    for raw in [13, 14, 15, 51, 55, 71, 114, 126, 182, 200, 254, 255] {
        assert_eq!(NodeKind::from_raw(raw), None, "tag {raw}");
        assert_eq!(NodeKind::try_from(raw), Err(raw));
    }
}

#[test]
fn defined_kinds_count() {
    let defined = (0..=u8::MAX)
        .filter(|raw| NodeKind::from_raw(*raw).is_some())
        .count();
    assert_eq!(defined, NodeKind::ALL.len());
}

// === Names ===

#[test]
fn token_names_are_lexemes() {
    assert_eq!(NodeKind::LBrace.name(), "{");
    assert_eq!(NodeKind::DotDotDot.name(), "...");
    assert_eq!(NodeKind::UShrEq.name(), ">>>=");
    assert_eq!(NodeKind::QuestionQuestionEq.name(), "??=");
    assert_eq!(NodeKind::KwInstanceof.name(), "instanceof");
    assert_eq!(NodeKind::Eof.name(), "end of input");
}

#[test]
fn compound_names_are_labels() {
    assert_eq!(NodeKind::Binary.name(), "binary expression");
    assert_eq!(NodeKind::ForOf.name(), "for-of loop");
    assert_eq!(NodeKind::Program.name(), "program");
}

#[test]
fn names_are_never_empty() {
    for kind in NodeKind::ALL {
        assert!(!kind.name().is_empty(), "{kind:?}");
    }
}
