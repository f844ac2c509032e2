//! End-to-end scenarios: a producer lexing a tiny program into the arena,
//! then a parser laying compounds over the tokens.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use jsopt_ir::{ArenaConfig, Node, NodeArena, NodeFlags, NodeIdx, NodeKind, Strategy};
use pretty_assertions::assert_eq;

/// Route arena logs to the test harness. Set `RUST_LOG=jsopt_ir=debug` to see them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// `x = 42;` as (kind, start, end) tokens on line 1.
const SOURCE_TOKENS: [(NodeKind, u32, u32); 4] = [
    (NodeKind::Ident, 0, 1),
    (NodeKind::Eq, 2, 3),
    (NodeKind::Number, 4, 6),
    (NodeKind::Semi, 6, 7),
];

fn lex(arena: &mut NodeArena) -> Vec<NodeIdx> {
    SOURCE_TOKENS
        .iter()
        .map(|&(kind, start, end)| arena.emit_token(kind, start, end, 1))
        .collect()
}

#[test]
fn small_program_grows_on_the_fifth_token() {
    init_tracing();
    let mut arena = NodeArena::growable(5).unwrap();

    let tokens = lex(&mut arena);
    let raw: Vec<u32> = tokens.iter().map(|idx| idx.raw()).collect();
    assert_eq!(raw, vec![1, 2, 3, 4]);
    assert_eq!(arena.len(), 5);
    assert_eq!(arena.capacity(), 5, "four tokens fit without growth");

    let before: Vec<Node> = arena.as_slice().to_vec();
    let eof = arena.push_token(NodeKind::Eof, 7, 0, 1);
    assert_eq!(eof.raw(), 5);
    assert!(arena.capacity() > 5, "fifth token forced growth");
    assert_eq!(&arena.as_slice()[..5], before.as_slice());

    for (&(kind, start, end), idx) in SOURCE_TOKENS.iter().zip(&tokens) {
        let n = arena[*idx];
        assert_eq!(n.node_kind(), Some(kind));
        assert_eq!(n.start, start);
        assert_eq!(n.token_end(), end);
        assert_eq!(n.line(), 1);
    }
}

#[test]
fn parser_builds_over_lexer_output() {
    init_tracing();
    for strategy in [Strategy::Reserve, Strategy::Double] {
        let config = ArenaConfig::default()
            .with_strategy(strategy)
            .with_capacity(4)
            .with_max_nodes(1 << 12)
            .with_huge_pages(false);
        let mut arena = NodeArena::with_config(&config).unwrap();

        let tokens = lex(&mut arena);
        arena.push_token(NodeKind::Eof, 7, 0, 1);
        arena.set_token_end(arena.len());

        // x = 42
        let assign = arena.push_compound(
            NodeKind::Assign,
            NodeFlags::empty(),
            NodeKind::Eq as u16,
            0,
            tokens[0].raw(),
            tokens[2].raw(),
        );
        let program = arena.push_list(1, |first, body| {
            body[0] = Node::compound(NodeKind::ExprStmt, NodeFlags::empty(), 0, 0, assign.raw(), 0);
            Node::compound(NodeKind::Program, NodeFlags::empty(), 0, 0, first.raw(), 1)
        });
        arena.set_root(program);

        assert_eq!(arena.token_end(), 6);
        assert!(arena.iter().all(|(idx, n)| n.is_token() == (idx.raw() < arena.token_end())));

        let root = arena[arena.root()];
        assert_eq!(root.node_kind(), Some(NodeKind::Program));
        let stmt = arena[root.child(0)];
        assert_eq!(stmt.node_kind(), Some(NodeKind::ExprStmt));
        let assign = arena[stmt.child(0)];
        assert_eq!(assign.op_kind(), Some(NodeKind::Eq));
        assert_eq!(arena[assign.child(0)].node_kind(), Some(NodeKind::Ident));
        assert_eq!(arena[assign.child(1)].token_len(), 2);

        arena.free();
        assert!(!arena.is_live());
    }
}

#[test]
fn reservation_hands_out_the_documented_ceiling() {
    init_tracing();
    let arena = NodeArena::new(0).unwrap();
    assert_eq!(arena.capacity(), jsopt_ir::MAX_NODES);
    assert_eq!(arena.len(), 1);
    assert!(arena.get(NodeIdx::from_raw(1)).is_none());
}
