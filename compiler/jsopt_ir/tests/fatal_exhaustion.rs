//! Exhaustion through the plain mutators stops the process.
//!
//! The test re-runs its own binary with a marker variable set; the child
//! overflows a tiny arena and must abort instead of returning.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::env;
use std::process::Command;

use jsopt_ir::{ArenaConfig, NodeArena, NodeKind};

const CHILD_MARKER: &str = "JSOPT_IR_EXHAUSTION_CHILD";

fn overflow_tiny_arena() {
    let config = ArenaConfig::growable(2).with_max_nodes(2);
    let mut arena = NodeArena::with_config(&config).unwrap();
    arena.push_token(NodeKind::Ident, 0, 1, 1);
    arena.push_token(NodeKind::Ident, 2, 1, 1);
}

#[test]
fn push_past_the_ceiling_aborts() {
    if env::var_os(CHILD_MARKER).is_some() {
        overflow_tiny_arena();
        return;
    }

    let output = Command::new(env::current_exe().unwrap())
        .args(["push_past_the_ceiling_aborts", "--exact", "--nocapture"])
        .env(CHILD_MARKER, "1")
        .output()
        .unwrap();

    assert!(!output.status.success(), "child returned normally");
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        assert_eq!(output.status.signal(), Some(6), "expected SIGABRT");
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("jsopt: node limit exceeded (2): 3 slots requested"),
        "{stderr}"
    );
}
