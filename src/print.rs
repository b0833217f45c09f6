//! A debug-only tree dump. Output format carries no stability guarantee
//! across versions; it exists for eyeballing test failures and interactive
//! debugging, not for machine consumption.

use std::fmt::Write as _;

use crate::arena::{Arena, VertexId};

/// Renders the tree rooted at `root` as an indented, one-vertex-per-line
/// tree. Compressed edges are quoted (`"abc"`), branching vertices are
/// bracketed (`[abc]` listing every first byte they fan out on), and a
/// vertex holding a value is marked with a trailing `*`.
pub(crate) fn format_tree<V>(arena: &Arena<V>, root: VertexId) -> String {
    let mut out = String::new();
    write_vertex(&mut out, arena, root, 0);
    out
}

fn write_vertex<V>(out: &mut String, arena: &Arena<V>, id: VertexId, depth: usize) {
    let v = arena.get(id);
    for _ in 0..depth {
        out.push_str("  ");
    }
    if v.is_compressed {
        let _ = write!(out, "\"{}\"", escape(v.label()));
    } else {
        let _ = write!(out, "[{}]", escape(v.label()));
    }
    if v.is_key {
        out.push('*');
    }
    out.push('\n');

    for i in 0..v.child_count() {
        write_vertex(out, arena, v.nth_child(i), depth + 1);
    }
}

fn escape(label: &[u8]) -> String {
    label
        .iter()
        .map(|&b| match b {
            0x20..=0x7e => (b as char).to_string(),
            other => format!("\\x{other:02x}"),
        })
        .collect()
}
