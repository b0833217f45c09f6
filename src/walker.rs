//! The descent shared by lookup, insertion and deletion (C2).
//!
//! A walk consumes as much of a key as the tree already has edges for and
//! stops the moment it can't go further: either the key runs out, a
//! branching vertex has no edge for the next byte, or a compressed edge's
//! label stops matching partway through. Insertion and deletion each do
//! something different with that stopping point, but getting there is
//! identical, so it lives here once.

use crate::arena::{Arena, VertexId};
use crate::stack::{Frame, TraversalStack};

/// How to reach back from the walk's stop vertex to splice in a
/// replacement, without needing a stack at all.
#[derive(Clone, Copy)]
pub(crate) enum ParentLink {
    /// The walk never left the root.
    Root,
    /// The stop vertex is `parent`'s child at `slot` (always `0` when
    /// `parent` is compressed; the sorted branch index otherwise).
    Child { parent: VertexId, slot: usize },
}

/// Where a walk ended up.
pub(crate) struct WalkResult {
    /// Bytes of the key consumed before stopping.
    pub(crate) consumed: usize,
    pub(crate) stop: VertexId,
    pub(crate) parent_link: ParentLink,
    /// When `stop` is compressed, how many bytes of *its* label matched
    /// before the walk had to stop (mismatch or key exhaustion mid-edge).
    /// Always `0` when `stop` is branching or when the walk stopped right
    /// at `stop`'s own entry, before considering its label at all.
    pub(crate) split_pos: usize,
}

/// Descends from `root` following `key`, without recording the path.
/// Used by lookup and insertion, neither of which needs to walk back up.
pub(crate) fn walk<V>(arena: &Arena<V>, root: VertexId, key: &[u8]) -> WalkResult {
    walk_inner(arena, root, key, None)
}

/// Descends from `root` following `key`, recording every vertex visited
/// along the way in a [`TraversalStack`]. Used by deletion, which must
/// walk back up to prune and recompress.
pub(crate) fn walk_with_stack<V>(
    arena: &Arena<V>,
    root: VertexId,
    key: &[u8],
) -> (WalkResult, TraversalStack) {
    let mut stack = TraversalStack::new();
    let result = walk_inner(arena, root, key, Some(&mut stack));
    (result, stack)
}

fn walk_inner<V>(
    arena: &Arena<V>,
    root: VertexId,
    key: &[u8],
    mut stack: Option<&mut TraversalStack>,
) -> WalkResult {
    let len = key.len();
    let mut h = root;
    let mut parent_link = ParentLink::Root;
    let mut i = 0usize;
    let mut j = 0usize;

    loop {
        let v = arena.get(h);
        if v.size() == 0 || i >= len {
            break;
        }

        if v.is_compressed {
            let label = v.label();
            j = 0;
            while j < label.len() && i < len {
                if label[j] != key[i] {
                    break;
                }
                j += 1;
                i += 1;
            }
            if j != label.len() {
                // Mismatch mid-edge, or the key ran out before the edge
                // did — either way the walk stops on this vertex.
                break;
            }
        } else {
            match v.find_branch(key[i]) {
                Some(slot) => {
                    j = slot;
                    i += 1;
                }
                None => break,
            }
        }

        if let Some(stack) = stack.as_deref_mut() {
            let branch_byte = if v.is_compressed {
                None
            } else {
                Some(key[i - 1])
            };
            stack.push(Frame {
                vertex: h,
                branch_byte,
            });
        }

        let child_slot = if v.is_compressed { 0 } else { j };
        let child = v.nth_child(child_slot);
        parent_link = ParentLink::Child {
            parent: h,
            slot: child_slot,
        };
        h = child;
        j = 0;
    }

    let stop_is_compressed = arena.get(h).is_compressed;
    WalkResult {
        consumed: i,
        stop: h,
        parent_link,
        split_pos: if stop_is_compressed { j } else { 0 },
    }
}
