//! Deletion (C3): unmark the key, clean up any vertices that existed only
//! to reach it, then opportunistically recompress what's left behind.

use crate::arena::{Arena, VertexId};
use crate::stack::{Frame, TraversalStack};
use crate::vertex::{Vertex, VERTEX_MAX_SIZE};
use crate::walker::walk_with_stack;

/// Removes `key` if present, returning the value that was stored.
pub(crate) fn delete<V>(
    arena: &mut Arena<V>,
    root: &mut VertexId,
    num_elements: &mut usize,
    key: &[u8],
) -> Option<V> {
    let len = key.len();
    let (result, mut stack) = walk_with_stack(arena, *root, key);
    let stop_is_compressed = arena.get(result.stop).is_compressed;

    if result.consumed != len
        || (stop_is_compressed && result.split_pos != 0)
        || !arena.get(result.stop).is_key
    {
        return None;
    }

    let mut h = result.stop;
    let old_value = {
        let v = arena.get_mut(h);
        v.is_key = false;
        v.value.take()
    };
    *num_elements -= 1;

    let mut try_compress = false;

    if arena.get(h).child_count() == 0 {
        // `h` is now a dead end: walk back up, freeing every ancestor that
        // held nothing but the path down to it, until we hit one that's
        // either a key in its own right or branches elsewhere.
        let mut unlink_from: Option<Option<u8>> = None;
        while h != *root {
            arena.remove(h);
            let frame = stack
                .pop()
                .expect("the stack covers every ancestor back to the root");
            h = frame.vertex;
            unlink_from = Some(frame.branch_byte);
            let hv = arena.get(h);
            if hv.is_key || (!hv.is_compressed && hv.child_count() != 1) {
                break;
            }
        }
        if let Some(branch_byte) = unlink_from {
            unlink_child(arena, h, branch_byte);
            let hv = arena.get(h);
            if hv.child_count() == 1 && !hv.is_key {
                try_compress = true;
            }
        }
    } else if arena.get(h).child_count() == 1 {
        try_compress = true;
    }

    if try_compress && stack.oom() {
        try_compress = false;
    }

    if try_compress {
        recompress(arena, root, &mut stack, h);
    }

    old_value
}

/// Removes the single link from `parent` that used to lead to the vertex
/// just freed. A compressed parent collapses to an empty branching vertex
/// (it can't have any other children); a branching parent just drops the
/// one entry.
fn unlink_child<V>(arena: &mut Arena<V>, parent: VertexId, branch_byte: Option<u8>) {
    let v = arena.get_mut(parent);
    if v.is_compressed {
        v.collapse_to_empty_branching();
    } else {
        let byte = branch_byte.expect("a branching parent always names its branch byte");
        v.remove_branch(byte);
    }
}

/// Walks a run of single-child, non-key vertices below `h` back into one
/// compressed vertex, capped at [`VERTEX_MAX_SIZE`]. `stack` still holds
/// `h`'s ancestors at this point, so the merge can climb further up past
/// `h` itself if those ancestors also now qualify (childless cleanup may
/// have left several mergeable vertices stacked on top of each other).
fn recompress<V>(arena: &mut Arena<V>, root: &mut VertexId, stack: &mut TraversalStack, mut h: VertexId) {
    let mut parent_frame: Option<Frame> = None;
    loop {
        match stack.pop() {
            None => break,
            Some(frame) => {
                let p = arena.get(frame.vertex);
                if p.is_key || (!p.is_compressed && p.child_count() != 1) {
                    parent_frame = Some(frame);
                    break;
                }
                h = frame.vertex;
            }
        }
    }

    let mut compression_size = arena.get(h).size();
    let mut merged = vec![h];

    loop {
        if arena.get(h).size() == 0 {
            break;
        }
        let hv = arena.get(h);
        let next = if hv.is_compressed {
            hv.compressed_child()
        } else {
            hv.nth_child(0)
        };
        h = next;
        let nv = arena.get(h);
        if nv.is_key || (!nv.is_compressed && nv.child_count() != 1) {
            break;
        }
        if compression_size + nv.size() > VERTEX_MAX_SIZE {
            break;
        }
        compression_size += nv.size();
        merged.push(h);
    }
    // `h` now names the tail vertex: whatever the merge stopped at, not
    // folded into it, and what the new compressed vertex must point to.
    let tail = h;

    if merged.len() <= 1 {
        return;
    }

    let mut label = Vec::with_capacity(compression_size);
    for &id in &merged {
        label.extend_from_slice(arena.get(id).label());
    }
    for &id in &merged {
        arena.remove(id);
    }
    let new_id = arena.insert(Vertex::compressed(&label, tail));

    match parent_frame {
        Some(frame) => match frame.branch_byte {
            None => arena.get_mut(frame.vertex).set_compressed_child(new_id),
            Some(byte) => {
                let slot = arena
                    .get(frame.vertex)
                    .find_branch(byte)
                    .expect("the recorded branch byte still names a child of its parent");
                arena.get_mut(frame.vertex).set_nth_child(slot, new_id);
            }
        },
        None => *root = new_id,
    }
}
