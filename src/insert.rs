//! Insertion (C3): four cases dispatched off where the walk (C2) stopped.

use crate::arena::{Arena, VertexId};
use crate::vertex::{Vertex, VERTEX_MAX_SIZE};
use crate::walker::{walk, ParentLink};

/// What to do when the key being inserted already names a stored value.
pub(crate) enum ExistingKeyPolicy {
    Overwrite,
    KeepExisting,
}

/// Outcome of an insertion, from the caller's perspective.
pub(crate) enum InsertOutcome<V> {
    /// The key was new; the tree now has one more element.
    New,
    /// The key already existed and its value was replaced; carries the
    /// value that was there before.
    Replaced(V),
    /// The key already existed and [`ExistingKeyPolicy::KeepExisting`] was
    /// requested; hands the caller's value back unused.
    Kept(V),
}

fn splice<V>(arena: &mut Arena<V>, root: &mut VertexId, parent_link: ParentLink, new_id: VertexId) {
    match parent_link {
        ParentLink::Root => *root = new_id,
        ParentLink::Child { parent, slot } => arena.get_mut(parent).set_nth_child(slot, new_id),
    }
}

pub(crate) fn insert<V>(
    arena: &mut Arena<V>,
    root: &mut VertexId,
    num_elements: &mut usize,
    key: &[u8],
    value: V,
    policy: ExistingKeyPolicy,
) -> InsertOutcome<V> {
    let len = key.len();
    let result = walk(arena, *root, key);
    let stop_is_compressed = arena.get(result.stop).is_compressed;

    // Case A: the vertex entered by consuming exactly `key` already exists
    // (either it's a branching vertex, or it's a compressed vertex and we
    // stopped right at its entry, before any of its own label).
    if result.consumed == len && (!stop_is_compressed || result.split_pos == 0) {
        let v = arena.get_mut(result.stop);
        if !v.is_key {
            v.is_key = true;
            v.value = Some(value);
            *num_elements += 1;
            return InsertOutcome::New;
        }
        return match policy {
            ExistingKeyPolicy::Overwrite => {
                let old = v.value.replace(value).expect("key vertex missing its value");
                InsertOutcome::Replaced(old)
            }
            ExistingKeyPolicy::KeepExisting => InsertOutcome::Kept(value),
        };
    }

    let mut cur;
    let mut i = result.consumed;

    if result.consumed != len && stop_is_compressed {
        // Case B: the key diverges partway through (or right at the start
        // of) a compressed edge. Split it three ways: an optional prefix
        // keeping whatever `stop` used to represent, a new one-branch
        // vertex at the divergence point, and an optional postfix carrying
        // the rest of the old edge down to `stop`'s old child.
        let old = arena.remove(result.stop);
        let label: Vec<u8> = old.label().to_vec();
        let next_child = old.compressed_child();
        let old_is_key = old.is_key;
        let mut old_value = old.value;

        let prefix_len = result.split_pos;
        let postfix_len = label.len() - prefix_len - 1;
        let branch_byte = label[prefix_len];
        let split_vertex_is_key = prefix_len == 0 && old_is_key;

        let postfix_id = if postfix_len > 0 {
            Some(arena.insert(Vertex::compressed(&label[prefix_len + 1..], next_child)))
        } else {
            None
        };
        let split_child = postfix_id.unwrap_or(next_child);

        let mut split_vertex = Vertex::empty_branching();
        split_vertex.insert_branch(branch_byte, split_child);
        if split_vertex_is_key {
            split_vertex.is_key = true;
            split_vertex.value = old_value.take();
        }
        let split_id = arena.insert(split_vertex);

        if prefix_len > 0 {
            let mut prefix_vertex = Vertex::compressed(&label[..prefix_len], split_id);
            prefix_vertex.is_key = old_is_key;
            prefix_vertex.value = old_value.take();
            let prefix_id = arena.insert(prefix_vertex);
            splice(arena, root, result.parent_link, prefix_id);
        } else {
            splice(arena, root, result.parent_link, split_id);
        }

        cur = split_id;
    } else if result.consumed == len && stop_is_compressed {
        // Case C: the key ends exactly partway through a compressed edge.
        // Two-way split: a prefix keeping whatever `stop` used to
        // represent, and a postfix that now holds the new key/value and
        // continues on to `stop`'s old child.
        let old = arena.remove(result.stop);
        let label: Vec<u8> = old.label().to_vec();
        let next_child = old.compressed_child();
        let old_is_key = old.is_key;
        let old_value = old.value;

        let j = result.split_pos;
        let mut postfix_vertex = Vertex::compressed(&label[j..], next_child);
        postfix_vertex.is_key = true;
        postfix_vertex.value = Some(value);
        let postfix_id = arena.insert(postfix_vertex);

        let mut prefix_vertex = Vertex::compressed(&label[..j], postfix_id);
        prefix_vertex.is_key = old_is_key;
        prefix_vertex.value = old_value;
        let prefix_id = arena.insert(prefix_vertex);

        splice(arena, root, result.parent_link, prefix_id);
        *num_elements += 1;
        return InsertOutcome::New;
    } else {
        cur = result.stop;
    }

    // Case D: extend from a branching (or freshly split) vertex by
    // consuming whatever of the key is still left, one compressed run or
    // one branch byte at a time. Neither sub-step ever needs to replace
    // `cur` itself in its parent: a fresh compressed run is written in
    // place over the empty vertex that's already linked in, and a new
    // branch just adds a child under `cur` without touching `cur`'s own
    // link. `cur` may already be a key (e.g. extending `"foo"` with
    // `"foobar"`), so the in-place rewrite must keep its `is_key`/`value`
    // rather than replacing the whole record.
    while i < len {
        let remaining = len - i;
        let cur_size = arena.get(cur).size();

        if cur_size == 0 && remaining > 1 {
            let take = remaining.min(VERTEX_MAX_SIZE);
            let child_id = arena.insert(Vertex::empty_branching());
            arena
                .get_mut(cur)
                .compress_in_place(&key[i..i + take], child_id);
            i += take;
            cur = child_id;
        } else {
            let byte = key[i];
            let child_id = arena.insert(Vertex::empty_branching());
            arena.get_mut(cur).insert_branch(byte, child_id);
            i += 1;
            cur = child_id;
        }
    }

    let v = arena.get_mut(cur);
    let was_key = v.is_key;
    v.is_key = true;
    v.value = Some(value);
    if !was_key {
        *num_elements += 1;
    }
    InsertOutcome::New
}
