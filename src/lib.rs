//! # radixia
//!
//! A compressed radix tree (Patricia trie) over arbitrary byte-string keys,
//! with path compression so that runs of single-child vertices collapse
//! into one multi-byte edge instead of one vertex per byte.
//!
//! ## Features
//!
//! - **O(k) operations**: `insert`/`remove`/`get` all run in O(k) time,
//!   where k is the key length, independent of how many other keys share
//!   the tree.
//! - **Path compression**: non-branching runs are stored as a single edge
//!   with a multi-byte label, kept up to date as keys are inserted and
//!   removed.
//! - **Arbitrary keys**: any byte string, including embedded NULs, is a
//!   valid key.
//! - **Owned values**: the tree owns every value it's given; there's no
//!   unsafe, no raw pointers, and no lifetime parameter to thread through.
//!
//! ## Example
//!
//! ```rust
//! use radixia::RadixTree;
//!
//! let mut tree = RadixTree::new();
//!
//! tree.insert(b"hello", "world");
//! tree.insert(b"hello:foo", "bar");
//!
//! assert_eq!(tree.get(b"hello"), Some(&"world"));
//!
//! let removed = tree.remove(b"hello");
//! assert_eq!(removed, Some("world"));
//! assert_eq!(tree.get(b"hello"), None);
//! ```
//!
//! ## Non-goals
//!
//! This crate does not support ordered iteration, prefix enumeration,
//! persistence, or concurrent access. It is a single-threaded, in-memory
//! point-lookup structure.

mod arena;
mod delete;
mod error;
mod insert;
mod print;
mod stack;
mod vertex;
mod walker;

#[cfg(test)]
mod tests;

use arena::{Arena, VertexId};
use insert::{ExistingKeyPolicy, InsertOutcome};
use vertex::Vertex;

pub use error::{RadixError, MAX_KEY_LEN};

/// A compressed radix tree mapping byte-string keys to owned values of
/// type `V`.
///
/// # Example
///
/// ```rust
/// use radixia::RadixTree;
///
/// let mut tree = RadixTree::new();
/// tree.insert(b"key", "value");
///
/// assert_eq!(tree.get(b"key"), Some(&"value"));
/// ```
pub struct RadixTree<V> {
    arena: Arena<V>,
    root: VertexId,
    num_elements: usize,
}

impl<V> Default for RadixTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RadixTree<V> {
    /// Creates a new, empty tree.
    ///
    /// # Example
    ///
    /// ```rust
    /// use radixia::RadixTree;
    ///
    /// let tree: RadixTree<()> = RadixTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new, empty tree with room for `capacity` vertices without
    /// reallocating the underlying arena.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut arena = Arena::with_capacity(capacity.max(1));
        let root = arena.insert(Vertex::empty_branching());
        Self {
            arena,
            root,
            num_elements: 0,
        }
    }

    /// Number of keys currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.num_elements
    }

    /// Whether the tree holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_elements == 0
    }

    /// Number of live vertices backing the tree. Exposed mainly for tests
    /// asserting on path-compression shape; not part of the crate's
    /// stability contract.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.arena.len()
    }

    /// Inserts `value` under `key`, overwriting and returning any value
    /// previously stored there.
    ///
    /// # Errors
    ///
    /// Returns [`RadixError::KeyTooLong`] if `key` is longer than
    /// [`MAX_KEY_LEN`], without modifying the tree.
    ///
    /// # Example
    ///
    /// ```rust
    /// use radixia::RadixTree;
    ///
    /// let mut tree = RadixTree::new();
    /// assert_eq!(tree.insert(b"k", 1).unwrap(), None);
    /// assert_eq!(tree.insert(b"k", 2).unwrap(), Some(1));
    /// ```
    pub fn insert(&mut self, key: &[u8], value: V) -> Result<Option<V>, RadixError> {
        check_key_len(key)?;
        log::trace!("insert: {} byte key", key.len());
        let outcome = insert::insert(
            &mut self.arena,
            &mut self.root,
            &mut self.num_elements,
            key,
            value,
            ExistingKeyPolicy::Overwrite,
        );
        Ok(match outcome {
            InsertOutcome::New => None,
            InsertOutcome::Replaced(old) => Some(old),
            InsertOutcome::Kept(_) => unreachable!("overwrite policy never keeps the old value"),
        })
    }

    /// Inserts `value` under `key` only if `key` is not already present.
    /// Returns `value` back, unused, if the key already existed.
    ///
    /// # Errors
    ///
    /// Returns [`RadixError::KeyTooLong`] if `key` is longer than
    /// [`MAX_KEY_LEN`], without modifying the tree.
    pub fn insert_if_absent(&mut self, key: &[u8], value: V) -> Result<Result<(), V>, RadixError> {
        check_key_len(key)?;
        log::trace!("insert_if_absent: {} byte key", key.len());
        let outcome = insert::insert(
            &mut self.arena,
            &mut self.root,
            &mut self.num_elements,
            key,
            value,
            ExistingKeyPolicy::KeepExisting,
        );
        Ok(match outcome {
            InsertOutcome::New => Ok(()),
            InsertOutcome::Kept(value) => Err(value),
            InsertOutcome::Replaced(_) => unreachable!("keep-existing policy never replaces"),
        })
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &[u8]) -> Option<V> {
        log::trace!("remove: {} byte key", key.len());
        delete::delete(&mut self.arena, &mut self.root, &mut self.num_elements, key)
    }

    /// Looks up `key`, returning a reference to its value if present.
    pub fn get(&self, key: &[u8]) -> Option<&V> {
        let result = walker::walk(&self.arena, self.root, key);
        let v = self.arena.get(result.stop);
        if result.consumed == key.len() && !(v.is_compressed && result.split_pos != 0) && v.is_key {
            v.value.as_ref()
        } else {
            None
        }
    }

    /// Looks up `key`, returning a mutable reference to its value if
    /// present.
    pub fn get_mut(&mut self, key: &[u8]) -> Option<&mut V> {
        let result = walker::walk(&self.arena, self.root, key);
        let consumed = result.consumed;
        let stop = result.stop;
        let split_pos = result.split_pos;
        let v = self.arena.get_mut(stop);
        if consumed == key.len() && !(v.is_compressed && split_pos != 0) && v.is_key {
            v.value.as_mut()
        } else {
            None
        }
    }

    /// Removes every key, calling `f` once with each stored value in
    /// depth-first teardown order.
    ///
    /// Equivalent to, but cheaper than, collecting every value with
    /// [`RadixTree::remove`] one key at a time: it tears the tree down
    /// directly rather than re-walking from the root for every key.
    pub fn drain_with<F: FnMut(V)>(&mut self, mut f: F) {
        fn visit<V, F: FnMut(V)>(arena: &mut Arena<V>, id: VertexId, f: &mut F) {
            let child_count = arena.get(id).child_count();
            for i in 0..child_count {
                let child = arena.get(id).nth_child(i);
                visit(arena, child, f);
            }
            let v = arena.remove(id);
            if let Some(value) = v.value {
                f(value);
            }
        }
        visit(&mut self.arena, self.root, &mut f);
        self.num_elements = 0;
        self.root = self.arena.insert(Vertex::empty_branching());
    }

    /// Renders the tree as an indented debug tree. No stability guarantee
    /// on the output format across versions.
    pub fn debug_print(&self) -> String {
        print::format_tree(&self.arena, self.root)
    }
}

impl<V> Drop for RadixTree<V> {
    fn drop(&mut self) {
        self.drain_with(|_| {});
    }
}

fn check_key_len(key: &[u8]) -> Result<(), RadixError> {
    if key.len() > MAX_KEY_LEN {
        return Err(RadixError::KeyTooLong { len: key.len() });
    }
    Ok(())
}
