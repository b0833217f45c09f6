use slab::Slab;

use crate::vertex::Vertex;

/// Stable handle to a vertex stored in an [`Arena`].
///
/// Vertices never move once inserted (the slab only ever grows or frees
/// slots in place), so a `VertexId` stays valid across any number of other
/// mutations until the vertex it names is explicitly removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct VertexId(u32);

impl VertexId {
    #[inline]
    fn from_slab_key(key: usize) -> Self {
        debug_assert!(key <= u32::MAX as usize, "vertex arena overflowed u32");
        Self(key as u32)
    }

    #[inline]
    fn slab_key(self) -> usize {
        self.0 as usize
    }
}

/// Backing store for every vertex in a [`crate::RadixTree`].
///
/// One allocation region for the whole tree rather than one allocation per
/// vertex: children reference each other by [`VertexId`] (a slab index),
/// never by raw pointer, so nothing goes stale across a reallocation.
pub(crate) struct Arena<V> {
    slab: Slab<Vertex<V>>,
}

impl<V> Arena<V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slab: Slab::with_capacity(capacity),
        }
    }

    /// Number of live vertices. Doubles as the tree's `num_vertices`
    /// counter: the spec asks for an exact count of live vertices as
    /// traversed by a teardown walk, which is exactly what the slab's
    /// live-entry count already is.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slab.len()
    }

    #[inline]
    pub(crate) fn insert(&mut self, vertex: Vertex<V>) -> VertexId {
        VertexId::from_slab_key(self.slab.insert(vertex))
    }

    #[inline]
    pub(crate) fn remove(&mut self, id: VertexId) -> Vertex<V> {
        self.slab.remove(id.slab_key())
    }

    #[inline]
    pub(crate) fn get(&self, id: VertexId) -> &Vertex<V> {
        &self.slab[id.slab_key()]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: VertexId) -> &mut Vertex<V> {
        &mut self.slab[id.slab_key()]
    }
}
