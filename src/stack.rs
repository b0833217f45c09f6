use smallvec::SmallVec;

use crate::arena::VertexId;

/// Inline capacity before the traversal stack promotes to the heap. Chosen
/// to comfortably cover the depth of most real key paths without ever
/// allocating.
const INLINE_CAPACITY: usize = 32;

/// One vertex visited on the way down to the walker's stop vertex, plus the
/// byte consumed to leave it (`None` for a compressed vertex, whose whole
/// label is consumed in one step).
#[derive(Clone, Copy)]
pub(crate) struct Frame {
    pub(crate) vertex: VertexId,
    pub(crate) branch_byte: Option<u8>,
}

/// A small-vector-backed traversal stack (C4): inline up to
/// [`INLINE_CAPACITY`] frames, heap-promoting on overflow.
///
/// Growth goes through `try_reserve` rather than the infallible push so a
/// failure to grow sets a sticky `oom` flag instead of aborting. Callers
/// observe `oom` and skip the *optional* recompression pass that follows
/// deletion cleanup; cleanup itself never depends on the stack growing
/// further than it already has.
pub(crate) struct TraversalStack {
    items: SmallVec<[Frame; INLINE_CAPACITY]>,
    oom: bool,
}

impl TraversalStack {
    pub(crate) fn new() -> Self {
        Self {
            items: SmallVec::new(),
            oom: false,
        }
    }

    pub(crate) fn push(&mut self, frame: Frame) {
        if self.items.len() == self.items.capacity()
            && self.items.try_reserve(1).is_err()
        {
            self.oom = true;
            return;
        }
        self.items.push(frame);
    }

    pub(crate) fn pop(&mut self) -> Option<Frame> {
        self.items.pop()
    }

    pub(crate) fn oom(&self) -> bool {
        self.oom
    }
}
