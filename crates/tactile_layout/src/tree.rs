//! Node identity
//!
//! Every element (panel, label, image) owns a [`LayoutNodeId`] for as long
//! as it lives. Ids come from a per-thread slot map, so a freed id is never
//! confused with the element that later reuses its slot.

use std::cell::RefCell;

use slotmap::{new_key_type, Key, SlotMap};

new_key_type! {
    pub struct LayoutNodeId;
}

impl LayoutNodeId {
    /// Convert to a raw u64 representation (for logging and type-erased maps)
    pub fn to_raw(self) -> u64 {
        self.data().as_ffi()
    }
}

thread_local! {
    static NODES: RefCell<SlotMap<LayoutNodeId, ()>> = RefCell::new(SlotMap::with_key());
}

/// Allocate a fresh node id on the current thread
pub(crate) fn alloc_node_id() -> LayoutNodeId {
    NODES.with(|nodes| nodes.borrow_mut().insert(()))
}

/// Return a node id to the pool
///
/// Safe to call during thread teardown; the id is simply dropped then.
pub(crate) fn release_node_id(id: LayoutNodeId) {
    let _ = NODES.try_with(|nodes| {
        nodes.borrow_mut().remove(id);
    });
}

/// Whether an id is currently held by a live element
pub fn is_live(id: LayoutNodeId) -> bool {
    NODES.with(|nodes| nodes.borrow().contains_key(id))
}
