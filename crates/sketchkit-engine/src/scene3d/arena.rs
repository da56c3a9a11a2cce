use slab::Slab;

/// Generational handle into the node arena.
///
/// A handle whose node has been released never resolves again, even if the slot
/// has been reused by a newer node.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u64,
}

struct Slot<T> {
    generation: u64,
    value: T,
}

pub(crate) struct NodeArena<T> {
    slots: Slab<Slot<T>>,
    next_generation: u64,
}

impl<T> NodeArena<T> {
    pub(crate) fn new() -> Self {
        Self { slots: Slab::new(), next_generation: 0 }
    }

    pub(crate) fn insert(&mut self, value: T) -> NodeId {
        let generation = self.next_generation;
        self.next_generation += 1;
        let index = self.slots.insert(Slot { generation, value });
        NodeId { index, generation }
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&T> {
        self.slots
            .get(id.index)
            .filter(|s| s.generation == id.generation)
            .map(|s| &s.value)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slots
            .get_mut(id.index)
            .filter(|s| s.generation == id.generation)
            .map(|s| &mut s.value)
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub(crate) fn remove(&mut self, id: NodeId) -> Option<T> {
        if !self.contains(id) {
            return None;
        }
        self.slots.try_remove(id.index).map(|s| s.value)
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.slots.drain().map(|s| s.value)
    }
}
