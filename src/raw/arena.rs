use super::node_id::NodeId;

/// Slot arena that owns every node in a tree.
///
/// Freed slots are recycled through a free list, so a long-lived tree with
/// churn does not grow without bound. Handing out `NodeId`s instead of
/// references keeps ownership in one place: dropping or clearing the arena
/// tears the whole tree down without walking any links.
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<NodeId>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self { slots: Vec::new(), free: Vec::new() }
    }

    /// Number of live (occupied) slots.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn insert(&mut self, element: T) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.index()] = Some(element);
                id
            }
            None => {
                // NodeId::new panics past MAX_INDEX, so the push cannot
                // outrun the index space.
                let id = NodeId::new(self.slots.len());
                self.slots.push(Some(element));
                id
            }
        }
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &T {
        self.slots[id.index()].as_ref().expect("`Arena::get()` - vacant slot!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut T {
        self.slots[id.index()].as_mut().expect("`Arena::get_mut()` - vacant slot!")
    }

    /// Removes the element, recycling its slot.
    pub(crate) fn remove(&mut self, id: NodeId) -> T {
        let element = self.slots[id.index()].take().expect("`Arena::remove()` - vacant slot!");
        self.free.push(id);
        element
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
