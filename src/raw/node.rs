use super::node_id::NodeId;

/// One tree node: an item and two optional subtrees.
pub(crate) struct Node<T> {
    pub(crate) item: T,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T> Node<T> {
    pub(crate) const fn leaf(item: T) -> Self {
        Self { item, left: None, right: None }
    }

    /// The child link on the given side, as a mutable slot so callers can
    /// splice subtrees in place.
    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Which child link of a parent a descent went through.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}
