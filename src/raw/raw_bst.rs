use core::borrow::Borrow;
use core::cmp::Ordering;

use super::arena::Arena;
use super::node::{Node, Side};
use super::node_id::NodeId;

/// The unbalanced binary search tree backing `RecipeBook`.
///
/// Pure ordering engine: items are placed by their `Ord` relation and
/// nothing else. Duplicate policy, identity checks and any domain meaning
/// of the items belong to the caller. Equal keys descend right, which the
/// caller never relies on because it screens duplicates before inserting.
///
/// Every operation here is iterative; the only recursion in this module is
/// the rebuild helper, whose depth is the height of the tree it is
/// producing, O(log n) by construction.
pub(crate) struct RawBst<T> {
    nodes: Arena<Node<T>>,
    root: Option<NodeId>,
    len: usize,
}

impl<T> RawBst<T> {
    pub(crate) const fn new() -> Self {
        Self { nodes: Arena::new(), root: None, len: 0 }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The item at the root, if any.
    pub(crate) fn root_item(&self) -> Option<&T> {
        self.root.map(|id| &self.nodes.get(id).item)
    }

    /// Drops every node at once. No link-chasing; the arena owns them all.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Height of the tree: number of nodes on the longest root-to-leaf
    /// path. Zero for the empty tree.
    pub(crate) fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();

        while let Some((id, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            let node = self.nodes.get(id);
            if let Some(left) = node.left {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right {
                stack.push((right, depth + 1));
            }
        }
        max_depth
    }

    /// In-order (ascending) iterator over the items.
    pub(crate) fn iter(&self) -> InOrder<'_, T> {
        let mut iter = InOrder { tree: self, stack: Vec::new() };
        iter.push_left_spine(self.root);
        iter
    }

    /// Pre-order (root, left subtree, right subtree) iterator.
    pub(crate) fn preorder(&self) -> PreOrder<'_, T> {
        PreOrder { tree: self, stack: self.root.into_iter().collect() }
    }
}

impl<T: Ord> RawBst<T> {
    /// Locates an item by a borrowed form of its ordering key. O(height).
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.nodes.get(id);
            current = match key.cmp(node.item.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(&node.item),
            };
        }
        None
    }

    /// Places `item` at the unique leaf position its ordering dictates.
    pub(crate) fn insert(&mut self, item: T) {
        let mut parent: Option<(NodeId, Side)> = None;
        let mut current = self.root;

        while let Some(id) = current {
            let node = self.nodes.get(id);
            let side = if item < node.item { Side::Left } else { Side::Right };
            parent = Some((id, side));
            current = match side {
                Side::Left => node.left,
                Side::Right => node.right,
            };
        }

        let new_id = self.nodes.insert(Node::leaf(item));
        match parent {
            Some((id, side)) => *self.nodes.get_mut(id).child_mut(side) = Some(new_id),
            None => self.root = Some(new_id),
        }
        self.len += 1;
    }

    /// Removes the item matching `key` and returns it.
    ///
    /// A node with at most one child is spliced out directly. A node with
    /// two children is overwritten with its in-order successor (the
    /// leftmost node of its right subtree), and the successor's node is
    /// spliced from its original position instead.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut parent: Option<(NodeId, Side)> = None;
        let mut current = self.root?;

        loop {
            let node = self.nodes.get(current);
            match key.cmp(node.item.borrow()) {
                Ordering::Less => {
                    parent = Some((current, Side::Left));
                    current = node.left?;
                }
                Ordering::Greater => {
                    parent = Some((current, Side::Right));
                    current = node.right?;
                }
                Ordering::Equal => break,
            }
        }

        let target = self.nodes.get(current);
        let removed = match (target.left, target.right) {
            (Some(_), Some(right)) => {
                // Walk to the in-order successor, remembering the link
                // that points at it.
                let mut succ_parent = (current, Side::Right);
                let mut succ = right;
                while let Some(left) = self.nodes.get(succ).left {
                    succ_parent = (succ, Side::Left);
                    succ = left;
                }

                // The successor has no left child, so its right subtree
                // takes its place; its item takes the target's place.
                let succ_node = self.nodes.remove(succ);
                *self.nodes.get_mut(succ_parent.0).child_mut(succ_parent.1) = succ_node.right;
                core::mem::replace(&mut self.nodes.get_mut(current).item, succ_node.item)
            }
            _ => {
                let node = self.nodes.remove(current);
                let child = node.left.or(node.right);
                match parent {
                    Some((id, side)) => *self.nodes.get_mut(id).child_mut(side) = child,
                    None => self.root = child,
                }
                node.item
            }
        };

        self.len -= 1;
        Some(removed)
    }

    /// Discards the current shape and rebuilds a minimal-height tree from
    /// `items`, which must already be in ascending order (the in-order
    /// traversal of the result reproduces it exactly).
    ///
    /// Each subtree root is the lower median of its index range, so the
    /// heights of any node's subtrees differ by at most one.
    pub(crate) fn rebuild_balanced(&mut self, items: Vec<T>) {
        self.clear();
        self.len = items.len();
        let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
        let end = slots.len();
        self.root = self.build_range(&mut slots, 0, end);
    }

    // Half-open range [lo, hi); mid is the lower median, matching
    // `(lo + hi) / 2` over the equivalent inclusive range.
    fn build_range(&mut self, slots: &mut [Option<T>], lo: usize, hi: usize) -> Option<NodeId> {
        if lo >= hi {
            return None;
        }
        let mid = lo + (hi - lo - 1) / 2;
        let item = slots[mid].take().expect("`RawBst::build_range()` - slot already consumed!");
        let left = self.build_range(slots, lo, mid);
        let right = self.build_range(slots, mid + 1, hi);
        Some(self.nodes.insert(Node { item, left, right }))
    }
}

/// Ascending iterator; an explicit stack holds the unvisited left spine.
pub(crate) struct InOrder<'a, T> {
    tree: &'a RawBst<T>,
    stack: Vec<NodeId>,
}

impl<T> InOrder<'_, T> {
    fn push_left_spine(&mut self, mut current: Option<NodeId>) {
        while let Some(id) = current {
            self.stack.push(id);
            current = self.tree.nodes.get(id).left;
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let id = self.stack.pop()?;
        let tree = self.tree;
        let node = tree.nodes.get(id);
        self.push_left_spine(node.right);
        Some(&node.item)
    }
}

/// Root-left-right iterator; children are stacked right-under-left so the
/// left subtree is exhausted first.
pub(crate) struct PreOrder<'a, T> {
    tree: &'a RawBst<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let id = self.stack.pop()?;
        let tree = self.tree;
        let node = tree.nodes.get(id);
        if let Some(right) = node.right {
            self.stack.push(right);
        }
        if let Some(left) = node.left {
            self.stack.push(left);
        }
        Some(&node.item)
    }
}
