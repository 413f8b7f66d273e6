use core::num::NonZero;

// A narrow index type under test makes the arena capacity limit cheap to
// exercise; release builds get the full u32 range.
#[cfg(test)]
type Repr = u16;
#[cfg(not(test))]
type Repr = u32;

/// Index of a node slot in the arena.
///
/// Stored shifted by one in a `NonZero` so that `Option<NodeId>` occupies
/// the same space as `NodeId` itself; a tree node carries two of these per
/// child link, so the niche matters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct NodeId(NonZero<Repr>);

impl NodeId {
    pub(crate) const MAX_INDEX: usize = (Repr::MAX - 1) as usize;

    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        assert!(index <= Self::MAX_INDEX, "`NodeId::new()` - `index` exceeds `NodeId::MAX_INDEX`!");
        #[allow(clippy::cast_possible_truncation)]
        Self(NonZero::new(index as Repr + 1).unwrap())
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    // The whole point of the NonZero repr.
    assert_eq_size!(NodeId, Option<NodeId>);
    assert_eq_size!(NodeId, Repr);

    #[test]
    #[should_panic(expected = "`NodeId::new()` - `index` exceeds `NodeId::MAX_INDEX`!")]
    fn out_of_range_index() {
        let _ = NodeId::new(NodeId::MAX_INDEX + 1);
    }

    proptest! {
        #[test]
        fn index_round_trip(index in 0..=NodeId::MAX_INDEX) {
            prop_assert_eq!(NodeId::new(index).index(), index);
        }
    }
}
