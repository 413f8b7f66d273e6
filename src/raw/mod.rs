mod arena;
mod node;
mod node_id;
mod raw_bst;

pub(crate) use raw_bst::{InOrder, PreOrder, RawBst};
