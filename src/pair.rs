//! Chain nodes and the owned forward list they form inside a bucket

use std::{fmt, mem};

/// Link to the next node of a chain; `None` terminates the chain
pub(crate) type Link = Option<Box<Pair>>;

/// A key/value entry that is also a node of its bucket's chain.
///
/// Every node exclusively owns the node after it, so a chain is released by dropping its head.
pub(crate) struct Pair {
    /// The key, unique within its chain
    pub(crate) key: String,
    /// The value stored under `key`
    pub(crate) value: String,
    /// The rest of the chain
    pub(crate) next: Link,
}

impl Pair {
    /// Creates a boxed node pointing at `next`
    pub(crate) fn boxed(key: String, value: String, next: Link) -> Box<Self> {
        Box::new(Self { key, value, next })
    }

    /// Consumes the node, handing back its key, its value and the rest of the chain
    pub(crate) fn into_parts(mut self: Box<Self>) -> (String, String, Link) {
        (mem::take(&mut self.key), mem::take(&mut self.value), self.next.take())
    }
}

impl fmt::Debug for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pair")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

impl Drop for Pair {
    // Unlink the tail iteratively; the default recursive drop would use one stack frame per node.
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

/// Borrowing iterator over the nodes of one chain, head first
#[derive(Debug, Clone)]
pub(crate) struct Chain<'a> {
    /// The node to yield next
    cursor: Option<&'a Pair>,
}

impl<'a> Chain<'a> {
    /// Starts iterating at the given chain head
    pub(crate) fn new(head: &'a Link) -> Self {
        Self { cursor: head.as_deref() }
    }

    /// An iterator that yields nothing
    pub(crate) fn empty() -> Self {
        Self { cursor: None }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Pair;

    fn next(&mut self) -> Option<Self::Item> {
        let pair = self.cursor?;
        self.cursor = pair.next.as_deref();
        Some(pair)
    }
}

/// Walks `depth` links down a chain and returns the link found there.
///
/// Stops early at the end of the chain, so a depth equal to the chain length yields the empty
/// tail link where a new node can be attached.
pub(crate) fn link_at(mut link: &mut Link, depth: usize) -> &mut Link {
    for _ in 0..depth {
        match link {
            Some(pair) => link = &mut pair.next,
            None => break,
        }
    }
    link
}

/// Finds the position of `key` in a chain.
///
/// Returns `Ok(depth)` of the matching node, or `Err(len)` with the chain length when the key
/// is absent.
pub(crate) fn find(head: &Link, key: &str) -> Result<usize, usize> {
    let mut depth: usize = 0;
    for pair in Chain::new(head) {
        if pair.key == key {
            return Ok(depth);
        }
        depth = depth.saturating_add(1);
    }
    Err(depth)
}
