//! Collision chains: singly linked lists threaded through a slot arena.
//!
//! All nodes of a table live in one `SlotMap<NodeKey, Node>` owned by the
//! table; a `Chain` only records the head and tail keys of its list. Removing
//! a node takes it out of the arena by value, so an entry is released exactly
//! once and a stale key can never resolve to a reused slot.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Generational handle of a chain node inside the table's arena.
    pub struct NodeKey;
}

/// One stored key/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) entry: Entry,
    next: Option<NodeKey>,
}

impl Node {
    pub(crate) fn new(entry: Entry) -> Self {
        Self { entry, next: None }
    }
}

pub(crate) type Arena = SlotMap<NodeKey, Node>;

/// Head/tail of one bucket's list. New nodes go at the tail, so iteration
/// yields entries in insertion order.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Chain {
    head: Option<NodeKey>,
    tail: Option<NodeKey>,
}

impl Chain {
    pub(crate) const EMPTY: Chain = Chain {
        head: None,
        tail: None,
    };

    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Link an arena node (with no successor) at the tail. Returns true if
    /// the chain already held at least one node, i.e. the append collided.
    pub(crate) fn append(&mut self, nodes: &mut Arena, k: NodeKey) -> bool {
        debug_assert!(nodes.get(k).map_or(false, |n| n.next.is_none()));
        match self.tail {
            Some(t) => {
                if let Some(tail) = nodes.get_mut(t) {
                    tail.next = Some(k);
                }
                self.tail = Some(k);
                true
            }
            None => {
                self.head = Some(k);
                self.tail = Some(k);
                false
            }
        }
    }

    /// First node whose key equals `key`.
    pub(crate) fn find(&self, nodes: &Arena, key: &str) -> Option<NodeKey> {
        let mut cur = self.head;
        while let Some(k) = cur {
            let node = nodes.get(k)?;
            if node.entry.key == key {
                return Some(k);
            }
            cur = node.next;
        }
        None
    }

    /// Unlink the first node matching `key`, patching the predecessor (or
    /// the head) and the tail, and hand its entry back by value.
    pub(crate) fn remove(&mut self, nodes: &mut Arena, key: &str) -> Option<Entry> {
        let mut prev: Option<NodeKey> = None;
        let mut cur = self.head;
        while let Some(k) = cur {
            let node = nodes.get(k)?;
            if node.entry.key == key {
                break;
            }
            prev = Some(k);
            cur = node.next;
        }
        let k = cur?;
        let node = nodes.remove(k)?;
        match prev {
            Some(p) => {
                if let Some(pn) = nodes.get_mut(p) {
                    pn.next = node.next;
                }
            }
            None => self.head = node.next,
        }
        if self.tail == Some(k) {
            self.tail = prev;
        }
        Some(node.entry)
    }

    pub(crate) fn iter<'a>(&self, nodes: &'a Arena) -> ChainIter<'a> {
        ChainIter {
            nodes,
            cur: self.head,
        }
    }

    /// Detach every node from this chain, in order. Each node is left in the
    /// arena with no successor; the caller re-links it somewhere else.
    pub(crate) fn detach(self) -> Detach {
        Detach { cur: self.head }
    }
}

/// Iterator over the entries of one chain.
pub(crate) struct ChainIter<'a> {
    nodes: &'a Arena,
    cur: Option<NodeKey>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a Entry;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.cur?)?;
        self.cur = node.next;
        Some(&node.entry)
    }
}

/// Cursor over a detached chain. It does not borrow the arena between
/// steps, so nodes can be re-linked while the walk is in progress.
pub(crate) struct Detach {
    cur: Option<NodeKey>,
}

impl Detach {
    pub(crate) fn next_node(&mut self, nodes: &mut Arena) -> Option<NodeKey> {
        let k = self.cur?;
        let node = nodes.get_mut(k)?;
        self.cur = node.next.take();
        Some(k)
    }
}
