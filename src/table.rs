//! HashTable: bucket array of collision chains with prime-sized growth.

use crate::chain::{Arena, Chain, ChainIter, Entry, Node, NodeKey};
use crate::config::TableConfig;
use crate::dump::Dump;
use crate::error::{try_copy, AllocationError, NotFoundError};
use crate::hash_fn::{Djb2, KeyHasher};
use crate::prime::grown_capacity;
use core::fmt;
use log::debug;

/// String-to-string map backed by separate chaining.
///
/// `len()` is the number of live entries in the node arena, so the record
/// count can never drift from the contents of the chains.
pub struct HashTable {
    buckets: Vec<Chain>,
    nodes: Arena,
    hasher: Box<dyn KeyHasher>,
    max_load_factor: f64,
    #[cfg(feature = "diagnostics")]
    collisions: usize,
}

fn alloc_buckets(capacity: usize) -> Result<Vec<Chain>, AllocationError> {
    let mut buckets = Vec::new();
    buckets
        .try_reserve_exact(capacity)
        .map_err(|source| AllocationError::BucketArray { capacity, source })?;
    buckets.resize(capacity, Chain::EMPTY);
    Ok(buckets)
}

impl HashTable {
    /// Empty table with 101 buckets and the djb2 hash installed.
    pub fn new() -> Result<Self, AllocationError> {
        Self::with_config(TableConfig::default())
    }

    pub fn with_config(config: TableConfig) -> Result<Self, AllocationError> {
        Ok(Self {
            buckets: alloc_buckets(config.initial_capacity())?,
            nodes: Arena::with_key(),
            hasher: Box::new(Djb2),
            max_load_factor: config.max_load_factor(),
            #[cfg(feature = "diagnostics")]
            collisions: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Current number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    #[inline]
    fn bucket_of(&self, key: &str) -> usize {
        (self.hasher.hash_key(key) % self.buckets.len() as u64) as usize
    }

    fn find(&self, key: &str) -> Option<NodeKey> {
        self.buckets[self.bucket_of(key)].find(&self.nodes, key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let k = self.find(key)?;
        self.nodes.get(k).map(|n| n.entry.value.as_str())
    }

    /// Mutable access to the stored value, for in-place edits without a
    /// second lookup.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut String> {
        let k = self.find(key)?;
        self.nodes.get_mut(k).map(|n| &mut n.entry.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Insert `key -> value`, or overwrite the value of an existing key.
    ///
    /// Re-inserting an identical value leaves the stored string untouched.
    /// A new key grows the table first, as many times as needed, if it would
    /// push the load factor past the configured maximum. On error nothing
    /// observable has changed.
    pub fn put(&mut self, key: &str, value: &str) -> Result<(), AllocationError> {
        if let Some(stored) = self.get_mut(key) {
            if stored.as_str() != value {
                *stored = try_copy(value)?;
            }
            return Ok(());
        }

        let entry = Entry {
            key: try_copy(key)?,
            value: try_copy(value)?,
        };
        self.nodes
            .try_reserve(1)
            .map_err(|source| AllocationError::Node { source })?;
        while (self.len() + 1) as f64 > self.max_load_factor * self.capacity() as f64 {
            self.grow()?;
        }
        let k = self.nodes.insert(Node::new(entry));
        self.link(k);
        Ok(())
    }

    /// Remove `key`. The table never shrinks.
    pub fn delete(&mut self, key: &str) -> Result<(), NotFoundError> {
        let index = self.bucket_of(key);
        match self.buckets[index].remove(&mut self.nodes, key) {
            Some(_released) => Ok(()),
            None => {
                debug!("delete: key '{}' not found in bucket {}", key, index);
                Err(NotFoundError {
                    key: key.to_owned(),
                })
            }
        }
    }

    /// Install a new hash function. A non-empty table is rehashed at the
    /// same capacity so every entry sits in the bucket the new function
    /// selects. If the new bucket array cannot be allocated the previous
    /// function stays installed.
    pub fn set_hash_function<H>(&mut self, hasher: H) -> Result<(), AllocationError>
    where
        H: KeyHasher + 'static,
    {
        let hasher: Box<dyn KeyHasher> = Box::new(hasher);
        if self.is_empty() {
            self.hasher = hasher;
            return Ok(());
        }
        let fresh = alloc_buckets(self.capacity())?;
        self.hasher = hasher;
        debug!(
            "hash function replaced: rehashing {} entries over {} buckets",
            self.len(),
            self.capacity()
        );
        self.relink_into(fresh);
        Ok(())
    }

    fn grow(&mut self) -> Result<(), AllocationError> {
        let old = self.capacity();
        let capacity =
            grown_capacity(old).ok_or(AllocationError::CapacityOverflow { capacity: old })?;
        let fresh = alloc_buckets(capacity)?;
        debug!(
            "load factor limit reached with {} entries: growing {} -> {} buckets",
            self.len(),
            old,
            capacity
        );
        self.relink_into(fresh);
        Ok(())
    }

    /// Swap in `fresh` and re-place every node through `link`, walking the
    /// old array in bucket order and each old chain in its order. The old
    /// chains are owned by this frame, so nothing being read is mutated.
    fn relink_into(&mut self, fresh: Vec<Chain>) {
        let old = core::mem::replace(&mut self.buckets, fresh);
        #[cfg(feature = "diagnostics")]
        {
            self.collisions = 0;
        }
        for chain in old {
            let mut walk = chain.detach();
            while let Some(k) = walk.next_node(&mut self.nodes) {
                self.link(k);
            }
        }
    }

    /// Append a detached arena node to the tail of its bucket's chain.
    fn link(&mut self, k: NodeKey) {
        let index = match self.nodes.get(k) {
            Some(node) => self.bucket_of(&node.entry.key),
            None => return,
        };
        if self.buckets[index].append(&mut self.nodes, k) {
            self.record_collision();
        }
    }

    #[inline]
    fn record_collision(&mut self) {
        #[cfg(feature = "diagnostics")]
        {
            self.collisions += 1;
        }
    }

    /// `(bucket, key, value)` for every entry, in bucket order and then
    /// chain order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: self.buckets.iter().enumerate(),
            nodes: &self.nodes,
            current: None,
        }
    }

    /// Tabular rendering of every entry plus summary counters.
    pub fn dump(&self) -> Dump<'_> {
        Dump::new(self)
    }

    /// Release every entry and the bucket array. Returns how many entries
    /// were released.
    pub fn destroy(self) -> usize {
        let released = self.len();
        debug!(
            "destroying table: {} entries, {} buckets",
            released,
            self.capacity()
        );
        drop(self);
        released
    }

    /// Entries appended to a non-empty chain since the last rehash.
    #[cfg(feature = "diagnostics")]
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    #[cfg(feature = "diagnostics")]
    pub fn collisions_per_key(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.collisions as f64 / self.len() as f64
    }

    #[cfg(test)]
    pub(crate) fn chain_lengths(&self) -> Vec<usize> {
        self.buckets
            .iter()
            .map(|c| c.iter(&self.nodes).count())
            .collect()
    }
}

impl fmt::Debug for HashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("max_load_factor", &self.max_load_factor)
            .finish_non_exhaustive()
    }
}

/// Iterator returned by [`HashTable::iter`].
pub struct Iter<'a> {
    buckets: core::iter::Enumerate<core::slice::Iter<'a, Chain>>,
    nodes: &'a Arena,
    current: Option<(usize, ChainIter<'a>)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (usize, &'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((index, chain)) = self.current.as_mut() {
                if let Some(e) = chain.next() {
                    return Some((*index, e.key.as_str(), e.value.as_str()));
                }
            }
            let (index, chain) = self.buckets.find(|(_, c)| !c.is_empty())?;
            self.current = Some((index, chain.iter(self.nodes)));
        }
    }
}
