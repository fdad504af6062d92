use std::{fmt, iter, num::NonZeroUsize, slice};

use log::{debug, trace};

use crate::{
    TableError,
    hash::bucket_index,
    pair::{self, Chain, Link, Pair},
};

/// Number of buckets used by [`HashTable::default`] and when collecting from an iterator
pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(16) {
    Some(capacity) => capacity,
    None => NonZeroUsize::MIN,
};

/// Factor applied to the bucket count by [`HashTable::resize`]
const GROWTH_FACTOR: NonZeroUsize = match NonZeroUsize::new(2) {
    Some(factor) => factor,
    None => NonZeroUsize::MIN,
};

/// A string-to-string hash table that resolves collisions with separate chaining.
///
/// Keys are hashed with djb2 modulo the current capacity. Each bucket holds a singly linked
/// chain of entries; colliding keys are appended at the tail of their bucket's chain. The
/// capacity never changes on its own: callers decide when to [`resize`](Self::resize), using
/// [`load_factor`](Self::load_factor) as a hint.
///
/// Note: This implementation is not thread-safe. Wrap it in a lock to share it between threads.
pub struct HashTable {
    /// One chain head per bucket; always exactly `capacity` slots
    buckets: Box<[Link]>,
    /// Number of buckets, fixed for the lifetime of this table
    capacity: NonZeroUsize,
    /// Current number of entries across all chains
    size: usize,
}

impl HashTable {
    /// Creates a table with `capacity` empty buckets.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidCapacity`] if `capacity` is zero. Nothing is allocated in
    /// that case.
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        let capacity = NonZeroUsize::new(capacity).ok_or(TableError::InvalidCapacity)?;
        Ok(Self::with_capacity(capacity))
    }

    /// Creates a table with `capacity` empty buckets
    #[must_use]
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        debug!("creating hash table with {capacity} buckets");
        Self {
            buckets: iter::repeat_with(|| None).take(capacity.get()).collect(),
            capacity,
            size: 0,
        }
    }

    /// Gets the bucket index of a key for the current capacity
    fn index_of(&self, key: &str) -> usize {
        bucket_index(key.as_bytes(), self.capacity)
    }

    /// Inserts a key-value pair.
    ///
    /// A new key is appended at the tail of its bucket's chain. An existing key has its node
    /// replaced in place by one carrying the new value; the previous value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        let index = self.index_of(&key);
        let bucket = self.buckets.get_mut(index)?;

        match pair::find(bucket, &key) {
            Ok(depth) => {
                let link = pair::link_at(bucket, depth);
                let (previous, next) = link
                    .take()
                    .map(|old| {
                        let (_, old_value, next) = old.into_parts();
                        (old_value, next)
                    })
                    .unzip();
                *link = Some(Pair::boxed(key, value, next.flatten()));
                trace!("replaced entry at depth {depth} of bucket {index}");
                previous
            }
            Err(len) => {
                *pair::link_at(bucket, len) = Some(Pair::boxed(key, value, None));
                self.size = self.size.saturating_add(1);
                None
            }
        }
    }

    /// Retrieve a value for a given key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        let bucket = self.buckets.get(self.index_of(key))?;
        Chain::new(bucket).find(|pair| pair.key == key).map(|pair| pair.value.as_str())
    }

    /// Retrieves the value stored under `key`.
    ///
    /// A stored empty string is returned as `Ok("")`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::KeyNotFound`] if the key is absent.
    pub fn retrieve(&self, key: &str) -> Result<&str, TableError> {
        self.get(key).ok_or_else(|| {
            trace!("lookup missed bucket {}", self.index_of(key));
            TableError::KeyNotFound(key.to_string())
        })
    }

    /// Get a mutable reference to a value for a given key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut String> {
        let index = self.index_of(key);
        let bucket = self.buckets.get_mut(index)?;
        let depth = pair::find(bucket, key).ok()?;
        pair::link_at(bucket, depth).as_mut().map(|pair| &mut pair.value)
    }

    /// Removes `key` from its chain and returns its value.
    ///
    /// Only the matching node is unlinked; the nodes after it stay attached to the bucket.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::KeyNotFound`] if the key is absent. The table is left unchanged.
    pub fn remove(&mut self, key: &str) -> Result<String, TableError> {
        let index = self.index_of(key);
        let removed = self.buckets.get_mut(index).and_then(|bucket| {
            let depth = pair::find(bucket, key).ok()?;
            let link = pair::link_at(bucket, depth);
            let (_, value, next) = link.take()?.into_parts();
            *link = next;
            Some(value)
        });

        if let Some(value) = removed {
            self.size = self.size.saturating_sub(1);
            Ok(value)
        } else {
            trace!("nothing to remove in bucket {index}");
            Err(TableError::KeyNotFound(key.to_string()))
        }
    }

    /// Consumes the table and returns one with twice as many buckets.
    ///
    /// Every entry of every chain is moved through [`insert`](Self::insert), so each key is
    /// rehashed against the new capacity and may land in a different bucket.
    #[must_use]
    pub fn resize(mut self) -> Self {
        let mut resized = Self::with_capacity(self.capacity.saturating_mul(GROWTH_FACTOR));

        for bucket in self.buckets.iter_mut() {
            let mut next = bucket.take();
            while let Some(node) = next {
                let (key, value, rest) = node.into_parts();
                resized.insert(key, value);
                next = rest;
            }
        }

        debug!(
            "resized hash table from {} to {} buckets, migrated {} entries",
            self.capacity,
            resized.capacity,
            resized.len()
        );
        resized
    }

    /// Releases every entry, every chain and the bucket array.
    ///
    /// Dropping the table has the same effect; this only makes the teardown explicit.
    pub fn destroy(self) {
        let released = self.size;
        let capacity = self.capacity;
        drop(self);
        debug!("destroyed hash table with {capacity} buckets, released {released} entries");
    }

    /// Clears the table, removing all key-value pairs but keeping its capacity
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            *bucket = None;
        }
        self.size = 0;
    }

    /// Returns the number of entries in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Returns the ratio of entries to buckets
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity.get() as f64
    }

    /// Returns the length of every chain, in bucket order
    pub fn chain_lengths(&self) -> impl Iterator<Item = usize> {
        self.buckets.iter().map(|bucket| Chain::new(bucket).count())
    }

    /// Returns the length of the longest chain
    #[must_use]
    pub fn longest_chain(&self) -> usize {
        self.chain_lengths().max().unwrap_or(0)
    }

    /// Returns an iterator over the entries, bucket by bucket and head first within a chain
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter { buckets: self.buckets.iter(), chain: Chain::empty() }
    }
}

impl Default for HashTable {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl Clone for HashTable {
    // Reinserting in iteration order rebuilds every chain node for node.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.capacity);
        copy.extend(self.iter());
        copy
    }
}

impl PartialEq for HashTable {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl Eq for HashTable {}

impl fmt::Debug for HashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Extend<(K, V)> for HashTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for HashTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::default();
        table.extend(iter);
        table
    }
}

/// Iterator over the entries of a [`HashTable`]
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    /// Buckets not yet visited
    buckets: slice::Iter<'a, Link>,
    /// Remainder of the chain being walked
    chain: Chain<'a>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pair) = self.chain.next() {
                return Some((pair.key.as_str(), pair.value.as_str()));
            }
            self.chain = Chain::new(self.buckets.next()?);
        }
    }
}

impl<'a> IntoIterator for &'a HashTable {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
