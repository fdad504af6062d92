//! # Chained Hash Table
//!
//! A string-keyed hash table that resolves collisions with separate chaining.
//!
//! Keys are hashed with djb2 and reduced modulo the table's bucket count. Each bucket owns a
//! singly linked chain of key/value pairs: colliding keys are appended at the chain's tail,
//! re-inserting a key replaces its node where it stands, and removal unlinks only the matching
//! node. The bucket count is fixed until the caller asks for a [`HashTable::resize`], which
//! doubles it and rehashes every entry.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chaintable::{HashTable, TableError};
//!
//! // Two buckets, so three keys are bound to share a chain
//! let mut table = HashTable::new(2)?;
//!
//! table.insert("line_1", "Tiny hash table");
//! table.insert("line_2", "Filled beyond capacity");
//! table.insert("line_3", "Linked list saves the day!");
//!
//! assert_eq!(table.retrieve("line_2")?, "Filled beyond capacity");
//!
//! // Update values
//! assert_eq!(table.insert("line_1", "Updated"), Some("Tiny hash table".to_string()));
//!
//! // Grow the table; every entry is rehashed
//! let mut table = table.resize();
//! assert_eq!(table.capacity(), 4);
//! assert_eq!(table.retrieve("line_3")?, "Linked list saves the day!");
//!
//! // Remove values
//! table.remove("line_1")?;
//! assert_eq!(table.retrieve("line_1"), Err(TableError::KeyNotFound("line_1".to_string())));
//!
//! table.destroy();
//! # Ok::<(), TableError>(())
//! ```
//!
//! A zero capacity is rejected up front:
//!
//! ```rust
//! use chaintable::{HashTable, TableError};
//!
//! assert_eq!(HashTable::new(0).err(), Some(TableError::InvalidCapacity));
//! ```

/// Error type shared by table operations
mod error;
/// The djb2 hash function and bucket index reduction
pub mod hash;
/// `env_logger` setup for the binaries
pub mod logger;
/// Chain nodes and chain traversal
mod pair;
/// The hash table itself
mod table;
/// Utility traits for the hash table
mod utils;

pub use error::TableError;
pub use table::{DEFAULT_CAPACITY, HashTable, Iter};
pub use utils::TableExtensions;
