//! chain-hashmap: a single-threaded string-to-string hash table using
//! separate chaining, prime-sized growth and a replaceable hash function.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small hash table engine whose bookkeeping cannot drift from
//!   its contents, built in layers that can be reasoned about separately.
//! - Layers:
//!   - `chain`: singly linked collision lists threaded through a slot
//!     arena (`SlotMap<NodeKey, Node>`). A `Chain` is just head/tail keys.
//!   - `table::HashTable`: owns the bucket array (`Vec<Chain>`), the node
//!     arena and the active `KeyHasher`; implements put/get/delete,
//!     load-factor growth and hash-function replacement.
//!   - `dump::Dump`: presentation only, a `Display` adapter over `iter()`.
//!
//! Constraints
//! - Single-threaded: the table is owned by one caller; wrap it in a mutex
//!   for shared use. `&mut self` on every mutation means a reference from
//!   `get`/`get_mut` cannot outlive the next put/delete/rehash.
//! - Record count is the arena's length, so it always equals the number of
//!   linked entries.
//! - Capacity starts at 101 and, on growth, becomes the smallest prime
//!   strictly greater than twice the old capacity. The table never shrinks.
//! - The load factor never exceeds the configured maximum (0.75 by default)
//!   right after a new key is stored: growth happens first.
//!
//! Rehashing
//! - Growth and hash-function replacement share one routine: reserve the
//!   new bucket array (fallible), swap it in, then walk the old chains in
//!   bucket order and chain order and re-link each node through the same
//!   placement path `put` uses. Nodes never leave the arena, so no entry is
//!   copied or freed during a rehash.
//!
//! Failure model
//! - Bucket arrays and key/value copies are reserved with `try_reserve_exact`
//!   and surface as `AllocationError`; a failed call leaves the table as it
//!   was. `delete` on an absent key returns `NotFoundError`.
//!
//! Feature `diagnostics`
//! - Compiles in a per-table collision counter (appends to a non-empty
//!   chain since the last rehash) and its row in the dump. Off by default.

mod chain;
pub mod config;
mod dump;
mod error;
pub mod hash_fn;
mod prime;
mod table;

// Public surface
pub use config::TableConfig;
pub use dump::Dump;
pub use error::{AllocationError, NotFoundError};
pub use hash_fn::{djb2, Djb2, KeyHasher};
pub use prime::{is_prime, next_prime};
pub use table::{HashTable, Iter};
