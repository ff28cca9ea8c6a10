//! Table sizing constants and construction-time configuration.

/// Bucket count of a freshly created table. Prime, so `hash % capacity`
/// spreads keys well even for weak hash functions.
pub const INITIAL_CAPACITY: usize = 101;

/// Growth threshold for `len / capacity`.
pub const MAX_LOAD_FACTOR: f64 = 0.75;

/// Sizing knobs for [`HashTable::with_config`](crate::HashTable::with_config).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TableConfig {
    initial_capacity: usize,
    max_load_factor: f64,
}

impl TableConfig {
    pub fn new() -> Self {
        Self {
            initial_capacity: INITIAL_CAPACITY,
            max_load_factor: MAX_LOAD_FACTOR,
        }
    }

    /// Number of buckets allocated up front. Zero is clamped to one.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity.max(1);
        self
    }

    /// Panics unless `factor` is finite and strictly positive.
    pub fn with_max_load_factor(mut self, factor: f64) -> Self {
        assert!(
            factor.is_finite() && factor > 0.0,
            "max load factor must be finite and positive, got {factor}"
        );
        self.max_load_factor = factor;
        self
    }

    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new()
    }
}
