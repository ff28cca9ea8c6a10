//! Replaceable key hashing strategy.

/// Maps a key to an unsigned integer; the table reduces it modulo its
/// capacity to pick a bucket.
///
/// Any `Fn(&str) -> u64` closure or function is a `KeyHasher`, so a plain
/// `fn` can be passed to [`HashTable::set_hash_function`](crate::HashTable::set_hash_function).
/// Implementations must be pure: the same key always hashes the same way.
pub trait KeyHasher {
    fn hash_key(&self, key: &str) -> u64;
}

impl<F> KeyHasher for F
where
    F: Fn(&str) -> u64,
{
    #[inline]
    fn hash_key(&self, key: &str) -> u64 {
        self(key)
    }
}

/// Bernstein's djb2: `h = h * 33 + byte`, seeded at 5381. The default
/// strategy of every new table.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Djb2;

impl KeyHasher for Djb2 {
    #[inline]
    fn hash_key(&self, key: &str) -> u64 {
        djb2(key)
    }
}

#[inline]
pub fn djb2(key: &str) -> u64 {
    key.bytes().fold(5381u64, |h, b| {
        (h << 5).wrapping_add(h).wrapping_add(u64::from(b))
    })
}
