//! # bindings
//!
//! A fixed-size chained hash table mapping identifier strings to integer
//! values.
//!
//! A semantic phase records each assignment with [`Bindings::insert`], which
//! overwrites the value in place when the key is already bound, and resolves
//! each reference with [`Bindings::lookup`]. Unlike the interner, which never
//! changes an installed entry, re-inserting a key here replaces its value;
//! the set of keys only ever grows.
//!
//! The bucket count is fixed at [`BUCKET_COUNT`] for the table's lifetime:
//! no resizing, no deletion. Colliding keys chain within their bucket, so a
//! pathological key set degrades lookups to a linear scan — an accepted
//! bound for the identifier vocabulary of a single source file.
//!
//! ## Example
//! ```rust
//! # use lexitab::Bindings;
//! let mut bindings = Bindings::new();
//! bindings.insert("x", 1).unwrap();
//! bindings.insert("x", 42).unwrap(); // overwrites in place
//! assert_eq!(bindings.get("x"), Some(42));
//! assert_eq!(bindings.len(), 1);
//! assert!(bindings.lookup("y").is_none());
//! ```

use crate::dup::dup_str;
use crate::TableError;

/// Number of buckets in a [`Bindings`] table. Fixed for its lifetime.
pub const BUCKET_COUNT: usize = 101;

/// Computes the bucket a key resides in.
///
/// The classic rolling hash over the key's UTF-8 bytes, left to right:
/// `h = byte + 31 * h` in wrapping 32-bit unsigned arithmetic, reduced
/// modulo [`BUCKET_COUNT`]. The recurrence, the natural wraparound, and the
/// modulus are reproduced exactly so that bucket placement is stable across
/// implementations; the empty string maps to bucket 0.
pub fn bucket_index(key: &str) -> usize {
    let mut hashval: u32 = 0;
    for &byte in key.as_bytes() {
        hashval = u32::from(byte).wrapping_add(31u32.wrapping_mul(hashval));
    }
    (hashval % BUCKET_COUNT as u32) as usize
}

/// One key/value binding.
///
/// Bindings are created by [`Bindings::insert`]; only the value ever changes
/// afterwards, so the fields are exposed read-only.
#[derive(Debug)]
pub struct Binding {
    key: String,
    value: i64,
}

impl Binding {
    /// The bound identifier.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The currently bound value.
    pub fn value(&self) -> i64 {
        self.value
    }
}

/// A dictionary of identifier-to-integer bindings.
///
/// An explicit instance under caller control: construct one per scope or per
/// compilation unit as needed, nothing is process-global. Each bucket owns
/// its chain of bindings, newest-first; a key is always found in the bucket
/// [`bucket_index`] computes for it.
#[derive(Debug)]
pub struct Bindings {
    buckets: [Vec<Binding>; BUCKET_COUNT],
    len: usize,
}

impl Bindings {
    /// Creates a new dictionary with all buckets empty.
    pub fn new() -> Self {
        Self {
            buckets: std::array::from_fn(|_| Vec::new()),
            len: 0,
        }
    }

    /// Returns the number of distinct keys currently bound.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no key has been bound yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Finds the binding for `key`, or `None` if the key was never inserted.
    ///
    /// Hashes the key, then scans only that bucket's chain (newest-first) for
    /// an exactly equal key. Side-effect free.
    pub fn lookup(&self, key: &str) -> Option<&Binding> {
        self.buckets[bucket_index(key)]
            .iter()
            .rev()
            .find(|binding| binding.key == key)
    }

    /// Returns the value bound to `key`, or `None` if unbound.
    pub fn get(&self, key: &str) -> Option<i64> {
        self.lookup(key).map(Binding::value)
    }

    /// Binds `key` to `value`, overwriting any existing binding in place.
    ///
    /// If the key is already present its value is replaced and the key set is
    /// unchanged; otherwise the key is duplicated into owned storage and a
    /// new binding becomes the head of its bucket's chain.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::OutOfMemory`] if the binding or the owned copy
    /// of `key` cannot be allocated; the dictionary is left unchanged.
    ///
    /// # Examples
    /// ```
    /// # use lexitab::Bindings;
    /// let mut bindings = Bindings::new();
    /// let bound = bindings.insert("n", 7).unwrap();
    /// assert_eq!((bound.key(), bound.value()), ("n", 7));
    /// ```
    pub fn insert(&mut self, key: &str, value: i64) -> Result<&Binding, TableError> {
        let slot = bucket_index(key);
        if let Some(pos) = self.buckets[slot]
            .iter()
            .rposition(|binding| binding.key == key)
        {
            // already there
            log::trace!("BIND: update key: {:?}, value: {}", key, value);
            self.buckets[slot][pos].value = value;
            return Ok(&self.buckets[slot][pos]);
        }

        let chain = &mut self.buckets[slot];
        chain.try_reserve(1)?;
        let key = dup_str(key)?;
        log::trace!("BIND: new key: {:?}, value: {}, bucket: {}", key, value, slot);
        chain.push(Binding { key, value });
        self.len += 1;
        Ok(&chain[chain.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_dictionary_is_empty() {
        let bindings = Bindings::new();
        assert_eq!(bindings.len(), 0);
        assert!(bindings.is_empty());
    }

    #[test]
    fn lookup_after_insert_returns_the_value() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut bindings = Bindings::new();
        bindings.insert("count", 12).unwrap();
        let binding = bindings.lookup("count").unwrap();
        assert_eq!(binding.key(), "count");
        assert_eq!(binding.value(), 12);
        assert_eq!(bindings.get("count"), Some(12));
    }

    #[test]
    fn reinsert_overwrites_in_place_without_growing() {
        let mut bindings = Bindings::new();
        bindings.insert("x", 1).unwrap();
        bindings.insert("y", 2).unwrap();
        assert_eq!(bindings.len(), 2);

        let updated = bindings.insert("x", 99).unwrap();
        assert_eq!(updated.value(), 99);
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings.get("x"), Some(99));
        assert_eq!(bindings.get("y"), Some(2));
    }

    #[test]
    fn lookup_of_absent_key_is_none() {
        let mut bindings = Bindings::new();
        assert!(bindings.lookup("missing").is_none());
        assert_eq!(bindings.get("missing"), None);
        bindings.insert("present", 5).unwrap();
        assert!(bindings.lookup("missing").is_none());
    }

    #[test]
    fn bucket_index_is_pure_and_empty_maps_to_zero() {
        assert_eq!(bucket_index(""), 0);
        for key in ["a", "count", "while", "write-host", "長い識別子"] {
            let first = bucket_index(key);
            assert_eq!(bucket_index(key), first);
            assert!(first < BUCKET_COUNT);
        }
    }

    #[test]
    fn bucket_index_matches_reference_recurrence() {
        // h("a") = 97, h("ab") = 98 + 31*97 = 3105
        assert_eq!(bucket_index("a"), 97 % BUCKET_COUNT);
        assert_eq!(bucket_index("ab"), 3105 % BUCKET_COUNT);
    }

    /// Finds two distinct short keys that land in the same bucket.
    fn colliding_pair() -> (String, String) {
        let reference = bucket_index("a0");
        for n in 1..1000 {
            let candidate = format!("a{n}");
            if bucket_index(&candidate) == reference {
                return ("a0".to_owned(), candidate);
            }
        }
        panic!("no collision found in 1000 candidates");
    }

    #[test]
    fn colliding_keys_remain_independently_retrievable() {
        let (first, second) = colliding_pair();
        assert_ne!(first, second);
        assert_eq!(bucket_index(&first), bucket_index(&second));

        let mut bindings = Bindings::new();
        bindings.insert(&first, 10).unwrap();
        bindings.insert(&second, 20).unwrap();
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings.get(&first), Some(10));
        assert_eq!(bindings.get(&second), Some(20));

        // updating one colliding key leaves the other untouched
        bindings.insert(&first, 11).unwrap();
        assert_eq!(bindings.get(&first), Some(11));
        assert_eq!(bindings.get(&second), Some(20));
        assert_eq!(bindings.len(), 2);
    }

    #[test]
    fn key_resides_in_its_hash_bucket() {
        let mut bindings = Bindings::new();
        for key in ["alpha", "beta", "gamma", ""] {
            bindings.insert(key, 1).unwrap();
            let slot = bucket_index(key);
            assert!(bindings.buckets[slot]
                .iter()
                .any(|binding| binding.key() == key));
        }
    }

    #[test]
    fn empty_string_is_a_valid_key() {
        let mut bindings = Bindings::new();
        bindings.insert("", -3).unwrap();
        assert_eq!(bindings.get(""), Some(-3));
        assert_eq!(bindings.len(), 1);
    }

    #[test]
    fn many_keys_all_retrievable() {
        let mut bindings = Bindings::new();
        for n in 0..500 {
            bindings.insert(&format!("id{n}"), n).unwrap();
        }
        assert_eq!(bindings.len(), 500);
        for n in 0..500 {
            assert_eq!(bindings.get(&format!("id{n}")), Some(n));
        }
    }
}
