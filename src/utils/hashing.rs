//! Utilities for hashing values with their intrinsic [`Hash`] implementation.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/**
Return the hash of `value` as computed by its [`Hash`] implementation.

[`DefaultHasher::new`] always uses the same keys, so the result is stable for the lifetime of the
process. It is not guaranteed to be stable across Rust releases and must not be persisted.
*/
pub(crate) fn natural_hash<K: Hash + ?Sized>(value: &K) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Hash a sequence of characters as if it were a string made of those characters.
pub(crate) fn hash_chars<I: IntoIterator<Item = char>>(chars: I) -> u64 {
    let mut hasher = DefaultHasher::new();
    let mut num_chars: usize = 0;
    for c in chars {
        c.hash(&mut hasher);
        num_chars += 1;
    }

    // Length suffix so that prefixes do not collide trivially
    num_chars.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::{assert_eq, assert_ne};

    use super::*;

    #[test]
    fn natural_hash_is_stable_for_equal_values() {
        assert_eq!(natural_hash("abc"), natural_hash(&"abc".to_string()));
        assert_eq!(natural_hash(&42_u32), natural_hash(&42_u32));
        assert_ne!(natural_hash(&42_u32), natural_hash(&43_u32));
    }

    #[test]
    fn hash_chars_depends_on_every_char() {
        assert_eq!(hash_chars("ab".chars()), hash_chars(vec!['a', 'b']));
        assert_ne!(hash_chars("ab".chars()), hash_chars("ba".chars()));
        assert_ne!(hash_chars("a".chars()), hash_chars("aa".chars()));
    }
}
