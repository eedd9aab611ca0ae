/*!
Composable equality comparers.

An [`EqualityComparer`] pairs an equality function with a hash function. Callers must keep the
two consistent: whenever `equals(a, b)` holds, `hash_of(a)` must equal `hash_of(b)`. This is not
checked.

Values can be keyed by an [`EqualityComparer`] in standard hashed collections by wrapping them in
[`Equated`].
*/

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::options::StringComparison;
use crate::utils::hashing::natural_hash;

/// A shareable equality function.
pub type EqualsFn<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// A shareable hash function.
pub type HashFn<T> = Arc<dyn Fn(&T) -> u64 + Send + Sync>;

/// An interface for structs that decide equality and produce matching hashes.
pub trait EqualityComparator<T: ?Sized> {
    /// Returns `true` if `a` and `b` are equal.
    fn equals(&self, a: &T, b: &T) -> bool;

    /**
    Return the hash of `value`.

    # Invariants

    1. If `equals(a, b)` is true then `hash_of(a) == hash_of(b)`.
    */
    fn hash_of(&self, value: &T) -> u64;
}

impl EqualityComparator<str> for StringComparison {
    fn equals(&self, a: &str, b: &str) -> bool {
        StringComparison::equals(self, a, b)
    }

    fn hash_of(&self, value: &str) -> u64 {
        StringComparison::hash(self, value)
    }
}

impl EqualityComparator<String> for StringComparison {
    fn equals(&self, a: &String, b: &String) -> bool {
        StringComparison::equals(self, a, b)
    }

    fn hash_of(&self, value: &String) -> u64 {
        StringComparison::hash(self, value)
    }
}

/// A composable equality comparer wrapping an equality function and a hash function.
pub struct EqualityComparer<T: ?Sized> {
    equals: EqualsFn<T>,
    hash: HashFn<T>,
}

/// Construction
impl<T: ?Sized + 'static> EqualityComparer<T> {
    /**
    Wrap an equality function and an optional hash function.

    If `hash` is not provided, the intrinsic [`Hash`] implementation of `T` is used. It is up to the
    caller to make sure that stays consistent with `equals`.
    */
    pub fn from_fns<E>(equals: E, hash: Option<HashFn<T>>) -> Self
    where
        T: Hash,
        E: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        let hash = hash.unwrap_or_else(|| Arc::new(|value: &T| natural_hash(value)));
        Self {
            equals: Arc::new(equals),
            hash,
        }
    }

    /// Wrap an equality function and hash with the intrinsic [`Hash`] implementation of `T`.
    pub fn from_equals<E>(equals: E) -> Self
    where
        T: Hash,
        E: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Self::from_fns(equals, None)
    }

    /// Wrap an equality function and a hash function.
    pub fn from_fns_with_hash<E, H>(equals: E, hash: H) -> Self
    where
        E: Fn(&T, &T) -> bool + Send + Sync + 'static,
        H: Fn(&T) -> u64 + Send + Sync + 'static,
    {
        Self {
            equals: Arc::new(equals),
            hash: Arc::new(hash),
        }
    }

    /// Wrap any other [`EqualityComparator`] implementation.
    pub fn from_comparator<C>(comparator: C) -> Self
    where
        C: EqualityComparator<T> + Send + Sync + 'static,
    {
        let comparator = Arc::new(comparator);
        let hasher = Arc::clone(&comparator);
        Self::from_fns_with_hash(
            move |a, b| comparator.equals(a, b),
            move |value| hasher.hash_of(value),
        )
    }

    /// An equality comparer using the intrinsic [`Eq`] and [`Hash`] implementations of `T`.
    pub fn natural() -> Self
    where
        T: Eq + Hash,
    {
        Self::from_fns_with_hash(|a: &T, b: &T| a == b, |value: &T| natural_hash(value))
    }

    /// Equate values by the natural equality and hash of the key produced by `selector`.
    pub fn by_key<K, S>(selector: S) -> Self
    where
        K: Eq + Hash + 'static,
        S: Fn(&T) -> K + Send + Sync + 'static,
    {
        let selector = Arc::new(selector);
        let hash_selector = Arc::clone(&selector);
        Self::from_fns_with_hash(
            move |a, b| selector(a) == selector(b),
            move |value| natural_hash(&hash_selector(value)),
        )
    }

    /// Equate values by the natural equality and hash of a key borrowed from the value.
    pub fn by_key_ref<K, S>(selector: S) -> Self
    where
        K: Eq + Hash + ?Sized + 'static,
        S: for<'a> Fn(&'a T) -> &'a K + Send + Sync + 'static,
    {
        let selector = Arc::new(selector);
        let hash_selector = Arc::clone(&selector);
        Self::from_fns_with_hash(
            move |a, b| selector(a) == selector(b),
            move |value| natural_hash(hash_selector(value)),
        )
    }

    /// Equate values by comparing the key produced by `selector` with `key_comparer`.
    pub fn by_key_with<K, S, C>(selector: S, key_comparer: C) -> Self
    where
        K: 'static,
        S: Fn(&T) -> K + Send + Sync + 'static,
        C: EqualityComparator<K> + Send + Sync + 'static,
    {
        let selector = Arc::new(selector);
        let hash_selector = Arc::clone(&selector);
        let key_comparer = Arc::new(key_comparer);
        let key_hasher = Arc::clone(&key_comparer);
        Self::from_fns_with_hash(
            move |a, b| key_comparer.equals(&selector(a), &selector(b)),
            move |value| key_hasher.hash_of(&hash_selector(value)),
        )
    }

    /**
    Equate values by the key produced by `selector` using raw functions.

    `equals` and `hash` may each be omitted independently. An omitted function falls back to the
    intrinsic [`Eq`] or [`Hash`] implementation of `K`.
    */
    pub fn by_key_with_fns<K, S>(
        selector: S,
        equals: Option<EqualsFn<K>>,
        hash: Option<HashFn<K>>,
    ) -> Self
    where
        K: Eq + Hash + 'static,
        S: Fn(&T) -> K + Send + Sync + 'static,
    {
        let equals = equals.unwrap_or_else(|| Arc::new(|a: &K, b: &K| a == b));
        let hash = hash.unwrap_or_else(|| Arc::new(|value: &K| natural_hash(value)));
        Self::by_key_with(selector, EqualityComparer::<K> { equals, hash })
    }

    /**
    Equate values by a string key.

    When `case_insensitive` is `true` the keys are equated ordinally without regard to case.
    Otherwise the keys must be identical, following the
    [`StringComparison::InvariantCulture`] rules.
    */
    pub fn by_string_key<S>(selector: S, case_insensitive: bool) -> Self
    where
        S: for<'a> Fn(&'a T) -> &'a str + Send + Sync + 'static,
    {
        let comparison = StringComparison::from_case_insensitive(case_insensitive);
        Self::by_string_key_with(selector, comparison)
    }

    /// Equate values by a string key under the given [`StringComparison`] mode.
    pub fn by_string_key_with<S>(selector: S, comparison: StringComparison) -> Self
    where
        S: for<'a> Fn(&'a T) -> &'a str + Send + Sync + 'static,
    {
        let selector = Arc::new(selector);
        let hash_selector = Arc::clone(&selector);
        Self::from_fns_with_hash(
            move |a, b| comparison.equals(selector(a), selector(b)),
            move |value| comparison.hash(hash_selector(value)),
        )
    }
}

/// Invocation
impl<T: ?Sized> EqualityComparer<T> {
    /**
    Returns `true` if `a` and `b` are equal according to the wrapped equality function.

    A panic raised by a wrapped function is not caught.
    */
    pub fn equals(&self, a: &T, b: &T) -> bool {
        (self.equals)(a, b)
    }

    /// Return the hash of `value` according to the wrapped hash function.
    pub fn hash_of(&self, value: &T) -> u64 {
        (self.hash)(value)
    }
}

/// Helpers over collections
impl<T> EqualityComparer<T> {
    /// Wrap `value` so that it is hashed and compared with this comparer.
    pub fn wrap(&self, value: T) -> Equated<T> {
        Equated {
            value,
            comparer: self.clone(),
        }
    }

    /**
    Return the distinct values in `values`.

    The first occurrence of every group of equal values is kept and the input order is preserved.
    */
    pub fn distinct<I: IntoIterator<Item = T>>(&self, values: I) -> Vec<T> {
        let mut distinct_values: Vec<T> = vec![];
        let mut buckets: HashMap<u64, Vec<usize>> = HashMap::new();
        for value in values {
            let bucket = buckets.entry(self.hash_of(&value)).or_default();
            let is_duplicate = bucket
                .iter()
                .any(|&idx| self.equals(&distinct_values[idx], &value));
            if !is_duplicate {
                bucket.push(distinct_values.len());
                distinct_values.push(value);
            }
        }

        distinct_values
    }
}

impl<T: ?Sized> EqualityComparator<T> for EqualityComparer<T> {
    fn equals(&self, a: &T, b: &T) -> bool {
        EqualityComparer::equals(self, a, b)
    }

    fn hash_of(&self, value: &T) -> u64 {
        EqualityComparer::hash_of(self, value)
    }
}

impl<T: ?Sized> Clone for EqualityComparer<T> {
    fn clone(&self) -> Self {
        Self {
            equals: Arc::clone(&self.equals),
            hash: Arc::clone(&self.hash),
        }
    }
}

impl<T: ?Sized> fmt::Debug for EqualityComparer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EqualityComparer").finish_non_exhaustive()
    }
}

/**
A value that implements [`Eq`] and [`Hash`] through an [`EqualityComparer`].

Two [`Equated`] values are expected to carry equivalent comparers. Comparisons always use the
comparer of the left-hand side.
*/
#[derive(Clone)]
pub struct Equated<T> {
    value: T,
    comparer: EqualityComparer<T>,
}

impl<T> Equated<T> {
    /// Get a reference to the wrapped value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Unwrap the value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> PartialEq for Equated<T> {
    fn eq(&self, other: &Self) -> bool {
        self.comparer.equals(&self.value, &other.value)
    }
}

impl<T> Eq for Equated<T> {}

impl<T> Hash for Equated<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.comparer.hash_of(&self.value));
    }
}

impl<T: fmt::Debug> fmt::Debug for Equated<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Equated").field(&self.value).finish()
    }
}
