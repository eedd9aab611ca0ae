/*!
Builders for comparers that are assembled at runtime.

The constructors on [`Comparer`] and [`EqualityComparer`] cannot be called without their required
functions. When the pieces of a comparer are only known at runtime, e.g. when sort keys come from
user input, a required piece may be absent. The builders in this module collect the pieces and
report an absent required piece as [`ComparerError::InvalidArgument`] from `build`, before any
comparison is attempted.
*/

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::comparator::{Comparator, Comparer};
use crate::equality::{EqualityComparer, EqualsFn, HashFn};
use crate::errors::{ComparerError, ComparerResult};

/// A shareable key selector.
type SelectorFn<T, K> = Arc<dyn Fn(&T) -> K + Send + Sync>;

/**
Builds a [`Comparer`] that orders values by a key.

The key selector is required. The key comparer is optional and defaults to the natural ordering of
the key.
*/
pub struct KeyComparerBuilder<T: ?Sized, K> {
    selector: Option<SelectorFn<T, K>>,
    key_comparer: Option<Comparer<K>>,
}

impl<T: ?Sized + 'static, K: 'static> KeyComparerBuilder<T, K> {
    /// Create a new [`KeyComparerBuilder`] without any pieces.
    pub fn new() -> Self {
        Self {
            selector: None,
            key_comparer: None,
        }
    }

    /// Set the key selector.
    pub fn selector<S>(mut self, selector: S) -> Self
    where
        S: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.selector = Some(Arc::new(selector));
        self
    }

    /// Set the key selector if one is provided.
    pub fn maybe_selector(mut self, selector: Option<SelectorFn<T, K>>) -> Self {
        self.selector = selector;
        self
    }

    /// Set the comparer used for keys.
    pub fn key_comparer<C>(mut self, key_comparer: C) -> Self
    where
        C: Comparator<K> + Send + Sync + 'static,
    {
        self.key_comparer = Some(Comparer::from_comparator(key_comparer));
        self
    }

    /// Set a raw ordering function used for keys.
    pub fn key_ordering<F>(mut self, ordering: F) -> Self
    where
        F: Fn(&K, &K) -> Ordering + Send + Sync + 'static,
    {
        self.key_comparer = Some(Comparer::from_fn(ordering));
        self
    }

    /**
    Build the comparer.

    # Errors

    Returns [`ComparerError::InvalidArgument`] if no key selector was provided.
    */
    pub fn build(self) -> ComparerResult<Comparer<T>>
    where
        K: Ord,
    {
        let selector = self.selector.ok_or_else(|| {
            rejected("a key selector is required to order values by key".to_string())
        })?;
        let key_comparer = self.key_comparer.unwrap_or_else(Comparer::natural);

        Ok(Comparer::by_key_with(
            move |value: &T| selector(value),
            key_comparer,
        ))
    }
}

impl<T: ?Sized + 'static, K: 'static> Default for KeyComparerBuilder<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized, K> fmt::Debug for KeyComparerBuilder<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyComparerBuilder")
            .field("has_selector", &self.selector.is_some())
            .field("has_key_comparer", &self.key_comparer.is_some())
            .finish()
    }
}

/**
Builds a chain of comparers.

Stages are applied in the order they were added. Later stages only break ties of the earlier ones.
*/
pub struct ComparerBuilder<T: ?Sized> {
    /// The chain assembled so far.
    comparer: Option<Comparer<T>>,

    /// Descriptions of every required stage that turned out to be absent.
    missing: Vec<String>,
}

impl<T: ?Sized + 'static> ComparerBuilder<T> {
    /// Create a new [`ComparerBuilder`] without any stages.
    pub fn new() -> Self {
        Self {
            comparer: None,
            missing: vec![],
        }
    }

    /// Append a stage.
    pub fn stage(mut self, stage: Comparer<T>) -> Self {
        self.comparer = Some(match self.comparer {
            Some(chain) => chain.then(&stage),
            None => stage,
        });
        self
    }

    /// Append a stage wrapping a raw ordering function.
    pub fn ordering<F>(self, ordering: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.stage(Comparer::from_fn(ordering))
    }

    /**
    Append a stage that must be present.

    An absent stage is recorded under `name` and reported by [`ComparerBuilder::build`].
    */
    pub fn required_stage(mut self, name: &str, stage: Option<Comparer<T>>) -> Self {
        match stage {
            Some(stage) => self.stage(stage),
            None => {
                self.missing.push(format!("the comparer for `{}` was not provided", name));
                self
            }
        }
    }

    /// Append a stage built by a [`KeyComparerBuilder`]. Build failures are reported by `build`.
    pub fn key_stage<K>(mut self, key: KeyComparerBuilder<T, K>) -> Self
    where
        K: Ord + 'static,
    {
        match key.build() {
            Ok(stage) => self.stage(stage),
            Err(ComparerError::InvalidArgument(reason)) => {
                self.missing.push(reason);
                self
            }
        }
    }

    /**
    Build the chained comparer.

    # Errors

    Returns [`ComparerError::InvalidArgument`] if no stage was added or if a required stage was
    absent.
    */
    pub fn build(self) -> ComparerResult<Comparer<T>> {
        if !self.missing.is_empty() {
            return Err(rejected(self.missing.join("; ")));
        }

        self.comparer.ok_or_else(|| {
            rejected("at least one ordering function or key selector is required".to_string())
        })
    }
}

impl<T: ?Sized + 'static> Default for ComparerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for ComparerBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparerBuilder")
            .field("has_stages", &self.comparer.is_some())
            .field("missing", &self.missing)
            .finish()
    }
}

/**
Builds an [`EqualityComparer`] from raw functions.

The equality function is required. The hash function is optional and defaults to the intrinsic
[`Hash`] of the value.
*/
pub struct EqualityComparerBuilder<T: ?Sized> {
    equals: Option<EqualsFn<T>>,
    hash: Option<HashFn<T>>,
}

impl<T: ?Sized + 'static> EqualityComparerBuilder<T> {
    /// Create a new [`EqualityComparerBuilder`] without any pieces.
    pub fn new() -> Self {
        Self {
            equals: None,
            hash: None,
        }
    }

    /// Set the equality function.
    pub fn equals<E>(mut self, equals: E) -> Self
    where
        E: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.equals = Some(Arc::new(equals));
        self
    }

    /// Set the equality function if one is provided.
    pub fn maybe_equals(mut self, equals: Option<EqualsFn<T>>) -> Self {
        self.equals = equals;
        self
    }

    /// Set the hash function.
    pub fn hash<H>(mut self, hash: H) -> Self
    where
        H: Fn(&T) -> u64 + Send + Sync + 'static,
    {
        self.hash = Some(Arc::new(hash));
        self
    }

    /**
    Build the equality comparer.

    # Errors

    Returns [`ComparerError::InvalidArgument`] if no equality function was provided.
    */
    pub fn build(self) -> ComparerResult<EqualityComparer<T>>
    where
        T: Hash,
    {
        let equals = self
            .equals
            .ok_or_else(|| rejected("an equality function is required".to_string()))?;

        Ok(EqualityComparer::from_fns(
            move |a: &T, b: &T| equals(a, b),
            self.hash,
        ))
    }
}

impl<T: ?Sized + 'static> Default for EqualityComparerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for EqualityComparerBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EqualityComparerBuilder")
            .field("has_equals", &self.equals.is_some())
            .field("has_hash", &self.hash.is_some())
            .finish()
    }
}

/**
Builds an [`EqualityComparer`] that equates values by a key.

The key selector is required. The key equality and hash functions are each optional and fall back
to the intrinsic [`Eq`] and [`Hash`] of the key.
*/
pub struct KeyEqualityComparerBuilder<T: ?Sized, K> {
    selector: Option<SelectorFn<T, K>>,
    equals: Option<EqualsFn<K>>,
    hash: Option<HashFn<K>>,
}

impl<T: ?Sized + 'static, K: 'static> KeyEqualityComparerBuilder<T, K> {
    /// Create a new [`KeyEqualityComparerBuilder`] without any pieces.
    pub fn new() -> Self {
        Self {
            selector: None,
            equals: None,
            hash: None,
        }
    }

    /// Set the key selector.
    pub fn selector<S>(mut self, selector: S) -> Self
    where
        S: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.selector = Some(Arc::new(selector));
        self
    }

    /// Set the key selector if one is provided.
    pub fn maybe_selector(mut self, selector: Option<SelectorFn<T, K>>) -> Self {
        self.selector = selector;
        self
    }

    /// Set the key equality function.
    pub fn equals<E>(mut self, equals: E) -> Self
    where
        E: Fn(&K, &K) -> bool + Send + Sync + 'static,
    {
        self.equals = Some(Arc::new(equals));
        self
    }

    /// Set the key hash function.
    pub fn hash<H>(mut self, hash: H) -> Self
    where
        H: Fn(&K) -> u64 + Send + Sync + 'static,
    {
        self.hash = Some(Arc::new(hash));
        self
    }

    /**
    Build the equality comparer.

    # Errors

    Returns [`ComparerError::InvalidArgument`] if no key selector was provided.
    */
    pub fn build(self) -> ComparerResult<EqualityComparer<T>>
    where
        K: Eq + Hash,
    {
        let selector = self.selector.ok_or_else(|| {
            rejected("a key selector is required to equate values by key".to_string())
        })?;

        Ok(EqualityComparer::by_key_with_fns(
            move |value: &T| selector(value),
            self.equals,
            self.hash,
        ))
    }
}

impl<T: ?Sized + 'static, K: 'static> Default for KeyEqualityComparerBuilder<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized, K> fmt::Debug for KeyEqualityComparerBuilder<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyEqualityComparerBuilder")
            .field("has_selector", &self.selector.is_some())
            .field("has_equals", &self.equals.is_some())
            .field("has_hash", &self.hash.is_some())
            .finish()
    }
}

/// Log and wrap the reason a builder was rejected.
fn rejected(reason: String) -> ComparerError {
    log::warn!("Rejecting comparer construction: {}", reason);
    ComparerError::InvalidArgument(reason)
}
