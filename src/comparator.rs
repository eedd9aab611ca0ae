// Copyright (c) 2021 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/*!
Utilities to assist with comparing based on various characteristics. Useful for sorting by
properties different from the natural ordering provided by ordering traits e.g. [`Ord`].

The central type is [`Comparer`], an immutable, cheaply cloneable holder of an ordering function.
New comparers are derived from existing ones by key extraction ([`Comparer::by_key`]) and by
chaining ([`Comparer::then_by_key`]). A chain is not materialized as a list: every chaining call
wraps the previous ordering function in a new closure that only consults the next key when the
previous ones compared as [`Ordering::Equal`].

```
use raincmp::Comparer;

struct Person {
    name: String,
    age: u32,
}

let by_age_then_name = Comparer::by_key(|p: &Person| p.age)
    .then_by_string_key(|p: &Person| p.name.as_str(), false);

let mut people = vec![
    Person { name: "bob".to_string(), age: 40 },
    Person { name: "ann".to_string(), age: 40 },
    Person { name: "cid".to_string(), age: 25 },
];
by_age_then_name.sort(&mut people);

let names: Vec<&str> = people.iter().map(|p| p.name.as_str()).collect();
assert_eq!(names, ["cid", "ann", "bob"]);
```
*/

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::options::StringComparison;

/// An interface for structs intended to be used as a comparator.
pub trait Comparator<T: ?Sized> {
    /**
    Return an ordering obtained by comparing `a` and `b`.

    Invariants:

    1. Returns [`Ordering::Greater`] if `a` > `b`
    1. Returns [`Ordering::Equal`] if `a` == `b`
    1. Returns [`Ordering::Less`] if `a` < `b`
    */
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

impl Comparator<str> for StringComparison {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        StringComparison::compare(self, a, b)
    }
}

impl Comparator<String> for StringComparison {
    fn compare(&self, a: &String, b: &String) -> Ordering {
        StringComparison::compare(self, a, b)
    }
}

/// The shared ordering function held by a [`Comparer`].
type OrderingFn<T> = dyn Fn(&T, &T) -> Ordering + Send + Sync;

/**
A composable comparator wrapping an ordering function.

# Concurrency

Wrapped functions must be `Send + Sync`, so a [`Comparer`] can be shared between threads and
invoked concurrently without any synchronization.
*/
pub struct Comparer<T: ?Sized> {
    ordering: Arc<OrderingFn<T>>,
}

/// Construction
impl<T: ?Sized + 'static> Comparer<T> {
    /// Wrap an ordering function.
    pub fn from_fn<F>(ordering: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self {
            ordering: Arc::new(ordering),
        }
    }

    /**
    Wrap an ordering function that encodes its result as a signed integer.

    A negative result means less than, zero means equal and a positive result means greater than.
    */
    pub fn from_signed<F>(ordering: F) -> Self
    where
        F: Fn(&T, &T) -> i32 + Send + Sync + 'static,
    {
        Self::from_fn(move |a, b| ordering(a, b).cmp(&0))
    }

    /// Wrap any other [`Comparator`] implementation.
    pub fn from_comparator<C>(comparator: C) -> Self
    where
        C: Comparator<T> + Send + Sync + 'static,
    {
        Self::from_fn(move |a, b| comparator.compare(a, b))
    }

    /// A comparer using the natural ordering of `T`.
    pub fn natural() -> Self
    where
        T: Ord,
    {
        Self::from_fn(|a: &T, b: &T| a.cmp(b))
    }

    /// Order values by the natural ordering of the key produced by `selector`.
    pub fn by_key<K, S>(selector: S) -> Self
    where
        K: Ord + 'static,
        S: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::from_fn(move |a, b| selector(a).cmp(&selector(b)))
    }

    /// Order values by the natural ordering of a key borrowed from the value.
    pub fn by_key_ref<K, S>(selector: S) -> Self
    where
        K: Ord + ?Sized + 'static,
        S: for<'a> Fn(&'a T) -> &'a K + Send + Sync + 'static,
    {
        Self::from_fn(move |a, b| selector(a).cmp(selector(b)))
    }

    /// Order values by comparing the key produced by `selector` with `key_comparer`.
    pub fn by_key_with<K, S, C>(selector: S, key_comparer: C) -> Self
    where
        K: 'static,
        S: Fn(&T) -> K + Send + Sync + 'static,
        C: Comparator<K> + Send + Sync + 'static,
    {
        Self::from_fn(move |a, b| key_comparer.compare(&selector(a), &selector(b)))
    }

    /// Order values by comparing the key produced by `selector` with a raw ordering function.
    pub fn by_key_with_fn<K, S, F>(selector: S, ordering: F) -> Self
    where
        K: 'static,
        S: Fn(&T) -> K + Send + Sync + 'static,
        F: Fn(&K, &K) -> Ordering + Send + Sync + 'static,
    {
        Self::by_key_with(selector, ordering)
    }

    /**
    Order values by a string key.

    When `case_insensitive` is `true` the keys are compared ordinally without regard to case, which
    suits file names and identifiers. Otherwise the keys are compared with the culture-style
    [`StringComparison::InvariantCulture`] rules.
    */
    pub fn by_string_key<S>(selector: S, case_insensitive: bool) -> Self
    where
        S: for<'a> Fn(&'a T) -> &'a str + Send + Sync + 'static,
    {
        let comparison = StringComparison::from_case_insensitive(case_insensitive);
        Self::by_string_key_with(selector, comparison)
    }

    /// Order values by a string key compared under the given [`StringComparison`] mode.
    pub fn by_string_key_with<S>(selector: S, comparison: StringComparison) -> Self
    where
        S: for<'a> Fn(&'a T) -> &'a str + Send + Sync + 'static,
    {
        Self::from_fn(move |a, b| comparison.compare(selector(a), selector(b)))
    }
}

/// Composition
impl<T: ?Sized + 'static> Comparer<T> {
    /**
    Return a comparer that orders by `self` first and falls through to `next` on ties.

    `self` is left untouched.
    */
    pub fn then(&self, next: &Comparer<T>) -> Self {
        let first = Arc::clone(&self.ordering);
        let second = Arc::clone(&next.ordering);
        Self::from_fn(move |a, b| first(a, b).then_with(|| second(a, b)))
    }

    /// Break ties with the natural ordering of the key produced by `selector`.
    pub fn then_by_key<K, S>(&self, selector: S) -> Self
    where
        K: Ord + 'static,
        S: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.then(&Comparer::by_key(selector))
    }

    /// Break ties with the natural ordering of a key borrowed from the value.
    pub fn then_by_key_ref<K, S>(&self, selector: S) -> Self
    where
        K: Ord + ?Sized + 'static,
        S: for<'a> Fn(&'a T) -> &'a K + Send + Sync + 'static,
    {
        self.then(&Comparer::by_key_ref(selector))
    }

    /// Break ties by comparing the key produced by `selector` with `key_comparer`.
    pub fn then_by_key_with<K, S, C>(&self, selector: S, key_comparer: C) -> Self
    where
        K: 'static,
        S: Fn(&T) -> K + Send + Sync + 'static,
        C: Comparator<K> + Send + Sync + 'static,
    {
        self.then(&Comparer::by_key_with(selector, key_comparer))
    }

    /// Break ties by comparing the key produced by `selector` with a raw ordering function.
    pub fn then_by_key_with_fn<K, S, F>(&self, selector: S, ordering: F) -> Self
    where
        K: 'static,
        S: Fn(&T) -> K + Send + Sync + 'static,
        F: Fn(&K, &K) -> Ordering + Send + Sync + 'static,
    {
        self.then(&Comparer::by_key_with_fn(selector, ordering))
    }

    /// Break ties with a string key. See [`Comparer::by_string_key`] for the meaning of the flag.
    pub fn then_by_string_key<S>(&self, selector: S, case_insensitive: bool) -> Self
    where
        S: for<'a> Fn(&'a T) -> &'a str + Send + Sync + 'static,
    {
        self.then(&Comparer::by_string_key(selector, case_insensitive))
    }

    /// Break ties with a string key compared under the given [`StringComparison`] mode.
    pub fn then_by_string_key_with<S>(&self, selector: S, comparison: StringComparison) -> Self
    where
        S: for<'a> Fn(&'a T) -> &'a str + Send + Sync + 'static,
    {
        self.then(&Comparer::by_string_key_with(selector, comparison))
    }

    /// Return a comparer with the opposite ordering.
    pub fn reversed(&self) -> Self {
        let ordering = Arc::clone(&self.ordering);
        Self::from_fn(move |a, b| ordering(b, a))
    }
}

/// Invocation
impl<T: ?Sized> Comparer<T> {
    /**
    Compare `a` and `b` with the wrapped ordering function.

    A panic raised by a wrapped function is not caught.
    */
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.ordering)(a, b)
    }

    /// Compare `a` and `b` and encode the result as `-1`, `0` or `1`.
    pub fn compare_signed(&self, a: &T, b: &T) -> i32 {
        match self.compare(a, b) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Borrow the comparer as a closure e.g. for [`slice::sort_by`] or [`slice::binary_search_by`].
    pub fn as_fn(&self) -> impl Fn(&T, &T) -> Ordering + '_ {
        move |a: &T, b: &T| self.compare(a, b)
    }
}

/// Helpers over collections
impl<T> Comparer<T> {
    /// Sort `values` in place. The sort is stable.
    pub fn sort(&self, values: &mut [T]) {
        values.sort_by(|a, b| self.compare(a, b));
    }

    /// Returns `true` if `values` is sorted according to this comparer.
    pub fn is_sorted(&self, values: &[T]) -> bool {
        values
            .windows(2)
            .all(|pair| self.compare(&pair[0], &pair[1]) != Ordering::Greater)
    }

    /// Return the greatest value. If several values are greatest, the last one is returned.
    pub fn max_of<I: IntoIterator<Item = T>>(&self, values: I) -> Option<T> {
        values.into_iter().max_by(|a, b| self.compare(a, b))
    }

    /// Return the least value. If several values are least, the first one is returned.
    pub fn min_of<I: IntoIterator<Item = T>>(&self, values: I) -> Option<T> {
        values.into_iter().min_by(|a, b| self.compare(a, b))
    }
}

impl<T: ?Sized> Comparator<T> for Comparer<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        Comparer::compare(self, a, b)
    }
}

impl<T: ?Sized> Clone for Comparer<T> {
    fn clone(&self) -> Self {
        Self {
            ordering: Arc::clone(&self.ordering),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Comparer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Person {
        name: String,
        age: u32,
    }

    fn person(name: &str, age: u32) -> Person {
        Person {
            name: name.to_string(),
            age,
        }
    }

    #[test]
    fn by_key_uses_the_natural_ordering_of_the_key() {
        let comparer = Comparer::by_key(|p: &Person| p.age);

        assert_eq!(
            comparer.compare(&person("a", 30), &person("b", 25)),
            Ordering::Greater
        );
        assert_eq!(comparer.compare_signed(&person("a", 30), &person("b", 25)), 1);
        assert_eq!(comparer.compare_signed(&person("a", 25), &person("b", 30)), -1);
        assert_eq!(comparer.compare_signed(&person("a", 30), &person("b", 30)), 0);
    }

    #[test]
    fn signed_ordering_functions_are_interpreted_by_sign() {
        let comparer = Comparer::from_signed(|a: &i64, b: &i64| (a - b) as i32);

        assert_eq!(comparer.compare(&10, &3), Ordering::Greater);
        assert_eq!(comparer.compare(&3, &10), Ordering::Less);
        assert_eq!(comparer.compare(&7, &7), Ordering::Equal);
    }

    #[test]
    fn end_to_end_age_then_name() {
        let comparer = Comparer::by_key(|p: &Person| p.age)
            .then_by_string_key(|p: &Person| p.name.as_str(), false);
        let mut people = vec![person("bob", 40), person("ann", 40), person("cid", 25)];

        comparer.sort(&mut people);

        assert_eq!(
            people,
            vec![person("cid", 25), person("ann", 40), person("bob", 40)]
        );
        assert!(comparer.is_sorted(&people));
    }

    #[test]
    fn chaining_leaves_the_receiver_untouched() {
        let by_age = Comparer::by_key(|p: &Person| p.age);
        let by_age_then_name = by_age.then_by_key(|p: &Person| p.name.clone());

        let ann = person("ann", 40);
        let bob = person("bob", 40);
        assert_eq!(by_age.compare(&ann, &bob), Ordering::Equal);
        assert_eq!(by_age_then_name.compare(&ann, &bob), Ordering::Less);
    }

    #[test]
    fn chaining_is_associative() {
        let mut triples = vec![];
        for a in 0..3 {
            for b in 0..3 {
                for c in 0..3 {
                    triples.push((a, b, c));
                }
            }
        }
        triples.reverse();

        let left_nested = Comparer::by_key(|t: &(i32, i32, i32)| t.0)
            .then_by_key(|t: &(i32, i32, i32)| t.1)
            .then_by_key(|t: &(i32, i32, i32)| t.2);
        let right_nested = Comparer::by_key(|t: &(i32, i32, i32)| t.0).then(
            &Comparer::by_key(|t: &(i32, i32, i32)| t.1).then_by_key(|t: &(i32, i32, i32)| t.2),
        );

        for x in &triples {
            for y in &triples {
                assert_eq!(left_nested.compare(x, y), right_nested.compare(x, y));
                assert_eq!(left_nested.compare(x, y), x.cmp(y));
            }
        }
    }

    #[test]
    fn key_comparers_can_be_comparers_or_functions() {
        let descending_age =
            Comparer::by_key_with(|p: &Person| p.age, Comparer::<u32>::natural().reversed());
        let descending_age_fn =
            Comparer::by_key_with_fn(|p: &Person| p.age, |a: &u32, b: &u32| b.cmp(a));

        let young = person("a", 20);
        let old = person("b", 60);
        assert_eq!(descending_age.compare(&young, &old), Ordering::Greater);
        assert_eq!(descending_age_fn.compare(&young, &old), Ordering::Greater);

        let by_name = Comparer::by_key_with(
            |p: &Person| p.name.clone(),
            StringComparison::OrdinalIgnoreCase,
        );
        assert_eq!(
            by_name.compare(&person("ZED", 1), &person("zed", 2)),
            Ordering::Equal
        );
    }

    #[test]
    fn string_keys_respect_the_case_flag() {
        let insensitive = Comparer::by_string_key(|p: &Person| p.name.as_str(), true);
        let sensitive = Comparer::by_string_key(|p: &Person| p.name.as_str(), false);

        let lower = person("File.txt", 1);
        let upper = person("FILE.TXT", 1);
        assert_eq!(insensitive.compare(&lower, &upper), Ordering::Equal);
        assert_ne!(sensitive.compare(&lower, &upper), Ordering::Equal);
    }

    #[test]
    fn borrowed_keys_are_supported() {
        let comparer = Comparer::by_key_ref(|p: &Person| p.name.as_str())
            .then_by_key_ref(|p: &Person| &p.age);

        assert_eq!(
            comparer.compare(&person("amy", 5), &person("amy", 3)),
            Ordering::Greater
        );
        assert_eq!(
            comparer.compare(&person("Bea", 5), &person("amy", 3)),
            Ordering::Less
        );
    }

    #[test]
    fn unsized_values_can_be_compared() {
        let comparer: Comparer<str> =
            Comparer::from_comparator(StringComparison::OrdinalIgnoreCase);

        assert_eq!(comparer.compare("abc", "ABC"), Ordering::Equal);
        assert_eq!(Comparer::<str>::natural().compare("abc", "ABC"), Ordering::Greater);
    }

    #[test]
    fn reversed_comparers_flip_the_ordering() {
        let comparer = Comparer::<i32>::natural().reversed();
        let mut values = vec![3, 1, 2];
        values.sort_by(comparer.as_fn());

        assert_eq!(values, vec![3, 2, 1]);
    }

    #[test]
    fn min_and_max_follow_the_comparer() {
        let comparer = Comparer::by_key(|p: &Person| p.age);
        let people = vec![person("a", 40), person("b", 10), person("c", 40), person("d", 10)];

        assert_eq!(comparer.max_of(people.clone()), Some(person("c", 40)));
        assert_eq!(comparer.min_of(people), Some(person("b", 10)));
        assert_eq!(comparer.min_of(Vec::new()), None);
    }

    #[test]
    fn closures_are_comparators() {
        fn compare_with<C: Comparator<i32>>(comparator: &C, a: i32, b: i32) -> Ordering {
            comparator.compare(&a, &b)
        }

        assert_eq!(compare_with(&|a: &i32, b: &i32| a.cmp(b), 1, 2), Ordering::Less);
        assert_eq!(compare_with(&Comparer::natural(), 2, 1), Ordering::Greater);
    }

    #[test]
    fn comparers_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<Comparer<Person>>();
        assert_send_sync::<Comparer<str>>();
    }

    #[test]
    #[should_panic(expected = "selector failure")]
    fn panics_from_wrapped_functions_propagate() {
        let comparer = Comparer::by_key(|value: &i32| -> i32 {
            if *value < 0 {
                panic!("selector failure");
            }

            *value
        });

        let _ = comparer.compare(&1, &-1);
    }
}
