/*!
Lazily sorted views over restartable sequences.

[`order_by`] does not touch its source when called. Every traversal of the returned
[`OrderedSequence`] clones the source, collects it and sorts it, so the result reflects the source
as it is at traversal time and can be traversed any number of times.

# Stability

Sorting is stable. Elements that compare as equal keep the order they had in the source. Callers
rely on this e.g. to apply a further ordering on top of an already ordered sequence.
*/

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::vec;

use crate::comparator::{Comparator, Comparer};
use crate::options::SortOrder;

/**
Return a view of `source` sorted in ascending order according to `comparer`.

Elements of the source may be owned values or anything that borrows as `T`, so both
`order_by(values.clone(), ..)` and `order_by(&values, ..)` are supported.
*/
pub fn order_by<I, T, C>(source: I, comparer: C) -> OrderedSequence<I, T>
where
    I: IntoIterator + Clone,
    I::Item: Borrow<T>,
    T: ?Sized + 'static,
    C: Comparator<T> + Send + Sync + 'static,
{
    order_by_with(source, comparer, SortOrder::Ascending)
}

/// Return a view of `source` sorted in descending order according to `comparer`.
pub fn order_by_descending<I, T, C>(source: I, comparer: C) -> OrderedSequence<I, T>
where
    I: IntoIterator + Clone,
    I::Item: Borrow<T>,
    T: ?Sized + 'static,
    C: Comparator<T> + Send + Sync + 'static,
{
    order_by_with(source, comparer, SortOrder::Descending)
}

/// Return a view of `source` sorted in the given direction according to `comparer`.
pub fn order_by_with<I, T, C>(
    source: I,
    comparer: C,
    sort_order: SortOrder,
) -> OrderedSequence<I, T>
where
    I: IntoIterator + Clone,
    I::Item: Borrow<T>,
    T: ?Sized + 'static,
    C: Comparator<T> + Send + Sync + 'static,
{
    let comparer = Comparer::from_comparator(comparer);
    let comparer = match sort_order {
        SortOrder::Ascending => comparer,
        SortOrder::Descending => comparer.reversed(),
    };

    OrderedSequence {
        source,
        comparer,
        item_type: PhantomData,
    }
}

/// A restartable, lazily sorted view over a source sequence.
pub struct OrderedSequence<I, T: ?Sized> {
    /// The unsorted source. It is cloned for every traversal.
    source: I,

    /// The complete ordering including any secondary orderings added with `then_by`.
    comparer: Comparer<T>,

    item_type: PhantomData<fn(&T)>,
}

impl<I, T> OrderedSequence<I, T>
where
    I: IntoIterator + Clone,
    I::Item: Borrow<T>,
    T: ?Sized + 'static,
{
    /// Sort a fresh copy of the source and iterate over it.
    pub fn iter(&self) -> vec::IntoIter<I::Item> {
        self.to_vec().into_iter()
    }

    /// Sort a fresh copy of the source and return it.
    pub fn to_vec(&self) -> Vec<I::Item> {
        let mut items: Vec<I::Item> = self.source.clone().into_iter().collect();
        log::debug!("Sorting a sequence of {} elements", items.len());
        items.sort_by(|a, b| {
            self.comparer
                .compare(Borrow::<T>::borrow(a), Borrow::<T>::borrow(b))
        });

        items
    }

    /**
    Break ties of the current ordering with `comparer`.

    This is equivalent to ordering the source once by the combined comparer. It is not a re-sort of
    the sorted output by `comparer` alone.
    */
    pub fn then_by<C>(self, comparer: C) -> Self
    where
        C: Comparator<T> + Send + Sync + 'static,
    {
        self.then_by_with(comparer, SortOrder::Ascending)
    }

    /// Break ties of the current ordering with `comparer` in descending order.
    pub fn then_by_descending<C>(self, comparer: C) -> Self
    where
        C: Comparator<T> + Send + Sync + 'static,
    {
        self.then_by_with(comparer, SortOrder::Descending)
    }

    /// Break ties of the current ordering with `comparer` in the given direction.
    pub fn then_by_with<C>(self, comparer: C, sort_order: SortOrder) -> Self
    where
        C: Comparator<T> + Send + Sync + 'static,
    {
        let next = Comparer::from_comparator(comparer);
        let next = match sort_order {
            SortOrder::Ascending => next,
            SortOrder::Descending => next.reversed(),
        };

        Self {
            source: self.source,
            comparer: self.comparer.then(&next),
            item_type: PhantomData,
        }
    }

    /// Get a reference to the complete ordering used by this view.
    pub fn comparer(&self) -> &Comparer<T> {
        &self.comparer
    }
}

impl<I, T> IntoIterator for OrderedSequence<I, T>
where
    I: IntoIterator + Clone,
    I::Item: Borrow<T>,
    T: ?Sized + 'static,
{
    type Item = I::Item;
    type IntoIter = vec::IntoIter<I::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, I, T> IntoIterator for &'a OrderedSequence<I, T>
where
    I: IntoIterator + Clone,
    I::Item: Borrow<T>,
    T: ?Sized + 'static,
{
    type Item = I::Item;
    type IntoIter = vec::IntoIter<I::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<I: Clone, T: ?Sized> Clone for OrderedSequence<I, T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            comparer: self.comparer.clone(),
            item_type: PhantomData,
        }
    }
}

impl<I: fmt::Debug, T: ?Sized> fmt::Debug for OrderedSequence<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedSequence")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
