/*!
raincmp provides small building blocks for expressing orderings and equalities over values without
implementing [`Ord`], [`Eq`] or [`Hash`] on them.

- [`Comparer`] wraps an ordering function and composes with key extraction and chaining, e.g.
  "order by age, then by name".
- [`EqualityComparer`] does the same for an equality function paired with a hash function.
- [`order_by`] produces a stable, restartable, lazily sorted view over a sequence.
- The builders in [`builder`] assemble comparers from pieces that are only known at runtime and
  reject absent pieces with [`ComparerError::InvalidArgument`].
- [`enums`] has independent helpers to parse and list the values of fieldless enums.

All comparers are immutable and `Send + Sync`. Wrapped functions are expected to be pure; a panic in
a wrapped function is never caught and propagates to the caller.
*/

#![warn(missing_debug_implementations, missing_docs)]

pub mod builder;
pub use builder::{
    ComparerBuilder, EqualityComparerBuilder, KeyComparerBuilder, KeyEqualityComparerBuilder,
};

mod comparator;
pub use comparator::{Comparator, Comparer};

pub mod enums;
pub use enums::EnumValues;

mod equality;
pub use equality::{EqualityComparator, EqualityComparer, Equated, EqualsFn, HashFn};

mod errors;
pub use errors::{ComparerError, ComparerResult, ParseEnumError};

pub mod options;
pub use options::{SortOrder, StringComparison};

mod ordering;
pub use ordering::{order_by, order_by_descending, order_by_with, OrderedSequence};

mod string_comparison;
mod utils;
