/*!
Comparison, equality and hashing rules for strings under each [`StringComparison`] mode.

# Culture-style comparison

[`StringComparison::InvariantCulture`] approximates a locale-invariant collation with three levels:

1. Primary: the case-folded (lower case) characters are compared.
1. Secondary: at the first position where the characters differ only by case, the lower case
   character sorts first.
1. Tertiary: the ordinal ordering of the original strings.

No collation tables are involved, so accents and other diacritics sort by code point.
*/

use std::cmp::Ordering;

use crate::options::StringComparison;
use crate::utils::hashing::{hash_chars, natural_hash};

/// Public methods
impl StringComparison {
    /// Compare `a` and `b` under this mode.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            StringComparison::Ordinal => a.cmp(b),
            StringComparison::OrdinalIgnoreCase => compare_ignoring_case(a, b),
            StringComparison::InvariantCulture => compare_folded(a, b)
                .then_with(|| compare_case_of_first_difference(a, b))
                .then_with(|| a.cmp(b)),
            StringComparison::InvariantCultureIgnoreCase => compare_folded(a, b),
        }
    }

    /// Returns `true` if `a` and `b` are considered equal under this mode.
    pub fn equals(&self, a: &str, b: &str) -> bool {
        match self {
            StringComparison::Ordinal | StringComparison::InvariantCulture => a == b,
            StringComparison::OrdinalIgnoreCase | StringComparison::InvariantCultureIgnoreCase => {
                self.compare(a, b).is_eq()
            }
        }
    }

    /**
    Hash `value` consistently with [`StringComparison::equals`].

    Strings that are equal under this mode always have the same hash.
    */
    pub fn hash(&self, value: &str) -> u64 {
        match self {
            StringComparison::Ordinal | StringComparison::InvariantCulture => natural_hash(value),
            StringComparison::OrdinalIgnoreCase => hash_chars(upper_chars(value)),
            StringComparison::InvariantCultureIgnoreCase => hash_chars(lower_chars(value)),
        }
    }
}

fn upper_chars(value: &str) -> impl Iterator<Item = char> + '_ {
    value.chars().map(simple_uppercase)
}

/// Map `c` to its upper case form only when that form is a single char, e.g. `ß` stays `ß`.
fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

fn lower_chars(value: &str) -> impl Iterator<Item = char> + '_ {
    value.chars().flat_map(char::to_lowercase)
}

fn compare_ignoring_case(a: &str, b: &str) -> Ordering {
    upper_chars(a).cmp(upper_chars(b))
}

fn compare_folded(a: &str, b: &str) -> Ordering {
    lower_chars(a).cmp(lower_chars(b))
}

/**
Order by the case of the first pair of characters that differ.

Only meaningful once the strings are known to be equal when case-folded.
*/
fn compare_case_of_first_difference(a: &str, b: &str) -> Ordering {
    a.chars()
        .zip(b.chars())
        .find(|(a_char, b_char)| a_char != b_char)
        .map(|(a_char, b_char)| a_char.is_uppercase().cmp(&b_char.is_uppercase()))
        .unwrap_or(Ordering::Equal)
}
