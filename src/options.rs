/*!
This module holds the option types that control how comparers treat their inputs.
*/

/**
Selects the rules used to compare, equate and hash strings.

**This defaults to [`StringComparison::Ordinal`].**
*/
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum StringComparison {
    /// Compare the UTF-8 bytes of the strings.
    #[default]
    Ordinal,

    /**
    Compare the strings character by character after mapping every character to upper case.

    This is the mode to use for file names, identifiers and other machine facing text where
    `"File.txt"` and `"FILE.TXT"` should be treated as the same value.
    */
    OrdinalIgnoreCase,

    /**
    Compare the strings the way a locale-invariant collation would.

    Letters are first compared without regard to case so that `"ann"` sorts before `"Bob"`. Ties are
    broken by case, with lower case sorting before upper case, and finally by the ordinal ordering.
    Two strings only compare as equal when they are ordinally equal.
    */
    InvariantCulture,

    /// Like [`StringComparison::InvariantCulture`] but strings differing only in case are equal.
    InvariantCultureIgnoreCase,
}

/// Public methods
impl StringComparison {
    /**
    Map a case-insensitivity flag to a comparison mode.

    Case-insensitive comparisons are ordinal, case-sensitive ones are culture-style. The two are
    not mirror images of each other: `"ann"` and `"Bob"` order differently under each.
    */
    pub fn from_case_insensitive(case_insensitive: bool) -> Self {
        if case_insensitive {
            StringComparison::OrdinalIgnoreCase
        } else {
            StringComparison::InvariantCulture
        }
    }

    /// Returns `true` if strings differing only in letter case are considered equal.
    pub fn ignores_case(&self) -> bool {
        matches!(
            self,
            StringComparison::OrdinalIgnoreCase | StringComparison::InvariantCultureIgnoreCase
        )
    }
}

/**
The direction a sequence is sorted in.

**This defaults to [`SortOrder::Ascending`].**
*/
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SortOrder {
    /// Smallest element first.
    #[default]
    Ascending,

    /// Largest element first. Equal elements still keep their input order.
    Descending,
}
