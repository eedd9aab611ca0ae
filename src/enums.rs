/*!
Generic helpers for parsing and listing the values of fieldless enums.

This module is independent from the comparers. An enum opts in by implementing [`EnumValues`],
usually through the [`enum_values!`](crate::enum_values) macro:

```
use raincmp::enum_values;
use raincmp::enums;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Color {
    Red = 1,
    Green = 2,
    Blue = 4,
}

enum_values!(Color { Red, Green, Blue });

assert_eq!(enums::parse::<Color>("green", true), Ok(Color::Green));
assert_eq!(enums::parse::<Color>("4", false), Ok(Color::Blue));
assert_eq!(enums::try_parse::<Color>("green", false), None);
assert_eq!(enums::values::<Color>().count(), 3);
```

# Parsing rules

1. Surrounding whitespace is ignored. Empty input is rejected with [`ParseEnumError::Empty`].
1. Text that parses as a signed integer selects the variant with that discriminant.
1. Any other text selects the variant with that name, optionally ignoring case.
1. Anything else is rejected with [`ParseEnumError::UnknownValue`].

[`try_parse`] maps every failure to `None`. Callers that need to tell empty input from unknown
values should use [`parse`].
*/

use crate::errors::ParseEnumError;

/// Trait implemented by fieldless enums to expose their variants.
pub trait EnumValues: Copy + 'static {
    /// The name of the enum type, used in error messages.
    const TYPE_NAME: &'static str;

    /// Every variant in declaration order.
    const VARIANTS: &'static [Self];

    /// The name of the variant.
    fn name(self) -> &'static str;

    /// The discriminant of the variant.
    fn discriminant(self) -> i64;
}

/**
Implement [`EnumValues`] for a fieldless enum.

The enum must be in scope by name and every variant must be listed.
*/
#[macro_export]
macro_rules! enum_values {
    ($enum_type:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::enums::EnumValues for $enum_type {
            const TYPE_NAME: &'static str = stringify!($enum_type);

            const VARIANTS: &'static [Self] = &[$($enum_type::$variant),+];

            fn name(self) -> &'static str {
                match self {
                    $($enum_type::$variant => stringify!($variant)),+
                }
            }

            fn discriminant(self) -> i64 {
                self as i64
            }
        }
    };
}

/**
Parse `text` as a value of `E`.

# Errors

Returns [`ParseEnumError::Empty`] for empty input and [`ParseEnumError::UnknownValue`] when the
input neither names nor numbers a variant.
*/
pub fn parse<E: EnumValues>(text: &str, ignore_case: bool) -> Result<E, ParseEnumError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseEnumError::Empty {
            type_name: E::TYPE_NAME,
        });
    }

    let found = match trimmed.parse::<i64>() {
        Ok(discriminant) => {
            log::trace!(
                "Parsing \"{}\" as a discriminant of {}",
                trimmed,
                E::TYPE_NAME
            );
            from_discriminant::<E>(discriminant)
        }
        Err(_) => E::VARIANTS
            .iter()
            .copied()
            .find(|variant| names_match(variant.name(), trimmed, ignore_case)),
    };

    found.ok_or_else(|| ParseEnumError::UnknownValue {
        type_name: E::TYPE_NAME,
        value: trimmed.to_string(),
    })
}

/**
Parse `text` as a value of `E`, returning `None` on any failure.

See [`parse`] for the rules.
*/
pub fn try_parse<E: EnumValues>(text: &str, ignore_case: bool) -> Option<E> {
    match parse::<E>(text, ignore_case) {
        Ok(value) => Some(value),
        Err(error) => {
            log::trace!("{}", error);
            None
        }
    }
}

/// Iterate over every variant of `E` in declaration order.
pub fn values<E: EnumValues>() -> impl Iterator<Item = E> {
    E::VARIANTS.iter().copied()
}

/// Iterate over the names of every variant of `E` in declaration order.
pub fn names<E: EnumValues>() -> impl Iterator<Item = &'static str> {
    values::<E>().map(E::name)
}

/// Return the variant of `E` with the given discriminant.
pub fn from_discriminant<E: EnumValues>(discriminant: i64) -> Option<E> {
    values::<E>().find(|variant| variant.discriminant() == discriminant)
}

fn names_match(name: &str, text: &str, ignore_case: bool) -> bool {
    if ignore_case {
        name.chars()
            .flat_map(char::to_lowercase)
            .eq(text.chars().flat_map(char::to_lowercase))
    } else {
        name == text
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Weekday {
        Monday,
        Tuesday,
        Wednesday,
    }

    crate::enum_values!(Weekday {
        Monday,
        Tuesday,
        Wednesday,
    });

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Level {
        Low = -1,
        High = 10,
    }

    crate::enum_values!(Level { Low, High });

    #[test]
    fn parse_by_name_respects_case_sensitivity() {
        assert_eq!(parse::<Weekday>("Tuesday", false), Ok(Weekday::Tuesday));
        assert_eq!(parse::<Weekday>("  tuesday ", true), Ok(Weekday::Tuesday));
        assert_eq!(
            parse::<Weekday>("tuesday", false),
            Err(ParseEnumError::UnknownValue {
                type_name: "Weekday",
                value: "tuesday".to_string()
            })
        );
    }

    #[test]
    fn parse_by_discriminant() {
        assert_eq!(parse::<Weekday>("2", false), Ok(Weekday::Wednesday));
        assert_eq!(parse::<Level>("-1", false), Ok(Level::Low));
        assert_eq!(parse::<Level>("10", false), Ok(Level::High));
        assert!(matches!(
            parse::<Level>("3", false),
            Err(ParseEnumError::UnknownValue { .. })
        ));
    }

    #[test]
    fn numbers_are_not_positions_in_the_variant_list() {
        assert_eq!(
            parse::<Level>("0", false),
            Err(ParseEnumError::UnknownValue {
                type_name: "Level",
                value: "0".to_string()
            })
        );
        assert_eq!(try_parse::<Level>("1", false), None);
        assert_eq!(try_parse::<Level>("10", false), Some(Level::High));
    }

    #[test]
    fn empty_input_is_distinguished_from_unknown_values() {
        assert_eq!(
            parse::<Weekday>("   ", true),
            Err(ParseEnumError::Empty {
                type_name: "Weekday"
            })
        );
        assert_eq!(try_parse::<Weekday>("   ", true), None);
        assert_eq!(try_parse::<Weekday>("Sunday", true), None);
        assert_eq!(try_parse::<Weekday>("MONDAY", true), Some(Weekday::Monday));
    }

    #[test]
    fn values_are_listed_in_declaration_order() {
        assert_eq!(
            values::<Weekday>().collect::<Vec<_>>(),
            vec![Weekday::Monday, Weekday::Tuesday, Weekday::Wednesday]
        );
        assert_eq!(names::<Level>().collect::<Vec<_>>(), vec!["Low", "High"]);
        assert_eq!(from_discriminant::<Level>(10), Some(Level::High));
        assert_eq!(from_discriminant::<Level>(0), None);
    }
}
