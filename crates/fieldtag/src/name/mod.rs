//! Module: name
//! Responsibility: default external names derived from declared identifiers.
//! Does not own: explicit names from tag text (see `field`).
//!
//! Invariants:
//! - Resolution is pure and deterministic.
//! - Output is non-empty whenever the identifier is non-empty. Identifiers
//!   with no alphanumeric char are returned unchanged.


use crate::config::NameCase;
use convert_case::{Case, Casing};

/// Resolve an identifier to its default snake_case external name.
///
/// `DBInstanceId` becomes `db_instance_id`.
#[must_use]
pub fn resolve_name(ident: &str) -> String {
    let words = split_words(ident);
    if words.is_empty() {
        return ident.to_string();
    }

    words
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Resolve an identifier using an explicit output convention.
#[must_use]
pub fn resolve_name_with(ident: &str, case: NameCase) -> String {
    if split_words(ident).is_empty() {
        return ident.to_string();
    }
    let snake = resolve_name(ident);

    match case {
        NameCase::Snake => snake,
        NameCase::Kebab => snake.from_case(Case::Snake).to_case(Case::Kebab),
        NameCase::Camel => snake.from_case(Case::Snake).to_case(Case::Camel),
        NameCase::Pascal => snake.from_case(Case::Snake).to_case(Case::Pascal),
        NameCase::UpperSnake => snake.from_case(Case::Snake).to_case(Case::UpperSnake),
    }
}

///
/// CharClass
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum CharClass {
    Upper,
    Lower,
    Digit,
    Other,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_ascii_digit() {
            Self::Digit
        } else if c.is_uppercase() {
            Self::Upper
        } else if c.is_alphanumeric() {
            // caseless letters and non-ascii numerals group with lowercase
            Self::Lower
        } else {
            Self::Other
        }
    }

    const fn is_letter(self) -> bool {
        matches!(self, Self::Upper | Self::Lower)
    }
}

/// Split an identifier into words at case, acronym, and digit boundaries.
/// Non-alphanumeric characters separate words and are dropped.
pub(crate) fn split_words(ident: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = ident.char_indices().collect();
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &(offset, c)) in chars.iter().enumerate() {
        let class = CharClass::of(c);

        if class == CharClass::Other {
            if let Some(begin) = start.take() {
                words.push(&ident[begin..offset]);
            }
            continue;
        }

        let Some(begin) = start else {
            start = Some(offset);
            continue;
        };

        let prev = CharClass::of(chars[i - 1].1);
        let next = chars.get(i + 1).map(|&(_, n)| CharClass::of(n));

        let boundary = match (prev, class) {
            // fooBar, v2Beta
            (CharClass::Lower | CharClass::Digit, CharClass::Upper) => true,
            // ipv4, 4xx
            (p, c) if p.is_letter() && c == CharClass::Digit => true,
            (CharClass::Digit, c) if c.is_letter() => true,
            // DBInstance: the last capital of a run opens the next word
            (CharClass::Upper, CharClass::Upper) => next == Some(CharClass::Lower),
            _ => false,
        };

        if boundary {
            words.push(&ident[begin..offset]);
            start = Some(offset);
        }
    }

    if let Some(begin) = start {
        words.push(&ident[begin..]);
    }

    words
}
