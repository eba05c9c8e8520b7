use crate::{MAX_EMBED_DEPTH, set::IndexPath};
use thiserror::Error as ThisError;

///
/// FieldSetError
///
/// Failures while building a field set or accessing it by name.
/// Ambiguous names are not errors for lookups, which return every match;
/// single-value accessors report them as `AmbiguousField`.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum FieldSetError {
    #[error("cannot build a field set over non-record value of type {type_name}")]
    InvalidShape { type_name: &'static str },

    #[error("record '{record}' embeds deeper than {max} levels", max = MAX_EMBED_DEPTH)]
    EmbeddingTooDeep { record: &'static str },

    #[error("no visible field named '{name}'")]
    UnknownField { name: String },

    #[error("field name '{name}' is shared by {count} visible fields", count = .paths.len())]
    AmbiguousField { name: String, paths: Vec<IndexPath> },

    #[error("field at {path} holds {actual}, not {expected}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        actual: &'static str,
    },
}

///
/// TagError
///
/// Structural problems in raw tag text. Only surfaced by strict parsing;
/// permissive parsing skips the offending pair.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TagError {
    #[error("malformed tag pair at byte {offset}: {reason}")]
    MalformedPair { offset: usize, reason: &'static str },
}
