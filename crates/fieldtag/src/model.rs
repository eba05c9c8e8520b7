//! Static shape descriptors.
//!
//! A `RecordModel` lists a record type's fields in declaration order. It is
//! built once per type (normally by `#[derive(Record)]`) and never mutated;
//! field-set construction walks this table instead of inspecting values.

use std::fmt;

///
/// RecordModel
///

#[derive(Debug)]
pub struct RecordModel {
    /// Fully-qualified Rust type path; unique per record type.
    pub path: &'static str,
    /// Ordered field list; positions are the steps of an `IndexPath`.
    pub fields: &'static [FieldModel],
}

impl RecordModel {
    #[must_use]
    pub const fn new(path: &'static str, fields: &'static [FieldModel]) -> Self {
        Self { path, fields }
    }

    /// Field declared with `ident`, with its position.
    #[must_use]
    pub fn field(&self, ident: &str) -> Option<(usize, &'static FieldModel)> {
        self.fields.iter().enumerate().find(|(_, f)| f.ident == ident)
    }
}

///
/// FieldModel
///

#[derive(Debug)]
pub struct FieldModel {
    /// Declared identifier; input to the name resolver.
    pub ident: &'static str,
    /// Raw tag text. For embedded fields this is the embedding site's
    /// override scope.
    pub tag: &'static str,
    pub kind: FieldKind,
}

impl FieldModel {
    #[must_use]
    pub const fn value(ident: &'static str, tag: &'static str) -> Self {
        Self {
            ident,
            tag,
            kind: FieldKind::Value,
        }
    }

    #[must_use]
    pub const fn embedded(ident: &'static str, tag: &'static str, model: &'static RecordModel) -> Self {
        Self {
            ident,
            tag,
            kind: FieldKind::Embedded(model),
        }
    }
}

///
/// FieldKind
///

#[derive(Clone, Copy)]
pub enum FieldKind {
    /// Leaf value, including records that are stored but not flattened.
    Value,
    /// Anonymous sub-record whose fields are promoted into the parent.
    Embedded(&'static RecordModel),
}

// Embedded models print by path only, so cyclic models still format.
impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value => f.write_str("Value"),
            Self::Embedded(model) => f.debug_tuple("Embedded").field(&model.path).finish(),
        }
    }
}
