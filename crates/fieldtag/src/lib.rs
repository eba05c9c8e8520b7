//! Tag-driven field metadata for structured records: external names,
//! resolved attribute sets, and flattened views over embedded sub-records.
#![warn(unreachable_pub)]

extern crate self as fieldtag;

#[macro_use]
mod macros;

// public exports are one module level down
pub mod cache;
pub mod config;
pub mod error;
pub mod field;
pub mod model;
pub mod name;
pub mod overlay;
pub mod set;
pub mod tag;
pub mod traits;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use fieldtag_derive::Record;

pub use set::{build, build_mut};
pub use traits::{Field, Record, RecordSchema};

///
/// CONSTANTS
///

/// Maximum nesting of embedded records below the root record.
///
/// Derived models cannot exceed this in practice; the limit exists for
/// hand-built models that accidentally embed themselves.
pub const MAX_EMBED_DEPTH: usize = 32;

///
/// Prelude
///
/// Domain vocabulary plus the derive macro.
///

pub mod prelude {
    pub use crate::{
        Field, Record, RecordSchema,
        config::{NameCase, TagConfig},
        field::FieldInfo,
        model::{FieldKind, FieldModel, RecordModel},
        set::{FieldEntry, FieldLayout, FieldSet, FieldSetMut, IndexPath},
        tag::TagMap,
    };
}
