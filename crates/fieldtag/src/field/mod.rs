//! Module: field
//! Responsibility: one field's external name, ignore status, marshal
//! options, and attribute map.
//! Does not own: overrides from enclosing records (see `overlay`).
//!
//! Name precedence, highest first:
//! 1. a non-blank explicit name attribute (beats an ignore request),
//! 2. the marshaling attribute (`-` ignores, `-,` names the field `-`),
//! 3. the identifier run through the name resolver.


use crate::{config::TagConfig, name::resolve_name_with, tag::TagMap};
use serde::{Deserialize, Serialize};

/// Marshal attribute value that requests the field be skipped.
pub const IGNORE_SENTINEL: &str = "-";

///
/// FieldInfo
///
/// Resolved descriptor for one field.
/// `name` is empty only when the field is ignored.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldInfo {
    /// Identifier as declared on the record.
    pub field_name: String,

    /// Resolved external name; empty when ignored.
    pub name: String,

    /// Resolver output for `field_name`, kept for fallback consumers.
    pub default_name: String,

    pub ignore: bool,

    pub options: MarshalOptions,

    /// Every attribute from the tag text, verbatim.
    pub tags: TagMap,
}

impl FieldInfo {
    /// Parse with the default configuration.
    #[must_use]
    pub fn parse(ident: &str, tag: &str) -> Self {
        Self::parse_with(ident, tag, &TagConfig::default())
    }

    #[must_use]
    pub fn parse_with(ident: &str, tag: &str, config: &TagConfig) -> Self {
        Self::from_tags(ident, TagMap::parse(tag), config)
    }

    /// Resolve a descriptor from an already-parsed attribute map.
    #[must_use]
    pub fn from_tags(ident: &str, tags: TagMap, config: &TagConfig) -> Self {
        let mut info = Self {
            field_name: ident.to_string(),
            name: String::new(),
            default_name: resolve_name_with(ident, config.name_case),
            ignore: false,
            options: MarshalOptions::default(),
            tags,
        };
        info.resolve(config);

        info
    }

    /// Name used by consumers: the resolved name, or the default name for
    /// ignored fields.
    #[must_use]
    pub fn marshal_name(&self) -> &str {
        if self.name.is_empty() {
            &self.default_name
        } else {
            &self.name
        }
    }

    /// Recompute name, ignore status, and options from `self.tags`.
    pub(crate) fn resolve(&mut self, config: &TagConfig) {
        self.name.clear();
        self.ignore = false;
        self.options = MarshalOptions::default();

        // Phase 1: marshaling attribute.
        if let Some(value) = self.tags.get(&config.marshal_key) {
            let mut parts = value.split(',');
            let head = parts.next().unwrap_or_default();
            let has_flags = value.contains(',');

            if head == IGNORE_SENTINEL && !has_flags {
                self.ignore = true;
            } else {
                self.name = head.to_string();
            }
            for flag in parts {
                self.options.apply_flag(flag);
            }
        }

        // Phase 2: explicit name beats everything, including ignore.
        if let Some(explicit) = self.tags.get(&config.name_key).map(str::trim)
            && !explicit.is_empty()
        {
            self.name = explicit.to_string();
            self.ignore = false;
        }

        // Phase 3: fall back to the resolver.
        if !self.ignore && self.name.is_empty() {
            self.name.clone_from(&self.default_name);
        }
    }
}

///
/// MarshalOptions
///
/// Flags that follow the name in the marshaling attribute
/// (`json:"name,omitzero,string"`).
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct MarshalOptions {
    pub omit_empty: bool,
    pub omit_zero: bool,
    pub omit_false: bool,
    pub force_string: bool,
}

impl MarshalOptions {
    fn apply_flag(&mut self, flag: &str) {
        match flag.trim().to_ascii_lowercase().as_str() {
            "omitempty" => self.omit_empty = true,
            "allowempty" => self.omit_empty = false,
            "omitzero" => self.omit_zero = true,
            "allowzero" => self.omit_zero = false,
            "omitfalse" => self.omit_false = true,
            "allowfalse" => self.omit_false = false,
            "string" => self.force_string = true,
            _ => {}
        }
    }
}

impl Default for MarshalOptions {
    fn default() -> Self {
        Self {
            omit_empty: true,
            omit_zero: false,
            omit_false: false,
            force_string: false,
        }
    }
}
