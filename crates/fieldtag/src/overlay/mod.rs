//! Module: overlay
//! Responsibility: attribute overrides declared where a record is embedded.
//! Does not own: walking record shapes (see `set`).
//!
//! Invariants:
//! - Within one scope, uniform overrides apply before targeted ones.
//! - Scopes apply innermost first, so the outermost record has final say.
//! - After every scope the descriptor is re-resolved from its merged tags.

#[cfg(test)]
mod tests;

use crate::{config::TagConfig, field::FieldInfo, tag::TagMap};

/// Separator between the target field name and the attribute key in a
/// targeted override (`"status->default":"online"`).
pub const TARGET_ARROW: &str = "->";

///
/// TagScope
///
/// Overrides carried by one embedding site.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TagScope {
    uniform: Vec<(String, String)>,
    targeted: Vec<TargetedOverride>,
}

///
/// TargetedOverride
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TargetedOverride {
    pub target: String,
    pub key: String,
    pub value: String,
}

impl TagScope {
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        Self::from_tags(TagMap::parse(tag))
    }

    /// Split an embedding site's attributes into uniform and targeted
    /// overrides. Keys without a usable arrow stay uniform.
    #[must_use]
    pub fn from_tags(tags: TagMap) -> Self {
        let mut scope = Self::default();

        for (key, value) in tags {
            match key.split_once(TARGET_ARROW) {
                Some((target, attr)) if !target.is_empty() && !attr.is_empty() => {
                    scope.targeted.push(TargetedOverride {
                        target: target.to_string(),
                        key: attr.to_string(),
                        value,
                    });
                }
                _ => scope.uniform.push((key, value)),
            }
        }

        scope
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.uniform.is_empty() && self.targeted.is_empty()
    }

    #[must_use]
    pub fn uniform(&self) -> &[(String, String)] {
        &self.uniform
    }

    #[must_use]
    pub fn targeted(&self) -> &[TargetedOverride] {
        &self.targeted
    }

    /// Apply this scope to one field of the embedded record.
    pub fn apply(&self, info: &mut FieldInfo, config: &TagConfig) {
        if self.is_empty() {
            return;
        }

        for (key, value) in &self.uniform {
            info.tags.insert(key.as_str(), value.as_str());
        }
        info.resolve(config);

        let target = info.marshal_name().to_string();
        let mut hit = false;
        for over in self.targeted.iter().filter(|o| o.target == target) {
            info.tags.insert(over.key.as_str(), over.value.as_str());
            hit = true;
        }
        if hit {
            info.resolve(config);
        }
    }
}

/// Merge scopes into a copy of `base`, innermost scope first.
#[must_use]
pub fn merge<'a, I>(base: &FieldInfo, scopes: I, config: &TagConfig) -> FieldInfo
where
    I: IntoIterator<Item = &'a TagScope>,
{
    let mut info = base.clone();
    for scope in scopes {
        scope.apply(&mut info, config);
    }

    info
}
