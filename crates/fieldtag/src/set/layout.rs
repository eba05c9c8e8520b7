use crate::{
    MAX_EMBED_DEPTH,
    config::TagConfig,
    error::FieldSetError,
    field::FieldInfo,
    model::{FieldKind, FieldModel, RecordModel},
    overlay::{TagScope, merge},
    set::IndexPath,
};
use serde::Serialize;

///
/// FieldEntry
///
/// One leaf of a flattened record: where it lives and what it resolved to.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FieldEntry {
    pub path: IndexPath,
    pub info: FieldInfo,
}

impl FieldEntry {
    #[must_use]
    pub fn marshal_name(&self) -> &str {
        self.info.marshal_name()
    }

    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        self.info.ignore
    }
}

///
/// FieldLayout
///
/// Flattened, override-resolved field list of one record type.
/// Depends only on the shape, never on a value, so it can be shared.
///

#[derive(Debug, Serialize)]
pub struct FieldLayout {
    #[serde(rename = "record")]
    #[serde(serialize_with = "serialize_model_path")]
    model: &'static RecordModel,
    entries: Vec<FieldEntry>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_model_path<S: serde::Serializer>(
    model: &&'static RecordModel,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(model.path)
}

impl FieldLayout {
    pub fn build(model: &'static RecordModel) -> Result<Self, FieldSetError> {
        Self::build_with(model, &TagConfig::default())
    }

    pub fn build_with(model: &'static RecordModel, config: &TagConfig) -> Result<Self, FieldSetError> {
        let mut walker = Walker {
            config,
            path: IndexPath::new(),
            scopes: Vec::new(),
            entries: Vec::new(),
        };
        walker.walk(model)?;

        tracing::trace!(
            record = model.path,
            entries = walker.entries.len(),
            "built field layout"
        );

        Ok(Self {
            model,
            entries: walker.entries,
        })
    }

    #[must_use]
    pub const fn model(&self) -> &'static RecordModel {
        self.model
    }

    /// Every entry, ignored ones included, in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[FieldEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Visible entries: ignored fields are skipped.
    pub fn iter(&self) -> impl Iterator<Item = &FieldEntry> {
        self.entries.iter().filter(|e| !e.is_ignored())
    }

    /// All entries including ignored ones.
    pub fn iter_all(&self) -> impl Iterator<Item = &FieldEntry> {
        self.entries.iter()
    }

    /// Paths of every visible field named `name`, in declaration order.
    /// More than one path means the name is ambiguous; callers decide.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Vec<&IndexPath> {
        self.iter()
            .filter(|e| e.marshal_name() == name)
            .map(|e| &e.path)
            .collect()
    }

    /// Like `lookup`, but ignored fields match by their default name too.
    #[must_use]
    pub fn lookup_all(&self, name: &str) -> Vec<&IndexPath> {
        self.iter_all()
            .filter(|e| e.marshal_name() == name)
            .map(|e| &e.path)
            .collect()
    }

    /// First visible field named `name`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&FieldEntry> {
        self.iter().find(|e| e.marshal_name() == name)
    }

    /// The only visible field named `name`. Several matches are an error
    /// carrying every path, never a silent pick.
    pub fn unique(&self, name: &str) -> Result<&FieldEntry, FieldSetError> {
        let found: Vec<&FieldEntry> = self.iter().filter(|e| e.marshal_name() == name).collect();

        match found.as_slice() {
            [] => Err(FieldSetError::UnknownField {
                name: name.to_string(),
            }),
            [entry] => Ok(*entry),
            many => Err(FieldSetError::AmbiguousField {
                name: name.to_string(),
                paths: many.iter().map(|e| e.path.clone()).collect(),
            }),
        }
    }

    #[must_use]
    pub fn entry(&self, path: &IndexPath) -> Option<&FieldEntry> {
        self.entries.iter().find(|e| &e.path == path)
    }
}

///
/// Walker
///
/// Depth-first walk over a model. `scopes` holds one override scope per
/// embedding level, outermost at the bottom.
///

struct Walker<'c> {
    config: &'c TagConfig,
    path: IndexPath,
    scopes: Vec<TagScope>,
    entries: Vec<FieldEntry>,
}

impl Walker<'_> {
    fn walk(&mut self, model: &'static RecordModel) -> Result<(), FieldSetError> {
        if self.scopes.len() > MAX_EMBED_DEPTH {
            return Err(FieldSetError::EmbeddingTooDeep { record: model.path });
        }

        for (index, field) in model.fields.iter().enumerate() {
            self.path.push(index);

            let info = self.resolve(field);
            match field.kind {
                FieldKind::Embedded(inner) if !info.ignore => {
                    self.scopes.push(TagScope::parse(field.tag));
                    let res = self.walk(inner);
                    self.scopes.pop();
                    res?;
                }
                _ => self.entries.push(FieldEntry {
                    path: self.path.clone(),
                    info,
                }),
            }

            self.path.pop();
        }

        Ok(())
    }

    // Own tag first, then the active scopes innermost first. An embedding
    // site that resolves to ignored is kept whole as one leaf.
    fn resolve(&self, field: &FieldModel) -> FieldInfo {
        let base = FieldInfo::parse_with(field.ident, field.tag, self.config);

        merge(&base, self.scopes.iter().rev(), self.config)
    }
}
