//! Module: cache
//! Responsibility: sharing built layouts across calls and threads.
//! Does not own: layout construction (see `set`).
//!
//! Invariants:
//! - Keyed by `RecordModel::path`; one layout per record type per cache.
//! - A stored layout is never mutated. Concurrent misses on the same key
//!   each build a layout and the last insert wins; the layouts are equal.

#[cfg(test)]
mod tests;

use crate::{
    config::TagConfig,
    error::FieldSetError,
    model::RecordModel,
    set::{self, FieldLayout, FieldSet, FieldSetMut},
    traits::Field,
};
use dashmap::DashMap;
use std::sync::{Arc, LazyLock};

static GLOBAL: LazyLock<LayoutCache> = LazyLock::new(LayoutCache::default);

///
/// LayoutCache
///

#[derive(Debug, Default)]
pub struct LayoutCache {
    config: TagConfig,
    layouts: DashMap<&'static str, Arc<FieldLayout>>,
}

impl LayoutCache {
    #[must_use]
    pub fn new(config: TagConfig) -> Self {
        Self {
            config,
            layouts: DashMap::new(),
        }
    }

    /// Process-wide cache using the default configuration.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    #[must_use]
    pub const fn config(&self) -> &TagConfig {
        &self.config
    }

    pub fn layout(&self, model: &'static RecordModel) -> Result<Arc<FieldLayout>, FieldSetError> {
        if let Some(hit) = self.layouts.get(model.path) {
            tracing::trace!(record = model.path, "layout cache hit");
            return Ok(Arc::clone(hit.value()));
        }

        // Build without holding a shard lock.
        tracing::trace!(record = model.path, "layout cache miss");
        let layout = Arc::new(FieldLayout::build_with(model, &self.config)?);
        self.layouts.insert(model.path, Arc::clone(&layout));

        Ok(layout)
    }

    pub fn build<'a>(&self, value: &'a dyn Field) -> Result<FieldSet<'a>, FieldSetError> {
        let record = set::as_record(value)?;
        let layout = self.layout(record.model())?;

        Ok(FieldSet::new(record, layout))
    }

    pub fn build_mut<'a>(&self, value: &'a mut dyn Field) -> Result<FieldSetMut<'a>, FieldSetError> {
        let record = set::as_record_mut(value)?;
        let layout = self.layout(record.model())?;

        Ok(FieldSetMut::new(record, layout))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    pub fn clear(&self) {
        self.layouts.clear();
    }
}
