//! Module: set
//! Responsibility: flattening records into field entries and binding those
//! entries to a live value.
//! Does not own: name resolution (`field`) or override rules (`overlay`).
//! Boundary: `build` / `build_mut` are the only ways to obtain a field set.
//!
//! Invariants:
//! - Entries appear depth-first in declaration order.
//! - Every leaf appears exactly once; its `IndexPath` is unique.
//! - Values are reached by navigating the borrowed record, never copied.

mod layout;
mod path;


pub use layout::{FieldEntry, FieldLayout};
pub use path::IndexPath;

use crate::{
    config::TagConfig,
    error::FieldSetError,
    traits::{Field, Record},
};
use std::{any::type_name, sync::Arc};

/// Build a read-only field set over `value` with the default configuration.
pub fn build(value: &dyn Field) -> Result<FieldSet<'_>, FieldSetError> {
    build_with(value, &TagConfig::default())
}

pub fn build_with<'a>(
    value: &'a dyn Field,
    config: &TagConfig,
) -> Result<FieldSet<'a>, FieldSetError> {
    let record = as_record(value)?;
    let layout = FieldLayout::build_with(record.model(), config)?;

    Ok(FieldSet::new(record, Arc::new(layout)))
}

/// Build a writable field set over `value` with the default configuration.
pub fn build_mut(value: &mut dyn Field) -> Result<FieldSetMut<'_>, FieldSetError> {
    build_mut_with(value, &TagConfig::default())
}

pub fn build_mut_with<'a>(
    value: &'a mut dyn Field,
    config: &TagConfig,
) -> Result<FieldSetMut<'a>, FieldSetError> {
    let record = as_record_mut(value)?;
    let layout = FieldLayout::build_with(record.model(), config)?;

    Ok(FieldSetMut::new(record, Arc::new(layout)))
}

pub(crate) fn as_record(value: &dyn Field) -> Result<&dyn Record, FieldSetError> {
    let type_name = value.type_name();

    value
        .as_record()
        .ok_or(FieldSetError::InvalidShape { type_name })
}

pub(crate) fn as_record_mut(value: &mut dyn Field) -> Result<&mut dyn Record, FieldSetError> {
    let type_name = value.type_name();

    value
        .as_record_mut()
        .ok_or(FieldSetError::InvalidShape { type_name })
}

// Walk all but the last step through nested records.
fn navigate<'r>(record: &'r dyn Record, path: &IndexPath) -> Option<&'r dyn Field> {
    let (last, parents) = path.split_last()?;
    let mut current = record;
    for &step in parents {
        current = current.field(step)?.as_record()?;
    }

    current.field(*last)
}

fn navigate_mut<'r>(record: &'r mut dyn Record, path: &IndexPath) -> Option<&'r mut dyn Field> {
    let (last, parents) = path.split_last()?;
    let mut current = record;
    for &step in parents {
        current = current.field_mut(step)?.as_record_mut()?;
    }

    current.field_mut(*last)
}

///
/// FieldSet
///
/// Layout bound to a borrowed record for reading.
///

pub struct FieldSet<'a> {
    record: &'a dyn Record,
    layout: Arc<FieldLayout>,
}

impl<'a> FieldSet<'a> {
    pub(crate) fn new(record: &'a dyn Record, layout: Arc<FieldLayout>) -> Self {
        Self { record, layout }
    }

    #[must_use]
    pub fn layout(&self) -> &FieldLayout {
        &self.layout
    }

    /// Visible fields with their current values.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldEntry, &'a dyn Field)> + '_ {
        let record = self.record;

        self.layout
            .iter()
            .filter_map(move |entry| Some((entry, navigate(record, &entry.path)?)))
    }

    /// Every field, ignored ones included.
    pub fn iter_all(&self) -> impl Iterator<Item = (&FieldEntry, &'a dyn Field)> + '_ {
        let record = self.record;

        self.layout
            .iter_all()
            .filter_map(move |entry| Some((entry, navigate(record, &entry.path)?)))
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Vec<&IndexPath> {
        self.layout.lookup(name)
    }

    #[must_use]
    pub fn get(&self, path: &IndexPath) -> Option<&'a dyn Field> {
        navigate(self.record, path)
    }

    #[must_use]
    pub fn get_as<T: Field>(&self, path: &IndexPath) -> Option<&'a T> {
        self.get(path)?.as_any().downcast_ref()
    }

    /// Value of the only visible field named `name`.
    pub fn value(&self, name: &str) -> Result<&'a dyn Field, FieldSetError> {
        let entry = self.layout.unique(name)?;

        self.get(&entry.path).ok_or_else(|| unknown(name))
    }

    /// Values of every visible field named `name`, in declaration order.
    #[must_use]
    pub fn values(&self, name: &str) -> Vec<&'a dyn Field> {
        self.lookup(name)
            .into_iter()
            .filter_map(|path| self.get(path))
            .collect()
    }

    pub fn value_as<T: Field>(&self, name: &str) -> Result<&'a T, FieldSetError> {
        let entry = self.layout.unique(name)?;
        let value = self.get(&entry.path).ok_or_else(|| unknown(name))?;

        value
            .as_any()
            .downcast_ref::<T>()
            .ok_or_else(|| mismatch::<T>(&entry.path, value.type_name()))
    }
}

///
/// FieldSetMut
///
/// Layout bound to a mutably borrowed record. Writes land in the record.
///

pub struct FieldSetMut<'a> {
    record: &'a mut dyn Record,
    layout: Arc<FieldLayout>,
}

impl<'a> FieldSetMut<'a> {
    pub(crate) fn new(record: &'a mut dyn Record, layout: Arc<FieldLayout>) -> Self {
        Self { record, layout }
    }

    #[must_use]
    pub fn layout(&self) -> &FieldLayout {
        &self.layout
    }

    /// Read-only view over the same record.
    #[must_use]
    pub fn as_set(&self) -> FieldSet<'_> {
        FieldSet::new(&*self.record, Arc::clone(&self.layout))
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Vec<&IndexPath> {
        self.layout.lookup(name)
    }

    #[must_use]
    pub fn get(&self, path: &IndexPath) -> Option<&dyn Field> {
        navigate(&*self.record, path)
    }

    pub fn get_mut(&mut self, path: &IndexPath) -> Option<&mut dyn Field> {
        navigate_mut(&mut *self.record, path)
    }

    pub fn get_mut_as<T: Field>(&mut self, path: &IndexPath) -> Option<&mut T> {
        self.get_mut(path)?.as_any_mut().downcast_mut()
    }

    pub fn value_mut(&mut self, name: &str) -> Result<&mut dyn Field, FieldSetError> {
        let path = self.layout.unique(name)?.path.clone();

        self.get_mut(&path).ok_or_else(|| unknown(name))
    }

    pub fn value_mut_as<T: Field>(&mut self, name: &str) -> Result<&mut T, FieldSetError> {
        let path = self.layout.unique(name)?.path.clone();
        let slot = self.get_mut(&path).ok_or_else(|| unknown(name))?;
        let actual = slot.type_name();

        slot.as_any_mut()
            .downcast_mut::<T>()
            .ok_or_else(|| mismatch::<T>(&path, actual))
    }

    /// Replace the value of the only visible field named `name`.
    pub fn set<T: Field>(&mut self, name: &str, value: T) -> Result<(), FieldSetError> {
        *self.value_mut_as::<T>(name)? = value;

        Ok(())
    }
}

fn unknown(name: &str) -> FieldSetError {
    FieldSetError::UnknownField {
        name: name.to_string(),
    }
}

fn mismatch<T: Field>(path: &IndexPath, actual: &'static str) -> FieldSetError {
    FieldSetError::TypeMismatch {
        path: path.to_string(),
        expected: type_name::<T>(),
        actual,
    }
}
