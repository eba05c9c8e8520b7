use crate::model::RecordModel;
use std::{any::Any, collections::BTreeMap};

///
/// Field
///
/// Anything that can sit in a record field. Leaf values only need the
/// `Any` accessors; records also expose themselves through `as_record`.
///

pub trait Field: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn as_record(&self) -> Option<&dyn Record> {
        None
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        None
    }

    /// Concrete type name, for diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

///
/// Record
///
/// Positional access to a record's fields, in `model()` order.
/// Implementations must return `Some` for every index below
/// `model().fields.len()`.
///

pub trait Record: Field {
    fn model(&self) -> &'static RecordModel;
    fn field(&self, index: usize) -> Option<&dyn Field>;
    fn field_mut(&mut self, index: usize) -> Option<&mut dyn Field>;
}

///
/// RecordSchema
///
/// Compile-time shape of a record type. Embedding sites refer to the
/// embedded type's `MODEL`.
///

pub trait RecordSchema: Record + Sized {
    const MODEL: &'static RecordModel;
}

impl_field!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String, (),
);

impl<T: Field> Field for Option<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl<T: Field> Field for Vec<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl<T: Field> Field for BTreeMap<String, T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl<T: Field> Field for Box<T> {
    fn as_any(&self) -> &dyn Any {
        self.as_ref().as_any()
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self.as_mut().as_any_mut()
    }

    fn as_record(&self) -> Option<&dyn Record> {
        self.as_ref().as_record()
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        self.as_mut().as_record_mut()
    }

    fn type_name(&self) -> &'static str {
        self.as_ref().type_name()
    }
}
