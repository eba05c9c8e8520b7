// impl_field
/// Implement `Field` for leaf value types (no navigable sub-fields).
#[macro_export]
macro_rules! impl_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::traits::Field for $ty {
                fn as_any(&self) -> &dyn ::std::any::Any {
                    self
                }

                fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                    self
                }
            }
        )*
    };
}
