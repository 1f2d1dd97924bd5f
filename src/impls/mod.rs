//! Built-in [`Mappable`](crate::Mappable) implementations.

mod chrono;
mod collections;
mod primitives;

/// Implements [`Mappable`](crate::Mappable) and [`Typed`](crate::Typed) for
/// a type the engine treats as an indivisible value.
///
/// Opaque values are cloned when source and destination types match and are
/// otherwise only reachable through transformers or scanners.
///
/// ```rust,ignore
/// #[derive(Debug, Clone, Default)]
/// pub struct Money(rust_decimal::Decimal);
///
/// structmapper::impl_mappable_opaque!(Money);
/// ```
#[macro_export]
macro_rules! impl_mappable_opaque {
    ($type:ty) => {
        impl $crate::Mappable for $type {
            fn reflect_type(&self) -> $crate::TypeInfo {
                <$type as $crate::Typed>::type_info()
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn ::std::any::Any> {
                self
            }

            fn reflect_ref(&self) -> $crate::ReflectRef<'_> {
                $crate::ReflectRef::Opaque
            }

            fn reflect_mut(&mut self) -> $crate::ReflectMut<'_> {
                $crate::ReflectMut::Value
            }

            fn indirect_mut(&mut self) -> &mut dyn $crate::Mappable {
                self
            }

            fn clone_boxed(&self) -> ::std::boxed::Box<dyn $crate::Mappable> {
                ::std::boxed::Box::new(::std::clone::Clone::clone(self))
            }

            fn assign(
                &mut self,
                value: ::std::boxed::Box<dyn $crate::Mappable>,
            ) -> $crate::MapResult<()> {
                $crate::assign(self, value)
            }
        }

        impl $crate::Typed for $type {
            fn type_info() -> $crate::TypeInfo {
                $crate::TypeInfo::new::<$type>($crate::TypeKind::Opaque)
            }
        }
    };
}
