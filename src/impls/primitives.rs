use std::any::Any;

use crate::error::MapResult;
use crate::traits::mappable::{Mappable, ReflectMut, ReflectRef, Typed, assign};
use crate::types::{Scalar, ScalarKind, TypeInfo, TypeKind};

macro_rules! impl_mappable_scalar {
    ($type:ty, $kind:ident) => {
        impl Mappable for $type {
            fn reflect_type(&self) -> TypeInfo {
                <$type as Typed>::type_info()
            }

            fn as_any(&self) -> &dyn Any {
                self
            }

            fn into_any(self: Box<Self>) -> Box<dyn Any> {
                self
            }

            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Scalar(Scalar::$kind(*self))
            }

            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Value
            }

            fn indirect_mut(&mut self) -> &mut dyn Mappable {
                self
            }

            fn clone_boxed(&self) -> Box<dyn Mappable> {
                Box::new(*self)
            }

            fn assign(&mut self, value: Box<dyn Mappable>) -> MapResult<()> {
                assign(self, value)
            }
        }

        impl Typed for $type {
            fn type_info() -> TypeInfo {
                TypeInfo::new::<$type>(TypeKind::Scalar(ScalarKind::$kind))
            }
        }
    };
}

impl_mappable_scalar!(bool, Bool);
impl_mappable_scalar!(i8, I8);
impl_mappable_scalar!(i16, I16);
impl_mappable_scalar!(i32, I32);
impl_mappable_scalar!(i64, I64);
impl_mappable_scalar!(i128, I128);
impl_mappable_scalar!(isize, Isize);
impl_mappable_scalar!(u8, U8);
impl_mappable_scalar!(u16, U16);
impl_mappable_scalar!(u32, U32);
impl_mappable_scalar!(u64, U64);
impl_mappable_scalar!(u128, U128);
impl_mappable_scalar!(usize, Usize);
impl_mappable_scalar!(f32, F32);
impl_mappable_scalar!(f64, F64);
impl_mappable_scalar!(char, Char);

impl Mappable for String {
    fn reflect_type(&self) -> TypeInfo {
        <String as Typed>::type_info()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Scalar(Scalar::String(self.as_str()))
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Value
    }

    fn indirect_mut(&mut self) -> &mut dyn Mappable {
        self
    }

    fn clone_boxed(&self) -> Box<dyn Mappable> {
        Box::new(self.clone())
    }

    fn assign(&mut self, value: Box<dyn Mappable>) -> MapResult<()> {
        assign(self, value)
    }
}

impl Typed for String {
    fn type_info() -> TypeInfo {
        TypeInfo::new::<String>(TypeKind::Scalar(ScalarKind::String))
    }
}
