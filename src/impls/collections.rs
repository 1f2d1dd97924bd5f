use std::any::Any;

use crate::error::{MapError, MapResult};
use crate::traits::mappable::{
    Mappable, OptionAccess, ReflectMut, ReflectRef, SeqAccess, Typed, assign, downcast_boxed,
};
use crate::types::{TypeInfo, TypeKind};

impl<T: Typed> Mappable for Option<T> {
    fn reflect_type(&self) -> TypeInfo {
        <Self as Typed>::type_info()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Option(self.value())
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Option(self)
    }

    fn indirect_mut(&mut self) -> &mut dyn Mappable {
        self.get_or_insert_with(T::default).indirect_mut()
    }

    fn clone_boxed(&self) -> Box<dyn Mappable> {
        Box::new(self.clone())
    }

    fn assign(&mut self, value: Box<dyn Mappable>) -> MapResult<()> {
        assign(self, value)
    }
}

impl<T: Typed> OptionAccess for Option<T> {
    fn value(&self) -> Option<&dyn Mappable> {
        self.as_ref().map(|value| value as &dyn Mappable)
    }

    fn set_none(&mut self) {
        *self = None;
    }
}

impl<T: Typed> Typed for Option<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::new::<Self>(TypeKind::Option(T::type_info))
    }
}

impl<T: Typed> Mappable for Vec<T> {
    fn reflect_type(&self) -> TypeInfo {
        <Self as Typed>::type_info()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Seq(self)
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Seq(self)
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

impl<T: Typed> SeqAccess for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&dyn Mappable> {
        self.as_slice().get(index).map(|item| item as &dyn Mappable)
    }

    fn replace(&mut self, items: Vec<Box<dyn Mappable>>) -> MapResult<()> {
        *self = items
            .into_iter()
            .map(downcast_boxed::<T>)
            .collect::<MapResult<Vec<T>>>()?;
        Ok(())
    }
}

impl<T: Typed> Typed for Vec<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::new::<Self>(TypeKind::Seq(T::type_info))
    }
}

impl<T: Typed> Mappable for Box<[T]> {
    fn reflect_type(&self) -> TypeInfo {
        <Self as Typed>::type_info()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Seq(self)
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Seq(self)
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

impl<T: Typed> SeqAccess for Box<[T]> {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&dyn Mappable> {
        <[T]>::get(self, index).map(|item| item as &dyn Mappable)
    }

    fn replace(&mut self, items: Vec<Box<dyn Mappable>>) -> MapResult<()> {
        *self = items
            .into_iter()
            .map(downcast_boxed::<T>)
            .collect::<MapResult<Box<[T]>>>()?;
        Ok(())
    }
}

impl<T: Typed> Typed for Box<[T]> {
    fn type_info() -> TypeInfo {
        TypeInfo::new::<Self>(TypeKind::Seq(T::type_info))
    }
}

impl<T: Typed, const N: usize> Mappable for [T; N]
where
    [T; N]: Default,
{
    fn reflect_type(&self) -> TypeInfo {
        <Self as Typed>::type_info()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Seq(self)
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Seq(self)
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

/// Arrays keep their length: `replace` only accepts exactly `N` items.
impl<T: Typed, const N: usize> SeqAccess for [T; N]
where
    [T; N]: Default,
{
    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&dyn Mappable> {
        self.as_slice().get(index).map(|item| item as &dyn Mappable)
    }

    fn replace(&mut self, items: Vec<Box<dyn Mappable>>) -> MapResult<()> {
        if items.len() != N {
            return Err(MapError::LengthMismatch {
                expected: N,
                found: items.len(),
            });
        }
        let values = items
            .into_iter()
            .map(downcast_boxed::<T>)
            .collect::<MapResult<Vec<T>>>()?;
        for (slot, value) in self.iter_mut().zip(values) {
            *slot = value;
        }
        Ok(())
    }
}

impl<T: Typed, const N: usize> Typed for [T; N]
where
    [T; N]: Default,
{
    fn type_info() -> TypeInfo {
        TypeInfo::new::<Self>(TypeKind::Seq(T::type_info))
    }
}
