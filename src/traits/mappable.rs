//! Object-safe access to values whose shape is only known at runtime.
//!
//! `#[derive(Mappable)]` implements these traits for user structs, newtypes and
//! enums; the crate implements them for primitives, `String`, `Option<T>`,
//! `Vec<T>`, `Box<[T]>`, `[T; N]` and `chrono::DateTime<Utc>`.

use std::any::Any;
use std::fmt;

use crate::error::{BoxError, MapError, MapResult};
use crate::types::{Scalar, TypeInfo};

/// A value the mapper can inspect, clone and overwrite.
pub trait Mappable: Any + Send + Sync + 'static {
    /// Descriptor of the concrete type behind this value.
    fn reflect_type(&self) -> TypeInfo;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn reflect_ref(&self) -> ReflectRef<'_>;

    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Follows `Option` layers down to the first non-optional value,
    /// allocating `Default` values for every `None` on the way.
    fn indirect_mut(&mut self) -> &mut dyn Mappable;

    fn clone_boxed(&self) -> Box<dyn Mappable>;

    /// Replaces `self` with `value`, which must be of the same concrete type.
    fn assign(&mut self, value: Box<dyn Mappable>) -> MapResult<()>;
}

/// Static half of [`Mappable`]: the descriptor is available without a value.
pub trait Typed: Mappable + Default + Clone {
    fn type_info() -> TypeInfo;
}

/// Destination-side ingestion from an arbitrary source value.
///
/// Types opt in with `#[structmapper(scan)]`; the engine consults the scanner
/// only when no transformer and no implicit conversion apply.
pub trait Scan {
    fn scan(&mut self, source: &dyn Mappable) -> Result<(), BoxError>;
}

/// Read view of a value.
pub enum ReflectRef<'a> {
    Scalar(Scalar<'a>),
    Struct(&'a dyn StructAccess),
    Newtype(&'a dyn Mappable),
    Option(Option<&'a dyn Mappable>),
    Seq(&'a dyn SeqAccess),
    Opaque,
}

/// Write view of a value. Scalars and opaque values can only be replaced
/// as a whole through [`Mappable::assign`].
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn StructAccess),
    Newtype(&'a mut dyn Mappable),
    Option(&'a mut dyn OptionAccess),
    Seq(&'a mut dyn SeqAccess),
    Value,
}

/// Index-based field access, indices follow declaration order.
pub trait StructAccess {
    fn field(&self, index: usize) -> Option<&dyn Mappable>;

    fn field_mut(&mut self, index: usize) -> Option<&mut dyn Mappable>;
}

pub trait SeqAccess {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Option<&dyn Mappable>;

    /// Replaces the whole sequence with `items`, preserving their order.
    fn replace(&mut self, items: Vec<Box<dyn Mappable>>) -> MapResult<()>;
}

pub trait OptionAccess {
    fn value(&self) -> Option<&dyn Mappable>;

    fn set_none(&mut self);
}

impl dyn Mappable {
    pub fn is<T: Mappable>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Mappable>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn type_name(&self) -> &'static str {
        self.reflect_type().name()
    }
}

impl fmt::Debug for dyn Mappable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mappable({})", self.type_name())
    }
}

/// Unboxes `value` as a `T`.
pub fn downcast_boxed<T: Mappable>(value: Box<dyn Mappable>) -> MapResult<T> {
    let found = value.type_name();
    value
        .into_any()
        .downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| MapError::TypeMismatch {
            expected: std::any::type_name::<T>(),
            found,
        })
}

/// Shared body of [`Mappable::assign`].
pub fn assign<T: Mappable>(slot: &mut T, value: Box<dyn Mappable>) -> MapResult<()> {
    *slot = downcast_boxed(value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_checks_the_concrete_type() {
        let mut slot = 1i32;
        assign(&mut slot, Box::new(7i32)).unwrap();
        assert_eq!(slot, 7);

        let err = assign(&mut slot, Box::new(String::from("7"))).unwrap_err();
        assert!(matches!(
            err,
            MapError::TypeMismatch { expected: "i32", found: "alloc::string::String" }
        ));
        assert_eq!(slot, 7);
    }

    #[test]
    fn indirect_mut_allocates_through_options() {
        let mut value: Option<Option<u16>> = None;
        let inner = value.indirect_mut();
        inner.assign(Box::new(9u16)).unwrap();
        assert_eq!(value, Some(Some(9)));
    }

    #[test]
    fn dyn_downcasting() {
        let value: Box<dyn Mappable> = Box::new(String::from("abc"));
        assert!(value.is::<String>());
        assert!(!value.is::<i32>());
        assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("abc"));
        assert_eq!(format!("{:?}", value), "Mappable(alloc::string::String)");
    }
}
