//! Scalar views used by the built-in convertibility rule and by modules that
//! need to read or write primitive values through newtypes.

use std::fmt;

use crate::error::{MapError, MapResult};
use crate::traits::mappable::{Mappable, ReflectMut, ReflectRef};
use crate::types::type_info::{TypeInfo, TypeKind};

/// Primitive kinds understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    Char,
    String,
}

impl ScalarKind {
    pub fn is_signed_integer(self) -> bool {
        matches!(
            self,
            ScalarKind::I8
                | ScalarKind::I16
                | ScalarKind::I32
                | ScalarKind::I64
                | ScalarKind::I128
                | ScalarKind::Isize
        )
    }

    pub fn is_unsigned_integer(self) -> bool {
        matches!(
            self,
            ScalarKind::U8
                | ScalarKind::U16
                | ScalarKind::U32
                | ScalarKind::U64
                | ScalarKind::U128
                | ScalarKind::Usize
        )
    }

    pub fn is_integer(self) -> bool {
        self.is_signed_integer() || self.is_unsigned_integer()
    }

    pub fn is_float(self) -> bool {
        matches!(self, ScalarKind::F32 | ScalarKind::F64)
    }

    pub fn is_numeric(self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// Fixed bit width; `None` for the pointer-sized integers.
    fn bits(self) -> Option<u32> {
        match self {
            ScalarKind::I8 | ScalarKind::U8 => Some(8),
            ScalarKind::I16 | ScalarKind::U16 => Some(16),
            ScalarKind::I32 | ScalarKind::U32 | ScalarKind::F32 | ScalarKind::Char => Some(32),
            ScalarKind::I64 | ScalarKind::U64 | ScalarKind::F64 => Some(64),
            ScalarKind::I128 | ScalarKind::U128 => Some(128),
            _ => None,
        }
    }

    /// Whether every value of `self` is representable as `to`.
    ///
    /// This is a property of the types alone and is what makes a pair
    /// implicitly convertible. Pointer-sized integers only accept 8 and 16 bit
    /// sources, mirroring the `From` impls of the standard library.
    pub fn widens_to(self, to: ScalarKind) -> bool {
        use ScalarKind::*;

        if self == to {
            return true;
        }
        match (self, to) {
            (Char, String) | (U8, Char) => true,
            (Char, U32 | U64 | U128) => true,
            (I8 | I16 | U8, Isize) | (U8 | U16, Usize) => true,
            (Isize | Usize, _) | (_, Isize | Usize) => false,
            (from, F32) if from.is_integer() => from.bits().is_some_and(|b| b <= 16),
            (from, F64) if from.is_integer() => from.bits().is_some_and(|b| b <= 32),
            (F32, F64) => true,
            (from, to) if from.is_signed_integer() && to.is_signed_integer() => {
                from.bits() <= to.bits()
            }
            (from, to) if from.is_unsigned_integer() && to.is_unsigned_integer() => {
                from.bits() <= to.bits()
            }
            (from, to) if from.is_unsigned_integer() && to.is_signed_integer() => {
                from.bits() < to.bits()
            }
            _ => false,
        }
    }
}

/// A borrowed primitive value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
    Char(char),
    String(&'a str),
}

impl Scalar<'_> {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Bool(_) => ScalarKind::Bool,
            Scalar::I8(_) => ScalarKind::I8,
            Scalar::I16(_) => ScalarKind::I16,
            Scalar::I32(_) => ScalarKind::I32,
            Scalar::I64(_) => ScalarKind::I64,
            Scalar::I128(_) => ScalarKind::I128,
            Scalar::Isize(_) => ScalarKind::Isize,
            Scalar::U8(_) => ScalarKind::U8,
            Scalar::U16(_) => ScalarKind::U16,
            Scalar::U32(_) => ScalarKind::U32,
            Scalar::U64(_) => ScalarKind::U64,
            Scalar::U128(_) => ScalarKind::U128,
            Scalar::Usize(_) => ScalarKind::Usize,
            Scalar::F32(_) => ScalarKind::F32,
            Scalar::F64(_) => ScalarKind::F64,
            Scalar::Char(_) => ScalarKind::Char,
            Scalar::String(_) => ScalarKind::String,
        }
    }

    fn as_i128(&self) -> Option<i128> {
        match *self {
            Scalar::I8(v) => Some(v.into()),
            Scalar::I16(v) => Some(v.into()),
            Scalar::I32(v) => Some(v.into()),
            Scalar::I64(v) => Some(v.into()),
            Scalar::I128(v) => Some(v),
            Scalar::Isize(v) => i128::try_from(v).ok(),
            Scalar::U8(v) => Some(v.into()),
            Scalar::U16(v) => Some(v.into()),
            Scalar::U32(v) => Some(v.into()),
            Scalar::U64(v) => Some(v.into()),
            Scalar::U128(v) => i128::try_from(v).ok(),
            Scalar::Usize(v) => i128::try_from(v).ok(),
            Scalar::Char(c) => Some(u32::from(c).into()),
            _ => None,
        }
    }

    /// Converts the value into an owned value of kind `to`, or `None` if the
    /// value does not fit or the kinds belong to unrelated families.
    pub fn cast(&self, to: ScalarKind) -> Option<Box<dyn Mappable>> {
        match (*self, to) {
            (Scalar::Bool(v), ScalarKind::Bool) => Some(Box::new(v)),
            (Scalar::String(s), ScalarKind::String) => Some(Box::new(s.to_owned())),
            (Scalar::Char(c), ScalarKind::String) => Some(Box::new(c.to_string())),
            (Scalar::Char(c), ScalarKind::Char) => Some(Box::new(c)),
            (Scalar::F32(v), ScalarKind::F32) => Some(Box::new(v)),
            (Scalar::F32(v), ScalarKind::F64) => Some(Box::new(f64::from(v))),
            (Scalar::F64(v), ScalarKind::F64) => Some(Box::new(v)),
            (Scalar::F64(v), ScalarKind::F32) => {
                if !v.is_finite() || v.abs() <= f64::from(f32::MAX) {
                    Some(Box::new(v as f32))
                } else {
                    None
                }
            }
            (Scalar::U128(v), ScalarKind::U128) => Some(Box::new(v)),
            (_, to) if to.is_integer() || to.is_float() || to == ScalarKind::Char => {
                if matches!(self, Scalar::Char(_)) && !to.is_unsigned_integer() {
                    return None;
                }
                self.as_i128().and_then(|v| cast_integer(v, to))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(v) => fmt::Display::fmt(v, f),
            Scalar::I8(v) => fmt::Display::fmt(v, f),
            Scalar::I16(v) => fmt::Display::fmt(v, f),
            Scalar::I32(v) => fmt::Display::fmt(v, f),
            Scalar::I64(v) => fmt::Display::fmt(v, f),
            Scalar::I128(v) => fmt::Display::fmt(v, f),
            Scalar::Isize(v) => fmt::Display::fmt(v, f),
            Scalar::U8(v) => fmt::Display::fmt(v, f),
            Scalar::U16(v) => fmt::Display::fmt(v, f),
            Scalar::U32(v) => fmt::Display::fmt(v, f),
            Scalar::U64(v) => fmt::Display::fmt(v, f),
            Scalar::U128(v) => fmt::Display::fmt(v, f),
            Scalar::Usize(v) => fmt::Display::fmt(v, f),
            Scalar::F32(v) => fmt::Display::fmt(v, f),
            Scalar::F64(v) => fmt::Display::fmt(v, f),
            Scalar::Char(v) => fmt::Display::fmt(v, f),
            Scalar::String(v) => fmt::Display::fmt(v, f),
        }
    }
}

fn cast_integer(v: i128, to: ScalarKind) -> Option<Box<dyn Mappable>> {
    fn boxed<T: Mappable>(value: T) -> Box<dyn Mappable> {
        Box::new(value)
    }

    match to {
        ScalarKind::I8 => i8::try_from(v).ok().map(boxed),
        ScalarKind::I16 => i16::try_from(v).ok().map(boxed),
        ScalarKind::I32 => i32::try_from(v).ok().map(boxed),
        ScalarKind::I64 => i64::try_from(v).ok().map(boxed),
        ScalarKind::I128 => Some(boxed(v)),
        ScalarKind::Isize => isize::try_from(v).ok().map(boxed),
        ScalarKind::U8 => u8::try_from(v).ok().map(boxed),
        ScalarKind::U16 => u16::try_from(v).ok().map(boxed),
        ScalarKind::U32 => u32::try_from(v).ok().map(boxed),
        ScalarKind::U64 => u64::try_from(v).ok().map(boxed),
        ScalarKind::U128 => u128::try_from(v).ok().map(boxed),
        ScalarKind::Usize => usize::try_from(v).ok().map(boxed),
        ScalarKind::F32 => {
            let f = v as f32;
            (f as i128 == v).then(|| boxed(f))
        }
        ScalarKind::F64 => {
            let f = v as f64;
            (f as i128 == v).then(|| boxed(f))
        }
        ScalarKind::Char => u32::try_from(v).ok().and_then(char::from_u32).map(boxed),
        ScalarKind::Bool | ScalarKind::String => None,
    }
}

/// Reads the primitive behind `value`, looking through one newtype layer.
pub fn read_scalar(value: &dyn Mappable) -> Option<Scalar<'_>> {
    match value.reflect_ref() {
        ReflectRef::Scalar(scalar) => Some(scalar),
        ReflectRef::Newtype(inner) => match inner.reflect_ref() {
            ReflectRef::Scalar(scalar) => Some(scalar),
            _ => None,
        },
        _ => None,
    }
}

/// Writes `value` into `target`, or into its inner value when `target` is a
/// newtype.
pub fn write_underlying(
    target: &mut dyn Mappable,
    target_type: &TypeInfo,
    value: Box<dyn Mappable>,
) -> MapResult<()> {
    match target_type.kind() {
        TypeKind::Newtype(_) => match target.reflect_mut() {
            ReflectMut::Newtype(inner) => inner.assign(value),
            _ => Err(MapError::TypeMismatch {
                expected: target_type.name(),
                found: value.type_name(),
            }),
        },
        _ => target.assign(value),
    }
}

/// Stores `scalar` into `target` with a checked cast to the target's
/// primitive kind. Returns `Ok(false)` when the value does not fit.
pub fn write_scalar(target: &mut dyn Mappable, scalar: Scalar<'_>) -> MapResult<bool> {
    let target_type = target.reflect_type();
    let Some(kind) = target_type.scalar_kind() else {
        return Err(MapError::TypeMismatch {
            expected: target_type.name(),
            found: std::any::type_name::<Scalar<'static>>(),
        });
    };
    match scalar.cast(kind) {
        Some(value) => write_underlying(target, &target_type, value).map(|()| true),
        None => Ok(false),
    }
}
