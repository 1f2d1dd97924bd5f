//! Conversions between wrapper messages and bare primitives.

use crate::error::{MapError, MapResult};
use crate::mapper::Mapper;
use crate::modules::{ModuleError, expect_value};
use crate::traits::mappable::{Mappable, Typed, downcast_boxed};
use crate::traits::module::Module;
use crate::types::{ScalarKind, TypeInfo, TypePair, read_scalar, write_scalar};
use crate::wire::{BoolValue, DoubleValue, FloatValue, Int32Value, Int64Value, StringValue};

/// For every wrapper `W` and each value type `X` of its family, registers
/// `X -> W` and `W -> X`:
///
/// | wrapper                        | family            |
/// |--------------------------------|-------------------|
/// | `Int64Value`, `Int32Value`     | integers          |
/// | `DoubleValue`, `FloatValue`    | `f32`, `f64`      |
/// | `BoolValue`                    | `bool`            |
/// | `StringValue`                  | `String`          |
///
/// Newtypes over a family member match too. Values are moved with checked
/// casts; a value that does not fit fails with [`ModuleError::Overflow`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WrappersModule;

impl Module for WrappersModule {
    fn register(&self, mapper: &mut Mapper) {
        register_wrapper::<Int64Value, i64>(mapper, ScalarKind::is_integer);
        register_wrapper::<Int32Value, i32>(mapper, ScalarKind::is_integer);
        register_wrapper::<DoubleValue, f64>(mapper, ScalarKind::is_float);
        register_wrapper::<FloatValue, f32>(mapper, ScalarKind::is_float);
        register_wrapper::<BoolValue, bool>(mapper, |kind| kind == ScalarKind::Bool);
        register_wrapper::<StringValue, String>(mapper, |kind| kind == ScalarKind::String);
    }
}

fn register_wrapper<W, V>(mapper: &mut Mapper, accepts: fn(ScalarKind) -> bool)
where
    W: Typed + From<V> + Into<V>,
    V: Typed,
{
    mapper.register_transformer_fn(
        move |pair: &TypePair| pair.to.is::<W>() && pair.from.scalar_kind().is_some_and(accepts),
        |from: &dyn Mappable, _: &TypeInfo| {
            let value = cast_scalar::<V>(from)?;
            Ok(Box::new(W::from(value)))
        },
    );
    mapper.register_transformer_fn(
        move |pair: &TypePair| pair.from.is::<W>() && pair.to.scalar_kind().is_some_and(accepts),
        |from: &dyn Mappable, to: &TypeInfo| {
            let value: V = expect_value::<W>(from)?.clone().into();
            let mut out = to.construct();
            store_scalar(out.as_mut(), &value, to)?;
            Ok(out)
        },
    );
}

/// Reads the primitive behind `from` as a `V`.
fn cast_scalar<V: Typed>(from: &dyn Mappable) -> MapResult<V> {
    let target = TypeInfo::of::<V>();
    let scalar = read_scalar(from).ok_or_else(|| {
        MapError::transformer(ModuleError::UnexpectedType {
            expected: target.name(),
            found: from.type_name(),
        })
    })?;
    let cast = target.scalar_kind().and_then(|kind| scalar.cast(kind));
    match cast {
        Some(value) => downcast_boxed::<V>(value),
        None => Err(MapError::transformer(ModuleError::Overflow {
            value: scalar.to_string(),
            target: target.name(),
        })),
    }
}

/// Writes the primitive behind `value` into `out`, a value of type `to`.
fn store_scalar(out: &mut dyn Mappable, value: &dyn Mappable, to: &TypeInfo) -> MapResult<()> {
    let Some(scalar) = read_scalar(value) else {
        return Err(MapError::transformer(ModuleError::UnexpectedType {
            expected: to.name(),
            found: value.type_name(),
        }));
    };
    if write_scalar(out, scalar)? {
        Ok(())
    } else {
        Err(MapError::transformer(ModuleError::Overflow {
            value: scalar.to_string(),
            target: to.name(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq, crate::Mappable)]
    struct Score(u8);

    fn mapper() -> Mapper {
        let mut mapper = Mapper::new();
        mapper.install(WrappersModule);
        mapper
    }

    #[test]
    fn primitives_wrap_and_unwrap() {
        let mapper = mapper();
        assert_eq!(mapper.convert_to::<Int64Value>(&42i32).unwrap(), Int64Value::from(42));
        assert_eq!(mapper.convert_to::<i16>(&Int64Value::from(-3)).unwrap(), -3);
        assert_eq!(mapper.convert_to::<DoubleValue>(&1.5f32).unwrap(), DoubleValue::from(1.5));
        assert!(mapper.convert_to::<bool>(&BoolValue::from(true)).unwrap());

        let text: StringValue = mapper.convert_to(&String::from("hi")).unwrap();
        assert_eq!(mapper.convert_to::<String>(&text).unwrap(), "hi");
    }

    #[test]
    fn newtypes_over_family_members_match() {
        let mapper = mapper();
        assert_eq!(mapper.convert_to::<Int32Value>(&Score(7)).unwrap(), Int32Value::from(7));
        assert_eq!(mapper.convert_to::<Score>(&Int32Value::from(9)).unwrap(), Score(9));
    }

    #[test]
    fn narrowing_overflow_is_an_error() {
        let mapper = mapper();
        let err = mapper.convert_to::<Int32Value>(&i64::MAX).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("value {} does not fit in i32", i64::MAX)
        );

        let err = mapper.convert_to::<Score>(&Int32Value::from(300)).unwrap_err();
        assert!(matches!(err, MapError::Transformer(_)));
    }

    #[test]
    fn other_families_are_not_matched() {
        let mapper = mapper();
        let err = mapper.convert_to::<Int64Value>(&1.0f64).unwrap_err();
        assert!(err.is_no_viable_conversion());
        let err = mapper.convert_to::<BoolValue>(&1u8).unwrap_err();
        assert!(err.is_no_viable_conversion());
    }
}
