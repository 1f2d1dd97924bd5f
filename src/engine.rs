//! The recursive conversion algorithm.
//!
//! Rules are tried in a fixed order for every value:
//!
//! 1. absent source: destination becomes its zero value
//! 2. `None` source into an `Option` destination: destination becomes `None`
//! 3. registered transformer for (source type, destination type)
//! 4. implicit conversion: identical types, shared newtype underlying type,
//!    lossless scalar widening
//! 5. destination scanner
//! 6. `Option` source: retry with the payload
//! 7. struct into struct, field by field
//! 8. sequence into sequence, element by element
//!
//! Rules 7 and 8 look through one newtype layer on either side.
//! 9. otherwise [`MapError::NoViableConversion`]
//!
//! Struct copies write into the destination in place, so a failing field
//! leaves the fields copied before it populated.

use log::trace;

use crate::error::{MapError, MapResult};
use crate::mapper::Mapper;
use crate::resolver::{field_at, field_at_mut};
use crate::traits::mappable::{Mappable, ReflectMut, ReflectRef, SeqAccess};
use crate::types::{TypeInfo, TypeKind, TypePair, read_scalar, write_underlying};

/// Follows `Option` layers; `None` means the source is absent.
fn indirect(value: &dyn Mappable) -> Option<&dyn Mappable> {
    let mut current = value;
    loop {
        match current.reflect_ref() {
            ReflectRef::Option(Some(inner)) => current = inner,
            ReflectRef::Option(None) => return None,
            _ => return Some(current),
        }
    }
}

/// The value wrapped by a newtype, or `value` itself.
fn underlying_value(value: &dyn Mappable) -> &dyn Mappable {
    match value.reflect_ref() {
        ReflectRef::Newtype(inner) => inner,
        _ => value,
    }
}

/// Runs `f` on the value wrapped by a newtype, or on `value` itself.
fn with_underlying_mut<R>(
    value: &mut dyn Mappable,
    f: impl FnOnce(&mut dyn Mappable) -> R,
) -> R {
    if matches!(value.reflect_type().kind(), TypeKind::Newtype(_)) {
        if let ReflectMut::Newtype(inner) = value.reflect_mut() {
            return f(inner);
        }
    }
    f(value)
}

impl Mapper {
    /// Writes `from` into the slot `to`.
    ///
    /// `None` sources clear optional destinations and zero the others. A
    /// `None` destination is only allocated once a value is about to be
    /// written into it.
    pub(crate) fn copy_value(
        &self,
        to: &mut dyn Mappable,
        from: &dyn Mappable,
        depth: usize,
    ) -> MapResult<()> {
        let source = indirect(from);
        if source.is_none() && to.reflect_type().is_option() {
            if let ReflectMut::Option(access) = to.reflect_mut() {
                access.set_none();
            }
            return Ok(());
        }
        if indirect(to).is_none() {
            let mut fresh = to.reflect_type().indirect().construct();
            self.convert_into(fresh.as_mut(), source, depth)?;
            return to.indirect_mut().assign(fresh);
        }
        self.convert_into(to.indirect_mut(), source, depth)
    }

    /// Produces a value of `target`'s type from `from` and stores it in
    /// `target`.
    pub(crate) fn convert_into(
        &self,
        target: &mut dyn Mappable,
        from: Option<&dyn Mappable>,
        depth: usize,
    ) -> MapResult<()> {
        let to_type = target.reflect_type();
        if depth > self.config.max_depth {
            return Err(MapError::DepthExceeded {
                limit: self.config.max_depth,
                type_name: to_type.name(),
            });
        }

        let Some(source) = from else {
            return target.assign(to_type.construct());
        };
        let from_type = source.reflect_type();

        if to_type.is_option() {
            return self.copy_value(target, source, depth);
        }

        if let Some(transformer) = self.registry.get(&TypePair::new(from_type, to_type)) {
            trace!("transform {} -> {}", from_type, to_type);
            let value = transformer(source, &to_type)?;
            return target.assign(value);
        }

        if self.convert_implicitly(target, &to_type, source, &from_type)? {
            return Ok(());
        }

        if let Some(scan) = to_type.scanner() {
            trace!("scan {} from {}", to_type, from_type);
            let value = scan(source)?;
            return target.assign(value);
        }

        if let ReflectRef::Option(inner) = source.reflect_ref() {
            return self.convert_into(target, inner, depth);
        }

        let from_inner = underlying_value(source);
        let from_shape = from_type.underlying();
        let to_shape = to_type.underlying();

        if from_shape.is_struct() && to_shape.is_struct() {
            return with_underlying_mut(target, |inner| {
                self.copy_struct(inner, &to_shape, from_inner, &from_shape, depth)
            });
        }

        if let (Some(element), ReflectRef::Seq(items)) =
            (to_shape.element(), from_inner.reflect_ref())
        {
            return with_underlying_mut(target, |inner| {
                self.copy_seq(inner, &element, items, depth)
            });
        }

        Err(MapError::NoViableConversion {
            from: from_type.name(),
            to: to_type.name(),
        })
    }

    /// Built-in convertibility. Returns `Ok(false)` when the pair is not
    /// implicitly convertible.
    fn convert_implicitly(
        &self,
        target: &mut dyn Mappable,
        to_type: &TypeInfo,
        source: &dyn Mappable,
        from_type: &TypeInfo,
    ) -> MapResult<bool> {
        if from_type == to_type {
            target.assign(source.clone_boxed())?;
            return Ok(true);
        }

        let from_underlying = from_type.underlying();
        let to_underlying = to_type.underlying();
        if from_underlying == to_underlying {
            let value = underlying_value(source).clone_boxed();
            write_underlying(target, to_type, value)?;
            return Ok(true);
        }

        let widening = match (from_underlying.scalar_kind(), to_underlying.scalar_kind()) {
            (Some(from_kind), Some(to_kind)) => from_kind.widens_to(to_kind).then_some(to_kind),
            _ => None,
        };
        let Some(to_kind) = widening else {
            return Ok(false);
        };
        match read_scalar(source).and_then(|scalar| scalar.cast(to_kind)) {
            Some(value) => {
                write_underlying(target, to_type, value)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn copy_struct(
        &self,
        target: &mut dyn Mappable,
        to_type: &TypeInfo,
        source: &dyn Mappable,
        from_type: &TypeInfo,
        depth: usize,
    ) -> MapResult<()> {
        let use_secondary = self.config.use_secondary_tags;
        let from_layout = self.layouts.layout(from_type, use_secondary);
        let to_layout = self.layouts.layout(to_type, use_secondary);

        for from_field in &from_layout.fields {
            let Some(value) = field_at(source, &from_field.path) else {
                continue;
            };
            for name in &from_field.names {
                let Some(to_field) = to_layout.lookup(name) else {
                    continue;
                };
                if !to_field.is_settable() {
                    continue;
                }
                let Some(slot) = field_at_mut(target, &to_field.path) else {
                    continue;
                };
                trace!(
                    "copy field {}.{} -> {}.{}",
                    from_type,
                    from_field.name(),
                    to_type,
                    to_field.name()
                );
                self.copy_value(slot, value, depth + 1)?;
            }
        }
        Ok(())
    }

    fn copy_seq(
        &self,
        target: &mut dyn Mappable,
        element: &TypeInfo,
        items: &dyn SeqAccess,
        depth: usize,
    ) -> MapResult<()> {
        let mut converted = Vec::with_capacity(items.len());
        for index in 0..items.len() {
            let mut item = element.construct();
            trace!("copy element [{}] -> {}", index, element);
            self.convert_into(item.indirect_mut(), items.get(index), depth + 1)?;
            converted.push(item);
        }

        match target.reflect_mut() {
            ReflectMut::Seq(seq) => seq.replace(converted),
            _ => Err(MapError::TypeMismatch {
                expected: "sequence",
                found: element.name(),
            }),
        }
    }
}
