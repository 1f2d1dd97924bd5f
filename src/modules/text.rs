//! Conversions between text-renderable types and `String`.

use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::error::BoxError;
use crate::mapper::Mapper;
use crate::traits::mappable::Typed;
use crate::traits::module::Module;

/// Registers `T -> String` through `Display`, `Option<T> -> String` with
/// `None` rendered as the empty string, and `String -> T` through `FromStr`.
///
/// ```
/// use structmapper::{Mappable, Mapper, modules::TextModule};
///
/// #[derive(Debug, Clone, Copy, Default, PartialEq, Mappable, strum::Display, strum::EnumString)]
/// enum Sex {
///     #[default]
///     Unknown,
///     Male,
///     Female,
/// }
///
/// let mut mapper = Mapper::new();
/// mapper.install(TextModule::<Sex>::new());
///
/// let text: String = mapper.convert_to(&Sex::Female)?;
/// assert_eq!(text, "Female");
/// assert_eq!(mapper.convert_to::<Sex>(&text)?, Sex::Female);
/// # Ok::<(), structmapper::MapError>(())
/// ```
pub struct TextModule<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> TextModule<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for TextModule<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Module for TextModule<T>
where
    T: Typed + Display + FromStr,
    T::Err: Into<BoxError>,
{
    fn register(&self, mapper: &mut Mapper) {
        mapper
            .register_fn(|value: &T| Ok::<_, BoxError>(value.to_string()))
            .register_fn(|value: &Option<T>| {
                Ok::<_, BoxError>(value.as_ref().map(T::to_string).unwrap_or_default())
            })
            .register_fn(|text: &String| text.parse::<T>());
    }
}
