//! The mapper façade: registration, module installation and copy sessions.

use std::any::type_name;
use std::sync::Arc;

use log::debug;

use crate::config::MapperConfig;
use crate::error::{BoxError, MapError, MapResult};
use crate::registry::{MatcherFn, TransformerRegistry, TypeMatcher};
use crate::resolver::LayoutCache;
use crate::traits::mappable::{Mappable, Typed};
use crate::traits::module::Module;
use crate::types::{TypeInfo, TypePair};

/// Copies values between differently shaped types.
///
/// A mapper owns one transformer registry and is otherwise stateless, so one
/// instance can serve any number of copies, from any number of threads, once
/// its transformers are registered.
///
/// # Examples
///
/// ```
/// use structmapper::{Mappable, Mapper};
///
/// #[derive(Debug, Clone, Default, Mappable)]
/// struct User {
///     id: String,
///     name: String,
///     #[structmapper(rename = "description")]
///     age: i32,
/// }
///
/// #[derive(Debug, Clone, Default, Mappable)]
/// struct Node {
///     id: String,
///     name: String,
///     description: String,
/// }
///
/// let mut mapper = Mapper::new();
/// mapper.register_fn(|age: &i32| Ok::<_, std::convert::Infallible>(age.to_string()));
///
/// let user = User { id: "12345".into(), name: "Taro".into(), age: 32 };
/// let mut node = Node::default();
/// mapper.from(&user).copy_to(&mut node)?;
///
/// assert_eq!(node.description, "32");
/// # Ok::<(), structmapper::MapError>(())
/// ```
#[derive(Debug, Default)]
pub struct Mapper {
    pub(crate) registry: TransformerRegistry,
    pub(crate) layouts: LayoutCache,
    pub(crate) config: MapperConfig,
}

impl Mapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MapperConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    pub fn registry(&self) -> &TransformerRegistry {
        &self.registry
    }

    /// Registers `transformer` for every pair accepted by `matcher`.
    ///
    /// Entries are consulted in registration order. Registrations should be
    /// complete before the first copy; see [`TransformerRegistry`].
    pub fn register_transformer<M, F>(&mut self, matcher: M, transformer: F) -> &mut Self
    where
        M: TypeMatcher + 'static,
        F: Fn(&dyn Mappable, &TypeInfo) -> MapResult<Box<dyn Mappable>> + Send + Sync + 'static,
    {
        self.registry.put(matcher, Arc::new(transformer));
        self
    }

    /// Registers `transformer` for every pair `predicate` accepts.
    pub fn register_transformer_fn<P, F>(&mut self, predicate: P, transformer: F) -> &mut Self
    where
        P: Fn(&TypePair) -> bool + Send + Sync + 'static,
        F: Fn(&dyn Mappable, &TypeInfo) -> MapResult<Box<dyn Mappable>> + Send + Sync + 'static,
    {
        self.register_transformer(MatcherFn(predicate), transformer)
    }

    /// Registers a typed conversion for the exact pair `A -> B`.
    ///
    /// Errors returned by `f` surface unchanged from the copy.
    pub fn register_fn<A, B, E, F>(&mut self, f: F) -> &mut Self
    where
        A: Typed,
        B: Typed,
        E: Into<BoxError>,
        F: Fn(&A) -> Result<B, E> + Send + Sync + 'static,
    {
        self.register_transformer(TypePair::of::<A, B>(), move |from, _| {
            let value = from
                .downcast_ref::<A>()
                .ok_or_else(|| MapError::TypeMismatch {
                    expected: type_name::<A>(),
                    found: from.type_name(),
                })?;
            let converted = f(value).map_err(MapError::transformer)?;
            Ok(Box::new(converted))
        })
    }

    /// Lets `module` perform its registrations on this mapper.
    pub fn install<M: Module>(&mut self, module: M) -> &mut Self {
        let before = self.registry.len();
        module.register(self);
        debug!(
            "installed module {} ({} transformers)",
            type_name::<M>(),
            self.registry.len() - before
        );
        self
    }

    /// Starts a copy session reading from `source`.
    pub fn from<'a>(&'a self, source: &'a dyn Mappable) -> CopyCommand<'a> {
        CopyCommand {
            mapper: self,
            source,
        }
    }

    /// Converts `source` into a fresh value of type `to`.
    pub fn convert(&self, source: &dyn Mappable, to: &TypeInfo) -> MapResult<Box<dyn Mappable>> {
        let mut value = to.construct();
        self.copy_value(value.as_mut(), source, 0)?;
        Ok(value)
    }

    /// Typed form of [`Mapper::convert`].
    pub fn convert_to<T: Typed>(&self, source: &dyn Mappable) -> MapResult<T> {
        let mut value = T::default();
        self.copy_value(&mut value, source, 0)?;
        Ok(value)
    }
}

/// One copy from a bound source value.
#[derive(Debug)]
pub struct CopyCommand<'a> {
    mapper: &'a Mapper,
    source: &'a dyn Mappable,
}

impl CopyCommand<'_> {
    /// Copies the source into `destination`.
    ///
    /// On error, fields written before the failing one keep their new
    /// values.
    pub fn copy_to(&self, destination: &mut dyn Mappable) -> MapResult<()> {
        self.mapper.copy_value(destination, self.source, 0)
    }
}
