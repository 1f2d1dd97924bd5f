use crate::mapper::Mapper;
use crate::modules::{TimestampModule, WrappersModule};
use crate::traits::module::Module;

/// [`TimestampModule`] followed by [`WrappersModule`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WellKnownModule;

impl Module for WellKnownModule {
    fn register(&self, mapper: &mut Mapper) {
        mapper.install(TimestampModule).install(WrappersModule);
    }
}
