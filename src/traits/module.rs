use crate::mapper::Mapper;

/// A reusable bundle of transformer registrations.
///
/// Installing a module is equivalent to performing its registrations directly
/// on the mapper, in the order the module performs them.
pub trait Module {
    fn register(&self, mapper: &mut Mapper);
}

impl<F> Module for F
where
    F: Fn(&mut Mapper),
{
    fn register(&self, mapper: &mut Mapper) {
        self(mapper)
    }
}
