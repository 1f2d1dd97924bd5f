pub mod mappable;
pub mod module;

pub use mappable::{
    Mappable, OptionAccess, ReflectMut, ReflectRef, Scan, SeqAccess, StructAccess, Typed, assign,
    downcast_boxed,
};
pub use module::Module;
