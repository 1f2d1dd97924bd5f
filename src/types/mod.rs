//! Runtime type descriptors.
//!
//! - [`type_info`] - per-type descriptors and static field tables
//! - [`pair`] - the (source, destination) key used by the transformer registry
//! - [`scalar`] - primitive views and checked numeric casts

pub mod pair;
pub mod scalar;
pub mod type_info;

pub use pair::TypePair;
pub use scalar::{Scalar, ScalarKind, read_scalar, write_scalar, write_underlying};
pub use type_info::{ConstructFn, FieldInfo, SKIP_NAME, ScanFn, TypeInfo, TypeKind};
