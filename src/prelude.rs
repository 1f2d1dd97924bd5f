//! Prelude module for convenient imports.
//!
//! ```rust
//! use structmapper::prelude::*;
//! ```

pub use crate::config::MapperConfig;
pub use crate::error::{MapError, MapResult};
pub use crate::mapper::{CopyCommand, Mapper};
pub use crate::modules::{TextModule, TimestampModule, WellKnownModule, WrappersModule};
pub use crate::registry::{MatcherFn, TypeMatcher};
pub use crate::traits::{Mappable, Module, Scan, Typed};
pub use crate::types::{TypeInfo, TypePair};
pub use crate::wire::{
    BoolValue, DoubleValue, FloatValue, Int32Value, Int64Value, StringValue, Timestamp,
};
pub use structmapper_macros::Mappable;
