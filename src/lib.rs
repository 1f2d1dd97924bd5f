//! # structmapper
//!
//! Copies data between differently shaped Rust types: a transport struct into
//! a domain struct, a domain struct into a persistence row, and so on.
//!
//! ## Features
//!
//! - **Name resolution**: fields match by `#[structmapper(rename)]`, then by
//!   `#[serde(rename)]`, then by field name; embedded fields are flattened
//! - **Pluggable transformers**: conversions registered per type pair or per
//!   predicate, first registration wins
//! - **Implicit conversions**: identical types, newtypes over the same type
//!   and lossless numeric widening need no registration
//! - **Modules**: bundles of transformers for timestamps, wrapper messages
//!   and `Display`/`FromStr` types
//!
//! ## Quick Start
//!
//! ```rust
//! use structmapper::prelude::*;
//!
//! #[derive(Debug, Clone, Default, Mappable)]
//! struct UserDto {
//!     id: String,
//!     #[serde(rename = "created_at")]
//!     created: String,
//! }
//!
//! #[derive(Debug, Clone, Default, Mappable)]
//! struct UserRow {
//!     id: String,
//!     created_at: Option<Timestamp>,
//! }
//!
//! let mut mapper = Mapper::new();
//! mapper.install(WellKnownModule);
//!
//! let dto = UserDto { id: "7".into(), created: "2024-01-01T00:00:00Z".into() };
//! let mut row = UserRow::default();
//! mapper.from(&dto).copy_to(&mut row)?;
//!
//! assert_eq!(row.created_at.map(|ts| ts.seconds), Some(1_704_067_200));
//! # Ok::<(), MapError>(())
//! ```

extern crate self as structmapper;

pub mod config;
mod engine;
pub mod error;
mod impls;
pub mod mapper;
pub mod modules;
pub mod prelude;
pub mod registry;
pub mod resolver;
pub mod traits;
pub mod types;
pub mod wire;

pub use config::MapperConfig;
pub use error::{BoxError, MapError, MapResult};
pub use mapper::{CopyCommand, Mapper};
pub use registry::{MatcherFn, Transformer, TransformerRegistry, TypeMatcher};
pub use structmapper_macros::Mappable;
pub use traits::{
    Mappable, Module, OptionAccess, ReflectMut, ReflectRef, Scan, SeqAccess, StructAccess, Typed,
    assign, downcast_boxed,
};
pub use types::{FieldInfo, SKIP_NAME, Scalar, ScalarKind, TypeInfo, TypeKind, TypePair};
