//! Bundled transformer modules.
//!
//! - [`TimestampModule`] - RFC 3339 text, `DateTime<Utc>` and [`Timestamp`](crate::wire::Timestamp)
//! - [`WrappersModule`] - wrapper messages and bare primitives
//! - [`WellKnownModule`] - both of the above
//! - [`TextModule`] - `Display`/`FromStr` types and `String`

pub mod error;
pub mod text;
pub mod timestamp;
pub mod well_known;
pub mod wrappers;

pub use error::ModuleError;
pub use text::TextModule;
pub use timestamp::TimestampModule;
pub use well_known::WellKnownModule;
pub use wrappers::WrappersModule;

use crate::error::MapError;
use crate::traits::mappable::{Mappable, Typed};

/// Borrows `value` as a `T`, or reports the mismatch as a module error.
pub(crate) fn expect_value<T: Typed>(value: &dyn Mappable) -> Result<&T, MapError> {
    value.downcast_ref::<T>().ok_or_else(|| {
        MapError::transformer(ModuleError::UnexpectedType {
            expected: std::any::type_name::<T>(),
            found: value.type_name(),
        })
    })
}
