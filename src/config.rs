//! Mapper configuration.
//!
//! Built with `typed-builder`; every option has a default, so
//! `MapperConfig::builder().build()` equals `MapperConfig::default()`.

use typed_builder::TypedBuilder;

/// Default limit on nested conversions within one copy.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options shared by every copy issued through one [`Mapper`](crate::Mapper).
///
/// # Examples
///
/// ```
/// use structmapper::{Mapper, MapperConfig};
///
/// // Match on `structmapper` tags and field names only
/// let config = MapperConfig::builder()
///     .use_secondary_tags(false)
///     .max_depth(16)
///     .build();
///
/// let mapper = Mapper::with_config(config);
/// assert_eq!(mapper.config().max_depth, 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
#[builder(doc)]
pub struct MapperConfig {
    /// Maximum nesting of struct fields and sequence elements before a copy
    /// fails with `DepthExceeded`. Values whose source and destination types
    /// are identical are cloned whole and do not count toward it.
    #[builder(default = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Whether `#[serde(rename = "...")]` names take part in field matching
    #[builder(default = true)]
    pub use_secondary_tags: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            use_secondary_tags: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default() {
        assert_eq!(MapperConfig::builder().build(), MapperConfig::default());
    }

    #[test]
    fn builder_overrides() {
        let config = MapperConfig::builder().max_depth(2).build();
        assert_eq!(config.max_depth, 2);
        assert!(config.use_secondary_tags);
    }
}
