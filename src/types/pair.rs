use std::fmt;
use std::hash::{Hash, Hasher};

use crate::traits::mappable::Typed;
use crate::types::type_info::TypeInfo;

/// Identity of a "convert `from` into `to`" request.
///
/// Used both as a matcher (exact pair) and as the registry cache key.
#[derive(Debug, Clone, Copy)]
pub struct TypePair {
    pub from: TypeInfo,
    pub to: TypeInfo,
}

impl TypePair {
    pub fn new(from: TypeInfo, to: TypeInfo) -> Self {
        Self { from, to }
    }

    pub fn of<A: Typed, B: Typed>() -> Self {
        Self::new(A::type_info(), B::type_info())
    }

    /// The pair converting in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self::new(self.to, self.from)
    }
}

impl PartialEq for TypePair {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for TypePair {}

impl Hash for TypePair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for TypePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
