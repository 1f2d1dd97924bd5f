//! Ordered transformer registry with a per-pair lookup cache.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, warn};

use crate::error::MapResult;
use crate::traits::mappable::Mappable;
use crate::types::{TypeInfo, TypePair};

/// Converts a source value into a value of the given destination type.
pub type Transformer =
    Arc<dyn Fn(&dyn Mappable, &TypeInfo) -> MapResult<Box<dyn Mappable>> + Send + Sync>;

/// Decides whether a transformer applies to a [`TypePair`].
pub trait TypeMatcher: Send + Sync {
    fn matches(&self, pair: &TypePair) -> bool;
}

/// Exact pair match.
impl TypeMatcher for TypePair {
    fn matches(&self, pair: &TypePair) -> bool {
        self == pair
    }
}

/// Predicate match over an arbitrary function of the pair.
pub struct MatcherFn<F>(pub F);

impl<F> TypeMatcher for MatcherFn<F>
where
    F: Fn(&TypePair) -> bool + Send + Sync,
{
    fn matches(&self, pair: &TypePair) -> bool {
        (self.0)(pair)
    }
}

struct RegistryEntry {
    matcher: Box<dyn TypeMatcher>,
    transformer: Transformer,
}

/// Registration order is priority order: the first matching entry wins.
///
/// Every resolved pair, found or not, is memoized for the lifetime of the
/// registry. Entries added after a pair was resolved do not change the
/// cached answer for that pair, so all registrations belong before the
/// first copy.
#[derive(Default)]
pub struct TransformerRegistry {
    entries: Vec<RegistryEntry>,
    cache: Mutex<HashMap<TypePair, Option<Transformer>>>,
}

impl TransformerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry. No uniqueness check is performed.
    pub fn put<M>(&mut self, matcher: M, transformer: Transformer)
    where
        M: TypeMatcher + 'static,
    {
        let cached = self
            .cache
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        if cached > 0 {
            warn!(
                "transformer registered after {} type pair(s) were resolved; cached pairs keep their previous answer",
                cached
            );
        }
        self.entries.push(RegistryEntry {
            matcher: Box::new(matcher),
            transformer,
        });
        debug!("registered transformer #{}", self.entries.len());
    }

    /// Returns the transformer of the first entry matching `pair`.
    ///
    /// The cache is consulted first; on a miss the entries are scanned once and
    /// the outcome is memoized. `None` is an ordinary answer, not an error.
    pub fn get(&self, pair: &TypePair) -> Option<Transformer> {
        // Held across the scan so a pair is resolved exactly once. Matchers
        // must not call back into the registry.
        let mut cache = self.lock_cache();
        if let Some(cached) = cache.get(pair) {
            return cached.clone();
        }

        let found = self
            .entries
            .iter()
            .find(|entry| entry.matcher.matches(pair))
            .map(|entry| Arc::clone(&entry.transformer));
        cache.insert(*pair, found.clone());
        found
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of memoized pairs, hits and misses alike.
    pub fn cached_len(&self) -> usize {
        self.lock_cache().len()
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, HashMap<TypePair, Option<Transformer>>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for TransformerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformerRegistry")
            .field("entries", &self.entries.len())
            .field("cached", &self.cached_len())
            .finish()
    }
}
