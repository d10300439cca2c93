//! Memoized derivations over wallet state.
//!
//! A [`DerivationCache`] holds the last inputs and output of one named
//! derivation. Inputs are compared slot by slot with `PartialEq`: list-valued
//! slots are wrapped in [`Shared`], whose equality is pointer identity, so an
//! unchanged list is never walked and a rebuilt list always invalidates.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

/// Reference-counted value compared by identity rather than contents.
///
/// Two `Shared` values are equal only when they point at the same allocation.
/// Callers keep a `Shared` stable (clone it) while the data is unchanged and
/// construct a new one when it changes.
pub struct Shared<T>(Arc<T>);

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(value))
    }

    pub fn from_arc(value: Arc<T>) -> Self {
        Self(value)
    }

    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl<T> Eq for Shared<T> {}

impl<T: Default> Default for Shared<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for Shared<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: Serialize> Serialize for Shared<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Shared<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Shared::new)
    }
}

/// Hit/miss counters for one cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Single-entry memo for one named derivation.
pub struct DerivationCache<I, O> {
    name: &'static str,
    entry: Option<(I, Arc<O>)>,
    stats: CacheStats,
}

impl<I: PartialEq, O> DerivationCache<I, O> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entry: None,
            stats: CacheStats::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Return the stored output if `inputs` equal the previous inputs,
    /// otherwise run `derive`, store the result and return it.
    pub fn get_or_derive(&mut self, inputs: I, derive: impl FnOnce(&I) -> O) -> Arc<O> {
        if let Some((previous, output)) = &self.entry {
            if *previous == inputs {
                self.stats.hits += 1;
                debug!(derivation = self.name, "derivation cache hit");
                return Arc::clone(output);
            }
        }

        self.stats.misses += 1;
        debug!(derivation = self.name, "derivation cache miss");
        let output = Arc::new(derive(&inputs));
        self.entry = Some((inputs, Arc::clone(&output)));
        output
    }

    /// Drop the stored entry so the next call recomputes.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

impl<I, O> fmt::Debug for DerivationCache<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivationCache")
            .field("name", &self.name)
            .field("populated", &self.entry.is_some())
            .field("stats", &self.stats)
            .finish()
    }
}
