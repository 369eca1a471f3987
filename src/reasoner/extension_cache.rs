use crate::{
    aa::Semantics,
    solvers::{Enumeration, EnumerationLimits, SelfAttackPolicy},
    utils::ArgSet,
};
use log::debug;
use std::collections::HashMap;

/// The parameters the cached extensions depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CacheKey {
    pub(crate) revision: u64,
    pub(crate) policy: SelfAttackPolicy,
    pub(crate) limits: EnumerationLimits,
}

/// A per-semantics cache of enumerations.
///
/// All the entries share the same key; requesting an entry with another key clears the cache.
#[derive(Debug, Default)]
pub(crate) struct ExtensionCache {
    key: Option<CacheKey>,
    entries: HashMap<Semantics, Enumeration<ArgSet>>,
    n_hits: usize,
    n_misses: usize,
}

impl ExtensionCache {
    pub(crate) fn get_or_compute<F>(
        &mut self,
        key: CacheKey,
        semantics: Semantics,
        compute: F,
    ) -> Enumeration<ArgSet>
    where
        F: FnOnce() -> Enumeration<ArgSet>,
    {
        if self.key != Some(key) {
            if !self.entries.is_empty() {
                debug!(
                    "invalidating {} cached enumeration(s) (framework revision {})",
                    self.entries.len(),
                    key.revision
                );
            }
            self.entries.clear();
            self.key = Some(key);
        }
        if let Some(e) = self.entries.get(&semantics) {
            self.n_hits += 1;
            return e.clone();
        }
        self.n_misses += 1;
        let e = compute();
        self.entries.insert(semantics, e.clone());
        e
    }

    pub(crate) fn n_hits(&self) -> usize {
        self.n_hits
    }

    pub(crate) fn n_misses(&self) -> usize {
        self.n_misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(revision: u64) -> CacheKey {
        CacheKey {
            revision,
            policy: SelfAttackPolicy::Classical,
            limits: EnumerationLimits::default(),
        }
    }

    fn enumeration(n: usize) -> Enumeration<ArgSet> {
        Enumeration::new(Semantics::CO, vec![ArgSet::with_width(1); n], false)
    }

    #[test]
    fn test_hit_and_invalidation() {
        let mut cache = ExtensionCache::default();
        assert_eq!(1, cache.get_or_compute(key(0), Semantics::CO, || enumeration(1)).len());
        assert_eq!(1, cache.get_or_compute(key(0), Semantics::CO, || enumeration(2)).len());
        assert_eq!((1, 1), (cache.n_hits(), cache.n_misses()));
        assert_eq!(2, cache.get_or_compute(key(1), Semantics::CO, || enumeration(2)).len());
        assert_eq!((1, 2), (cache.n_hits(), cache.n_misses()));
    }

    #[test]
    fn test_policy_is_part_of_the_key() {
        let mut cache = ExtensionCache::default();
        cache.get_or_compute(key(0), Semantics::CO, || enumeration(1));
        let enhanced = CacheKey {
            policy: SelfAttackPolicy::Enhanced,
            ..key(0)
        };
        assert_eq!(3, cache.get_or_compute(enhanced, Semantics::CO, || enumeration(3)).len());
    }
}
