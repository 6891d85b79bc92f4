use crate::alloc::BTreeMap;
use crate::fingerprint::Fingerprint;

/// Counts calls per fingerprint. Counts only grow.
#[derive(Default)]
pub(crate) struct CallRegister {
    counts: BTreeMap<Fingerprint, usize>,
}

impl CallRegister {
    pub fn increase(&mut self, key: &Fingerprint) {
        *self.counts.entry(key.clone()).or_insert(0) += 1;
    }

    pub fn count(&self, key: &Fingerprint) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }
}

/// Stores one behaviour per fingerprint. The last recorded behaviour wins.
pub(crate) struct BehaviorRegister<V> {
    behaviors: BTreeMap<Fingerprint, V>,
}

impl<V> Default for BehaviorRegister<V> {
    fn default() -> Self {
        Self {
            behaviors: BTreeMap::new(),
        }
    }
}

impl<V> BehaviorRegister<V> {
    /// Returns the behaviour that was replaced, if any.
    pub fn record(&mut self, value: V, key: &Fingerprint) -> Option<V> {
        self.behaviors.insert(key.clone(), value)
    }

    pub fn fetch(&self, key: &Fingerprint) -> Option<&V> {
        self.behaviors.get(key)
    }
}
