//! At-most-once memoization of per-run build facts
//!
//! A `Cache` computes each key's value exactly once for its lifetime, even
//! when several callers race on the first access. Failed computations are
//! never stored, so the next call for that key retries. The table is
//! append-only: no updates, no eviction.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

/// Memoizing key-to-value store, generic per key family.
///
/// Keys of one family always map to values of one type, so a stored value
/// can never come back with an unexpected shape.
pub struct Cache<K, V> {
  entries: Mutex<HashMap<K, Arc<Slot<V>>>>,
}

struct Slot<V> {
  value: Mutex<Option<V>>,
}

impl<V> Default for Slot<V> {
  fn default() -> Self {
    Self { value: Mutex::new(None) }
  }
}

impl<K, V> Default for Cache<K, V> {
  fn default() -> Self {
    Self { entries: Mutex::new(HashMap::new()) }
  }
}

impl<K, V> Cache<K, V>
where
  K: Eq + Hash,
  V: Clone,
{
  /// Create an empty cache
  pub fn new() -> Self {
    Self::default()
  }

  /// Return the memoized value for `key`, computing it via `supplier` on
  /// first access.
  ///
  /// Only the first supplier registered for a key is ever invoked; later
  /// calls with an equal key return the stored value no matter what
  /// supplier they carry. A supplier error is propagated and nothing is
  /// stored. Concurrent first accesses for the same key serialize on a
  /// per-key lock, so the supplier runs at most once.
  pub fn compute<F, E>(&self, key: K, supplier: F) -> Result<V, E>
  where
    F: FnOnce() -> Result<V, E>,
  {
    let slot = {
      let mut entries = lock(&self.entries);
      Arc::clone(entries.entry(key).or_default())
    };

    // Holding the slot lock across the supplier call is what makes the
    // computation single-flight.
    let mut value = lock(&slot.value);
    if let Some(stored) = value.as_ref() {
      debug!("cache hit");
      return Ok(stored.clone());
    }

    debug!("cache miss, computing value");
    let computed = supplier()?;
    *value = Some(computed.clone());
    Ok(computed)
  }

  /// Number of keys with a stored value
  pub fn len(&self) -> usize {
    let entries = lock(&self.entries);
    entries.values().filter(|slot| lock(&slot.value).is_some()).count()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

// A panicked supplier poisons only its own slot; the stored state is still
// consistent (either Some or None), so recover the guard instead of
// propagating the poison.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
  mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
