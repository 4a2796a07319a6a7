//! Time-to-live caching for stats API responses.
//!
//! The stats client keeps one [`TtlCache`] per endpoint family. An entry is
//! served unchanged until its expiry, after which a hit behaves like a miss
//! and the next fetch replaces it. There is no per-key locking around the
//! fetch itself: two callers missing at once both fetch, and the second
//! write wins with an identical value.
//!
//! The clock is an injectable collaborator so tests control expiry
//! deterministically.

use lru::LruCache;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

#[cfg(test)]
mod tests;

/// Source of monotonic time for cache expiry.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// The real wall clock.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

/// A bounded key/value store whose entries expire after a fixed duration.
///
/// Backed by an LRU map so the memory footprint stays bounded even for
/// long-running processes that touch many keys.
pub struct TtlCache<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    entries: Mutex<LruCache<K, Entry<V>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<K, V> TtlCache<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    /// Create a cache holding up to `capacity` entries, each valid for `ttl`.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self::with_clock(capacity, ttl, Arc::new(SystemClock))
    }

    /// Like [`TtlCache::new`] but with an explicit clock (test seam).
    pub fn with_clock(capacity: usize, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(
                NonZeroUsize::new(capacity.max(1)).expect("capacity is at least 1"),
            )),
            ttl,
            clock,
        }
    }

    /// Return the live value for `key`, dropping it first if expired.
    pub fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some(entry) if entry.expires_at > now => Some(entry.value.clone()),
            Some(_) => {
                entries.pop(key);
                None
            }
            None => None,
        }
    }

    /// Insert `value` under `key`, replacing any previous entry and
    /// restarting its time-to-live.
    pub fn put(&self, key: K, value: V) {
        let expires_at = self.clock.now() + self.ttl;
        self.entries
            .lock()
            .unwrap()
            .put(key, Entry { value, expires_at });
    }

    /// Number of entries currently stored, expired or not.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The configured entry lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
