use super::*;

/// A clock that only moves when the test says so.
struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    fn starting_now() -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(Instant::now()),
        })
    }

    fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }
}

#[test]
fn hit_before_expiry_returns_equal_value() {
    let clock = ManualClock::starting_now();
    let cache: TtlCache<&str, Vec<u32>> =
        TtlCache::with_clock(8, Duration::from_secs(1800), clock.clone());

    cache.put("logs", vec![1, 2, 3]);
    clock.advance(Duration::from_secs(1799));

    assert_eq!(cache.get(&"logs"), Some(vec![1, 2, 3]));
    // A second read within the TTL is value-equal to the first.
    assert_eq!(cache.get(&"logs"), Some(vec![1, 2, 3]));
}

#[test]
fn entry_expires_after_ttl() {
    let clock = ManualClock::starting_now();
    let cache: TtlCache<&str, u64> =
        TtlCache::with_clock(8, Duration::from_secs(1800), clock.clone());

    cache.put("logs", 42);
    clock.advance(Duration::from_secs(1800));

    assert_eq!(cache.get(&"logs"), None);
    // The expired entry is dropped, not served stale.
    assert!(cache.is_empty());
}

#[test]
fn put_after_expiry_replaces_entry() {
    let clock = ManualClock::starting_now();
    let cache: TtlCache<&str, u64> =
        TtlCache::with_clock(8, Duration::from_secs(60), clock.clone());

    cache.put("k", 1);
    clock.advance(Duration::from_secs(61));
    assert_eq!(cache.get(&"k"), None);

    cache.put("k", 2);
    assert_eq!(cache.get(&"k"), Some(2));
}

#[test]
fn replacing_a_key_restarts_its_ttl() {
    let clock = ManualClock::starting_now();
    let cache: TtlCache<&str, u64> =
        TtlCache::with_clock(8, Duration::from_secs(60), clock.clone());

    cache.put("k", 1);
    clock.advance(Duration::from_secs(45));
    cache.put("k", 2);
    clock.advance(Duration::from_secs(45));

    // 90s after the first put, but only 45s after the replacement.
    assert_eq!(cache.get(&"k"), Some(2));
}

#[test]
fn capacity_evicts_least_recently_used() {
    let cache: TtlCache<u32, u32> = TtlCache::new(2, Duration::from_secs(60));

    cache.put(1, 10);
    cache.put(2, 20);
    cache.put(3, 30);

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get(&1), None);
    assert_eq!(cache.get(&2), Some(20));
    assert_eq!(cache.get(&3), Some(30));
}

#[test]
fn zero_capacity_is_clamped() {
    let cache: TtlCache<u32, u32> = TtlCache::new(0, Duration::from_secs(60));
    cache.put(1, 10);
    assert_eq!(cache.get(&1), Some(10));
}
