// ==============================================
// LRU BEHAVIOUR TESTS (integration)
// ==============================================
//
// End-to-end scenarios against the public API only: construction limits,
// recency refresh from both reads and writes, and exact-LRU eviction.

use lrukit::prelude::*;

// ==============================================
// Construction
// ==============================================

mod construction {
    use super::*;

    #[test]
    fn capacity_zero_is_rejected() {
        let err = LruCache::<String, String>::new(0).unwrap_err();
        assert_eq!(
            err.message(),
            "capacity cannot be less than 1",
            "constructing with capacity 0 should fail with a config error"
        );
    }

    #[test]
    fn capacity_one_is_the_minimum() {
        let cache = LruCache::<String, String>::new(1).unwrap();
        assert_eq!(cache.capacity(), 1);
    }
}

// ==============================================
// Lookups
// ==============================================

mod lookups {
    use super::*;

    #[test]
    fn empty_cache_returns_none() {
        let mut cache: LruCache<i32, String> = LruCache::new(1).unwrap();
        assert_eq!(cache.get(&1), None, "no entry should be present");
        assert!(cache.is_empty());
    }

    #[test]
    fn retrieves_items_within_capacity() {
        let mut cache = LruCache::new(2).unwrap();
        cache.set(1, "Value one".to_string());
        cache.set(2, "Value two".to_string());

        assert_eq!(cache.get(&1).map(String::as_str), Some("Value one"));
        assert_eq!(cache.get(&2).map(String::as_str), Some("Value two"));
    }

    #[test]
    fn some_of_unit_is_distinct_from_absent() {
        let mut cache: LruCache<&str, ()> = LruCache::new(2).unwrap();
        cache.set("present", ());
        assert_eq!(cache.get(&"present"), Some(&()));
        assert_eq!(cache.get(&"missing"), None);
    }

    #[test]
    fn miss_does_not_change_eviction_order() {
        let mut cache = LruCache::new(2).unwrap();
        cache.set(1, "a");
        cache.set(2, "b");
        assert_eq!(cache.get(&3), None);
        assert_eq!(cache.len(), 2);

        cache.set(4, "d");
        assert_eq!(cache.get(&1), None, "key 1 was still the LRU entry");
        assert_eq!(cache.get(&2), Some(&"b"));
    }
}

// ==============================================
// Updates
// ==============================================

mod updates {
    use super::*;

    #[test]
    fn update_replaces_value() {
        let mut cache = LruCache::new(1).unwrap();
        cache.set(1, "Value");
        assert_eq!(cache.get(&1), Some(&"Value"));

        cache.set(1, "New Value");
        assert_eq!(cache.get(&1), Some(&"New Value"));
        assert_eq!(cache.len(), 1, "update must not change the size");
    }

    #[test]
    fn update_refreshes_recency() {
        let mut cache = LruCache::new(2).unwrap();
        cache.set(1, "Value one");
        cache.set(2, "Value two");

        cache.set(1, "Value alt");
        cache.set(3, "Value three");

        assert_eq!(cache.get(&1), Some(&"Value alt"));
        assert_eq!(cache.get(&2), None, "key 2 should be the LRU entry");
        assert_eq!(cache.get(&3), Some(&"Value three"));
    }
}

// ==============================================
// Eviction
// ==============================================

mod eviction {
    use super::*;

    #[test]
    fn single_slot_cache_evicts_previous_key() {
        let mut cache = LruCache::new(1).unwrap();
        cache.set(1, "a");
        cache.set(2, "b");

        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.get(&2), Some(&"b"));
    }

    #[test]
    fn get_refreshes_recency() {
        let mut cache = LruCache::new(2).unwrap();
        cache.set(1, "v1");
        cache.set(2, "v2");
        cache.get(&1);
        cache.set(3, "v3");

        assert_eq!(cache.get(&1), Some(&"v1"));
        assert_eq!(cache.get(&2), None);
        assert_eq!(cache.get(&3), Some(&"v3"));
    }

    #[test]
    fn overflow_evicts_only_the_least_recent() {
        let capacity = 16;
        let mut cache = LruCache::new(capacity).unwrap();
        for k in 0..capacity {
            cache.set(k, k);
        }
        // touch every even key; odd keys age in insertion order
        for k in (0..capacity).step_by(2) {
            cache.get(&k);
        }
        cache.set(100, 100);

        assert_eq!(cache.len(), capacity);
        assert!(!cache.contains(&1));
        for k in (0..capacity).filter(|k| *k != 1) {
            assert!(cache.contains(&k), "key {k} should survive");
        }
        cache.check_invariants().unwrap();
    }

    #[test]
    fn long_churn_keeps_invariants() {
        let mut cache = LruCache::new(7).unwrap();
        for round in 0u64..1_000 {
            cache.set(round % 13, round);
            if round % 3 == 0 {
                cache.get(&(round % 5));
            }
            assert!(cache.len() <= 7);
        }
        cache.check_invariants().unwrap();
    }
}
