#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::lru::LruCache;

// Fuzz arbitrary operation sequences on LruCache
//
// First byte picks the capacity; the rest is (op, key) pairs over a small
// keyspace so hits, updates and evictions all happen frequently.
fuzz_target!(|data: &[u8]| {
    let Some((&cap_byte, rest)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(cap_byte % 16) + 1;
    let mut cache: LruCache<u8, u32> = LruCache::new(capacity).unwrap();

    for (step, chunk) in rest.chunks_exact(2).enumerate() {
        let op = chunk[0] % 6;
        let key = chunk[1] % 32;
        let value = step as u32;

        match op {
            0 => {
                let was_present = cache.contains(&key);
                let old_len = cache.len();
                let replaced = cache.set(key, value);
                assert_eq!(replaced.is_some(), was_present);
                if was_present {
                    assert_eq!(cache.len(), old_len);
                }
                assert_eq!(cache.peek(&key), Some(&value));
                assert_eq!(cache.iter().next().map(|(k, _)| *k), Some(key));
            }
            1 => {
                let old_len = cache.len();
                if cache.get(&key).is_some() {
                    assert_eq!(cache.iter().next().map(|(k, _)| *k), Some(key));
                }
                assert_eq!(cache.len(), old_len);
            }
            2 => {
                if cache.remove(&key).is_some() {
                    assert!(!cache.contains(&key));
                }
            }
            3 => {
                let expected = cache.peek_lru().map(|(k, v)| (*k, *v));
                assert_eq!(cache.pop_lru(), expected);
            }
            4 => {
                let _ = cache.peek(&key);
            }
            5 => {
                if key == 0 {
                    cache.clear();
                    assert!(cache.is_empty());
                }
            }
            _ => unreachable!(),
        }

        assert!(cache.len() <= capacity);
        cache.check_invariants().unwrap();
    }
});
