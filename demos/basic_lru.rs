use lrukit::prelude::*;

fn main() -> Result<(), ConfigError> {
    let mut cache: LruCache<u32, String> = LruCache::new(2)?;

    cache.set(1, "alpha".to_string());
    cache.set(2, "beta".to_string());

    if let Some(value) = cache.get(&1) {
        println!("hit 1: {}", value);
    }

    cache.set(3, "gamma".to_string());

    println!("contains 2? {}", cache.contains(&2));
    println!("{:?}", cache);
    Ok(())
}

// Expected output:
// hit 1: alpha
// contains 2? false
// LruCache { capacity: 2, len: 2, mru_to_lru: [(3, "gamma"), (1, "alpha")] }
//
// Explanation: capacity=2; after get(&1), key 1 is MRU and key 2 is LRU.
// Setting key 3 evicts key 2, so contains(2) is false.
