#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::ds::RecencyOrder;

// Fuzz arbitrary operation sequences on RecencyOrder
//
// Interleaves insert_as_mru, promote_to_mru, update_value, evict_lru,
// detach and clear, validating the link invariants after every step.
fuzz_target!(|data: &[u8]| {
    let mut order: RecencyOrder<u32> = RecencyOrder::new();
    let mut all_ids = Vec::new();

    for chunk in data.chunks_exact(2) {
        let op = chunk[0] % 7;
        let value = u32::from(chunk[1]);

        match op {
            0 => {
                let id = order.insert_as_mru(value);
                all_ids.push(id);
                assert_eq!(order.mru_id(), Some(id));
                assert_eq!(order.get(id), Some(&value));
            }
            1 => {
                if !all_ids.is_empty() {
                    let id = all_ids[value as usize % all_ids.len()];
                    if order.promote_to_mru(id) {
                        assert_eq!(order.mru_id(), Some(id));
                    } else {
                        assert!(!order.contains(id));
                    }
                }
            }
            2 => {
                if !all_ids.is_empty() {
                    let id = all_ids[value as usize % all_ids.len()];
                    let old_len = order.len();
                    if order.update_value(id, value).is_some() {
                        assert_eq!(order.mru(), Some(&value));
                    }
                    assert_eq!(order.len(), old_len);
                }
            }
            3 => {
                let old_len = order.len();
                let lru_id = order.lru_id();
                match order.evict_lru() {
                    Some(_) => {
                        assert_eq!(order.len(), old_len - 1);
                        if let Some(id) = lru_id {
                            assert!(!order.contains(id));
                            all_ids.retain(|x| *x != id);
                        }
                    }
                    None => assert_eq!(old_len, 0),
                }
            }
            4 => {
                if !all_ids.is_empty() {
                    let pos = value as usize % all_ids.len();
                    let id = all_ids[pos];
                    let old_len = order.len();
                    if order.detach(id).is_some() {
                        assert_eq!(order.len(), old_len - 1);
                        all_ids.swap_remove(pos);
                    }
                }
            }
            5 => {
                let walked = order.iter().count();
                assert_eq!(walked, order.len());
            }
            6 => {
                order.clear();
                all_ids.clear();
                assert!(order.is_empty());
                assert_eq!(order.mru_id(), None);
                assert_eq!(order.lru_id(), None);
            }
            _ => unreachable!(),
        }

        order.check_invariants().unwrap();
    }
});
