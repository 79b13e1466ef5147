#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::ds::SlotArena;

// Fuzz arbitrary insert/remove sequences on SlotArena
//
// Properties:
// - live ids stay valid and keep their values until removed
// - len tracks the number of live ids
// - removed ids are reported absent until their slot is reused
fuzz_target!(|data: &[u8]| {
    let mut arena: SlotArena<u32> = SlotArena::new();
    let mut live = Vec::new();

    for chunk in data.chunks_exact(2) {
        let value = u32::from(chunk[1]);

        match chunk[0] % 3 {
            0 => {
                let id = arena.insert(value);
                assert!(!live.iter().any(|(other, _)| *other == id));
                live.push((id, value));
            }
            1 => {
                if !live.is_empty() {
                    let pos = value as usize % live.len();
                    let (id, expected) = live.swap_remove(pos);
                    assert_eq!(arena.remove(id), Some(expected));
                    assert!(!arena.contains(id));
                    assert_eq!(arena.remove(id), None);
                }
            }
            2 => {
                arena.clear();
                live.clear();
            }
            _ => unreachable!(),
        }

        assert_eq!(arena.len(), live.len());
        for (id, expected) in &live {
            assert_eq!(arena.get(*id), Some(expected));
        }
    }
});
