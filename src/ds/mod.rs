pub mod recency_order;
pub mod slot_arena;

pub use recency_order::RecencyOrder;
pub use slot_arena::{SlotArena, SlotId};
