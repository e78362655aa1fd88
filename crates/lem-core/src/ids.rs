//! Strongly typed, zero-cost identifier wrappers.
//!
//! Each id is a dense index: rooms in order of first appearance in the farm,
//! agents in creation order, lanes in route-set order.

use std::fmt;

/// Newtype over a dense `u32` index.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of a room in the graph's interned name table.
    pub struct RoomId(u32);
}

typed_id! {
    /// Index of an agent in creation order.  `AgentId(0)` is the first ant
    /// released from the start room.
    pub struct AgentId(u32);
}

typed_id! {
    /// Position of a lane in the selected route set.  Lane 0 is the anchor
    /// route the selector settled on.
    pub struct LaneId(u32);
}
