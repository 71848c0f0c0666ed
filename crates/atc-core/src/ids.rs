//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into slot `Vec`s, but callers should prefer the `.index()`
//! helper where an index is meant.
//!
//! `ActorId`s are 1-based (the coordinator numbers a fleet 1..=N), so
//! `.index()` subtracts one.  `RunId` is the per-run generation token: a task
//! that observes a live generation different from the one it captured at
//! spawn belongs to a superseded run and must stop mutating state.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
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
    /// A simulated airplane, numbered 1..=fleet_size within a run.
    pub struct ActorId(u32);
}

typed_id! {
    /// Monotone run-generation token.  Bumped by the coordinator on every
    /// `start_run`; never reused within a process.
    pub struct RunId(u64);
}

impl ActorId {
    /// Slot index for this actor (IDs are 1-based, slots are 0-based).
    #[inline(always)]
    pub fn index(self) -> usize {
        debug_assert!(self.0 >= 1, "ActorId 0 is not a valid fleet member");
        (self.0 - 1) as usize
    }

    /// The actor occupying slot `index` (inverse of [`ActorId::index`]).
    #[inline(always)]
    pub fn from_index(index: usize) -> ActorId {
        ActorId(index as u32 + 1)
    }
}

impl RunId {
    /// The generation following this one.
    #[inline]
    pub fn next(self) -> RunId {
        RunId(self.0 + 1)
    }
}
