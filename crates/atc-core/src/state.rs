//! Actor lifecycle states.
//!
//! # Design
//!
//! The lifecycle is a straight line — every actor visits exactly the
//! subsequence
//!
//!   Approaching → Descending → OnResource → Vacating → Done
//!
//! with no skips, repeats, or back-edges.  Transitions are performed only by
//! the actor's own task, so within one actor the sequence is trivially
//! ordered; the enum's discriminants encode that order so monotonicity can be
//! asserted with a plain `<` comparison.
//!
//! The `u8` repr exists because live state is published through an `AtomicU8`
//! slot readable by the presentation layer without locking.

use crate::{CoreError, CoreResult};

/// Where an actor is in its landing lifecycle.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ActorState {
    /// Spawned, waiting out its start offset (and the lock, under the
    /// guarded policy).
    Approaching = 0,
    /// Moving along the glide path toward the target altitude.  The
    /// resource-occupying span begins here.
    Descending = 1,
    /// Reached the target altitude.  Momentary: the collision check runs
    /// here, then the actor immediately starts vacating.
    OnResource = 2,
    /// Rolling laterally off the runway toward the exit threshold.
    Vacating = 3,
    /// Past the exit threshold.  Terminal; the task has exited but the
    /// actor's slot persists until the next run replaces the context.
    Done = 4,
}

impl ActorState {
    /// All states, in lifecycle order.
    pub const ALL: [ActorState; 5] = [
        ActorState::Approaching,
        ActorState::Descending,
        ActorState::OnResource,
        ActorState::Vacating,
        ActorState::Done,
    ];

    /// Decode a `u8` read back from an atomic slot.
    pub fn from_u8(raw: u8) -> CoreResult<ActorState> {
        match raw {
            0 => Ok(ActorState::Approaching),
            1 => Ok(ActorState::Descending),
            2 => Ok(ActorState::OnResource),
            3 => Ok(ActorState::Vacating),
            4 => Ok(ActorState::Done),
            other => Err(CoreError::InvalidState(other)),
        }
    }

    /// `true` once the actor has touched down and not yet left the field —
    /// the window in which it counts as occupying the runway for collision
    /// purposes.
    #[inline]
    pub fn on_ground(self) -> bool {
        matches!(self, ActorState::OnResource | ActorState::Vacating)
    }

    /// `true` for states a renderer should draw (everything but `Done`).
    #[inline]
    pub fn visible(self) -> bool {
        self != ActorState::Done
    }
}

impl std::fmt::Display for ActorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActorState::Approaching => "approaching",
            ActorState::Descending => "descending",
            ActorState::OnResource => "on-resource",
            ActorState::Vacating => "vacating",
            ActorState::Done => "done",
        };
        f.write_str(name)
    }
}
