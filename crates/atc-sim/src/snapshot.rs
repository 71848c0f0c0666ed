//! Read surface for the presentation layer.
//!
//! A renderer polls [`Tower::snapshot`][crate::Tower::snapshot] once per
//! frame (~20 Hz in the reference scene) and draws from the returned value.
//! Capture never blocks an actor task: positions and states come from the
//! lock-free slots, and each message slot is held only long enough to clone
//! one string.  The copy is "consistent enough" — fields may straddle a
//! tick boundary, which is invisible at display cadence.

use atc_core::{ActorId, ActorState, RunId, Vec2};

use crate::{Policy, RunContext};

/// One actor as a renderer sees it.
///
/// `Done` actors are included; filter on [`ActorState::visible`] to skip
/// them when drawing.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorView {
    pub id: ActorId,
    pub position: Vec2,
    pub state: ActorState,
}

/// A point-in-time copy of everything the presentation layer may draw.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub run: RunId,
    pub policy: Policy,
    pub actors: Vec<ActorView>,
    /// Non-empty status lines, in actor order.
    pub messages: Vec<(ActorId, String)>,
    /// The global collision banner ("" until a collision is announced).
    pub banner: String,
    /// Recorded collision pairs, in first-detection order.
    pub collisions: Vec<(ActorId, ActorId)>,
}

impl Snapshot {
    /// Copy the readable state out of `ctx`.
    pub fn capture(ctx: &RunContext) -> Snapshot {
        let actors = ctx
            .slots
            .iter()
            .map(|slot| ActorView {
                id: slot.id(),
                position: slot.position(),
                state: slot.state(),
            })
            .collect();
        Snapshot {
            run: ctx.run,
            policy: ctx.policy,
            actors,
            messages: ctx.board.messages(),
            banner: ctx.board.banner(),
            collisions: ctx.collisions.pairs(),
        }
    }

    /// Views of the actors a renderer should draw (everything but `Done`).
    pub fn visible_actors(&self) -> impl Iterator<Item = &ActorView> {
        self.actors.iter().filter(|a| a.state.visible())
    }
}
