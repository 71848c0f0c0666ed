//! `RunContext` — the whole state of one simulation run.
//!
//! # Replacement semantics
//!
//! A run never mutates a previous run's state: starting a run builds a
//! completely fresh `RunContext` (new slots, empty board, empty collision
//! log) and swaps it in behind the coordinator's handle.  Tasks from a
//! superseded run still hold an `Arc` to *their* context — they can finish
//! touching it harmlessly, and the generation token tells them to stop
//! doing even that (see [`actor`][crate::actor]).  There are no
//! module-level globals anywhere; everything a task needs travels in here.

use atc_core::{ActorId, RunConfig, RunId, Vec2};

use crate::{ActorSlot, CollisionLog, MessageBoard};

/// Which synchronization policy a run demonstrates.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Policy {
    /// No runway lock: descents overlap freely and collisions are reachable.
    Unguarded,
    /// Runway lock held from pre-descent to post-vacate: occupancy windows
    /// never overlap and the collision log provably stays empty.
    Guarded,
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Policy::Unguarded => "unguarded",
            Policy::Guarded => "guarded",
        })
    }
}

/// All shared state of one run.  Immutable in structure after construction;
/// interior mutability lives in the slots, the board, and the log.
pub struct RunContext {
    /// Generation token for this run.
    pub run: RunId,
    pub policy: Policy,
    pub config: RunConfig,
    /// One slot per actor, index = `ActorId::index()`.  Slots persist until
    /// the next run replaces the context — a `Done` actor keeps its slot.
    pub slots: Vec<ActorSlot>,
    pub board: MessageBoard,
    pub collisions: CollisionLog,
}

impl RunContext {
    /// Build the state for a fresh run: every actor at the spawn point in
    /// `Approaching`, with its "wants to land" line already on the board.
    pub fn new(run: RunId, policy: Policy, config: RunConfig) -> Self {
        let spawn = Vec2::new(config.spawn_x, config.spawn_y);
        let slots: Vec<ActorSlot> = (0..config.fleet_size)
            .map(|i| ActorSlot::new(ActorId::from_index(i as usize), spawn))
            .collect();
        let board = MessageBoard::new(config.fleet_size);
        for slot in &slots {
            let id = slot.id();
            board.publish(id, format!("Airplane {} wants to land", id.0));
        }
        Self {
            run,
            policy,
            config,
            slots,
            board,
            collisions: CollisionLog::new(),
        }
    }

    /// The pre-first-run placeholder: generation 0, no actors.
    pub fn idle(config: RunConfig) -> Self {
        Self {
            run: RunId(0),
            policy: Policy::Unguarded,
            config,
            slots: Vec::new(),
            board: MessageBoard::new(0),
            collisions: CollisionLog::new(),
        }
    }

    /// Slot lookup by id.  Panic-free: returns `None` for ids outside the
    /// fleet (e.g. `ActorId::INVALID`).
    pub fn slot(&self, id: ActorId) -> Option<&ActorSlot> {
        self.slots.iter().find(|s| s.id() == id)
    }
}
