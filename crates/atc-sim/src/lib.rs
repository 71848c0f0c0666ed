//! `atc-sim` — the coordination engine of the rust_atc runway simulation.
//!
//! # The experiment
//!
//! A fleet of airplanes contends for one runway.  Each airplane is an
//! independently scheduled OS thread running a fixed lifecycle
//! (approach → descend → occupy runway → vacate → done).  Two policies are
//! contrasted:
//!
//! - [`Policy::Unguarded`] — every airplane lands whenever its own schedule
//!   says so.  Descents genuinely overlap in real time, so two airplanes can
//!   be on the runway within a wingspan of each other: a **collision**.
//! - [`Policy::Guarded`] — each airplane holds the [`TicketLock`] from the
//!   start of its descent until it has rolled off the field.  Occupancy
//!   windows are pairwise non-overlapping by construction, so the collision
//!   log stays empty.
//!
//! The detector is the observable consequence of the missing mutual
//! exclusion — the lock's correctness criterion is exactly "no collisions
//! are ever recorded under the guarded policy".
//!
//! # What lives here
//!
//! | Module          | Contents                                            |
//! |-----------------|-----------------------------------------------------|
//! | [`context`]     | `RunContext`, `Policy` — all state of one run       |
//! | [`slot`]        | `ActorSlot` — lock-free per-actor position/state    |
//! | [`board`]       | `MessageBoard` — per-actor status strings + banner  |
//! | [`collisions`]  | `CollisionLog` — append-unique unordered pairs      |
//! | [`actor`]       | the lifecycle task body                             |
//! | [`coordinator`] | `Tower` — spawns runs, swaps contexts               |
//! | [`cues`]        | `CueSink` — fire-and-forget audio-cue callbacks     |
//! | [`snapshot`]    | `Snapshot` — non-blocking read surface for renderers|
//! | [`error`]       | `SimError`, `SimResult`                             |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use atc_core::RunConfig;
//! use atc_sim::{Policy, Tower};
//!
//! let tower = Tower::new(RunConfig::default())?;
//! tower.start_run(Policy::Unguarded)?;
//! // renderer loop:
//! let snap = tower.snapshot();
//! for actor in &snap.actors {
//!     println!("{} at {} ({})", actor.id, actor.position, actor.state);
//! }
//! tower.join_current();
//! assert!(!snap.collisions.is_empty() || tower.snapshot().collisions.is_empty());
//! ```
//!
//! [`TicketLock`]: atc_sync::TicketLock

pub mod actor;
pub mod board;
pub mod collisions;
pub mod context;
pub mod coordinator;
pub mod cues;
pub mod error;
pub mod slot;
pub mod snapshot;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use board::MessageBoard;
pub use collisions::CollisionLog;
pub use context::{Policy, RunContext};
pub use coordinator::Tower;
pub use cues::{CueSink, NoopCues};
pub use error::{SimError, SimResult};
pub use slot::ActorSlot;
pub use snapshot::{ActorView, Snapshot};
