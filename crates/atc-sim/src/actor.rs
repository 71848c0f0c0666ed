//! The actor lifecycle task.
//!
//! # State machine
//!
//! ```text
//! Approaching ── start offset elapses, lock acquired (guarded) ──▶ Descending
//! Descending  ── target altitude reached ────────────────────────▶ OnResource
//! OnResource  ── collision check done (immediate) ───────────────▶ Vacating
//! Vacating    ── exit threshold crossed ─────────────────────────▶ Done
//! ```
//!
//! Every transition is performed by the actor's own thread; the only blocking
//! points are the start-offset sleep, a contended `acquire`, and the motion
//! ticks.  Under the guarded policy the lock is held from before the
//! `Approaching → Descending` transition until entry into `Done`, so the
//! whole resource-occupancy span is inside the critical section.
//!
//! # Cancellation
//!
//! The task captures its run's generation at spawn and compares it against
//! the coordinator's live generation before the lock acquisition and before
//! every state mutation.  A mismatch means the run was superseded: the task
//! releases the lock if it holds it and exits silently.  This is a normal
//! shutdown path, logged at debug level, not an error.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use log::debug;

use atc_core::{ActorId, ActorState};
use atc_sync::ResourceLock;

use crate::{CueSink, RunContext};
use crate::collisions::canonical_pair;

/// Everything one actor thread needs.  Built by the coordinator, consumed by
/// [`ActorTask::fly`] on the spawned thread.
pub struct ActorTask {
    pub id: ActorId,
    /// This task's run state.  Never the current context per se — just the
    /// one that existed when the task was spawned.
    pub ctx: Arc<RunContext>,
    /// The coordinator's live generation counter, shared across runs.
    pub live: Arc<AtomicU64>,
    /// `Some` under the guarded policy, `None` otherwise.
    pub lock: Option<Arc<dyn ResourceLock>>,
    pub cues: Arc<dyn CueSink>,
}

impl ActorTask {
    /// `true` once the coordinator has started a newer run.
    #[inline]
    fn stale(&self) -> bool {
        self.live.load(Ordering::Acquire) != self.ctx.run.0
    }

    /// Release the lock (if held) and report whether the task should exit.
    fn bail_if_stale(&self, holding: bool) -> bool {
        if !self.stale() {
            return false;
        }
        debug!("actor {}: run {} superseded, exiting", self.id, self.ctx.run);
        if holding {
            if let Some(lock) = &self.lock {
                lock.release();
            }
        }
        true
    }

    /// Run the full lifecycle.  Consumes the task; the thread exits when
    /// this returns.
    pub fn fly(self) {
        let cfg = self.ctx.config.clone();
        let slot = &self.ctx.slots[self.id.index()];

        // ── Approaching ───────────────────────────────────────────────────
        thread::sleep(cfg.start_offset(self.id.index()));
        if self.bail_if_stale(false) {
            return;
        }
        if let Some(lock) = &self.lock {
            lock.acquire();
        }
        let holding = self.lock.is_some();
        if self.bail_if_stale(holding) {
            return;
        }

        // ── Approaching → Descending ──────────────────────────────────────
        slot.set_state(ActorState::Descending);
        self.ctx
            .board
            .publish(self.id, format!("Airplane {} is landing...", self.id.0));
        self.cues.on_landing_start(self.id);

        let mut pos = slot.position();
        while pos.y < cfg.target_altitude {
            thread::sleep(cfg.tick_interval);
            if self.bail_if_stale(holding) {
                return;
            }
            pos.x += cfg.descent_dx;
            pos.y = (pos.y + cfg.descent_dy).min(cfg.target_altitude);
            slot.set_position(pos);
        }

        // ── Descending → OnResource ───────────────────────────────────────
        slot.set_state(ActorState::OnResource);
        self.check_collisions();
        self.ctx
            .board
            .publish(self.id, format!("Airplane {} has landed!", self.id.0));

        // ── OnResource → Vacating (immediate, unconditional) ──────────────
        slot.set_state(ActorState::Vacating);
        while pos.x > cfg.exit_x {
            thread::sleep(cfg.tick_interval);
            if self.bail_if_stale(holding) {
                return;
            }
            pos.x -= cfg.vacate_step;
            slot.set_position(pos);
        }

        // ── Vacating → Done ───────────────────────────────────────────────
        slot.set_state(ActorState::Done);
        self.ctx.board.clear(self.id);
        if let Some(lock) = &self.lock {
            lock.release();
        }
        debug!("actor {}: done", self.id);
    }

    /// The collision check run once at the `OnResource` transition.
    ///
    /// Scans every other actor still on the ground (on-resource or vacating;
    /// `Done` actors have left the field and are excluded).  The first pair
    /// that is both within the safety threshold and new to the log is
    /// recorded and announced, then the scan stops — one fresh collision
    /// record per landing, by design.  The check is never re-evaluated
    /// later, so overlap that first arises during vacating goes unflagged;
    /// that limitation is inherited deliberately.
    fn check_collisions(&self) {
        let cfg = &self.ctx.config;
        let own_pos = self.ctx.slots[self.id.index()].position();

        for other in &self.ctx.slots {
            if other.id() == self.id || !other.state().on_ground() {
                continue;
            }
            let separation = own_pos.lateral_separation(other.position());
            if separation < cfg.safety_separation
                && self.ctx.collisions.record(self.id, other.id())
            {
                let pair = canonical_pair(self.id, other.id());
                debug!(
                    "collision: {} and {} separated by {:.1} (< {:.1})",
                    pair.0, pair.1, separation, cfg.safety_separation
                );
                self.ctx.board.set_banner("COLLISION!");
                self.cues.on_collision_detected(pair);
                break;
            }
        }
    }
}
