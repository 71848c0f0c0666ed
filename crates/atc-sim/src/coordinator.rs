//! `Tower` — the run coordinator.
//!
//! # Run replacement
//!
//! `start_run` bumps the live generation counter, builds a completely fresh
//! [`RunContext`], swaps it in under a short write lock, and spawns one
//! thread per actor.  It returns immediately — the presentation layer keeps
//! polling [`Tower::snapshot`] while the fleet flies.
//!
//! Threads from a superseded run are not interrupted; they notice the
//! generation bump at their next check and exit on their own.  A task blocked
//! inside `acquire` is not force-woken — each guarded run gets its own
//! [`TicketLock`], so a stale blocked task waits only on stale holders, all
//! of which release promptly, and it can never contend with the new run.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, JoinHandle};

use log::info;
use parking_lot::{Mutex, RwLock};

use atc_core::{ActorId, RunConfig, RunId};
use atc_sync::{ResourceLock, TicketLock};

use crate::actor::ActorTask;
use crate::{CueSink, NoopCues, Policy, RunContext, SimResult, Snapshot};

/// Owns the current [`RunContext`] and spawns actor fleets on demand.
///
/// The command surface is exactly two operations — an unguarded run and a
/// guarded run — both via [`Tower::start_run`].
pub struct Tower {
    config: RunConfig,
    cues: Arc<dyn CueSink>,
    /// The live generation.  Matches `current.read().run` except for the
    /// instant inside `start_run` between the bump and the swap — tasks
    /// treat any mismatch with their own token as "stop".
    live: Arc<AtomicU64>,
    current: RwLock<Arc<RunContext>>,
    /// Join handles for the current run only; an old run's handles are
    /// dropped (detaching its threads) when a new run starts.
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl Tower {
    /// A tower with no cue sink.  Validates the configuration up front.
    pub fn new(config: RunConfig) -> SimResult<Self> {
        Self::with_cues(config, Arc::new(NoopCues))
    }

    /// A tower that forwards landing/collision cues to `cues`.
    pub fn with_cues(config: RunConfig, cues: Arc<dyn CueSink>) -> SimResult<Self> {
        config.validate()?;
        let idle = Arc::new(RunContext::idle(config.clone()));
        Ok(Self {
            config,
            cues,
            live: Arc::new(AtomicU64::new(0)),
            current: RwLock::new(idle),
            handles: Mutex::new(Vec::new()),
        })
    }

    /// Start a fresh run under `policy`, superseding any run in progress.
    ///
    /// Returns the new run's generation token as soon as all actor threads
    /// are spawned; it does not wait for them to finish.
    pub fn start_run(&self, policy: Policy) -> SimResult<RunId> {
        let run = RunId(self.live.fetch_add(1, Ordering::AcqRel) + 1);
        let ctx = Arc::new(RunContext::new(run, policy, self.config.clone()));

        // One lock per guarded run: stale tasks can never block a new fleet.
        let lock: Option<Arc<dyn ResourceLock>> = match policy {
            Policy::Guarded => Some(Arc::new(TicketLock::new(self.config.runway_capacity))),
            Policy::Unguarded => None,
        };

        *self.current.write() = Arc::clone(&ctx);

        let mut handles = self.handles.lock();
        // Detach the previous fleet; its tasks self-cancel via the token.
        handles.clear();
        for i in 0..self.config.fleet_size {
            let id = ActorId::from_index(i as usize);
            let task = ActorTask {
                id,
                ctx: Arc::clone(&ctx),
                live: Arc::clone(&self.live),
                lock: lock.clone(),
                cues: Arc::clone(&self.cues),
            };
            let handle = thread::Builder::new()
                .name(format!("actor-{}", id.0))
                .spawn(move || task.fly())?;
            handles.push(handle);
        }
        info!(
            "run {run} started: {} actors, {policy} policy",
            self.config.fleet_size
        );
        Ok(run)
    }

    /// The context of the run in progress (or the idle placeholder).
    pub fn context(&self) -> Arc<RunContext> {
        Arc::clone(&self.current.read())
    }

    /// The generation token of the most recently started run.
    pub fn live_generation(&self) -> RunId {
        RunId(self.live.load(Ordering::Acquire))
    }

    /// Non-blocking read surface for the presentation layer: a consistent-
    /// enough copy of positions, states, messages, and collisions.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.context())
    }

    /// Block until every actor of the *current* run has finished.
    ///
    /// For tests and headless demos; a windowed presentation layer never
    /// calls this.  Threads from superseded runs are not waited on.
    pub fn join_current(&self) {
        let handles = std::mem::take(&mut *self.handles.lock());
        for handle in handles {
            // A panicking actor degrades to "this actor stopped"; the
            // coordinator carries on.
            if let Err(e) = handle.join() {
                log::error!("actor task panicked: {e:?}");
            }
        }
    }
}
