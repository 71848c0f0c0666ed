//! Audio-cue callbacks.
//!
//! The presentation layer plays a sound when a descent begins and another
//! when a collision is detected.  The core fires these as synchronous
//! fire-and-forget notifications from inside the actor task, so a sink
//! implementation **must not block** — queue the cue and return.

use atc_core::ActorId;

/// Callbacks invoked by actor tasks at audible moments.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Sinks are shared across all tasks of a
/// run (`Arc<dyn CueSink>`), hence the `Send + Sync` bound.
pub trait CueSink: Send + Sync {
    /// An actor has begun its descent.
    fn on_landing_start(&self, _actor: ActorId) {}

    /// A new collision pair was recorded.  Called once per unique pair —
    /// the `(min, max)` canonical encoding.
    fn on_collision_detected(&self, _pair: (ActorId, ActorId)) {}
}

/// A [`CueSink`] that does nothing.  The default for headless runs.
pub struct NoopCues;

impl CueSink for NoopCues {}
