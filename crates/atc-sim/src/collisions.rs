//! Append-unique collision log.
//!
//! A collision is an *unordered* pair of actors whose lateral separation
//! fell below the safety threshold while both occupied the runway.  Pairs
//! are canonicalised to `(min, max)` before insertion, so `(2, 1)` and
//! `(1, 2)` are the same record and the log can answer membership in O(1)
//! via an `FxHashSet` instead of rescanning a list.
//!
//! Two actors landing simultaneously may both detect the same conflict and
//! race to record it, so the log carries its own mutex — independent of the
//! runway lock, which is absent in exactly the runs that produce collisions.

use parking_lot::Mutex;
use rustc_hash::FxHashSet;

use atc_core::ActorId;

/// Canonical unordered-pair encoding: smaller id first.
#[inline]
pub fn canonical_pair(a: ActorId, b: ActorId) -> (ActorId, ActorId) {
    if a <= b { (a, b) } else { (b, a) }
}

struct LogInner {
    seen: FxHashSet<(ActorId, ActorId)>,
    /// Insertion order, for display and tests.
    pairs: Vec<(ActorId, ActorId)>,
}

/// The set of collisions recorded during one run.
///
/// Append-only within a run; a fresh `RunContext` starts with a fresh log.
pub struct CollisionLog {
    inner: Mutex<LogInner>,
}

impl CollisionLog {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(LogInner {
                seen: FxHashSet::default(),
                pairs: Vec::new(),
            }),
        }
    }

    /// Record the unordered pair `(a, b)`.
    ///
    /// Returns `true` if the pair was new — the caller announces the
    /// collision (banner, cue) only on a fresh record, so a pair detected
    /// from both ends is announced once.
    pub fn record(&self, a: ActorId, b: ActorId) -> bool {
        debug_assert_ne!(a, b, "an actor cannot collide with itself");
        let pair = canonical_pair(a, b);
        let mut inner = self.inner.lock();
        if !inner.seen.insert(pair) {
            return false;
        }
        inner.pairs.push(pair);
        true
    }

    /// Membership check for an unordered pair.
    pub fn contains(&self, a: ActorId, b: ActorId) -> bool {
        self.inner.lock().seen.contains(&canonical_pair(a, b))
    }

    /// All recorded pairs, in first-detection order.
    pub fn pairs(&self) -> Vec<(ActorId, ActorId)> {
        self.inner.lock().pairs.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().pairs.is_empty()
    }
}

impl Default for CollisionLog {
    fn default() -> Self {
        Self::new()
    }
}
