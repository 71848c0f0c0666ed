//! `TicketLock` — a FIFO counting lock.
//!
//! # Admission rule
//!
//! Every `acquire` draws a ticket from a monotone counter.  A caller is
//! admitted only when (a) its ticket is the lowest not yet served and (b) a
//! permit is free.  Serving tickets strictly in draw order gives first-
//! blocked-first-admitted fairness: a task that queued early can never be
//! overtaken by one that arrived later, no matter how the OS schedules
//! wake-ups.
//!
//! `Condvar::notify_all` is used rather than `notify_one` because the woken
//! thread must be the current head ticket; waking an arbitrary waiter could
//! strand the head asleep.  Waiter counts here are tiny (one per actor), so
//! the thundering-herd cost is irrelevant.

use log::warn;
use parking_lot::{Condvar, Mutex};

// ── Capability trait ──────────────────────────────────────────────────────────

/// Acquire/release capability handed to actor tasks.
///
/// The simulation's guarded policy passes an `Arc<dyn ResourceLock>` to every
/// actor; the unguarded policy passes `None`.  Nothing else about the lock is
/// visible from the lifecycle code.
pub trait ResourceLock: Send + Sync {
    /// Block until a permit is held by the calling task.
    fn acquire(&self);

    /// Return a permit, waking the longest-blocked waiter (if any).
    ///
    /// Releasing when every permit is already free is a programming error:
    /// fatal in debug builds, a logged no-op in release builds.
    fn release(&self);
}

// ── TicketLock ────────────────────────────────────────────────────────────────

struct TicketState {
    /// Permits currently free.  Never exceeds `capacity`.
    permits: u32,
    /// Next ticket to hand out.
    next_ticket: u64,
    /// Lowest ticket not yet admitted.  Tickets below this have all been
    /// served, so `next_ticket - now_serving` is the current queue length.
    now_serving: u64,
}

/// A counting lock with strict FIFO admission.
///
/// Capacity is fixed at construction.  For the runway simulation it is 1,
/// which degenerates to a fair mutex without a guard object — `acquire` and
/// `release` straddle a multi-phase lifecycle, so RAII scoping would fight
/// the call sites rather than help them.
pub struct TicketLock {
    capacity: u32,
    state: Mutex<TicketState>,
    admitted: Condvar,
}

impl TicketLock {
    /// Create a lock with `capacity` permits, all initially free.
    ///
    /// # Panics
    /// Panics if `capacity` is zero (a lock nobody can ever acquire).
    pub fn new(capacity: u32) -> Self {
        assert!(capacity > 0, "TicketLock capacity must be at least 1");
        Self {
            capacity,
            state: Mutex::new(TicketState {
                permits: capacity,
                next_ticket: 0,
                now_serving: 0,
            }),
            admitted: Condvar::new(),
        }
    }

    /// Configured permit count.
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Permits currently free.  Snapshot only — may be stale by the time the
    /// caller acts on it.  Intended for tests and diagnostics.
    pub fn available(&self) -> u32 {
        self.state.lock().permits
    }

    /// Number of tasks currently blocked in `acquire`.
    pub fn queue_len(&self) -> u64 {
        let s = self.state.lock();
        // Tickets drawn but not yet admitted.
        s.next_ticket - s.now_serving
    }
}

impl ResourceLock for TicketLock {
    fn acquire(&self) {
        let mut s = self.state.lock();
        let ticket = s.next_ticket;
        s.next_ticket += 1;
        while !(s.now_serving == ticket && s.permits > 0) {
            self.admitted.wait(&mut s);
        }
        s.now_serving += 1;
        s.permits -= 1;
        // A permit may remain free; let the next ticket holder re-check.
        if s.permits > 0 {
            self.admitted.notify_all();
        }
    }

    fn release(&self) {
        let mut s = self.state.lock();
        if s.permits >= self.capacity {
            debug_assert!(false, "TicketLock released without a matching acquire");
            warn!("TicketLock released without a matching acquire; ignoring");
            return;
        }
        s.permits += 1;
        self.admitted.notify_all();
    }
}
