//! `atc-sync` — the counting lock that serializes runway occupancy.
//!
//! # Why a hand-rolled lock?
//!
//! The simulation needs a counting lock with two properties the std/`parking_lot`
//! mutexes don't promise together:
//!
//! 1. **Configurable capacity** — the runway has capacity 1 today, but the
//!    primitive treats that as configuration, not a constant.
//! 2. **Strict FIFO admission** — the first task to block is the first
//!    admitted, so a queued actor can never starve behind later arrivals.
//!
//! [`TicketLock`] provides both with a ticket counter guarded by a
//! `parking_lot::Mutex`/`Condvar` pair.  Actors see it only through the
//! [`ResourceLock`] capability trait, so the guarded/unguarded policy reduces
//! to `Option<Arc<dyn ResourceLock>>` at the call site.

pub mod ticket;


pub use ticket::{ResourceLock, TicketLock};
