//! Per-actor shared state slot.
//!
//! # Write discipline
//!
//! Each slot is written by exactly one task — the actor that owns it — and
//! read by everyone (other actors during collision checks, the presentation
//! layer every frame).  Storing the fields as atomics makes those concurrent
//! reads memory-safe without a lock: readers may observe a position that is
//! one tick stale, or an x from one tick and a y from the next, and that is
//! acceptable — positions feed display and a threshold comparison, not
//! invariant-bearing bookkeeping.
//!
//! `f32` coordinates travel through `AtomicU32` as raw bit patterns.

use std::sync::atomic::{AtomicU8, AtomicU32, Ordering};

use atc_core::{ActorId, ActorState, Vec2};

/// Lock-free position/state cell for one actor.
///
/// Lives in `RunContext::slots`, indexed by `ActorId::index()`.
pub struct ActorSlot {
    id: ActorId,
    x: AtomicU32,
    y: AtomicU32,
    state: AtomicU8,
}

impl ActorSlot {
    /// A fresh slot at the spawn position, in `Approaching`.
    pub fn new(id: ActorId, spawn: Vec2) -> Self {
        Self {
            id,
            x: AtomicU32::new(spawn.x.to_bits()),
            y: AtomicU32::new(spawn.y.to_bits()),
            state: AtomicU8::new(ActorState::Approaching as u8),
        }
    }

    #[inline]
    pub fn id(&self) -> ActorId {
        self.id
    }

    /// Current position.  x and y are loaded separately, so a reader racing
    /// the owner may see a torn-but-valid pair (one component a tick ahead).
    pub fn position(&self) -> Vec2 {
        Vec2 {
            x: f32::from_bits(self.x.load(Ordering::Relaxed)),
            y: f32::from_bits(self.y.load(Ordering::Relaxed)),
        }
    }

    /// Owner-only: publish a new position.
    pub fn set_position(&self, pos: Vec2) {
        self.x.store(pos.x.to_bits(), Ordering::Relaxed);
        self.y.store(pos.y.to_bits(), Ordering::Relaxed);
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ActorState {
        let raw = self.state.load(Ordering::Acquire);
        // Only `set_state` writes this byte, so decoding cannot fail.
        ActorState::from_u8(raw).unwrap_or_else(|_| {
            debug_assert!(false, "corrupt state byte {raw}");
            ActorState::Done
        })
    }

    /// Owner-only: advance the lifecycle state.
    ///
    /// Release ordering pairs with the Acquire load in [`ActorSlot::state`]
    /// so a reader that sees `OnResource` also sees the landing position
    /// stored just before it.
    pub fn set_state(&self, state: ActorState) {
        debug_assert!(
            self.state() <= state,
            "actor {} state may only move forward",
            self.id
        );
        self.state.store(state as u8, Ordering::Release);
    }
}
