//! Run configuration.
//!
//! One `RunConfig` describes the geometry and timing of a whole run: how many
//! actors, where they spawn, how fast they descend and vacate, and where the
//! runway's occupancy window ends.  The defaults reproduce the reference
//! scenario (a 900×600 scene, 4 airplanes, 30 ms motion tick, 1 s arrival
//! stagger); tests shrink the time constants by orders of magnitude so a full
//! lifecycle finishes in milliseconds.

use std::time::Duration;

use crate::{CoreError, CoreResult};

/// Geometry and timing for one simulation run.
///
/// All distances are in scene pixels; the core never interprets them beyond
/// arithmetic.  Cheap to clone — every spawned task gets a copy.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Number of actors spawned per run, numbered 1..=fleet_size.
    pub fleet_size: u32,

    /// Permit count of the runway lock under the guarded policy.  A single
    /// runway means 1, but the lock itself treats this as configuration.
    pub runway_capacity: u32,

    /// Gap between consecutive actors' start times.  Actor `i` (1-based)
    /// begins descending `(i − 1) × start_interval` after run start, so
    /// arrivals are staggered, never simultaneous.
    pub start_interval: Duration,

    /// Wall-clock pause between position steps while descending or vacating.
    /// These ticks (plus the start offset and a contended `acquire`) are the
    /// only points an actor task blocks.
    pub tick_interval: Duration,

    /// Where every actor spawns (top-right, off-screen).
    pub spawn_x: f32,
    pub spawn_y: f32,

    /// Per-tick position delta on the glide path.  `descent_dy` must be
    /// positive: y grows downward toward the runway.
    pub descent_dx: f32,
    pub descent_dy: f32,

    /// Altitude (y) at which the actor counts as on the runway.
    pub target_altitude: f32,

    /// Per-tick leftward step while rolling off the field.  Must be positive;
    /// applied as a subtraction from x.
    pub vacate_step: f32,

    /// x below which a vacating actor has left the field and becomes `Done`.
    pub exit_x: f32,

    /// Minimum lateral separation between two grounded actors.  Anything
    /// closer is a collision.  Equals the rendered actor width.
    pub safety_separation: f32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            fleet_size: 4,
            runway_capacity: 1,
            start_interval: Duration::from_secs(1),
            tick_interval: Duration::from_millis(30),
            spawn_x: 700.0,
            spawn_y: -100.0,
            descent_dx: -1.0,
            descent_dy: 2.0,
            target_altitude: 470.0,
            vacate_step: 3.0,
            exit_x: -150.0,
            safety_separation: 190.0,
        }
    }
}

impl RunConfig {
    /// Check internal consistency.  Call once before starting a run;
    /// a config that validates cannot stall an actor task.
    pub fn validate(&self) -> CoreResult<()> {
        if self.fleet_size == 0 {
            return Err(CoreError::Config("fleet_size must be at least 1".into()));
        }
        if self.runway_capacity == 0 {
            return Err(CoreError::Config("runway_capacity must be at least 1".into()));
        }
        if self.descent_dy <= 0.0 {
            return Err(CoreError::Config(
                "descent_dy must be positive (y grows toward the runway)".into(),
            ));
        }
        if self.vacate_step <= 0.0 {
            return Err(CoreError::Config("vacate_step must be positive".into()));
        }
        if self.target_altitude <= self.spawn_y {
            return Err(CoreError::Config(
                "target_altitude must lie below the spawn point".into(),
            ));
        }
        if self.exit_x >= self.spawn_x {
            return Err(CoreError::Config(
                "exit_x must lie left of the spawn point".into(),
            ));
        }
        if self.safety_separation <= 0.0 {
            return Err(CoreError::Config("safety_separation must be positive".into()));
        }
        Ok(())
    }

    /// Start offset for a 1-based actor id: `(id − 1) × start_interval`.
    #[inline]
    pub fn start_offset(&self, id_index: usize) -> Duration {
        self.start_interval * id_index as u32
    }

    /// Ticks a descent takes, rounding up.  Useful for sizing test timeouts.
    pub fn descent_ticks(&self) -> u64 {
        let drop = (self.target_altitude - self.spawn_y).max(0.0);
        (drop / self.descent_dy).ceil() as u64
    }
}
