//! headless — terminal stand-in for the windowed presentation layer.
//!
//! Runs the reference scenario twice — once unguarded, once guarded — and
//! polls the tower's snapshot at the same 20 Hz cadence a renderer would,
//! printing status lines and collision records as they change.  The first
//! run ends with "COLLISION!" on the banner; the second ends with a clean
//! collision log.

use std::thread;
use std::time::Duration;

use anyhow::Result;

use atc_core::{ActorState, RunConfig};
use atc_sim::{Policy, Snapshot, Tower};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Renderer cadence: 20 Hz, matching the reference scene's frame delay.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Reference geometry at 4× speed so both runs fit in ~30 s of terminal time.
fn demo_config() -> RunConfig {
    RunConfig {
        tick_interval: Duration::from_millis(8),
        start_interval: Duration::from_millis(250),
        ..RunConfig::default()
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Print whatever changed since the previous frame.
fn render_delta(prev: &Snapshot, snap: &Snapshot) {
    for (id, text) in &snap.messages {
        let old = prev.messages.iter().find(|(p, _)| p == id).map(|(_, t)| t);
        if old != Some(text) {
            println!("  {text}");
        }
    }
    if snap.collisions.len() > prev.collisions.len() {
        for &(a, b) in &snap.collisions[prev.collisions.len()..] {
            println!("  !! {} — airplanes {} and {}", snap.banner, a.0, b.0);
        }
    }
}

fn run_policy(tower: &Tower, policy: Policy) -> Result<()> {
    println!("── {policy} run ──");
    tower.start_run(policy)?;

    let mut prev = tower.snapshot();
    loop {
        thread::sleep(POLL_INTERVAL);
        let snap = tower.snapshot();
        render_delta(&prev, &snap);
        if snap.actors.iter().all(|a| a.state == ActorState::Done) {
            break;
        }
        prev = snap;
    }
    tower.join_current();

    let final_snap = tower.snapshot();
    if final_snap.collisions.is_empty() {
        println!("  runway log clean: no collisions\n");
    } else {
        println!("  {} collision(s) recorded\n", final_snap.collisions.len());
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let tower = Tower::new(demo_config())?;
    run_policy(&tower, Policy::Unguarded)?;
    run_policy(&tower, Policy::Guarded)?;
    Ok(())
}
