//! `atc-core` — foundational types for the `rust_atc` runway simulation.
//!
//! This crate is a dependency of every other `atc-*` crate.  It intentionally
//! has no `atc-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                         |
//! |-------------|--------------------------------------------------|
//! | [`ids`]     | `ActorId`, `RunId`                               |
//! | [`vec2`]    | `Vec2`, lateral separation                       |
//! | [`state`]   | `ActorState` lifecycle enum                      |
//! | [`config`]  | `RunConfig` and its validation                   |
//! | [`error`]   | `CoreError`, `CoreResult`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod ids;
pub mod state;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::RunConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{ActorId, RunId};
pub use state::ActorState;
pub use vec2::Vec2;
