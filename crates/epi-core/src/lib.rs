//! `epi-core` — foundational types for the `rust_epi` epidemic engine.
//!
//! This crate is a dependency of every other `epi-*` crate.  It intentionally
//! has no `epi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`geo`]         | `Position`, squared Euclidean distance                |
//! | [`time`]        | `Tick`                                                |
//! | [`stage`]       | `Stage`, `TransitionKind`, `StageCounts`              |
//! | [`config`]      | `EpidemicConfig`, `TransitionParams`                  |
//! | [`palette`]     | `StagePalette` (stage → label / color)                |
//! | [`rng`]         | `SimRng` (one per engine)                             |
//! | [`error`]       | `EpiError`, `EpiResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod palette;
pub mod rng;
pub mod stage;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{EpidemicConfig, TransitionParams};
pub use error::{EpiError, EpiResult};
pub use geo::Position;
pub use ids::AgentId;
pub use palette::{PaletteEntry, StagePalette};
pub use rng::SimRng;
pub use stage::{Stage, StageCounts, TransitionKind};
pub use time::Tick;
