//! `epi-sim` — tick orchestrator for the rust_epi engine.
//!
//! # Tick pipeline
//!
//! ```text
//! loop (until the caller stops pulling):
//!   ① Contagion  — infectious × susceptible pairs within the radius draw
//!                  Bernoulli trials; winners become Infected.
//!   ② Progress   — StageTransitionModel moves agents whose elapsed ticks
//!                  exceed their sampled threshold one stage forward.
//!   ③ Mobility   — every non-immobilized agent takes a uniform random step.
//!   ④ Yield      — Snapshot { tick, positions, stages }.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the contagion pair search on Rayon's thread pool. |
//! | `serde`    | Serde derives on `Snapshot` and the config types.      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use epi_core::EpidemicConfig;
//! use epi_sim::{EngineBuilder, StageHistory};
//!
//! let mut engine = EngineBuilder::new(EpidemicConfig::default()).build()?;
//! let mut history = StageHistory::new();
//! engine.run_ticks(500, &mut history)?;
//!
//! for snapshot in engine.by_ref().take(10) {
//!     render(&snapshot.positions, &snapshot.stages);
//! }
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod snapshot;


pub use builder::EngineBuilder;
pub use engine::EpidemicEngine;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, StageHistory, TickObserver};
pub use snapshot::Snapshot;
