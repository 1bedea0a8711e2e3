//! `epi-disease` — per-agent stage progression and spatial contagion.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                         |
//! |-----------------|------------------------------------------------------------------|
//! | [`mask`]        | `AgentMask` — index-aligned boolean set                          |
//! | [`transition`]  | `StageTransitionModel` — sampled thresholds + elapsed counters   |
//! | [`contagion`]   | `ContagionModel` — who gets infected this tick                   |
//! | [`error`]       | `DiseaseError`, `DiseaseResult<T>`                               |
//!
//! # Per-tick order inside `ContagionModel::step`
//!
//! ```text
//! ① at-risk pairs   infectious a × susceptible b with |a−b|² < radius²
//! ② trials          one Bernoulli(p) per pair; b infected if any succeeds
//! ③ infect          stage[b] := Infected, counter reset
//! ④ recovered sync  stage 5 ⇒ recovered, never infectious again
//! ⑤ advance         StageTransitionModel::advance on the updated stages
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the at-risk pair search (①) on Rayon.             |

pub mod contagion;
pub mod error;
pub mod mask;
pub mod transition;

#[cfg(test)]
mod tests;

pub use contagion::ContagionModel;
pub use error::{DiseaseError, DiseaseResult};
pub use mask::AgentMask;
pub use transition::StageTransitionModel;
