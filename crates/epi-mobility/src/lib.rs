//! `epi-mobility` — agent movement in the open plane.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`engine`]  | `MobilityModel` — per-tick uniform random step                    |
//! | [`error`]   | `MobilityError`, `MobilityResult<T>`                              |
//!
//! # Movement model (uniform jitter)
//!
//! Each tick every agent draws a displacement uniformly from
//! `[-0.5, 0.5)²`, scales it by `movement_scale`, and adds it to its
//! position in place.  Agents in `Stage::Immobilized` do not move and draw
//! nothing.  There is no boundary: agents may drift out of the initial
//! placement square indefinitely.

pub mod engine;
pub mod error;


pub use engine::MobilityModel;
pub use error::{MobilityError, MobilityResult};
