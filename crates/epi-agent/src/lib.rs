//! `epi-agent` — Structure-of-Arrays population storage for the `rust_epi` engine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`store`]       | `Population` (SoA positions + stages)                     |
//! | [`builder`]     | `PopulationBuilder` (seeded placement, initial infected)  |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on all public types.     |

pub mod builder;
pub mod store;


pub use builder::PopulationBuilder;
pub use store::Population;
