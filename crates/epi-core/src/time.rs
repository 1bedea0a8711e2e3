//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  A tick has no
//! wall-clock meaning; transition thresholds are expressed in ticks too, so
//! the whole disease model is unit-free.

use std::fmt;

/// An absolute simulation tick counter.
///
/// The first snapshot an engine yields is `Tick(0)`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// The following tick.
    #[inline]
    pub fn next(self) -> Tick {
        self.offset(1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
