//! Planar coordinate type.
//!
//! Agents live in an unbounded 2-D plane.  The initial placement square is
//! centred on the origin; nothing keeps agents inside it afterwards.

/// A point in the simulation plane.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance.  Contact checks compare against
    /// `radius²` so no square root is ever taken.
    #[inline]
    pub fn distance_sq(self, other: Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Move by `(dx, dy)` in place.
    #[inline]
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// `true` if the point lies in the half-open square
    /// `[-half_side, half_side)²`.
    #[inline]
    pub fn within_square(self, half_side: f64) -> bool {
        (-half_side..half_side).contains(&self.x) && (-half_side..half_side).contains(&self.y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
