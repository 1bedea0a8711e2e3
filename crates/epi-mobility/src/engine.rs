//! Stage-aware random-walk mobility.

use epi_core::{Position, SimRng, Stage};

use crate::{MobilityError, MobilityResult};

/// Perturbs agent positions by a scaled uniform step, honoring
/// immobilization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MobilityModel {
    movement_scale: f64,
}

impl MobilityModel {
    /// Create a model with the given step scale (`0` disables movement).
    pub fn new(movement_scale: f64) -> MobilityResult<Self> {
        if !movement_scale.is_finite() || movement_scale < 0.0 {
            return Err(MobilityError::InvalidScale(movement_scale));
        }
        Ok(Self { movement_scale })
    }

    #[inline]
    pub fn movement_scale(&self) -> f64 {
        self.movement_scale
    }

    /// `0.0` for immobilized agents, `1.0` otherwise.
    #[inline]
    pub fn mobility_factor(stage: Stage) -> f64 {
        if stage == Stage::Immobilized { 0.0 } else { 1.0 }
    }

    /// Move every mobile agent one step, in place.
    ///
    /// Draws two uniform values (x then y) per mobile agent in ascending
    /// agent order; immobilized agents keep their exact position.
    pub fn step(
        &self,
        positions: &mut [Position],
        stages:    &[Stage],
        rng:       &mut SimRng,
    ) -> MobilityResult<()> {
        if positions.len() != stages.len() {
            return Err(MobilityError::AgentCountMismatch {
                expected: positions.len(),
                got:      stages.len(),
            });
        }

        let mut held = 0usize;
        for (pos, &stage) in positions.iter_mut().zip(stages) {
            let factor = Self::mobility_factor(stage);
            if factor == 0.0 {
                held += 1;
                continue;
            }
            let scale = self.movement_scale * factor;
            let dx = rng.gen_range(-0.5_f64..0.5) * scale;
            let dy = rng.gen_range(-0.5_f64..0.5) * scale;
            pos.translate(dx, dy);
        }
        log::trace!("moved {} agents, {held} immobilized", positions.len() - held);
        Ok(())
    }
}
