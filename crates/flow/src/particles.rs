//! Per-particle simulation state owned by a [`FlowField`](crate::FlowField).

use flowart_core::error::EngineError;
use flowart_core::frame::Rgb;
use flowart_core::prng::Xorshift64;
use glam::DVec2;

/// Positions, velocities and base colors of `N` particles, index-aligned.
///
/// `N` is fixed at construction. Colors never change after seeding; only
/// the integrator touches positions and velocities.
#[derive(Debug, Clone)]
pub struct Particles {
    positions: Vec<DVec2>,
    velocities: Vec<DVec2>,
    colors: Vec<Rgb>,
}

impl Particles {
    /// Scatters `count` particles uniformly over `[0, extent.x) × [0, extent.y)`
    /// at rest, each with a random base color.
    ///
    /// All positions are drawn before any color so that the cloud layout for
    /// a given seed does not depend on how colors are generated.
    ///
    /// Returns `EngineError::InvalidParticleCount` if `count` is zero.
    pub fn seeded(count: usize, extent: DVec2, rng: &mut Xorshift64) -> Result<Self, EngineError> {
        if count == 0 {
            return Err(EngineError::InvalidParticleCount);
        }
        let positions: Vec<DVec2> = (0..count)
            .map(|_| {
                let x = rng.next_range(0.0, extent.x);
                let y = rng.next_range(0.0, extent.y);
                DVec2::new(x, y)
            })
            .collect();
        let colors = (0..count)
            .map(|_| Rgb::new(rng.next_u8(), rng.next_u8(), rng.next_u8()))
            .collect();
        Ok(Self {
            positions,
            velocities: vec![DVec2::ZERO; count],
            colors,
        })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[DVec2] {
        &self.positions
    }

    pub fn velocities(&self) -> &[DVec2] {
        &self.velocities
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Positions and velocities borrowed together for in-place integration.
    pub(crate) fn kinematics_mut(&mut self) -> (&mut [DVec2], &mut [DVec2]) {
        (&mut self.positions, &mut self.velocities)
    }
}
