//! Explicit Euler advection of particles along a [`FlowSampler`].
//!
//! Each particle's update reads only its own position, so the pass runs as
//! a rayon parallel map and yields the same bits as a sequential loop.

use glam::DVec2;
use rayon::prelude::*;

use crate::particles::Particles;
use crate::sampler::FlowSampler;

/// Advances every particle one step at time `t`.
///
/// The flow angle is sampled at the particle's pre-step position, velocity
/// becomes `speed · (cos θ, sin θ)`, and the new position is wrapped onto
/// the torus `[0, extent.x) × [0, extent.y)`.
pub fn step(particles: &mut Particles, sampler: &dyn FlowSampler, speed: f64, extent: DVec2, t: f64) {
    let (positions, velocities) = particles.kinematics_mut();
    positions
        .par_iter_mut()
        .zip(velocities.par_iter_mut())
        .for_each(|(pos, vel)| {
            let theta = sampler.angle(pos.x, pos.y, t);
            *vel = DVec2::new(theta.cos() * speed, theta.sin() * speed);
            let next = *pos + *vel;
            *pos = DVec2::new(wrap(next.x, extent.x), wrap(next.y, extent.y));
        });
}

/// Wraps `value` into `[0, extent)`.
///
/// `rem_euclid` handles negative inputs, but for a tiny negative value the
/// sum `r + extent` rounds up to exactly `extent`; that case maps to 0.
pub fn wrap(value: f64, extent: f64) -> f64 {
    let r = value.rem_euclid(extent);
    if r >= extent {
        0.0
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::SineFlow;
    use flowart_core::prng::Xorshift64;

    /// Constant-direction field for predictable motion.
    struct Uniform(f64);

    impl FlowSampler for Uniform {
        fn angle(&self, _x: f64, _y: f64, _t: f64) -> f64 {
            self.0
        }
    }

    fn cloud(count: usize, extent: DVec2) -> Particles {
        Particles::seeded(count, extent, &mut Xorshift64::new(11)).unwrap()
    }

    #[test]
    fn wrap_leaves_in_range_values_untouched() {
        assert_eq!(wrap(42.5, 100.0), 42.5);
        assert_eq!(wrap(0.0, 100.0), 0.0);
    }

    #[test]
    fn wrap_right_edge_reappears_at_left() {
        assert!((wrap(101.5, 100.0) - 1.5).abs() < 1e-12);
        assert_eq!(wrap(100.0, 100.0), 0.0);
    }

    #[test]
    fn wrap_negative_reappears_at_far_edge() {
        assert!((wrap(-1.5, 100.0) - 98.5).abs() < 1e-12);
    }

    #[test]
    fn wrap_tiny_negative_never_returns_extent() {
        let v = wrap(-1e-17, 100.0);
        assert!((0.0..100.0).contains(&v), "wrapped to {v}");
    }

    #[test]
    fn velocity_has_fixed_speed_and_sampled_direction() {
        let extent = DVec2::new(50.0, 50.0);
        let mut p = cloud(20, extent);
        step(&mut p, &Uniform(0.0), 2.0, extent, 0.0);
        assert!(p.velocities().iter().all(|v| *v == DVec2::new(2.0, 0.0)));

        step(&mut p, &SineFlow::new(0.01, 0.5), 3.0, extent, 1.0);
        for v in p.velocities() {
            assert!((v.length() - 3.0).abs() < 1e-9, "|v| = {}", v.length());
        }
    }

    #[test]
    fn position_advances_by_velocity() {
        let extent = DVec2::new(1000.0, 1000.0);
        let mut p = cloud(5, extent);
        let before = p.positions().to_vec();
        // θ = π/2 moves each particle one unit down the y axis.
        step(&mut p, &Uniform(std::f64::consts::FRAC_PI_2), 1.0, extent, 0.0);
        for (a, b) in before.iter().zip(p.positions()) {
            assert!((b.x - a.x).abs() < 1e-9);
            assert!((b.y - wrap(a.y + 1.0, 1000.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn particle_leaving_top_edge_reappears_at_bottom() {
        let extent = DVec2::new(10.0, 10.0);
        let mut p = cloud(200, extent);
        // Pointing straight up (negative y) with a speed larger than the frame.
        step(&mut p, &Uniform(-std::f64::consts::FRAC_PI_2), 25.0, extent, 0.0);
        assert!(p
            .positions()
            .iter()
            .all(|q| (0.0..10.0).contains(&q.x) && (0.0..10.0).contains(&q.y)));
    }

    #[test]
    fn parallel_step_matches_sequential_reference() {
        let extent = DVec2::new(320.0, 240.0);
        let sampler = SineFlow::new(0.005, 0.5);
        let mut p = cloud(5000, extent);
        let mut expected = p.positions().to_vec();
        for t in [0.0, 0.1, 0.2] {
            step(&mut p, &sampler, 2.0, extent, t);
            for q in &mut expected {
                let theta = sampler.angle(q.x, q.y, t);
                let next = *q + DVec2::new(theta.cos() * 2.0, theta.sin() * 2.0);
                *q = DVec2::new(wrap(next.x, extent.x), wrap(next.y, extent.y));
            }
        }
        assert_eq!(p.positions(), expected.as_slice());
    }
}
