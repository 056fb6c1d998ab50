//! Two-phase gravitational n-body step.
//!
//! Phase one ([`compute_forces`]) borrows the particle system immutably
//! and produces a [`ForceSet`]. Phase two ([`apply_forces`]) consumes that
//! set and performs the semi-implicit Euler update
//! `v += F/m·dt; pos += v·dt`. Because the apply pass needs a finished
//! `ForceSet` and the force pass cannot mutate, no position moves before
//! every pairwise force has been computed from the same snapshot.
//!
//! The parallel force pass distributes particles over rayon workers; the
//! implicit join at the end of the parallel iterator is the barrier before
//! the apply pass.

use gauntlet_core::{KernelError, ParticleSystem};
use rayon::prelude::*;

/// Added to every pairwise distance so coincident particles do not
/// divide by zero.
pub const SOFTENING: f64 = 1e-9;

/// Per-particle net force, one buffer per axis.
#[derive(Clone, Debug, PartialEq)]
pub struct ForceSet {
    fx: Vec<f64>,
    fy: Vec<f64>,
}

impl ForceSet {
    /// Net force along x per particle.
    pub fn fx(&self) -> &[f64] {
        &self.fx
    }

    /// Net force along y per particle.
    pub fn fy(&self) -> &[f64] {
        &self.fy
    }

    /// Number of particles covered.
    pub fn len(&self) -> usize {
        self.fx.len()
    }

    /// `true` if the set covers no particles.
    pub fn is_empty(&self) -> bool {
        self.fx.is_empty()
    }

    /// Vector sum of all forces.
    pub fn net(&self) -> (f64, f64) {
        let mut sx = 0.0;
        let mut sy = 0.0;
        for i in 0..self.fx.len() {
            sx += self.fx[i];
            sy += self.fy[i];
        }
        (sx, sy)
    }
}

/// Force exerted on particle `i` by particle `j`; zero when `i == j`.
///
/// `f = mᵢ·mⱼ / d²` with `d = |pⱼ − pᵢ| + SOFTENING`, directed from `i`
/// toward `j`. Swapping `i` and `j` negates the result exactly.
#[inline]
pub fn pair_force(sys: &ParticleSystem, i: usize, j: usize) -> (f64, f64) {
    if i == j {
        return (0.0, 0.0);
    }
    let (x, y, m) = (sys.pos_x(), sys.pos_y(), sys.mass());
    let dx = x[j] - x[i];
    let dy = y[j] - y[i];
    let dist = (dx * dx + dy * dy).sqrt() + SOFTENING;
    let f = (m[i] * m[j]) / (dist * dist);
    (f * dx / dist, f * dy / dist)
}

/// Net force on particle `i`, accumulated over `j` in ascending order.
#[inline]
fn net_force(sys: &ParticleSystem, i: usize) -> (f64, f64) {
    let mut fx = 0.0;
    let mut fy = 0.0;
    for j in 0..sys.len() {
        if i != j {
            let (px, py) = pair_force(sys, i, j);
            fx += px;
            fy += py;
        }
    }
    (fx, fy)
}

/// Read-only force pass.
pub fn compute_forces(sys: &ParticleSystem) -> ForceSet {
    let n = sys.len();
    let mut fx = vec![0.0; n];
    let mut fy = vec![0.0; n];
    for i in 0..n {
        let (x, y) = net_force(sys, i);
        fx[i] = x;
        fy[i] = y;
    }
    ForceSet { fx, fy }
}

/// Particle-parallel force pass; bit-identical to [`compute_forces`].
pub fn par_compute_forces(sys: &ParticleSystem) -> ForceSet {
    let (fx, fy): (Vec<f64>, Vec<f64>) = (0..sys.len())
        .into_par_iter()
        .map(|i| net_force(sys, i))
        .unzip();
    ForceSet { fx, fy }
}

/// Update pass: semi-implicit Euler with the finished force set.
///
/// Returns `Err(KernelError::ShapeMismatch)` if `forces` was computed for
/// a system of a different size.
pub fn apply_forces(
    sys: &mut ParticleSystem,
    forces: ForceSet,
    dt: f64,
) -> Result<(), KernelError> {
    if forces.len() != sys.len() {
        return Err(KernelError::ShapeMismatch {
            what: "force set",
            expected: sys.len(),
            actual: forces.len(),
        });
    }
    let state = sys.state_mut();
    for i in 0..forces.len() {
        state.vel_x[i] += forces.fx[i] * dt / state.mass[i];
        state.vel_y[i] += forces.fy[i] * dt / state.mass[i];
        state.pos_x[i] += state.vel_x[i] * dt;
        state.pos_y[i] += state.vel_y[i] * dt;
    }
    Ok(())
}

/// One full step: force pass, then update pass.
pub fn step(sys: &mut ParticleSystem, dt: f64) -> Result<(), KernelError> {
    let forces = compute_forces(sys);
    apply_forces(sys, forces, dt)
}

/// One full step with the parallel force pass.
pub fn par_step(sys: &mut ParticleSystem, dt: f64) -> Result<(), KernelError> {
    let forces = par_compute_forces(sys);
    apply_forces(sys, forces, dt)
}

/// Run `steps` sequential steps.
pub fn simulate(
    sys: &mut ParticleSystem,
    dt: f64,
    steps: usize,
    parallel: bool,
) -> Result<(), KernelError> {
    for _ in 0..steps {
        if parallel {
            par_step(sys, dt)?;
        } else {
            step(sys, dt)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets;
    use gauntlet_core::f64_hash;
    use proptest::prelude::*;

    fn two_bodies() -> ParticleSystem {
        ParticleSystem::at_rest(vec![0.0, 3.0], vec![0.0, 4.0], vec![2.0, 5.0]).unwrap()
    }

    #[test]
    fn inverse_square_magnitude() {
        let sys = two_bodies();
        let (fx, fy) = pair_force(&sys, 0, 1);
        let d = 5.0 + SOFTENING;
        let f = 10.0 / (d * d);
        assert!((fx - f * 3.0 / d).abs() < 1e-15);
        assert!((fy - f * 4.0 / d).abs() < 1e-15);
    }

    #[test]
    fn self_force_is_zero() {
        let sys = two_bodies();
        assert_eq!(pair_force(&sys, 1, 1), (0.0, 0.0));
    }

    #[test]
    fn coincident_particles_stay_finite() {
        let sys = ParticleSystem::at_rest(vec![1.0, 1.0], vec![2.0, 2.0], vec![1.0, 1.0]).unwrap();
        let forces = compute_forces(&sys);
        assert!(forces.fx().iter().chain(forces.fy()).all(|f| f.is_finite()));
        assert_eq!(forces.fx(), &[0.0, 0.0]);
    }

    #[test]
    fn forces_use_pre_step_snapshot() {
        // Computing all forces before moving anything must give the same
        // velocities as applying each particle's force from the snapshot.
        let mut sys = datasets::random_particles(16, 5).unwrap();
        let snapshot = sys.clone();
        step(&mut sys, 0.01).unwrap();
        for i in 0..16 {
            let (fx, _) = net_force(&snapshot, i);
            let expected = snapshot.vel_x()[i] + fx * 0.01 / snapshot.mass()[i];
            assert_eq!(sys.vel_x()[i], expected);
        }
    }

    #[test]
    fn parallel_force_pass_bit_identical() {
        let sys = datasets::grid_particles(300).unwrap();
        let seq = compute_forces(&sys);
        let par = par_compute_forces(&sys);
        assert_eq!(f64_hash(seq.fx()), f64_hash(par.fx()));
        assert_eq!(f64_hash(seq.fy()), f64_hash(par.fy()));
    }

    #[test]
    fn mismatched_force_set_rejected() {
        let mut sys = two_bodies();
        let forces = compute_forces(&datasets::grid_particles(3).unwrap());
        assert!(matches!(
            apply_forces(&mut sys, forces, 0.1),
            Err(KernelError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn simulate_runs_requested_steps() {
        let mut a = datasets::grid_particles(50).unwrap();
        let mut b = a.clone();
        simulate(&mut a, 0.01, 3, false).unwrap();
        for _ in 0..3 {
            par_step(&mut b, 0.01).unwrap();
        }
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn pair_forces_antisymmetric(seed in any::<u64>(), i in 0usize..20, j in 0usize..20) {
            let sys = datasets::random_particles(20, seed).unwrap();
            let (ax, ay) = pair_force(&sys, i, j);
            let (bx, by) = pair_force(&sys, j, i);
            prop_assert_eq!(ax, -bx);
            prop_assert_eq!(ay, -by);
        }

        #[test]
        fn momentum_conserved_over_one_step(seed in any::<u64>()) {
            let mut sys = datasets::random_particles(40, seed).unwrap();
            let forces = compute_forces(&sys);
            let (nx, ny) = forces.net();
            let mut scale = 1.0f64;
            for i in 0..sys.len() {
                for j in 0..sys.len() {
                    let (px, py) = pair_force(&sys, i, j);
                    scale += px.abs() + py.abs();
                }
            }
            prop_assert!(nx.abs() <= 1e-9 * scale, "net fx {} (scale {})", nx, scale);
            prop_assert!(ny.abs() <= 1e-9 * scale, "net fy {} (scale {})", ny, scale);

            let (px0, py0) = sys.total_momentum();
            apply_forces(&mut sys, forces, 0.01).unwrap();
            let (px1, py1) = sys.total_momentum();
            let tol = 1e-9 * scale;
            prop_assert!((px1 - px0).abs() <= tol);
            prop_assert!((py1 - py0).abs() <= tol);
        }
    }
}
