//! Structure-of-arrays particle storage for the n-body kernel.
//!
//! A [`ParticleSystem`] owns five parallel buffers (position x/y,
//! velocity x/y, mass). All five have the same length for the lifetime of
//! the system: lengths are validated at construction and the buffers are
//! only ever handed out as slices, never as resizable vectors.

use crate::error::KernelError;

/// Five index-aligned particle buffers.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSystem {
    pos_x: Vec<f64>,
    pos_y: Vec<f64>,
    vel_x: Vec<f64>,
    vel_y: Vec<f64>,
    mass: Vec<f64>,
}

/// Mutable view over the integrable state of a [`ParticleSystem`].
///
/// Masses are exposed read-only; the integrator never changes them.
pub struct StateMut<'a> {
    /// Position x, one entry per particle.
    pub pos_x: &'a mut [f64],
    /// Position y.
    pub pos_y: &'a mut [f64],
    /// Velocity x.
    pub vel_x: &'a mut [f64],
    /// Velocity y.
    pub vel_y: &'a mut [f64],
    /// Particle masses.
    pub mass: &'a [f64],
}

impl ParticleSystem {
    /// Build a system from its five buffers.
    ///
    /// # Errors
    ///
    /// - `InvalidSize` if the buffers are empty.
    /// - `ShapeMismatch` if any buffer differs in length from `pos_x`.
    /// - `InvalidValue` if a mass is not finite and strictly positive
    ///   (the velocity update divides by mass).
    pub fn new(
        pos_x: Vec<f64>,
        pos_y: Vec<f64>,
        vel_x: Vec<f64>,
        vel_y: Vec<f64>,
        mass: Vec<f64>,
    ) -> Result<Self, KernelError> {
        let n = pos_x.len();
        if n == 0 {
            return Err(KernelError::InvalidSize {
                what: "particle count",
                value: 0,
            });
        }
        for (what, len) in [
            ("particle pos_y buffer", pos_y.len()),
            ("particle vel_x buffer", vel_x.len()),
            ("particle vel_y buffer", vel_y.len()),
            ("particle mass buffer", mass.len()),
        ] {
            if len != n {
                return Err(KernelError::ShapeMismatch {
                    what,
                    expected: n,
                    actual: len,
                });
            }
        }
        if let Some(index) = mass.iter().position(|m| !(m.is_finite() && *m > 0.0)) {
            return Err(KernelError::InvalidValue {
                what: "particle mass buffer",
                index,
            });
        }
        Ok(Self {
            pos_x,
            pos_y,
            vel_x,
            vel_y,
            mass,
        })
    }

    /// Build a system at rest from positions and masses.
    pub fn at_rest(pos_x: Vec<f64>, pos_y: Vec<f64>, mass: Vec<f64>) -> Result<Self, KernelError> {
        let n = pos_x.len();
        Self::new(pos_x, pos_y, vec![0.0; n], vec![0.0; n], mass)
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.pos_x.len()
    }

    /// Always `false`; construction rejects empty systems.
    pub fn is_empty(&self) -> bool {
        self.pos_x.is_empty()
    }

    /// Position x buffer.
    pub fn pos_x(&self) -> &[f64] {
        &self.pos_x
    }

    /// Position y buffer.
    pub fn pos_y(&self) -> &[f64] {
        &self.pos_y
    }

    /// Velocity x buffer.
    pub fn vel_x(&self) -> &[f64] {
        &self.vel_x
    }

    /// Velocity y buffer.
    pub fn vel_y(&self) -> &[f64] {
        &self.vel_y
    }

    /// Mass buffer.
    pub fn mass(&self) -> &[f64] {
        &self.mass
    }

    /// Borrow positions and velocities mutably, masses shared.
    pub fn state_mut(&mut self) -> StateMut<'_> {
        StateMut {
            pos_x: &mut self.pos_x,
            pos_y: &mut self.pos_y,
            vel_x: &mut self.vel_x,
            vel_y: &mut self.vel_y,
            mass: &self.mass,
        }
    }

    /// Total linear momentum `(Σ mᵢ·vxᵢ, Σ mᵢ·vyᵢ)`, accumulated in index order.
    pub fn total_momentum(&self) -> (f64, f64) {
        let mut px = 0.0;
        let mut py = 0.0;
        for i in 0..self.len() {
            px += self.mass[i] * self.vel_x[i];
            py += self.mass[i] * self.vel_y[i];
        }
        (px, py)
    }

    /// Total kinetic energy `Σ ½·mᵢ·|vᵢ|²`.
    pub fn kinetic_energy(&self) -> f64 {
        let mut e = 0.0;
        for i in 0..self.len() {
            let v2 = self.vel_x[i] * self.vel_x[i] + self.vel_y[i] * self.vel_y[i];
            e += 0.5 * self.mass[i] * v2;
        }
        e
    }
}
