//! Monte Carlo sampling loop for the effective Hausdorff dimension.

use anyhow::{bail, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::grid::ParameterGrid;
use crate::weights::{grid_denominator, weight};

pub const DEFAULT_ITERATIONS: usize = 10_000;
pub const DEFAULT_LATTICE_POINTS: usize = 1_000_000;

/// Base value every sample accumulates from.
pub const BASE_DIMENSION: f64 = 3.0;

/// Fixed in-source simulation parameters; there is no file or CLI
/// configuration layer.
#[derive(Clone, Debug)]
pub struct MonteCarloConfig {
    pub iterations: usize,
    pub lattice_points: usize,
    /// Minimum scale in meters.
    pub scale_min: f64,
    /// Maximum scale in meters, quantum regime cutoff.
    pub scale_max: f64,
    /// Gaussian scale parameter of the damping factor.
    pub sigma_geom: f64,
    /// Planck length in meters, the reference length of the log-ratio transform.
    pub planck_length: f64,
    pub seed: u64,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            lattice_points: DEFAULT_LATTICE_POINTS,
            scale_min: 1e-40,
            scale_max: 1e-10,
            sigma_geom: 141.0,
            planck_length: 1.616e-35,
            seed: 42,
        }
    }
}

impl MonteCarloConfig {
    /// Rejects any configuration that could push a logarithm argument out of
    /// its domain. A draw from `[scale_min, scale_max)` with `scale_min > 0`
    /// is always strictly positive, so the loop itself needs no clamping.
    pub fn validate(&self) -> Result<()> {
        if !self.scale_min.is_finite() || self.scale_min <= 0.0 {
            bail!("scale_min must be finite and > 0");
        }
        if !self.scale_max.is_finite() || self.scale_max <= self.scale_min {
            bail!("scale_max must be finite and > scale_min");
        }
        if !self.sigma_geom.is_finite() || self.sigma_geom <= 0.0 {
            bail!("sigma_geom must be finite and > 0");
        }
        if !self.planck_length.is_finite() || self.planck_length <= 0.0 {
            bail!("planck_length must be finite and > 0");
        }
        Ok(())
    }
}

/// Runs the sampling loop and returns one effective-dimension value per
/// iteration, in draw order.
///
/// The generator is seeded here from the config rather than process-globally,
/// so repeated runs with the same config are bit-identical and independent
/// of anything else the process sampled.
pub fn run_monte_carlo(config: &MonteCarloConfig) -> Result<Vec<f64>> {
    config.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let grid = ParameterGrid::default();
    let mut samples = Vec::with_capacity(config.iterations);

    for _ in 0..config.iterations {
        let r = rng.gen_range(config.scale_min..config.scale_max);
        samples.push(effective_dimension(r, &grid, config));
    }

    Ok(samples)
}

/// Evaluates the weighted-sum formula for one drawn scale.
pub fn effective_dimension(r: f64, grid: &ParameterGrid, config: &MonteCarloConfig) -> f64 {
    let denominator = grid_denominator(
        r,
        grid,
        config.scale_min,
        config.sigma_geom,
        config.planck_length,
    );
    // Shared across every grid pair for this draw.
    let tanh_factor = 1.0 + (r / config.planck_length).ln().tanh();

    let mut dim = BASE_DIMENSION;
    for (s, t) in grid.taxicab_pairs() {
        let w = weight(
            r,
            s,
            t,
            denominator,
            config.scale_min,
            config.sigma_geom,
            config.planck_length,
        );
        dim += w * (s + t - 3.0) * tanh_factor;
    }
    dim
}
