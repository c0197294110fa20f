//! Closed-form fiber-bundle weights.
//!
//! Each grid pair `(s, t)` contributes to a sample through a normalized
//! weight: a log-ratio transform of the scale `r`, damped by a Gaussian
//! factor in `ln(r / scale_min)`, divided by the same combination summed
//! over the full grid. The denominator does not depend on `(s, t)`, so it
//! is computed once per `r` and passed in.

use crate::grid::ParameterGrid;

/// Gaussian damping factor in `ln(r / scale_min)`.
pub fn phi(r: f64, scale_min: f64, sigma_geom: f64) -> f64 {
    let log_ratio = (r / scale_min).ln();
    (-log_ratio * log_ratio / sigma_geom).exp()
}

/// The transform `T(r, s, t) = ln(r / (r_P * (r / r_P)^((|s| + |t|) / 4)))`.
pub fn log_ratio_transform(r: f64, s: f64, t: f64, planck_length: f64) -> f64 {
    let exponent = (s.abs() + t.abs()) / 4.0;
    (r / (planck_length * (r / planck_length).powf(exponent))).ln()
}

/// Grid sum normalizing the weights for a given `r`.
///
/// Identical for every `(s, t)` at that `r`; hoisted here so the sampling
/// loop pays for it once per draw instead of once per grid pair.
pub fn grid_denominator(
    r: f64,
    grid: &ParameterGrid,
    scale_min: f64,
    sigma_geom: f64,
    planck_length: f64,
) -> f64 {
    let damping = phi(r, scale_min, sigma_geom);
    grid.pairs()
        .iter()
        .map(|&(sp, tp)| log_ratio_transform(r, sp, tp, planck_length).exp() * damping)
        .sum()
}

/// Normalized weight `w_s,t(r)`.
///
/// Returns exactly 0.0 when the denominator is 0.0; a vanishing grid sum is
/// recovered locally with a neutral weight, never reported as an error.
pub fn weight(
    r: f64,
    s: f64,
    t: f64,
    denominator: f64,
    scale_min: f64,
    sigma_geom: f64,
    planck_length: f64,
) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let numerator = log_ratio_transform(r, s, t, planck_length).exp() * phi(r, scale_min, sigma_geom);
    numerator / denominator
}

#[cfg(test)]
mod tests {
    use super::{grid_denominator, log_ratio_transform, phi, weight};
    use crate::grid::ParameterGrid;
    use crate::monte_carlo::MonteCarloConfig;

    #[test]
    fn zero_denominator_yields_zero_weight() {
        let cfg = MonteCarloConfig::default();
        let w = weight(
            1e-20,
            0.0,
            0.0,
            0.0,
            cfg.scale_min,
            cfg.sigma_geom,
            cfg.planck_length,
        );
        assert_eq!(w, 0.0);
    }

    #[test]
    fn weight_is_finite_and_normalized_inside_scale_range() {
        let cfg = MonteCarloConfig::default();
        let grid = ParameterGrid::default();

        for &r in &[1e-39, 1e-30, 1e-20, 1e-11] {
            let denom = grid_denominator(r, &grid, cfg.scale_min, cfg.sigma_geom, cfg.planck_length);
            assert!(denom.is_finite());
            assert!(denom > 0.0);

            let mut total = 0.0;
            for &(s, t) in grid.pairs() {
                let w = weight(r, s, t, denom, cfg.scale_min, cfg.sigma_geom, cfg.planck_length);
                assert!(w.is_finite());
                assert!(w >= 0.0);
                total += w;
            }
            // Weights over the full grid normalize to 1 by construction.
            assert!((total - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn transform_collapses_at_planck_length() {
        let cfg = MonteCarloConfig::default();
        // At r = r_P the inner power is 1 regardless of (s, t).
        let a = log_ratio_transform(cfg.planck_length, -2.0, 2.0, cfg.planck_length);
        let b = log_ratio_transform(cfg.planck_length, 0.0, 0.0, cfg.planck_length);
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn damping_peaks_at_scale_min() {
        let cfg = MonteCarloConfig::default();
        let at_min = phi(cfg.scale_min, cfg.scale_min, cfg.sigma_geom);
        let above = phi(cfg.scale_min * 1e5, cfg.scale_min, cfg.sigma_geom);
        assert!((at_min - 1.0).abs() < 1e-12);
        assert!(above < at_min);
    }
}
