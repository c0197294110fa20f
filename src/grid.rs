//! Fixed parameter grid for the weighted-sum formula.
//!
//! Both the primary summation domain and the weight denominator run over the
//! same 10x10 Cartesian product of evenly spaced values in [-2, 2].

pub const GRID_POINTS: usize = 10;
pub const GRID_LO: f64 = -2.0;
pub const GRID_HI: f64 = 2.0;

/// Evenly spaced values over `[lo, hi]`, endpoints included.
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (n - 1) as f64;
            // Pin the last value to `hi` exactly; the taxicab filter depends
            // on the corner pairs landing on the boundary, not next to it.
            (0..n)
                .map(|i| if i == n - 1 { hi } else { lo + step * i as f64 })
                .collect()
        }
    }
}

/// The fixed Cartesian product of `(s, t)` parameter pairs.
#[derive(Debug, Clone)]
pub struct ParameterGrid {
    pairs: Vec<(f64, f64)>,
}

impl Default for ParameterGrid {
    fn default() -> Self {
        let axis = linspace(GRID_LO, GRID_HI, GRID_POINTS);
        let mut pairs = Vec::with_capacity(GRID_POINTS * GRID_POINTS);
        for &s in &axis {
            for &t in &axis {
                pairs.push((s, t));
            }
        }
        Self { pairs }
    }
}

impl ParameterGrid {
    /// All `(s, t)` pairs in row-major order.
    pub fn pairs(&self) -> &[(f64, f64)] {
        &self.pairs
    }

    /// Pairs inside the taxicab ball `|s| + |t| <= 4`, the primary
    /// summation domain of the sampling loop.
    ///
    /// For the fixed [-2, 2] axes every pair satisfies the bound (the
    /// corners sit exactly on 4), so the filter keeps the full grid; it
    /// states the summation condition rather than pruning anything.
    pub fn taxicab_pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.pairs
            .iter()
            .copied()
            .filter(|(s, t)| s.abs() + t.abs() <= 4.0)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{linspace, ParameterGrid, GRID_POINTS};

    #[test]
    fn linspace_hits_both_endpoints() {
        let axis = linspace(-2.0, 2.0, 10);
        assert_eq!(axis.len(), 10);
        assert_eq!(axis[0], -2.0);
        assert_eq!(axis[9], 2.0);
    }

    #[test]
    fn linspace_spacing_is_uniform() {
        let axis = linspace(-2.0, 2.0, 10);
        let step = 4.0 / 9.0;
        for w in axis.windows(2) {
            assert!((w[1] - w[0] - step).abs() < 1e-12);
        }
    }

    #[test]
    fn grid_is_full_cartesian_product() {
        let grid = ParameterGrid::default();
        assert_eq!(grid.len(), GRID_POINTS * GRID_POINTS);
    }

    #[test]
    fn taxicab_filter_keeps_the_full_grid() {
        let grid = ParameterGrid::default();
        let kept: Vec<_> = grid.taxicab_pairs().collect();
        // Every axis value has |v| <= 2, so |s| + |t| <= 4 holds for all
        // 100 pairs; the closed bound keeps the corners at exactly 4.
        assert_eq!(kept.len(), grid.len());
        assert!(kept.iter().all(|(s, t)| s.abs() + t.abs() <= 4.0));
        assert!(kept
            .iter()
            .any(|&(s, t)| (s - 2.0).abs() < 1e-12 && (t - 2.0).abs() < 1e-12));
    }
}
