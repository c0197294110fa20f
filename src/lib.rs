//! Deterministic Monte Carlo estimator for the effective Hausdorff dimension
//! of a fractal fiber bundle.
//!
//! Draws a length scale uniformly between fixed bounds, evaluates a
//! closed-form weighted sum over a fixed 10x10 parameter grid per draw, and
//! reports the sample mean and population standard deviation alongside a
//! single-column CSV dump of the raw samples.

pub mod grid;
pub mod io;
pub mod lattice;
pub mod monte_carlo;
pub mod stats;
pub mod weights;

pub use grid::ParameterGrid;
pub use lattice::Lattice;
pub use monte_carlo::{run_monte_carlo, MonteCarloConfig};
pub use stats::{summarize, Summary};
