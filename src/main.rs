use anyhow::Result;
use std::path::Path;

use fractal_bundle_mc::io::{ensure_outdir, write_samples_csv};
use fractal_bundle_mc::stats::summarize;
use fractal_bundle_mc::{run_monte_carlo, Lattice, MonteCarloConfig};

fn main() -> Result<()> {
    let config = MonteCarloConfig::default();

    // Lattice generation runs before sampling; the sampling loop never
    // reads it.
    let _lattice = Lattice::generate(config.lattice_points, config.seed);

    let samples = run_monte_carlo(&config)?;

    let outdir = Path::new("data");
    ensure_outdir(outdir)?;
    write_samples_csv(&outdir.join("simulation_output.csv"), &samples)?;

    println!("{}", summarize(&samples).report_line());

    Ok(())
}
