//! `fleetmix check` — validate a plan config and summarize it.

use std::path::Path;

use fleetmix_core::PlanConfig;

pub fn check(config_path: &str) -> anyhow::Result<()> {
    let config = PlanConfig::from_file(Path::new(config_path))?;
    config.validate()?;

    let (rows, cols) = config.shape();
    let slices = rows * cols * config.slice_factor as usize;
    println!(
        "ok: {rows}x{cols} workload matrix, {slices} slices at factor {}",
        config.slice_factor
    );
    println!("total request rate: {}", config.total_request_rate);
    for (name, profile) in &config.gpu_info {
        match profile.max_count {
            Some(max) => println!("  {name}: cost {} per unit, max {max}", profile.cost),
            None => println!("  {name}: cost {} per unit, unconstrained", profile.cost),
        }
    }

    Ok(())
}
