//! `fleetmix solve` — run the capacity planner on a plan config.

use std::path::Path;

use fleetmix_core::PlanConfig;
use fleetmix_solver::Planner;

pub fn solve(config_path: &str, diagnostics: bool, format: &str) -> anyhow::Result<()> {
    let config = PlanConfig::from_file(Path::new(config_path))?;
    let planner = Planner::new(config)?;

    match planner.run(diagnostics)? {
        Some(allocation) => match format {
            "json" => println!("{}", serde_json::to_string_pretty(&allocation)?),
            _ => {
                for (gpu, count) in &allocation.counts {
                    println!("{gpu}: {count}");
                }
                println!("cost: {}", allocation.cost);
            }
        },
        None => {
            if format == "json" {
                println!("null");
            } else {
                eprintln!("infeasible: no mix of the configured types can sustain the workload");
            }
            // Exit code 2 distinguishes proven infeasibility from input or
            // solver errors, which exit 1.
            std::process::exit(2);
        }
    }

    Ok(())
}
