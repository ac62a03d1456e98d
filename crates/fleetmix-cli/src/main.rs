use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "fleetmix",
    about = "Fleetmix — cost-optimal accelerator fleet planning",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a capacity plan for the cheapest feasible fleet.
    ///
    /// Exits 0 with the allocation on success and 2 when the plan is
    /// proven infeasible, so scripts can tell "no possible fleet" apart
    /// from input or solver errors (1).
    Solve {
        /// Path to the plan config (.json or .toml)
        #[arg(short, long)]
        config: String,
        /// Print the decision matrix and vector after an optimal solve
        #[arg(short, long)]
        diagnostics: bool,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Validate a plan config and print a summary without solving
    Check {
        /// Path to the plan config (.json or .toml)
        #[arg(short, long)]
        config: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fleetmix=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            config,
            diagnostics,
            format,
        } => commands::solve::solve(&config, diagnostics, &format),
        Commands::Check { config } => commands::check::check(&config),
    }
}
