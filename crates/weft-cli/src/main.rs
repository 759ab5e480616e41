//! Weft CLI: scene simulation, benchmarking and validation.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "weft")]
#[command(version, about = "Weft: tearable Verlet cloth simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scene file.
    Simulate {
        /// Path to the scene (TOML or JSON).
        #[arg(short, long, default_value = "scene.toml")]
        scene: String,

        /// Write final point and link states to this JSON file.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Run benchmark suite.
    Benchmark {
        /// Which scenario to run (hanging_sheet, sphere_drape, tear, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a scene file.
    Validate {
        /// Path to the scene (TOML or JSON).
        path: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate { scene, output } => commands::simulate(&scene, output.as_deref()),
        Commands::Benchmark { scenario, output } => commands::benchmark(&scenario, output.as_deref()),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
