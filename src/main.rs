//! Command line front end for the boundary condition generator.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// OpenFOAM boundary condition generator
#[derive(Parser)]
#[command(name = "foambc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate OpenFOAM 0/ boundary condition files from a case description", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate field files from a JSON case
    Generate(commands::generate::GenerateArgs),
    /// Write a sample JSON case
    Sample(commands::sample::SampleArgs),
    /// Inlet turbulence quantities from intensity and length scale
    Turbulence(commands::turbulence::TurbulenceArgs),
    /// First-cell height for a target y+
    Yplus(commands::yplus::YplusArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Generate(args) => commands::generate::execute(args),
        Commands::Sample(args) => commands::sample::execute(args),
        Commands::Turbulence(args) => commands::turbulence::execute(args),
        Commands::Yplus(args) => commands::yplus::execute(args),
    }
}
