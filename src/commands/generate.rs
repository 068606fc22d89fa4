//! `generate`: JSON case in, `0/` field files out.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use foambc::generate::{BcGenerator, GeneratorConfig};
use foambc::io::{read_case, write_field_files};

#[derive(Args)]
pub struct GenerateArgs {
    /// Case file (JSON)
    pub case: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "0")]
    pub output: PathBuf,

    /// Print the files instead of writing them
    #[arg(long)]
    pub stdout: bool,

    /// Version tag for the file banner
    #[arg(long, default_value = "v2012")]
    pub foam_version: String,
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    let case = read_case(&args.case)?;
    info!(
        "loaded {} ({} patches, {})",
        args.case.display(),
        case.boundaries.len(),
        case.global_settings.turbulence_model
    );

    let generator = BcGenerator::new(GeneratorConfig {
        openfoam_version: args.foam_version,
        ..GeneratorConfig::default()
    });
    let files = generator.generate_all(&case.global_settings, &case.boundaries);
    info!(
        "rendered {} fields for OpenFOAM {}",
        files.len(),
        generator.config().openfoam_version
    );

    if args.stdout {
        for (field, contents) in &files {
            println!("// ===== 0/{} =====", field);
            println!("{}", contents);
            println!();
        }
        return Ok(());
    }

    let written = write_field_files(&args.output, &files)?;
    info!("{} files ready in {}", written.len(), args.output.display());
    Ok(())
}
