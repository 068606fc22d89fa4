//! `sample`: write a starter case to edit.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use foambc::case::Case;
use foambc::io::{to_case_string, write_case};

#[derive(Args)]
pub struct SampleArgs {
    /// Use the external aerodynamics demo instead of the duct starter
    #[arg(long)]
    pub demo: bool,

    /// Output file; prints to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn execute(args: SampleArgs) -> Result<()> {
    let case = if args.demo {
        Case::aerodynamics_demo()
    } else {
        Case::starter()
    };

    match &args.output {
        Some(path) => {
            write_case(path, &case)?;
            info!("sample case written to {}", path.display());
        }
        None => println!("{}", to_case_string(&case)?),
    }
    Ok(())
}
