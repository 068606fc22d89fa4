//! `turbulence`: k, epsilon, omega and viscosity ratio for inlet conditions.

use anyhow::Result;
use clap::Args;

use foambc::params::DEFAULT_VELOCITY_MAG;
use foambc::physics::{
    EpsilonDefinition, IntensityLevel, LengthScaleSource, TurbulenceInput, estimate_turbulence,
};

#[derive(Args)]
pub struct TurbulenceArgs {
    /// Velocity magnitude U [m/s]
    #[arg(short, long, default_value_t = DEFAULT_VELOCITY_MAG)]
    pub velocity: f64,

    /// Turbulence intensity: low, medium, high or a percentage (e.g. 7.5)
    #[arg(short, long, default_value = "medium")]
    pub intensity: IntensityLevel,

    /// Characteristic dimension [m]
    #[arg(short, long, default_value_t = 1.0)]
    pub dimension: f64,

    /// Length scale source: manual (L = dimension), internal or external (L = 0.07 dimension)
    #[arg(short = 's', long, default_value = "manual")]
    pub length_source: LengthScaleSource,

    /// Epsilon convention: textbook or industrial
    #[arg(short = 'e', long, default_value = "industrial")]
    pub definition: EpsilonDefinition,
}

pub fn execute(args: TurbulenceArgs) -> Result<()> {
    let input = TurbulenceInput {
        velocity: args.velocity,
        intensity: args.intensity,
        length_source: args.length_source,
        dimension: args.dimension,
        definition: args.definition,
    };
    let est = estimate_turbulence(&input);
    let q = est.quantities;

    println!("k               = {:.3e} m2/s2", q.k);
    println!("epsilon         = {:.3e} m2/s3", q.epsilon);
    println!("omega           = {:.3e} 1/s", q.omega);
    println!("viscosity ratio = {:.1}", est.viscosity_ratio);
    println!(
        "Based on: U = {} m/s, I = {}, L = {} m ({:?})",
        input.velocity, input.intensity, est.length_scale, input.length_source
    );
    Ok(())
}
