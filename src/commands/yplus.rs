//! `yplus`: first-cell height and inflation layer estimate.

use anyhow::{Result, bail};
use clap::Args;
use tracing::warn;

use foambc::wall_spacing::{Fluid, WallSpacingInput, estimate};

#[derive(Args)]
pub struct YplusArgs {
    /// Fluid preset (air, water, glycerin)
    #[arg(short, long, default_value = "air")]
    pub fluid: String,

    /// Density override [kg/m3]
    #[arg(long)]
    pub rho: Option<f64>,

    /// Dynamic viscosity override [Pa s]
    #[arg(long)]
    pub mu: Option<f64>,

    /// Free-stream velocity [m/s]
    #[arg(short, long, default_value_t = 10.0)]
    pub velocity: f64,

    /// Reference length [m]
    #[arg(short, long, default_value_t = 1.0)]
    pub length: f64,

    /// Target y+
    #[arg(short, long, default_value_t = 30.0)]
    pub y_plus: f64,

    /// Inflation layer growth rate
    #[arg(short, long, default_value_t = 1.2)]
    pub growth_rate: f64,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: YplusArgs) -> Result<()> {
    let Some(mut fluid) = Fluid::preset(&args.fluid) else {
        bail!("unknown fluid preset '{}'", args.fluid);
    };
    if let Some(rho) = args.rho {
        fluid.rho = rho;
    }
    if let Some(mu) = args.mu {
        fluid.mu = mu;
    }

    let report = estimate(&WallSpacingInput {
        fluid,
        velocity: args.velocity,
        length: args.length,
        y_plus: args.y_plus,
        growth_rate: args.growth_rate,
    });

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let regime = if report.is_laminar { "laminar" } else { "turbulent" };
    println!("Reynolds number      {:.4e} ({})", report.reynolds, regime);
    println!("Skin friction Cf     {:.4e}", report.skin_friction);
    println!("Wall shear stress    {:.4e} Pa", report.wall_shear_stress);
    println!("Friction velocity    {:.4e} m/s", report.friction_velocity);
    println!("First cell height    {:.4e} m", report.first_cell_height);
    println!("Boundary layer       {:.4} mm", report.boundary_layer_thickness * 1000.0);
    println!("Inflation layers     {}", report.num_layers);
    for rec in &report.recommendations {
        println!("  - {}", rec);
    }
    for w in &report.warnings {
        warn!("{}", w);
    }
    Ok(())
}
