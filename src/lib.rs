//! # foambc
//!
//! Rule-based boundary condition generator for OpenFOAM cases.
//!
//! A [`SimulationContext`] and an ordered list of [`BoundaryPatch`]es go in;
//! one `0/<field>` dictionary per required field comes out. Patch conditions
//! are decided by per-face-type rule tables ([`rules`]) using turbulence
//! defaults from [`physics`] and the near-wall treatment implied by y+.

pub mod case;
pub mod field;
pub mod generate;
pub mod io;
pub mod params;
pub mod physics;
pub mod rules;
pub mod wall_spacing;

// Prelude
pub use case::{
    BoundaryPatch, Case, Compressibility, FaceType, FlowType, PatchInputs, SimulationContext,
    TurbulenceModel,
};
pub use field::{Field, FieldValue};
pub use generate::{BcGenerator, FieldFiles, GeneratorConfig, generate_all, required_fields};
pub use physics::{TurbulenceEstimate, TurbulenceInput, TurbulenceQuantities, estimate_turbulence};
pub use rules::{BoundaryCondition, Condition, resolve};
