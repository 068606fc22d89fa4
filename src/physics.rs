//! Default turbulence quantities from inlet conditions.
//!
//! Standard two-equation estimates:
//!
//! - `k = 1.5 (U I)^2`
//! - `epsilon = C_mu^0.75 k^1.5 / L`
//! - `omega = epsilon / (C_mu k)`
//!
//! The formulas are total over the reals. `L = 0` or `k = 0` yields a
//! non-finite result; callers that render values are expected to flag it.
//!
//! [`estimate_turbulence`] is the standalone calculator: intensity presets,
//! a length scale derived from a characteristic dimension, a choice of
//! dissipation convention and the resulting viscosity ratio.

use std::fmt;
use std::str::FromStr;

use crate::case::PatchInputs;
use crate::field::Field;
use crate::params::InletParams;

/// Turbulence model constant C_mu.
pub const C_MU: f64 = 0.09;

/// Turbulent kinetic energy [m^2/s^2] from velocity `u` [m/s] and intensity `i` (fraction).
pub fn compute_k(u: f64, i: f64) -> f64 {
    1.5 * (u * i).powi(2)
}

/// Dissipation rate [m^2/s^3] from `k` and length scale `l` [m].
pub fn compute_epsilon(k: f64, l: f64) -> f64 {
    C_MU.powf(0.75) * k.powf(1.5) / l
}

/// Specific dissipation rate [1/s].
pub fn compute_omega(k: f64, epsilon: f64) -> f64 {
    epsilon / (C_MU * k)
}

/// Closure quantities for one set of inlet conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurbulenceQuantities {
    pub k: f64,
    pub epsilon: f64,
    pub omega: f64,
}

impl TurbulenceQuantities {
    pub fn from_params(params: &InletParams) -> Self {
        let k = compute_k(params.velocity_mag, params.turb_intensity);
        let epsilon = compute_epsilon(k, params.length_scale);
        let omega = compute_omega(k, epsilon);
        Self { k, epsilon, omega }
    }

    pub fn from_inputs(inputs: &PatchInputs) -> Self {
        Self::from_params(&InletParams::from_inputs(inputs))
    }

    /// Value for a closure field; `0.0` for anything else.
    pub fn get(&self, field: &Field) -> f64 {
        match field {
            Field::K => self.k,
            Field::Epsilon => self.epsilon,
            Field::Omega => self.omega,
            _ => 0.0,
        }
    }
}

/// Default inlet value of `field` for the given patch inputs.
///
/// Recomputes from scratch on every call; patches may carry different inputs.
pub fn default_for_field(field: &Field, inputs: &PatchInputs) -> f64 {
    TurbulenceQuantities::from_inputs(inputs).get(field)
}

/// Kinematic viscosity of air [m^2/s] used for the viscosity ratio.
pub const NU_AIR: f64 = 1.5e-5;

/// Turbulent length scale as a fraction of the characteristic dimension.
pub const LENGTH_SCALE_FRACTION: f64 = 0.07;

/// Turbulence intensity preset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum IntensityLevel {
    /// 1 %
    Low,
    /// 5 %
    #[default]
    Medium,
    /// 10 %
    High,
    /// Percentage given directly.
    Custom(f64),
}

impl IntensityLevel {
    /// Intensity as a fraction.
    pub fn fraction(&self) -> f64 {
        match self {
            Self::Low => 0.01,
            Self::Medium => 0.05,
            Self::High => 0.10,
            Self::Custom(percent) => percent / 100.0,
        }
    }
}

impl fmt::Display for IntensityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low (1%)"),
            Self::Medium => write!(f, "Medium (5%)"),
            Self::High => write!(f, "High (10%)"),
            Self::Custom(percent) => write!(f, "Custom ({}%)", percent),
        }
    }
}

/// Accepts `low`, `medium`, `high` or a percentage such as `7.5`.
impl FromStr for IntensityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => other
                .trim_end_matches('%')
                .parse::<f64>()
                .map(Self::Custom)
                .map_err(|_| {
                    format!("invalid intensity '{}': expected low, medium, high or a percentage", s)
                }),
        }
    }
}

/// Where the turbulent length scale comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthScaleSource {
    /// The dimension is the length scale.
    #[default]
    Manual,
    /// Pipe or duct: hydraulic diameter.
    Internal,
    /// Body in free stream: characteristic body size.
    External,
}

impl LengthScaleSource {
    /// Length scale [m] for a characteristic dimension [m].
    pub fn length_scale(&self, dimension: f64) -> f64 {
        match self {
            Self::Manual => dimension,
            Self::Internal | Self::External => LENGTH_SCALE_FRACTION * dimension,
        }
    }
}

impl FromStr for LengthScaleSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "manual" => Ok(Self::Manual),
            "internal" => Ok(Self::Internal),
            "external" => Ok(Self::External),
            _ => Err(format!("invalid length scale source '{}'", s)),
        }
    }
}

/// Dissipation rate convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EpsilonDefinition {
    /// `epsilon = C_mu k^1.5 / l`
    Textbook,
    /// `epsilon = C_mu^0.75 k^1.5 / l`, as used for inlet defaults.
    #[default]
    Industrial,
}

impl EpsilonDefinition {
    pub fn epsilon(&self, k: f64, l: f64) -> f64 {
        match self {
            Self::Textbook => C_MU * k.powf(1.5) / l,
            Self::Industrial => compute_epsilon(k, l),
        }
    }
}

impl FromStr for EpsilonDefinition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "textbook" => Ok(Self::Textbook),
            "industrial" => Ok(Self::Industrial),
            _ => Err(format!("invalid epsilon definition '{}'", s)),
        }
    }
}

/// Turbulent to molecular viscosity ratio `(k / omega) / nu_air`.
pub fn viscosity_ratio(k: f64, omega: f64) -> f64 {
    (k / omega) / NU_AIR
}

/// Inputs of the standalone turbulence calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurbulenceInput {
    /// Velocity [m/s].
    pub velocity: f64,
    pub intensity: IntensityLevel,
    pub length_source: LengthScaleSource,
    /// Characteristic dimension [m].
    pub dimension: f64,
    pub definition: EpsilonDefinition,
}

impl Default for TurbulenceInput {
    fn default() -> Self {
        Self {
            velocity: 10.0,
            intensity: IntensityLevel::default(),
            length_source: LengthScaleSource::default(),
            dimension: 1.0,
            definition: EpsilonDefinition::default(),
        }
    }
}

/// Result of the standalone turbulence calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurbulenceEstimate {
    /// Intensity fraction used.
    pub intensity: f64,
    /// Length scale used [m].
    pub length_scale: f64,
    pub quantities: TurbulenceQuantities,
    pub viscosity_ratio: f64,
}

pub fn estimate_turbulence(input: &TurbulenceInput) -> TurbulenceEstimate {
    let intensity = input.intensity.fraction();
    let length_scale = input.length_source.length_scale(input.dimension);
    let k = compute_k(input.velocity, intensity);
    let epsilon = input.definition.epsilon(k, length_scale);
    let omega = compute_omega(k, epsilon);
    TurbulenceEstimate {
        intensity,
        length_scale,
        quantities: TurbulenceQuantities { k, epsilon, omega },
        viscosity_ratio: viscosity_ratio(k, omega),
    }
}
