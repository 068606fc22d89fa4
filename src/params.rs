//! Typed patch parameters.
//!
//! Each face type reads a handful of keys from the sparse [`PatchInputs`] map.
//! Resolution happens here, once, so every default is visible in one place.
//! Defaults apply to missing keys only; an explicit `0` is kept.

use crate::case::PatchInputs;

pub const DEFAULT_VELOCITY_MAG: f64 = 10.0;
pub const DEFAULT_TURB_INTENSITY: f64 = 0.05;
pub const DEFAULT_LENGTH_SCALE: f64 = 0.1;
pub const DEFAULT_OUTLET_PRESSURE: f64 = 0.0;
pub const DEFAULT_Y_PLUS: f64 = 50.0;
pub const DEFAULT_ROUGHNESS_HEIGHT: f64 = 0.0;
pub const DEFAULT_ROUGHNESS_CONSTANT: f64 = 0.5;

fn get_or(inputs: &PatchInputs, key: &str, default: f64) -> f64 {
    inputs.get(key).copied().unwrap_or(default)
}

/// Inlet parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InletParams {
    /// Velocity vector, present only when the inputs carry `velocity_mag`.
    pub velocity: Option<[f64; 3]>,
    /// Free-stream velocity magnitude U [m/s].
    pub velocity_mag: f64,
    /// Turbulence intensity I as a fraction (0.05 = 5 %).
    pub turb_intensity: f64,
    /// Turbulent length scale L [m].
    pub length_scale: f64,
}

impl InletParams {
    pub fn from_inputs(inputs: &PatchInputs) -> Self {
        let velocity = inputs.contains_key("velocity_mag").then(|| {
            [
                get_or(inputs, "velocity_x", 0.0),
                get_or(inputs, "velocity_y", 0.0),
                get_or(inputs, "velocity_z", 0.0),
            ]
        });
        Self {
            velocity,
            velocity_mag: get_or(inputs, "velocity_mag", DEFAULT_VELOCITY_MAG),
            turb_intensity: get_or(inputs, "turb_intensity", DEFAULT_TURB_INTENSITY),
            length_scale: get_or(inputs, "length_scale", DEFAULT_LENGTH_SCALE),
        }
    }
}

impl Default for InletParams {
    fn default() -> Self {
        Self::from_inputs(&PatchInputs::new())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutletParams {
    /// Pinned outlet pressure.
    pub pressure: f64,
}

impl OutletParams {
    pub fn from_inputs(inputs: &PatchInputs) -> Self {
        Self {
            pressure: get_or(inputs, "pressure", DEFAULT_OUTLET_PRESSURE),
        }
    }
}

/// Wall parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallParams {
    /// Dimensionless distance of the first cell centre from the wall.
    pub y_plus: f64,
    /// Sand-grain roughness height Ks [m].
    pub roughness_height: f64,
    /// Roughness constant Cs.
    pub roughness_constant: f64,
}

impl WallParams {
    pub fn from_inputs(inputs: &PatchInputs) -> Self {
        Self {
            y_plus: get_or(inputs, "y_plus", DEFAULT_Y_PLUS),
            roughness_height: get_or(inputs, "roughness_height", DEFAULT_ROUGHNESS_HEIGHT),
            roughness_constant: get_or(inputs, "roughness_constant", DEFAULT_ROUGHNESS_CONSTANT),
        }
    }
}
