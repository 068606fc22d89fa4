//! Simulation context and boundary patches.
//!
//! These are the inputs of a generation pass. They are created by the caller,
//! read (never mutated) by the rule engine, and serialized as a [`Case`] for
//! JSON import/export.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Sparse numeric inputs of a patch, keyed by parameter name.
///
/// Ordered so exported JSON is deterministic.
pub type PatchInputs = BTreeMap<String, f64>;

/// Flow topology of the simulated domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowType {
    #[default]
    Internal,
    External,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compressibility {
    #[default]
    Incompressible,
    Compressible,
}

/// Turbulence closure selected for the case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TurbulenceModel {
    #[serde(rename = "laminar")]
    Laminar,
    #[default]
    #[serde(rename = "kEpsilon")]
    KEpsilon,
    #[serde(rename = "kOmegaSST")]
    KOmegaSst,
    #[serde(rename = "SpalartAllmaras")]
    SpalartAllmaras,
}

impl fmt::Display for TurbulenceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Laminar => "laminar",
            Self::KEpsilon => "kEpsilon",
            Self::KOmegaSst => "kOmegaSST",
            Self::SpalartAllmaras => "SpalartAllmaras",
        };
        write!(f, "{}", name)
    }
}

/// Kind of boundary surface a patch represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceType {
    Inlet,
    Outlet,
    #[default]
    Wall,
    Symmetry,
    Cyclic,
}

impl fmt::Display for FaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Inlet => "inlet",
            Self::Outlet => "outlet",
            Self::Wall => "wall",
            Self::Symmetry => "symmetry",
            Self::Cyclic => "cyclic",
        };
        write!(f, "{}", name)
    }
}

/// Global physics settings shared by every patch of a case.
///
/// No cross-field validation is performed: e.g. compressible + internal is legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimulationContext {
    pub flow_type: FlowType,
    pub compressibility: Compressibility,
    pub turbulence_model: TurbulenceModel,
    pub heat_transfer: bool,
}

impl SimulationContext {
    pub fn new(
        flow_type: FlowType,
        compressibility: Compressibility,
        turbulence_model: TurbulenceModel,
        heat_transfer: bool,
    ) -> Self {
        Self {
            flow_type,
            compressibility,
            turbulence_model,
            heat_transfer,
        }
    }

    pub fn is_compressible(&self) -> bool {
        self.compressibility == Compressibility::Compressible
    }
}

/// A named boundary surface with its sparse numeric inputs.
///
/// `is_backflow_possible` only matters for outlets, `is_rough_wall` only for walls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryPatch {
    pub name: String,
    #[serde(rename = "type")]
    pub face_type: FaceType,
    #[serde(default)]
    pub inputs: PatchInputs,
    #[serde(default)]
    pub is_backflow_possible: bool,
    #[serde(default)]
    pub is_rough_wall: bool,
}

impl BoundaryPatch {
    pub fn new(name: impl Into<String>, face_type: FaceType) -> Self {
        Self {
            name: name.into(),
            face_type,
            inputs: PatchInputs::new(),
            is_backflow_possible: false,
            is_rough_wall: false,
        }
    }

    pub fn inlet(name: impl Into<String>) -> Self {
        Self::new(name, FaceType::Inlet)
    }

    pub fn outlet(name: impl Into<String>) -> Self {
        Self::new(name, FaceType::Outlet)
    }

    pub fn wall(name: impl Into<String>) -> Self {
        Self::new(name, FaceType::Wall)
    }

    /// Sets a numeric input, replacing any previous value.
    pub fn with_input(mut self, key: &str, value: f64) -> Self {
        self.inputs.insert(key.to_string(), value);
        self
    }

    pub fn with_backflow(mut self, possible: bool) -> Self {
        self.is_backflow_possible = possible;
        self
    }

    pub fn with_rough_wall(mut self, rough: bool) -> Self {
        self.is_rough_wall = rough;
        self
    }

    /// Returns the raw input value for `key`, if present.
    pub fn input(&self, key: &str) -> Option<f64> {
        self.inputs.get(key).copied()
    }
}

/// A complete snapshot: global settings plus the ordered patch list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Case {
    pub global_settings: SimulationContext,
    pub boundaries: Vec<BoundaryPatch>,
}

impl Case {
    pub fn new(global_settings: SimulationContext, boundaries: Vec<BoundaryPatch>) -> Self {
        Self {
            global_settings,
            boundaries,
        }
    }

    /// Internal kEpsilon duct: inlet, backflow-safe outlet, one resolved wall
    /// and one rough wall-function wall.
    pub fn starter() -> Self {
        Self::new(
            SimulationContext::default(),
            vec![
                BoundaryPatch::inlet("inlet")
                    .with_input("velocity_mag", 10.0)
                    .with_input("turb_intensity", 0.05)
                    .with_input("length_scale", 0.1),
                BoundaryPatch::outlet("outlet")
                    .with_input("pressure", 0.0)
                    .with_backflow(true),
                BoundaryPatch::wall("wall_bottom").with_input("y_plus", 0.5),
                BoundaryPatch::wall("wall_top")
                    .with_input("y_plus", 50.0)
                    .with_rough_wall(true),
            ],
        )
    }

    /// External kOmegaSST aerodynamics case over a wing and rough terrain.
    pub fn aerodynamics_demo() -> Self {
        Self::new(
            SimulationContext::new(
                FlowType::External,
                Compressibility::Incompressible,
                TurbulenceModel::KOmegaSst,
                false,
            ),
            vec![
                BoundaryPatch::inlet("inlet_main")
                    .with_input("velocity_mag", 25.0)
                    .with_input("turb_intensity", 0.05)
                    .with_input("length_scale", 0.5),
                BoundaryPatch::outlet("outlet_pressure")
                    .with_input("pressure", 0.0)
                    .with_backflow(true),
                BoundaryPatch::wall("wing_surface").with_input("y_plus", 0.8),
                BoundaryPatch::wall("ground_terrain")
                    .with_input("y_plus", 150.0)
                    .with_input("roughness_height", 0.1)
                    .with_input("roughness_constant", 0.5)
                    .with_rough_wall(true),
            ],
        )
    }

    pub fn get_patch(&self, name: &str) -> Option<&BoundaryPatch> {
        self.boundaries.iter().find(|p| p.name == name)
    }
}
