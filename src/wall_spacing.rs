//! First-cell height estimation for a target y+.
//!
//! Flat-plate correlations give the skin friction, from which the friction
//! velocity and the wall distance of the first cell follow:
//!
//! - `Re = rho U L / mu`, laminar below `5e5`
//! - `Cf = 0.664 / sqrt(Re)` (laminar) or `0.0592 Re^-0.2` (turbulent)
//! - `tau_w = 0.5 rho U^2 Cf`, `u_tau = sqrt(tau_w / rho)`
//! - `dy = y+ mu / (u_tau rho)`
//! - `delta = 5 L / sqrt(Re)` (laminar) or `0.37 L / Re^0.2` (turbulent)
//!
//! The number of inflation layers needed to cover `delta` follows from the
//! geometric series of the growth rate.

use serde::{Deserialize, Serialize};

/// Transition Reynolds number for a flat plate.
pub const RE_TRANSITION: f64 = 5e5;

/// Fluid density and dynamic viscosity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fluid {
    /// Density [kg/m^3].
    pub rho: f64,
    /// Dynamic viscosity [Pa s].
    pub mu: f64,
}

impl Fluid {
    /// Air at 20 °C.
    pub const AIR: Self = Self {
        rho: 1.225,
        mu: 1.8e-5,
    };
    /// Water at 20 °C.
    pub const WATER: Self = Self {
        rho: 998.2,
        mu: 1e-3,
    };
    pub const GLYCERIN: Self = Self {
        rho: 1260.0,
        mu: 1.49,
    };

    pub fn preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "air" => Some(Self::AIR),
            "water" => Some(Self::WATER),
            "glycerin" => Some(Self::GLYCERIN),
            _ => None,
        }
    }
}

/// Inputs of a wall spacing estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSpacingInput {
    pub fluid: Fluid,
    /// Free-stream velocity [m/s].
    pub velocity: f64,
    /// Reference length [m].
    pub length: f64,
    /// Target y+ of the first cell.
    pub y_plus: f64,
    /// Inflation layer growth rate.
    pub growth_rate: f64,
}

impl Default for WallSpacingInput {
    fn default() -> Self {
        Self {
            fluid: Fluid::AIR,
            velocity: 10.0,
            length: 1.0,
            y_plus: 30.0,
            growth_rate: 1.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallSpacingReport {
    pub reynolds: f64,
    pub is_laminar: bool,
    pub skin_friction: f64,
    /// Wall shear stress [Pa].
    pub wall_shear_stress: f64,
    /// Friction velocity [m/s].
    pub friction_velocity: f64,
    /// First-cell height [m].
    pub first_cell_height: f64,
    /// Boundary layer thickness [m].
    pub boundary_layer_thickness: f64,
    pub num_layers: u32,
    pub recommendations: Vec<String>,
    pub warnings: Vec<String>,
}

pub fn reynolds_number(rho: f64, u: f64, l: f64, mu: f64) -> f64 {
    if mu == 0.0 {
        return 0.0;
    }
    rho * u * l / mu
}

pub fn skin_friction_coefficient(re: f64) -> f64 {
    if re < RE_TRANSITION {
        0.664 / re.sqrt()
    } else {
        0.0592 * re.powf(-0.2)
    }
}

pub fn wall_shear_stress(rho: f64, u: f64, cf: f64) -> f64 {
    0.5 * rho * u * u * cf
}

pub fn friction_velocity(tau_w: f64, rho: f64) -> f64 {
    (tau_w / rho).sqrt()
}

pub fn first_cell_height(y_plus: f64, mu: f64, u_tau: f64, rho: f64) -> f64 {
    if u_tau == 0.0 || rho == 0.0 {
        return 0.0;
    }
    y_plus * mu / (u_tau * rho)
}

pub fn boundary_layer_thickness(re: f64, l: f64, laminar: bool) -> f64 {
    if laminar {
        5.0 * l / re.sqrt()
    } else {
        0.37 * l / re.powf(0.2)
    }
}

/// Layers of a geometric stack starting at `first_cell` needed to reach `delta`.
pub fn layer_count(delta: f64, first_cell: f64, growth_rate: f64) -> u32 {
    if first_cell == 0.0 {
        return 0;
    }
    let n = if growth_rate == 1.0 {
        delta / first_cell
    } else {
        (1.0 + (delta / first_cell) * (growth_rate - 1.0)).ln() / growth_rate.ln()
    };
    if n.is_finite() && n > 0.0 {
        n.ceil() as u32
    } else {
        0
    }
}

/// Turbulence model advice for a target y+.
pub fn model_advice(y_plus: f64, laminar: bool) -> (Vec<String>, Vec<String>) {
    let mut recommendations = Vec::new();
    let mut warnings = Vec::new();

    if laminar {
        recommendations.push("Flow is Laminar. Use 'Laminar' model.".to_string());
        return (recommendations, warnings);
    }

    if y_plus < 1.0 {
        recommendations.push("Best: k-omega SST (Menter)".to_string());
        recommendations.push("Alternative: Spalart-Allmaras".to_string());
    } else if y_plus <= 5.0 {
        recommendations.push("Best: k-omega SST (Handles transition well)".to_string());
    } else if y_plus < 30.0 {
        warnings.push(
            "Target y+ is in Buffer Layer (5-30). Avoid placing first node here.".to_string(),
        );
        recommendations.push("Advice: Refine to y+ < 1 or coarsen to y+ > 30.".to_string());
    } else if y_plus <= 300.0 {
        recommendations.push("Best: Standard k-epsilon (Wall Functions)".to_string());
        recommendations.push("Best: Realizable k-epsilon (Wall Functions)".to_string());
        warnings.push("Avoid: Standard k-omega (requires y+ ~1)".to_string());
    } else {
        warnings.push(
            "y+ > 300. Mesh is likely too coarse for accurate boundary layer physics.".to_string(),
        );
    }

    (recommendations, warnings)
}

/// Runs the full estimate.
pub fn estimate(input: &WallSpacingInput) -> WallSpacingReport {
    let Fluid { rho, mu } = input.fluid;
    let reynolds = reynolds_number(rho, input.velocity, input.length, mu);
    let is_laminar = reynolds < RE_TRANSITION;
    let skin_friction = skin_friction_coefficient(reynolds);
    let tau_w = wall_shear_stress(rho, input.velocity, skin_friction);
    let u_tau = friction_velocity(tau_w, rho);
    let dy = first_cell_height(input.y_plus, mu, u_tau, rho);
    let delta = boundary_layer_thickness(reynolds, input.length, is_laminar);
    let num_layers = layer_count(delta, dy, input.growth_rate);

    let (recommendations, mut warnings) = model_advice(input.y_plus, is_laminar);
    if mu > 1.0 {
        warnings.push(format!(
            "Viscosity {} Pa.s seems high. Ensure it is Dynamic Viscosity.",
            mu
        ));
    }

    WallSpacingReport {
        reynolds,
        is_laminar,
        skin_friction,
        wall_shear_stress: tau_w,
        friction_velocity: u_tau,
        first_cell_height: dy,
        boundary_layer_thickness: delta,
        num_layers,
        recommendations,
        warnings,
    }
}
