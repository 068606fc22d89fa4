//! Wall rules.
//!
//! Velocity and pressure are fixed choices (`noSlip`, impermeable). Turbulence
//! fields follow the near-wall treatment implied by the first-cell y+:
//!
//! | band          | y+            | k / epsilon / omega              | nut                          |
//! |---------------|---------------|----------------------------------|------------------------------|
//! | low-Re        | < 1           | `fixedValue` near zero           | `calculated 0`               |
//! | wall function | 30 ..= 300    | `*WallFunction 1e-6`             | `nutk(Rough)WallFunction`    |
//! | buffer        | 1 .. 30       | `nutkWallFunction 0` + warning   | same                         |
//! | too coarse    | > 300         | `nutkWallFunction 0` + warning   | same                         |

use super::{BoundaryCondition, Condition, RuleTable};
use crate::case::{BoundaryPatch, SimulationContext};
use crate::field::{Field, FieldValue};
use crate::params::WallParams;

const BUFFER_LAYER_WARNING: &str = "CRITICAL: y+ is in buffer layer (1 < y+ < 30).";
const TOO_COARSE_WARNING: &str =
    "CRITICAL: y+ is above the wall-function range (y+ > 300); buffer-layer fallback applied.";

/// Near-wall treatment band selected from the first-cell y+.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallTreatment {
    /// Viscous sublayer resolved (`y+ < 1`).
    LowReynolds,
    /// `1 <= y+ < 30`; neither approach is valid.
    Buffer,
    /// Log-law region (`30 <= y+ <= 300`).
    WallFunction,
    /// `y+ > 300`.
    TooCoarse,
}

impl WallTreatment {
    pub fn from_y_plus(y_plus: f64) -> Self {
        if y_plus < 1.0 {
            Self::LowReynolds
        } else if (30.0..=300.0).contains(&y_plus) {
            Self::WallFunction
        } else if y_plus > 300.0 {
            Self::TooCoarse
        } else {
            // Also catches NaN.
            Self::Buffer
        }
    }

    /// Warning attached to every turbulence condition in a degraded band.
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            Self::LowReynolds | Self::WallFunction => None,
            Self::Buffer => Some(BUFFER_LAYER_WARNING),
            Self::TooCoarse => Some(TOO_COARSE_WARNING),
        }
    }
}

pub(super) fn rules() -> RuleTable {
    RuleTable::new()
        .with_rule(&[Field::U], velocity)
        .with_rule(&[Field::P], pressure)
        .with_rule(
            &[Field::K, Field::Epsilon, Field::Omega, Field::Nut],
            turbulence,
        )
}

fn velocity(_patch: &BoundaryPatch, _field: &Field, _ctx: &SimulationContext) -> BoundaryCondition {
    BoundaryCondition::new(Condition::NoSlip).explained("Standard no-slip wall")
}

fn pressure(_patch: &BoundaryPatch, _field: &Field, _ctx: &SimulationContext) -> BoundaryCondition {
    BoundaryCondition::zero_gradient().explained("Wall is impermeable")
}

fn turbulence(patch: &BoundaryPatch, field: &Field, _ctx: &SimulationContext) -> BoundaryCondition {
    let params = WallParams::from_inputs(&patch.inputs);
    let treatment = WallTreatment::from_y_plus(params.y_plus);
    match treatment {
        WallTreatment::LowReynolds => low_reynolds(field),
        WallTreatment::WallFunction => wall_function(field, patch.is_rough_wall, &params),
        WallTreatment::Buffer | WallTreatment::TooCoarse => {
            let bc = BoundaryCondition::new(Condition::NutkWallFunction {
                value: FieldValue::Scalar(0.0),
            });
            match treatment.warning() {
                Some(w) => bc.warned(w),
                None => bc,
            }
        }
    }
}

fn low_reynolds(field: &Field) -> BoundaryCondition {
    match field {
        Field::K => BoundaryCondition::fixed_value(FieldValue::Scalar(1e-15)),
        Field::Epsilon | Field::Omega => BoundaryCondition::fixed_value(FieldValue::Scalar(1e-10)),
        _ => BoundaryCondition::new(Condition::Calculated {
            value: FieldValue::Scalar(0.0),
        }),
    }
}

fn wall_function(field: &Field, rough: bool, params: &WallParams) -> BoundaryCondition {
    let value = FieldValue::Scalar(1e-6);
    let condition = match field {
        Field::K => Condition::KqRWallFunction { value },
        Field::Epsilon => Condition::EpsilonWallFunction { value },
        Field::Omega => Condition::OmegaWallFunction { value },
        _ if rough => {
            return BoundaryCondition::new(Condition::NutkRoughWallFunction {
                ks: FieldValue::Scalar(params.roughness_height),
                cs: FieldValue::Scalar(params.roughness_constant),
            });
        }
        _ => {
            return BoundaryCondition::new(Condition::NutkWallFunction {
                value: FieldValue::Scalar(0.0),
            });
        }
    };
    BoundaryCondition::new(condition).explained("Standard wall function")
}

#[cfg(test)]
mod tests {
    use super::super::resolve;
    use super::*;

    fn wall(y_plus: f64) -> BoundaryPatch {
        BoundaryPatch::wall("w").with_input("y_plus", y_plus)
    }

    #[test]
    fn test_treatment_bands() {
        assert_eq!(WallTreatment::from_y_plus(0.5), WallTreatment::LowReynolds);
        assert_eq!(WallTreatment::from_y_plus(1.0), WallTreatment::Buffer);
        assert_eq!(WallTreatment::from_y_plus(29.9), WallTreatment::Buffer);
        assert_eq!(WallTreatment::from_y_plus(30.0), WallTreatment::WallFunction);
        assert_eq!(WallTreatment::from_y_plus(300.0), WallTreatment::WallFunction);
        assert_eq!(WallTreatment::from_y_plus(300.5), WallTreatment::TooCoarse);
        assert_eq!(WallTreatment::from_y_plus(f64::NAN), WallTreatment::Buffer);
    }

    #[test]
    fn test_velocity_and_pressure() {
        let ctx = SimulationContext::default();
        assert_eq!(resolve(&wall(50.0), &Field::U, &ctx).type_name(), "noSlip");
        let p = resolve(&wall(50.0), &Field::P, &ctx);
        assert_eq!(p.type_name(), "zeroGradient");
        assert_eq!(p.explanation.as_deref(), Some("Wall is impermeable"));
    }

    #[test]
    fn test_low_re_band() {
        let ctx = SimulationContext::default();
        let patch = wall(0.5);

        let nut = resolve(&patch, &Field::Nut, &ctx);
        assert_eq!(nut.type_name(), "calculated");
        assert_eq!(nut.value().as_deref(), Some("uniform 0"));
        assert!(nut.warning.is_none());

        let k = resolve(&patch, &Field::K, &ctx);
        assert_eq!(k.type_name(), "fixedValue");
        assert_eq!(k.value().as_deref(), Some("uniform 1e-15"));

        for field in [Field::Epsilon, Field::Omega] {
            let bc = resolve(&patch, &field, &ctx);
            assert_eq!(bc.type_name(), "fixedValue");
            assert_eq!(bc.value().as_deref(), Some("uniform 1e-10"));
        }
    }

    #[test]
    fn test_wall_function_band() {
        let ctx = SimulationContext::default();
        let patch = wall(100.0);
        let expected = [
            (Field::K, "kqRWallFunction"),
            (Field::Epsilon, "epsilonWallFunction"),
            (Field::Omega, "omegaWallFunction"),
        ];
        for (field, ty) in expected {
            let bc = resolve(&patch, &field, &ctx);
            assert_eq!(bc.type_name(), ty);
            assert_eq!(bc.value().as_deref(), Some("uniform 1e-6"));
            assert!(bc.warning.is_none());
        }
        let nut = resolve(&patch, &Field::Nut, &ctx);
        assert_eq!(nut.type_name(), "nutkWallFunction");
        assert_eq!(nut.value().as_deref(), Some("uniform 0"));
    }

    #[test]
    fn test_rough_wall_nut() {
        let ctx = SimulationContext::default();
        let patch = wall(50.0)
            .with_rough_wall(true)
            .with_input("roughness_height", 0.1)
            .with_input("roughness_constant", 0.5);
        let bc = resolve(&patch, &Field::Nut, &ctx);
        assert_eq!(bc.type_name(), "nutkRoughWallFunction");
        assert_eq!(bc.entry("Ks").as_deref(), Some("uniform 0.1"));
        assert_eq!(bc.entry("Cs").as_deref(), Some("uniform 0.5"));
        assert_eq!(bc.value(), None);

        // roughness defaults
        let bare = wall(50.0).with_rough_wall(true);
        let bc = resolve(&bare, &Field::Nut, &ctx);
        assert_eq!(bc.entry("Ks").as_deref(), Some("uniform 0"));
        assert_eq!(bc.entry("Cs").as_deref(), Some("uniform 0.5"));
    }

    #[test]
    fn test_buffer_band_is_flagged_for_all_turbulence_fields() {
        let ctx = SimulationContext::default();
        let patch = wall(15.0);
        for field in [Field::K, Field::Epsilon, Field::Omega, Field::Nut] {
            let bc = resolve(&patch, &field, &ctx);
            assert_eq!(bc.type_name(), "nutkWallFunction");
            assert_eq!(bc.value().as_deref(), Some("uniform 0"));
            let warning = bc.warning.expect("buffer band must warn");
            assert!(warning.contains("buffer layer"));
        }
    }

    #[test]
    fn test_too_coarse_band_has_its_own_warning() {
        let ctx = SimulationContext::default();
        let bc = resolve(&wall(500.0), &Field::K, &ctx);
        assert_eq!(bc.type_name(), "nutkWallFunction");
        assert!(bc.warning.unwrap().contains("y+ > 300"));
    }

    #[test]
    fn test_missing_y_plus_uses_wall_functions() {
        let ctx = SimulationContext::default();
        let bc = resolve(&BoundaryPatch::wall("w"), &Field::K, &ctx);
        assert_eq!(bc.type_name(), "kqRWallFunction");
    }

    #[test]
    fn test_unknown_field_on_wall() {
        let ctx = SimulationContext::default();
        let bc = resolve(&wall(0.5), &Field::from("T"), &ctx);
        assert_eq!(bc, BoundaryCondition::zero_gradient());
    }
}
