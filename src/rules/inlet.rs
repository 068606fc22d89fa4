//! Inlet rules: prescribed velocity, extrapolated pressure, turbulence from intensity.

use super::{BoundaryCondition, RuleTable};
use crate::case::{BoundaryPatch, SimulationContext};
use crate::field::{Field, FieldValue};
use crate::params::InletParams;
use crate::physics::default_for_field;

pub(super) fn rules() -> RuleTable {
    RuleTable::new()
        .with_rule(&[Field::U], velocity)
        .with_rule(&[Field::P], pressure)
        .with_rule(&[Field::K, Field::Epsilon, Field::Omega], turbulence)
}

fn velocity(patch: &BoundaryPatch, _field: &Field, _ctx: &SimulationContext) -> BoundaryCondition {
    match InletParams::from_inputs(&patch.inputs).velocity {
        Some(u) => BoundaryCondition::fixed_value(FieldValue::Vector(u))
            .explained("Velocity is explicitly known."),
        None => BoundaryCondition::fixed_value(FieldValue::zero_vector()),
    }
}

fn pressure(_patch: &BoundaryPatch, _field: &Field, ctx: &SimulationContext) -> BoundaryCondition {
    let explanation = if ctx.is_compressible() {
        "Standard for specified velocity inlet (compressible)"
    } else {
        "Pressure extrapolated (incompressible)"
    };
    BoundaryCondition::zero_gradient().explained(explanation)
}

fn turbulence(patch: &BoundaryPatch, field: &Field, _ctx: &SimulationContext) -> BoundaryCondition {
    let value = FieldValue::Scalar(default_for_field(field, &patch.inputs));
    let bc = BoundaryCondition::fixed_value(value)
        .explained("Fixed inlet turbulence based on intensity.");
    if value.is_finite() {
        bc
    } else {
        bc.warned(format!(
            "{} is not finite; check length_scale and turb_intensity.",
            field
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::super::resolve;
    use super::*;
    use crate::case::Compressibility;

    fn reference_inlet() -> BoundaryPatch {
        BoundaryPatch::inlet("inlet")
            .with_input("velocity_mag", 10.0)
            .with_input("turb_intensity", 0.05)
            .with_input("length_scale", 0.1)
    }

    #[test]
    fn test_inlet_k_from_intensity() {
        let ctx = SimulationContext::default();
        let bc = resolve(&reference_inlet(), &Field::K, &ctx);
        assert_eq!(bc.type_name(), "fixedValue");
        assert_eq!(bc.value().as_deref(), Some("uniform 0.375"));
        assert_eq!(
            bc.explanation.as_deref(),
            Some("Fixed inlet turbulence based on intensity.")
        );
        assert!(bc.warning.is_none());
    }

    #[test]
    fn test_inlet_omega_and_epsilon() {
        let ctx = SimulationContext::default();
        let patch = reference_inlet();
        for field in [Field::Epsilon, Field::Omega] {
            let bc = resolve(&patch, &field, &ctx);
            assert_eq!(bc.type_name(), "fixedValue");
            let expected = FieldValue::Scalar(default_for_field(&field, &patch.inputs));
            assert_eq!(bc.value(), Some(expected.to_string()));
        }
    }

    #[test]
    fn test_inlet_velocity_vector() {
        let ctx = SimulationContext::default();
        let patch = reference_inlet().with_input("velocity_x", 10.0);
        let bc = resolve(&patch, &Field::U, &ctx);
        assert_eq!(bc.type_name(), "fixedValue");
        assert_eq!(bc.value().as_deref(), Some("uniform (10 0 0)"));
        assert!(bc.explanation.is_some());
    }

    #[test]
    fn test_inlet_velocity_without_magnitude() {
        let ctx = SimulationContext::default();
        let patch = BoundaryPatch::inlet("in").with_input("velocity_x", 4.0);
        let bc = resolve(&patch, &Field::U, &ctx);
        assert_eq!(bc.value().as_deref(), Some("uniform (0 0 0)"));
        assert!(bc.explanation.is_none());
    }

    #[test]
    fn test_inlet_pressure_note_follows_compressibility() {
        let mut ctx = SimulationContext::default();
        let patch = reference_inlet();
        let inc = resolve(&patch, &Field::P, &ctx);
        ctx.compressibility = Compressibility::Compressible;
        let comp = resolve(&patch, &Field::P, &ctx);
        assert_eq!(inc.type_name(), "zeroGradient");
        assert_eq!(comp.type_name(), "zeroGradient");
        assert!(inc.explanation.unwrap().contains("incompressible"));
        assert!(comp.explanation.unwrap().contains("(compressible)"));
    }

    #[test]
    fn test_inlet_nut_and_unknown_fields_fall_back() {
        let ctx = SimulationContext::default();
        let patch = reference_inlet();
        for field in [Field::Nut, Field::from("T")] {
            let bc = resolve(&patch, &field, &ctx);
            assert_eq!(bc, BoundaryCondition::zero_gradient());
        }
    }

    #[test]
    fn test_zero_length_scale_is_flagged() {
        let ctx = SimulationContext::default();
        let patch = reference_inlet().with_input("length_scale", 0.0);
        let bc = resolve(&patch, &Field::Epsilon, &ctx);
        assert_eq!(bc.value().as_deref(), Some("uniform Infinity"));
        assert!(bc.warning.unwrap().contains("epsilon"));

        // k itself does not depend on L
        let k = resolve(&patch, &Field::K, &ctx);
        assert!(k.warning.is_none());
    }
}
