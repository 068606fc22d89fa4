//! Outlet rules: pinned pressure, optional backflow protection.

use super::{BoundaryCondition, Condition, RuleTable};
use crate::case::{BoundaryPatch, SimulationContext};
use crate::field::{Field, FieldValue};
use crate::params::OutletParams;

pub(super) fn rules() -> RuleTable {
    RuleTable::new()
        .with_rule(&[Field::U], velocity)
        .with_rule(&[Field::P], pressure)
        .with_rule(
            &[Field::K, Field::Epsilon, Field::Omega, Field::Nut],
            turbulence,
        )
}

fn velocity(patch: &BoundaryPatch, _field: &Field, _ctx: &SimulationContext) -> BoundaryCondition {
    if patch.is_backflow_possible {
        BoundaryCondition::new(Condition::InletOutlet {
            inlet_value: FieldValue::zero_vector(),
            value: FieldValue::zero_vector(),
        })
        .explained("Prevents unphysical inflow.")
    } else {
        BoundaryCondition::zero_gradient().explained("Fully developed outflow.")
    }
}

fn pressure(patch: &BoundaryPatch, _field: &Field, _ctx: &SimulationContext) -> BoundaryCondition {
    let params = OutletParams::from_inputs(&patch.inputs);
    BoundaryCondition::fixed_value(FieldValue::Scalar(params.pressure))
        .explained("Outlet pressure pinned.")
}

fn turbulence(_patch: &BoundaryPatch, _field: &Field, _ctx: &SimulationContext) -> BoundaryCondition {
    BoundaryCondition::zero_gradient().explained("Outlet assumes developed flow")
}
