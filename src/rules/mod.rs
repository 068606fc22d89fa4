//! Face rule resolvers.
//!
//! Each face type owns a [`RuleTable`]: a map from field to the rule that
//! decides its condition. Fields without an entry resolve to `zeroGradient`,
//! and so does every field of a face type without dedicated rules
//! (`symmetry`, `cyclic`).

mod condition;
mod inlet;
mod outlet;
mod wall;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::case::{BoundaryPatch, FaceType, SimulationContext};
use crate::field::Field;

pub use condition::{BoundaryCondition, Condition};
pub use wall::WallTreatment;

/// Decides the condition of one field on one patch.
pub type Rule = fn(&BoundaryPatch, &Field, &SimulationContext) -> BoundaryCondition;

/// Field-to-rule strategy map for one face type.
#[derive(Default)]
pub struct RuleTable {
    rules: HashMap<Field, Rule>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `rule` for every field in `fields`, replacing earlier entries.
    pub fn with_rule(mut self, fields: &[Field], rule: Rule) -> Self {
        for field in fields {
            self.rules.insert(field.clone(), rule);
        }
        self
    }

    /// True when `field` has a dedicated rule.
    pub fn handles(&self, field: &Field) -> bool {
        self.rules.contains_key(field)
    }

    pub fn resolve(
        &self,
        patch: &BoundaryPatch,
        field: &Field,
        context: &SimulationContext,
    ) -> BoundaryCondition {
        match self.rules.get(field) {
            Some(rule) => rule(patch, field, context),
            None => BoundaryCondition::zero_gradient(),
        }
    }
}

static INLET_RULES: LazyLock<RuleTable> = LazyLock::new(inlet::rules);
static OUTLET_RULES: LazyLock<RuleTable> = LazyLock::new(outlet::rules);
static WALL_RULES: LazyLock<RuleTable> = LazyLock::new(wall::rules);
static FALLBACK_RULES: LazyLock<RuleTable> = LazyLock::new(RuleTable::new);

/// Rule table for a face type.
pub fn rules_for(face_type: FaceType) -> &'static RuleTable {
    match face_type {
        FaceType::Inlet => &INLET_RULES,
        FaceType::Outlet => &OUTLET_RULES,
        FaceType::Wall => &WALL_RULES,
        FaceType::Symmetry | FaceType::Cyclic => &FALLBACK_RULES,
    }
}

/// Resolves the boundary condition of `field` on `patch`.
pub fn resolve(
    patch: &BoundaryPatch,
    field: &Field,
    context: &SimulationContext,
) -> BoundaryCondition {
    rules_for(patch.face_type).resolve(patch, field, context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetry_and_cyclic_fall_back() {
        let ctx = SimulationContext::default();
        for face in [FaceType::Symmetry, FaceType::Cyclic] {
            let patch = BoundaryPatch::new("side", face)
                .with_input("velocity_mag", 3.0)
                .with_input("y_plus", 0.5);
            for field in [Field::U, Field::P, Field::K, Field::Nut, Field::from("T")] {
                assert_eq!(
                    resolve(&patch, &field, &ctx),
                    BoundaryCondition::zero_gradient()
                );
            }
        }
    }

    #[test]
    fn test_rule_coverage() {
        assert!(rules_for(FaceType::Inlet).handles(&Field::Omega));
        assert!(!rules_for(FaceType::Inlet).handles(&Field::Nut));
        assert!(rules_for(FaceType::Outlet).handles(&Field::Nut));
        assert!(rules_for(FaceType::Wall).handles(&Field::Nut));
        assert!(!rules_for(FaceType::Cyclic).handles(&Field::U));
    }

    #[test]
    fn test_custom_table() {
        fn no_slip(_: &BoundaryPatch, _: &Field, _: &SimulationContext) -> BoundaryCondition {
            BoundaryCondition::new(Condition::NoSlip)
        }
        let table = RuleTable::new().with_rule(&[Field::U], no_slip);
        let ctx = SimulationContext::default();
        let patch = BoundaryPatch::wall("w");
        assert_eq!(table.resolve(&patch, &Field::U, &ctx).type_name(), "noSlip");
        assert_eq!(table.resolve(&patch, &Field::P, &ctx).type_name(), "zeroGradient");
    }

    #[test]
    fn test_resolution_does_not_mutate_inputs() {
        let ctx = SimulationContext::default();
        let patch = BoundaryPatch::inlet("in").with_input("velocity_mag", 10.0);
        let before = patch.clone();
        let _ = resolve(&patch, &Field::K, &ctx);
        assert_eq!(patch, before);
    }
}
