use crate::field::FieldValue;

/// An OpenFOAM patch condition together with the entries its type needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    ZeroGradient,
    NoSlip,
    FixedValue {
        value: FieldValue,
    },
    Calculated {
        value: FieldValue,
    },
    /// Zero-gradient outflow that switches to `inlet_value` on reversed flow.
    InletOutlet {
        inlet_value: FieldValue,
        value: FieldValue,
    },
    TotalPressure {
        p0: FieldValue,
        value: FieldValue,
    },
    KqRWallFunction {
        value: FieldValue,
    },
    EpsilonWallFunction {
        value: FieldValue,
    },
    OmegaWallFunction {
        value: FieldValue,
    },
    NutkWallFunction {
        value: FieldValue,
    },
    /// Sand-grain roughness wall function.
    NutkRoughWallFunction {
        ks: FieldValue,
        cs: FieldValue,
    },
}

impl Condition {
    /// OpenFOAM `type` keyword.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::ZeroGradient => "zeroGradient",
            Self::NoSlip => "noSlip",
            Self::FixedValue { .. } => "fixedValue",
            Self::Calculated { .. } => "calculated",
            Self::InletOutlet { .. } => "inletOutlet",
            Self::TotalPressure { .. } => "totalPressure",
            Self::KqRWallFunction { .. } => "kqRWallFunction",
            Self::EpsilonWallFunction { .. } => "epsilonWallFunction",
            Self::OmegaWallFunction { .. } => "omegaWallFunction",
            Self::NutkWallFunction { .. } => "nutkWallFunction",
            Self::NutkRoughWallFunction { .. } => "nutkRoughWallFunction",
        }
    }

    /// Dictionary entries in output order: `value`, `p0`, `Ks`, `Cs`, `inletValue`.
    pub fn entries(&self) -> Vec<(&'static str, FieldValue)> {
        match *self {
            Self::ZeroGradient | Self::NoSlip => vec![],
            Self::FixedValue { value }
            | Self::Calculated { value }
            | Self::KqRWallFunction { value }
            | Self::EpsilonWallFunction { value }
            | Self::OmegaWallFunction { value }
            | Self::NutkWallFunction { value } => vec![("value", value)],
            Self::InletOutlet { inlet_value, value } => {
                vec![("value", value), ("inletValue", inlet_value)]
            }
            Self::TotalPressure { p0, value } => vec![("value", value), ("p0", p0)],
            Self::NutkRoughWallFunction { ks, cs } => vec![("Ks", ks), ("Cs", cs)],
        }
    }
}

/// The resolved condition for one (patch, field) pair.
///
/// `warning` flags a degraded fallback; `explanation` is descriptive only.
/// Both end up as comment lines in the generated file.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryCondition {
    pub condition: Condition,
    pub warning: Option<String>,
    pub explanation: Option<String>,
}

impl BoundaryCondition {
    pub fn new(condition: Condition) -> Self {
        Self {
            condition,
            warning: None,
            explanation: None,
        }
    }

    pub fn zero_gradient() -> Self {
        Self::new(Condition::ZeroGradient)
    }

    pub fn fixed_value(value: FieldValue) -> Self {
        Self::new(Condition::FixedValue { value })
    }

    pub fn explained(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn warned(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    pub fn type_name(&self) -> &'static str {
        self.condition.type_name()
    }

    /// Rendered entry (e.g. `uniform 0.375`) for a dictionary key, if the
    /// condition carries it.
    pub fn entry(&self, key: &str) -> Option<String> {
        self.condition
            .entries()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    }

    pub fn value(&self) -> Option<String> {
        self.entry("value")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_order() {
        let c = Condition::InletOutlet {
            inlet_value: FieldValue::zero_vector(),
            value: FieldValue::Vector([1.0, 0.0, 0.0]),
        };
        let keys: Vec<&str> = c.entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["value", "inletValue"]);

        let c = Condition::TotalPressure {
            p0: FieldValue::Scalar(1e5),
            value: FieldValue::Scalar(1e5),
        };
        let keys: Vec<&str> = c.entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["value", "p0"]);
        assert_eq!(c.type_name(), "totalPressure");
    }

    #[test]
    fn test_bare_conditions_have_no_entries() {
        assert!(Condition::ZeroGradient.entries().is_empty());
        assert!(Condition::NoSlip.entries().is_empty());
    }

    #[test]
    fn test_rough_wall_entries() {
        let bc = BoundaryCondition::new(Condition::NutkRoughWallFunction {
            ks: FieldValue::Scalar(0.1),
            cs: FieldValue::Scalar(0.5),
        });
        assert_eq!(bc.type_name(), "nutkRoughWallFunction");
        assert_eq!(bc.entry("Ks").as_deref(), Some("uniform 0.1"));
        assert_eq!(bc.entry("Cs").as_deref(), Some("uniform 0.5"));
        assert_eq!(bc.value(), None);
    }

    #[test]
    fn test_annotations() {
        let bc = BoundaryCondition::zero_gradient()
            .explained("note")
            .warned("careful");
        assert_eq!(bc.explanation.as_deref(), Some("note"));
        assert_eq!(bc.warning.as_deref(), Some("careful"));
    }
}
