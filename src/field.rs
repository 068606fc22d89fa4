//! Field identifiers, physical dimensions and uniform values.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::case::SimulationContext;

/// A solver field written as one file under `0/`.
///
/// The six fields the rule engine knows about get their own variant; any
/// other name is carried verbatim in [`Field::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Velocity.
    U,
    /// Pressure (kinematic when incompressible).
    P,
    /// Turbulent kinetic energy.
    K,
    /// Turbulent dissipation rate.
    Epsilon,
    /// Specific dissipation rate.
    Omega,
    /// Turbulent (eddy) viscosity.
    Nut,
    Other(String),
}

impl Field {
    pub fn name(&self) -> &str {
        match self {
            Self::U => "U",
            Self::P => "p",
            Self::K => "k",
            Self::Epsilon => "epsilon",
            Self::Omega => "omega",
            Self::Nut => "nut",
            Self::Other(name) => name,
        }
    }

    pub fn class(&self) -> FieldClass {
        match self {
            Self::U => FieldClass::Vector,
            _ => FieldClass::Scalar,
        }
    }

    /// Default `internalField` value.
    pub fn internal_value(&self) -> FieldValue {
        match self.class() {
            FieldClass::Vector => FieldValue::zero_vector(),
            FieldClass::Scalar => FieldValue::Scalar(0.0),
        }
    }

    /// Physical dimensions of the field. `p` is kinematic unless the case is
    /// compressible; unknown fields are dimensionless.
    pub fn dimensions(&self, context: &SimulationContext) -> Dimensions {
        match self {
            Self::U => Dimensions::new(0, 1, -1),
            Self::P if context.is_compressible() => Dimensions::new(1, -1, -2),
            Self::P => Dimensions::new(0, 2, -2),
            Self::K => Dimensions::new(0, 2, -2),
            Self::Epsilon => Dimensions::new(0, 2, -3),
            Self::Omega => Dimensions::new(0, 0, -1),
            Self::Nut => Dimensions::new(0, 2, -1),
            Self::Other(_) => Dimensions::default(),
        }
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        match value {
            "U" => Self::U,
            "p" => Self::P,
            "k" => Self::K,
            "epsilon" => Self::Epsilon,
            "omega" => Self::Omega,
            "nut" => Self::Nut,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Field {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl FromStr for Field {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// OpenFOAM field class tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldClass {
    Vector,
    Scalar,
}

impl FieldClass {
    pub fn foam_name(&self) -> &'static str {
        match self {
            Self::Vector => "volVectorField",
            Self::Scalar => "volScalarField",
        }
    }
}

/// SI exponents `[mass length time temperature quantity current luminosity]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions(pub [i8; 7]);

impl Dimensions {
    /// Mechanical dimensions (mass, length, time); the rest stay zero.
    pub const fn new(mass: i8, length: i8, time: i8) -> Self {
        Self([mass, length, time, 0, 0, 0, 0])
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "[{}]", parts.join(" "))
    }
}

/// A spatially uniform field value, rendered as `uniform <v>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Scalar(f64),
    Vector([f64; 3]),
}

impl FieldValue {
    pub fn zero_vector() -> Self {
        Self::Vector([0.0; 3])
    }

    /// The bare value without the `uniform` keyword.
    pub fn raw(&self) -> String {
        match self {
            Self::Scalar(v) => format_number(*v),
            Self::Vector([x, y, z]) => format!(
                "({} {} {})",
                format_number(*x),
                format_number(*y),
                format_number(*z)
            ),
        }
    }

    pub fn is_finite(&self) -> bool {
        match self {
            Self::Scalar(v) => v.is_finite(),
            Self::Vector(v) => v.iter().all(|c| c.is_finite()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "uniform {}", self.raw())
    }
}

/// Formats a number in shortest round-trip form.
///
/// Magnitudes below `1e-5` or from `1e21` up switch to exponent form (`1e-6`,
/// `1e+21`), whole numbers have no fractional part, and non-finite values are
/// spelled out.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1e21 {
        format!("{:e}", value).replacen('e', "e+", 1)
    } else if magnitude < 1e-5 {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::{Compressibility, SimulationContext};

    #[test]
    fn test_field_names_roundtrip() {
        for name in ["U", "p", "k", "epsilon", "omega", "nut", "nuTilda"] {
            let field = Field::from(name);
            assert_eq!(field.name(), name);
            assert_eq!(field.to_string(), name);
        }
        assert_eq!(Field::from("nuTilda"), Field::Other("nuTilda".to_string()));
        assert_eq!("omega".parse::<Field>(), Ok(Field::Omega));
    }

    #[test]
    fn test_field_class() {
        assert_eq!(Field::U.class(), FieldClass::Vector);
        assert_eq!(Field::Nut.class(), FieldClass::Scalar);
        assert_eq!(Field::U.class().foam_name(), "volVectorField");
        assert_eq!(Field::U.internal_value().raw(), "(0 0 0)");
        assert_eq!(Field::K.internal_value().raw(), "0");
    }

    #[test]
    fn test_pressure_dimensions_follow_compressibility() {
        let mut ctx = SimulationContext::default();
        assert_eq!(Field::P.dimensions(&ctx).to_string(), "[0 2 -2 0 0 0 0]");
        ctx.compressibility = Compressibility::Compressible;
        assert_eq!(Field::P.dimensions(&ctx).to_string(), "[1 -1 -2 0 0 0 0]");
    }

    #[test]
    fn test_dimension_table() {
        let ctx = SimulationContext::default();
        assert_eq!(Field::U.dimensions(&ctx).to_string(), "[0 1 -1 0 0 0 0]");
        assert_eq!(Field::K.dimensions(&ctx).to_string(), "[0 2 -2 0 0 0 0]");
        assert_eq!(Field::Epsilon.dimensions(&ctx).to_string(), "[0 2 -3 0 0 0 0]");
        assert_eq!(Field::Omega.dimensions(&ctx).to_string(), "[0 0 -1 0 0 0 0]");
        assert_eq!(Field::Nut.dimensions(&ctx).to_string(), "[0 2 -1 0 0 0 0]");
        assert_eq!(
            Field::from("T").dimensions(&ctx).to_string(),
            "[0 0 0 0 0 0 0]"
        );
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(0.375), "0.375");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(1e-6), "1e-6");
        assert_eq!(format_number(1e-10), "1e-10");
        assert_eq!(format_number(1e-15), "1e-15");
        assert_eq!(format_number(101325.0), "101325");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(5e-6), "5e-6");
        assert_eq!(format_number(2e-5), "0.00002");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_uniform_value_display() {
        assert_eq!(FieldValue::Scalar(0.375).to_string(), "uniform 0.375");
        assert_eq!(
            FieldValue::Vector([10.0, 0.0, -1.5]).to_string(),
            "uniform (10 0 -1.5)"
        );
        assert!(!FieldValue::Scalar(f64::NAN).is_finite());
    }
}
