//! OpenFOAM `0/` field file generation.
//!
//! For every field the turbulence model requires, the generator resolves each
//! patch through [`crate::rules`] and renders one dictionary file.

use indexmap::IndexMap;

use crate::case::{BoundaryPatch, Case, SimulationContext, TurbulenceModel};
use crate::field::Field;
use crate::rules::{self, BoundaryCondition};

/// Generated file contents keyed by field, in generation order.
pub type FieldFiles = IndexMap<Field, String>;

/// Settings that only affect the file header.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Version tag shown in the banner.
    pub openfoam_version: String,
    /// Value of the `location` header entry.
    pub location: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            openfoam_version: "v2012".to_string(),
            location: "0".to_string(),
        }
    }
}

/// Fields written for a turbulence model, in output order.
///
/// SpalartAllmaras gets no transport field here; `nuTilda` is not generated.
pub fn required_fields(model: TurbulenceModel) -> Vec<Field> {
    let mut fields = vec![Field::U, Field::P];
    match model {
        TurbulenceModel::KEpsilon => fields.extend([Field::K, Field::Epsilon, Field::Nut]),
        TurbulenceModel::KOmegaSst => fields.extend([Field::K, Field::Omega, Field::Nut]),
        TurbulenceModel::Laminar | TurbulenceModel::SpalartAllmaras => {}
    }
    fields
}

/// Boundary condition file generator.
#[derive(Debug, Clone, Default)]
pub struct BcGenerator {
    config: GeneratorConfig,
}

impl BcGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Renders every required field for the given context and patches.
    pub fn generate_all(
        &self,
        context: &SimulationContext,
        patches: &[BoundaryPatch],
    ) -> FieldFiles {
        let fields = required_fields(context.turbulence_model);
        tracing::debug!(
            model = %context.turbulence_model,
            fields = fields.len(),
            patches = patches.len(),
            "generating boundary condition files"
        );
        if context.turbulence_model == TurbulenceModel::SpalartAllmaras {
            tracing::warn!("SpalartAllmaras selected: nuTilda is not generated");
        }
        if context.heat_transfer {
            tracing::warn!("heat transfer enabled: temperature field is not generated");
        }

        fields
            .into_iter()
            .map(|field| {
                let contents = self.render_field(&field, context, patches);
                (field, contents)
            })
            .collect()
    }

    /// Renders the complete file (header and boundary block) for one field.
    pub fn render_field(
        &self,
        field: &Field,
        context: &SimulationContext,
        patches: &[BoundaryPatch],
    ) -> String {
        let mut out = self.render_header(field, context);
        out.push_str("\nboundaryField\n{\n");
        for patch in patches {
            let bc = rules::resolve(patch, field, context);
            if let Some(warning) = &bc.warning {
                tracing::warn!(patch = %patch.name, field = %field, "{}", warning);
            }
            out.push_str(&render_patch(&patch.name, &bc));
        }
        out.push('}');
        out
    }

    fn render_header(&self, field: &Field, context: &SimulationContext) -> String {
        let version_line = format!("Version:  {}", self.config.openfoam_version);
        format!(
            r#"/*--------------------------------*- C++ -*----------------------------------*\
| =========                 |                                                 |
| \\      /  F ield         | OpenFOAM: The Open Source CFD Toolbox           |
|  \\    /   O peration     | {version_line:<48}|
|   \\  /    A nd           | Website:  www.openfoam.com                      |
|    \\/     M anipulation  |                                                 |
\*---------------------------------------------------------------------------*/
FoamFile
{{
    version     2.0;
    format      ascii;
    class       {class};
    location    "{location}";
    object      {field};
}}
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * //

dimensions      {dimensions};

internalField   {internal};

"#,
            class = field.class().foam_name(),
            location = self.config.location,
            dimensions = field.dimensions(context),
            internal = field.internal_value(),
        )
    }
}

/// Renders one patch sub-dictionary of `boundaryField`.
pub fn render_patch(name: &str, bc: &BoundaryCondition) -> String {
    let mut out = format!("    {}\n    {{\n", name);
    out.push_str(&format!("        {:<16}{};\n", "type", bc.type_name()));
    for (key, value) in bc.condition.entries() {
        out.push_str(&format!("        {:<16}{};\n", key, value));
    }
    if let Some(warning) = &bc.warning {
        out.push_str(&format!("        // WARNING: {}\n", warning));
    }
    if let Some(explanation) = &bc.explanation {
        out.push_str(&format!("        // Note: {}\n", explanation));
    }
    out.push_str("    }\n\n");
    out
}

/// Generates all files with the default configuration.
pub fn generate_all(context: &SimulationContext, patches: &[BoundaryPatch]) -> FieldFiles {
    BcGenerator::default().generate_all(context, patches)
}

/// Generates all files for a case snapshot.
pub fn generate_case(case: &Case) -> FieldFiles {
    generate_all(&case.global_settings, &case.boundaries)
}
