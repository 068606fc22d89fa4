//! JSON case file I/O.
//!
//! A case file is a snapshot of the global settings and the ordered patch
//! list:
//!
//! ```json
//! {
//!   "global_settings": { "flow_type": "internal", "compressibility": "incompressible",
//!                        "turbulence_model": "kEpsilon", "heat_transfer": false },
//!   "boundaries": [
//!     { "name": "inlet", "type": "inlet", "inputs": { "velocity_mag": 10.0 },
//!       "is_backflow_possible": false, "is_rough_wall": false }
//!   ]
//! }
//! ```

use crate::case::Case;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Writes a case to a pretty-printed JSON file.
///
/// # Example
/// ```no_run
/// use foambc::case::Case;
/// use foambc::io::write_case;
/// use std::path::Path;
///
/// write_case(Path::new("cfd_boundary_conditions.json"), &Case::starter()).unwrap();
/// ```
pub fn write_case(path: &Path, case: &Case) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, case)
        .with_context(|| format!("Failed to serialize case to: {}", path.display()))?;

    Ok(())
}

/// Reads and validates a case from a JSON file.
pub fn read_case(path: &Path) -> Result<Case> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let case: Case = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to deserialize case from: {}", path.display()))?;
    validate_case(&case).with_context(|| format!("Invalid case file: {}", path.display()))?;

    Ok(case)
}

pub fn to_case_string(case: &Case) -> Result<String> {
    serde_json::to_string_pretty(case).context("Failed to serialize case to string")
}

pub fn from_case_string(json: &str) -> Result<Case> {
    let case: Case = serde_json::from_str(json).context("Failed to deserialize case from string")?;
    validate_case(&case)?;
    Ok(case)
}

/// Checks what the type system cannot: patch names are used verbatim as
/// dictionary keys and must be non-empty.
pub fn validate_case(case: &Case) -> Result<()> {
    for (i, patch) in case.boundaries.iter().enumerate() {
        anyhow::ensure!(
            !patch.name.trim().is_empty(),
            "boundary #{} has an empty name",
            i
        );
    }
    Ok(())
}
