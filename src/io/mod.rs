//! File I/O for cases and generated field files.
//!
//! This module provides functions for importing/exporting case snapshots as
//! JSON and for writing generated boundary condition files to a `0/` directory.

pub mod case_json;
pub mod foam;

pub use case_json::{from_case_string, read_case, to_case_string, validate_case, write_case};
pub use foam::write_field_files;
