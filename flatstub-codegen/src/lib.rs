//! # Flatstub Codegen
//!
//! Stub source generation from flat C API descriptions.
//!
//! This crate provides:
//! - Default return value inference for stub bodies
//! - Flat function signature and body emission
//! - Interface accessor/method and struct method generation
//! - Whole-file generation with guard and header include

pub mod config;
pub mod cpp;
pub mod defaults;
pub mod error;
pub mod generator;
pub mod report;

pub use config::{GeneratorConfig, UnhandledPolicy};
pub use defaults::{DefaultValue, ReturnClass, infer_default};
pub use error::CodegenError;
pub use generator::{GeneratedStub, Generator};
pub use report::{GenerationReport, UnhandledReturn};

use std::io::Write;
use std::path::Path;

/// Generates stub source from a flat API description string.
///
/// # Arguments
/// * `json` - Flat API description content
/// * `config` - Generator settings
///
/// # Returns
/// Generated source and report.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_json(
    json: &str,
    config: &GeneratorConfig,
) -> Result<GeneratedStub, CodegenError> {
    let schema = flatstub_schema::parse_schema(json)?;
    Generator::with_config(&schema, config.clone()).generate()
}

/// Generates stub source from a flat API description file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(
    path: &Path,
    config: &GeneratorConfig,
) -> Result<GeneratedStub, CodegenError> {
    let schema = flatstub_schema::parse_schema_file(path)?;
    Generator::with_config(&schema, config.clone()).generate()
}

/// Generates a stub file from a flat API description file.
///
/// The output is written to a temporary file next to `output` and moved into
/// place once complete, so a failed run leaves any existing output untouched.
/// An existing output keeps its permissions; a new one gets the mode a plain
/// create would give it (`0o666` less the umask on unix).
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, generation, or writing fails.
pub fn generate_to_file(
    schema: &Path,
    output: &Path,
    config: &GeneratorConfig,
) -> Result<GenerationReport, CodegenError> {
    let stub = generate_from_file(schema, config)?;

    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut file = builder.tempfile_in(dir)?;
    file.write_all(stub.code.as_bytes())?;
    if let Ok(existing) = std::fs::metadata(output) {
        file.as_file().set_permissions(existing.permissions())?;
    }
    file.persist(output).map_err(|e| e.error)?;

    tracing::debug!("Wrote {}", output.display());

    Ok(stub.report)
}
