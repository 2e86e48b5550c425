//! Stub file generator.
//!
//! Wraps the interface and struct output in a conditional-compilation guard
//! together with the flat API header include.

use crate::config::GeneratorConfig;
use crate::cpp::{FunctionEmitter, InterfaceGenerator, StructGenerator};
use crate::error::CodegenError;
use crate::report::GenerationReport;
use flatstub_schema::Schema;

/// Output of a generation run.
#[derive(Debug, Clone)]
pub struct GeneratedStub {
    /// Generated source text.
    pub code: String,
    /// Statistics and diagnostics.
    pub report: GenerationReport,
}

/// Orchestrates stub generation for a whole schema.
pub struct Generator<'a> {
    schema: &'a Schema,
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a generator with default settings.
    #[must_use]
    pub fn new(schema: &'a Schema) -> Self {
        Self::with_config(schema, GeneratorConfig::default())
    }

    /// Creates a generator with the given settings.
    #[must_use]
    pub fn with_config(schema: &'a Schema, config: GeneratorConfig) -> Self {
        Self { schema, config }
    }

    /// Generates the complete stub file.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownReturnType` in strict mode when a return
    /// type has no default-value rule.
    pub fn generate(&self) -> Result<GeneratedStub, CodegenError> {
        let type_map = self.schema.type_map();
        let emitter = FunctionEmitter::new(&type_map, &self.config);
        let mut report = GenerationReport::default();
        let guard = self.config.guard_symbol();

        tracing::debug!(
            "Generating stubs for {} flat methods",
            self.schema.flat_method_count()
        );

        let mut output = String::new();
        output.push_str(&format!("#ifdef {}\n", guard));
        output.push_str(&format!(
            "#include \"{}\"\n\n",
            self.config.header_path()
        ));

        output.push_str(
            &InterfaceGenerator::new(&self.schema.interfaces, &emitter).generate(&mut report)?,
        );
        output.push_str(
            &StructGenerator::new(&self.schema.structs, &emitter).generate(&mut report)?,
        );

        output.push_str(&format!("#endif // {}\n", guard));

        tracing::info!(
            "Generated {} stub functions ({} skipped, {} without return value)",
            report.functions(),
            report.skipped_methods,
            report.unhandled.len()
        );

        Ok(GeneratedStub {
            code: output,
            report,
        })
    }
}
