//! Struct method stub generation.

use crate::cpp::functions::FunctionEmitter;
use crate::error::CodegenError;
use crate::report::GenerationReport;
use flatstub_schema::types::StructDef;

/// Generator for struct methods.
pub struct StructGenerator<'a> {
    structs: &'a [StructDef],
    emitter: &'a FunctionEmitter<'a>,
}

impl<'a> StructGenerator<'a> {
    /// Creates a new struct generator.
    #[must_use]
    pub fn new(structs: &'a [StructDef], emitter: &'a FunctionEmitter<'a>) -> Self {
        Self { structs, emitter }
    }

    /// Generates the flat methods of every struct, in schema order.
    ///
    /// # Errors
    /// Returns `CodegenError` if a method cannot be generated.
    pub fn generate(&self, report: &mut GenerationReport) -> Result<String, CodegenError> {
        let mut output = String::new();

        for def in self.structs {
            for method in &def.methods {
                match self.emitter.generate_method(&def.name, method, report)? {
                    Some(function) => {
                        output.push_str(&function);
                        report.struct_methods += 1;
                    }
                    None => report.skipped_methods += 1,
                }
            }
        }

        tracing::debug!("Generated {} struct methods", report.struct_methods);

        Ok(output)
    }
}
