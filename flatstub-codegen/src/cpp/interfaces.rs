//! Interface stub generation.

use crate::cpp::functions::FunctionEmitter;
use crate::error::CodegenError;
use crate::report::GenerationReport;
use flatstub_schema::types::Interface;

/// Generator for interface accessors and methods.
pub struct InterfaceGenerator<'a> {
    interfaces: &'a [Interface],
    emitter: &'a FunctionEmitter<'a>,
}

impl<'a> InterfaceGenerator<'a> {
    /// Creates a new interface generator.
    #[must_use]
    pub fn new(interfaces: &'a [Interface], emitter: &'a FunctionEmitter<'a>) -> Self {
        Self {
            interfaces,
            emitter,
        }
    }

    /// Generates all interfaces in schema order.
    ///
    /// Each interface contributes its accessors first, then its flat methods.
    ///
    /// # Errors
    /// Returns `CodegenError` if a method cannot be generated.
    pub fn generate(&self, report: &mut GenerationReport) -> Result<String, CodegenError> {
        let mut output = String::new();

        for interface in self.interfaces {
            output.push_str(&self.generate_interface(interface, report)?);
        }

        Ok(output)
    }

    /// Generates one interface.
    fn generate_interface(
        &self,
        interface: &Interface,
        report: &mut GenerationReport,
    ) -> Result<String, CodegenError> {
        let mut output = String::new();

        for accessor in &interface.accessors {
            output.push_str(
                &self
                    .emitter
                    .generate_accessor(&interface.class_name, accessor),
            );
            report.accessors += 1;
        }

        for method in &interface.methods {
            match self
                .emitter
                .generate_method(&interface.class_name, method, report)?
            {
                Some(function) => {
                    output.push_str(&function);
                    report.interface_methods += 1;
                }
                None => report.skipped_methods += 1,
            }
        }

        tracing::debug!(
            "Generated interface {} ({} accessors, {} methods)",
            interface.class_name,
            interface.accessors.len(),
            interface.methods.len()
        );

        Ok(output)
    }
}
