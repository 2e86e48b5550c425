//! Stub function emission.
//!
//! Renders one flat function definition per method or accessor. Methods take
//! their owner as an explicit `self` pointer ahead of the declared parameters.

use crate::config::{GeneratorConfig, UnhandledPolicy};
use crate::defaults::{DefaultValue, infer_default};
use crate::error::CodegenError;
use crate::report::{GenerationReport, UnhandledReturn};
use flatstub_schema::types::{Accessor, Method};
use flatstub_schema::TypeMap;

/// Emitter for individual stub functions.
pub struct FunctionEmitter<'a> {
    type_map: &'a TypeMap,
    config: &'a GeneratorConfig,
}

impl<'a> FunctionEmitter<'a> {
    /// Creates a new function emitter.
    #[must_use]
    pub fn new(type_map: &'a TypeMap, config: &'a GeneratorConfig) -> Self {
        Self { type_map, config }
    }

    /// Renders the signature of a method exported as `name`.
    ///
    /// # Arguments
    /// * `owner` - Interface or struct name, used for the `self` pointer
    /// * `name` - Flat function name
    /// * `method` - Method providing return and parameter types
    #[must_use]
    pub fn signature(&self, owner: &str, name: &str, method: &Method) -> String {
        let mut output = String::new();

        output.push_str(self.config.export_macro_name());
        output.push(' ');
        output.push_str(method.signature_return_type());
        output.push(' ');
        if let Some(call_type) = self.config.call_type_name() {
            output.push_str(call_type);
            output.push(' ');
        }
        output.push_str(name);

        output.push('(');
        output.push_str(&format!("{} * self", owner));
        for param in &method.params {
            output.push_str(&format!(", {} {}", param.emitted_type(), param.name));
        }
        output.push(')');

        output
    }

    /// Generates the full definition of a method.
    ///
    /// Returns `None` if the method has no flat name.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownReturnType` if the return type is not
    /// covered and the policy is [`UnhandledPolicy::Fail`].
    pub fn generate_method(
        &self,
        owner: &str,
        method: &Method,
        report: &mut GenerationReport,
    ) -> Result<Option<String>, CodegenError> {
        let Some(name) = method.flat_name.as_deref() else {
            return Ok(None);
        };

        let canonical = self.type_map.resolve(method.signature_return_type());
        let body = match infer_default(canonical) {
            DefaultValue::Body(body) => body,
            DefaultValue::Unhandled { type_name } => match self.config.unhandled_policy() {
                UnhandledPolicy::Fail => {
                    return Err(CodegenError::unknown_return_type(name, type_name));
                }
                UnhandledPolicy::Warn => {
                    tracing::warn!("Unhandled return type '{}' in {}", type_name, name);
                    report.unhandled.push(UnhandledReturn {
                        function: name.to_string(),
                        type_name,
                    });
                    String::new()
                }
            },
        };

        let mut output = self.signature(owner, name, method);
        output.push_str(" {\n");
        output.push_str(&body);
        output.push_str("}\n\n");

        Ok(Some(output))
    }

    /// Generates an accessor that always yields a null interface pointer.
    #[must_use]
    pub fn generate_accessor(&self, class_name: &str, accessor: &Accessor) -> String {
        let call_type = self
            .config
            .call_type_name()
            .map(|ct| format!("{} ", ct))
            .unwrap_or_default();

        format!(
            "{} {} *{}{}(){{ return nullptr; }}\n\n",
            self.config.export_macro_name(),
            class_name,
            call_type,
            accessor.flat_name
        )
    }
}
