//! Generator configuration.

/// Default conditional-compilation guard symbol.
pub const DEFAULT_GUARD: &str = "USE_STEAMWORKS_STUB";
/// Default header included by the generated file.
pub const DEFAULT_HEADER: &str = "steam/steam_api_flat.h";
/// Default external-linkage marker macro.
pub const DEFAULT_EXPORT_MACRO: &str = "S_API";

/// What to do with a return type no default-value rule covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnhandledPolicy {
    /// Log a warning, record it in the report and emit the function without
    /// a return statement.
    #[default]
    Warn,
    /// Abort generation with `CodegenError::UnknownReturnType`.
    Fail,
}

/// Settings for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    guard: String,
    header: String,
    export_macro: String,
    call_type: Option<String>,
    unhandled: UnhandledPolicy,
}

impl GeneratorConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            guard: DEFAULT_GUARD.to_string(),
            header: DEFAULT_HEADER.to_string(),
            export_macro: DEFAULT_EXPORT_MACRO.to_string(),
            call_type: None,
            unhandled: UnhandledPolicy::default(),
        }
    }

    /// Sets the guard symbol wrapping the whole file.
    #[must_use]
    pub fn guard(mut self, symbol: impl Into<String>) -> Self {
        self.guard = symbol.into();
        self
    }

    /// Sets the header path of the include directive.
    #[must_use]
    pub fn header(mut self, path: impl Into<String>) -> Self {
        self.header = path.into();
        self
    }

    /// Sets the external-linkage marker placed before each function.
    #[must_use]
    pub fn export_macro(mut self, name: impl Into<String>) -> Self {
        self.export_macro = name.into();
        self
    }

    /// Sets the calling-convention macro placed before each function name.
    #[must_use]
    pub fn call_type(mut self, name: impl Into<String>) -> Self {
        self.call_type = Some(name.into());
        self
    }

    /// Sets the unhandled return type policy.
    #[must_use]
    pub fn unhandled(mut self, policy: UnhandledPolicy) -> Self {
        self.unhandled = policy;
        self
    }

    /// Shorthand for [`UnhandledPolicy::Fail`].
    #[must_use]
    pub fn strict(self) -> Self {
        self.unhandled(UnhandledPolicy::Fail)
    }

    /// Returns the guard symbol.
    #[must_use]
    pub fn guard_symbol(&self) -> &str {
        &self.guard
    }

    /// Returns the included header path.
    #[must_use]
    pub fn header_path(&self) -> &str {
        &self.header
    }

    /// Returns the export macro.
    #[must_use]
    pub fn export_macro_name(&self) -> &str {
        &self.export_macro
    }

    /// Returns the calling-convention macro, if any.
    #[must_use]
    pub fn call_type_name(&self) -> Option<&str> {
        self.call_type.as_deref()
    }

    /// Returns the unhandled return type policy.
    #[must_use]
    pub fn unhandled_policy(&self) -> UnhandledPolicy {
        self.unhandled
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
