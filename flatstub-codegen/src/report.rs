//! Generation statistics.

/// Function whose return type no rule covered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnhandledReturn {
    /// Flat function name.
    pub function: String,
    /// Canonical return type.
    pub type_name: String,
}

/// Summary of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Accessor functions emitted.
    pub accessors: usize,
    /// Interface methods emitted.
    pub interface_methods: usize,
    /// Struct methods emitted.
    pub struct_methods: usize,
    /// Methods left out because they have no flat name.
    pub skipped_methods: usize,
    /// Functions emitted without a return statement, in output order.
    pub unhandled: Vec<UnhandledReturn>,
}

impl GenerationReport {
    /// Total number of emitted functions.
    #[must_use]
    pub fn functions(&self) -> usize {
        self.accessors + self.interface_methods + self.struct_methods
    }

    /// Returns true if every non-void function got a return statement.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.unhandled.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_totals() {
        let report = GenerationReport {
            accessors: 2,
            interface_methods: 5,
            struct_methods: 1,
            skipped_methods: 3,
            unhandled: Vec::new(),
        };
        assert_eq!(report.functions(), 8);
        assert!(report.is_clean());
    }

    #[test]
    fn test_report_unhandled() {
        let report = GenerationReport {
            unhandled: vec![UnhandledReturn {
                function: "SteamAPI_ISteamUtils_GetRatio".to_string(),
                type_name: "double".to_string(),
            }],
            ..Default::default()
        };
        assert!(!report.is_clean());
        assert_eq!(report.functions(), 0);
    }
}
