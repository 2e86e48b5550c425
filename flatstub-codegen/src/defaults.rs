//! Default return value inference.
//!
//! A stub body has to type-check and link, nothing more. The canonical
//! return type is sorted into a [`ReturnClass`] by an ordered rule table and
//! each class renders a neutral value.

/// Integer-family type names returned as a plain `0`.
pub const INTEGER_TYPES: &[&str] = &[
    "unsigned short",
    "short",
    "int",
    "long long",
    "unsigned long long",
    "unsigned int",
    "unsigned char",
    "uint64_steamid",
];

/// Value types whose names do not carry the `_t` suffix.
pub const VALUE_TYPE_EXCEPTIONS: &[&str] = &["AudioPlayback_Status"];

/// Classification of a canonical return type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnClass {
    /// `void`, no return statement.
    Void,
    /// `float`.
    Float,
    /// One of [`INTEGER_TYPES`].
    Integer,
    /// `bool`.
    Bool,
    /// Anything ending in `*`.
    Pointer,
    /// Names starting with `E`, the enum naming convention.
    Enum,
    /// Names ending in `_t`, or one of [`VALUE_TYPE_EXCEPTIONS`].
    ValueType,
    /// No rule matched.
    Unhandled,
}

fn is_void(t: &str) -> bool {
    t == "void"
}

fn is_float(t: &str) -> bool {
    t == "float"
}

fn is_integer(t: &str) -> bool {
    INTEGER_TYPES.iter().any(|&name| name == t)
}

fn is_bool(t: &str) -> bool {
    t == "bool"
}

fn is_pointer(t: &str) -> bool {
    t.ends_with('*')
}

fn is_enum(t: &str) -> bool {
    t.starts_with('E')
}

fn is_value_type(t: &str) -> bool {
    t.ends_with("_t") || VALUE_TYPE_EXCEPTIONS.iter().any(|&name| name == t)
}

/// Ordered classification rules, first match wins.
const RULES: &[(fn(&str) -> bool, ReturnClass)] = &[
    (is_void, ReturnClass::Void),
    (is_float, ReturnClass::Float),
    (is_integer, ReturnClass::Integer),
    (is_bool, ReturnClass::Bool),
    (is_pointer, ReturnClass::Pointer),
    (is_enum, ReturnClass::Enum),
    (is_value_type, ReturnClass::ValueType),
];

impl ReturnClass {
    /// Classifies a canonical (already resolved) type name.
    #[must_use]
    pub fn classify(canonical: &str) -> Self {
        RULES
            .iter()
            .find(|(matches, _)| matches(canonical))
            .map_or(Self::Unhandled, |&(_, class)| class)
    }

    /// Renders the stub body for this class, or `None` for [`Self::Unhandled`].
    ///
    /// The body is empty for `void`, otherwise a single tab-indented return
    /// statement.
    #[must_use]
    pub fn body(self, canonical: &str) -> Option<String> {
        let body = match self {
            Self::Void => String::new(),
            Self::Float => "\treturn 0.0f;\n".to_string(),
            Self::Integer => "\treturn 0;\n".to_string(),
            Self::Bool => "\treturn false;\n".to_string(),
            Self::Pointer => "\treturn nullptr;\n".to_string(),
            Self::Enum => format!("\treturn ({})0;\n", canonical),
            Self::ValueType => format!("\treturn {}();\n", canonical),
            Self::Unhandled => return None,
        };
        Some(body)
    }
}

/// Result of default-value inference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    /// Body text to place between the braces.
    Body(String),
    /// No rule matched the type.
    Unhandled {
        /// Canonical type name.
        type_name: String,
    },
}

/// Infers the stub body for a canonical return type.
#[must_use]
pub fn infer_default(canonical: &str) -> DefaultValue {
    match ReturnClass::classify(canonical).body(canonical) {
        Some(body) => DefaultValue::Body(body),
        None => DefaultValue::Unhandled {
            type_name: canonical.to_string(),
        },
    }
}
