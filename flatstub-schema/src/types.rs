//! Schema type definitions.
//!
//! This module contains the records of a flat API description: typedef
//! aliases, interfaces with their accessors and methods, and structs with
//! their methods. Field names follow the JSON keys of the SDK description.

use crate::resolver::TypeMap;
use serde::Deserialize;

/// Complete flat API description.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    /// Typedef aliases, in declaration order.
    pub typedefs: Vec<Typedef>,
    /// Interfaces, in declaration order.
    pub interfaces: Vec<Interface>,
    /// Structs, in declaration order.
    pub structs: Vec<StructDef>,
}

impl Schema {
    /// Builds the typedef lookup map for this schema.
    #[must_use]
    pub fn type_map(&self) -> TypeMap {
        TypeMap::from_typedefs(&self.typedefs)
    }

    /// Counts the methods that are part of the flat ABI surface, across
    /// interfaces and structs.
    #[must_use]
    pub fn flat_method_count(&self) -> usize {
        let interface_methods = self.interfaces.iter().flat_map(|i| &i.methods);
        let struct_methods = self.structs.iter().flat_map(|s| &s.methods);
        interface_methods
            .chain(struct_methods)
            .filter(|m| m.is_flat())
            .count()
    }
}

/// Named alias for another type name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Typedef {
    /// Alias name.
    #[serde(rename = "typedef")]
    pub name: String,
    /// Underlying type name.
    #[serde(rename = "type")]
    pub underlying_type: String,
}

impl Typedef {
    /// Creates a new typedef.
    #[must_use]
    pub fn new(name: impl Into<String>, underlying_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            underlying_type: underlying_type.into(),
        }
    }
}

/// Singleton-style API object obtained through accessor functions.
#[derive(Debug, Clone, Deserialize)]
pub struct Interface {
    /// Class name, used as the self pointer type.
    #[serde(rename = "classname")]
    pub class_name: String,
    /// Free functions returning the interface instance.
    #[serde(default)]
    pub accessors: Vec<Accessor>,
    /// Interface methods.
    pub methods: Vec<Method>,
}

/// Zero-argument free function returning a pointer to an interface.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Accessor {
    /// Flat function name.
    #[serde(rename = "name_flat")]
    pub flat_name: String,
}

/// Value-type API object whose methods take it as an explicit self pointer.
#[derive(Debug, Clone, Deserialize)]
pub struct StructDef {
    /// Struct name.
    #[serde(rename = "struct")]
    pub name: String,
    /// Struct methods.
    #[serde(default)]
    pub methods: Vec<Method>,
}

/// Method of an interface or struct.
#[derive(Debug, Clone, Deserialize)]
pub struct Method {
    /// Flat function name; methods without one are not part of the flat ABI.
    #[serde(rename = "methodname_flat", default)]
    pub flat_name: Option<String>,
    /// Declared return type.
    #[serde(rename = "returntype")]
    pub return_type: String,
    /// ABI-flattened return type.
    #[serde(rename = "returntype_flat", default)]
    pub flat_return_type: Option<String>,
    /// Parameters, excluding the self pointer.
    pub params: Vec<Parameter>,
}

impl Method {
    /// Returns true if the method is exported through the flat ABI.
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.flat_name.is_some()
    }

    /// Returns the return type used in the flat signature.
    #[must_use]
    pub fn signature_return_type(&self) -> &str {
        self.flat_return_type.as_deref().unwrap_or(&self.return_type)
    }
}

/// Method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Parameter {
    /// Declared type.
    #[serde(rename = "paramtype")]
    pub param_type: String,
    /// ABI-flattened type.
    #[serde(rename = "paramtype_flat", default)]
    pub flat_type: Option<String>,
    /// Parameter name.
    #[serde(rename = "paramname")]
    pub name: String,
}

impl Parameter {
    /// Returns the type used in the flat signature.
    #[must_use]
    pub fn emitted_type(&self) -> &str {
        self.flat_type.as_deref().unwrap_or(&self.param_type)
    }
}
