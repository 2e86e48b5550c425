//! # Flatstub Schema
//!
//! Flat C API description loader and typedef resolver.
//!
//! This crate provides:
//! - JSON parsing of the SDK's flat API description
//! - Record types for typedefs, interfaces, accessors, structs and methods
//! - Single-hop typedef resolution for code generation

pub mod error;
pub mod parser;
pub mod resolver;
pub mod types;

pub use error::ParseError;
pub use parser::{parse_schema, parse_schema_file};
pub use resolver::TypeMap;
pub use types::{Accessor, Interface, Method, Parameter, Schema, StructDef, Typedef};
