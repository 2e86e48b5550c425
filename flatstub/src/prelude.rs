//! Prelude module for convenient imports.
//!
//! ```ignore
//! use flatstub::prelude::*;
//! ```

// Schema types
pub use flatstub_schema::{
    Accessor, Interface, Method, Parameter, ParseError, Schema, StructDef, TypeMap, Typedef,
    parse_schema, parse_schema_file,
};

// Generation
pub use flatstub_codegen::{
    CodegenError, DefaultValue, GeneratedStub, GenerationReport, Generator, GeneratorConfig,
    ReturnClass, UnhandledPolicy, UnhandledReturn, generate_from_file, generate_from_json,
    generate_to_file, infer_default,
};
