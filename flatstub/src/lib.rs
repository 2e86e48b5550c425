//! # Flatstub
//!
//! Link-time stub generation for flat C APIs.
//!
//! Given the JSON description an SDK ships for its flat API (typedefs,
//! interfaces with accessors and methods, structs with methods), flatstub
//! emits a C++ source file defining every flat function with a body that
//! returns a neutral value. Builds can then link against the API without the
//! real SDK being present.
//!
//! ## Quick Start
//!
//! ```ignore
//! use flatstub::prelude::*;
//! use std::path::Path;
//!
//! let config = GeneratorConfig::new().guard("USE_STEAMWORKS_STUB");
//! let report = generate_to_file(
//!     Path::new("steam_api.json"),
//!     Path::new("steamworks_stub.gen.cpp"),
//!     &config,
//! )?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Flat API description parsing and typedef resolution
//! - [`codegen`] - Stub source generation

pub mod args;
pub mod cli;
pub mod prelude;

/// Flat API description parsing and typedef resolution.
pub mod schema {
    pub use flatstub_schema::*;
}

/// Stub source generation.
pub mod codegen {
    pub use flatstub_codegen::*;
}

pub use flatstub_codegen::{
    CodegenError, GeneratedStub, GenerationReport, Generator, GeneratorConfig, UnhandledPolicy,
    generate_from_file, generate_from_json, generate_to_file,
};
pub use flatstub_schema::{ParseError, Schema, TypeMap, parse_schema, parse_schema_file};
