//! C++ stub code generation modules.

pub mod functions;
pub mod interfaces;
pub mod structs;

pub use functions::FunctionEmitter;
pub use interfaces::InterfaceGenerator;
pub use structs::StructGenerator;
