//! Precompiler implementations
//!
//! - `ModulePrecompiler` - built-in, wraps expanded text in a JS module
//! - `CommandPrecompiler` - pipes expanded text through an external command

mod command;
mod module;

pub use command::CommandPrecompiler;
pub use module::ModulePrecompiler;
