//! Compile Use Case Module
//!
//! Full rebuilds of the view tree and incremental single-template rebuilds.

mod options;
mod result;
mod use_case;


pub use options::CompileSettings;
pub use result::{CompileReport, CompiledTemplate};
pub use use_case::CompileUseCase;
