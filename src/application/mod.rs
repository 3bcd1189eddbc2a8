//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CompileUseCase` - Full template rebuild and single-template recompilation

pub mod compile;

pub use compile::{CompileReport, CompileSettings, CompileUseCase, CompiledTemplate};
