//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod plugin_host;
pub mod precompiler;
pub mod theme_repository;

pub use file_system::{FileSystem, FsError, FsResult};
pub use plugin_host::{NoopPluginHost, PluginError, PluginHost, PRECOMPILE_HOOK};
pub use precompiler::{PrecompileError, PrecompileOptions, Precompiler};
pub use theme_repository::{ThemeError, ThemeRepository};
