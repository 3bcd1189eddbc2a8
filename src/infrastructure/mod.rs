//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, in-memory for tests)
//! - `theme/` - Theme manifest repositories
//! - `plugins/` - Plugin host implementations
//! - `precompiler/` - Template precompilers (built-in module, external command)

pub mod fs;
pub mod plugins;
pub mod precompiler;
pub mod theme;

// Re-export for convenience
pub use fs::LocalFs;
pub use plugins::StaticPluginHost;
pub use precompiler::{CommandPrecompiler, ModulePrecompiler};
pub use theme::JsonThemeRepository;
