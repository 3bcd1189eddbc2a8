//! Precompiler port
//!
//! Opaque transform from fully expanded template text to its executable form.

use async_trait::async_trait;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrecompileOptions {
    pub minify: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum PrecompileError {
    #[error("failed to start precompiler '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("precompiler '{program}' exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("precompiler produced invalid output: {message}")]
    InvalidOutput { message: String },
}

#[async_trait]
pub trait Precompiler: Send + Sync {
    async fn precompile(
        &self,
        source: &str,
        options: PrecompileOptions,
    ) -> Result<String, PrecompileError>;
}
