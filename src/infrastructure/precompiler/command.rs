//! External command precompiler
//!
//! Writes expanded template text to the command's stdin and takes stdout as
//! the compiled artifact. `--minify` is appended when minifying.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::domain::ports::{PrecompileError, PrecompileOptions, Precompiler};

pub const MINIFY_FLAG: &str = "--minify";

#[derive(Debug, Clone)]
pub struct CommandPrecompiler {
    program: String,
    args: Vec<String>,
}

impl CommandPrecompiler {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from an argv list (`["node", "bin/precompile.js"]`).
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.to_vec()))
    }
}

#[async_trait]
impl Precompiler for CommandPrecompiler {
    async fn precompile(
        &self,
        source: &str,
        options: PrecompileOptions,
    ) -> Result<String, PrecompileError> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if options.minify {
            command.arg(MINIFY_FLAG);
        }

        let spawn_error = |source| PrecompileError::Spawn {
            program: self.program.clone(),
            source,
        };

        let mut child = command.spawn().map_err(spawn_error)?;
        let mut stdin = child.stdin.take();
        let input = source.as_bytes().to_vec();

        let feed = async move {
            if let Some(stdin) = stdin.as_mut() {
                stdin.write_all(&input).await?;
                stdin.shutdown().await?;
            }
            drop(stdin);
            Ok::<(), std::io::Error>(())
        };

        let (fed, output) = tokio::join!(feed, child.wait_with_output());
        let output = output.map_err(spawn_error)?;

        if !output.status.success() {
            return Err(PrecompileError::Failed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        // A command may legitimately stop reading before consuming all input.
        if let Err(e) = fed {
            tracing::debug!(program = %self.program, error = %e, "precompiler closed stdin early");
        }

        String::from_utf8(output.stdout).map_err(|e| PrecompileError::InvalidOutput {
            message: e.to_string(),
        })
    }
}
