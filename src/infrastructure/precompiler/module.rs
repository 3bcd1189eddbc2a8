//! Built-in precompiler
//!
//! Emits a CommonJS module whose default export renders the template text.
//! Expression evaluation is left to the runtime that loads the module.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use crate::domain::ports::{PrecompileError, PrecompileOptions, Precompiler};

static INTER_TAG_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s+<").expect("whitespace pattern is valid"));

#[derive(Debug, Clone, Copy, Default)]
pub struct ModulePrecompiler;

impl ModulePrecompiler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Precompiler for ModulePrecompiler {
    async fn precompile(
        &self,
        source: &str,
        options: PrecompileOptions,
    ) -> Result<String, PrecompileError> {
        let body = if options.minify {
            INTER_TAG_WHITESPACE
                .replace_all(source.trim(), "><")
                .into_owned()
        } else {
            source.to_string()
        };

        let literal = serde_json::to_string(&body).map_err(|e| PrecompileError::InvalidOutput {
            message: e.to_string(),
        })?;

        Ok(if options.minify {
            format!("module.exports=function(){{return {}}};", literal)
        } else {
            format!(
                "'use strict';\n\nmodule.exports = function compiled() {{\n\treturn {};\n}};\n",
                literal
            )
        })
    }
}
