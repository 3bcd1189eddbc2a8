//! Output Rendering
//!
//! Text and JSON rendering for compile reports, catalogs and theme chains.

use serde_json::json;

use crate::application::CompileReport;
use crate::domain::entities::{PathCatalog, TemplateRoot};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub fn render_report(report: &CompileReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut out = format!("✓ Compiled {} template(s)", report.template_count());
            if report.overrides > 0 {
                out.push_str(&format!(" ({} overridden)", report.overrides));
            }
            for warning in &report.warnings {
                out.push_str(&format!("\n⚠ {}", warning));
            }
            out
        }
        OutputFormat::Json => {
            let templates: Vec<_> = report
                .compiled
                .iter()
                .map(|c| {
                    json!({
                        "template": c.template.as_str(),
                        "intermediate": c.intermediate.as_ref().map(|p| p.display().to_string()),
                        "artifact": c.artifact.display().to_string(),
                    })
                })
                .collect();
            let warnings: Vec<_> = report
                .warnings
                .iter()
                .map(|w| {
                    json!({
                        "template": w.template.as_str(),
                        "partial": w.partial,
                        "message": w.to_string(),
                    })
                })
                .collect();
            json!({
                "event": "compiled",
                "templates": templates,
                "warnings": warnings,
                "overrides": report.overrides,
                "written": report
                    .written()
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>(),
            })
            .to_string()
        }
    }
}

pub fn render_catalog(catalog: &PathCatalog, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => catalog
            .iter()
            .map(|(path, entry)| {
                format!("{}\t{}\t{}", path, entry.source, entry.physical.display())
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> = catalog
                .iter()
                .map(|(path, entry)| {
                    (
                        path.to_string(),
                        json!(entry.physical.display().to_string()),
                    )
                })
                .collect();
            serde_json::Value::Object(map).to_string()
        }
    }
}

pub fn render_chain(roots: &[TemplateRoot], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => roots
            .iter()
            .map(|r| format!("{}\t{}", r.source, r.path.display()))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => {
            let dirs: Vec<String> = roots.iter().map(|r| r.path.display().to_string()).collect();
            json!(dirs).to_string()
        }
    }
}
