//! Report → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): aligned `key: value` lines
//! - **JSON** (`--json`): `serde_json::to_string_pretty`

use serde::Serialize;

use crate::actions::{ConvertReport, DetectReport, InitReport, InspectReport, LambdaSource};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

fn format_json<T: Serialize>(report: &T) -> String {
    serde_json::to_string_pretty(report)
        .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

/// Format an error chain.
pub fn format_error(err: &anyhow::Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(&serde_json::json!({
            "error": format!("{:#}", err)
        })),
        OutputMode::Human => format!("(error) {:#}", err),
    }
}

fn source_label(source: LambdaSource) -> &'static str {
    match source {
        LambdaSource::File => "(file)",
        LambdaSource::Assumed => "(assumed)",
        LambdaSource::Override => "(override)",
    }
}

pub fn format_detect(report: &DetectReport, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(report),
        OutputMode::Human => match report.kk {
            Some(kk) => format!("{} (kk = {})", report.kind, kk),
            None => report.kind.to_string(),
        },
    }
}

pub fn format_inspect(report: &InspectReport, mode: OutputMode) -> String {
    if mode == OutputMode::Json {
        return format_json(report);
    }

    let mut lines = vec![
        format!("file:       {}", report.path.display()),
        format!("kind:       {}", report.kind),
    ];
    if let Some(kk) = report.kk {
        lines.push(format!("kk:         {}", kk));
    }
    lines.push(format!("omega:      {}", report.omega));
    lines.push(format!(
        "lambda:     {} {}",
        report.lambda,
        source_label(report.lambda_source)
    ));
    lines.push(format!("domains:    {}", report.domains));
    lines.push(format!("dimensions: {}", report.dimensions));
    lines.push("fields (max |value|):".to_string());
    let width = report.fields.iter().map(|f| f.name.len()).max().unwrap_or(0);
    for field in &report.fields {
        lines.push(format!(
            "  {:<width$}  {:.6e}",
            field.name,
            field.max_abs,
            width = width
        ));
    }
    lines.join("\n")
}

pub fn format_convert(report: &ConvertReport, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(report),
        OutputMode::Human => format!(
            "{} -> {} ({}, lambda = {} {}, {} bytes)",
            report.input.display(),
            report.output.display(),
            report.kind,
            report.lambda,
            source_label(report.lambda_source),
            report.size
        ),
    }
}

pub fn format_init(report: &InitReport, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(report),
        OutputMode::Human if report.created => format!("wrote {}", report.path.display()),
        OutputMode::Human => format!("{} already exists", report.path.display()),
    }
}
