//! Request/response envelope types for the external API layer. The engine
//! itself serves no HTTP; these shapes are the narrow contract the editor
//! and worker processes consume.

use crate::error::GenerateError;
use crate::report::{ExportReport, ExportSummary, MultiExport, TargetExport};
use capsule_schema::{ProjectFile, Target};
use serde::{Deserialize, Serialize};

/// `POST generate` body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub project_id: String,
    pub target: Target,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,
}

/// One entry of a `POST generate-multi` body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetRequest {
    pub platform: Target,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,
}

/// `POST generate-multi` body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMultiRequest {
    pub project_id: String,
    pub targets: Vec<TargetRequest>,
}

/// One generated file on the wire, with its display language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
    pub language: String,
}

impl GeneratedFile {
    pub fn from_project_file(file: &ProjectFile) -> Self {
        Self {
            path: file.path.clone(),
            content: file.content.clone(),
            language: language_for_path(&file.path).to_string(),
        }
    }
}

/// `POST generate` response: always a structured result distinguishing
/// "fully succeeded", "succeeded with warnings" and "failed with errors" —
/// callers never receive a partially-written file set
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub files: Vec<GeneratedFile>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl GenerateResponse {
    pub fn from_outcome(outcome: &Result<TargetExport, GenerateError>) -> Self {
        match outcome {
            Ok(export) => GenerateResponse {
                success: true,
                files: export
                    .manifest
                    .files
                    .iter()
                    .map(GeneratedFile::from_project_file)
                    .collect(),
                warnings: export.warnings.iter().map(|w| w.to_string()).collect(),
                errors: Vec::new(),
            },
            Err(error) => GenerateResponse {
                success: false,
                files: Vec::new(),
                warnings: Vec::new(),
                errors: error.messages(),
            },
        }
    }
}

/// `POST generate-multi` response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMultiResponse {
    pub success: bool,
    pub exports: Vec<ExportReport>,
    pub summary: ExportSummary,
}

impl GenerateMultiResponse {
    pub fn from_multi(multi: &MultiExport) -> Self {
        let summary = multi.summary();
        GenerateMultiResponse {
            success: summary.failed_platforms.is_empty(),
            exports: multi.reports(),
            summary,
        }
    }
}

fn language_for_path(path: &str) -> &'static str {
    let extension = path.rsplit('.').next().unwrap_or_default();
    match extension {
        "swift" => "swift",
        "kt" | "kts" => "kotlin",
        "jsx" | "js" => "javascript",
        "css" => "css",
        "html" => "html",
        "json" => "json",
        "rs" => "rust",
        "toml" => "toml",
        "xml" => "xml",
        "md" => "markdown",
        _ => "text",
    }
}
