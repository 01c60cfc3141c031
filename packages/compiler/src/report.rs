use crate::error::GenerateError;
use capsule_schema::{ProjectManifest, Target};
use serde::Serialize;
use std::fmt;

/// Recoverable generation diagnostics, carried on the success envelope.
/// Placeholder use is machine-readable here, never silent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "code", rename_all = "camelCase")]
pub enum GenerateWarning {
    #[serde(rename_all = "camelCase")]
    UnknownComponentType { instance_id: String, type_id: String },

    #[serde(rename_all = "camelCase")]
    MissingEmitter {
        instance_id: String,
        type_id: String,
        target: Target,
    },

    #[serde(rename_all = "camelCase")]
    InvalidEnumValue { path: String, value: String },
}

impl fmt::Display for GenerateWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateWarning::UnknownComponentType {
                instance_id,
                type_id,
            } => write!(
                f,
                "Unknown component type '{}' at instance '{}'; a placeholder was generated",
                type_id, instance_id
            ),
            GenerateWarning::MissingEmitter {
                instance_id,
                type_id,
                target,
            } => write!(
                f,
                "Component type '{}' has no {} emitter at instance '{}'; a placeholder was generated",
                type_id, target, instance_id
            ),
            GenerateWarning::InvalidEnumValue { path, value } => write!(
                f,
                "Invalid enum value '{}' at '{}'; the schema default was used",
                value, path
            ),
        }
    }
}

/// Successful generation for one target: the manifest plus any warnings
/// ("succeeded with warnings" when non-empty)
#[derive(Debug, Clone)]
pub struct TargetExport {
    pub target: Target,
    pub manifest: ProjectManifest,
    pub warnings: Vec<GenerateWarning>,
}

/// Outcome of one target inside a multi-target request
#[derive(Debug, Clone)]
pub struct TargetRun {
    pub target: Target,
    pub outcome: Result<TargetExport, GenerateError>,
}

/// Result of `generate_multi`: every requested target, processed
/// independently, in request order
#[derive(Debug, Clone)]
pub struct MultiExport {
    pub runs: Vec<TargetRun>,
}

impl MultiExport {
    pub fn successes(&self) -> impl Iterator<Item = &TargetExport> {
        self.runs.iter().filter_map(|r| r.outcome.as_ref().ok())
    }

    pub fn summary(&self) -> ExportSummary {
        let mut summary = ExportSummary {
            total_platforms: self.runs.len(),
            successful_platforms: 0,
            failed_platforms: Vec::new(),
            total_files: 0,
            total_size: 0,
        };
        for run in &self.runs {
            match &run.outcome {
                Ok(export) => {
                    summary.successful_platforms += 1;
                    summary.total_files += export.manifest.file_count();
                    summary.total_size += export.manifest.total_size();
                }
                Err(_) => summary.failed_platforms.push(run.target.id().to_string()),
            }
        }
        summary
    }

    pub fn reports(&self) -> Vec<ExportReport> {
        self.runs.iter().map(ExportReport::from_run).collect()
    }
}

/// Per-target wire report: `{platform, success, fileCount, totalSize, ...}`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportReport {
    pub platform: String,
    pub success: bool,
    pub file_count: usize,
    pub total_size: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ExportReport {
    pub fn from_run(run: &TargetRun) -> Self {
        match &run.outcome {
            Ok(export) => ExportReport {
                platform: run.target.id().to_string(),
                success: true,
                file_count: export.manifest.file_count(),
                total_size: export.manifest.total_size(),
                errors: Vec::new(),
                warnings: export.warnings.iter().map(|w| w.to_string()).collect(),
            },
            Err(error) => ExportReport {
                platform: run.target.id().to_string(),
                success: false,
                file_count: 0,
                total_size: 0,
                errors: error.messages(),
                warnings: Vec::new(),
            },
        }
    }
}

/// Aggregate wire summary: counts for success, an explicit list for failure
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub total_platforms: usize,
    pub successful_platforms: usize,
    pub failed_platforms: Vec<String>,
    pub total_files: usize,
    pub total_size: usize,
}
