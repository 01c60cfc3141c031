use capsule_registry::ValidationError;
use capsule_theme::ThemeError;
use thiserror::Error;

/// Errors that abort generation for one target. In a multi-target request
/// each target fails independently; siblings are unaffected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerateError {
    /// Hard validation errors, collected across every instance so one call
    /// reports every problem at once
    #[error("Project validation failed with {} error(s)", errors.len())]
    ProjectValidation { errors: Vec<ValidationError> },

    /// Two files resolved to the same path during manifest assembly
    #[error("File conflict: two generated files resolve to '{path}'")]
    FileConflict { path: String },

    #[error("Theme resolution failed: {0}")]
    Theme(#[from] ThemeError),
}

impl GenerateError {
    /// Flattened human-readable messages, for the error envelope
    pub fn messages(&self) -> Vec<String> {
        match self {
            GenerateError::ProjectValidation { errors } => {
                errors.iter().map(|e| e.to_string()).collect()
            }
            other => vec![other.to_string()],
        }
    }
}
