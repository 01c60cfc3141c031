use crate::fragment::ProjectFile;
use crate::target::Target;
use serde::{Deserialize, Serialize};

/// The complete file set produced for one target from one project. Terminal
/// artifact of the project compiler, consumed by the export packager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectManifest {
    pub target: Target,
    pub files: Vec<ProjectFile>,
    pub dependencies: Vec<String>,
}

impl ProjectManifest {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Total content size in bytes across all files
    pub fn total_size(&self) -> usize {
        self.files.iter().map(|f| f.content.len()).sum()
    }

    pub fn file(&self, path: &str) -> Option<&ProjectFile> {
        self.files.iter().find(|f| f.path == path)
    }
}
