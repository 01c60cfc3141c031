use serde::{Deserialize, Serialize};

/// Role of one file inside a generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Target entry point (App.swift, MainActivity.kt, App.jsx, main.js)
    Entry,
    /// One emitted component source unit
    Component,
    /// Stylesheet or theme source
    Style,
    /// Target-required configuration (tauri.conf.json, build.gradle.kts)
    Config,
    /// Dependency manifest (package.json, settings.gradle.kts)
    Manifest,
}

/// One file in a generated project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    pub path: String,
    pub content: String,
    pub kind: FileKind,
}

impl ProjectFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>, kind: FileKind) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            kind,
        }
    }
}

/// The smallest emitted source unit for one component instance on one
/// target: a named, importable body plus the external dependencies it needs
/// and any extra files it contributes. Pure, stateless value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFragment {
    pub unit_name: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_files: Vec<ProjectFile>,
}

impl SourceFragment {
    pub fn new(unit_name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            unit_name: unit_name.into(),
            body: body.into(),
            imports: Vec::new(),
            target_files: Vec::new(),
        }
    }

    pub fn with_imports(mut self, imports: &[&str]) -> Self {
        self.imports = imports.iter().map(|i| i.to_string()).collect();
        self
    }

    pub fn with_target_file(mut self, file: ProjectFile) -> Self {
        self.target_files.push(file);
        self
    }
}
