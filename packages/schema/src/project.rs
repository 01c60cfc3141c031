use crate::instance::ComponentInstance;
use crate::tokens::ThemeTokens;
use serde::{Deserialize, Serialize};

/// Persisted project shape consumed as generation input:
/// `{id, capsules, theme, targets}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub capsules: Vec<ComponentInstance>,
    #[serde(default)]
    pub theme: ThemeTokens,
    #[serde(default)]
    pub targets: Vec<String>,
}

impl Project {
    /// Name used in generated scaffolds, falling back to the project id
    pub fn display_name(&self) -> &str {
        match &self.name {
            Some(name) if !name.is_empty() => name,
            _ => {
                if self.id.is_empty() {
                    "CapsuleApp"
                } else {
                    &self.id
                }
            }
        }
    }

    /// Total instance count across all roots
    pub fn node_count(&self) -> usize {
        self.capsules.iter().map(|c| c.node_count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_project() {
        let json = r##"{
            "id": "proj-42",
            "capsules": [
                { "id": "c1", "type": "button", "props": { "label": "Sign In" } }
            ],
            "theme": { "colors": { "primary": "#3b82f6" } },
            "targets": ["web-react"]
        }"##;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, "proj-42");
        assert_eq!(project.capsules.len(), 1);
        assert_eq!(project.targets, vec!["web-react"]);
        assert_eq!(project.display_name(), "proj-42");
    }
}
