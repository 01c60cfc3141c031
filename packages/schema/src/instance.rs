use crate::value::PropValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One placed component in a project: a capsule type reference plus the
/// property values the editor assigned to it.
///
/// Sibling order is significant and preserved verbatim through generation.
/// The `type_id` is resolved against the registry at generation time, not at
/// creation time — the editor may reference types optimistically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentInstance {
    pub id: String,
    #[serde(rename = "type")]
    pub type_id: String,
    #[serde(default, rename = "props")]
    pub properties: IndexMap<String, PropValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ComponentInstance>,
}

impl ComponentInstance {
    pub fn new(id: impl Into<String>, type_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            type_id: type_id.into(),
            properties: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<ComponentInstance>) -> Self {
        self.children = children;
        self
    }

    /// Total number of instances in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(|c| c.node_count()).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_persisted_shape() {
        let json = r#"{
            "id": "cap-1",
            "type": "button",
            "props": { "label": "Sign In", "disabled": false }
        }"#;

        let instance: ComponentInstance = serde_json::from_str(json).unwrap();
        assert_eq!(instance.id, "cap-1");
        assert_eq!(instance.type_id, "button");
        assert_eq!(
            instance.properties.get("label"),
            Some(&PropValue::from("Sign In"))
        );
        assert!(instance.children.is_empty());
    }

    #[test]
    fn test_node_count_includes_nested_children() {
        let tree = ComponentInstance::new("root", "stack").with_children(vec![
            ComponentInstance::new("a", "button"),
            ComponentInstance::new("b", "card")
                .with_children(vec![ComponentInstance::new("c", "text")]),
        ]);

        assert_eq!(tree.node_count(), 4);
    }
}
