use crate::emit::EmitterFn;
use capsule_schema::{PropertySchema, Target};
use serde::Serialize;
use std::collections::HashMap;

/// A registered capsule type: identifier, editor-facing metadata, property
/// schema, and one emitter per supported target. Never mutated after
/// registration.
pub struct CapsuleDefinition {
    pub type_id: String,
    pub display_name: String,
    pub category: String,
    pub schema: Vec<PropertySchema>,
    emitters: HashMap<Target, EmitterFn>,
}

impl CapsuleDefinition {
    pub fn new(
        type_id: impl Into<String>,
        display_name: impl Into<String>,
        category: impl Into<String>,
        schema: Vec<PropertySchema>,
    ) -> Self {
        Self {
            type_id: type_id.into(),
            display_name: display_name.into(),
            category: category.into(),
            schema,
            emitters: HashMap::new(),
        }
    }

    pub fn with_emitter(mut self, target: Target, emitter: EmitterFn) -> Self {
        self.emitters.insert(target, emitter);
        self
    }

    /// Emitter for the given target; `None` routes to the fallback emitter
    pub fn emitter(&self, target: Target) -> Option<EmitterFn> {
        self.emitters.get(&target).copied()
    }

    pub fn supported_targets(&self) -> Vec<Target> {
        // Stable order for reporting, independent of HashMap internals
        Target::ALL
            .iter()
            .filter(|t| self.emitters.contains_key(t))
            .copied()
            .collect()
    }

    pub fn schema_prop(&self, name: &str) -> Option<&PropertySchema> {
        self.schema.iter().find(|p| p.name == name)
    }

    /// Wire shape for the `GET schema` editor contract
    pub fn schema_entry(&self) -> SchemaEntry {
        SchemaEntry {
            type_id: self.type_id.clone(),
            display_name: self.display_name.clone(),
            category: self.category.clone(),
            schema: self.schema.clone(),
        }
    }
}

/// Registry contents as served to the editor for form rendering
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaEntry {
    pub type_id: String,
    pub display_name: String,
    pub category: String,
    pub schema: Vec<PropertySchema>,
}
