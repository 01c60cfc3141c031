use crate::definition::{CapsuleDefinition, SchemaEntry};
use indexmap::IndexMap;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Capsule type '{0}' is already registered")]
    DuplicateType(String),
}

/// Maps a capsule type identifier to its definition.
///
/// Built once at startup, then treated as frozen: the compiler only reads.
/// Iteration follows registration order so schema listings and generated
/// output are deterministic.
#[derive(Default)]
pub struct Registry {
    definitions: IndexMap<String, CapsuleDefinition>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, definition: CapsuleDefinition) -> Result<(), RegistryError> {
        if self.definitions.contains_key(&definition.type_id) {
            return Err(RegistryError::DuplicateType(definition.type_id.clone()));
        }
        debug!(type_id = %definition.type_id, "registered capsule type");
        self.definitions
            .insert(definition.type_id.clone(), definition);
        Ok(())
    }

    /// Never panics; unknown types are a generation-time concern
    pub fn lookup(&self, type_id: &str) -> Option<&CapsuleDefinition> {
        self.definitions.get(type_id)
    }

    pub fn definitions(&self) -> impl Iterator<Item = &CapsuleDefinition> {
        self.definitions.values()
    }

    /// Full registry contents for the `GET schema` editor contract
    pub fn schema_entries(&self) -> Vec<SchemaEntry> {
        self.definitions.values().map(|d| d.schema_entry()).collect()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capsule_schema::{PropKind, PropertySchema};

    fn definition(type_id: &str) -> CapsuleDefinition {
        CapsuleDefinition::new(
            type_id,
            "Test",
            "test",
            vec![PropertySchema::new("label", PropKind::String).required()],
        )
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = Registry::new();
        registry.register(definition("button")).unwrap();

        assert!(registry.lookup("button").is_some());
        assert!(registry.lookup("carousel").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut registry = Registry::new();
        registry.register(definition("button")).unwrap();

        let err = registry.register(definition("button")).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateType("button".to_string()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_schema_entries_follow_registration_order() {
        let mut registry = Registry::new();
        registry.register(definition("text")).unwrap();
        registry.register(definition("button")).unwrap();
        registry.register(definition("card")).unwrap();

        let ids: Vec<String> = registry
            .schema_entries()
            .into_iter()
            .map(|e| e.type_id)
            .collect();
        assert_eq!(ids, vec!["text", "button", "card"]);
    }
}
