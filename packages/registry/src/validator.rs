use crate::definition::CapsuleDefinition;
use capsule_schema::{ComponentInstance, PropKind, PropValue};
use capsule_theme::Rgba;
use indexmap::IndexMap;
use thiserror::Error;

/// Validation-time diagnostics for one instance.
///
/// `MissingRequiredProperty` and `TypeMismatch` are fatal to that instance's
/// generation; `InvalidEnumValue` is recoverable — the schema default is
/// substituted and the diagnostic is surfaced as a warning.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required property '{path}'")]
    MissingRequiredProperty { path: String },

    #[error("Type mismatch at '{path}': expected {expected}, found {actual}")]
    TypeMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    #[error("Invalid enum value '{value}' at '{path}'")]
    InvalidEnumValue { path: String, value: String },
}

impl ValidationError {
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ValidationError::InvalidEnumValue { .. })
    }

    pub fn path(&self) -> &str {
        match self {
            ValidationError::MissingRequiredProperty { path }
            | ValidationError::TypeMismatch { path, .. }
            | ValidationError::InvalidEnumValue { path, .. } => path,
        }
    }
}

/// Result of validating one instance: the coerced property values (schema
/// defaults substituted) and every diagnostic found. The instance itself is
/// never mutated.
#[derive(Debug, Clone)]
pub struct Validated {
    pub values: IndexMap<String, PropValue>,
    pub errors: Vec<ValidationError>,
}

impl Validated {
    pub fn hard_errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(|e| e.is_fatal())
    }

    pub fn has_hard_errors(&self) -> bool {
        self.hard_errors().next().is_some()
    }

    pub fn enum_fallbacks(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(|e| !e.is_fatal())
    }
}

fn is_textual(kind: PropKind) -> bool {
    matches!(
        kind,
        PropKind::String | PropKind::Enum | PropKind::Action | PropKind::Color | PropKind::Icon
    )
}

/// Validate a component instance against its capsule definition.
///
/// For every schema property: required-and-absent (or required-and-empty for
/// textual kinds) is an error; a value of the wrong runtime shape is an
/// error; an enum value outside its options falls back to the schema default
/// with a recoverable diagnostic; otherwise the value passes through, or the
/// schema default is substituted when absent. Properties the schema does not
/// declare pass through untouched.
pub fn validate(instance: &ComponentInstance, definition: &CapsuleDefinition) -> Validated {
    let mut values = IndexMap::new();
    let mut errors = Vec::new();

    for prop in &definition.schema {
        let path = format!("{}.{}", instance.id, prop.name);

        let value = match instance.properties.get(&prop.name) {
            Some(value) => value,
            None => {
                if prop.required {
                    errors.push(ValidationError::MissingRequiredProperty { path });
                } else if let Some(default) = &prop.default {
                    values.insert(prop.name.clone(), default.clone());
                }
                continue;
            }
        };

        if !prop.kind.accepts(value) {
            errors.push(ValidationError::TypeMismatch {
                path,
                expected: prop.kind.name().to_string(),
                actual: value.kind_name().to_string(),
            });
            continue;
        }

        if prop.required && is_textual(prop.kind) && value.as_str() == Some("") {
            errors.push(ValidationError::MissingRequiredProperty { path });
            continue;
        }

        if prop.kind == PropKind::Color {
            let literal = value.as_str().unwrap_or_default();
            if Rgba::parse(literal).is_err() {
                errors.push(ValidationError::TypeMismatch {
                    path,
                    expected: "color".to_string(),
                    actual: "malformed hex literal".to_string(),
                });
                continue;
            }
        }

        if prop.kind == PropKind::Enum {
            let literal = value.as_str().unwrap_or_default();
            if !prop.options.iter().any(|o| o == literal) {
                errors.push(ValidationError::InvalidEnumValue {
                    path,
                    value: literal.to_string(),
                });
                let fallback = prop
                    .default
                    .clone()
                    .or_else(|| prop.options.first().map(|o| PropValue::from(o.as_str())));
                if let Some(fallback) = fallback {
                    values.insert(prop.name.clone(), fallback);
                }
                continue;
            }
        }

        values.insert(prop.name.clone(), value.clone());
    }

    // Undeclared properties (editor metadata and the like) pass through
    for (name, value) in &instance.properties {
        if definition.schema_prop(name).is_none() {
            values.insert(name.clone(), value.clone());
        }
    }

    Validated { values, errors }
}
