use crate::value::PropValue;
use serde::{Deserialize, Serialize};

/// Declared kind of a capsule property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropKind {
    String,
    Number,
    Boolean,
    Enum,
    Array,
    Object,
    Action,
    Color,
    Icon,
}

impl PropKind {
    pub fn name(&self) -> &'static str {
        match self {
            PropKind::String => "string",
            PropKind::Number => "number",
            PropKind::Boolean => "boolean",
            PropKind::Enum => "enum",
            PropKind::Array => "array",
            PropKind::Object => "object",
            PropKind::Action => "action",
            PropKind::Color => "color",
            PropKind::Icon => "icon",
        }
    }

    /// Whether a value of this runtime shape can inhabit the declared kind.
    /// Color values are additionally checked against the hex grammar by the
    /// validator; this is only the structural check.
    pub fn accepts(&self, value: &PropValue) -> bool {
        match self {
            PropKind::String | PropKind::Enum | PropKind::Action | PropKind::Icon => {
                matches!(value, PropValue::String(_))
            }
            PropKind::Color => matches!(value, PropValue::String(_)),
            PropKind::Number => matches!(value, PropValue::Number(_)),
            PropKind::Boolean => matches!(value, PropValue::Bool(_)),
            PropKind::Array => matches!(value, PropValue::Array(_)),
            PropKind::Object => matches!(value, PropValue::Object(_)),
        }
    }
}

/// Declarative description of one capsule property: its name, kind, whether
/// it is required, its default, and the allowed options for enum kinds.
/// Defined once per capsule type, target-independent, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySchema {
    pub name: String,
    pub kind: PropKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<PropValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl PropertySchema {
    pub fn new(name: impl Into<String>, kind: PropKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            default: None,
            options: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<PropValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|o| o.to_string()).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_accepts_matching_values() {
        assert!(PropKind::String.accepts(&PropValue::from("hello")));
        assert!(PropKind::Number.accepts(&PropValue::from(4.0)));
        assert!(PropKind::Boolean.accepts(&PropValue::from(true)));
        assert!(PropKind::Enum.accepts(&PropValue::from("primary")));

        assert!(!PropKind::String.accepts(&PropValue::from(4.0)));
        assert!(!PropKind::Number.accepts(&PropValue::from("4")));
        assert!(!PropKind::Boolean.accepts(&PropValue::from("true")));
    }

    #[test]
    fn test_builder_shape() {
        let schema = PropertySchema::new("variant", PropKind::Enum)
            .with_options(&["primary", "secondary", "outline"])
            .with_default("primary");

        assert_eq!(schema.name, "variant");
        assert!(!schema.required);
        assert_eq!(schema.options.len(), 3);
        assert_eq!(schema.default, Some(PropValue::from("primary")));
    }
}
