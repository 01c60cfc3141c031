use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A property value attached to a component instance.
///
/// Deserialized untagged from the persisted project JSON. Objects keep their
/// key order so canonical serialization is stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<PropValue>),
    Object(IndexMap<String, PropValue>),
}

impl PropValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Human-readable name of the value's runtime kind, used in
    /// type-mismatch diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            PropValue::Bool(_) => "boolean",
            PropValue::Number(_) => "number",
            PropValue::String(_) => "string",
            PropValue::Array(_) => "array",
            PropValue::Object(_) => "object",
        }
    }

    /// Canonical serialization used for deterministic unit-name digests.
    /// Object key order is preserved, so equal values always produce equal
    /// canonical text.
    pub fn canonical(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::String(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::String(s)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_deserialization() {
        let v: PropValue = serde_json::from_str("\"Sign In\"").unwrap();
        assert_eq!(v, PropValue::String("Sign In".to_string()));

        let v: PropValue = serde_json::from_str("12.5").unwrap();
        assert_eq!(v, PropValue::Number(12.5));

        let v: PropValue = serde_json::from_str("true").unwrap();
        assert_eq!(v, PropValue::Bool(true));

        let v: PropValue = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(
            v,
            PropValue::Array(vec![PropValue::Number(1.0), PropValue::Number(2.0)])
        );
    }

    #[test]
    fn test_canonical_is_stable() {
        let v: PropValue = serde_json::from_str(r#"{"b": 1, "a": 2}"#).unwrap();
        // Key order is preserved, not sorted
        assert_eq!(v.canonical(), r#"{"b":1.0,"a":2.0}"#);
        assert_eq!(v.canonical(), v.clone().canonical());
    }
}
