use capsule_schema::{PropValue, SourceFragment};
use capsule_theme::ResolvedTheme;
use indexmap::IndexMap;

/// Reference to an already-emitted child unit, in declared sibling order.
/// Container emitters use these to reference child source units by name.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildUnit {
    pub unit_name: String,
    pub type_id: String,
}

/// Everything an emitter may observe: the validated property values, the
/// child unit references, and the resolved theme. Emitters are pure functions
/// of this context; identical contexts yield byte-identical fragments.
pub struct EmitContext<'a> {
    pub instance_id: &'a str,
    pub type_id: &'a str,
    /// Unit name precomputed by the compiler (type + content digest)
    pub unit_name: &'a str,
    pub values: &'a IndexMap<String, PropValue>,
    pub children: &'a [ChildUnit],
    pub theme: &'a ResolvedTheme,
}

impl<'a> EmitContext<'a> {
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.values.get(name)
    }

    /// String value of a property; empty when absent or not a string.
    /// Validated values have schema defaults substituted, so a property with
    /// a default is always present here.
    pub fn string(&self, name: &str) -> &str {
        self.get(name).and_then(PropValue::as_str).unwrap_or("")
    }

    pub fn number(&self, name: &str, fallback: f64) -> f64 {
        self.get(name)
            .and_then(PropValue::as_number)
            .unwrap_or(fallback)
    }

    pub fn boolean(&self, name: &str) -> bool {
        self.get(name)
            .and_then(PropValue::as_bool)
            .unwrap_or(false)
    }
}

/// One target backend's generator for one capsule type
pub type EmitterFn = fn(&EmitContext) -> SourceFragment;
