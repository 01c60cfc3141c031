//! Deterministic unit naming.
//!
//! A unit name is the PascalCase capsule type plus a CRC32 digest of the
//! canonical property values and child unit names. Identical instances share
//! a name (deduplicated downstream); differing instances cannot collide with
//! each other short of a genuine hash collision within one project.

use capsule_common::pascal_case;
use capsule_registry::ChildUnit;
use capsule_schema::PropValue;
use crc32fast::Hasher;
use indexmap::IndexMap;

pub fn unit_name(
    type_id: &str,
    values: &IndexMap<String, PropValue>,
    children: &[ChildUnit],
) -> String {
    let mut hasher = Hasher::new();
    hasher.update(type_id.as_bytes());

    // Key order is normalized so two equal value sets digest equally even if
    // the editor persisted their properties in different order
    let mut keys: Vec<&String> = values.keys().collect();
    keys.sort();
    for key in keys {
        hasher.update(b"\0");
        hasher.update(key.as_bytes());
        hasher.update(b"=");
        hasher.update(values[key.as_str()].canonical().as_bytes());
    }

    for child in children {
        hasher.update(b"\0>");
        hasher.update(child.unit_name.as_bytes());
    }

    format!("{}{:08x}", pascal_case(type_id), hasher.finalize())
}
