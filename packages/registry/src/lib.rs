//! Capsule definition registry and instance validation.
//!
//! A [`Registry`] is built once at startup, frozen, and passed explicitly
//! into the project compiler — never referenced as ambient global state.
//! Each [`CapsuleDefinition`] pairs a property schema with one emitter per
//! supported target; the [`validator`] checks instances against that schema
//! before any emitter runs.

pub mod definition;
pub mod emit;
pub mod registry;
pub mod validator;

pub use definition::{CapsuleDefinition, SchemaEntry};
pub use emit::{ChildUnit, EmitContext, EmitterFn};
pub use registry::{Registry, RegistryError};
pub use validator::{validate, Validated, ValidationError};
