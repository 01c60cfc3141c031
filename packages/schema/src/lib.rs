//! Platform-neutral data model for the capsule generation engine.
//!
//! Everything the engine exchanges with the outside world lives here: target
//! identifiers, property kinds and values, capsule property schemas, component
//! instance trees, theme tokens, emitted source fragments and assembled
//! project manifests. All maps are insertion-ordered so that generation for a
//! fixed project snapshot is a pure function of its inputs.

pub mod fragment;
pub mod instance;
pub mod manifest;
pub mod project;
pub mod property;
pub mod target;
pub mod tokens;
pub mod value;

pub use fragment::{FileKind, ProjectFile, SourceFragment};
pub use instance::ComponentInstance;
pub use manifest::ProjectManifest;
pub use project::Project;
pub use property::{PropKind, PropertySchema};
pub use target::{Target, UnknownTargetError};
pub use tokens::{ColorTokens, RadiusTokens, SpacingTokens, ThemeTokens, TypographyTokens};
pub use value::PropValue;
