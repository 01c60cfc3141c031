//! # Capsule Project Compiler
//!
//! Turns a persisted project (component instance trees + theme tokens) into a
//! buildable file set per target.
//!
//! ## Pipeline
//!
//! For each requested target:
//!
//! 1. **Validate** every instance against the registry. Hard errors
//!    (missing required property, type mismatch) are collected across the
//!    whole project and fail the target fast — no partial output.
//! 2. **Resolve** the theme once.
//! 3. **Emit** depth-first in declared sibling order, children before parents
//!    so containers can reference child unit names. Unknown `(type, target)`
//!    pairs route to the fallback emitter and surface a warning.
//! 4. **Deduplicate** fragments by unit name, preserving first-seen order.
//! 5. **Assemble** the scaffold (entry, theme, config, dependency manifest)
//!    and per-unit component files; any path collision aborts the target.
//!
//! ## Determinism Contract
//!
//! **INVARIANT: generation is fully deterministic.**
//!
//! For a fixed `(project, target)` pair, `generate()` MUST produce
//! byte-identical manifests on every invocation:
//!
//! - All maps are insertion-ordered (`IndexMap`), never `RandomState` order
//! - Unit names digest type id, canonical values and child names via CRC32
//! - No time/random/environment dependence anywhere in the pipeline
//!
//! Multi-target generation processes each target independently; one target's
//! failure never aborts its siblings.

pub mod api;
pub mod backend;
pub mod builtins;
pub mod compiler;
pub mod error;
pub mod fallback;
pub mod naming;
pub mod report;

pub use api::{
    GenerateMultiRequest, GenerateMultiResponse, GenerateRequest, GenerateResponse, GeneratedFile,
};
pub use builtins::builtin_registry;
pub use compiler::ProjectCompiler;
pub use error::GenerateError;
pub use report::{
    ExportReport, ExportSummary, GenerateWarning, MultiExport, TargetExport, TargetRun,
};
