//! Tauri desktop backend: a vanilla-JS web frontend (one DOM-factory module
//! per component instance) plus the Tauri shell (`tauri.conf.json`, a Rust
//! main and its Cargo manifest, emitted as text).

pub mod emitters;
pub mod escape;
pub mod scaffold;

pub use scaffold::{component_path, dependencies, scaffold};
