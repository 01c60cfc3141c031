//! React backend: emits one function component per instance plus a Vite-style
//! app scaffold (`App.jsx`, `main.jsx`, `theme.css`, `package.json`).

pub mod emitters;
pub mod escape;
pub mod scaffold;

pub use scaffold::{component_path, dependencies, scaffold};
