//! SwiftUI backend: emits one `View` struct per component instance plus an
//! app scaffold (`CapsuleApp.swift`, `ContentView.swift`, `Theme.swift`).

pub mod emitters;
pub mod escape;
pub mod scaffold;
pub mod style;

pub use scaffold::{component_path, dependencies, scaffold};
