//! Jetpack Compose backend: emits one `@Composable` function per component
//! instance plus a Gradle app scaffold (`MainActivity.kt`, `Theme.kt`,
//! build files).

pub mod emitters;
pub mod escape;
pub mod scaffold;
pub mod style;

pub use scaffold::{component_path, dependencies, scaffold};

/// Kotlin package all generated sources live under
pub const APP_PACKAGE: &str = "app.capsule";
