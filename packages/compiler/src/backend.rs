//! Per-target dispatch for scaffold synthesis, component file placement and
//! base dependencies. The four framework backends do the real work; the
//! remaining target identifiers get a minimal placeholder export.

use capsule_registry::ChildUnit;
use capsule_schema::{FileKind, ProjectFile, Target};
use capsule_theme::ResolvedTheme;

pub fn component_path(target: Target, unit_name: &str) -> String {
    match target {
        Target::IosSwiftui => capsule_compiler_swiftui::component_path(unit_name),
        Target::AndroidCompose => capsule_compiler_compose::component_path(unit_name),
        Target::WebReact => capsule_compiler_react::component_path(unit_name),
        Target::DesktopTauri => capsule_compiler_tauri::component_path(unit_name),
        Target::IosUikit => format!("Sources/Components/{}.swift", unit_name),
        Target::AndroidXml => format!("app/src/main/res/layout/{}.xml", unit_name.to_lowercase()),
        Target::DesktopElectron => format!("src/components/{}.js", unit_name),
    }
}

pub fn base_dependencies(target: Target) -> Vec<String> {
    match target {
        Target::IosSwiftui => capsule_compiler_swiftui::dependencies(),
        Target::AndroidCompose => capsule_compiler_compose::dependencies(),
        Target::WebReact => capsule_compiler_react::dependencies(),
        Target::DesktopTauri => capsule_compiler_tauri::dependencies(),
        Target::DesktopElectron => vec!["electron".to_string()],
        Target::IosUikit | Target::AndroidXml => Vec::new(),
    }
}

pub fn scaffold(
    target: Target,
    project_name: &str,
    root_units: &[ChildUnit],
    theme: &ResolvedTheme,
) -> Vec<ProjectFile> {
    match target {
        Target::IosSwiftui => capsule_compiler_swiftui::scaffold(project_name, root_units, theme),
        Target::AndroidCompose => {
            capsule_compiler_compose::scaffold(project_name, root_units, theme)
        }
        Target::WebReact => capsule_compiler_react::scaffold(project_name, root_units, theme),
        Target::DesktopTauri => capsule_compiler_tauri::scaffold(project_name, root_units, theme),
        Target::IosUikit | Target::AndroidXml | Target::DesktopElectron => {
            placeholder_scaffold(target, project_name, root_units)
        }
    }
}

/// Minimal export for targets without a full backend: a README naming the
/// target and every generated unit, so the archive is honest about what it
/// contains
fn placeholder_scaffold(
    target: Target,
    project_name: &str,
    root_units: &[ChildUnit],
) -> Vec<ProjectFile> {
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", project_name));
    out.push_str(&format!(
        "{} export. Component sources in this archive are placeholder\n\
         stubs; see the generation warnings for the capsule types that need a\n\
         native emitter.\n\n## Units\n\n",
        target.display_name()
    ));
    for unit in root_units {
        out.push_str(&format!("- {} ({})\n", unit.unit_name, unit.type_id));
    }

    vec![ProjectFile::new("README.md", out, FileKind::Config)]
}
