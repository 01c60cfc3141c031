//! SwiftUI project scaffold: app entry, content view and theme source.

use crate::style::{color_expr, num};
use capsule_common::pascal_case;
use capsule_registry::ChildUnit;
use capsule_schema::{FileKind, ProjectFile};
use capsule_theme::ResolvedTheme;

pub fn component_path(unit_name: &str) -> String {
    format!("Sources/Components/{}.swift", unit_name)
}

/// Package-level dependencies beyond the SDK; SwiftUI ships with the SDK
pub fn dependencies() -> Vec<String> {
    Vec::new()
}

/// Entry point, root content view and theme file. `root_units` lists one
/// entry per root instance in declared order — duplicates are intentional
/// usage references.
pub fn scaffold(
    project_name: &str,
    root_units: &[ChildUnit],
    theme: &ResolvedTheme,
) -> Vec<ProjectFile> {
    vec![
        ProjectFile::new(
            "Sources/CapsuleApp.swift",
            app_entry(project_name),
            FileKind::Entry,
        ),
        ProjectFile::new(
            "Sources/ContentView.swift",
            content_view(root_units),
            FileKind::Entry,
        ),
        ProjectFile::new("Sources/Theme.swift", theme_source(theme), FileKind::Style),
    ]
}

fn app_entry(project_name: &str) -> String {
    let app_name = pascal_case(project_name);
    format!(
        r#"import SwiftUI

@main
struct {app_name}App: App {{
    var body: some Scene {{
        WindowGroup {{
            ContentView()
        }}
    }}
}}
"#
    )
}

fn content_view(root_units: &[ChildUnit]) -> String {
    let mut out = String::new();
    out.push_str("import SwiftUI\n\n");
    out.push_str("struct ContentView: View {\n");
    out.push_str("    var body: some View {\n");
    out.push_str("        ScrollView {\n");
    out.push_str("            VStack(alignment: .leading, spacing: Theme.spacingLg) {\n");
    for unit in root_units {
        out.push_str(&format!("                {}()\n", unit.unit_name));
    }
    out.push_str("            }\n");
    out.push_str("            .padding(Theme.spacingMd)\n");
    out.push_str("        }\n");
    out.push_str("        .background(Theme.background)\n");
    out.push_str("    }\n");
    out.push_str("}\n");
    out
}

fn theme_source(theme: &ResolvedTheme) -> String {
    let c = &theme.colors;
    let s = &theme.spacing;
    let r = &theme.radius;
    let t = &theme.typography;

    format!(
        r#"import SwiftUI

/// Design tokens resolved from the project theme
enum Theme {{
    static let primary = {primary}
    static let secondary = {secondary}
    static let accent = {accent}
    static let background = {background}
    static let foreground = {foreground}
    static let surface = {surface}

    static let spacingXs: CGFloat = {sxs}
    static let spacingSm: CGFloat = {ssm}
    static let spacingMd: CGFloat = {smd}
    static let spacingLg: CGFloat = {slg}
    static let spacingXl: CGFloat = {sxl}

    static let radiusSm: CGFloat = {rsm}
    static let radiusMd: CGFloat = {rmd}
    static let radiusLg: CGFloat = {rlg}

    static let fontSmall: CGFloat = {fsmall}
    static let fontBase: CGFloat = {fbase}
    static let fontHeading: CGFloat = {fheading}
}}
"#,
        primary = color_expr(&c.primary),
        secondary = color_expr(&c.secondary),
        accent = color_expr(&c.accent),
        background = color_expr(&c.background),
        foreground = color_expr(&c.foreground),
        surface = color_expr(&c.surface),
        sxs = num(s.xs),
        ssm = num(s.sm),
        smd = num(s.md),
        slg = num(s.lg),
        sxl = num(s.xl),
        rsm = num(r.sm),
        rmd = num(r.md),
        rlg = num(r.lg),
        fsmall = num(t.small_size),
        fbase = num(t.base_size),
        fheading = num(t.heading_size),
    )
}
