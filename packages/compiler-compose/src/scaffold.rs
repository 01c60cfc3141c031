//! Compose project scaffold: activity entry, theme object and Gradle files.

use crate::style::{color_expr, num};
use crate::APP_PACKAGE;
use capsule_registry::ChildUnit;
use capsule_schema::{FileKind, ProjectFile};
use capsule_theme::ResolvedTheme;

pub fn component_path(unit_name: &str) -> String {
    format!(
        "app/src/main/java/{}/ui/components/{}.kt",
        APP_PACKAGE.replace('.', "/"),
        unit_name
    )
}

pub fn dependencies() -> Vec<String> {
    vec![
        "androidx.activity:activity-compose".to_string(),
        "androidx.compose.material3:material3".to_string(),
    ]
}

pub fn scaffold(
    project_name: &str,
    root_units: &[ChildUnit],
    theme: &ResolvedTheme,
) -> Vec<ProjectFile> {
    let pkg_dir = APP_PACKAGE.replace('.', "/");
    vec![
        ProjectFile::new(
            format!("app/src/main/java/{}/MainActivity.kt", pkg_dir),
            main_activity(root_units),
            FileKind::Entry,
        ),
        ProjectFile::new(
            format!("app/src/main/java/{}/ui/theme/Theme.kt", pkg_dir),
            theme_source(theme),
            FileKind::Style,
        ),
        ProjectFile::new(
            "app/build.gradle.kts",
            app_build_gradle(),
            FileKind::Config,
        ),
        ProjectFile::new(
            "settings.gradle.kts",
            settings_gradle(project_name),
            FileKind::Manifest,
        ),
    ]
}

fn main_activity(root_units: &[ChildUnit]) -> String {
    let mut out = String::new();
    out.push_str(&format!("package {}\n\n", APP_PACKAGE));
    out.push_str("import android.os.Bundle\n");
    out.push_str("import androidx.activity.ComponentActivity\n");
    out.push_str("import androidx.activity.compose.setContent\n");
    out.push_str("import androidx.compose.foundation.layout.*\n");
    out.push_str("import androidx.compose.foundation.rememberScrollState\n");
    out.push_str("import androidx.compose.foundation.verticalScroll\n");
    out.push_str("import androidx.compose.material3.Surface\n");
    out.push_str("import androidx.compose.runtime.Composable\n");
    out.push_str("import androidx.compose.ui.Modifier\n");
    out.push_str(&format!("import {}.ui.components.*\n", APP_PACKAGE));
    out.push_str(&format!("import {}.ui.theme.Theme\n", APP_PACKAGE));
    out.push('\n');
    out.push_str("class MainActivity : ComponentActivity() {\n");
    out.push_str("    override fun onCreate(savedInstanceState: Bundle?) {\n");
    out.push_str("        super.onCreate(savedInstanceState)\n");
    out.push_str("        setContent {\n");
    out.push_str("            CapsuleRoot()\n");
    out.push_str("        }\n");
    out.push_str("    }\n");
    out.push_str("}\n\n");
    out.push_str("@Composable\n");
    out.push_str("fun CapsuleRoot() {\n");
    out.push_str("    Surface(color = Theme.Background) {\n");
    out.push_str("        Column(\n");
    out.push_str("            modifier = Modifier\n");
    out.push_str("                .fillMaxSize()\n");
    out.push_str("                .verticalScroll(rememberScrollState())\n");
    out.push_str("                .padding(Theme.SpacingMd),\n");
    out.push_str("            verticalArrangement = Arrangement.spacedBy(Theme.SpacingLg)\n");
    out.push_str("        ) {\n");
    for unit in root_units {
        out.push_str(&format!("            {}()\n", unit.unit_name));
    }
    out.push_str("        }\n");
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
        r#"package {pkg}.ui.theme

import androidx.compose.ui.graphics.Color
import androidx.compose.ui.unit.dp
import androidx.compose.ui.unit.sp

/// Design tokens resolved from the project theme
object Theme {{
    val Primary = {primary}
    val Secondary = {secondary}
    val Accent = {accent}
    val Background = {background}
    val Foreground = {foreground}
    val Surface = {surface}

    val SpacingXs = {sxs}.dp
    val SpacingSm = {ssm}.dp
    val SpacingMd = {smd}.dp
    val SpacingLg = {slg}.dp
    val SpacingXl = {sxl}.dp

    val RadiusSm = {rsm}.dp
    val RadiusMd = {rmd}.dp
    val RadiusLg = {rlg}.dp

    val FontSmall = {fsmall}.sp
    val FontBase = {fbase}.sp
    val FontHeading = {fheading}.sp
}}
"#,
        pkg = APP_PACKAGE,
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

fn app_build_gradle() -> String {
    format!(
        r#"plugins {{
    id("com.android.application")
    id("org.jetbrains.kotlin.android")
}}

android {{
    namespace = "{pkg}"
    compileSdk = 34

    defaultConfig {{
        applicationId = "{pkg}"
        minSdk = 26
        targetSdk = 34
        versionCode = 1
        versionName = "1.0"
    }}

    buildFeatures {{
        compose = true
    }}
}}

dependencies {{
    implementation(platform("androidx.compose:compose-bom:2024.02.00"))
    implementation("androidx.activity:activity-compose")
    implementation("androidx.compose.material3:material3")
    implementation("io.coil-kt:coil-compose:2.5.0")
}}
"#,
        pkg = APP_PACKAGE
    )
}

fn settings_gradle(project_name: &str) -> String {
    format!(
        r#"rootProject.name = "{}"
include(":app")
"#,
        project_name.replace('"', "")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaffold_contains_gradle_and_activity() {
        let files = scaffold("demo", &[], &ResolvedTheme::default());
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();

        assert!(paths.contains(&"app/src/main/java/app/capsule/MainActivity.kt"));
        assert!(paths.contains(&"app/build.gradle.kts"));
        assert!(paths.contains(&"settings.gradle.kts"));
    }

    #[test]
    fn test_theme_uses_argb_literals() {
        let files = scaffold("demo", &[], &ResolvedTheme::default());
        let theme = files
            .iter()
            .find(|f| f.path.ends_with("Theme.kt"))
            .unwrap();

        assert!(theme.content.contains("val Primary = Color(0xFF3B82F6)"));
        assert!(theme.content.contains("val SpacingMd = 16.dp"));
    }
}
