//! Tauri project scaffold: web frontend entry plus the desktop shell
//! (`tauri.conf.json`, `src-tauri` Rust main and Cargo manifest as text).

use crate::escape::html_text;
use capsule_registry::ChildUnit;
use capsule_schema::{FileKind, ProjectFile};
use capsule_theme::ResolvedTheme;

pub fn component_path(unit_name: &str) -> String {
    format!("src/components/{}.js", unit_name)
}

pub fn dependencies() -> Vec<String> {
    vec!["@tauri-apps/api".to_string()]
}

pub fn scaffold(
    project_name: &str,
    root_units: &[ChildUnit],
    theme: &ResolvedTheme,
) -> Vec<ProjectFile> {
    vec![
        ProjectFile::new("package.json", package_json(project_name), FileKind::Manifest),
        ProjectFile::new("index.html", index_html(project_name), FileKind::Config),
        ProjectFile::new("src/main.js", main_js(root_units), FileKind::Entry),
        ProjectFile::new(
            "src/styles.css",
            capsule_theme::css::stylesheet(theme),
            FileKind::Style,
        ),
        ProjectFile::new(
            "src-tauri/tauri.conf.json",
            tauri_conf(project_name),
            FileKind::Config,
        ),
        ProjectFile::new("src-tauri/Cargo.toml", shell_cargo_toml(), FileKind::Config),
        ProjectFile::new("src-tauri/src/main.rs", shell_main_rs(), FileKind::Config),
    ]
}

fn package_json(project_name: &str) -> String {
    let name = project_name
        .to_lowercase()
        .replace(|c: char| !c.is_ascii_alphanumeric(), "-");
    format!(
        r#"{{
  "name": "{name}",
  "private": true,
  "version": "0.1.0",
  "type": "module",
  "scripts": {{
    "dev": "vite",
    "build": "vite build",
    "tauri": "tauri"
  }},
  "dependencies": {{
    "@tauri-apps/api": "^1.5.0"
  }},
  "devDependencies": {{
    "@tauri-apps/cli": "^1.5.0",
    "vite": "^5.0.0"
  }}
}}
"#
    )
}

fn index_html(project_name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{title}</title>
    <link rel="stylesheet" href="/src/styles.css" />
  </head>
  <body>
    <main id="app" class="cap-app"></main>
    <script type="module" src="/src/main.js"></script>
  </body>
</html>
"#,
        title = html_text(project_name)
    )
}

fn main_js(root_units: &[ChildUnit]) -> String {
    let mut out = String::new();

    let mut imported = Vec::new();
    for unit in root_units {
        if !imported.contains(&unit.unit_name) {
            imported.push(unit.unit_name.clone());
        }
    }
    for name in &imported {
        out.push_str(&format!(
            "import {{ {} }} from \"./components/{}.js\";\n",
            name, name
        ));
    }

    out.push('\n');
    out.push_str("const app = document.getElementById(\"app\");\n");
    for unit in root_units {
        out.push_str(&format!("app.appendChild({}());\n", unit.unit_name));
    }
    out
}

fn tauri_conf(project_name: &str) -> String {
    let title = project_name.replace('"', "");
    format!(
        r#"{{
  "build": {{
    "beforeDevCommand": "npm run dev",
    "beforeBuildCommand": "npm run build",
    "devPath": "http://localhost:5173",
    "distDir": "../dist"
  }},
  "package": {{
    "productName": "{title}",
    "version": "0.1.0"
  }},
  "tauri": {{
    "allowlist": {{
      "all": false
    }},
    "windows": [
      {{
        "title": "{title}",
        "width": 960,
        "height": 640,
        "resizable": true
      }}
    ],
    "security": {{
      "csp": "default-src 'self'"
    }}
  }}
}}
"#
    )
}

fn shell_cargo_toml() -> String {
    r#"[package]
name = "capsule-shell"
version = "0.1.0"
edition = "2021"

[build-dependencies]
tauri-build = { version = "1.5", features = [] }

[dependencies]
tauri = { version = "1.5", features = [] }
serde = { version = "1.0", features = ["derive"] }
serde_json = "1.0"
"#
    .to_string()
}

fn shell_main_rs() -> String {
    r#"#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    tauri::Builder::default()
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
"#
    .to_string()
}
