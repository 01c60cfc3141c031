//! React project scaffold: Vite entry, root component, theme stylesheet and
//! package manifest.

use capsule_registry::ChildUnit;
use capsule_schema::{FileKind, ProjectFile};
use capsule_theme::ResolvedTheme;

pub fn component_path(unit_name: &str) -> String {
    format!("src/components/{}.jsx", unit_name)
}

pub fn dependencies() -> Vec<String> {
    vec!["react".to_string(), "react-dom".to_string()]
}

pub fn scaffold(
    project_name: &str,
    root_units: &[ChildUnit],
    theme: &ResolvedTheme,
) -> Vec<ProjectFile> {
    vec![
        ProjectFile::new("package.json", package_json(project_name), FileKind::Manifest),
        ProjectFile::new("index.html", index_html(project_name), FileKind::Config),
        ProjectFile::new("src/main.jsx", main_jsx(), FileKind::Entry),
        ProjectFile::new("src/App.jsx", app_jsx(root_units), FileKind::Entry),
        ProjectFile::new("src/theme.css", theme_css(theme), FileKind::Style),
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
    "preview": "vite preview"
  }},
  "dependencies": {{
    "react": "^18.2.0",
    "react-dom": "^18.2.0"
  }},
  "devDependencies": {{
    "@vitejs/plugin-react": "^4.2.0",
    "vite": "^5.0.0"
  }}
}}
"#
    )
}

fn index_html(project_name: &str) -> String {
    let title = project_name.replace('<', "&lt;").replace('>', "&gt;");
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{title}</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.jsx"></script>
  </body>
</html>
"#
    )
}

fn main_jsx() -> String {
    r#"import React from "react";
import ReactDOM from "react-dom/client";
import { App } from "./App";
import "./theme.css";

ReactDOM.createRoot(document.getElementById("root")).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>
);
"#
    .to_string()
}

fn app_jsx(root_units: &[ChildUnit]) -> String {
    let mut out = String::new();
    out.push_str("import React from \"react\";\n");

    let mut imported = Vec::new();
    for unit in root_units {
        if !imported.contains(&unit.unit_name) {
            imported.push(unit.unit_name.clone());
        }
    }
    for name in &imported {
        out.push_str(&format!(
            "import {{ {} }} from \"./components/{}\";\n",
            name, name
        ));
    }

    out.push('\n');
    out.push_str("export function App() {\n");
    out.push_str("  return (\n");
    out.push_str("    <main className=\"cap-app\">\n");
    for unit in root_units {
        out.push_str(&format!("      <{} />\n", unit.unit_name));
    }
    out.push_str("    </main>\n");
    out.push_str("  );\n");
    out.push_str("}\n");
    out
}

fn theme_css(theme: &ResolvedTheme) -> String {
    capsule_theme::css::stylesheet(theme)
}
