//! Fallback emitter: any `(type, target)` pair without a registered emitter
//! resolves here. A missing native capability degrades to a visibly-labeled
//! placeholder fragment rather than aborting the export; the compiler
//! surfaces the substitution as a machine-readable warning.

use capsule_compiler_compose::escape as kotlin;
use capsule_compiler_react::escape as jsx;
use capsule_compiler_swiftui::escape as swift;
use capsule_compiler_tauri::escape as js;
use capsule_registry::EmitContext;
use capsule_schema::{SourceFragment, Target};

fn xml_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn emit(target: Target, ctx: &EmitContext) -> SourceFragment {
    let type_id = ctx.type_id;
    match target {
        Target::IosSwiftui => swiftui_placeholder(ctx, type_id),
        Target::IosUikit => uikit_placeholder(ctx, type_id),
        Target::AndroidCompose => compose_placeholder(ctx, type_id),
        Target::AndroidXml => xml_placeholder(ctx, type_id),
        Target::WebReact => react_placeholder(ctx, type_id),
        Target::DesktopTauri | Target::DesktopElectron => js_placeholder(ctx, type_id),
    }
}

fn swiftui_placeholder(ctx: &EmitContext, type_id: &str) -> SourceFragment {
    let label = swift::string_literal(&format!("Unsupported component: {}", type_id));
    let body = format!(
        r#"import SwiftUI

struct {unit}: View {{
    var body: some View {{
        Text({label})
            .font(.system(size: 13))
            .foregroundColor(.secondary)
            .padding(8)
            .overlay(
                RoundedRectangle(cornerRadius: 4)
                    .strokeBorder(style: StrokeStyle(lineWidth: 1, dash: [4]))
                    .foregroundColor(.secondary)
            )
    }}
}}
"#,
        unit = ctx.unit_name,
        label = label,
    );
    SourceFragment::new(ctx.unit_name, body).with_imports(&["SwiftUI"])
}

fn uikit_placeholder(ctx: &EmitContext, type_id: &str) -> SourceFragment {
    let label = swift::string_literal(&format!("Unsupported component: {}", type_id));
    let body = format!(
        r#"import UIKit

final class {unit}: UILabel {{
    override init(frame: CGRect) {{
        super.init(frame: frame)
        text = {label}
        font = .systemFont(ofSize: 13)
        textColor = .secondaryLabel
        textAlignment = .center
    }}

    required init?(coder: NSCoder) {{
        fatalError("init(coder:) has not been implemented")
    }}
}}
"#,
        unit = ctx.unit_name,
        label = label,
    );
    SourceFragment::new(ctx.unit_name, body).with_imports(&["UIKit"])
}

fn compose_placeholder(ctx: &EmitContext, type_id: &str) -> SourceFragment {
    let label = kotlin::string_literal(&format!("Unsupported component: {}", type_id));
    let body = format!(
        r#"package app.capsule.ui.components

import androidx.compose.material3.Text
import androidx.compose.runtime.Composable

@Composable
fun {unit}() {{
    Text({label})
}}
"#,
        unit = ctx.unit_name,
        label = label,
    );
    SourceFragment::new(ctx.unit_name, body)
        .with_imports(&["androidx.compose.material3:material3"])
}

fn xml_placeholder(ctx: &EmitContext, type_id: &str) -> SourceFragment {
    let label = xml_escape(&format!("Unsupported component: {}", type_id));
    let body = format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<TextView xmlns:android="http://schemas.android.com/apk/res/android"
    android:layout_width="wrap_content"
    android:layout_height="wrap_content"
    android:text="{label}" />
"#,
        label = label,
    );
    SourceFragment::new(ctx.unit_name, body)
}

fn react_placeholder(ctx: &EmitContext, type_id: &str) -> SourceFragment {
    let label = jsx::jsx_text(&format!("Unsupported component: {}", type_id));
    let body = format!(
        r#"import React from "react";

export function {unit}() {{
  return <div className="cap-placeholder">{label}</div>;
}}
"#,
        unit = ctx.unit_name,
        label = label,
    );
    SourceFragment::new(ctx.unit_name, body).with_imports(&["react"])
}

fn js_placeholder(ctx: &EmitContext, type_id: &str) -> SourceFragment {
    let label = js::string_literal(&format!("Unsupported component: {}", type_id));
    let body = format!(
        r#"export function {unit}() {{
  const el = document.createElement("div");
  el.className = "cap-placeholder";
  el.textContent = {label};
  return el;
}}
"#,
        unit = ctx.unit_name,
        label = label,
    );
    SourceFragment::new(ctx.unit_name, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use capsule_theme::ResolvedTheme;
    use indexmap::IndexMap;

    #[test]
    fn test_placeholder_labels_the_missing_type_on_every_target() {
        let theme = ResolvedTheme::default();
        let values = IndexMap::new();
        let ctx = EmitContext {
            instance_id: "cap-9",
            type_id: "carousel",
            unit_name: "CarouselAb12Cd34",
            values: &values,
            children: &[],
            theme: &theme,
        };

        for target in Target::ALL {
            let frag = emit(target, &ctx);
            assert_eq!(frag.unit_name, "CarouselAb12Cd34");
            assert!(
                frag.body.contains("Unsupported component: carousel"),
                "missing label for {}",
                target
            );
        }
    }

    #[test]
    fn test_hostile_type_id_is_escaped() {
        let theme = ResolvedTheme::default();
        let values = IndexMap::new();
        let ctx = EmitContext {
            instance_id: "cap-9",
            type_id: "evil\"type",
            unit_name: "EvilType12345678",
            values: &values,
            children: &[],
            theme: &theme,
        };

        let frag = emit(Target::IosSwiftui, &ctx);
        assert!(frag.body.contains(r#"evil\"type"#));
    }
}
