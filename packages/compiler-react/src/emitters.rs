//! Per-capsule React emitters. Each produces a self-contained `.jsx` module
//! exporting one function component. Text children go through
//! [`escape::jsx_text`]; attribute values are emitted as `{"..."}` expressions
//! through [`escape::string_literal`].

use crate::escape::{self, string_literal};
use capsule_registry::EmitContext;
use capsule_schema::SourceFragment;

fn component_file(unit_name: &str, child_imports: &[String], jsx_lines: &[String]) -> String {
    let mut out = String::new();
    out.push_str("import React from \"react\";\n");
    for import in child_imports {
        out.push_str(&format!(
            "import {{ {} }} from \"./{}\";\n",
            import, import
        ));
    }
    out.push('\n');
    out.push_str(&format!("export function {}() {{\n", unit_name));
    out.push_str("  return (\n");
    for line in jsx_lines {
        out.push_str(&format!("    {}\n", line));
    }
    out.push_str("  );\n");
    out.push_str("}\n");
    out
}

fn child_imports(ctx: &EmitContext) -> Vec<String> {
    let mut seen = Vec::new();
    for child in ctx.children {
        if !seen.contains(&child.unit_name) {
            seen.push(child.unit_name.clone());
        }
    }
    seen
}

fn fragment(ctx: &EmitContext, imports: &[String], jsx_lines: &[String]) -> SourceFragment {
    SourceFragment::new(
        ctx.unit_name,
        component_file(ctx.unit_name, imports, jsx_lines),
    )
    .with_imports(&["react"])
}

pub fn button(ctx: &EmitContext) -> SourceFragment {
    let label = escape::jsx_text(ctx.string("label"));
    let variant = match ctx.string("variant") {
        "secondary" => "secondary",
        "outline" => "outline",
        _ => "primary",
    };
    let disabled = if ctx.boolean("disabled") { " disabled" } else { "" };

    let lines = vec![
        format!(
            "<button className=\"cap-button cap-button--{}\" type=\"button\"{}>",
            variant, disabled
        ),
        format!("  {}", label),
        "</button>".to_string(),
    ];
    fragment(ctx, &[], &lines)
}

pub fn text(ctx: &EmitContext) -> SourceFragment {
    let content = escape::jsx_text(ctx.string("content"));
    let (tag, modifier) = match ctx.string("size") {
        "heading" => ("h2", "heading"),
        "small" => ("span", "small"),
        _ => ("p", "body"),
    };

    let lines = vec![
        format!("<{} className=\"cap-text cap-text--{}\">", tag, modifier),
        format!("  {}", content),
        format!("</{}>", tag),
    ];
    fragment(ctx, &[], &lines)
}

pub fn input(ctx: &EmitContext) -> SourceFragment {
    let placeholder = string_literal(ctx.string("placeholder"));
    let input_type = if ctx.boolean("secure") { "password" } else { "text" };
    let label = ctx.string("label");

    let input_line = format!(
        "<input className=\"cap-input\" type=\"{}\" placeholder={{{}}} />",
        input_type, placeholder
    );

    let lines = if label.is_empty() {
        vec![input_line]
    } else {
        vec![
            "<label className=\"cap-field\">".to_string(),
            format!(
                "  <span className=\"cap-field__label\">{}</span>",
                escape::jsx_text(label)
            ),
            format!("  {}", input_line),
            "</label>".to_string(),
        ]
    };
    fragment(ctx, &[], &lines)
}

pub fn image(ctx: &EmitContext) -> SourceFragment {
    let src = string_literal(ctx.string("src"));
    let alt = string_literal(ctx.string("alt"));
    let fit = match ctx.string("fit") {
        "contain" => "contain",
        "fill" => "fill",
        _ => "cover",
    };

    let mut attrs = format!(
        "className=\"cap-image cap-image--{}\" src={{{}}} alt={{{}}}",
        fit, src, alt
    );
    let width = ctx.number("width", 0.0);
    let height = ctx.number("height", 0.0);
    if width > 0.0 || height > 0.0 {
        let mut style = Vec::new();
        if width > 0.0 {
            style.push(format!("width: {}", width as i64));
        }
        if height > 0.0 {
            style.push(format!("height: {}", height as i64));
        }
        attrs.push_str(&format!(" style={{{{ {} }}}}", style.join(", ")));
    }

    let lines = vec![format!("<img {} />", attrs)];
    fragment(ctx, &[], &lines)
}

pub fn stack(ctx: &EmitContext) -> SourceFragment {
    let direction = if ctx.string("direction") == "horizontal" {
        "horizontal"
    } else {
        "vertical"
    };
    let spacing = match ctx.string("spacing") {
        "xs" | "sm" | "lg" | "xl" => ctx.string("spacing"),
        _ => "md",
    };
    let align = match ctx.string("align") {
        "center" => "center",
        "end" => "end",
        _ => "start",
    };

    let imports = child_imports(ctx);
    let mut lines = vec![format!(
        "<div className=\"cap-stack cap-stack--{} cap-stack--spacing-{} cap-stack--align-{}\">",
        direction, spacing, align
    )];
    for child in ctx.children {
        lines.push(format!("  <{} />", child.unit_name));
    }
    lines.push("</div>".to_string());
    fragment(ctx, &imports, &lines)
}

pub fn card(ctx: &EmitContext) -> SourceFragment {
    let elevated = if ctx.boolean("elevated") {
        " cap-card--elevated"
    } else {
        ""
    };
    let padding = match ctx.string("padding") {
        "xs" | "sm" | "lg" | "xl" => ctx.string("padding"),
        _ => "md",
    };

    let imports = child_imports(ctx);
    let mut lines = vec![format!(
        "<section className=\"cap-card cap-card--padding-{}{}\">",
        padding, elevated
    )];
    for child in ctx.children {
        lines.push(format!("  <{} />", child.unit_name));
    }
    lines.push("</section>".to_string());
    fragment(ctx, &imports, &lines)
}

pub fn toggle(ctx: &EmitContext) -> SourceFragment {
    let label = escape::jsx_text(ctx.string("label"));
    let initial = if ctx.boolean("initial") { "true" } else { "false" };

    let body = format!(
        r#"import React, {{ useState }} from "react";

export function {unit}() {{
  const [checked, setChecked] = useState({initial});
  return (
    <label className="cap-toggle">
      <input
        type="checkbox"
        checked={{checked}}
        onChange={{(e) => setChecked(e.target.checked)}}
      />
      <span>{label}</span>
    </label>
  );
}}
"#,
        unit = ctx.unit_name,
        initial = initial,
        label = label,
    );

    SourceFragment::new(ctx.unit_name, body).with_imports(&["react"])
}
