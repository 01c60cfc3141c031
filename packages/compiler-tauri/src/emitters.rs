//! Per-capsule Tauri frontend emitters. Each produces a `.js` module
//! exporting one DOM-factory function. Values are assigned through DOM
//! property setters, so only JS string-literal escaping applies.

use crate::escape::string_literal;
use capsule_registry::EmitContext;
use capsule_schema::SourceFragment;

fn module_file(unit_name: &str, child_imports: &[String], body_lines: &[String]) -> String {
    let mut out = String::new();
    for import in child_imports {
        out.push_str(&format!(
            "import {{ {} }} from \"./{}.js\";\n",
            import, import
        ));
    }
    if !child_imports.is_empty() {
        out.push('\n');
    }
    out.push_str(&format!("export function {}() {{\n", unit_name));
    for line in body_lines {
        out.push_str(&format!("  {}\n", line));
    }
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

fn fragment(ctx: &EmitContext, imports: &[String], body_lines: &[String]) -> SourceFragment {
    SourceFragment::new(ctx.unit_name, module_file(ctx.unit_name, imports, body_lines))
}

pub fn button(ctx: &EmitContext) -> SourceFragment {
    let variant = match ctx.string("variant") {
        "secondary" => "secondary",
        "outline" => "outline",
        _ => "primary",
    };

    let mut lines = vec![
        "const el = document.createElement(\"button\");".to_string(),
        format!(
            "el.className = \"cap-button cap-button--{}\";",
            variant
        ),
        "el.type = \"button\";".to_string(),
        format!("el.textContent = {};", string_literal(ctx.string("label"))),
    ];
    if ctx.boolean("disabled") {
        lines.push("el.disabled = true;".to_string());
    }
    lines.push("return el;".to_string());

    fragment(ctx, &[], &lines)
}

pub fn text(ctx: &EmitContext) -> SourceFragment {
    let (tag, modifier) = match ctx.string("size") {
        "heading" => ("h2", "heading"),
        "small" => ("span", "small"),
        _ => ("p", "body"),
    };

    let lines = vec![
        format!("const el = document.createElement(\"{}\");", tag),
        format!("el.className = \"cap-text cap-text--{}\";", modifier),
        format!("el.textContent = {};", string_literal(ctx.string("content"))),
        "return el;".to_string(),
    ];
    fragment(ctx, &[], &lines)
}

pub fn input(ctx: &EmitContext) -> SourceFragment {
    let input_type = if ctx.boolean("secure") { "password" } else { "text" };
    let label = ctx.string("label");

    let mut lines = vec![
        "const el = document.createElement(\"label\");".to_string(),
        "el.className = \"cap-field\";".to_string(),
    ];
    if !label.is_empty() {
        lines.push("const caption = document.createElement(\"span\");".to_string());
        lines.push("caption.className = \"cap-field__label\";".to_string());
        lines.push(format!("caption.textContent = {};", string_literal(label)));
        lines.push("el.appendChild(caption);".to_string());
    }
    lines.push("const input = document.createElement(\"input\");".to_string());
    lines.push("input.className = \"cap-input\";".to_string());
    lines.push(format!("input.type = \"{}\";", input_type));
    lines.push(format!(
        "input.placeholder = {};",
        string_literal(ctx.string("placeholder"))
    ));
    lines.push("el.appendChild(input);".to_string());
    lines.push("return el;".to_string());

    fragment(ctx, &[], &lines)
}

pub fn image(ctx: &EmitContext) -> SourceFragment {
    let fit = match ctx.string("fit") {
        "contain" => "contain",
        "fill" => "fill",
        _ => "cover",
    };

    let mut lines = vec![
        "const el = document.createElement(\"img\");".to_string(),
        format!("el.className = \"cap-image cap-image--{}\";", fit),
        format!("el.src = {};", string_literal(ctx.string("src"))),
        format!("el.alt = {};", string_literal(ctx.string("alt"))),
    ];
    let width = ctx.number("width", 0.0);
    let height = ctx.number("height", 0.0);
    if width > 0.0 {
        lines.push(format!("el.style.width = \"{}px\";", width as i64));
    }
    if height > 0.0 {
        lines.push(format!("el.style.height = \"{}px\";", height as i64));
    }
    lines.push("return el;".to_string());

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
    let mut lines = vec![
        "const el = document.createElement(\"div\");".to_string(),
        format!(
            "el.className = \"cap-stack cap-stack--{} cap-stack--spacing-{} cap-stack--align-{}\";",
            direction, spacing, align
        ),
    ];
    for child in ctx.children {
        lines.push(format!("el.appendChild({}());", child.unit_name));
    }
    lines.push("return el;".to_string());
    fragment(ctx, &imports, &lines)
}

pub fn card(ctx: &EmitContext) -> SourceFragment {
    let padding = match ctx.string("padding") {
        "xs" | "sm" | "lg" | "xl" => ctx.string("padding"),
        _ => "md",
    };
    let mut class = format!("cap-card cap-card--padding-{}", padding);
    if ctx.boolean("elevated") {
        class.push_str(" cap-card--elevated");
    }

    let imports = child_imports(ctx);
    let mut lines = vec![
        "const el = document.createElement(\"section\");".to_string(),
        format!("el.className = \"{}\";", class),
    ];
    for child in ctx.children {
        lines.push(format!("el.appendChild({}());", child.unit_name));
    }
    lines.push("return el;".to_string());
    fragment(ctx, &imports, &lines)
}

pub fn toggle(ctx: &EmitContext) -> SourceFragment {
    let initial = if ctx.boolean("initial") { "true" } else { "false" };

    let lines = vec![
        "const el = document.createElement(\"label\");".to_string(),
        "el.className = \"cap-toggle\";".to_string(),
        "const input = document.createElement(\"input\");".to_string(),
        "input.type = \"checkbox\";".to_string(),
        format!("input.checked = {};", initial),
        "const caption = document.createElement(\"span\");".to_string(),
        format!("caption.textContent = {};", string_literal(ctx.string("label"))),
        "el.append(input, caption);".to_string(),
        "return el;".to_string(),
    ];
    fragment(ctx, &[], &lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use capsule_schema::PropValue;
    use capsule_theme::ResolvedTheme;
    use indexmap::IndexMap;

    fn simple_ctx<'a>(
        values: &'a IndexMap<String, PropValue>,
        theme: &'a ResolvedTheme,
    ) -> EmitContext<'a> {
        EmitContext {
            instance_id: "cap-1",
            type_id: "test",
            unit_name: "ButtonAb12Cd34",
            values,
            children: &[],
            theme,
        }
    }

    #[test]
    fn test_button_module_uses_text_content() {
        let theme = ResolvedTheme::default();
        let mut values = IndexMap::new();
        values.insert("label".to_string(), PropValue::from("Sign In"));
        let frag = button(&simple_ctx(&values, &theme));

        assert!(frag.body.contains("export function ButtonAb12Cd34()"));
        assert!(frag.body.contains("el.textContent = \"Sign In\";"));
        // No innerHTML anywhere: values never enter an HTML parsing context
        assert!(!frag.body.contains("innerHTML"));
    }

    #[test]
    fn test_hostile_label_stays_in_string_literal() {
        let theme = ResolvedTheme::default();
        let mut values = IndexMap::new();
        values.insert(
            "label".to_string(),
            PropValue::from("\";alert(1);//"),
        );
        let frag = button(&simple_ctx(&values, &theme));

        assert!(frag.body.contains(r#"el.textContent = "\";alert(1);//";"#));
    }
}
